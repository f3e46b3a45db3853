//! Browser app for the BSOD troubleshooting guide.

mod components;
mod config;
mod pages;
mod router;
mod seo;

use bsod_guide_shared::Guide;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
struct AppProps {
    guide: Guide,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <>
            <router::AppRouter guide={props.guide} />
        </>
    }
}

fn main() {
    // Broken content is an authoring mistake; refuse to mount rather than draw half a page.
    let guide = match Guide::builtin() {
        Ok(guide) => guide,
        Err(err) => {
            web_sys::console::error_1(&format!("Invalid guide content: {err}").into());
            return;
        },
    };

    yew::Renderer::<App>::with_props(AppProps {
        guide,
    })
    .render();
}
