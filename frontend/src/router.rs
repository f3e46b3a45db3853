use bsod_guide_shared::Guide;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{config, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, guide: Guide) -> Html {
    match route {
        Route::Home => html! { <pages::guide::GuidePage guide={guide} /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppRouterProps {
    pub guide: Guide,
}

#[function_component(AppRouter)]
pub fn app_router(props: &AppRouterProps) -> Html {
    let guide = props.guide;

    html! {
        <BrowserRouter basename={config::router_basename()}>
            <Switch<Route> render={move |route: Route| switch(route, guide)} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, History, MemoryHistory};

    use super::*;

    #[derive(Properties, PartialEq)]
    struct AtPathProps {
        path: AttrValue,
    }

    /// Same switch as `AppRouter`, on an in-memory history.
    #[function_component(AtPath)]
    fn at_path(props: &AtPathProps) -> Html {
        let guide = Guide::builtin().expect("builtin content");
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(props.path.to_string());

        html! {
            <Router history={history}>
                <Switch<Route> render={move |route: Route| switch(route, guide)} />
            </Router>
        }
    }

    fn render_at(path: &'static str) -> String {
        block_on(
            LocalServerRenderer::<AtPath>::with_props(AtPathProps {
                path: AttrValue::Static(path),
            })
            .hydratable(false)
            .render(),
        )
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn not_found_page_links_back_home() {
        let html = render_at("/no-such-page");

        assert!(html.contains("404 - Page not found"), "{html}");
        assert!(html.contains("Back to the troubleshooting guide"), "{html}");
        assert!(html.contains("href=\"/\""), "{html}");
        assert!(!html.contains("Quick Response Checklist"), "{html}");
    }

    #[test]
    fn root_path_renders_the_guide() {
        let html = render_at("/");

        assert!(html.contains("quick-check-featured"), "{html}");
        assert!(!html.contains("404 - Page not found"), "{html}");
    }
}
