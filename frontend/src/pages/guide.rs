use bsod_guide_shared::{Guide, Layout, Region};
use yew::prelude::*;

use crate::{
    components::{
        cheat_sheet::CheatSheetSection, footer::GuideFooter, hardening::HardeningSection,
        hero::HeroSection, resources::ResourcesSection, timeline::TimelineSection,
    },
    seo,
};

fn render_region(region: &Region) -> Html {
    match region {
        Region::Hero(hero) => html! { <HeroSection region={hero.clone()} /> },
        Region::Timeline(timeline) => html! { <TimelineSection region={timeline.clone()} /> },
        Region::CheatSheet(sheet) => html! { <CheatSheetSection region={sheet.clone()} /> },
        Region::Hardening(actions) => html! { <HardeningSection region={actions.clone()} /> },
        Region::Resources(links) => html! { <ResourcesSection region={links.clone()} /> },
        Region::Footer(footer) => html! { <GuideFooter region={footer.clone()} /> },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GuidePageProps {
    pub guide: Guide,
}

#[function_component(GuidePage)]
pub fn guide_page(props: &GuidePageProps) -> Html {
    let layout = use_memo(props.guide, Layout::build);

    {
        let layout = layout.clone();
        use_effect_with(props.guide, move |_| {
            if let Some(hero) = layout.hero() {
                seo::apply_guide_seo(&hero.title(), hero.summary);
            }
        });
    }

    html! {
        <main>
            { for layout.regions.iter().map(render_region) }
        </main>
    }
}
