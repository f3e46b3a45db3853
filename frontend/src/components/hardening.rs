use bsod_guide_shared::layout::ListRegion;
use yew::prelude::*;

use super::section_header::SectionHeader;

#[derive(Properties, PartialEq, Clone)]
pub struct HardeningSectionProps {
    pub region: ListRegion<&'static str>,
}

#[function_component(HardeningSection)]
pub fn hardening_section(props: &HardeningSectionProps) -> Html {
    let region = &props.region;

    html! {
        <section class="section">
            <SectionHeader heading={region.heading} badge={region.badge} />
            <div class="timeline">
                { for region.blocks.iter().map(|action| html! {
                    <article key={*action} class="timeline-step">
                        <p>{ *action }</p>
                    </article>
                }) }
            </div>
        </section>
    }
}
