use bsod_guide_shared::layout::{ListRegion, StopCodeBlock};
use yew::prelude::*;

use super::section_header::SectionHeader;

#[derive(Properties, PartialEq, Clone)]
pub struct CheatSheetSectionProps {
    pub region: ListRegion<StopCodeBlock>,
}

#[function_component(CheatSheetSection)]
pub fn cheat_sheet_section(props: &CheatSheetSectionProps) -> Html {
    let region = &props.region;

    html! {
        <section class="section">
            <SectionHeader heading={region.heading} badge={region.badge} />
            <div class="resources-grid">
                { for region.blocks.iter().map(|entry| html! {
                    <article key={entry.code} class="resource-card">
                        <strong>{ entry.code }</strong>
                        <p>{ entry.advice }</p>
                    </article>
                }) }
            </div>
        </section>
    }
}
