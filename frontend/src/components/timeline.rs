use bsod_guide_shared::layout::{ListRegion, StepBlock, Sublist};
use yew::prelude::*;

use super::section_header::SectionHeader;

fn sublist(list: &Sublist) -> Html {
    html! {
        <ul class="substeps" data-list={list.kind.slug()}>
            { for list.entries.iter().map(|entry| html! { <li key={*entry}>{ *entry }</li> }) }
        </ul>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TimelineStepProps {
    pub step: StepBlock,
}

#[function_component(TimelineStep)]
pub fn timeline_step(props: &TimelineStepProps) -> Html {
    let step = &props.step;

    html! {
        <article class="timeline-step">
            <h3>{ step.title }</h3>
            <p>{ step.description }</p>
            { for step.sublists.iter().map(sublist) }
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TimelineSectionProps {
    pub region: ListRegion<StepBlock>,
}

#[function_component(TimelineSection)]
pub fn timeline_section(props: &TimelineSectionProps) -> Html {
    let region = &props.region;

    html! {
        <section class="section">
            <SectionHeader heading={region.heading} badge={region.badge} />
            <div class="timeline">
                { for region.blocks.iter().map(|step| html! {
                    <TimelineStep key={step.title} step={step.clone()} />
                }) }
            </div>
        </section>
    }
}
