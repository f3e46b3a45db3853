use bsod_guide_shared::layout::{ListRegion, ResourceBlock};
use yew::prelude::*;

use super::section_header::SectionHeader;

#[derive(Properties, PartialEq, Clone)]
pub struct ResourceCardProps {
    pub link: ResourceBlock,
}

#[function_component(ResourceCard)]
pub fn resource_card(props: &ResourceCardProps) -> Html {
    let link = props.link;

    html! {
        <a href={link.href} target={link.target} rel={link.rel} class="resource-card">
            <strong>{ link.title }</strong>
            <p>{ link.description }</p>
            <span style="color: #93c5fd; font-size: 0.9rem;">{ link.indicator }</span>
        </a>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResourcesSectionProps {
    pub region: ListRegion<ResourceBlock>,
}

#[function_component(ResourcesSection)]
pub fn resources_section(props: &ResourcesSectionProps) -> Html {
    let region = &props.region;

    html! {
        <section class="section">
            <SectionHeader heading={region.heading} badge={region.badge} />
            <div class="resources-grid">
                { for region.blocks.iter().map(|link| html! {
                    <ResourceCard key={link.href} link={*link} />
                }) }
            </div>
        </section>
    }
}
