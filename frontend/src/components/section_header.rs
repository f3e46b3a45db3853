use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SectionHeaderProps {
    pub heading: AttrValue,
    pub badge: AttrValue,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <header class="section-header">
            <h2>{ props.heading.clone() }</h2>
            <span class="badge">{ props.badge.clone() }</span>
        </header>
    }
}
