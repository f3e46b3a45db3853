use bsod_guide_shared::layout::{HeroRegion, QuickCheckBlock};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuickCheckItemProps {
    pub block: QuickCheckBlock,
}

#[function_component(QuickCheckItem)]
pub fn quick_check_item(props: &QuickCheckItemProps) -> Html {
    let QuickCheckBlock {
        check,
        emphasized,
    } = props.block;

    html! {
        <li class={classes!("quick-check", emphasized.then_some("quick-check-featured"))}>
            <strong>{ check.title }</strong>
            <p style="margin: 0.35rem 0 0; color: rgba(203, 213, 225, 0.8);">
                { check.description }
            </p>
            <em style="color: #60a5fa; font-style: normal;">{ check.highlight }</em>
        </li>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HeroSectionProps {
    pub region: HeroRegion,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let hero = &props.region;

    html! {
        <section class="hero">
            <article class="hero-card">
                <h1 class="hero-title">
                    { hero.title_lead }<span>{ hero.title_emphasis }</span>{ hero.title_tail }
                </h1>
                <p class="hero-summary">{ hero.summary }</p>
            </article>
            <article class="hero-card">
                <h2 class="hero-title" style="font-size: clamp(1.8rem, 4vw, 2.4rem);">
                    { hero.checklist_heading }
                </h2>
                <ul style="list-style: none; margin: 0; padding: 0; display: grid; gap: 1rem;">
                    { for hero.checklist().map(|block| html! {
                        <QuickCheckItem key={block.check.title} block={*block} />
                    }) }
                </ul>
            </article>
        </section>
    }
}
