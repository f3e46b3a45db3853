use bsod_guide_shared::layout::FooterRegion;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GuideFooterProps {
    pub region: FooterRegion,
}

#[function_component(GuideFooter)]
pub fn guide_footer(props: &GuideFooterProps) -> Html {
    html! {
        <footer class="footer">
            { for props.region.notes.iter().map(|note| html! {
                <div key={note.heading}>
                    <strong>{ note.heading }</strong>
                    <p style="margin: 0.4rem 0 0; color: rgba(203, 213, 225, 0.78);">
                        { note.body }
                    </p>
                </div>
            }) }
        </footer>
    }
}
