//! Standalone HTML rendering of a [`Layout`].
//!
//! Markup matches the browser app: same classes, same element nesting, same
//! inline styles, so one stylesheet serves both.

use bsod_guide_shared::layout::{
    FooterRegion, HeroRegion, ListRegion, QuickCheckBlock, ResourceBlock, StepBlock,
    StopCodeBlock,
};
use bsod_guide_shared::{Layout, Region};

/// Document-level settings for [`render_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// `<html lang>` value.
    pub lang: String,
    /// Optional stylesheet href.
    pub stylesheet: Option<String>,
    /// Optional canonical URL.
    pub canonical_url: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            stylesheet: None,
            canonical_url: None,
        }
    }
}

// ---------------------------------------------------------------------------
// HTML escaping
// ---------------------------------------------------------------------------

/// Escape text content.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value.
pub fn html_attr_escape(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

fn render_section_header(out: &mut String, heading: &str, badge: &str) {
    out.push_str(&format!(
        r#"<header class="section-header"><h2>{}</h2><span class="badge">{}</span></header>"#,
        html_escape(heading),
        html_escape(badge),
    ));
}

fn render_quick_check(out: &mut String, block: &QuickCheckBlock) {
    let class = if block.emphasized { "quick-check quick-check-featured" } else { "quick-check" };
    out.push_str(&format!(
        r#"<li class="{class}"><strong>{title}</strong><p style="margin: 0.35rem 0 0; color: rgba(203, 213, 225, 0.8);">{description}</p><em style="color: #60a5fa; font-style: normal;">{highlight}</em></li>"#,
        class = class,
        title = html_escape(block.check.title),
        description = html_escape(block.check.description),
        highlight = html_escape(block.check.highlight),
    ));
}

fn render_hero(out: &mut String, hero: &HeroRegion) {
    out.push_str(&format!(
        r#"<section class="hero"><article class="hero-card"><h1 class="hero-title">{}<span>{}</span>{}</h1><p class="hero-summary">{}</p></article>"#,
        html_escape(hero.title_lead),
        html_escape(hero.title_emphasis),
        html_escape(hero.title_tail),
        html_escape(hero.summary),
    ));
    out.push_str(&format!(
        r#"<article class="hero-card"><h2 class="hero-title" style="font-size: clamp(1.8rem, 4vw, 2.4rem);">{}</h2>"#,
        html_escape(hero.checklist_heading),
    ));
    out.push_str(
        r#"<ul style="list-style: none; margin: 0; padding: 0; display: grid; gap: 1rem;">"#,
    );
    for block in hero.checklist() {
        render_quick_check(out, block);
    }
    out.push_str("</ul></article></section>");
}

fn render_step(out: &mut String, step: &StepBlock) {
    out.push_str(&format!(
        r#"<article class="timeline-step"><h3>{}</h3><p>{}</p>"#,
        html_escape(step.title),
        html_escape(step.description),
    ));
    for sublist in &step.sublists {
        out.push_str(&format!(r#"<ul class="substeps" data-list="{}">"#, sublist.kind.slug()));
        for entry in sublist.entries {
            out.push_str(&format!("<li>{}</li>", html_escape(entry)));
        }
        out.push_str("</ul>");
    }
    out.push_str("</article>");
}

fn render_timeline(out: &mut String, region: &ListRegion<StepBlock>) {
    out.push_str(r#"<section class="section">"#);
    render_section_header(out, region.heading, region.badge);
    out.push_str(r#"<div class="timeline">"#);
    for step in &region.blocks {
        render_step(out, step);
    }
    out.push_str("</div></section>");
}

fn render_cheat_sheet(out: &mut String, region: &ListRegion<StopCodeBlock>) {
    out.push_str(r#"<section class="section">"#);
    render_section_header(out, region.heading, region.badge);
    out.push_str(r#"<div class="resources-grid">"#);
    for entry in &region.blocks {
        out.push_str(&format!(
            r#"<article class="resource-card"><strong>{}</strong><p>{}</p></article>"#,
            html_escape(entry.code),
            html_escape(entry.advice),
        ));
    }
    out.push_str("</div></section>");
}

fn render_hardening(out: &mut String, region: &ListRegion<&'static str>) {
    out.push_str(r#"<section class="section">"#);
    render_section_header(out, region.heading, region.badge);
    out.push_str(r#"<div class="timeline">"#);
    for action in &region.blocks {
        out.push_str(&format!(
            r#"<article class="timeline-step"><p>{}</p></article>"#,
            html_escape(action)
        ));
    }
    out.push_str("</div></section>");
}

fn render_resources(out: &mut String, region: &ListRegion<ResourceBlock>) {
    out.push_str(r#"<section class="section">"#);
    render_section_header(out, region.heading, region.badge);
    out.push_str(r#"<div class="resources-grid">"#);
    for link in &region.blocks {
        out.push_str(&format!(
            r#"<a href="{href}" target="{target}" rel="{rel}" class="resource-card"><strong>{title}</strong><p>{description}</p><span style="color: #93c5fd; font-size: 0.9rem;">{indicator}</span></a>"#,
            href = html_attr_escape(link.href),
            target = html_attr_escape(link.target),
            rel = html_attr_escape(link.rel),
            title = html_escape(link.title),
            description = html_escape(link.description),
            indicator = html_escape(link.indicator),
        ));
    }
    out.push_str("</div></section>");
}

fn render_footer(out: &mut String, footer: &FooterRegion) {
    out.push_str(r#"<footer class="footer">"#);
    for note in &footer.notes {
        out.push_str(&format!(
            r#"<div><strong>{}</strong><p style="margin: 0.4rem 0 0; color: rgba(203, 213, 225, 0.78);">{}</p></div>"#,
            html_escape(note.heading),
            html_escape(note.body),
        ));
    }
    out.push_str("</footer>");
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Render the `<main>` element: every region, in layout order.
pub fn render_main(layout: &Layout) -> String {
    let mut out = String::from("<main>");
    for region in &layout.regions {
        out.push('\n');
        match region {
            Region::Hero(hero) => render_hero(&mut out, hero),
            Region::Timeline(region) => render_timeline(&mut out, region),
            Region::CheatSheet(region) => render_cheat_sheet(&mut out, region),
            Region::Hardening(region) => render_hardening(&mut out, region),
            Region::Resources(region) => render_resources(&mut out, region),
            Region::Footer(footer) => render_footer(&mut out, footer),
        }
    }
    out.push_str("\n</main>");
    out
}

/// Render a complete HTML5 document.
pub fn render_document(layout: &Layout, options: &RenderOptions) -> String {
    let hero = layout.hero();
    let title = hero.map(HeroRegion::title).unwrap_or_default();
    let description = hero.map(|hero| hero.summary).unwrap_or_default();

    let mut extra_head = String::new();
    if let Some(canonical) = options.canonical_url.as_deref() {
        extra_head.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\" />\n",
            html_attr_escape(canonical)
        ));
    }
    if let Some(stylesheet) = options.stylesheet.as_deref() {
        extra_head.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\" />\n",
            html_attr_escape(stylesheet)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
<meta name="description" content="{description}" />
<meta property="og:title" content="{og_title}" />
<meta property="og:type" content="article" />
{extra_head}</head>
<body>
{main}
</body>
</html>
"#,
        lang = html_attr_escape(&options.lang),
        title = html_escape(&title),
        description = html_attr_escape(description),
        og_title = html_attr_escape(&title),
        extra_head = extra_head,
        main = render_main(layout),
    )
}
