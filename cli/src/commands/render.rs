//! `render`: write the guide as an HTML document.

use std::path::Path;

use anyhow::Result;
use bsod_guide_shared::Layout;

use crate::{
    html::{render_document, RenderOptions},
    utils::write_output,
};

/// Render the built-in guide to `out` (stdout when `None`).
pub fn run(out: Option<&Path>, options: &RenderOptions) -> Result<()> {
    let guide = super::load_guide()?;
    let layout = Layout::build(&guide);
    let document = render_document(&layout, options);

    tracing::debug!(
        lang = %options.lang,
        canonical = options.canonical_url.as_deref().unwrap_or("-"),
        "rendered guide document"
    );
    write_output(out, &document)
}
