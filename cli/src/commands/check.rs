//! `check`: validate content and log block counts.

use anyhow::Result;
use bsod_guide_shared::{Layout, RegionKind};

/// Block count per region, in page order.
pub fn summarize(layout: &Layout) -> Vec<(RegionKind, usize)> {
    RegionKind::ORDER
        .iter()
        .map(|kind| (*kind, layout.block_count(*kind)))
        .collect()
}

/// Validate the built-in guide and log per-region block counts.
pub fn run() -> Result<()> {
    let guide = super::load_guide()?;
    let layout = Layout::build(&guide);

    for (kind, blocks) in summarize(&layout) {
        tracing::info!("{kind:?}: {blocks} block(s)");
    }
    tracing::info!(
        "Guide content OK; featured quick check: {:?}",
        guide.quick_checks().first.title
    );
    Ok(())
}
