//! Data model, static content and layout for the BSOD troubleshooting guide.
//!
//! Both the browser app and the static export CLI build their output from the
//! [`Layout`] produced here, so the page structure is defined in one place.

pub mod content;
pub mod error;
pub mod guide;
pub mod layout;

use serde::Serialize;

pub use error::ContentError;
pub use guide::{Guide, GuideContent, QuickCheckSplit};
pub use layout::{Layout, Region, RegionKind};

// 快速检查项：首项在页面上强调显示
/// One item of the quick response checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickCheck {
    /// Short imperative title.
    pub title: &'static str,
    /// What to do and why it matters.
    pub description: &'static str,
    /// Practical tip rendered with accent colour.
    pub highlight: &'static str,
}

/// One stage of the diagnostic timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootingStep {
    /// Stage title.
    pub title: &'static str,
    /// One-sentence summary of the stage.
    pub description: &'static str,
    /// Concrete sub-steps, rendered as the first sub-list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<&'static [&'static str]>,
    /// Follow-ups, rendered as the second sub-list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_actions: Option<&'static [&'static str]>,
}

/// External documentation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    /// Link title.
    pub title: &'static str,
    /// What the reader finds behind the link.
    pub description: &'static str,
    /// Absolute URL, rendered unmodified.
    pub href: &'static str,
}

/// A stop code paired with its first-response advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StopCodeEntry {
    /// Symbolic name and hex value, e.g. `IRQL_NOT_LESS_OR_EQUAL (0xA)`.
    pub code: &'static str,
    /// Remediation advice.
    pub advice: &'static str,
}
