//! Validated guide content.

use std::collections::HashSet;

use serde::Serialize;
use url::Url;

use crate::{content, ContentError, QuickCheck, ResourceLink, StopCodeEntry, TroubleshootingStep};

/// Raw datasets a [`Guide`] is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideContent {
    /// Quick response checklist; must not be empty.
    pub quick_checks: &'static [QuickCheck],
    /// Diagnostic timeline.
    pub troubleshooting_steps: &'static [TroubleshootingStep],
    /// Stop code cheat sheet.
    pub stop_codes: &'static [StopCodeEntry],
    /// Proactive hardening list.
    pub proactive_actions: &'static [&'static str],
    /// Reference resources.
    pub resources: &'static [ResourceLink],
}

impl GuideContent {
    /// The published guide.
    pub const BUILTIN: GuideContent = GuideContent {
        quick_checks: content::QUICK_CHECKS,
        troubleshooting_steps: content::TROUBLESHOOTING_STEPS,
        stop_codes: content::STOP_CODES,
        proactive_actions: content::PROACTIVE_ACTIONS,
        resources: content::RESOURCES,
    };
}

/// The quick response checklist split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickCheckSplit {
    /// Emphasized item.
    pub first: &'static QuickCheck,
    /// Remaining items in source order.
    pub rest: &'static [QuickCheck],
}

/// Validated guide content.
///
/// Only [`Guide::new`] constructs one, so every `Guide` in circulation has a
/// non-empty checklist, unique render keys and absolute resource links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    content: GuideContent,
    quick_checks: QuickCheckSplit,
}

impl Guide {
    /// Validate `content` and assemble a guide from it.
    pub fn new(content: GuideContent) -> Result<Self, ContentError> {
        let (first, rest) = content
            .quick_checks
            .split_first()
            .ok_or(ContentError::EmptyQuickChecks)?;

        ensure_unique("quick check", content.quick_checks.iter().map(|check| check.title))?;
        ensure_unique(
            "troubleshooting step",
            content.troubleshooting_steps.iter().map(|step| step.title),
        )?;
        ensure_unique("stop code", content.stop_codes.iter().map(|entry| entry.code))?;
        ensure_unique("proactive action", content.proactive_actions.iter().copied())?;
        ensure_unique("resource", content.resources.iter().map(|link| link.href))?;
        for link in content.resources {
            validate_href(link)?;
        }

        tracing::debug!(
            quick_checks = content.quick_checks.len(),
            steps = content.troubleshooting_steps.len(),
            stop_codes = content.stop_codes.len(),
            proactive_actions = content.proactive_actions.len(),
            resources = content.resources.len(),
            "guide content validated"
        );

        Ok(Self {
            content,
            quick_checks: QuickCheckSplit {
                first,
                rest,
            },
        })
    }

    /// The published guide.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::new(GuideContent::BUILTIN)
    }

    /// Raw datasets, e.g. for serialization.
    pub fn content(&self) -> &GuideContent {
        &self.content
    }

    /// Checklist split into the emphasized first item and the rest.
    pub fn quick_checks(&self) -> QuickCheckSplit {
        self.quick_checks
    }

    /// Diagnostic timeline steps.
    pub fn troubleshooting_steps(&self) -> &'static [TroubleshootingStep] {
        self.content.troubleshooting_steps
    }

    /// Stop code cheat sheet entries.
    pub fn stop_codes(&self) -> &'static [StopCodeEntry] {
        self.content.stop_codes
    }

    /// Proactive hardening actions.
    pub fn proactive_actions(&self) -> &'static [&'static str] {
        self.content.proactive_actions
    }

    /// Reference resources.
    pub fn resources(&self) -> &'static [ResourceLink] {
        self.content.resources
    }
}

fn ensure_unique(
    collection: &'static str,
    keys: impl Iterator<Item = &'static str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey {
                collection,
                key,
            });
        }
    }
    Ok(())
}

fn validate_href(link: &ResourceLink) -> Result<(), ContentError> {
    let invalid = |reason: String| ContentError::InvalidHref {
        title: link.title,
        href: link.href,
        reason,
    };

    let url = Url::parse(link.href).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}
