//! Content errors.

use thiserror::Error;

/// Content mistakes caught when a [`crate::Guide`] is assembled.
///
/// These are build-time authoring errors, so callers treat them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The quick response checklist has no first item to emphasize.
    #[error("quick check list is empty; at least one item is required")]
    EmptyQuickChecks,

    /// Two records in one collection share the key used to render them.
    #[error("duplicate {collection} key: {key:?}")]
    DuplicateKey {
        /// Collection name, e.g. `stop code`.
        collection: &'static str,
        /// The repeated key.
        key: &'static str,
    },

    /// A resource link does not point at an absolute web URL.
    #[error("resource {title:?} has invalid href {href:?}: {reason}")]
    InvalidHref {
        /// Title of the offending resource.
        title: &'static str,
        /// The rejected href.
        href: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}
