//! Configuration for the frontend application

use yew::prelude::AttrValue;

/// Path prefix the app is served under
/// - Local development / own domain: "/"
/// - GitHub Pages project site: "/bsod-guide/"
#[cfg(not(feature = "gh-pages"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "gh-pages")]
pub const BASE_URL: &str = "/bsod-guide/";

/// Router basename derived from [`BASE_URL`]; `None` when served at the root.
pub fn router_basename() -> Option<AttrValue> {
    let trimmed = BASE_URL.trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(AttrValue::Static(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "gh-pages"))]
    #[test]
    fn root_deployment_has_no_basename() {
        assert_eq!(router_basename(), None);
    }

    #[cfg(feature = "gh-pages")]
    #[test]
    fn project_site_basename_has_no_trailing_slash() {
        assert_eq!(router_basename(), Some(AttrValue::Static("/bsod-guide")));
    }
}
