//! Integration tests: commands.
#[cfg(test)]
mod tests {
    use std::{env, fs};

    use bsod_guide_cli::{
        commands::{check, export, load_guide, render},
        html::RenderOptions,
        utils,
    };
    use bsod_guide_shared::{Layout, RegionKind};
    use tempfile::tempdir;

    #[test]
    fn render_writes_document_into_new_directory() {
        let dir = tempdir().expect("create temp dir");
        let out = dir.path().join("site").join("index.html");

        render::run(Some(&out), &RenderOptions::default()).expect("render guide");

        let html = fs::read_to_string(&out).expect("read rendered html");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Stop Code Cheat Sheet"));
    }

    #[test]
    fn export_writes_camel_case_json() {
        let dir = tempdir().expect("create temp dir");
        let out = dir.path().join("guide.json");

        export::run(Some(&out), true).expect("export guide");

        let raw = fs::read_to_string(&out).expect("read json");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("parse json");
        assert_eq!(value["quickChecks"][0]["title"], "Capture the Stop Code");
        assert_eq!(value["troubleshootingSteps"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["proactiveActions"].as_array().map(Vec::len), Some(5));
        assert_eq!(
            value["resources"][0]["href"],
            "https://learn.microsoft.com/windows-hardware/drivers/debugger/bug-check-code-reference2"
        );
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn compact_and_pretty_json_carry_same_data() {
        let guide = load_guide().expect("builtin content");
        let compact = export::to_json(&guide, false).expect("compact json");
        let pretty = export::to_json(&guide, true).expect("pretty json");

        assert!(!compact.contains('\n'));
        let compact: serde_json::Value = serde_json::from_str(&compact).expect("parse compact");
        let pretty: serde_json::Value = serde_json::from_str(&pretty).expect("parse pretty");
        assert_eq!(compact, pretty);
    }

    #[test]
    fn check_summary_lists_regions_in_page_order() {
        let guide = load_guide().expect("builtin content");
        let summary = check::summarize(&Layout::build(&guide));

        assert_eq!(
            summary,
            vec![
                (RegionKind::Hero, 3),
                (RegionKind::Timeline, 6),
                (RegionKind::CheatSheet, 5),
                (RegionKind::Hardening, 5),
                (RegionKind::Resources, 4),
                (RegionKind::Footer, 2),
            ]
        );
        check::run().expect("check passes");
    }

    #[test]
    fn explicit_canonical_url_wins_and_blank_is_unset() {
        assert_eq!(
            utils::resolve_canonical_url(Some(" https://example.com/guide ".to_string())),
            Some("https://example.com/guide".to_string())
        );
        assert_eq!(utils::resolve_canonical_url(Some("   ".to_string())), None);
    }

    // Only test in this binary that touches `SITE_BASE_URL`.
    #[test]
    fn canonical_url_falls_back_to_site_base_url() {
        let saved = env::var(utils::SITE_BASE_URL_ENV).ok();
        env::set_var(utils::SITE_BASE_URL_ENV, " https://example.org/ ");

        let from_env = utils::resolve_canonical_url(None);
        let blank_flag = utils::resolve_canonical_url(Some(String::new()));
        let explicit = utils::resolve_canonical_url(Some("https://example.com/".to_string()));

        env::set_var(utils::SITE_BASE_URL_ENV, "  ");
        let blank_env = utils::resolve_canonical_url(None);

        match saved {
            Some(value) => env::set_var(utils::SITE_BASE_URL_ENV, value),
            None => env::remove_var(utils::SITE_BASE_URL_ENV),
        }

        assert_eq!(from_env, Some("https://example.org/".to_string()));
        assert_eq!(blank_flag, None);
        assert_eq!(explicit, Some("https://example.com/".to_string()));
        assert_eq!(blank_env, None);
    }
}
