//! Integration tests: cli.
#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bsod_guide_cli::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> Commands {
        let argv = std::iter::once("bsod-guide").chain(args.iter().copied());
        Cli::try_parse_from(argv).expect("parse arguments").command
    }

    #[test]
    fn render_defaults() {
        match parse(&["render"]) {
            Commands::Render {
                out,
                lang,
                stylesheet,
                canonical_url,
            } => {
                assert_eq!(out, None);
                assert_eq!(lang, "en");
                assert_eq!(stylesheet, None);
                assert_eq!(canonical_url, None);
            },
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn render_accepts_all_flags() {
        let command = parse(&[
            "render",
            "--out",
            "dist/index.html",
            "--lang",
            "de",
            "--stylesheet",
            "styles.css",
            "--canonical-url",
            "https://example.org/bsod/",
        ]);

        match command {
            Commands::Render {
                out,
                lang,
                stylesheet,
                canonical_url,
            } => {
                assert_eq!(out, Some(PathBuf::from("dist/index.html")));
                assert_eq!(lang, "de");
                assert_eq!(stylesheet.as_deref(), Some("styles.css"));
                assert_eq!(canonical_url.as_deref(), Some("https://example.org/bsod/"));
            },
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn export_pretty_flag() {
        match parse(&["export"]) {
            Commands::Export {
                out,
                pretty,
            } => {
                assert_eq!(out, None);
                assert!(!pretty);
            },
            _ => panic!("expected export"),
        }

        match parse(&["export", "--pretty", "--out", "guide.json"]) {
            Commands::Export {
                out,
                pretty,
            } => {
                assert_eq!(out, Some(PathBuf::from("guide.json")));
                assert!(pretty);
            },
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn check_takes_no_arguments() {
        assert!(matches!(parse(&["check"]), Commands::Check));
        assert!(Cli::try_parse_from(["bsod-guide", "check", "--pretty"]).is_err());
    }

    #[test]
    fn missing_or_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["bsod-guide"]).is_err());
        assert!(Cli::try_parse_from(["bsod-guide", "publish"]).is_err());
        assert!(Cli::try_parse_from(["bsod-guide", "render", "--minify"]).is_err());
    }
}
