//! Output helpers shared by the commands.

use std::{
    env, fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};

/// Environment variable consulted when no canonical URL is passed.
pub const SITE_BASE_URL_ENV: &str = "SITE_BASE_URL";

/// Write `contents` to `out`, or to stdout when `out` is `None`.
///
/// Missing parent directories of `out` are created.
pub fn write_output(out: Option<&Path>, contents: &str) -> Result<()> {
    let Some(path) = out else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(contents.as_bytes())
            .context("failed to write to stdout")?;
        return stdout.flush().context("failed to flush stdout");
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Explicit value first, then `SITE_BASE_URL`; blank values count as unset.
pub fn resolve_canonical_url(explicit: Option<String>) -> Option<String> {
    explicit
        .or_else(|| env::var(SITE_BASE_URL_ENV).ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
