// crates/replace_region/src/lib.rs

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use marker_region::extract_region;
use region_store::TextStore;
use unescape_newlines::unescape_newlines;

pub mod config;
pub mod logging;

pub use config::{build_cli, AppConfig, ReplacementSource};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No replacement was requested; carries the region text.
    Extracted(String),
    /// Dry run; carries the full rewritten text, nothing was written.
    Previewed(String),
    /// The rewritten text was written to `path`.
    Written { path: PathBuf, bytes: usize },
}

/// Resolves the replacement text. Inline text is only unescaped when asked;
/// file contents are used verbatim.
fn load_replacement(config: &AppConfig, source: &ReplacementSource, store: &dyn TextStore) -> Result<String> {
    match source {
        ReplacementSource::Inline(text) if config.unescape => Ok(unescape_newlines(text)),
        ReplacementSource::Inline(text) => Ok(text.clone()),
        ReplacementSource::File(path) => store
            .read_text(path)
            .context("Failed to load replacement text"),
    }
}

/// Reads the configured file, locates the region, and either returns it or
/// swaps it for the replacement. Any failure aborts before anything is written.
pub fn run(config: &AppConfig, store: &dyn TextStore) -> Result<Outcome> {
    let buffer = store.read_text(&config.file)?;

    let region = extract_region(&buffer, &config.start_marker, &config.end_marker)
        .with_context(|| format!("Failed to locate region in {}", config.file.display()))?;
    info!(
        start = region.start(),
        end = region.end(),
        bytes = region.len(),
        "found region in {}",
        config.file.display()
    );

    let source = match &config.replacement {
        Some(source) => source,
        None => return Ok(Outcome::Extracted(region.as_str().to_string())),
    };

    let replacement = load_replacement(config, source, store)?;
    debug!(old = region.as_str(), new = replacement.as_str(), "replacing region");
    let updated = region.splice(&replacement);

    if config.dry_run {
        return Ok(Outcome::Previewed(updated));
    }

    let target = config.target();
    store.write_text(target, &updated)?;
    info!(bytes = updated.len(), "wrote {}", target.display());
    Ok(Outcome::Written {
        path: target.clone(),
        bytes: updated.len(),
    })
}
