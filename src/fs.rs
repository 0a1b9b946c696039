//! File reading and writing around the cipher engine.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use crate::model::Scheme;

/// Where a message came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    Literal,
    File(&'a Path),
}

/// Turns the `--fow` argument into the message text.
///
/// An argument naming an existing regular file is replaced by the file's
/// whole contents, newlines included. Anything else is the message itself.
pub fn resolve_message(file_or_word: &str) -> Result<(String, Source<'_>)> {
    let path = Path::new(file_or_word);
    if path.is_file() {
        info!("Reading message from {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        debug!("Read {} bytes", text.len());
        Ok((text, Source::File(path)))
    } else {
        if looks_like_path(path) {
            warn!(
                "No file named {}, encrypting the argument itself",
                path.display()
            );
        }
        Ok((file_or_word.to_string(), Source::Literal))
    }
}

/// Whether a literal argument was more likely meant as a file name.
pub(crate) fn looks_like_path(path: &Path) -> bool {
    let has_whitespace = path.to_string_lossy().chars().any(char::is_whitespace);
    let has_extension = path.extension().is_some_and(|ext| !ext.is_empty());
    !has_whitespace && (has_extension || path.components().count() > 1)
}

/// Applies the output post-processing: spaces are removed unless the
/// scheme is transposition or stripping is turned off.
pub fn finish_output(scheme: Scheme, text: String, strip_spaces: bool) -> String {
    if strip_spaces && scheme != Scheme::Transposition {
        text.replace(' ', "")
    } else {
        text
    }
}

pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
