//! Patch runner: loads the target file, feeds it through the edit step
//! pipeline, and writes the result back in place.

use std::fs;
use std::path::Path;

use similar::{ChangeTag, TextDiff};
use tracing::{debug, info};

use crate::error::{PatchError, PatchResult};
use crate::steps::STEPS;

/// Default location of the game socket module, relative to the repo root
pub const DEFAULT_TARGET: &str = "backend/src/socket/gameSocket.js";

/// Read the target file as a UTF-8 document
pub fn read_document(path: &Path) -> PatchResult<String> {
    let bytes = fs::read(path).map_err(|e| PatchError::io_error(e, path))?;
    String::from_utf8(bytes).map_err(|e| PatchError::encoding_error(e.utf8_error(), path))
}

/// Run every edit step over the document in order, returning the final text
pub fn apply_steps(document: &str) -> String {
    let mut current = document.to_string();

    for (name, step) in STEPS {
        let next = step(&current);
        if next == current {
            debug!("step {} made no change", name);
        } else {
            debug!(
                "step {} touched {} line(s)",
                name,
                changed_lines(&current, &next)
            );
        }
        current = next;
    }

    current
}

/// Number of diff lines (insertions plus deletions) between two documents
fn changed_lines(before: &str, after: &str) -> usize {
    TextDiff::from_lines(before, after)
        .iter_all_changes()
        .filter(|change| change.tag() != ChangeTag::Equal)
        .count()
}

/// Patch the file at `path` in place. Returns whether the file was rewritten;
/// an already-patched file is left untouched.
pub fn patch_file(path: &Path) -> PatchResult<bool> {
    let document = read_document(path)?;
    let patched = apply_steps(&document);

    if patched == document {
        info!("{} is already up to date", path.display());
        return Ok(false);
    }

    fs::write(path, &patched).map_err(|e| PatchError::write_error(e, path))?;
    info!("patched {}", path.display());
    Ok(true)
}
