use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use snafu::ResultExt;
use tracing::{error, info, warn};

use crate::consts::PROCESSED_SUFFIX;
use crate::error::{IoReadSnafu, IoWriteSnafu, JsonReadSnafu, JsonWriteSnafu, SimplifyError};
use crate::layout::annotation::Page;
use crate::simplify::{SimplifyConfig, simplify_page};

/// Outcome of a directory batch run.
#[derive(Clone, Copy, Debug, Default)]
pub struct BatchOutcome {
    pub processed: usize,
    pub failed: usize,
}

/// Reads one page JSON file, simplifies it, and writes the result.
///
/// Without an explicit `output` path the result lands next to the input as
/// `<stem>_processed.json`. Output is pretty-printed with the input's key
/// set preserved. Returns the path written.
pub fn simplify_file(
    input: &Path,
    output: Option<&Path>,
    config: &SimplifyConfig,
) -> Result<PathBuf, SimplifyError> {
    let raw = fs::read_to_string(input).context(IoReadSnafu {
        path: input.display().to_string(),
    })?;
    let mut page: Page = serde_json::from_str(&raw).context(JsonReadSnafu {
        path: input.display().to_string(),
    })?;

    let before = page.annotations.len();
    simplify_page(&mut page, config)?;
    info!(
        "Simplified annotations in {}: {} -> {}",
        input.display(),
        before,
        page.annotations.len()
    );

    let out = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input),
    };
    let json = serde_json::to_string_pretty(&page).context(JsonWriteSnafu {
        path: out.display().to_string(),
    })?;
    fs::write(&out, json).context(IoWriteSnafu {
        path: out.display().to_string(),
    })?;
    Ok(out)
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("page");
    input.with_file_name(format!("{stem}{PROCESSED_SUFFIX}.json"))
}

/// Simplifies every page JSON file directly inside `dir`, in parallel.
///
/// Files are independent, so one bad file is logged and counted rather
/// than aborting the rest. Files named like our own outputs
/// (`*_processed.json`) are skipped; reprocessing an already-flattened
/// page would overwrite its aggregated text. An empty directory is not an
/// error.
pub fn simplify_dir(dir: &Path, config: &SimplifyConfig) -> Result<BatchOutcome, SimplifyError> {
    let entries = fs::read_dir(dir).context(IoReadSnafu {
        path: dir.display().to_string(),
    })?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.context(IoReadSnafu {
            path: dir.display().to_string(),
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.ends_with(PROCESSED_SUFFIX))
        {
            continue;
        }
        inputs.push(path);
    }

    if inputs.is_empty() {
        warn!("No JSON files found in {}", dir.display());
        return Ok(BatchOutcome::default());
    }
    // Deterministic processing order for logs regardless of readdir order
    inputs.sort();
    info!(
        "Found {} JSON file(s) to process in {}",
        inputs.len(),
        dir.display()
    );

    let failed = inputs
        .par_iter()
        .filter(|input| match simplify_file(input, None, config) {
            Ok(_) => false,
            Err(err) => {
                error!("Failed to simplify {}: {}", input.display(), err);
                true
            }
        })
        .count();

    Ok(BatchOutcome {
        processed: inputs.len() - failed,
        failed,
    })
}
