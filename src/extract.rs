// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text extraction: turning files into [`ExtractionOutcome`]s.
//!
//! This sits outside the core. It never returns an error for a bad file: every
//! path becomes either `Extracted` or `Failed`, and the core decides what to do
//! with it. Reading is embarrassingly parallel, so with the `parallel` feature
//! files are read with rayon. Output order always matches input order.
//!
//! `.txt` is read as UTF-8, `.docx` through docx-rs (paragraph text joined
//! with newlines) and `.pdf` through pdf-extract. Anything else, and any file
//! the parsers reject, becomes a `Failed` outcome.

use std::fs;
use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::ExtractionOutcome;

/// Extensions the extraction layer reads.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// Why a file produced no text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ExtractionError {
    #[error("file has no extension")]
    MissingExtension,
    #[error("unsupported format: .{extension}")]
    UnsupportedFormat { extension: String },
    #[error("failed to read file: {message}")]
    Io { message: String },
    #[error("file is not valid UTF-8")]
    InvalidUtf8,
    #[error("could not parse .{format} file: {message}")]
    Malformed { format: String, message: String },
}

impl ExtractionError {
    fn malformed(format: &str, message: impl ToString) -> Self {
        ExtractionError::Malformed {
            format: format.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for ExtractionError {
    fn from(e: std::io::Error) -> Self {
        ExtractionError::Io {
            message: e.to_string(),
        }
    }
}

/// Identifier for a path: its file name, or the whole path if it has none.
pub fn identifier_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Lower-cased extension of `path`, if any.
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Is this a file name the extraction layer accepts at all?
pub fn is_allowed(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

fn read_text(path: &Path) -> Result<String, ExtractionError> {
    let extension = extension_of(path).ok_or(ExtractionError::MissingExtension)?;
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ExtractionError::UnsupportedFormat { extension });
    }
    let bytes = fs::read(path)?;
    match extension.as_str() {
        "docx" => read_docx_text(&bytes),
        "pdf" => read_pdf_text(&bytes),
        _ => String::from_utf8(bytes).map_err(|_| ExtractionError::InvalidUtf8),
    }
}

/// Text of every top-level paragraph, one paragraph per line.
///
/// A .docx is a zip of XML parts; docx-rs gives us the typed tree
/// Document → Paragraph → Run → Text. Tables, images and headers are skipped.
fn read_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::malformed("docx", e))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Runs within a paragraph are fragments of the same line, so no separator.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

fn read_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed streams instead of returning an error
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractionError::malformed("pdf", e)),
        Err(_) => Err(ExtractionError::malformed("pdf", "parser aborted")),
    }
}

/// Extract one file. Never fails; problems become `ExtractionOutcome::Failed`.
pub fn extract_file(path: &Path) -> ExtractionOutcome {
    let identifier = identifier_for(path);
    match read_text(path) {
        Ok(text) => ExtractionOutcome::extracted(identifier, text),
        Err(reason) => {
            log::warn!("Error parsing {}: {}", identifier, reason);
            ExtractionOutcome::failed(identifier, reason)
        }
    }
}

/// Extract many files, preserving input order.
#[cfg(feature = "parallel")]
pub fn extract_files<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<ExtractionOutcome> {
    paths
        .par_iter()
        .map(|path| extract_file(path.as_ref()))
        .collect()
}

/// Extract many files, preserving input order.
#[cfg(not(feature = "parallel"))]
pub fn extract_files<P: AsRef<Path>>(paths: &[P]) -> Vec<ExtractionOutcome> {
    paths.iter().map(|path| extract_file(path.as_ref())).collect()
}

/// Extract many files in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn extract_files_with_progress<P: AsRef<Path> + Sync>(
    paths: &[P],
    progress: &ProgressBar,
) -> Vec<ExtractionOutcome> {
    let outcomes: Vec<ExtractionOutcome> = paths
        .par_iter()
        .map(|path| {
            let outcome = extract_file(path.as_ref());
            progress.inc(1);
            outcome
        })
        .collect();
    progress.finish_with_message(format!("read {} files", outcomes.len()));
    outcomes
}
