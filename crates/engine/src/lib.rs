//! Out-of-vocabulary rate of text files against a word-vector vocabulary.
//!
//! [`run`] loads the vocabulary once, then scans each text file on its own
//! against that fixed set.

pub mod config;
pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod options;
pub mod processor;
pub mod stats;
pub mod tokenizer;
pub mod vocabulary;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::{EngineError, Result};
use crate::stats::{OovReport, RunResult};
use crate::vocabulary::Vocabulary;
use std::path::Path;

/// Progress of a run, handed out as soon as each step has finished.
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    VocabularyLoaded(&'a Vocabulary),
    Report(&'a OovReport),
    Failed {
        path: &'a Path,
        error: &'a EngineError,
    },
}

/// Load the vocabulary and analyse every text file in `config.texts`, in order.
///
/// # Errors
///
/// Fails only if the vocabulary cannot be read. Text file failures are
/// collected in `RunResult::errors`; with `config.strict` the first one also
/// stops the remaining files from being read.
pub fn run(config: &Config, diagnostics: &mut dyn Diagnostics) -> Result<RunResult> {
    run_with(config, diagnostics, |_| Ok(()))
}

/// Like [`run`], calling `on_event` after the vocabulary is loaded and after
/// each text file, in input order.
///
/// # Errors
///
/// Same as [`run`], plus [`EngineError::Output`] when `on_event` fails.
pub fn run_with<F>(
    config: &Config,
    diagnostics: &mut dyn Diagnostics,
    mut on_event: F,
) -> Result<RunResult>
where
    F: FnMut(RunEvent<'_>) -> std::io::Result<()>,
{
    let vocab = vocabulary::load(
        &config.wordvecs,
        config.encoding,
        config.max_words,
        diagnostics,
    )?;
    on_event(RunEvent::VocabularyLoaded(&vocab)).map_err(EngineError::Output)?;

    let mut result = RunResult {
        vocabulary_size: vocab.len(),
        vocabulary_path: vocab.source().to_path_buf(),
        ..RunResult::default()
    };

    for path in &config.texts {
        match processor::process_file(path, &vocab, &config.analyze, config.encoding, diagnostics)
        {
            Ok(report) => {
                on_event(RunEvent::Report(&report)).map_err(EngineError::Output)?;
                result.reports.push(report);
            }
            Err(error) => {
                log::debug!("Failed to analyse {}: {error}", path.display());
                on_event(RunEvent::Failed {
                    path,
                    error: &error,
                })
                .map_err(EngineError::Output)?;
                result.errors.push((path.clone(), error));
                if config.strict {
                    break;
                }
            }
        }
    }

    Ok(result)
}
