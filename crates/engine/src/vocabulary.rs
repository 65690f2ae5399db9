use crate::diagnostics::{Diagnostics, Warning};
use crate::encoding::TextEncoding;
use crate::error::{EngineError, Result};
use hashbrown::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Words known to a word-vector model. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: HashSet<String>,
    source: PathBuf,
}

impl Vocabulary {
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Path of the word-vector file the words were read from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::<String>::into).collect(),
            source: PathBuf::new(),
        }
    }
}

/// Read the vocabulary of the word-vector file at `path`.
///
/// The first line is a dimension header and is skipped. Every other line is
/// `<word> <payload>`; only the word is decoded, the payload is never parsed.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read.
/// Undecodable or malformed lines are reported to `diagnostics` and skipped.
pub fn load(
    path: &Path,
    encoding: TextEncoding,
    max_words: Option<usize>,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vocabulary> {
    let file = File::open(path).map_err(|e| EngineError::file_read(path, e))?;
    log::debug!("Reading word vectors from {}", path.display());
    load_from_reader(BufReader::new(file), path, encoding, max_words, diagnostics)
}

/// Same as [`load`], reading from an already opened source. `path` is only
/// used for diagnostics and the returned [`Vocabulary::source`].
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if reading fails part way.
pub fn load_from_reader<R: BufRead>(
    mut reader: R,
    path: &Path,
    encoding: TextEncoding,
    max_words: Option<usize>,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vocabulary> {
    let mut vocab = Vocabulary {
        words: HashSet::new(),
        source: path.to_path_buf(),
    };
    if max_words == Some(0) {
        return Ok(vocab);
    }

    let mut line_buf = Vec::new();
    let read_line = |reader: &mut R, buf: &mut Vec<u8>| {
        buf.clear();
        reader
            .read_until(b'\n', buf)
            .map_err(|e| EngineError::file_read(path, e))
    };

    // Dimension header, ignored.
    if read_line(&mut reader, &mut line_buf)? == 0 {
        return Ok(vocab);
    }

    let mut line_no = 1;
    loop {
        if read_line(&mut reader, &mut line_buf)? == 0 {
            break;
        }
        line_no += 1;

        let Some(space) = line_buf.iter().position(|&b| b == b' ') else {
            diagnostics.warn(Warning::MissingVectorPayload {
                path: path.to_path_buf(),
                line: line_no,
            });
            continue;
        };

        let Some(word) = encoding.decode(&line_buf[..space]) else {
            diagnostics.warn(Warning::UndecodableWord {
                path: path.to_path_buf(),
                line: line_no,
                encoding: encoding.name(),
            });
            continue;
        };

        if vocab.words.contains(&*word) {
            diagnostics.warn(Warning::DuplicateWord {
                path: path.to_path_buf(),
                word: word.into_owned(),
            });
        } else {
            vocab.words.insert(word.into_owned());
        }

        if max_words.is_some_and(|max| vocab.words.len() >= max) {
            log::debug!(
                "Reached {} words at line {line_no} of {}, stopping",
                vocab.words.len(),
                path.display()
            );
            break;
        }
    }

    log::debug!("Vocabulary of {} holds {} words", path.display(), vocab.len());
    Ok(vocab)
}
