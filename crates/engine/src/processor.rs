use crate::config::AnalyzeOptions;
use crate::diagnostics::{Diagnostics, Warning};
use crate::encoding::TextEncoding;
use crate::error::{EngineError, Result};
use crate::options::TokenizeMode;
use crate::stats::{OovCounter, OovReport};
use crate::tokenizer::{MissingField, is_blank, tokenize};
use crate::vocabulary::Vocabulary;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Scan one text file and report its OOV rate against `vocab`.
///
/// # Errors
///
/// Fails for the whole file on I/O or decoding errors, on a missing TSV field
/// and when the file yields no tokens at all. No partial report is produced.
pub fn process_file(
    path: &Path,
    vocab: &Vocabulary,
    options: &AnalyzeOptions,
    encoding: TextEncoding,
    diagnostics: &mut dyn Diagnostics,
) -> Result<OovReport> {
    let file = File::open(path).map_err(|e| EngineError::file_read(path, e))?;
    log::debug!("Analysing {}", path.display());
    let counter = count_tokens(
        BufReader::new(file),
        path,
        vocab,
        options,
        encoding,
        diagnostics,
    )?;
    counter.into_report(path, options.oov_number)
}

/// Count tokens from an already opened text source.
///
/// # Errors
///
/// See [`process_file`]; an empty token stream is not an error here.
pub fn count_tokens<R: BufRead>(
    mut reader: R,
    path: &Path,
    vocab: &Vocabulary,
    options: &AnalyzeOptions,
    encoding: TextEncoding,
    diagnostics: &mut dyn Diagnostics,
) -> Result<OovCounter> {
    let mut counter = OovCounter::new();
    let mut line_buf = Vec::new();
    let mut line_no = 0;

    while read_text_line(&mut reader, &mut line_buf)
        .map_err(|e| EngineError::file_read(path, e))?
    {
        line_no += 1;

        let decoded = encoding.decode(&line_buf).ok_or_else(|| EngineError::Decode {
            path: path.to_path_buf(),
            line: line_no,
            encoding: encoding.name(),
        })?;
        if is_blank(&decoded) {
            continue;
        }

        let tokens = tokenize(&decoded, options.tokenizer).map_err(|MissingField { field, found }| {
            EngineError::MalformedField {
                path: path.to_path_buf(),
                line: line_no,
                field,
                found,
            }
        })?;

        if let TokenizeMode::Field(field) = options.tokenizer
            && tokens.iter().any(|t| t.is_empty())
        {
            diagnostics.warn(Warning::EmptyField {
                path: path.to_path_buf(),
                line: line_no,
                field: field.get(),
            });
        }

        for token in tokens {
            let token: Cow<'_, str> = if options.lowercase {
                Cow::Owned(token.to_lowercase())
            } else {
                Cow::Borrowed(token)
            };
            counter.record(&token, vocab);
        }
    }

    log::debug!(
        "{}: {line_no} lines, {} tokens, {} OOV",
        path.display(),
        counter.total_tokens(),
        counter.oov_total()
    );
    Ok(counter)
}

/// Read one line into `buf` without its terminator. `\n`, `\r\n` and a lone
/// `\r` all end a line. Returns `false` at end of input.
fn read_text_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    let mut read_any = false;
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        let Some(pos) = available.iter().position(|&b| b == b'\n' || b == b'\r') else {
            let len = available.len();
            buf.extend_from_slice(available);
            reader.consume(len);
            continue;
        };

        let ends_with_cr = available[pos] == b'\r';
        buf.extend_from_slice(&available[..pos]);
        reader.consume(pos + 1);
        if ends_with_cr && reader.fill_buf()?.first() == Some(&b'\n') {
            reader.consume(1);
        }
        return Ok(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzeOptionsBuilder;
    use crate::diagnostics::RecordingDiagnostics;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn vocab() -> Vocabulary {
        ["cat", "dog"].into_iter().collect()
    }

    fn count(text: &str, options: &AnalyzeOptions) -> Result<OovCounter> {
        let mut diag = RecordingDiagnostics::new();
        count_tokens(
            Cursor::new(text.as_bytes().to_vec()),
            Path::new("t.txt"),
            &vocab(),
            options,
            TextEncoding::default(),
            &mut diag,
        )
    }

    fn field(n: usize) -> AnalyzeOptions {
        AnalyzeOptionsBuilder::default()
            .tokenizer(TokenizeMode::field(n).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn counts_whitespace_tokens() {
        let counter = count("the cat sat on the mat\n", &AnalyzeOptions::default()).unwrap();
        assert_eq!(counter.total_tokens(), 6);
        assert_eq!(counter.oov_total(), 5);
        assert_eq!(counter.count("the"), 2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let counter = count("\n   \n\t\ncat dog\r\n\n", &AnalyzeOptions::default()).unwrap();
        assert_eq!(counter.total_tokens(), 2);
        assert_eq!(counter.oov_total(), 0);
    }

    #[test]
    fn lowercase_applies_before_lookup() {
        let options = AnalyzeOptionsBuilder::default()
            .lowercase(true)
            .build()
            .unwrap();
        let counter = count("Cat DOG Bird\n", &options).unwrap();
        assert_eq!(counter.oov_total(), 1);
        assert_eq!(counter.count("bird"), 1);
        assert_eq!(counter.count("Bird"), 0);

        let counter = count("Cat DOG Bird\n", &AnalyzeOptions::default()).unwrap();
        assert_eq!(counter.oov_total(), 3);
    }

    #[test]
    fn field_mode_uses_one_token_per_line() {
        let counter = count("1\tcat\tN\n2\tbig dog\tA\n", &field(2)).unwrap();
        assert_eq!(counter.total_tokens(), 2);
        assert_eq!(counter.count("big dog"), 1);
    }

    fn lines_of(bytes: &[u8]) -> Vec<String> {
        let mut reader = Cursor::new(bytes.to_vec());
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        while read_text_line(&mut reader, &mut buf).unwrap() {
            lines.push(String::from_utf8(buf.clone()).unwrap());
        }
        lines
    }

    #[test]
    fn all_newline_conventions_end_lines() {
        assert_eq!(lines_of(b"a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(lines_of(b"a\r\r\nb\n"), vec!["a", "", "b"]);
        assert_eq!(lines_of(b"\n"), vec![""]);
        assert!(lines_of(b"").is_empty());
    }

    #[test]
    fn crlf_split_across_buffer_refills() {
        let mut reader = BufReader::with_capacity(2, Cursor::new(b"ab\r\ncd\r".to_vec()));
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        while read_text_line(&mut reader, &mut buf).unwrap() {
            lines.push(String::from_utf8(buf.clone()).unwrap());
        }
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn classic_mac_line_endings_select_fields_per_line() {
        let counter = count("1\tcat\tN\r2\tbird\tN\r", &field(2)).unwrap();
        assert_eq!(counter.total_tokens(), 2);
        assert_eq!(counter.count("bird"), 1);
    }

    #[test]
    fn crlf_is_not_part_of_last_field() {
        let counter = count("x\tcat\r\n", &field(2)).unwrap();
        assert_eq!(counter.oov_total(), 0);
    }

    #[test]
    fn missing_field_is_fatal_with_line_number() {
        let err = count("a\tcat\n\nonly\n", &field(2)).unwrap_err();
        match err {
            EngineError::MalformedField {
                line, field, found, ..
            } => assert_eq!((line, field, found), (3, 2, 1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_field_is_counted_and_reported() {
        let mut diag = RecordingDiagnostics::new();
        let counter = count_tokens(
            Cursor::new(b"a\t\tb\n".to_vec()),
            Path::new("t.tsv"),
            &vocab(),
            &field(2),
            TextEncoding::default(),
            &mut diag,
        )
        .unwrap();
        assert_eq!(counter.count(""), 1);
        assert_eq!(
            diag.warnings,
            vec![Warning::EmptyField {
                path: Path::new("t.tsv").to_path_buf(),
                line: 1,
                field: 2,
            }]
        );
    }

    #[test]
    fn undecodable_text_line_is_fatal() {
        let mut diag = RecordingDiagnostics::new();
        let err = count_tokens(
            Cursor::new(b"cat\nbad \xff\n".to_vec()),
            Path::new("t.txt"),
            &vocab(),
            &AnalyzeOptions::default(),
            TextEncoding::default(),
            &mut diag,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Decode { line: 2, .. }));
    }

    #[test]
    fn process_file_reports_and_rejects_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "the cat sat on the mat").unwrap();
        let mut diag = RecordingDiagnostics::new();
        let report = process_file(
            file.path(),
            &vocab(),
            &AnalyzeOptions::default(),
            TextEncoding::default(),
            &mut diag,
        )
        .unwrap();
        assert_eq!((report.oov_total, report.total_tokens), (5, 6));
        assert_eq!(report.top[0].token, "the");

        let empty = NamedTempFile::new().unwrap();
        let err = process_file(
            empty.path(),
            &vocab(),
            &AnalyzeOptions::default(),
            TextEncoding::default(),
            &mut diag,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::NoTokens { .. }));
    }
}
