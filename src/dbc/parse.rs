use crate::dbc::config::ParserConfig;
use crate::dbc::grammar;
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError};

use log::{debug, error};
use std::borrow::Cow;

#[cfg(feature = "file")]
use encoding_rs::WINDOWS_1252;
#[cfg(feature = "file")]
use std::fs::File;
#[cfg(feature = "file")]
use std::io::{BufReader, Read};
#[cfg(feature = "file")]
use std::path::Path;

/// Parses DBC text into a [`CanDatabase`] with the given diagnostics settings.
///
/// A parser holds no state between calls: every `parse_*` call builds its own context and
/// database, so one parser can be shared between threads.
#[derive(Default, Clone, Debug)]
pub struct DbcParser {
    config: ParserConfig,
}

impl DbcParser {
    pub fn new(config: ParserConfig) -> Self {
        DbcParser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses DBC text.
    ///
    /// # Errors
    /// - [`DbcParseError::Syntax`] when the text does not match the DBC grammar.
    /// - [`DbcParseError::InvalidNumber`] when a numeric field of `BO_` or `SG_` does not
    ///   fit its type.
    /// - [`DbcParseError::StackUnderflow`] / [`DbcParseError::UnconsumedValues`] on an
    ///   internal inconsistency between grammar and semantic actions.
    ///
    /// No partial database is returned on error.
    pub fn parse_str(&self, text: &str) -> Result<CanDatabase, DbcParseError> {
        let text: Cow<'_, str> = normalize_line_endings(text);

        if self.config.dump_input {
            debug!("DBC input:\n{}", with_line_numbers(&text));
        }

        match grammar::run(&text, &self.config) {
            Ok(db) => {
                debug!(
                    "Parsed DBC: {} nodes, {} messages, {} signals, {} value tables",
                    db.nodes.len(),
                    db.messages.len(),
                    db.signal_count(),
                    db.value_tables.len()
                );
                Ok(db)
            }
            Err(e) => {
                error!("DBC parse failed: {}", e);
                Err(e)
            }
        }
    }

    /// Parses raw DBC bytes: UTF-8 when valid, Windows-1252 otherwise.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<CanDatabase, DbcParseError> {
        let text: Cow<'_, str> = decode_bytes(bytes);
        self.parse_str(&text)
    }

    /// Reads and parses a `.dbc` file.
    ///
    /// # Errors
    /// Returns [`DbcParseError::InvalidExtension`] when the path does not end in `.dbc`,
    /// [`DbcParseError::OpenFile`] / [`DbcParseError::Read`] on I/O failures, and any
    /// error of [`DbcParser::parse_str`].
    #[cfg(feature = "file")]
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<CanDatabase, DbcParseError> {
        let path: &Path = path.as_ref();
        let path_owned: String = path.display().to_string();

        // check if provided file has .dbc format
        let is_dbc: bool = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("dbc"));
        if !is_dbc {
            return Err(DbcParseError::InvalidExtension { path: path_owned });
        }

        let file: File = File::open(path).map_err(|source| DbcParseError::OpenFile {
            path: path_owned.clone(),
            source,
        })?;
        let mut reader: BufReader<File> = BufReader::new(file);

        let mut bytes: Vec<u8> = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| DbcParseError::Read {
                path: path_owned.clone(),
                source,
            })?;

        debug!("Read {} bytes from '{}'", bytes.len(), path_owned);
        self.parse_bytes(&bytes)
    }
}

/// Parses DBC text with the default configuration.
///
/// # Example
/// ```
/// let db = candb::dbc::from_str("VERSION \"1.0\"\n\nBU_: DRIVER\n").unwrap();
/// assert_eq!(db.version, "1.0");
/// assert_eq!(db.nodes, vec!["DRIVER"]);
/// ```
pub fn from_str(text: &str) -> Result<CanDatabase, DbcParseError> {
    DbcParser::default().parse_str(text)
}

/// Parses raw DBC bytes with the default configuration.
pub fn from_bytes(bytes: &[u8]) -> Result<CanDatabase, DbcParseError> {
    DbcParser::default().parse_bytes(bytes)
}

/// Reads and parses a `.dbc` file with the default configuration.
///
/// # Example
/// ```no_run
/// let db = candb::dbc::from_file("example.dbc").expect("Failed to parse DBC file");
/// println!("Parsed {} messages", db.messages.len());
/// ```
#[cfg(feature = "file")]
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CanDatabase, DbcParseError> {
    DbcParser::default().parse_file(path)
}

/// Converts `\r\n` line endings to `\n` and drops a leading byte-order mark.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    let text: &str = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(feature = "file")]
fn decode_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!("Input is not valid UTF-8, decoding as Windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text
        }
    }
}

#[cfg(not(feature = "file"))]
fn decode_bytes(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn with_line_numbers(text: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| format!("{:>5} | {}", i + 1, line))
        .collect::<Vec<String>>()
        .join("\n")
}
