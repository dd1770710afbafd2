//! Variant character table.
//!
//! Each line of the table names a canonical character followed by the
//! variants that collapse onto it:
//!
//! ```text
//! 崎﨑嵜碕
//! エヱ
//! ```
//!
//! The table is built once and never modified. A process-wide instance can be
//! installed at startup with [`install`]; otherwise [`global`] builds the table
//! shipped with the crate on first use.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::config::Settings;

/// Errors that can occur while building the variant table.
#[derive(Debug, thiserror::Error)]
pub enum VariantMapError {
    #[error("failed to read variant table {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("variant table is already installed")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, VariantMapError>;

/// Table shipped with the crate.
const EMBEDDED_TABLE: &str = include_str!("../data/var.txt");

static GLOBAL: OnceLock<VariantMap> = OnceLock::new();

/// Immutable mapping from a variant character to its canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantMap {
    map: HashMap<char, char>,
}

impl VariantMap {
    /// Build a table from its text form. Lines shorter than two characters are skipped.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::default();
        for line in text.lines() {
            table.add_line(line);
        }
        table
    }

    /// Build a table from a line reader. Invalid UTF-8 is reported as an I/O error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::default();
        for line in reader.lines() {
            table.add_line(&line?);
        }
        Ok(table)
    }

    /// Load a table from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source| VariantMapError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_err)?;
        let table = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            VariantMapError::Io(source) => read_err(source),
            other => other,
        })?;
        debug!("Loaded {} variant mappings from {:?}", table.len(), path);
        Ok(table)
    }

    /// The table shipped with the crate.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_TABLE)
    }

    /// Build the table the settings point at, falling back to the embedded one.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        match settings.variants.path.as_deref() {
            Some(path) => Self::load(path),
            None => Ok(Self::embedded()),
        }
    }

    fn add_line(&mut self, line: &str) {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut chars = line.chars();
        let Some(target) = chars.next() else {
            return;
        };
        for source in chars {
            self.map.insert(source, target);
        }
    }

    /// Canonical form of `c`, if `c` is a known variant.
    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    /// Canonical form of `c`, or `c` itself.
    pub fn resolve(&self, c: char) -> char {
        self.get(c).unwrap_or(c)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Install the process-wide table. Fails if a table is already in place,
/// including one built lazily by [`global`].
pub fn install(table: VariantMap) -> Result<&'static VariantMap> {
    let count = table.len();
    GLOBAL
        .set(table)
        .map_err(|_| VariantMapError::AlreadyInstalled)?;
    info!("Installed variant table with {} mappings", count);
    Ok(global())
}

/// The process-wide table, building the embedded one if none was installed.
pub fn global() -> &'static VariantMap {
    GLOBAL.get_or_init(|| {
        let table = VariantMap::embedded();
        debug!("Using embedded variant table ({} mappings)", table.len());
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse() {
        let table = VariantMap::parse("崎﨑嵜\nエヱ\n");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get('﨑'), Some('崎'));
        assert_eq!(table.get('嵜'), Some('崎'));
        assert_eq!(table.get('ヱ'), Some('エ'));
        assert_eq!(table.get('崎'), None);
        assert_eq!(table.resolve('坂'), '坂');
    }

    #[test]
    fn test_short_lines_skipped() {
        let table = VariantMap::parse("\n崎\n\r\nエヱ\r\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('ヱ'), Some('エ'));
        assert_eq!(table.get('\r'), None);
    }

    #[test]
    fn test_later_line_wins() {
        let table = VariantMap::parse("AX\nBX\n");
        assert_eq!(table.get('X'), Some('B'));
    }

    #[test]
    fn test_supplementary_plane() {
        let table = VariantMap::parse("吉𠮷\n");
        assert_eq!(table.get('𠮷'), Some('吉'));
    }

    #[test]
    fn test_embedded() {
        let table = VariantMap::embedded();
        assert!(!table.is_empty());
        assert_eq!(table.get('﨑'), Some('崎'));
        assert_eq!(table.get('ヱ'), Some('エ'));
    }

    #[test]
    fn test_embedded_has_no_chains() {
        // A target must never itself be a variant, or normalization would not be idempotent
        let table = VariantMap::embedded();
        for target in table.map.values() {
            assert_eq!(table.get(*target), None, "{target} is both target and variant");
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "崎﨑").unwrap();
        writeln!(file, "高髙").unwrap();

        let table = VariantMap::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get('髙'), Some('高'));
    }

    #[test]
    fn test_load_missing_file() {
        let err = VariantMap::load("/nonexistent/var.txt").unwrap_err();
        match err {
            VariantMapError::Read { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/var.txt"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xE5, 0xB4, 0x0A, 0xFF, 0xFE, 0x0A]).unwrap();

        let err = VariantMap::load(file.path()).unwrap_err();
        assert!(matches!(err, VariantMapError::Read { .. }));
    }

    #[test]
    fn test_from_reader() {
        let table = VariantMap::from_reader("斉齊\n斎齋\n".as_bytes()).unwrap();
        assert_eq!(table.get('齊'), Some('斉'));
        assert_eq!(table.get('齋'), Some('斎'));
    }

    #[test]
    fn test_global_is_stable() {
        let first = global();
        let second = global();
        assert!(std::ptr::eq(first, second));
        assert!(matches!(
            install(VariantMap::default()),
            Err(VariantMapError::AlreadyInstalled)
        ));
    }
}
