//! Installing a process-wide variant table from settings.
//!
//! Kept in its own test binary: the table can only be installed once per process.

use std::io::Write;

use nayose_engine::variant::{self, VariantMapError};
use nayose_engine::{Settings, VariantMap, hash, normalize};
use tempfile::NamedTempFile;

#[test]
fn test_install_from_settings() {
    let mut table_file = NamedTempFile::new().unwrap();
    writeln!(table_file, "斉齊齋").unwrap();

    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(
        config_file,
        "[variants]\npath = {:?}",
        table_file.path().to_str().unwrap()
    )
    .unwrap();

    let settings = Settings::load_from(config_file.path()).unwrap();
    let table = VariantMap::from_settings(&settings).unwrap();
    let installed = variant::install(table).unwrap();
    assert_eq!(installed.len(), 2);

    assert_eq!(normalize(Some("齋藤 ひとし")).as_deref(), Some("斉藤ヒトシ"));
    // The bundled table is not in effect
    assert_eq!(normalize(Some("﨑")).as_deref(), Some("﨑"));
    assert_eq!(hash("齊藤"), hash("斉藤"));

    assert!(matches!(
        variant::install(VariantMap::embedded()),
        Err(VariantMapError::AlreadyInstalled)
    ));
}

#[test]
fn test_missing_table_is_a_configuration_error() {
    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(config_file, "[variants]\npath = \"/nonexistent/nayose/var.txt\"").unwrap();

    let settings = Settings::load_from(config_file.path()).unwrap();
    let err = VariantMap::from_settings(&settings).unwrap_err();
    assert!(matches!(err, VariantMapError::Read { .. }));
}
