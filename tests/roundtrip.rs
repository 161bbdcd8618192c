#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! Integration tests for the full load → access → mutate → save → reload
//! cycle against real files.

mod common;

use multini::error::IniError;
use multini::file::IniFile;
use multini::handle::SectionHandle;

use common::{SAMPLE, write_ini};

// ---------------------------------------------------------------------------
// Load and typed access
// ---------------------------------------------------------------------------

#[test]
fn open_reads_typed_values() {
    let (_dir, path) = write_ini(SAMPLE);
    let ini = IniFile::open(&path).expect("sample should load");

    let network = SectionHandle::first("network");
    assert_eq!(ini.read(&network, "host", String::new()), "10.0.0.1");
    assert_eq!(ini.read(&network, "port", 0_u16), 8080);
    assert!(ini.read(&network, "secure", false));

    let limits = SectionHandle::first("limits");
    assert_eq!(ini.read(&limits, "retries", 0_u8), 3);
}

#[test]
fn duplicate_sections_are_independent_occurrences() {
    let (_dir, path) = write_ini(SAMPLE);
    let ini = IniFile::open(&path).expect("sample should load");

    assert_eq!(ini.occurrences_of("network"), 2);
    let range = ini.occurrence_range("network");
    assert_eq!(range.len(), 2);
    assert_eq!(range[0].occurrence(), 0);
    assert_eq!(range[1].occurrence(), 1);

    let second = SectionHandle::new("network", 1);
    assert_eq!(ini.read(&second, "host", String::new()), "10.0.0.2");
    // Occurrence 2 is out of range for two same-named sections.
    assert!(!ini.section_exists(&SectionHandle::new("network", 2)));
}

#[test]
fn open_missing_file_is_a_source_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = IniFile::open(dir.path().join("absent.ini")).expect_err("open should fail");
    assert!(matches!(err, IniError::Source { .. }));
}

#[test]
fn open_surfaces_parse_failures_with_line_numbers() {
    let (_dir, path) = write_ini("[a]\nk = 1\nk = 2\n");
    let err = IniFile::open(&path).expect_err("duplicate key should fail");
    assert!(matches!(err, IniError::DuplicateKey { line: 3, .. }));
}

// ---------------------------------------------------------------------------
// Round-trip
// ---------------------------------------------------------------------------

/// Saving a freshly loaded file reproduces its sections, keys, and values
/// with normalized spacing and ordering intact.
#[test]
fn save_after_load_is_content_equivalent() {
    let (_dir, path) = write_ini(SAMPLE);
    let ini = IniFile::open(&path).expect("sample should load");
    ini.save().expect("save should succeed");

    let reloaded = IniFile::open(&path).expect("saved output should load");
    assert_eq!(reloaded.occurrences_of("network"), 2);
    assert_eq!(reloaded.occurrences_of("limits"), 1);

    let network = SectionHandle::first("network");
    assert_eq!(reloaded.read(&network, "host", String::new()), "10.0.0.1");
    assert_eq!(reloaded.read(&network, "port", 0_u16), 8080);
    assert_eq!(
        reloaded.read(&SectionHandle::new("network", 1), "host", String::new()),
        "10.0.0.2"
    );
    assert_eq!(reloaded.read(&SectionHandle::first("limits"), "retries", 0_u8), 3);
}

/// A file already in canonical form survives a load/save cycle byte for
/// byte.
#[test]
fn canonical_file_round_trips_exactly() {
    let canonical = "[a]\nx = 1\ny = 2\n\n[b]\nz = 3\n\n";
    let (_dir, path) = write_ini(canonical);
    IniFile::open(&path)
        .expect("canonical input should load")
        .save()
        .expect("save should succeed");
    let written = std::fs::read_to_string(&path).expect("read saved file");
    assert_eq!(written, canonical);
}

// ---------------------------------------------------------------------------
// Mutation and persistence
// ---------------------------------------------------------------------------

#[test]
fn write_then_save_persists_the_new_value() {
    let (_dir, path) = write_ini(SAMPLE);
    let mut ini = IniFile::open(&path).expect("sample should load");

    let network = SectionHandle::first("network");
    ini.write(&network, "port", 5_u16);
    ini.save().expect("save should succeed");

    let written = std::fs::read_to_string(&path).expect("read saved file");
    assert!(written.contains("port = 5"));
    let reloaded = IniFile::open(&path).expect("reload");
    assert_eq!(reloaded.read(&network, "port", 0_u16), 5);
}

#[test]
fn new_keys_serialize_after_in_file_keys_in_write_order() {
    let (_dir, path) = write_ini("[s]\nold = 1\n");
    let mut ini = IniFile::open(&path).expect("load");
    let section = SectionHandle::first("s");
    ini.write(&section, "newer", 2_i32);
    ini.write(&section, "newest", 3_i32);
    ini.save().expect("save");

    let written = std::fs::read_to_string(&path).expect("read saved file");
    assert_eq!(written, "[s]\nold = 1\nnewer = 2\nnewest = 3\n\n");
}

#[test]
fn created_sections_serialize_after_parsed_ones() {
    let (_dir, path) = write_ini("[parsed]\nk = v\n");
    let mut ini = IniFile::open(&path).expect("load");
    let fresh = ini.create_section("fresh");
    ini.write(&fresh, "added", true);
    ini.save().expect("save");

    let written = std::fs::read_to_string(&path).expect("read saved file");
    assert_eq!(written, "[parsed]\nk = v\n\n[fresh]\nadded = true\n\n");
}

#[test]
fn building_a_file_from_scratch() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("fresh.ini");

    let mut ini = IniFile::create(&path);
    let general = ini.create_section("general");
    ini.write(&general, "name", "demo".to_string());
    ini.write(&general, "enabled", true);
    let general_again = ini.create_section("general");
    ini.write(&general_again, "name", "second".to_string());
    ini.save().expect("save");

    let reloaded = IniFile::open(&path).expect("reload");
    assert_eq!(reloaded.occurrences_of("general"), 2);
    assert_eq!(
        reloaded.read(&SectionHandle::new("general", 1), "name", String::new()),
        "second"
    );
}

#[test]
fn save_into_missing_directory_is_a_destination_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut ini = IniFile::create(dir.path().join("no-such-dir").join("out.ini"));
    let section = ini.create_section("s");
    ini.write(&section, "k", 1_i32);
    let err = ini.save().expect_err("save should fail");
    assert!(matches!(err, IniError::Destination { .. }));
}
