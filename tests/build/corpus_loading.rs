//! Scanner behavior against real directories.

use std::fs;
use std::path::Path;

use recall::scan_notes;
use tempfile::TempDir;

fn write_note(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_scans_markdown_notes() {
    let dir = TempDir::new().unwrap();
    write_note(dir.path(), "2024-01-01.md", "first note");
    write_note(dir.path(), "2024-01-02.md", "second note here");

    let mut notes = scan_notes(dir.path()).unwrap();
    notes.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, "2024-01-01");
    assert_eq!(notes[0].content, "first note");
    assert_eq!(notes[1].word_count, 3);
}

#[test]
fn test_skips_reserved_aggregate() {
    let dir = TempDir::new().unwrap();
    write_note(dir.path(), "MEMORY.md", "rolling aggregate");
    write_note(dir.path(), "2024-01-01.md", "daily note");

    let notes = scan_notes(dir.path()).unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, "2024-01-01");
}

#[test]
fn test_ignores_non_markdown_files() {
    let dir = TempDir::new().unwrap();
    write_note(dir.path(), "2024-01-01.md", "daily note");
    write_note(dir.path(), "notes.txt", "stray text file");
    write_note(dir.path(), "long_term_memory.json", "{}");

    let notes = scan_notes(dir.path()).unwrap();

    assert_eq!(notes.len(), 1);
}

#[test]
fn test_unreadable_note_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    write_note(dir.path(), "2024-01-01.md", "fine");
    // invalid UTF-8 makes read_to_string fail for this one file
    fs::write(dir.path().join("2024-01-02.md"), [0xff, 0xfe, 0x00]).unwrap();

    let notes = scan_notes(dir.path()).unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, "2024-01-01");
}

#[test]
fn test_missing_directory_scans_empty() {
    let notes = scan_notes(Path::new("/nonexistent/memory")).unwrap();
    assert!(notes.is_empty());
}
