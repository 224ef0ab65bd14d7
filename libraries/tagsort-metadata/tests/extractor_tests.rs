//! Integration tests for lofty-backed identity extraction

mod test_helpers;

use std::fs;
use tagsort_core::{Identity, IdentityExtractor};
use tagsort_metadata::LoftyIdentityExtractor;
use tempfile::TempDir;
use test_helpers::write_mp3;

#[test]
fn reads_complete_id3v2_identity() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("song.mp3");
    write_mp3(
        &path,
        &[
            (b"TPE1", "Queen"),
            (b"TALB", "A Night at the Opera"),
            (b"TIT2", "Bohemian Rhapsody"),
            (b"TRCK", "11"),
        ],
    )
    .unwrap();

    let identity = LoftyIdentityExtractor::new().inspect(&path).unwrap();
    assert_eq!(
        identity,
        Identity::new("Queen", "A Night at the Opera", "Bohemian Rhapsody").with_track_number(11)
    );
}

#[test]
fn track_total_is_ignored() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("song.mp3");
    write_mp3(
        &path,
        &[
            (b"TPE1", "a"),
            (b"TALB", "b"),
            (b"TIT2", "c"),
            (b"TRCK", "1/12"),
        ],
    )
    .unwrap();

    let identity = LoftyIdentityExtractor::new().inspect(&path).unwrap();
    assert_eq!(identity.track_number, Some(1));
}

#[test]
fn missing_track_number_is_allowed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("song.mp3");
    write_mp3(&path, &[(b"TPE1", "a"), (b"TALB", "b"), (b"TIT2", "c")]).unwrap();

    let identity = LoftyIdentityExtractor::new().inspect(&path).unwrap();
    assert_eq!(identity, Identity::new("a", "b", "c"));
}

#[test]
fn missing_title_is_unrecognized() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("song.mp3");
    write_mp3(&path, &[(b"TPE1", "a"), (b"TALB", "b"), (b"TRCK", "1")]).unwrap();

    assert!(LoftyIdentityExtractor::new().inspect(&path).is_none());
}

#[test]
fn untagged_mp3_is_unrecognized() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("song.mp3");
    write_mp3(&path, &[]).unwrap();

    assert!(LoftyIdentityExtractor::new().inspect(&path).is_none());
}

#[test]
fn tags_are_found_regardless_of_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("misnamed.bin");
    write_mp3(&path, &[(b"TPE1", "a"), (b"TALB", "b"), (b"TIT2", "c")]).unwrap();

    assert!(LoftyIdentityExtractor::new().inspect(&path).is_some());
}

#[test]
fn non_audio_file_is_unrecognized() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("readme.txt");
    fs::write(&path, b"not audio").unwrap();

    assert!(LoftyIdentityExtractor::new().inspect(&path).is_none());
}
