//! Content hashing for collision resolution

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tagsort_core::{FileAndHash, Result};

/// Default buffer size for hashing (64KB)
const BUFFER_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 of a file as lowercase hex
///
/// The file is streamed, never loaded whole.
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Hash a file and pair it with its path
pub fn file_and_hash(path: &Path) -> Result<FileAndHash> {
    Ok(FileAndHash::new(path, hash_file(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_hash_known_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("abc.bin");
        fs::write(&path, b"abc").unwrap();

        assert_eq!(
            hash_file(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        assert_eq!(
            hash_file(&path).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_spans_multiple_buffers() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.bin");
        let b = temp.path().join("b.bin");
        let mut data = vec![7u8; BUFFER_SIZE * 3 + 11];
        fs::write(&a, &data).unwrap();
        *data.last_mut().unwrap() = 8;
        fs::write(&b, &data).unwrap();

        let hash_a = hash_file(&a).unwrap();
        assert_eq!(hash_a.len(), 64);
        assert_eq!(hash_a, hash_file(&a).unwrap());
        assert_ne!(hash_a, hash_file(&b).unwrap());
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(hash_file(&temp.path().join("missing.bin")).is_err());
    }

    #[test]
    fn test_file_and_hash_pairs_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("abc.bin");
        fs::write(&path, b"abc").unwrap();

        let pair = file_and_hash(&path).unwrap();
        assert_eq!(pair.filepath, path);
        assert_eq!(pair.hash, hash_file(&path).unwrap());
    }
}
