/*! Checksums of generated files

Files are hashed with sha384 and listed in a `sha384sum -c` compatible file.
!*/
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use sha2::{Digest, Sha384};

use crate::error::Error;

/// Write `<dir>/<name>_sha384.txt` holding the hashes of `files`.
///
/// Files are listed by file name, so `files` are expected to live in `dir`.
pub fn gen_checksum_file(dir: &Path, name: &str, files: &[PathBuf]) -> Result<PathBuf, Error> {
    let mut hasher = Sha384::new();
    let checksum_filepath = dir.join(format!("{}_sha384.txt", name));

    debug!("writing hashes to: {:?}", checksum_filepath);
    let mut checksum_file = File::create(&checksum_filepath)?;

    for f in files {
        info!("[{}] hashing {:?}", name, f);
        let hash = get_hash(f, &mut hasher)?;
        let filename = f
            .file_name()
            .ok_or_else(|| Error::Custom(format!("no file name in {:?}", f)))?
            .to_string_lossy();
        writeln!(&mut checksum_file, "{}  {}", hash, filename)?;
    }

    Ok(checksum_filepath)
}

/// compute the hash of the file pointed by the filepath by using [io::copy] between a file handler and the hasher.
#[inline]
fn get_hash(filepath: &Path, hasher: &mut Sha384) -> Result<String, Error> {
    let mut f = File::open(filepath)?;
    io::copy(&mut f, hasher)?;
    Ok(format!("{:x}", hasher.finalize_reset()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("train.jsonl");
        let b = dir.path().join("test.jsonl");
        std::fs::write(&a, "").unwrap();
        std::fs::write(&b, "abc").unwrap();

        let path = gen_checksum_file(dir.path(), "qa", &[a, b]).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        // sha384 of the empty string and of "abc"
        assert_eq!(lines[0], "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b  train.jsonl");
        assert_eq!(lines[1], "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7  test.jsonl");
    }
}
