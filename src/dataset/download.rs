/*! Archive download and extraction.

Archives are fetched with a blocking client, saved under the destination folder and then unpacked next to it.
There is no retry nor caching: an existing archive file is overwritten.
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use log::{debug, info};
use reqwest::Url;

use crate::error::Error;

use super::config::Archive;

/// holds the http client that will make the requests.
pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// download `archive` into `dst`, returning the archive path.
    pub fn download(&self, archive: Archive, dst: &Path) -> Result<PathBuf, Error> {
        let url = Url::parse(archive.url()).map_err(|e| Error::Custom(e.to_string()))?;
        std::fs::create_dir_all(dst)?;
        let path = dst.join(archive.file_name());

        info!("downloading {} to {:?}", url, path);
        let response = self.client.get(url).send()?.error_for_status()?;
        let mut out = File::create(&path)?;
        let mut buf = BufReader::new(response);
        let written = std::io::copy(&mut buf, &mut out)?;
        debug!("wrote {} bytes to {:?}", written, path);

        Ok(path)
    }

    /// download and unpack `archive` into `dst`.
    pub fn fetch(&self, archive: Archive, dst: &Path) -> Result<(), Error> {
        let path = self.download(archive, dst)?;
        extract(&path, dst)
    }
}

/// Unpack a gzipped tarball into `dst`.
pub fn extract(archive: &Path, dst: &Path) -> Result<(), Error> {
    info!("extracting {:?} into {:?}", archive, dst);
    let f = File::open(archive)?;
    let gz = GzDecoder::new(BufReader::new(f));
    let mut tarball = tar::Archive::new(gz);
    tarball.unpack(dst)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    fn make_tarball(path: &Path, entries: &[(&str, &str)]) {
        let f = File::create(path).unwrap();
        let enc = GzEncoder::new(f, Compression::default());
        let mut builder = tar::Builder::new(enc);
        for (name, content) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, content.as_bytes())
                .unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap().flush().unwrap();
    }

    #[test]
    fn extract_tarball() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("task4_reddit.tgz");
        make_tarball(
            &archive,
            &[("task4_reddit/task4_reddit_test.txt", "1 hi\tthere\n")],
        );

        let dst = dir.path().join("data");
        extract(&archive, &dst).unwrap();

        let content =
            std::fs::read_to_string(dst.join("task4_reddit/task4_reddit_test.txt")).unwrap();
        assert_eq!(content, "1 hi\tthere\n");
    }

    #[test]
    fn extract_not_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("broken.tgz");
        std::fs::write(&archive, "definitely not gzip").unwrap();
        assert!(matches!(
            extract(&archive, dir.path()),
            Err(Error::Io(_))
        ));
    }

    #[test]
    #[ignore]
    fn download_reddit() {
        let dir = tempfile::tempdir().unwrap();
        Downloader::new()
            .fetch(Archive::Task4Reddit, dir.path())
            .unwrap();
    }
}
