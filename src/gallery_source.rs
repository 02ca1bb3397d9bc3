// SPDX-License-Identifier: MPL-2.0
//! Builds a [`Gallery`] from a TOML manifest or from a directory of images.
//!
//! Manifest layout:
//!
//! ```toml
//! heading = "Case studies"
//!
//! [[images]]
//! source = "covers/atlas.png"
//! alt_text = "Atlas cover"
//! caption = "Atlas"
//! ```
//!
//! Relative sources are resolved against the manifest's directory.

use crate::domain::gallery::{Gallery, ImageDescriptor};
use crate::error::{ManifestError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extension that marks a gallery manifest.
pub const MANIFEST_EXTENSION: &str = "toml";

#[derive(Debug, Deserialize)]
struct Manifest {
    heading: Option<String>,
    #[serde(default)]
    images: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    source: String,
    alt_text: Option<String>,
    caption: Option<String>,
}

/// Loads a gallery from `path`, which is either a manifest file or a
/// directory.
pub fn load(path: &Path) -> Result<Gallery> {
    if path.is_dir() {
        return scan_directory(path);
    }

    let is_manifest = path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MANIFEST_EXTENSION));
    if is_manifest {
        return load_manifest(path);
    }

    Err(ManifestError::UnsupportedPath(path.display().to_string()).into())
}

/// Async wrapper around [`load`] for use in an iced `Task`.
pub async fn load_async(path: PathBuf) -> Result<Gallery> {
    tokio::task::spawn_blocking(move || load(&path))
        .await
        .map_err(|e| crate::error::Error::Io(e.to_string()))?
}

/// Reads and parses a manifest file.
pub fn load_manifest(path: &Path) -> Result<Gallery> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let gallery = parse_manifest(&content, base_dir)?;
    info!(path = %path.display(), images = gallery.len(), "loaded gallery manifest");
    Ok(gallery)
}

/// Parses manifest text, resolving relative sources against `base_dir`.
pub fn parse_manifest(content: &str, base_dir: &Path) -> Result<Gallery> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| ManifestError::Parse(e.message().to_string()))?;

    let mut images = Vec::with_capacity(manifest.images.len());
    for (position, entry) in manifest.images.into_iter().enumerate() {
        let source = entry.source.trim();
        if source.is_empty() {
            return Err(ManifestError::MissingSource { position }.into());
        }

        let caption = entry.caption.unwrap_or_else(|| file_stem(source));
        let alt_text = entry.alt_text.unwrap_or_else(|| caption.clone());
        images.push(ImageDescriptor::new(
            resolve_source(source, base_dir),
            alt_text,
            caption,
        ));
    }

    let gallery = Gallery::new(images);
    Ok(match manifest.heading {
        Some(heading) => gallery.with_heading(heading),
        None => gallery,
    })
}

/// Scans `dir` (non-recursive) for supported image files.
///
/// Files are sorted alphabetically by name and captioned with their stem.
/// The heading is the directory name.
pub fn scan_directory(dir: &Path) -> Result<Gallery> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();
    paths.sort_by_key(|path| path.file_name().map(|n| n.to_string_lossy().to_lowercase()));

    let images: Vec<ImageDescriptor> = paths
        .iter()
        .map(|path| {
            let caption = file_stem(&path.to_string_lossy());
            ImageDescriptor::new(path.to_string_lossy(), caption.clone(), caption)
        })
        .collect();
    debug!(dir = %dir.display(), images = images.len(), "scanned gallery directory");

    let gallery = Gallery::new(images);
    Ok(match dir.file_name() {
        Some(name) => gallery.with_heading(name.to_string_lossy()),
        None => gallery,
    })
}

/// Returns true if the `image` crate can decode files with this extension.
pub fn is_supported_image(path: &Path) -> bool {
    image_rs::ImageFormat::from_path(path).is_ok_and(|format| format.reading_enabled())
}

fn resolve_source(source: &str, base_dir: &Path) -> String {
    if source.contains("://") {
        return source.to_string();
    }
    let path = Path::new(source);
    if path.is_absolute() {
        source.to_string()
    } else {
        base_dir.join(path).to_string_lossy().into_owned()
    }
}

fn file_stem(source: &str) -> String {
    let trimmed = source.strip_prefix("file://").unwrap_or(source);
    Path::new(trimmed)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn parse_manifest_reads_entries_in_order() {
        let content = r#"
            heading = "Case studies"

            [[images]]
            source = "/abs/atlas.png"
            alt_text = "Atlas cover"
            caption = "Atlas"

            [[images]]
            source = "/abs/beacon.jpg"
            alt_text = "Beacon cover"
            caption = "Beacon"
        "#;
        let gallery = parse_manifest(content, Path::new("/base")).expect("valid manifest");

        assert_eq!(gallery.heading(), Some("Case studies"));
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.images()[0].caption, "Atlas");
        assert_eq!(gallery.images()[1].alt_text, "Beacon cover");
    }

    #[test]
    fn parse_manifest_resolves_relative_sources() {
        let content = "[[images]]\nsource = \"covers/a.png\"\n";
        let gallery = parse_manifest(content, Path::new("/gallery")).expect("valid manifest");
        assert_eq!(
            gallery.images()[0].source,
            Path::new("/gallery").join("covers/a.png").to_string_lossy()
        );
    }

    #[test]
    fn parse_manifest_keeps_uris_untouched() {
        let content = "[[images]]\nsource = \"file:///srv/a.png\"\n";
        let gallery = parse_manifest(content, Path::new("/gallery")).expect("valid manifest");
        assert_eq!(gallery.images()[0].source, "file:///srv/a.png");
    }

    #[test]
    fn parse_manifest_fills_missing_caption_and_alt_text() {
        let content = r#"
            [[images]]
            source = "/abs/sunset.png"

            [[images]]
            source = "/abs/dawn.png"
            caption = "Dawn"
        "#;
        let gallery = parse_manifest(content, Path::new("/")).expect("valid manifest");

        assert_eq!(gallery.heading(), None);
        assert_eq!(gallery.images()[0].caption, "sunset");
        assert_eq!(gallery.images()[0].alt_text, "sunset");
        assert_eq!(gallery.images()[1].alt_text, "Dawn");
    }

    #[test]
    fn parse_manifest_rejects_blank_source() {
        let content = "[[images]]\nsource = \"/a.png\"\n\n[[images]]\ncaption = \"orphan\"\n";
        match parse_manifest(content, Path::new("/")) {
            Err(Error::Manifest(ManifestError::MissingSource { position })) => {
                assert_eq!(position, 1);
            }
            other => panic!("expected MissingSource, got {other:?}"),
        }
    }

    #[test]
    fn parse_manifest_reports_invalid_toml() {
        let result = parse_manifest("images = [[[", Path::new("/"));
        assert!(matches!(
            result,
            Err(Error::Manifest(ManifestError::Parse(_)))
        ));
    }

    #[test]
    fn empty_manifest_gives_empty_gallery() {
        let gallery = parse_manifest("", Path::new("/")).expect("empty manifest is valid");
        assert!(gallery.is_empty());
    }

    #[test]
    fn scan_directory_keeps_supported_images_sorted() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "c.png");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "B.webp");
        create_test_image(temp_dir.path(), "notes.txt");

        let gallery = scan_directory(temp_dir.path()).expect("scan succeeds");
        let captions: Vec<_> = gallery.images().iter().map(|i| i.caption.as_str()).collect();
        assert_eq!(captions, vec!["a", "B", "c"]);
    }

    #[test]
    fn scan_directory_uses_directory_name_as_heading() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let album = temp_dir.path().join("holiday");
        fs::create_dir(&album).expect("failed to create album dir");
        create_test_image(&album, "beach.png");

        let gallery = scan_directory(&album).expect("scan succeeds");
        assert_eq!(gallery.heading(), Some("holiday"));
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn scan_directory_ignores_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("failed to create dir");
        create_test_image(temp_dir.path(), "real.png");

        let gallery = scan_directory(temp_dir.path()).expect("scan succeeds");
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn load_dispatches_on_path_kind() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "one.png");
        let manifest = temp_dir.path().join("gallery.toml");
        fs::write(&manifest, "heading = \"Mine\"\n[[images]]\nsource = \"one.png\"\n")
            .expect("failed to write manifest");

        let from_dir = load(temp_dir.path()).expect("directory loads");
        assert_eq!(from_dir.len(), 1);

        let from_manifest = load(&manifest).expect("manifest loads");
        assert_eq!(from_manifest.heading(), Some("Mine"));
        assert_eq!(
            from_manifest.images()[0].local_path(),
            temp_dir.path().join("one.png")
        );
    }

    #[test]
    fn load_rejects_other_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = create_test_image(temp_dir.path(), "single.png");
        assert!(matches!(
            load(&path),
            Err(Error::Manifest(ManifestError::UnsupportedPath(_)))
        ));
    }

    #[test]
    fn supported_image_detection_follows_extension() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.png")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("README")));
    }
}
