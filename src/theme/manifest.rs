//! Theme manifests on disk.
//!
//! Layout:
//!
//! ```text
//! images/
//!   cats/
//!     manifest.json   ["cat1.png", "cat2.png", "cat10.png"]
//!     cat1.png
//!     ...
//! ```
//!
//! [`write_manifests`] regenerates every `manifest.json` after images are
//! added or removed; [`ManifestThemes`] reads them at game start.

use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{CharacterFace, ThemeSupply};
use crate::core::ThemeError;

/// File extensions recognised as images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];

const MANIFEST_FILE: &str = "manifest.json";

/// Themes backed by a directory of manifest-bearing folders.
#[derive(Clone, Debug)]
pub struct ManifestThemes {
    root: PathBuf,
}

impl ManifestThemes {
    /// Read themes from folders under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The themes root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ThemeSupply for ManifestThemes {
    fn characters(&self, theme: &str) -> Result<Vec<CharacterFace>, ThemeError> {
        let folder = self.root.join(theme);
        let path = folder.join(MANIFEST_FILE);

        let text = fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ThemeError::UnknownTheme(theme.to_string()),
            _ => ThemeError::Io { path: path.clone(), source },
        })?;
        let files: Vec<String> =
            serde_json::from_str(&text).map_err(|source| ThemeError::Manifest { path: path.clone(), source })?;

        if files.is_empty() {
            return Err(ThemeError::EmptyTheme(theme.to_string()));
        }
        debug!(theme, images = files.len(), "loaded theme manifest");

        Ok(files
            .into_iter()
            .map(|file| {
                let name = Path::new(&file)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned());
                CharacterFace {
                    image: folder.join(&file).to_string_lossy().into_owned(),
                    name,
                }
            })
            .collect())
    }
}

/// List the image files in a theme folder, naturally sorted.
pub fn scan_theme_dir(dir: &Path) -> Result<Vec<String>, ThemeError> {
    let io_err = |source: std::io::Error| ThemeError::Io { path: dir.to_path_buf(), source };

    let mut images = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if !entry.file_type().map_err(io_err)?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_image(&name) {
            images.push(name);
        }
    }

    images.sort_by(|a, b| natural_cmp(a, b));
    Ok(images)
}

/// Write `manifest.json` into every theme folder under `root`.
///
/// Returns `(theme, image_count)` for each folder, sorted by theme name.
pub fn write_manifests(root: &Path) -> Result<Vec<(String, usize)>, ThemeError> {
    let io_err = |source: std::io::Error| ThemeError::Io { path: root.to_path_buf(), source };

    let mut themes = Vec::new();
    for entry in fs::read_dir(root).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if entry.file_type().map_err(io_err)?.is_dir() {
            themes.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    themes.sort_by(|a, b| natural_cmp(a, b));

    let mut written = Vec::with_capacity(themes.len());
    for theme in themes {
        let folder = root.join(&theme);
        let images = scan_theme_dir(&folder)?;
        let path = folder.join(MANIFEST_FILE);

        let json = serde_json::to_string_pretty(&images)
            .map_err(|source| ThemeError::Manifest { path: path.clone(), source })?;
        fs::write(&path, json).map_err(|source| ThemeError::Io { path: path.clone(), source })?;

        info!(theme = %theme, images = images.len(), "wrote theme manifest");
        written.push((theme, images.len()));
    }

    Ok(written)
}

fn is_image(file: &str) -> bool {
    Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

/// Compare strings so embedded numbers sort by value (`img2` < `img10`).
///
/// Letters compare case-insensitively; exact byte order breaks remaining ties.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (is_digits(x), is_digits(y)) {
                    (true, true) => compare_numbers(x, y),
                    _ => compare_text(x, y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn is_digits(chunk: &str) -> bool {
    chunk.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

fn compare_numbers(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

fn compare_text(x: &str, y: &str) -> Ordering {
    x.chars()
        .flat_map(char::to_lowercase)
        .cmp(y.chars().flat_map(char::to_lowercase))
}

/// Splits a string into alternating digit and non-digit runs.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(i, _)| i);

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}
