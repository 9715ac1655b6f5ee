//! Theme supply: character images grouped under a theme name.
//!
//! The engine only asks a `ThemeSupply` for a list of characters. Where they
//! come from is up to the host:
//!
//! - `ThemeRegistry`: in-memory themes registered at startup
//! - `ManifestThemes`: a directory of theme folders, each with a
//!   `manifest.json` listing its images (see [`write_manifests`])
//!
//! Load failures are never fatal. `FaceSupply::resolve` logs them and falls
//! back to the [`EMOJI_POOL`].

pub mod emoji;
pub mod manifest;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::ThemeError;

pub use emoji::{emoji_faces, EMOJI_POOL};
pub use manifest::{natural_cmp, scan_theme_dir, write_manifests, ManifestThemes, IMAGE_EXTENSIONS};

/// One character of a theme.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterFace {
    /// Image reference (path or URL).
    pub image: String,

    /// Optional display name.
    pub name: Option<String>,
}

impl CharacterFace {
    /// Create a character with only an image.
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into(), name: None }
    }

    /// Create a character with an image and display name.
    pub fn named(image: impl Into<String>, name: impl Into<String>) -> Self {
        Self { image: image.into(), name: Some(name.into()) }
    }
}

/// Source of theme characters.
pub trait ThemeSupply {
    /// Characters of `theme`, in the supplier's order.
    fn characters(&self, theme: &str) -> Result<Vec<CharacterFace>, ThemeError>;
}

/// In-memory theme registry.
///
/// ## Example
///
/// ```
/// use memory_match::theme::{CharacterFace, ThemeRegistry, ThemeSupply};
///
/// let mut themes = ThemeRegistry::new();
/// themes.register("space", [CharacterFace::new("rocket.png"), CharacterFace::new("moon.png")]);
///
/// assert_eq!(themes.characters("space").unwrap().len(), 2);
/// assert!(themes.characters("ocean").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: FxHashMap<String, Vec<CharacterFace>>,
}

impl ThemeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a theme.
    pub fn register(&mut self, theme: impl Into<String>, characters: impl IntoIterator<Item = CharacterFace>) {
        self.themes.insert(theme.into(), characters.into_iter().collect());
    }

    /// Check if a theme is registered.
    #[must_use]
    pub fn contains(&self, theme: &str) -> bool {
        self.themes.contains_key(theme)
    }

    /// Registered theme names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl ThemeSupply for ThemeRegistry {
    fn characters(&self, theme: &str) -> Result<Vec<CharacterFace>, ThemeError> {
        match self.themes.get(theme) {
            Some(characters) if characters.is_empty() => Err(ThemeError::EmptyTheme(theme.to_string())),
            Some(characters) => Ok(characters.clone()),
            None => Err(ThemeError::UnknownTheme(theme.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let mut themes = ThemeRegistry::new();
        themes.register("cats", [CharacterFace::named("tom.png", "Tom")]);
        themes.register("dogs", [CharacterFace::new("rex.png")]);

        assert_eq!(themes.len(), 2);
        assert!(themes.contains("cats"));
        assert_eq!(themes.names(), vec!["cats", "dogs"]);

        let cats = themes.characters("cats").unwrap();
        assert_eq!(cats[0].name.as_deref(), Some("Tom"));
    }

    #[test]
    fn test_registry_errors() {
        let mut themes = ThemeRegistry::new();
        themes.register("empty", []);

        assert!(matches!(themes.characters("empty"), Err(ThemeError::EmptyTheme(_))));
        assert!(matches!(themes.characters("nope"), Err(ThemeError::UnknownTheme(_))));
    }
}
