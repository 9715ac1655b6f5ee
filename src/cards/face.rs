//! Card faces and face-supply strategies.
//!
//! A card's identity for matching is its `PairId`. The `Face` is only what
//! the renderer shows, so two pairs may share a glyph on boards larger than
//! the emoji pool without breaking matching.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::shuffle::shuffled;
use crate::core::GameRng;
use crate::theme::{emoji_faces, CharacterFace, ThemeSupply};

/// Match key shared by exactly two cards on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// What the renderer shows on a revealed card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Image reference with an optional display name.
    Image { path: String, name: Option<String> },
    /// Emoji glyph.
    Emoji(String),
}

impl Face {
    /// Create an image face without a display name.
    pub fn image(path: impl Into<String>) -> Self {
        Face::Image { path: path.into(), name: None }
    }

    /// Create an emoji face.
    pub fn emoji(glyph: impl Into<String>) -> Self {
        Face::Emoji(glyph.into())
    }
}

impl From<CharacterFace> for Face {
    fn from(character: CharacterFace) -> Self {
        Face::Image { path: character.image, name: character.name }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Image { name: Some(name), .. } => f.write_str(name),
            Face::Image { path, name: None } => f.write_str(path),
            Face::Emoji(glyph) => f.write_str(glyph),
        }
    }
}

/// Policy deciding what each pair displays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceSupply {
    /// Fixed list of image paths, used in order.
    Images(Vec<String>),
    /// Characters of a named theme, falling back to the emoji pool.
    Theme(String),
    /// Synthetic pair IDs mapped onto the emoji pool.
    #[default]
    PairIds,
}

impl FaceSupply {
    /// Produce `pairs` distinct faces.
    ///
    /// Never fails: missing or undersized themes and short image lists fall
    /// back to the emoji pool.
    pub fn resolve(&self, pairs: usize, themes: &dyn ThemeSupply, rng: &mut GameRng) -> Vec<Face> {
        match self {
            FaceSupply::Images(paths) => {
                let distinct = distinct_in_order(paths.iter().cloned());
                if distinct.len() >= pairs {
                    distinct.into_iter().take(pairs).map(Face::image).collect()
                } else {
                    warn!(available = distinct.len(), needed = pairs, "image list too short, using emoji pool");
                    emoji_faces(pairs, rng)
                }
            }
            FaceSupply::Theme(theme) => match themes.characters(theme) {
                Ok(characters) => {
                    let mut seen = FxHashSet::default();
                    let characters: Vec<CharacterFace> = characters
                        .into_iter()
                        .filter(|c| seen.insert(c.image.clone()))
                        .collect();

                    if characters.len() >= pairs {
                        shuffled(&characters, rng)
                            .into_iter()
                            .take(pairs)
                            .map(Face::from)
                            .collect()
                    } else {
                        warn!(
                            theme = %theme,
                            available = characters.len(),
                            needed = pairs,
                            "theme has too few characters, using emoji pool"
                        );
                        emoji_faces(pairs, rng)
                    }
                }
                Err(err) => {
                    warn!(theme = %theme, error = %err, "theme failed to load, using emoji pool");
                    emoji_faces(pairs, rng)
                }
            },
            FaceSupply::PairIds => emoji_faces(pairs, rng),
        }
    }
}

fn distinct_in_order(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    items.filter(|item| seen.insert(item.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeRegistry, EMOJI_POOL};

    fn cats(count: usize) -> ThemeRegistry {
        let mut themes = ThemeRegistry::new();
        themes.register(
            "cats",
            (0..count).map(|i| CharacterFace::named(format!("cats/{i}.png"), format!("Cat {i}"))),
        );
        themes
    }

    #[test]
    fn test_images_used_in_order() {
        let supply = FaceSupply::Images(vec!["a.png".into(), "b.png".into(), "c.png".into()]);
        let mut rng = GameRng::new(1);

        let faces = supply.resolve(2, &ThemeRegistry::new(), &mut rng);

        assert_eq!(faces, vec![Face::image("a.png"), Face::image("b.png")]);
    }

    #[test]
    fn test_short_image_list_falls_back() {
        let supply = FaceSupply::Images(vec!["a.png".into(), "a.png".into()]);
        let mut rng = GameRng::new(1);

        let faces = supply.resolve(2, &ThemeRegistry::new(), &mut rng);

        assert_eq!(faces.len(), 2);
        assert!(faces.iter().all(|f| matches!(f, Face::Emoji(_))));
    }

    #[test]
    fn test_theme_characters_used() {
        let themes = cats(10);
        let mut rng = GameRng::new(5);

        let faces = FaceSupply::Theme("cats".into()).resolve(6, &themes, &mut rng);

        assert_eq!(faces.len(), 6);
        let distinct: FxHashSet<_> = faces.iter().collect();
        assert_eq!(distinct.len(), 6);
        assert!(faces.iter().all(|f| matches!(f, Face::Image { name: Some(_), .. })));
    }

    #[test]
    fn test_small_theme_falls_back_to_emoji() {
        let themes = cats(3);
        let mut rng = GameRng::new(5);

        let faces = FaceSupply::Theme("cats".into()).resolve(4, &themes, &mut rng);

        assert_eq!(faces.len(), 4);
        assert!(faces.iter().all(|f| matches!(f, Face::Emoji(_))));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_emoji() {
        let mut rng = GameRng::new(5);
        let faces = FaceSupply::Theme("missing".into()).resolve(3, &ThemeRegistry::new(), &mut rng);

        assert_eq!(faces.len(), 3);
        for face in &faces {
            match face {
                Face::Emoji(glyph) => assert!(EMOJI_POOL.contains(&glyph.as_str())),
                other => panic!("unexpected face {other:?}"),
            }
        }
    }

    #[test]
    fn test_face_display() {
        assert_eq!(Face::emoji("🐶").to_string(), "🐶");
        assert_eq!(Face::image("x.png").to_string(), "x.png");
        let named = Face::Image { path: "x.png".into(), name: Some("Rex".into()) };
        assert_eq!(named.to_string(), "Rex");
    }
}
