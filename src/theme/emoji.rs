//! Built-in emoji pool.
//!
//! Used directly by the `PairIds` strategy and as the fallback whenever theme
//! images are unavailable.

use crate::cards::{shuffled, Face};
use crate::core::GameRng;

/// Glyphs available without any theme assets.
pub const EMOJI_POOL: &[&str] = &[
    "🐶", "🐱", "🦊", "🐼", "🐸", "🦁", "🐵", "🐷", "🐰", "🐨", "🐯", "🦄",
    "🐮", "🐔", "🐧", "🐢", "🐙", "🦋", "🐝", "🐞", "🦀", "🐳", "🦉", "🐺",
];

/// Produce `pairs` emoji faces.
///
/// Shuffles a pool of synthetic pair IDs `0..max(pairs, EMOJI_POOL.len())`,
/// takes the first `pairs` and maps each ID onto the pool by modulo. Glyphs
/// repeat only when `pairs` exceeds the pool.
#[must_use]
pub fn emoji_faces(pairs: usize, rng: &mut GameRng) -> Vec<Face> {
    let pool_len = EMOJI_POOL.len();
    let ids: Vec<usize> = (0..pairs.max(pool_len)).collect();

    shuffled(&ids, rng)
        .into_iter()
        .take(pairs)
        .map(|id| Face::emoji(EMOJI_POOL[id % pool_len]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_distinct_within_pool() {
        let mut rng = GameRng::new(42);
        let faces = emoji_faces(EMOJI_POOL.len(), &mut rng);

        let distinct: FxHashSet<_> = faces.iter().collect();
        assert_eq!(distinct.len(), EMOJI_POOL.len());
    }

    #[test]
    fn test_beyond_pool_wraps() {
        let mut rng = GameRng::new(42);
        let faces = emoji_faces(EMOJI_POOL.len() + 6, &mut rng);

        assert_eq!(faces.len(), EMOJI_POOL.len() + 6);
        for face in &faces {
            match face {
                Face::Emoji(glyph) => assert!(EMOJI_POOL.contains(&glyph.as_str())),
                other => panic!("unexpected face {other:?}"),
            }
        }
    }

    #[test]
    fn test_selection_varies() {
        let mut rng = GameRng::new(42);
        let first = emoji_faces(4, &mut rng);
        let second = emoji_faces(4, &mut rng);

        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_pairs() {
        let mut rng = GameRng::new(1);
        assert!(emoji_faces(0, &mut rng).is_empty());
    }
}
