use crate::anagram::Signature;
use crate::grid::PlacedWord;
use crate::rng::Rng;
use serde::{Deserialize, Serialize};

/// The finished puzzle bundle handed to a frontend.
///
/// Immutable once produced; per-player state (found words, revealed
/// letters) lives with the consumer, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    /// The word whose letters bound the puzzle's vocabulary.
    pub root: String,
    /// Sorted letters of the root.
    pub root_signature: Signature,
    /// The root's letters in randomized presentation order.
    pub display_letters: Vec<char>,
    /// Exactly the words that were placed, in placement order. These
    /// are the only acceptable answers for the level.
    pub valid_words: Vec<String>,
    /// Word placements with anchors normalized to a (0,0) origin.
    pub placed: Vec<PlacedWord>,
    /// Tight bounding-box extent of the occupied cells.
    pub width: i32,
    pub height: i32,
}

/// Normalize placements to the origin and package the level.
pub(crate) fn assemble(root: &str, mut placed: Vec<PlacedWord>, rng: &mut Rng) -> LevelData {
    let (min_x, min_y, max_x, max_y) = bounding_box(&placed);
    for word in &mut placed {
        word.x -= min_x;
        word.y -= min_y;
    }

    let root_signature = Signature::of(root);
    let mut display_letters: Vec<char> = root_signature.letters().collect();
    rng.shuffle(&mut display_letters);

    LevelData {
        root: root.to_string(),
        root_signature,
        display_letters,
        valid_words: placed.iter().map(|p| p.word.clone()).collect(),
        placed,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    }
}

/// Min and max occupied coordinates over every placement, accounting
/// for word length and axis.
fn bounding_box(placed: &[PlacedWord]) -> (i32, i32, i32, i32) {
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for word in placed {
        let last = word.cell(word.len().saturating_sub(1));
        min_x = min_x.min(word.x);
        min_y = min_y.min(word.y);
        max_x = max_x.max(last.0);
        max_y = max_y.max(last.1);
    }
    if placed.is_empty() {
        (0, 0, 0, 0)
    } else {
        (min_x, min_y, max_x, max_y)
    }
}

impl LevelData {
    /// The character at a grid cell, if any placement covers it.
    pub fn letter_at(&self, x: i32, y: i32) -> Option<char> {
        self.placed
            .iter()
            .flat_map(|p| p.cells())
            .find(|((cx, cy), _)| *cx == x && *cy == y)
            .map(|(_, ch)| ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Axis;

    #[test]
    fn normalizes_to_origin() {
        let placed = vec![
            PlacedWord::new("notes", 0, -4, Axis::Vertical),
            PlacedWord::new("stone", -2, 0, Axis::Horizontal),
        ];
        let level = assemble("stone", placed, &mut Rng::with_seed(1));

        let min_x = level
            .placed
            .iter()
            .flat_map(|p| p.cells())
            .map(|((x, _), _)| x)
            .min()
            .unwrap();
        let min_y = level
            .placed
            .iter()
            .flat_map(|p| p.cells())
            .map(|((_, y), _)| y)
            .min()
            .unwrap();
        assert_eq!((min_x, min_y), (0, 0));
        assert_eq!(level.width, 5);
        assert_eq!(level.height, 5);
    }

    #[test]
    fn display_letters_are_a_permutation_of_the_root() {
        let placed = vec![PlacedWord::new("letter", 0, 0, Axis::Horizontal)];
        let level = assemble("letter", placed, &mut Rng::with_seed(9));
        let mut shown = level.display_letters.clone();
        shown.sort_unstable();
        let mut expected: Vec<char> = "letter".chars().collect();
        expected.sort_unstable();
        assert_eq!(shown, expected);
    }

    #[test]
    fn valid_words_match_placements_exactly() {
        let placed = vec![
            PlacedWord::new("stone", 0, 0, Axis::Horizontal),
            PlacedWord::new("tale", 1, 0, Axis::Vertical),
        ];
        let level = assemble("stone", placed, &mut Rng::with_seed(2));
        assert_eq!(level.valid_words, ["stone", "tale"]);
    }

    #[test]
    fn empty_placement_yields_a_degenerate_box() {
        let level = assemble("stone", Vec::new(), &mut Rng::with_seed(3));
        assert_eq!((level.width, level.height), (1, 1));
        assert!(level.valid_words.is_empty());
    }

    #[test]
    fn serde_round_trip() {
        let placed = vec![PlacedWord::new("stone", 0, 0, Axis::Horizontal)];
        let level = assemble("stone", placed, &mut Rng::with_seed(4));
        let json = serde_json::to_string(&level).unwrap();
        let back: LevelData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.root, level.root);
        assert_eq!(back.placed, level.placed);
        assert_eq!(back.display_letters, level.display_letters);
        assert_eq!((back.width, back.height), (level.width, level.height));
    }
}
