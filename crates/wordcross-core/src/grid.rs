use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Orientation of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The crossing orientation. A word crossing a horizontal word is
    /// placed vertically, and vice versa.
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Unit step along this axis as an `(dx, dy)` pair.
    pub fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }
}

/// A word bound to an anchor cell and an axis.
///
/// Occupies `len` cells starting at `(x, y)` and extending right
/// (horizontal) or down (vertical). Cells are fixed for the rest of
/// the generation run once the word is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub x: i32,
    pub y: i32,
    pub axis: Axis,
}

impl PlacedWord {
    pub fn new(word: impl Into<String>, x: i32, y: i32, axis: Axis) -> Self {
        Self {
            word: word.into(),
            x,
            y,
            axis,
        }
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The cell holding the `i`-th letter.
    pub fn cell(&self, i: usize) -> (i32, i32) {
        let (dx, dy) = self.axis.step();
        (self.x + dx * i as i32, self.y + dy * i as i32)
    }

    /// Occupied cells paired with their letters, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = ((i32, i32), char)> + '_ {
        self.word.chars().enumerate().map(|(i, ch)| (self.cell(i), ch))
    }
}

/// One occupied grid cell: its letter and the placed words claiming
/// it (indices into the placement list, at most two).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub ch: char,
    pub claimants: Vec<usize>,
}

/// Sparse letter grid keyed by integer coordinates.
///
/// Coordinates are unbounded in both directions during layout; level
/// assembly normalizes them to a tight box at the end.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: HashMap<(i32, i32), Cell>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: (i32, i32)) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    pub fn is_occupied(&self, pos: (i32, i32)) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Record every cell of `placed`, registering `index` as a
    /// claimant. Cells already holding the same letter gain a second
    /// claimant; legality was established by the caller beforehand.
    pub fn commit(&mut self, placed: &PlacedWord, index: usize) {
        for (pos, ch) in placed.cells() {
            let cell = self.cells.entry(pos).or_insert(Cell {
                ch,
                claimants: Vec::new(),
            });
            debug_assert_eq!(cell.ch, ch, "letter mismatch at {pos:?}");
            debug_assert!(cell.claimants.len() < 2, "cell {pos:?} already full");
            cell.claimants.push(index);
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }
}
