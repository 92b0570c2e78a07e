use crate::grid::{Axis, Grid, PlacedWord};
use log::debug;
use std::collections::HashSet;

/// Greedy placement engine: one mutable grid plus a growing list of
/// committed words.
///
/// Words from the ranked pool are tried in cycling order; each
/// candidate is anchored at the first legal crossing found against
/// the already-placed words. First-found, not best-found — the
/// tie-break order (placed-word order, then letter position in the
/// placed word, then letter position in the candidate) is part of the
/// engine's observable behavior.
pub(crate) struct Layout {
    grid: Grid,
    placed: Vec<PlacedWord>,
    placed_words: HashSet<String>,
    max_words: usize,
}

impl Layout {
    pub fn new(max_words: usize) -> Self {
        Self {
            grid: Grid::new(),
            placed: Vec::new(),
            placed_words: HashSet::new(),
            max_words,
        }
    }

    /// Lay out words from `ranked` until `max_words` are placed or the
    /// attempt budget (`ranked.len() * attempt_multiplier`) runs out.
    /// Coordinates in the result are unnormalized; the assembler
    /// translates them.
    pub fn run(
        ranked: &[String],
        root_len: usize,
        max_words: usize,
        attempt_multiplier: usize,
    ) -> Vec<PlacedWord> {
        let mut layout = Layout::new(max_words);
        let Some(seed) = pick_seed(ranked, root_len) else {
            return layout.placed;
        };
        layout.commit(PlacedWord::new(seed, 0, 0, Axis::Horizontal));

        let max_attempts = ranked.len() * attempt_multiplier;
        for attempt in 0..max_attempts {
            if layout.placed.len() >= layout.max_words {
                break;
            }
            if layout.placed_words.len() == ranked.len() {
                break;
            }
            let word = &ranked[attempt % ranked.len()];
            if layout.placed_words.contains(word) {
                continue;
            }
            layout.try_cross(word);
        }
        debug!(
            "layout placed {} of {} target words",
            layout.placed.len(),
            layout.max_words
        );
        layout.placed
    }

    /// Search every placed word for a shared letter and take the first
    /// crossing geometry that passes `can_place`.
    fn try_cross(&mut self, word: &str) -> bool {
        let mut found = None;
        'search: for host in &self.placed {
            let axis = host.axis.perpendicular();
            let (dx, dy) = axis.step();
            for (i, host_ch) in host.word.chars().enumerate() {
                for (j, ch) in word.chars().enumerate() {
                    if host_ch != ch {
                        continue;
                    }
                    let cross = host.cell(i);
                    let anchor = (cross.0 - dx * j as i32, cross.1 - dy * j as i32);
                    let candidate = PlacedWord::new(word, anchor.0, anchor.1, axis);
                    if self.can_place(&candidate, cross) {
                        found = Some(candidate);
                        break 'search;
                    }
                }
            }
        }
        match found {
            Some(candidate) => {
                self.commit(candidate);
                true
            }
            None => false,
        }
    }

    /// Legality of anchoring `candidate` so that it crosses an
    /// existing word at `intersection`.
    fn can_place(&self, candidate: &PlacedWord, intersection: (i32, i32)) -> bool {
        let len = candidate.len();
        let (dx, dy) = candidate.axis.step();
        // perpendicular step, for off-axis neighbor checks
        let (px, py) = candidate.axis.perpendicular().step();

        for (k, (pos, ch)) in candidate.cells().enumerate() {
            if let Some(cell) = self.grid.get(pos) {
                // Occupied cells are only allowed at the intended
                // intersection, with a matching letter and room for a
                // second claimant.
                if cell.ch != ch || cell.claimants.len() >= 2 || pos != intersection {
                    return false;
                }
            } else if self.grid.is_occupied((pos.0 + px, pos.1 + py))
                || self.grid.is_occupied((pos.0 - px, pos.1 - py))
            {
                // An occupied perpendicular neighbor means the
                // candidate would graze an unrelated word without a
                // true crossing.
                return false;
            }

            // The run must not extend an existing word: the cells just
            // before the first letter and just after the last must be
            // empty.
            if k == 0 && self.grid.is_occupied((pos.0 - dx, pos.1 - dy)) {
                return false;
            }
            if k == len - 1 && self.grid.is_occupied((pos.0 + dx, pos.1 + dy)) {
                return false;
            }
        }
        true
    }

    fn commit(&mut self, candidate: PlacedWord) {
        let index = self.placed.len();
        self.grid.commit(&candidate, index);
        self.placed_words.insert(candidate.word.clone());
        self.placed.push(candidate);
    }
}

/// The seed word is the first ranked word matching the root's length,
/// falling back to the top-ranked word overall.
fn pick_seed(ranked: &[String], root_len: usize) -> Option<&str> {
    ranked
        .iter()
        .find(|w| w.len() == root_len)
        .or_else(|| ranked.first())
        .map(String::as_str)
}
