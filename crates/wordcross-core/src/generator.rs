use crate::anagram::{AnagramIndex, Signature};
use crate::layout::Layout;
use crate::level::{assemble, LevelData};
use crate::lexicon::{Lexicon, FALLBACK_ROOT};
use crate::rng::Rng;
use log::warn;

/// Knobs for level generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Stop once this many words are on the grid.
    pub max_words: usize,
    /// Attempt budget as a multiple of the candidate pool size.
    pub attempt_multiplier: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_words: 12,
            attempt_multiplier: 10,
        }
    }
}

/// Puzzle level generator.
///
/// Owns its random stream; every stochastic decision (root pick,
/// candidate ranking, display-letter shuffle) draws from it, so a
/// seeded generator produces identical levels for a fixed lexicon.
/// The lexicon and index are passed in per call and never mutated, so
/// one index can serve any number of generators.
pub struct Generator {
    config: GeneratorConfig,
    rng: Rng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: Rng::new(),
        }
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: Rng::new(),
        }
    }

    /// Create a generator with a fixed seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_seed_and_config(seed, GeneratorConfig::default())
    }

    /// Fixed seed and custom configuration together.
    pub fn with_seed_and_config(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: Rng::with_seed(seed),
        }
    }

    /// Generate a level whose root word has `target_len` letters.
    ///
    /// Never fails: a thin dictionary degrades to a shorter root, a
    /// missing pool degrades to a constant root, and a layout that
    /// runs out of legal crossings simply yields a smaller puzzle.
    pub fn generate(
        &mut self,
        lexicon: &Lexicon,
        index: &AnagramIndex,
        target_len: usize,
    ) -> LevelData {
        let root = self.select_root(lexicon, target_len);
        self.generate_from_root(&root, index)
    }

    /// Generate a level from a fixed root word. Useful for replaying a
    /// specific puzzle or pinning one down in tests.
    pub fn generate_from_root(&mut self, root: &str, index: &AnagramIndex) -> LevelData {
        let root_sig = Signature::of(root);
        let ranked = self.rank_candidates(index.subset_words(&root_sig));
        let placed = Layout::run(
            &ranked,
            root.len(),
            self.config.max_words,
            self.config.attempt_multiplier,
        );
        assemble(root, placed, &mut self.rng)
    }

    /// Pick a root of the requested length, stepping down one length
    /// before resorting to the constant fallback root.
    fn select_root(&mut self, lexicon: &Lexicon, target_len: usize) -> String {
        let of_len = |len: usize| -> Vec<&String> {
            lexicon.words().iter().filter(|w| w.len() == len).collect()
        };
        let mut pool = of_len(target_len);
        if pool.is_empty() {
            warn!(
                "no words of length {target_len}, falling back to {}",
                target_len.saturating_sub(1)
            );
            pool = of_len(target_len.saturating_sub(1));
        }
        if pool.is_empty() {
            warn!("no usable root candidates, using constant fallback root");
            return FALLBACK_ROOT.to_string();
        }
        pool[self.rng.next_usize(pool.len())].clone()
    }

    /// Length-biased random priority ranking: score each word
    /// `u^(1/len)` with `u` uniform in [0,1) and sort descending.
    /// Longer words tend to rank earlier without being deterministically
    /// first, which keeps the layout from being dominated by short
    /// words while preserving run-to-run variety.
    fn rank_candidates(&mut self, pool: Vec<String>) -> Vec<String> {
        let mut scored: Vec<(f64, String)> = pool
            .into_iter()
            .map(|word| {
                let score = self.rng.next_f64().powf(1.0 / word.len() as f64);
                (score, word)
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(_, word)| word).collect()
    }
}
