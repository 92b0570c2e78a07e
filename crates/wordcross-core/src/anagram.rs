use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sorted-letter key identifying an anagram class.
///
/// Two words get the same signature exactly when they are anagrams of
/// each other. Signatures are index keys only and never shown to the
/// player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature(String);

impl Signature {
    /// Compute the signature of a word by sorting its letters.
    ///
    /// Lexicon words are already lowercase ASCII; for anything else
    /// coming through the public surface, uppercase letters are
    /// folded and non-letter bytes dropped rather than polluting the
    /// signature.
    pub fn of(word: &str) -> Self {
        let mut letters: Vec<u8> = word
            .bytes()
            .map(|b| b.to_ascii_lowercase())
            .filter(u8::is_ascii_lowercase)
            .collect();
        letters.sort_unstable();
        Self(letters.into_iter().map(char::from).collect())
    }

    /// Multiset-subset test: does every letter of `self` occur in
    /// `other` at least as many times as it does here?
    ///
    /// This is the sole admission test for candidate words: a word
    /// qualifies for a root iff its signature is a subset of the
    /// root's signature.
    pub fn is_subset_of(&self, other: &Signature) -> bool {
        let mut counts = [0u8; 26];
        for b in other.0.bytes() {
            debug_assert!(b.is_ascii_lowercase());
            counts[(b - b'a') as usize] += 1;
        }
        for b in self.0.bytes() {
            let slot = &mut counts[(b - b'a') as usize];
            if *slot == 0 {
                return false;
            }
            *slot -= 1;
        }
        true
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The signature's letters, in sorted order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

/// Convenience free function mirroring [`Signature::of`].
pub fn signature(word: &str) -> Signature {
    Signature::of(word)
}

/// Groups every lexicon word by its signature.
///
/// Built once per dictionary and read-only afterwards; `generate`
/// calls share it freely.
pub struct AnagramIndex {
    buckets: HashMap<Signature, Vec<String>>,
    // bucket iteration order = first-appearance order in the lexicon,
    // which keeps candidate pools deterministic for a fixed dictionary
    order: Vec<Signature>,
}

impl AnagramIndex {
    /// Group `words` into anagram buckets.
    pub fn build(words: &[String]) -> Self {
        let mut buckets: HashMap<Signature, Vec<String>> = HashMap::new();
        let mut order = Vec::new();
        for word in words {
            let sig = Signature::of(word);
            let bucket = buckets.entry(sig.clone()).or_default();
            if bucket.is_empty() {
                order.push(sig);
            }
            bucket.push(word.clone());
        }
        Self { buckets, order }
    }

    /// Words sharing `sig`, in dictionary order.
    pub fn bucket(&self, sig: &Signature) -> &[String] {
        self.buckets.get(sig).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every word whose letters fit inside `root`, flattened in
    /// bucket-appearance order.
    pub fn subset_words(&self, root: &Signature) -> Vec<String> {
        let mut pool = Vec::new();
        for sig in &self.order {
            if sig.is_subset_of(root) {
                pool.extend(self.buckets[sig].iter().cloned());
            }
        }
        pool
    }

    /// Number of distinct signatures.
    pub fn bucket_count(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rng;

    #[test]
    fn signature_sorts_letters() {
        assert_eq!(Signature::of("trust").as_str(), "rsttu");
        assert_eq!(Signature::of("star").as_str(), "arst");
    }

    #[test]
    fn signature_normalizes_case_and_drops_non_letters() {
        assert_eq!(Signature::of("Trust"), Signature::of("trust"));
        assert_eq!(Signature::of("st4r!"), Signature::of("str"));
        // multi-byte input keeps its real letters instead of
        // collapsing to the empty signature, which would be a subset
        // of everything
        assert_eq!(Signature::of("caf\u{e9}"), Signature::of("caf"));
        assert!(!Signature::of("r\u{e9}sum\u{e9}").is_subset_of(&Signature::of("trust")));
    }

    #[test]
    fn anagrams_share_a_signature() {
        assert_eq!(Signature::of("stone"), Signature::of("notes"));
        assert_eq!(Signature::of("stone"), Signature::of("tones"));
        assert_ne!(Signature::of("stone"), Signature::of("stoner"));
    }

    #[test]
    fn signature_is_idempotent_under_permutation() {
        let mut rng = Rng::with_seed(11);
        let word = "settler";
        for _ in 0..50 {
            let mut letters: Vec<u8> = word.bytes().collect();
            rng.shuffle(&mut letters);
            let permuted = String::from_utf8(letters).unwrap();
            assert_eq!(Signature::of(&permuted), Signature::of(word));
        }
    }

    #[test]
    fn subset_respects_multiplicity() {
        // "letter" has two t's and two e's
        let root = Signature::of("letter");
        assert!(Signature::of("tree").is_subset_of(&root));
        assert!(Signature::of("lett").is_subset_of(&root));
        // three t's do not fit
        assert!(!Signature::of("tttl").is_subset_of(&root));
    }

    #[test]
    fn subset_edge_cases() {
        let root = Signature::of("trust");
        assert!(root.is_subset_of(&root)); // equal strings
        assert!(Signature::of("").is_subset_of(&root)); // empty is subset
        assert!(!Signature::of("mopy").is_subset_of(&root)); // disjoint
        assert!(!root.is_subset_of(&Signature::of(""))); // reverse fails
    }

    #[test]
    fn subset_randomized_against_naive_count() {
        let mut rng = Rng::with_seed(42);
        for _ in 0..500 {
            let a = random_word(&mut rng, 5);
            let b = random_word(&mut rng, 7);
            let expected = naive_subset(&a, &b);
            assert_eq!(
                Signature::of(&a).is_subset_of(&Signature::of(&b)),
                expected,
                "a={a} b={b}"
            );
        }
    }

    fn random_word(rng: &mut Rng, max_len: usize) -> String {
        // narrow alphabet so subsets actually occur
        let len = rng.next_usize(max_len) + 1;
        (0..len)
            .map(|_| (b'a' + rng.next_usize(5) as u8) as char)
            .collect()
    }

    fn naive_subset(a: &str, b: &str) -> bool {
        a.chars()
            .all(|c| a.matches(c).count() <= b.matches(c).count())
    }

    #[test]
    fn build_puts_every_word_in_exactly_one_bucket() {
        let words: Vec<String> = ["stone", "notes", "tones", "star", "rats"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let index = AnagramIndex::build(&words);
        assert_eq!(index.bucket_count(), 2);
        assert_eq!(index.bucket(&Signature::of("stone")), ["stone", "notes", "tones"]);
        assert_eq!(index.bucket(&Signature::of("star")), ["star", "rats"]);
    }

    #[test]
    fn subset_words_applies_the_literal_rule() {
        let words: Vec<String> = ["rust", "trust", "star", "stair"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let index = AnagramIndex::build(&words);
        // "star" and "stair" both need an 'a' that "trust" lacks
        let pool = index.subset_words(&Signature::of("trust"));
        assert_eq!(pool, ["rust", "trust"]);
    }
}
