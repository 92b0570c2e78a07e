use log::warn;
use std::collections::HashSet;

/// Excluded entries: proper nouns, brand names, jargon, and
/// abbreviations that slip into raw word lists.
const BLACKLIST: &[&str] = &[
    "ascii", "excel", "html", "http", "https", "intel", "jpeg", "linux", "nasa", "pepsi", "xerox",
    "xbox", "yahoo",
];

/// Literary and thematic words merged into every lexicon, bypassing
/// the source filter.
const PRIORITY_WORDS: &[&str] = &[
    "fable", "lyric", "novel", "poem", "prose", "quill", "rhyme", "sonnet", "stanza", "story",
    "verse",
];

/// Built-in dictionary used when the external word source is missing
/// or yields nothing usable. Skewed toward words with heavy letter
/// overlap so even the degraded mode produces connected puzzles.
const FALLBACK_WORDS: &[&str] = &[
    "arts", "earn", "east", "eats", "late", "lane", "lean", "left", "lest", "letter", "near",
    "neat", "nest", "note", "notes", "onset", "rate", "rats", "rental", "rest", "seat", "sent",
    "slate", "stale", "star", "stare", "start", "state", "steal", "stone", "tale", "tales",
    "taste", "tears", "tense", "tetras", "tone", "tones", "treat", "trees", "lattes", "settle",
    "settler", "letters", "rattle", "rattles", "stellar",
];

/// Root used when even the length fallback finds nothing to pick from.
pub(crate) const FALLBACK_ROOT: &str = "letter";

/// Filtering rules applied to the raw word source.
#[derive(Debug, Clone)]
pub struct LexiconConfig {
    /// Shortest accepted word.
    pub min_len: usize,
    /// Longest accepted word.
    pub max_len: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            min_len: 4,
            max_len: 7,
        }
    }
}

/// The accepted word list plus a membership set for answer checking.
///
/// Built once from a newline-delimited source (or the built-in
/// fallback list) and read-only afterwards; construct a fresh one to
/// pick up a new dictionary.
pub struct Lexicon {
    words: Vec<String>,
    accepted: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from newline-delimited text.
    ///
    /// Filters each line by length bounds, `[a-z]+` shape, presence of
    /// a vowel-ish letter, and the blacklist, then unions in the
    /// priority words. If filtering leaves nothing, falls back to the
    /// built-in list rather than failing.
    pub fn from_source(source: &str, config: &LexiconConfig) -> Self {
        // Judge the source on its own survivors; the priority union
        // below would otherwise mask an unusable source.
        let filtered: Vec<&str> = source
            .lines()
            .map(str::trim)
            .filter(|w| Self::acceptable(w, config))
            .collect();
        if filtered.is_empty() {
            warn!("word source produced no usable words, using built-in fallback list");
            return Self::fallback();
        }
        Self::collect(filtered)
    }

    /// Build the degraded-mode lexicon from the built-in word list.
    pub fn fallback() -> Self {
        Self::collect(FALLBACK_WORDS.iter().copied())
    }

    fn collect<'a, I: IntoIterator<Item = &'a str>>(source: I) -> Self {
        let mut words = Vec::new();
        let mut accepted = HashSet::new();
        for word in source.into_iter().chain(PRIORITY_WORDS.iter().copied()) {
            if accepted.insert(word.to_string()) {
                words.push(word.to_string());
            }
        }
        Self { words, accepted }
    }

    fn acceptable(word: &str, config: &LexiconConfig) -> bool {
        word.len() >= config.min_len
            && word.len() <= config.max_len
            && word.bytes().all(|b| b.is_ascii_lowercase())
            && word.bytes().any(|b| matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y'))
            && !BLACKLIST.contains(&word)
    }

    /// Case-insensitive membership test for a player's answer.
    pub fn contains(&self, word: &str) -> bool {
        self.accepted.contains(&word.to_lowercase())
    }

    /// Accepted words in dictionary (insertion) order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
