//! Basic example of using the wordcross engine

use wordcross_core::{AnagramIndex, Generator, Lexicon};

fn main() {
    // Build the dictionary. A real frontend would hand in fetched
    // word-list text; the built-in fallback list works out of the box.
    let lexicon = Lexicon::fallback();
    let index = AnagramIndex::build(lexicon.words());
    println!(
        "Lexicon: {} words, {} anagram buckets\n",
        lexicon.len(),
        index.bucket_count()
    );

    // Generate a puzzle around a six-letter root
    let mut generator = Generator::with_seed(42);
    let level = generator.generate(&lexicon, &index, 6);

    println!("Root word: {}", level.root);
    println!("Display letters: {:?}", level.display_letters);
    println!("Grid: {}x{}", level.width, level.height);
    println!("Words placed: {}", level.valid_words.len());
    for placed in &level.placed {
        println!(
            "  {:?} at ({}, {}): {}",
            placed.axis, placed.x, placed.y, placed.word
        );
    }

    // Render the solution grid
    println!();
    for y in 0..level.height {
        let row: String = (0..level.width)
            .map(|x| match level.letter_at(x, y) {
                Some(ch) => ch.to_ascii_uppercase(),
                None => ' ',
            })
            .collect();
        println!("  {row}");
    }

    // Answer checking is a lexicon lookup
    println!("\nIs \"letter\" a word here? {}", lexicon.contains("letter"));
    println!("Is \"LETTER\" a word here? {}", lexicon.contains("LETTER"));
    println!("Is \"zzz\" a word here? {}", lexicon.contains("zzz"));
}
