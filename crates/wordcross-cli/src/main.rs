use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;
use log::warn;
use std::fs;
use std::path::PathBuf;
use wordcross_core::{AnagramIndex, Generator, GeneratorConfig, Lexicon, LexiconConfig, LevelData};

/// Generate crossword-style word puzzles in the terminal.
#[derive(Parser)]
#[command(name = "wordcross", version, about)]
struct Args {
    /// Newline-delimited word list file. Falls back to the built-in
    /// dictionary when absent or unreadable.
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Root word length.
    #[arg(short, long, default_value_t = 6)]
    length: usize,

    /// RNG seed for reproducible puzzles.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of levels to generate.
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Cap on words per level.
    #[arg(long, default_value_t = 12)]
    max_words: usize,

    /// Print the letters instead of blank tiles.
    #[arg(long)]
    solved: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse();

    let lexicon = load_lexicon(&args);
    let index = AnagramIndex::build(lexicon.words());

    let config = GeneratorConfig {
        max_words: args.max_words,
        ..GeneratorConfig::default()
    };
    let mut generator = match args.seed {
        Some(seed) => Generator::with_seed_and_config(seed, config),
        None => Generator::with_config(config),
    };

    for n in 0..args.count {
        let level = generator.generate(&lexicon, &index, args.length);
        if args.count > 1 {
            println!("{}", format!("level {}", n + 1).dark_grey());
        }
        print_level(&level, args.solved);
    }
    Ok(())
}

fn load_lexicon(args: &Args) -> Lexicon {
    match &args.words {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => Lexicon::from_source(&text, &LexiconConfig::default()),
            Err(err) => {
                warn!(
                    "could not read {}: {err}; using built-in dictionary",
                    path.display()
                );
                Lexicon::fallback()
            }
        },
        None => Lexicon::fallback(),
    }
}

fn print_level(level: &LevelData, solved: bool) {
    let letters = level
        .display_letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("letters: {}", letters.bold().yellow());

    for y in 0..level.height {
        let mut row = String::new();
        for x in 0..level.width {
            match level.letter_at(x, y) {
                Some(ch) if solved => {
                    row.push(ch.to_ascii_uppercase());
                    row.push(' ');
                }
                Some(_) => row.push_str("□ "),
                None => row.push_str("  "),
            }
        }
        println!("  {}", row.trim_end().cyan());
    }

    let mut words: Vec<&str> = level.valid_words.iter().map(String::as_str).collect();
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    if solved {
        println!("words: {}", words.join(", "));
    } else {
        let shapes: Vec<String> = words.iter().map(|w| w.len().to_string()).collect();
        println!("word lengths: {}", shapes.join(", "));
    }
    println!();
}
