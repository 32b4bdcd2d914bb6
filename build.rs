//! Build script to generate embedded word lists
//!
//! Reads the word list files and generates Rust source with const arrays.
//! Entries are checked here so the library can rely on them.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Curated answer words",
    )
    .expect("failed to generate answers list");

    generate_word_list(
        "data/guesses.txt",
        &Path::new(&out_dir).join("guesses.rs"),
        "GUESSES",
        "Allowed guess words (answers plus probe words)",
    )
    .expect("failed to generate guesses list");

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/guesses.txt");
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    for word in &words {
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input_path}: '{word}' is not a five-letter lowercase word"
        );
    }

    let mut output = io::BufWriter::new(fs::File::create(output_path)?);

    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in &words {
        writeln!(output, "    \"{word}\",")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len())?;

    output.flush()
}
