//! Build script to generate the embedded word bank
//!
//! Reads `data/words.txt` (`LEVEL|WORD|CLUE` per line) and generates Rust
//! source code with a const array of entries.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_bank(
        "data/words.txt",
        &Path::new(&out_dir).join("word_bank.rs"),
        "WORD_BANK",
        "Built-in crossword word bank as (level, word, clue) triples",
    );

    // Rebuild if the word bank changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_bank(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(u8, &str, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(number, line)| {
            let mut fields = line.trim().splitn(3, '|');
            let level = fields
                .next()
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or_else(|| panic!("{input_path}:{}: missing level", number + 1));
            let word = fields
                .next()
                .map(str::trim)
                .unwrap_or_else(|| panic!("{input_path}:{}: missing word", number + 1));
            let clue = fields.next().map_or("", str::trim);
            (level, word, clue)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word bank").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(u8, &str, &str)] = &[").unwrap();

    for (level, word, clue) in entries {
        writeln!(output, "    ({level}, {word:?}, {clue:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
