//! Build script to generate the embedded dictionary
//!
//! Reads `data/words.txt` (`WORD popularity` per line) and generates Rust source
//! code with a const array of `(word, popularity)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
    );

    // Rebuild if the dictionary changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_dictionary(input_path: &str, output_path: &Path, const_name: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(String, f64)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut parts = line.split_whitespace();
            let word = parts.next().unwrap_or_default().to_uppercase();
            let popularity = parts.next().map_or(0.0, |raw| {
                raw.parse::<f64>()
                    .unwrap_or_else(|e| panic!("Bad popularity '{raw}' for {word}: {e}"))
            });
            (word, popularity)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// Embedded dictionary: five-letter words with their popularity ({count} words)"
    )
    .unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, f64)] = &[").unwrap();

    for (word, popularity) in entries {
        writeln!(output, "    (\"{word}\", {popularity:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
