//! Build script that compiles the default word list into the binary.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const WORDLIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("words.rs");

    let content = fs::read_to_string(WORDLIST)
        .unwrap_or_else(|e| panic!("Failed to read {WORDLIST}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut source = String::from("// Generated from data/words.txt\n\n");
    source.push_str("/// Default five-letter word list\n");
    source.push_str("pub const WORDS: &[&str] = &[\n");
    for word in &words {
        writeln!(source, "    \"{word}\",").unwrap();
    }
    source.push_str("];\n\n");
    source.push_str("/// Number of words in WORDS\n");
    writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();

    fs::write(&dest, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", dest.display()));

    println!("cargo:rerun-if-changed={WORDLIST}");
}
