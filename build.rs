//! Build script to embed the vocabulary tiers
//!
//! Each `data/*.txt` file becomes a `pub const NAME: &[&str]` array in
//! `$OUT_DIR/words.rs`. Lines are trimmed and lowercased; blank lines are
//! skipped and anything that is not five ASCII letters fails the build.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const LISTS: &[(&str, &str, &str)] = &[
    ("data/easy.txt", "EASY", "Common words for easy games"),
    (
        "data/medium.txt",
        "MEDIUM",
        "Less common words drawn for medium games",
    ),
    ("data/hard.txt", "HARD", "Rare words drawn for hard games"),
    (
        "data/allowed.txt",
        "ALLOWED",
        "Extra accepted guesses that are never drawn as secrets",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let mut output = String::from("// Generated by build.rs from data/*.txt\n\n");

    for &(path, const_name, doc) in LISTS {
        println!("cargo:rerun-if-changed={path}");
        append_word_list(&mut output, path, const_name, doc);
    }

    let target = Path::new(&out_dir).join("words.rs");
    fs::write(&target, output)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));
}

fn append_word_list(output: &mut String, path: &str, const_name: &str, doc: &str) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    for word in &words {
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{path}: '{word}' is not a five-letter word"
        );
    }

    let _ = writeln!(output, "/// {doc}");
    let _ = writeln!(output, "pub const {const_name}: &[&str] = &[");
    for word in &words {
        let _ = writeln!(output, "    \"{word}\",");
    }
    let _ = writeln!(output, "];\n");
    let _ = writeln!(output, "/// Number of words in {const_name}");
    let _ = writeln!(
        output,
        "pub const {const_name}_COUNT: usize = {};\n",
        words.len()
    );
}
