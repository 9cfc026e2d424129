//! Example: walking the lexicon by hand and solving a board.
//!
//! Shows the node-level API the search is built on (prefix checks by walking
//! `NodeRef`s) and then runs the full search on a 4×4 board with a `Qu` tile.
//!
//! Run with: cargo run --example solve_board

use boggle_trie::board::Board;
use boggle_trie::lexicon::{build_lexicon, Letter, Lexicon};
use boggle_trie::search::Search;

/// Letters of `word` that the lexicon can follow before running out of words.
fn matched_prefix(lexicon: &Lexicon, word: &str) -> String {
    let mut node = lexicon.root();
    let mut matched = String::new();
    for ch in word.chars() {
        match Letter::from_char(ch).and_then(|letter| node.get(letter)) {
            Some(next) => {
                node = next;
                matched.push(ch);
            }
            None => break,
        }
    }
    matched
}

fn main() {
    let lexicon = build_lexicon([
        "quiet", "quit", "quite", "suite", "site", "tie", "ties", "set", "sit", "its", "toe",
        "note", "tone", "stone", "onset", "nest", "tens", "ten", "net", "nets",
    ]);

    println!("Prefix walk:");
    for word in ["quiz", "stones", "tone", "xylophone"] {
        println!("  {word}: follows {:?}", matched_prefix(&lexicon, word));
    }

    let board = Board::parse("qu i e t  s t o n  x e s x  x n t x", 4).unwrap();
    println!("\nBoard:\n{board}\n");

    let found = Search::new(&lexicon).run(&board);
    println!("Found {} words:", found.len());
    for word in &found {
        println!("  {word}");
    }
}
