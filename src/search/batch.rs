use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Search;
use crate::board::Board;
use crate::lexicon::Lexicon;

/// Searches each board in turn. The `i`th result belongs to `boards[i]`.
///
/// `max_word_length` of `None` caps each board at its own cell count.
pub fn search_all(
    boards: &[Board],
    lexicon: &Lexicon,
    max_word_length: Option<usize>,
) -> Vec<Vec<String>> {
    let search = configured(lexicon, max_word_length);
    let start = Instant::now();
    let results: Vec<Vec<String>> = boards.iter().map(|board| search.run(board)).collect();
    log::debug!(
        "Searched {} boards in {:.3}s",
        boards.len(),
        start.elapsed().as_secs_f64()
    );
    results
}

/// Searches boards on the rayon thread pool, sharing the lexicon read-only.
///
/// Results come back in board order, identical to [`search_all`].
#[cfg(feature = "parallel")]
pub fn par_search_all(
    boards: &[Board],
    lexicon: &Lexicon,
    max_word_length: Option<usize>,
) -> Vec<Vec<String>> {
    let search = configured(lexicon, max_word_length);
    let start = Instant::now();
    let results: Vec<Vec<String>> = boards.par_iter().map(|board| search.run(board)).collect();
    log::debug!(
        "Searched {} boards on {} threads in {:.3}s",
        boards.len(),
        rayon::current_num_threads(),
        start.elapsed().as_secs_f64()
    );
    results
}

fn configured(lexicon: &Lexicon, max_word_length: Option<usize>) -> Search<'_> {
    match max_word_length {
        Some(max) => Search::new(lexicon).max_word_length(max),
        None => Search::new(lexicon),
    }
}
