use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use boggle_trie::board::{Board, STANDARD_DIMENSION};
use boggle_trie::errors::Error;
use boggle_trie::lexicon::build_lexicon_from_file;
use boggle_trie::search::{self, Search};

/// Boggle solver: prints every dictionary word on each board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Boards to solve: dimension² letters ("catsxxxxxxxxxxxx") or cells separated by
    /// commas/spaces ("c,a,qu,...")
    boards: Vec<String>,

    /// Path to the word list (one word per line, '#' comments)
    #[arg(short, long)]
    dictionary: PathBuf,

    /// File with one board per line, solved after any boards given as arguments
    #[arg(short, long)]
    boards_file: Option<PathBuf>,

    /// Number of rows and columns on each board
    #[arg(short = 'n', long, default_value_t = STANDARD_DIMENSION)]
    dimension: usize,

    /// Longest word to look for (defaults to the number of cells)
    #[arg(short, long)]
    max_word_length: Option<usize>,

    /// Solve boards on all cores
    #[arg(short, long)]
    parallel: bool,
}

/// Entry point of the `boggle` command.
///
/// Delegates to [`try_main`], printing any error with its code before exiting with
/// code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(boggle_trie::log::DEBUG_ENV).is_ok();
    boggle_trie::log::init_logger(debug_enabled);

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            ExitCode::FAILURE
        }
    }
}

/// Steps:
/// 1. Parse arguments.
/// 2. Load the word list into a lexicon.
/// 3. Parse every board; any malformed board fails the run before solving starts.
/// 4. Solve, printing each board's words on stdout separated by blank lines.
/// 5. Print timings and counts on stderr.
fn try_main() -> Result<(), Error> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let lexicon = build_lexicon_from_file(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    log::info!(
        "Loaded {} words ({} nodes) in {load_secs:.3}s",
        lexicon.word_count(),
        lexicon.node_count()
    );

    let boards = read_boards(&cli)?;
    if boards.is_empty() {
        log::warn!("No boards given; pass boards as arguments or with --boards-file");
        return Ok(());
    }

    let t_solve = Instant::now();
    let results = if cli.parallel {
        solve_parallel(&boards, &lexicon, cli.max_word_length)
    } else {
        let mut search = Search::new(&lexicon);
        if let Some(max) = cli.max_word_length {
            search = search.max_word_length(max);
        }
        boards
            .iter()
            .map(|board| {
                let t_board = Instant::now();
                let found = search.run(board);
                eprintln!(
                    "Time to solve: {:.6}s ({} words)",
                    t_board.elapsed().as_secs_f64(),
                    found.len()
                );
                found
            })
            .collect()
    };
    let solve_secs = t_solve.elapsed().as_secs_f64();

    for (i, found) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for word in found {
            println!("{word}");
        }
    }

    let total: usize = results.iter().map(Vec::len).sum();
    eprintln!(
        "Loaded {} words in {load_secs:.3}s; solved {} boards in {solve_secs:.3}s ({total} words).",
        lexicon.word_count(),
        boards.len(),
    );
    Ok(())
}

#[cfg(feature = "parallel")]
fn solve_parallel(
    boards: &[Board],
    lexicon: &boggle_trie::Lexicon,
    max_word_length: Option<usize>,
) -> Vec<Vec<String>> {
    search::par_search_all(boards, lexicon, max_word_length)
}

#[cfg(not(feature = "parallel"))]
fn solve_parallel(
    boards: &[Board],
    lexicon: &boggle_trie::Lexicon,
    max_word_length: Option<usize>,
) -> Vec<Vec<String>> {
    log::warn!("Built without the `parallel` feature; solving boards sequentially");
    search::search_all(boards, lexicon, max_word_length)
}

/// Boards from the command line followed by those in `--boards-file`, numbered from 0
/// in that order for error messages.
fn read_boards(cli: &Cli) -> Result<Vec<Board>, Error> {
    let mut texts = cli.boards.clone();
    if let Some(path) = &cli.boards_file {
        let contents = fs::read_to_string(path)?;
        texts.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from),
        );
    }
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            Board::parse(text, cli.dimension).map_err(|source| Error::BoardAt { index, source })
        })
        .collect()
}
