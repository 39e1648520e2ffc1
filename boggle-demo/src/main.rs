use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;

use boggle_core::model::board::Cell;
use boggle_core::model::lexicon::Lexicon;
use boggle_core::model::round::{Move, Round};

/// Play a word-grid round in the terminal.
///
/// Commands read from stdin, one per line:
/// - `<row> <col>`: select a cell
/// - `reset`: clear the current path
/// - `new`: draw a new board
/// - `solve`: list every word on the board
/// - `quit`
///
/// Every word on the final board is printed on exit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Whitespace-separated word list (a `.bin` cache is written next to it)
    #[arg(short, long, default_value = "./data/words.dat")]
    words: String,

    /// Board width and height
    #[arg(short, long, default_value_t = 5)]
    size: usize,

    /// Seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Build (or load from cache) the letter frequencies and the trie
    let lexicon = Arc::new(Lexicon::new(&args.words)?);
    println!("Loaded {} words", lexicon.word_count());

    let mut round = match args.seed {
        Some(seed) => Round::with_seed(lexicon, args.size, seed)?,
        None => Round::new(lexicon, args.size)?,
    };
    print!("{}", round.current_board());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let command: Vec<&str> = line.split_whitespace().collect();

        match command.as_slice() {
            [] => (),
            ["quit"] | ["q"] => break,
            ["reset"] => {
                round.reset_path();
                println!("Path cleared");
            }
            ["new"] => {
                let size = round.current_board().size();
                print!("{}", round.new_board(size)?);
            }
            ["solve"] => print_solution(&round),
            [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(row), Ok(col)) if round.current_board().contains(Cell::new(row, col)) => {
                    report(round.append_move(Cell::new(row, col)));
                }
                (Ok(_), Ok(_)) => println!("That cell is outside the board"),
                _ => println!("Row and column must be numbers"),
            },
            _ => println!("Unknown command: {}", line.trim()),
        }

        prompt(&mut stdout)?;
    }

    println!();
    print_solution(&round);
    Ok(())
}

fn print_solution(round: &Round) {
    let words = round.solve_all();
    println!("{} words: {}", words.len(), words.into_iter().collect::<Vec<_>>().join(", "));
}

fn report(outcome: Move) {
    match outcome {
        Move::AlreadyUsed => println!("You already used this letter, pick again!"),
        Move::Invalid => println!("Not a valid move"),
        Move::Partial => println!("Keep going"),
        Move::Word(word) => println!("Congratulations! You found: {}!", word),
    }
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    print!("> ");
    stdout.flush()
}
