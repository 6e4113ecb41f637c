use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use board88::board_errors::BoardError;
use board88::{Board, BoardConfig};

const HELP: &str = "commands: <move> | undo | history | fen | load <fen> | put <symbol> <square> \
                    | remove <square> | reset | restart | show | quit";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("BOARD88_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = BoardConfig::from(std::env::args().nth(1));
    let mut board = match Board::create(config) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    print!("{}", board.to_ascii());
    println!("{HELP}");
    io::stdout().flush().ok();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" {
            break;
        }

        match run_command(&mut board, trimmed) {
            Ok(output) => println!("{output}"),
            Err(err) => println!("error: {err}"),
        }
        io::stdout().flush().ok();
    }
}

fn run_command(board: &mut Board, command: &str) -> Result<String, BoardError> {
    let (verb, rest) = command
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((command, ""));

    match verb {
        "help" => Ok(HELP.to_owned()),
        "show" => Ok(board.to_ascii()),
        "fen" => Ok(board.fen()),
        "history" => Ok(board
            .get_history()
            .iter()
            .map(|entry| match entry.captured {
                Some(piece) => format!("{}{}x{}{}", entry.moved, entry.from, piece, entry.to),
                None => format!("{}{}-{}", entry.moved, entry.from, entry.to),
            })
            .collect::<Vec<_>>()
            .join(" ")),
        "load" => {
            board.load(rest)?;
            Ok(board.to_ascii())
        }
        "put" => {
            let mut args = rest.split_whitespace();
            let symbol = args.next().and_then(|arg| arg.chars().next()).unwrap_or(' ');
            board.put_piece_symbol(symbol, args.next().unwrap_or(""))?;
            Ok(board.to_ascii())
        }
        "remove" => {
            board.remove_piece(rest);
            Ok(board.to_ascii())
        }
        "undo" => {
            board.undo_move()?;
            Ok(board.to_ascii())
        }
        "reset" => {
            board.reset();
            Ok(board.to_ascii())
        }
        "restart" => {
            board.restart()?;
            Ok(board.to_ascii())
        }
        _ => {
            board.do_move(command)?;
            Ok(board.to_ascii())
        }
    }
}
