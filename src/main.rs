//! CLI tool to split shell-style input into words.

use std::fs;
use std::process::ExitCode;

use shellwords_rs::{Tokenizer, split};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: shellwords <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  split   Split file(s) into words, one per line");
        eprintln!("  tokens  Print the raw token stream, including comments");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  shellwords split commands.txt");
        eprintln!("  shellwords tokens commands.txt");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "split" => match split(&content) {
                Ok(words) => {
                    for word in words {
                        println!("{word}");
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "tokens" => {
                let mut tokenizer = Tokenizer::new(content.as_bytes());
                loop {
                    match tokenizer.next_token() {
                        Ok(Some(token)) => {
                            println!("{:?}\t{}", token.kind, token.text);
                        }
                        Ok(None) => break,
                        Err(e) => {
                            eprintln!("{path}: {e}");
                            had_error = true;
                            break;
                        }
                    }
                }
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
