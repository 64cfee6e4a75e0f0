//! Koa CLI: inspect bytecode files.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage or input error
//! - 2: Bytecode failed to disassemble

mod commands;

use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "check" => commands::check(&args[2..]),
        "jumpdests" => commands::jumpdests(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: koa <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check <input>       Disassemble a bytecode file and report its size");
    eprintln!("  jumpdests <input>   List the entry indices that are legal jump targets");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace disassembly.");
}
