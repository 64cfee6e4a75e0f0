//! CLI command implementations.

use std::fs;

use koa_vm::Asm;
use tracing::info;

/// Disassemble a bytecode file and report entry and jump-target counts.
pub fn check(args: &[String]) -> Result<(), i32> {
    let Some(input) = args.first() else {
        eprintln!("error: check requires an input file");
        eprintln!("Usage: koa check <input>");
        return Err(1);
    };

    let asm = read_program(input)?;
    println!(
        "OK: {input} ({} entries, {} jump destinations)",
        asm.len(),
        asm.jump_destinations().count()
    );
    Ok(())
}

/// Print the index of every jump destination, one per line.
pub fn jumpdests(args: &[String]) -> Result<(), i32> {
    let Some(input) = args.first() else {
        eprintln!("error: jumpdests requires an input file");
        eprintln!("Usage: koa jumpdests <input>");
        return Err(1);
    };

    let asm = read_program(input)?;
    for index in asm.jump_destinations() {
        println!("{index}");
    }
    Ok(())
}

fn read_program(path: &str) -> Result<Asm, i32> {
    let bytes = fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;
    info!(path, bytes = bytes.len(), "read bytecode");

    koa_vm::disassemble(&bytes).map_err(|e| {
        eprintln!("error: {e}");
        2
    })
}
