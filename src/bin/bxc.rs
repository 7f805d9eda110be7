//! `bxc`: a line-at-a-time driver for the bytecode arithmetic VM, mirroring
//! the distilled original's `bytecode/plox.py`. Each line is scanned,
//! compiled to a `Chunk`, disassembled, and run independently — there is no
//! persistent state between lines, unlike the tree-walk `rocks` REPL.

use std::{env, fs, process};

use rocks_lang::bytecode::{chunk::Chunk, compiler::Compiler, error::BytecodeError, scanner::Scanner, vm::VM};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

fn compile_chunk(source: &str) -> Result<Chunk, BytecodeError> {
    let tokens = Scanner::new(source).scan()?;
    Compiler::new(tokens).compile()
}

fn interpret_line(source: &str) {
    let chunk = match compile_chunk(source) {
        Ok(chunk) => chunk,
        Err(error) => {
            eprintln!("Compilation Error: {error}");
            return;
        }
    };

    chunk.disassemble();

    match VM::new(chunk).run() {
        Ok(value) => println!("RESULT {value:?}"),
        Err(error) => eprintln!("Runtime Error: {error}"),
    }
}

fn run_file(path: &str) {
    let contents = fs::read_to_string(path).expect("should have been able to read the file");

    for line in contents.lines() {
        let line = line.trim();
        println!("> {line}");
        interpret_line(line);
    }
}

fn run_prompt() {
    let mut editor = DefaultEditor::new().expect("should have been able to start the editor");

    loop {
        match editor.readline("> ") {
            Ok(line) => interpret_line(line.trim()),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(_) => break,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        n if n > 2 => {
            println!("Usage: bxc [file]");
            process::exit(64);
        }
        2 => run_file(&args[1]),
        _ => run_prompt(),
    }
}
