#![allow(clippy::needless_return)]

//! Rocks is a programming language written in Rust. It is a dynamically typed language with
//! lexical scoping and first-class functions. Rocks is a tree-walk interpreter with a
//! hand-written recursive descent parser. Rocks is a hobby project and is not intended for
//! production use.
//!
//! Rocks is a dynamically typed language. This means that the type of a variable is determined
//! at runtime. This is in contrast to statically typed languages, where the type of a variable
//! is determined at compile time. Dynamically typed languages are often easier to use, but are
//! generally slower than statically typed languages.
//!
//! Rocks is a tree-walk interpreter. This means that the interpreter walks the abstract syntax
//! tree (AST) and evaluates each node. This is in contrast to a compiler, which would convert
//! the AST into bytecode or machine code beforehand. Tree-walk interpreters are generally
//! easier to implement than compilers, but are generally slower than compilers. A second,
//! parallel pipeline in this crate (the [`bytecode`] module and the `bxc` binary) compiles
//! arithmetic expressions to a small stack-based bytecode instead, and runs them on a VM.
//!
//! Rocks is a hobby project and is not intended for production use. The goal of this project is
//! to learn more about programming languages and interpreters. This project is inspired by the
//! [Crafting Interpreters](https://craftinginterpreters.com/) book by Bob Nystrom.
//!
//! ## Scanning
//! The first step in the interpreter is scanning. Scanning is the process of converting a
//! string of characters into a list of tokens. A token is a single unit of a programming
//! language. For example, the string `1 + 2` would be converted into the following tokens:
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as a cursor over the
//! characters in the source code. It is a simple state machine that returns the next token in
//! the source code when called.
//!
//! The scanner reports syntax errors in the source code as a [`ScanError`](error::ScanError).
//! These errors are trivial problems like an unterminated string literal or an unexpected
//! character.
//!
//! ## Parsing
//! The second step in the interpreter is parsing. Parsing is the process of converting a list
//! of tokens into an abstract syntax tree (AST). The parser is implemented in the
//! [`parser`](parser) module as a recursive descent parser. The parser transforms the list of
//! tokens into expressions and statements. [`Expressions`](expr::Expr) are pieces of code that
//! produce a value, specifically a [`Value`](value::Value). [`Statements`](stmt::Stmt) are
//! pieces of code that do not produce a value but instead perform some action. These actions
//! modify the state of the program and thus, are called side-effects. For example, a variable
//! declaration or an if clause would be classified as statements.
//!
//! The parser reports syntax errors in the source code as a [`ParseError`](error::ParseError).
//! Unlike the scanner, the parser catches errors that span multiple tokens. The parser recovers
//! from a syntax error by synchronizing to the next statement boundary, so a single pass can
//! surface more than one mistake, even though the driver never hands a partially-built AST on
//! to the resolver once any error was reported.
//!
//! ## Resolving
//! The third step in the interpreter is resolving. Resolving is the process of statically
//! analyzing the AST to determine the scope of each variable. While this requires a pre-pass of
//! the AST, it is necessary to construct robust lexical scoping. The resolver is implemented in
//! the [`resolver`](resolver) module as a tree-walk visitor. The resolver is run after the
//! parser because it requires the AST to be fully constructed. The resolver reports errors as a
//! [`ResolveError`](error::ResolveError). These errors are syntactically valid but semantically
//! invalid, and therefore cannot be caught by the scanner or the parser. For example, the
//! following expression is valid Rocks syntax but semantically invalid because the variable `a`
//! is defined twice in the same scope:
//! ```text
//! {
//!    var a = 1;
//!    var a = 2;
//! }
//! ```
//!
//! ## Interpreting
//! The final step in the interpreter is _interpreting_. Interpreting is the process of
//! evaluating the AST. The interpreter is implemented in the [`interpreter`](interpreter)
//! module as a tree-walk visitor. Thanks to all the previous steps, the interpreter is able to
//! evaluate the AST and produce a result. The interpreter reports errors as a
//! [`RuntimeError`](error::RuntimeError). While the scanner, the parser and the resolver try to
//! catch as many errors as possible before running the code, most errors can only be caught at
//! runtime. For example, the following expression is valid Rocks syntax but it is semantically
//! invalid because it tries to add a string and a number:
//! ```text
//! var a = "123";
//! var b = a + 123;
//! ```
//! The interpreter is also responsible for managing the environment. The environment is a
//! mapping of variable names to their values. The environment is implemented in the
//! [`environment`](environment) module as a chain of scopes linked through reference-counted
//! pointers. This allows the interpreter to implement lexical scoping and first-class closures.

use std::path::PathBuf;
use std::{fs, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod ast;
pub mod bytecode;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;
pub mod value;

use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

const HISTORY_FILE_NAME: &str = ".rocks_history";

/// The crate's driver: owns one [`Interpreter`] across repeated `run` calls so the global
/// environment persists between REPL lines, and wires the scanner, parser, resolver and
/// interpreter together.
#[allow(non_camel_case_types)]
pub struct rocks {
    interpreter: Interpreter,
}

impl rocks {
    pub fn new() -> Self {
        rocks { interpreter: Interpreter::new() }
    }

    /// Runs a whole file, exiting the process with `65` if a scan/parse/resolve error occurred
    /// and `70` if a runtime error occurred, matching the conventional `sysexits.h` codes.
    pub fn run_file(&mut self, path: String) {
        let contents = fs::read_to_string(path).expect("should have been able to read the file");

        self.run(contents);

        if error::did_error() {
            process::exit(65);
        }
        if error::did_runtime_error() {
            process::exit(70);
        }
    }

    /// Runs an interactive prompt, one line at a time, against the same persistent global
    /// environment. History is kept in `~/.rocks_history` via `rustyline`.
    pub fn run_prompt(&mut self) {
        let history_path = Self::history_path();

        let mut editor = DefaultEditor::new().expect("should have been able to start the editor");
        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(line);
                    error::reset_error();
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(_) => break,
            }
        }

        if let Some(path) = &history_path {
            let _ = editor.save_history(path);
        }
    }

    fn history_path() -> Option<PathBuf> {
        home::home_dir().map(|mut path| {
            path.push(HISTORY_FILE_NAME);
            path
        })
    }

    fn run(&mut self, source: String) {
        let mut scanner = Scanner::new(&source);
        let tokens = scanner.scan_tokens();

        if error::did_error() {
            return;
        }

        let mut parser = Parser::new(tokens);
        let statements = parser.parse();

        if error::did_error() {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter);
        resolver.resolve(&statements);

        if error::did_error() {
            return;
        }

        self.interpreter.interpret(&statements);
    }
}

impl Default for rocks {
    fn default() -> Self {
        Self::new()
    }
}
