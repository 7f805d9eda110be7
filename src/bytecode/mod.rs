//! A second, parallel pipeline: a minimal scanner and Pratt compiler for
//! arithmetic-only expressions, producing a [`chunk::Chunk`] that
//! [`vm::VM`] executes on a stack of `f64`s. Does not share the tree-walk
//! interpreter's scanner, parser, or token vocabulary — this subsystem's
//! grammar is deliberately smaller (numbers, `+ - * /`, parens).

pub mod chunk;
pub mod compiler;
pub mod error;
pub mod scanner;
pub mod token;
pub mod vm;

use chunk::Chunk;
use compiler::Compiler;
use error::BytecodeError;
use scanner::Scanner;
use vm::VM;

/// Scans and compiles one line of arithmetic source into a [`Chunk`],
/// matching the bytecode REPL's "compile, then run" split.
pub fn compile(source: &str) -> Result<Chunk, BytecodeError> {
    let tokens = Scanner::new(source).scan()?;
    Compiler::new(tokens).compile()
}

/// Compiles and runs one line of arithmetic source, returning the VM's
/// result without printing anything. The `bxc` binary wraps this with the
/// disassembly and `RESULT <n>` output the CLI layer owns.
pub fn interpret(source: &str) -> Result<f64, BytecodeError> {
    let chunk = compile(source)?;
    VM::new(chunk).run()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interpret_matches_the_worked_example() {
        assert_eq!(interpret("-(1 + 2) * 3").unwrap(), -9.0);
    }
}
