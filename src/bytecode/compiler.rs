use super::chunk::{Chunk, OpCode};
use super::error::BytecodeError;
use super::token::{Token, TokenType};

/// Precedence ladder, lowest to highest. `Precedence::next` walks up one rung,
/// used to parse a binary operator's right operand one level tighter than
/// itself so same-precedence operators left-associate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    None,
    Term,    // + -
    Factor,  // * /
    Unary,   // -
    Primary,
}

impl Precedence {
    fn next(self) -> Precedence {
        match self {
            Precedence::None => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Unary,
            Precedence::Unary => Precedence::Primary,
            Precedence::Primary => Precedence::Primary,
        }
    }
}

type ParseFn = fn(&mut Compiler) -> Result<(), BytecodeError>;

struct ParseRule {
    prefix: Option<ParseFn>,
    infix: Option<ParseFn>,
    precedence: Precedence,
}

/// Compiles a flat token stream into a [`Chunk`] using Pratt (precedence
/// climbing) parsing. Each token kind's entry in [`Compiler::rule`] supplies
/// its optional prefix parser, optional infix parser, and the precedence at
/// which it binds as an infix operator.
pub struct Compiler {
    tokens: Vec<Token>,
    current: usize,
    chunk: Chunk,
}

impl Compiler {
    pub fn new(tokens: Vec<Token>) -> Self {
        Compiler { tokens, current: 0, chunk: Chunk::new() }
    }

    /// Compiles a single expression and appends a sentinel `OP_RETURN`.
    pub fn compile(mut self) -> Result<Chunk, BytecodeError> {
        self.expression()?;
        self.chunk.write(OpCode::Return);
        Ok(self.chunk)
    }

    fn rule(r#type: TokenType) -> ParseRule {
        match r#type {
            TokenType::LeftParen => {
                ParseRule { prefix: Some(Compiler::grouping), infix: None, precedence: Precedence::None }
            }
            TokenType::Minus => {
                ParseRule { prefix: Some(Compiler::unary), infix: Some(Compiler::binary), precedence: Precedence::Term }
            }
            TokenType::Plus => {
                ParseRule { prefix: None, infix: Some(Compiler::binary), precedence: Precedence::Term }
            }
            TokenType::Star => {
                ParseRule { prefix: None, infix: Some(Compiler::binary), precedence: Precedence::Factor }
            }
            TokenType::Slash => {
                ParseRule { prefix: None, infix: Some(Compiler::binary), precedence: Precedence::Factor }
            }
            TokenType::Number => {
                ParseRule { prefix: Some(Compiler::number), infix: None, precedence: Precedence::None }
            }
            TokenType::RightParen | TokenType::EOF => {
                ParseRule { prefix: None, infix: None, precedence: Precedence::None }
            }
        }
    }

    fn expression(&mut self) -> Result<(), BytecodeError> {
        self.parse(Precedence::Term)
    }

    /// The core Pratt loop: runs the prefix parser for the token just
    /// consumed, then keeps consuming infix operators whose precedence is at
    /// least `precedence`.
    fn parse(&mut self, precedence: Precedence) -> Result<(), BytecodeError> {
        let token = self.advance();
        let prefix = Self::rule(token.r#type)
            .prefix
            .ok_or_else(|| BytecodeError(format!("Unexpected token: {token}")))?;
        prefix(self)?;

        while !self.is_at_end() {
            let next_rule = Self::rule(self.peek().r#type);
            if precedence > next_rule.precedence {
                break;
            }

            self.advance();
            let infix = next_rule
                .infix
                .expect("a token whose precedence beat the threshold must have an infix parser");
            infix(self)?;
        }

        Ok(())
    }

    fn number(&mut self) -> Result<(), BytecodeError> {
        let token = self.previous();
        let value = token
            .literal
            .ok_or_else(|| BytecodeError(format!("Expected a number literal, got `{token}` instead")))?;

        let index = self.chunk.add_constant(value);
        self.chunk.write(OpCode::Constant);
        self.chunk.write_byte(index as u8);
        Ok(())
    }

    fn unary(&mut self) -> Result<(), BytecodeError> {
        let operator = self.previous();
        let rule = Self::rule(operator.r#type);
        self.parse(rule.precedence)?;

        match operator.r#type {
            TokenType::Minus => self.chunk.write(OpCode::Negate),
            _ => return Err(BytecodeError(format!("Unexpected unary operator: {operator}"))),
        }

        Ok(())
    }

    fn binary(&mut self) -> Result<(), BytecodeError> {
        let operator = self.previous();
        let rule = Self::rule(operator.r#type);
        self.parse(rule.precedence.next())?;

        match operator.r#type {
            TokenType::Plus => self.chunk.write(OpCode::Add),
            TokenType::Minus => self.chunk.write(OpCode::Subtract),
            TokenType::Star => self.chunk.write(OpCode::Multiply),
            TokenType::Slash => self.chunk.write(OpCode::Divide),
            _ => return Err(BytecodeError(format!("Unexpected binary operator: {operator}"))),
        }

        Ok(())
    }

    fn grouping(&mut self) -> Result<(), BytecodeError> {
        self.expression()?;

        if self.peek().r#type != TokenType::RightParen {
            return Err(BytecodeError(format!(
                "Expected ')' after grouping expression, got `{}` instead",
                self.peek()
            )));
        }
        self.advance();
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.peek().r#type == TokenType::EOF
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> Token {
        self.tokens[self.current - 1].clone()
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bytecode::scanner::Scanner;

    fn compile(source: &str) -> Chunk {
        let tokens = Scanner::new(source).scan().unwrap();
        Compiler::new(tokens).compile().unwrap()
    }

    #[test]
    fn compiles_constant() {
        let chunk = compile("1");
        assert_eq!(chunk.constants, vec![1.0]);
        assert_eq!(chunk.code, vec![OpCode::Constant as u8, 0, OpCode::Return as u8]);
    }

    #[test]
    fn precedence_left_associates_same_level_operators() {
        // 5 - 3 - 1 should compile as (5 - 3) - 1, not 5 - (3 - 1).
        let chunk = compile("5 - 3 - 1");
        assert_eq!(
            chunk.code,
            vec![
                OpCode::Constant as u8, 0,
                OpCode::Constant as u8, 1,
                OpCode::Subtract as u8,
                OpCode::Constant as u8, 2,
                OpCode::Subtract as u8,
                OpCode::Return as u8,
            ]
        );
    }

    #[test]
    fn unary_binds_tighter_than_term() {
        // -1 + 2 should compile as (-1) + 2.
        let chunk = compile("-1 + 2");
        assert_eq!(
            chunk.code,
            vec![
                OpCode::Constant as u8, 0,
                OpCode::Negate as u8,
                OpCode::Constant as u8, 1,
                OpCode::Add as u8,
                OpCode::Return as u8,
            ]
        );
    }

    #[test]
    fn unclosed_grouping_is_an_error() {
        let tokens = Scanner::new("(1 + 2").scan().unwrap();
        assert!(Compiler::new(tokens).compile().is_err());
    }
}
