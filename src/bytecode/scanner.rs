use peekmore::{PeekMore, PeekMoreIterator};
use std::str::Chars;

use super::error::BytecodeError;
use super::token::{Token, TokenType};

/// Scans arithmetic-only source: numbers, `+ - * /`, parens, `//` line
/// comments. Whitespace and `;` are both treated as separators, matching the
/// distilled original's grammar ("plox/bytecode/src/compiler/Scanner.py"),
/// which never needed a statement terminator distinct from whitespace.
pub struct Scanner<'a> {
    source: PeekMoreIterator<Chars<'a>>,
    start: String,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner { source: source.chars().peekmore(), start: String::new(), tokens: vec![] }
    }

    pub fn scan(&mut self) -> Result<Vec<Token>, BytecodeError> {
        while let Some(&c) = self.source.peek() {
            self.start.clear();
            self.scan_token(c)?;
        }

        self.tokens.push(Token::new(TokenType::EOF, String::new(), None));
        Ok(std::mem::take(&mut self.tokens))
    }

    fn advance(&mut self) -> char {
        let c = self.source.next().expect("advance only called when a character is available");
        self.start.push(c);
        c
    }

    fn add_token(&mut self, r#type: TokenType, literal: Option<f64>) {
        self.tokens.push(Token::new(r#type, self.start.clone(), literal));
    }

    fn scan_token(&mut self, c: char) -> Result<(), BytecodeError> {
        match c {
            ' ' | '\r' | '\t' | '\n' | ';' => {
                self.advance();
            }
            '(' => {
                self.advance();
                self.add_token(TokenType::LeftParen, None);
            }
            ')' => {
                self.advance();
                self.add_token(TokenType::RightParen, None);
            }
            '-' => {
                self.advance();
                self.add_token(TokenType::Minus, None);
            }
            '+' => {
                self.advance();
                self.add_token(TokenType::Plus, None);
            }
            '*' => {
                self.advance();
                self.add_token(TokenType::Star, None);
            }
            '/' => {
                self.advance();
                if self.source.peek() == Some(&'/') {
                    while !matches!(self.source.peek(), None | Some('\n')) {
                        self.source.next();
                    }
                } else {
                    self.add_token(TokenType::Slash, None);
                }
            }
            c if c.is_ascii_digit() => {
                while matches!(self.source.peek(), Some(c) if c.is_ascii_digit() || *c == '.') {
                    self.advance();
                }

                let value: f64 = self
                    .start
                    .parse()
                    .map_err(|_| BytecodeError(format!("Invalid number literal '{}'", self.start)))?;
                self.add_token(TokenType::Number, Some(value));
            }
            other => {
                self.advance();
                return Err(BytecodeError(format!("Unexpected character: '{other}'")));
            }
        }

        Ok(())
    }
}
