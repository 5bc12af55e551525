//! Lexer for OpenStep-style property lists
//!
//! Tokenizes pbxproj input with source position tracking. Both comment
//! forms (`// ...` and `/* ... */`) are consumed as trivia and never
//! surface as tokens, which covers the `// !$*UTF8*$!` header and the
//! inline annotations Xcode writes after object ids.

use super::tokens::Token;
use crate::error::{Error, Result};

/// A position in the input, 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// Characters allowed in an unquoted word. Everything else requires a
/// quoted string on input and forces quoting on output.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '$' | '.' | '/')
}

/// Lexer for pbxproj documents.
pub struct Lexer<'a> {
    position: Position,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            position: Position::default(),
            chars: input.chars().peekable(),
        }
    }

    /// Get the current position in the input.
    pub fn position(&self) -> Position {
        self.position
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if let Some(c) = ch {
            self.position.advance(c);
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Get the next token from the input, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek_char() else {
                return Ok(None);
            };
            match ch {
                // '/' is both a word character and the start of a comment,
                // so it needs one extra character of lookahead.
                '/' => {
                    self.advance();
                    match self.peek_char() {
                        Some('/') => self.skip_line_comment(),
                        Some('*') => {
                            self.advance();
                            self.skip_block_comment()?;
                        }
                        _ => return Ok(Some(self.lex_word('/'))),
                    }
                }
                '{' => {
                    self.advance();
                    return Ok(Some(Token::LeftBrace));
                }
                '}' => {
                    self.advance();
                    return Ok(Some(Token::RightBrace));
                }
                '(' => {
                    self.advance();
                    return Ok(Some(Token::LeftParen));
                }
                ')' => {
                    self.advance();
                    return Ok(Some(Token::RightParen));
                }
                ';' => {
                    self.advance();
                    return Ok(Some(Token::Semicolon));
                }
                ',' => {
                    self.advance();
                    return Ok(Some(Token::Comma));
                }
                '=' => {
                    self.advance();
                    return Ok(Some(Token::Equals));
                }
                '"' => {
                    self.advance();
                    return self.lex_quoted().map(Some);
                }
                ch if is_word_char(ch) => {
                    self.advance();
                    return Ok(Some(self.lex_word(ch)));
                }
                ch => {
                    return Err(Error::parse_at(
                        format!("unexpected character {ch:?}"),
                        self.position.line,
                        self.position.column,
                    ));
                }
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<()> {
        loop {
            match self.advance() {
                Some('*') if self.peek_char() == Some('/') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(Error::parse_at(
                        "unterminated block comment",
                        self.position.line,
                        self.position.column,
                    ));
                }
            }
        }
    }

    fn lex_word(&mut self, first: char) -> Token {
        let mut word = String::from(first);
        while let Some(ch) = self.peek_char() {
            if is_word_char(ch) {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Token::Word(word)
    }

    fn lex_quoted(&mut self) -> Result<Token> {
        let mut value = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok(Token::QuotedString(value)),
                Some('\\') => match self.advance() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    Some(ch) => {
                        return Err(Error::parse_at(
                            format!("unsupported escape \\{ch}"),
                            self.position.line,
                            self.position.column,
                        ));
                    }
                    None => {
                        return Err(Error::parse_at(
                            "unterminated string",
                            self.position.line,
                            self.position.column,
                        ));
                    }
                },
                Some(ch) => value.push(ch),
                None => {
                    return Err(Error::parse_at(
                        "unterminated string",
                        self.position.line,
                        self.position.column,
                    ));
                }
            }
        }
    }
}
