//! Token types for the pbxproj lexer

use std::fmt;

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An unquoted word (identifier, number, path)
    Word(String),

    /// A double-quoted string, with escapes already resolved
    QuotedString(String),

    /// Left brace ({) - opens a dictionary
    LeftBrace,

    /// Right brace (})
    RightBrace,

    /// Left parenthesis (() - opens an array
    LeftParen,

    /// Right parenthesis ())
    RightParen,

    /// Semicolon (;) - terminates a dictionary entry
    Semicolon,

    /// Comma (,) - separates array elements
    Comma,

    /// Equals (=) - separates key from value
    Equals,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "{word}"),
            Token::QuotedString(value) => write!(f, "\"{value}\""),
            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Semicolon => write!(f, ";"),
            Token::Comma => write!(f, ","),
            Token::Equals => write!(f, "="),
        }
    }
}
