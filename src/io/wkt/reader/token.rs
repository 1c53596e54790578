use std::fmt::Display;

/// Lexical category of a [Token].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Text,
    LeftParen,
    RightParen,
    Number,
    Comma,
    EndOfInput,
}

/// The payload carried by a [Token].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// An upper-cased run of ASCII letters.
    Text(String),
    LeftParen,
    RightParen,
    Number(f64),
    Comma,
    EndOfInput,
}

impl TokenValue {
    pub fn token_type(&self) -> TokenType {
        match self {
            TokenValue::Text(_) => TokenType::Text,
            TokenValue::LeftParen => TokenType::LeftParen,
            TokenValue::RightParen => TokenType::RightParen,
            TokenValue::Number(_) => TokenType::Number,
            TokenValue::Comma => TokenType::Comma,
            TokenValue::EndOfInput => TokenType::EndOfInput,
        }
    }
}

/// Renders the literal value as it appears in error messages. The end of input renders empty.
impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::LeftParen => f.write_str("("),
            TokenValue::RightParen => f.write_str(")"),
            TokenValue::Number(number) => write!(f, "{number}"),
            TokenValue::Comma => f.write_str(","),
            TokenValue::EndOfInput => Ok(()),
        }
    }
}

/// A single token and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub position: usize,
    pub value: TokenValue,
}

impl Token {
    pub fn new(position: usize, value: TokenValue) -> Self {
        Self { position, value }
    }

    pub fn token_type(&self) -> TokenType {
        self.value.token_type()
    }

    pub fn is_text(&self, text: &str) -> bool {
        matches!(&self.value, TokenValue::Text(value) if value == text)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}
