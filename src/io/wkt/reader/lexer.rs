use crate::error::{Result, WktError};
use crate::io::wkt::reader::token::{Token, TokenValue};

/// Splits a WKT string into [Token]s, one per call to [Lexer::next_token].
///
/// The only state is a byte cursor into the input. Whitespace is skipped, never emitted.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    wkt: &'a str,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(wkt: &'a str) -> Self {
        Self { wkt, cursor: 0 }
    }

    /// The complete input this lexer reads from.
    pub fn wkt(&self) -> &'a str {
        self.wkt
    }

    fn peek(&self) -> Option<u8> {
        self.wkt.as_bytes().get(self.cursor).copied()
    }

    fn bump(&mut self) {
        self.cursor += 1;
    }

    /// Fetch the next token.
    ///
    /// Once the input is exhausted this keeps returning [TokenValue::EndOfInput] positioned at the
    /// input length.
    pub fn next_token(&mut self) -> Result<Token> {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.bump();
        }

        let position = self.cursor;
        let value = match self.peek() {
            None => TokenValue::EndOfInput,
            Some(b'(') => {
                self.bump();
                TokenValue::LeftParen
            }
            Some(b')') => {
                self.bump();
                TokenValue::RightParen
            }
            Some(b',') => {
                self.bump();
                TokenValue::Comma
            }
            Some(b'0'..=b'9' | b'-' | b'.') => TokenValue::Number(self.read_number()?),
            Some(c) if c.is_ascii_alphabetic() => TokenValue::Text(self.read_text()),
            Some(_) => {
                // Report the whole character, which may span several bytes.
                let character = self.wkt[position..].chars().next().unwrap_or_default();
                return Err(WktError::Lexical {
                    character,
                    position,
                });
            }
        };
        Ok(Token::new(position, value))
    }

    /// Consume a number literal starting at the cursor.
    ///
    /// Accepts digits with at most one decimal point, a single exponent marker, and signs
    /// once an exponent marker has been seen.
    fn read_number(&mut self) -> Result<f64> {
        let start = self.cursor;
        let mut decimal = self.peek() == Some(b'.');
        let mut exponent = false;
        self.bump();

        loop {
            match self.peek() {
                Some(b'0'..=b'9') => {}
                Some(b'.') if !decimal => decimal = true,
                Some(b'e' | b'E') if !exponent => exponent = true,
                Some(b'+' | b'-') if exponent => {}
                _ => break,
            }
            self.bump();
        }

        let literal = &self.wkt[start..self.cursor];
        lexical_core::parse::<f64>(literal.as_bytes()).map_err(|_| WktError::InvalidNumber {
            literal: literal.to_string(),
            position: start,
        })
    }

    fn read_text(&mut self) -> String {
        let start = self.cursor;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.bump();
        }
        self.wkt[start..self.cursor].to_ascii_uppercase()
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    fn tokens(wkt: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(wkt);
        let mut out = vec![];
        loop {
            let token = lexer.next_token().unwrap();
            let end = token.value == TokenValue::EndOfInput;
            out.push(token);
            if end {
                return out;
            }
        }
    }

    fn number(token: &Token) -> f64 {
        match token.value {
            TokenValue::Number(n) => n,
            ref other => panic!("expected number, got {other:?}"),
        }
    }

    #[test]
    fn punctuation_and_text() {
        let toks = tokens("point(1 2),");
        let values: Vec<TokenValue> = toks.iter().map(|t| t.value.clone()).collect();
        assert_eq!(
            values,
            vec![
                TokenValue::Text("POINT".into()),
                TokenValue::LeftParen,
                TokenValue::Number(1.),
                TokenValue::Number(2.),
                TokenValue::RightParen,
                TokenValue::Comma,
                TokenValue::EndOfInput,
            ]
        );
        let positions: Vec<usize> = toks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 5, 6, 8, 9, 10, 11]);
    }

    #[test]
    fn whitespace_is_skipped() {
        let toks = tokens(" \t\r\nZM\n");
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[0], Token::new(4, TokenValue::Text("ZM".into())));
        assert_eq!(toks[1], Token::new(7, TokenValue::EndOfInput));
    }

    #[test]
    fn text_stops_at_non_letter() {
        let toks = tokens("Multipoint((");
        assert_eq!(toks[0].value, TokenValue::Text("MULTIPOINT".into()));
        assert_eq!(toks[1], Token::new(10, TokenValue::LeftParen));
        assert_eq!(toks[2], Token::new(11, TokenValue::LeftParen));
    }

    #[test]
    fn scientific_notation() {
        let toks = tokens("-1.5e10 2.3E-4 4e+2 .5 -7");
        assert_relative_eq!(number(&toks[0]), -1.5e10);
        assert_relative_eq!(number(&toks[1]), 2.3e-4);
        assert_relative_eq!(number(&toks[2]), 400.);
        assert_relative_eq!(number(&toks[3]), 0.5);
        assert_relative_eq!(number(&toks[4]), -7.);
        assert_eq!(toks[1].position, 8);
    }

    #[test]
    fn number_stops_at_second_decimal_point() {
        let mut lexer = Lexer::new("1.5.2");
        assert_eq!(lexer.next_token().unwrap(), Token::new(0, TokenValue::Number(1.5)));
        assert_eq!(lexer.next_token().unwrap(), Token::new(3, TokenValue::Number(0.2)));
    }

    #[test]
    fn number_followed_by_paren() {
        let toks = tokens("(1,-2)");
        assert_eq!(toks[1], Token::new(1, TokenValue::Number(1.)));
        assert_eq!(toks[2], Token::new(2, TokenValue::Comma));
        assert_eq!(toks[3], Token::new(3, TokenValue::Number(-2.)));
        assert_eq!(toks[4], Token::new(5, TokenValue::RightParen));
    }

    #[test]
    fn end_of_input_repeats() {
        let mut lexer = Lexer::new("a");
        lexer.next_token().unwrap();
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap(), Token::new(1, TokenValue::EndOfInput));
        }
    }

    #[test]
    fn unexpected_character() {
        let mut lexer = Lexer::new("1 @");
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.next_token().unwrap_err(),
            WktError::Lexical {
                character: '@',
                position: 2
            }
        );

        let mut lexer = Lexer::new("é");
        assert_eq!(
            lexer.next_token().unwrap_err(),
            WktError::Lexical {
                character: 'é',
                position: 0
            }
        );
    }

    #[test]
    fn malformed_number() {
        let mut lexer = Lexer::new("- 1");
        assert_eq!(
            lexer.next_token().unwrap_err(),
            WktError::InvalidNumber {
                literal: "-".to_string(),
                position: 0
            }
        );

        let mut lexer = Lexer::new(" 1e");
        assert_eq!(
            lexer.next_token().unwrap_err(),
            WktError::InvalidNumber {
                literal: "1e".to_string(),
                position: 1
            }
        );
    }
}
