use crate::cursor::Cursor;
use crate::error::{Reporter, ScanError};
use crate::token::{keyword, Literal, Token, TokenType};

/// Turns one source buffer into its token sequence.
///
/// A scanner is consumed by [`Scanner::scan_all`]; scanning another buffer
/// means building another scanner.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    start: usize,
    line: u32,
    tokens: Vec<Token>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            start: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole buffer. Lexical errors go to `reporter` and scanning
    /// carries on, so the result always ends with a single `Eof` token.
    pub fn scan_all(mut self, reporter: &mut Reporter) -> Vec<Token> {
        while !self.cursor.is_end() {
            self.start = self.cursor.offset();
            self.scan_token(reporter);
        }

        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut Reporter) {
        let Some(c) = self.cursor.next_char() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenType::LeftParen, None),
            ')' => self.add_token(TokenType::RightParen, None),
            '{' => self.add_token(TokenType::LeftBrace, None),
            '}' => self.add_token(TokenType::RightBrace, None),
            ',' => self.add_token(TokenType::Comma, None),
            '.' => self.add_token(TokenType::Dot, None),
            '-' => self.add_token(TokenType::Minus, None),
            '+' => self.add_token(TokenType::Plus, None),
            ';' => self.add_token(TokenType::Semicolon, None),
            '*' => self.add_token(TokenType::Star, None),
            '!' => self.add_either('=', TokenType::BangEqual, TokenType::Bang),
            '=' => self.add_either('=', TokenType::EqualEqual, TokenType::Equal),
            '<' => self.add_either('=', TokenType::LessEqual, TokenType::Less),
            '>' => self.add_either('=', TokenType::GreaterEqual, TokenType::Greater),
            '/' => {
                if self.cursor.match_next('/') {
                    // Line comment; the newline is left for the next pass.
                    self.cursor.skip_while(|c| c != '\n');
                } else {
                    self.add_token(TokenType::Slash, None);
                }
            }
            ' ' | '\r' | '\t' => (),
            '\n' => self.line += 1,
            '"' => self.string(reporter),
            '0'..='9' => self.number(reporter),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),
            _ => reporter.error(self.line, ScanError::UnexpectedCharacter(c)),
        }
    }

    fn add_token(&mut self, t: TokenType, literal: Option<Literal>) {
        let lexeme = self.cursor.slice_from(self.start);
        self.tokens.push(Token::new(t, lexeme, literal, self.line));
    }

    fn add_either(&mut self, next: char, matched: TokenType, single: TokenType) {
        if self.cursor.match_next(next) {
            self.add_token(matched, None);
        } else {
            self.add_token(single, None);
        }
    }

    fn string(&mut self, reporter: &mut Reporter) {
        while let Some(c) = self.cursor.peek_char() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            let _ = self.cursor.next_char();
        }

        if self.cursor.is_end() {
            reporter.error(self.line, ScanError::UnterminatedString);
            return;
        }

        // Consume the closing quote.
        let _ = self.cursor.next_char();

        let lexeme = self.cursor.slice_from(self.start);
        let value = &lexeme[1..lexeme.len() - 1];
        self.add_token(TokenType::String, Some(Literal::Text(String::from(value))));
    }

    fn number(&mut self, reporter: &mut Reporter) {
        self.cursor.skip_while(|c| c.is_ascii_digit());

        let fraction_follows = self
            .cursor
            .peek_next_char()
            .is_some_and(|c| c.is_ascii_digit());
        if self.cursor.peek_char() == Some('.') && fraction_follows {
            let _ = self.cursor.next_char();
            self.cursor.skip_while(|c| c.is_ascii_digit());
        }

        let text = self.cursor.slice_from(self.start);
        match text.parse::<f64>() {
            Ok(value) => self.add_token(TokenType::Number, Some(Literal::Number(value))),
            Err(_) => reporter.error(self.line, ScanError::MalformedNumber(String::from(text))),
        }
    }

    fn identifier(&mut self) {
        self.cursor
            .skip_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let text = self.cursor.slice_from(self.start);
        let t = keyword(text).unwrap_or(TokenType::Identifier);
        self.add_token(t, Some(Literal::Text(String::from(text))));
    }
}
