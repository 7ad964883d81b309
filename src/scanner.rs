// ABOUTME: Lexical scanner turning source text into a token sequence

use crate::token::{keyword, Literal, Token, TokenKind};

/// Character-dispatch scanner.
///
/// Keeps three cursors into the source (start of the current lexeme, the
/// read position, and the current line) and accumulates diagnostics instead
/// of stopping, so a single pass reports every lexical error it finds.
pub struct Scanner {
    src: Vec<char>,
    filename: String,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    had_error: bool,
}

impl Scanner {
    pub fn new(source: &str, filename: &str) -> Self {
        Scanner {
            src: source.chars().collect(),
            filename: filename.to_string(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            had_error: false,
        }
    }

    /// Scan the whole source, returning the token sequence terminated by an
    /// end-of-input token. Check [`Scanner::had_error`] before using it.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), None, self.line));
        std::mem::take(&mut self.tokens)
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '%' => TokenKind::Percent,
            ';' => TokenKind::Semicolon,

            '!' => self.pick('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.pick('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.pick('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.pick('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '+' => self.pick('=', TokenKind::PlusEqual, TokenKind::Plus),
            '-' => self.pick('=', TokenKind::MinusEqual, TokenKind::Minus),
            '*' => self.pick('=', TokenKind::StarEqual, TokenKind::Star),

            '/' => {
                if self.matches('/') {
                    // Line comment runs to the next newline.
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                    return;
                } else if self.matches('*') {
                    self.block_comment();
                    return;
                } else if self.matches('=') {
                    TokenKind::SlashEqual
                } else {
                    TokenKind::Slash
                }
            }

            ' ' | '\r' | '\t' => return,
            '\n' => {
                self.line += 1;
                return;
            }

            '"' => {
                self.string();
                return;
            }
            '`' => {
                self.code();
                return;
            }
            c if c.is_ascii_digit() => {
                self.number();
                return;
            }
            c if c.is_alphabetic() || c == '_' => {
                self.identifier();
                return;
            }
            _ => {
                self.error("Unexpected character.");
                return;
            }
        };
        self.add_token(kind, None);
    }

    /// Emit the two-character `X=` kind when the next character is `=`.
    fn pick(&mut self, expected: char, matched: TokenKind, plain: TokenKind) -> TokenKind {
        if self.matches(expected) {
            matched
        } else {
            plain
        }
    }

    fn block_comment(&mut self) {
        while !(self.peek() == '*' && self.peek_next() == '/') && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }
        if self.is_at_end() {
            self.error("Unterminated comment block.");
            return;
        }
        // Consume the trailing */
        self.advance();
        self.advance();
    }

    /// Double-quoted string literal. Newlines are permitted and counted.
    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error("Unterminated string.");
            return;
        }

        // The closing quote
        self.advance();

        let value: String = self.src[self.start + 1..self.current - 1].iter().collect();
        self.add_token(TokenKind::Str, Some(Literal::Str(value)));
    }

    /// Backtick-delimited embedded-code literal, same rules as a string but a
    /// distinct kind carrying the raw enclosed text.
    fn code(&mut self) {
        while self.peek() != '`' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error("Unterminated code.");
            return;
        }

        self.advance();

        let value: String = self.src[self.start + 1..self.current - 1].iter().collect();
        self.add_token(TokenKind::Code, Some(Literal::Str(value)));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let mut is_float = false;
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            is_float = true;
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme: String = self.src[self.start..self.current].iter().collect();
        let literal = if is_float {
            match lexeme.parse::<f64>() {
                Ok(n) => Literal::Float(n),
                Err(_) => {
                    self.error("Invalid number literal.");
                    return;
                }
            }
        } else {
            match lexeme.parse::<i64>() {
                Ok(n) => Literal::Int(n),
                // Digits past the i64 range still scan as a number.
                Err(_) => match lexeme.parse::<f64>() {
                    Ok(n) => Literal::Float(n),
                    Err(_) => {
                        self.error("Invalid number literal.");
                        return;
                    }
                },
            }
        };
        self.add_token(TokenKind::Number, Some(literal));
    }

    fn identifier(&mut self) {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }
        let text: String = self.src[self.start..self.current].iter().collect();
        let kind = keyword(&text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme: String = self.src[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    fn error(&mut self, message: &str) {
        println!("[{}, line {}] Error: {}", self.filename, self.line, message);
        self.had_error = true;
    }

    fn advance(&mut self) -> char {
        let c = self.src[self.current];
        self.current += 1;
        c
    }

    /// Consume the next character only if it matches.
    fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.src[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.src[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.src.len() {
            '\0'
        } else {
            self.src[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.src.len()
    }
}
