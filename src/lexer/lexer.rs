use super::tokens::{lookup_identifier, Token, TokenKind};

/// Cursor-based scanner over the raw source bytes.
///
/// Tokens are produced one at a time through [`Lexer::next_token`]; once
/// the input is exhausted every further call keeps returning an `EOF`
/// token. The lexer never fails: unrecognised input becomes an `Illegal`
/// token and rejection is left to the parser.
pub struct Lexer {
    source: Vec<u8>,
    pos: usize,      // index of `ch` within `source`
    read_pos: usize, // one past `pos`
    ch: u8,          // byte under the cursor, 0 once the input is exhausted
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.as_bytes().to_vec(),
            pos: 0,
            read_pos: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Produces the next token in source order. Two-character operators
    /// (`==`, `!=`) are matched greedily through one byte of lookahead.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Dash, "-"),
            b'*' => Token::new(TokenKind::Star, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'<' => Token::new(TokenKind::Less, "<"),
            b'>' => Token::new(TokenKind::Greater, ">"),
            b'(' => Token::new(TokenKind::OpenParen, "("),
            b')' => Token::new(TokenKind::CloseParen, ")"),
            b'{' => Token::new(TokenKind::OpenCurly, "{"),
            b'}' => Token::new(TokenKind::CloseCurly, "}"),
            b'[' => Token::new(TokenKind::OpenBracket, "["),
            b']' => Token::new(TokenKind::CloseBracket, "]"),
            b',' => Token::new(TokenKind::Comma, ","),
            b';' => Token::new(TokenKind::Semicolon, ";"),
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Equals, "==")
                } else {
                    Token::new(TokenKind::Assignment, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEquals, "!=")
                } else {
                    Token::new(TokenKind::Not, "!")
                }
            }
            b'"' => Token::new(TokenKind::String, self.read_string()),
            0 => Token::new(TokenKind::EOF, ""),
            ch if is_letter(ch) => {
                // read_identifier already leaves the cursor on the byte after
                // the run, so skip the shared advance below.
                let literal = self.read_identifier();
                return Token::new(lookup_identifier(&literal), literal);
            }
            ch if ch.is_ascii_digit() => {
                return Token::new(TokenKind::Number, self.read_number());
            }
            ch => Token::new(TokenKind::Illegal, (ch as char).to_string()),
        };

        self.read_char();
        token
    }

    fn read_char(&mut self) {
        self.ch = if self.read_pos >= self.source.len() {
            0
        } else {
            self.source[self.read_pos]
        };
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_pos >= self.source.len() {
            0
        } else {
            self.source[self.read_pos]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.source[start..self.pos]).into_owned()
    }

    fn read_number(&mut self) -> String {
        let start = self.pos;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.source[start..self.pos]).into_owned()
    }

    // Consumes verbatim up to the closing quote or the end of the input;
    // no escape sequences. The value excludes the quotes themselves.
    fn read_string(&mut self) -> String {
        let start = self.pos + 1;
        loop {
            self.read_char();
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
        }
        String::from_utf8_lossy(&self.source[start..self.pos]).into_owned()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
