//! Lexer (tokenizer) for the mini language
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser and by the token-strip display.  Tokenization is a total function:
//! unrecognized characters are silently skipped rather than reported, so a
//! half-typed source never fails this stage.

use std::fmt;

/// Stable token identity, derived from the token's starting character offset.
///
/// The same id is reproduced across re-tokenizations of an unchanged source
/// prefix, which is what lets the rendering layer correlate a token with a
/// character range without diffing.  Ids are unique within one tokenization
/// because tokens never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub usize);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token-{}", self.0)
    }
}

/// Coarse token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Punctuation,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Punctuation => write!(f, "punctuation"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// One lexical unit with its literal text and 1-based source position.
///
/// Tokens are immutable once produced; every source change re-tokenizes the
/// whole text and replaces the entire sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: TokenId,
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{} '{}'", self.kind, self.text),
        }
    }
}

/// Reserved words of the mini language.
const KEYWORDS: [&str; 9] = [
    "let", "const", "var", "print", "if", "else", "while", "function",
    "return",
];

const PUNCTUATION: [char; 7] = ['{', '}', ';', '(', ')', ',', '.'];
const OPERATORS: [char; 8] = ['=', '+', '-', '*', '/', '>', '<', '!'];

/// Tokenize `source` into an ordered token sequence ending in an
/// end-of-input token.  Never fails.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

/// Single left-to-right scanner over the source characters.
struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            let start = self.position;
            let start_line = self.line;
            let start_column = self.column;

            let token = if ch.is_ascii_digit() {
                Some(self.number(start))
            } else if ch.is_ascii_alphabetic() || ch == '_' {
                Some(self.word(start))
            } else if PUNCTUATION.contains(&ch) {
                self.advance();
                Some(self.make(start, TokenKind::Punctuation, ch.to_string()))
            } else if OPERATORS.contains(&ch) {
                self.advance();
                Some(self.make(start, TokenKind::Operator, ch.to_string()))
            } else {
                // Unknown character: skip so a mid-edit source stays lexable.
                tracing::debug!(
                    character = %ch,
                    line = start_line,
                    column = start_column,
                    "skipping unrecognized character"
                );
                self.advance();
                None
            };

            if let Some(mut token) = token {
                token.line = start_line;
                token.column = start_column;
                tokens.push(token);
            }
        }

        tokens.push(Token {
            id: TokenId(self.position),
            kind: TokenKind::Eof,
            text: String::new(),
            line: self.line,
            column: self.column,
        });
        tokens
    }

    /// Digit run containing at most one decimal point.
    fn number(&mut self, start: usize) -> Token {
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        self.make(start, TokenKind::Number, text)
    }

    /// Letter/underscore run, classified as keyword or identifier.
    fn word(&mut self, start: usize) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if KEYWORDS.contains(&text.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.make(start, kind, text)
    }

    fn make(&self, start: usize, kind: TokenKind, text: String) -> Token {
        Token {
            id: TokenId(start),
            kind,
            text,
            line: self.line,
            column: self.column,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_statement() {
        let tokens = tokenize("let a = 10;");

        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "let");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "a");
        assert_eq!(tokens[2].kind, TokenKind::Operator);
        assert_eq!(tokens[2].text, "=");
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].text, "10");
        assert_eq!(tokens[4].kind, TokenKind::Punctuation);
        assert_eq!(tokens[4].text, ";");
        assert_eq!(tokens[5].kind, TokenKind::Eof);
    }

    #[test]
    fn test_ids_are_start_offsets() {
        let tokens = tokenize("let a = 10;");

        assert_eq!(tokens[0].id, TokenId(0)); // let
        assert_eq!(tokens[1].id, TokenId(4)); // a
        assert_eq!(tokens[2].id, TokenId(6)); // =
        assert_eq!(tokens[3].id, TokenId(8)); // 10
        assert_eq!(tokens[4].id, TokenId(10)); // ;
    }

    #[test]
    fn test_ids_stable_across_retokenization_of_unchanged_prefix() {
        let before = tokenize("let a = 10;");
        let after = tokenize("let a = 10; print a;");

        for (old, new) in before.iter().zip(after.iter()) {
            if old.kind == TokenKind::Eof {
                break;
            }
            assert_eq!(old.id, new.id);
        }
    }

    #[test]
    fn test_decimal_number_single_dot() {
        let tokens = tokenize("3.14.15");

        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "3.14");
        // The second dot starts a new token.
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
        assert_eq!(tokens[1].text, ".");
        assert_eq!(tokens[2].text, "15");
    }

    #[test]
    fn test_unknown_characters_skipped() {
        let tokens = tokenize("let @ a # = $ 1;");

        let texts: Vec<&str> =
            tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["let", "a", "=", "1", ";", ""]);
    }

    #[test]
    fn test_always_ends_with_eof() {
        assert_eq!(tokenize("").last().unwrap().kind, TokenKind::Eof);
        assert_eq!(tokenize("   \n\t ").last().unwrap().kind, TokenKind::Eof);
        assert_eq!(tokenize("let x").last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_positions_track_lines_and_columns() {
        let tokens = tokenize("let a = 1;\nprint a;");

        assert_eq!((tokens[0].line, tokens[0].column), (1, 1)); // let
        assert_eq!((tokens[3].line, tokens[3].column), (1, 9)); // 1
        assert_eq!((tokens[5].line, tokens[5].column), (2, 1)); // print
        assert_eq!((tokens[6].line, tokens[6].column), (2, 7)); // a
    }

    #[test]
    fn test_positions_monotonic() {
        let tokens = tokenize("let sum = 2 + 3 * 4;\nprint sum;\nprint 0;");

        for pair in tokens.windows(2) {
            let a = (pair[0].line, pair[0].column);
            let b = (pair[1].line, pair[1].column);
            assert!(a <= b, "positions went backwards: {:?} > {:?}", a, b);
        }
    }

    #[test]
    fn test_keywords_vs_identifiers() {
        let tokens = tokenize("while whileLoop function functional");

        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Keyword);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
    }
}
