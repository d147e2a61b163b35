//! Recursive descent parser for the mini language
//!
//! Grammar, precedence lowest → highest:
//!
//! ```text
//! Program        := Statement* EndOfInput
//! Statement      := VariableDecl | PrintStmt | ExpressionStmt
//! VariableDecl   := 'let' Identifier '=' Expression ';'
//! PrintStmt      := 'print' Expression ';'
//! ExpressionStmt := Expression ';'?
//! Expression     := Term (('+'|'-') Term)*
//! Term           := Factor (('*'|'/') Factor)*
//! Factor         := Number | Identifier | '(' Expression ')'
//! ```
//!
//! Binary operators are left-associative; the parser builds a left-leaning
//! tree.  The public [`parse`] entry is total: a grammar violation anywhere
//! degrades to an empty [`Program`] so a malformed mid-edit source never
//! breaks the pipeline.

use crate::parser::ast::{AstNode, BinOp, NodeId, Program, SourceLocation};
use crate::parser::lexer::{Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Parse a token sequence into a [`Program`].
///
/// Total function: on any grammar violation the failure is reported to the
/// diagnostic channel and an empty program is returned instead.
pub fn parse(tokens: &[Token]) -> Program {
    match Parser::new(tokens).parse_program() {
        Ok(program) => program,
        Err(err) => {
            tracing::warn!(error = %err, "parse failed, yielding empty program");
            Program::new()
        }
    }
}

/// Recursive descent parser over a borrowed token sequence
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    next_id: NodeId,
    eof: Token,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        // Fallback for callers that hand us a sequence without a terminal
        // end-of-input token.
        let eof = Token {
            id: crate::parser::lexer::TokenId(usize::MAX),
            kind: TokenKind::Eof,
            text: String::new(),
            line: tokens.last().map_or(1, |t| t.line),
            column: tokens.last().map_or(1, |t| t.column),
        };
        Self {
            tokens,
            position: 0,
            next_id: 1, // id 0 belongs to the Program root
            eof,
        }
    }

    /// Parse the entire token sequence.  Errors propagate to [`parse`].
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            program.body.push(self.parse_statement()?);
        }

        Ok(program)
    }

    fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        let token = self.peek();
        if token.kind == TokenKind::Keyword && token.text == "let" {
            return self.parse_var_decl();
        }
        if token.kind == TokenKind::Keyword && token.text == "print" {
            return self.parse_print_statement();
        }
        self.parse_expression_statement()
    }

    fn parse_var_decl(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.expect(TokenKind::Keyword, Some("let"))?;
        let name = self.expect(TokenKind::Identifier, None)?.text.clone();
        self.expect(TokenKind::Operator, Some("="))?;
        let init = self.parse_expression()?;
        self.expect(TokenKind::Punctuation, Some(";"))?;

        Ok(AstNode::VarDecl {
            id: self.fresh_id(),
            name,
            init: Box::new(init),
            location,
        })
    }

    fn parse_print_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.expect(TokenKind::Keyword, Some("print"))?;
        let argument = self.parse_expression()?;
        self.expect(TokenKind::Punctuation, Some(";"))?;

        Ok(AstNode::Call {
            id: self.fresh_id(),
            callee: "print".to_string(),
            args: vec![argument],
            location,
        })
    }

    fn parse_expression_statement(&mut self) -> Result<AstNode, ParseError> {
        let expression = self.parse_expression()?;
        // Trailing semicolon is optional on a bare expression statement.
        if self.peek().text == ";" {
            self.advance();
        }
        Ok(expression)
    }

    /// Expression := Term (('+'|'-') Term)*
    fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_term()?;

        while self.peek().text == "+" || self.peek().text == "-" {
            let location = self.current_location();
            let op = if self.advance().text == "+" {
                BinOp::Add
            } else {
                BinOp::Sub
            };
            let right = self.parse_term()?;
            left = AstNode::BinaryOp {
                id: self.fresh_id(),
                op,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }
        Ok(left)
    }

    /// Term := Factor (('*'|'/') Factor)*
    fn parse_term(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_factor()?;

        while self.peek().text == "*" || self.peek().text == "/" {
            let location = self.current_location();
            let op = if self.advance().text == "*" {
                BinOp::Mul
            } else {
                BinOp::Div
            };
            let right = self.parse_factor()?;
            left = AstNode::BinaryOp {
                id: self.fresh_id(),
                op,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }
        Ok(left)
    }

    /// Factor := Number | Identifier | '(' Expression ')'
    fn parse_factor(&mut self) -> Result<AstNode, ParseError> {
        let token = self.peek().clone();
        let location = self.current_location();

        match token.kind {
            TokenKind::Number => {
                self.advance();
                let value =
                    token.text.parse::<f64>().map_err(|_| ParseError {
                        message: format!(
                            "Invalid number literal '{}'",
                            token.text
                        ),
                        location,
                    })?;
                Ok(AstNode::NumberLiteral {
                    id: self.fresh_id(),
                    value,
                    raw: token.text,
                    location,
                })
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(AstNode::Variable {
                    id: self.fresh_id(),
                    name: token.text,
                    location,
                })
            }
            _ if token.text == "(" => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect(TokenKind::Punctuation, Some(")"))?;
                Ok(expression)
            }
            _ => Err(ParseError {
                message: format!("Unexpected {}", self.peek()),
                location,
            }),
        }
    }

    // ===== Helper methods =====

    fn fresh_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    fn advance(&mut self) -> &Token {
        let consumed = self.position;
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.tokens.get(consumed).unwrap_or(&self.eof)
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn current_location(&self) -> SourceLocation {
        let token = self.peek();
        SourceLocation::new(token.line, token.column)
    }

    /// Consume the next token, checking its kind and optionally its exact
    /// text.  Mismatches report the expected vs. actual token and line.
    fn expect(
        &mut self,
        kind: TokenKind,
        text: Option<&str>,
    ) -> Result<&Token, ParseError> {
        let actual = self.peek();
        if actual.kind != kind {
            return Err(ParseError {
                message: format!("Expected {}, found {}", kind, actual),
                location: self.current_location(),
            });
        }
        if let Some(expected) = text {
            if actual.text != expected {
                return Err(ParseError {
                    message: format!(
                        "Expected '{}', found {}",
                        expected, actual
                    ),
                    location: self.current_location(),
                });
            }
        }
        Ok(self.advance())
    }
}
