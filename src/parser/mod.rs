//! Mini-language source code parser
//!
//! This module transforms mini-language source text into an Abstract Syntax
//! Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # The mini language
//!
//! A deliberately small language used to demonstrate the pipeline end to end:
//! `let` declarations, `print` statements, and left-associative `+ - * /`
//! arithmetic over numbers, identifiers, and parenthesized expressions.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser.  No external parser generator
//! dependencies.  Both stages are total: the lexer skips unknown characters
//! and the parser degrades to an empty program on any grammar violation,
//! because both run on every keystroke of a source that is usually mid-edit.

pub mod ast;
pub mod lexer;
pub mod parser;
