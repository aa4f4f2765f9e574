/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * Lexer, recursive-descent parser and abstract syntax tree for BL, a small
 * block-structured language of named instructions built from IF, WHILE and
 * call statements.
 *
 *   Source → Lexer → Tokens → Parser → Statement / Program → Printer
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the BLPARSE project.
 *
 * BLPARSE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod span;

pub use ast::{Condition, Kind, Program, Statement};
pub use config::ParseOptions;
pub use error::{ParseError, ParseErrorKind, ParseResult};

/// Lexes and parses a complete BL program.
///
/// # Example
/// ```rust
/// let program = blparse::parse_program_source("PROGRAM P IS BEGIN foo END P").unwrap();
/// assert_eq!(program.name(), "P");
/// assert_eq!(program.body().length_of_block(), 1);
/// ```
pub fn parse_program_source(source: &str) -> ParseResult<Program> {
    parser::parse_program(lexer::tokenize(source))
}

/// Like `parse_program_source`, with explicit options.
pub fn parse_program_source_with_options(
    source: &str,
    options: ParseOptions,
) -> ParseResult<Program> {
    parser::parse_program_with_options(lexer::tokenize(source), options)
}

/// Lexes and parses exactly one BL statement.
pub fn parse_statement_source(source: &str) -> ParseResult<Statement> {
    parser::parse_statement(lexer::tokenize(source))
}

/// Lexes and parses a (possibly empty) sequence of BL statements.
pub fn parse_block_source(source: &str) -> ParseResult<Statement> {
    parser::parse_block(lexer::tokenize(source))
}
