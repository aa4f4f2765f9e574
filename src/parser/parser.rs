/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public driver
 * functions that turn a token sequence into a BL `Statement` or `Program`.
 *
 * The grammar itself is split across sibling modules:
 * - `statements.rs`   → IF / IF_ELSE / WHILE / CALL and blocks
 * - `program.rs`      → PROGRAM header, INSTRUCTION definitions, main body
 * - `helpers.rs`      → Token matching, consumption and error construction
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

use crate::ast::{Program, Statement};
use crate::config::ParseOptions;
use crate::error::{ParseError, ParseResult};
use crate::lexer::token::Token;
use crate::span::Span;
use tracing::debug;

/// The BL recursive-descent parser.
///
/// This structure maintains:
/// - The full token sequence, always ending in the end-of-input sentinel
/// - The cursor (index of the front token)
/// - The current IF / WHILE nesting depth
///
/// The grammar rules live in extension modules (`statements`, `program`,
/// `helpers`) via additional `impl Parser` blocks.
///
/// After any method returns an error the parser state is unspecified and
/// the parser should be dropped.
pub struct Parser {
    /// Token sequence to be parsed.
    pub(crate) tokens: Vec<Token>,

    /// Index of the front token.
    pub(crate) current: usize,

    pub(crate) depth: usize,

    pub(crate) options: ParseOptions,
}

impl Parser {
    /// Creates a parser over `tokens` with default options.
    ///
    /// A sentinel is appended if `tokens` does not already end in one.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(mut tokens: Vec<Token>, options: ParseOptions) -> Self {
        if !tokens.last().is_some_and(Token::is_end_of_input) {
            let span = tokens.last().map(|t| t.span).unwrap_or_default();
            tokens.push(Token::end_of_input(span));
        }

        Self {
            tokens,
            current: 0,
            depth: 0,
            options,
        }
    }

    /// Creates a parser over bare token strings, classifying each one.
    ///
    /// Spans are synthetic: every token sits on line 1 with its index as
    /// the column.
    ///
    /// # Example
    /// ```rust
    /// use blparse::parser::Parser;
    ///
    /// let mut parser = Parser::from_lexemes(["WHILE", "true", "DO", "move", "END", "WHILE"]);
    /// let s = parser.parse_statement().unwrap();
    /// assert_eq!(s.kind(), blparse::ast::Kind::While);
    /// ```
    pub fn from_lexemes<I, S>(lexemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = lexemes
            .into_iter()
            .enumerate()
            .map(|(i, lexeme)| Token::classify(lexeme.as_ref(), Span::new(1, i)))
            .collect();
        Self::new(tokens)
    }

    /// Index of the front token.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Tokens not yet consumed, sentinel included.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.current..]
    }
}

/// Parses one statement and requires that nothing but the sentinel follows.
pub fn parse_statement(tokens: Vec<Token>) -> ParseResult<Statement> {
    let mut parser = Parser::new(tokens);
    finish(&mut parser, Parser::parse_statement)
}

/// Parses a block and requires that nothing but the sentinel follows.
pub fn parse_block(tokens: Vec<Token>) -> ParseResult<Statement> {
    let mut parser = Parser::new(tokens);
    finish(&mut parser, Parser::parse_block)
}

/// Parses a complete program.
///
/// # BL Compilation Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → Program
/// ```
pub fn parse_program(tokens: Vec<Token>) -> ParseResult<Program> {
    parse_program_with_options(tokens, ParseOptions::default())
}

pub fn parse_program_with_options(
    tokens: Vec<Token>,
    options: ParseOptions,
) -> ParseResult<Program> {
    let mut parser = Parser::with_options(tokens, options);
    parser.parse_program().inspect_err(log_failure)
}

fn finish<T>(
    parser: &mut Parser,
    rule: impl FnOnce(&mut Parser) -> ParseResult<T>,
) -> ParseResult<T> {
    let result = rule(parser).and_then(|value| {
        parser.expect_end_of_input()?;
        Ok(value)
    });
    result.inspect_err(log_failure)
}

fn log_failure(error: &ParseError) {
    debug!(
        code = error.code(),
        position = error.position,
        line = error.span.line,
        "parse failed: {}",
        error
    );
}
