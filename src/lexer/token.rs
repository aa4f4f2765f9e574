/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types consumed by the BL parser.
 *
 * Author:    Sam Wilcox
 *
 * License:
 * This file is part of the BLPARSE project.
 *
 * BLPARSE is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::lexer::keywords::{is_condition, is_identifier, is_keyword};
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Lexeme of the sentinel token that ends every token sequence.
///
/// It contains spaces, so no BL source word can ever produce it.
pub const END_OF_INPUT: &str = "### END OF INPUT ###";

/// Represents the **category of a lexical token** in BL.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A reserved word: `PROGRAM`, `IF`, `END`, ...
    Keyword,

    /// A condition word: `next-is-empty`, `random`, ...
    Condition,

    /// A program, instruction or call name.
    Identifier,

    /// Any character run that is not a BL word.
    ///
    /// The lexer never fails; the parser rejects these instead.
    Error,

    /// End-of-input sentinel, always the final token.
    EndOfInput,
}

/// A single classified token.
///
/// # Example Tokens
/// ```text
/// WHILE          →  { kind: Keyword,    lexeme: "WHILE" }
/// next-is-wall   →  { kind: Condition,  lexeme: "next-is-wall" }
/// turnleft       →  { kind: Identifier, lexeme: "turnleft" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    /// Builds a token from its text, classifying it with the BL predicates.
    pub fn classify(lexeme: impl Into<String>, span: Span) -> Self {
        let lexeme = lexeme.into();
        let kind = if lexeme == END_OF_INPUT {
            TokenKind::EndOfInput
        } else if is_keyword(&lexeme) {
            TokenKind::Keyword
        } else if is_condition(&lexeme) {
            TokenKind::Condition
        } else if is_identifier(&lexeme) {
            TokenKind::Identifier
        } else {
            TokenKind::Error
        };

        Self { kind, lexeme, span }
    }

    /// The sentinel token.
    pub fn end_of_input(span: Span) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            lexeme: END_OF_INPUT.to_string(),
            span,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme, which is what users wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end_of_input() {
            f.write_str("end of input")
        } else {
            f.write_str(&self.lexeme)
        }
    }
}
