/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
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

use crate::span::Span;
use thiserror::Error;

/// What went wrong during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken { expected: String, found: String },

    #[error("'{found}' is not a valid condition")]
    InvalidCondition { found: String },

    #[error("instruction '{name}' is defined more than once")]
    DuplicateInstruction { name: String },

    #[error("'{name}' is a primitive instruction and cannot be redefined")]
    ReservedName { name: String },

    #[error("closing name '{found}' does not match '{expected}'")]
    MismatchedClosingName { expected: String, found: String },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    #[error("IF / WHILE nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ParseErrorKind {
    /// Stable error code (BL0001, BL0002, …)
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => "BL0001",
            ParseErrorKind::InvalidCondition { .. } => "BL0002",
            ParseErrorKind::DuplicateInstruction { .. } => "BL0003",
            ParseErrorKind::ReservedName { .. } => "BL0004",
            ParseErrorKind::MismatchedClosingName { .. } => "BL0005",
            ParseErrorKind::UnexpectedEndOfInput { .. } => "BL0006",
            ParseErrorKind::NestingTooDeep { .. } => "BL0007",
        }
    }
}

/// A fatal parse error.
///
/// Parsing is all-or-nothing: the first error aborts the whole parse and no
/// partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,

    /// Index of the offending token in the token sequence
    pub position: usize,

    /// Source location of the offending token
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl ParseError {
    /// Generic constructor
    pub fn new(kind: ParseErrorKind, position: usize, span: Span) -> Self {
        Self {
            kind,
            position,
            span,
            help: None,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
