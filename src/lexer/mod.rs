/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for BL lexical analysis.
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

/// Character scanner producing classified tokens.
pub mod lexer;

/// Keyword / condition / identifier predicates.
pub mod keywords;

/// Token and token kind definitions.
pub mod token;

pub use keywords::{is_condition, is_identifier, is_keyword};
pub use token::{Token, TokenKind, END_OF_INPUT};

/// Converts BL source text into a token vector ending in the
/// end-of-input sentinel.
///
/// # Example
/// ```rust
/// let tokens = blparse::lexer::tokenize("PROGRAM Test IS BEGIN END Test");
/// assert!(tokens.last().unwrap().is_end_of_input());
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = lexer::Lexer::new(source);
    lexer.scan_tokens();
    lexer.tokens
}
