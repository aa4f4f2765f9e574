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

use crate::ast::condition::{parse_condition, Condition};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::lexer::keywords::{is_condition, is_identifier};
use crate::lexer::token::Token;
use crate::parser::parser::Parser;

impl Parser {
    /// Returns the front token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Consumes the front token and returns it.
    ///
    /// The sentinel is never consumed: at the end of input this returns the
    /// sentinel and leaves the cursor where it is.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if !token.is_end_of_input() {
            self.current += 1;
        }
        token
    }

    /// Returns true if only the sentinel is left.
    pub fn is_at_end(&self) -> bool {
        self.peek().is_end_of_input()
    }

    /// Checks for a keyword without consuming it.
    pub fn check_keyword(&self, kw: &str) -> bool {
        self.peek().lexeme == kw
    }

    /// Matches a BL keyword and consumes it if present.
    pub fn match_keyword(&mut self, kw: &str) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required keyword or fails.
    pub fn consume_keyword(&mut self, kw: &str) -> ParseResult<()> {
        if self.match_keyword(kw) {
            Ok(())
        } else {
            Err(self.unexpected(format!("'{}'", kw)))
        }
    }

    /// Consumes and returns an identifier or fails.
    pub fn consume_identifier(&mut self) -> ParseResult<String> {
        if is_identifier(&self.peek().lexeme) {
            Ok(self.advance().lexeme)
        } else {
            Err(self.unexpected("an identifier"))
        }
    }

    /// Consumes a condition token and converts it.
    pub fn consume_condition(&mut self) -> ParseResult<Condition> {
        let token = self.peek();
        if token.is_end_of_input() {
            return Err(self.unexpected("a condition"));
        }

        let lexeme = token.lexeme.clone();
        let condition = parse_condition(&lexeme).filter(|_| is_condition(&lexeme));
        match condition {
            Some(condition) => {
                self.advance();
                Ok(condition)
            }
            None => Err(self
                .error(ParseErrorKind::InvalidCondition { found: lexeme })
                .with_help("conditions look like `next-is-empty`, `random` or `true`")),
        }
    }

    /// Consumes the identifier closing a PROGRAM or INSTRUCTION, which must
    /// repeat the opening `name`.
    pub fn consume_closing_name(&mut self, name: &str) -> ParseResult<()> {
        let found = &self.peek().lexeme;
        if found == name {
            self.advance();
            return Ok(());
        }

        if is_identifier(found) {
            let found = found.clone();
            Err(self
                .error(ParseErrorKind::MismatchedClosingName {
                    expected: name.to_string(),
                    found,
                })
                .with_help(format!("close it with `END {}`", name)))
        } else {
            Err(self.unexpected(format!("closing name '{}'", name)))
        }
    }

    /// Requires that only the sentinel is left.
    pub fn expect_end_of_input(&self) -> ParseResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    /// Runs `rule` one IF / WHILE nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let limit = self.options.max_nesting_depth;
        if self.depth >= limit {
            return Err(self.error(ParseErrorKind::NestingTooDeep { limit }));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Builds an error of `kind` located at the front token.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.current, self.peek().span)
    }

    /// Builds the error for a front token that is not `expected`.
    ///
    /// At the sentinel this is `UnexpectedEndOfInput`, otherwise
    /// `UnexpectedToken`.
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        let token = self.peek();
        let kind = if token.is_end_of_input() {
            ParseErrorKind::UnexpectedEndOfInput { expected }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected,
                found: token.lexeme.clone(),
            }
        };
        self.error(kind)
    }
}
