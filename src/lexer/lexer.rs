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

use crate::lexer::token::Token;
use crate::span::Span;
use tracing::trace;

/// Character-level scanner for BL source.
///
/// Walks the source one `char` at a time, tracking the line and the index
/// where that line starts so every token gets a `Span`. Words are classified
/// as keywords, conditions or identifiers; anything else becomes an error
/// token. Use `tokenize` unless the cursor state is needed.
pub struct Lexer {
    /// Source decoded into chars.
    chars: Vec<char>,

    /// Index of the next char to read.
    current: usize,

    /// Current 1-based line.
    line: usize,

    /// Char index where the current line begins.
    line_start: usize,

    /// Tokens produced so far.
    pub(crate) tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new BL lexer instance from raw source code.
    ///
    /// The cursor starts at position `0` on line `1` with an empty token
    /// buffer.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Skips whitespace and `#` comments
    /// - Emits one classified `Token` per word or error run
    /// - Guarantees a terminating `TokenKind::EndOfInput` marker
    ///
    /// # Output
    /// Results are written into `self.tokens`.
    pub fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }

        let span = self.span_at(self.current);
        self.tokens.push(Token::end_of_input(span));

        trace!(tokens = self.tokens.len(), "lexed BL source");
    }

    /// Scans and emits at most one token from the source stream.
    fn scan_token(&mut self) {
        let start = self.current;
        let ch = self.advance();

        match ch {
            '\n' => self.new_line(),
            c if c.is_whitespace() => {}

            // Comment runs to the end of the line
            '#' => {
                while self.peek() != '\n' && !self.is_at_end() {
                    self.advance();
                }
            }

            // Digit-led words are scanned whole and classified as errors
            'a'..='z' | 'A'..='Z' | '0'..='9' => self.word(start),

            _ => self.error_run(start),
        }
    }

    /// Scans a run of letters, digits and `-`.
    ///
    /// The resulting lexeme is classified as keyword, condition,
    /// identifier or error by `Token::classify`.
    fn word(&mut self, start: usize) {
        while is_word_char(self.peek()) {
            self.advance();
        }

        self.push_token(start);
    }

    /// Scans a run of characters that cannot start a word, up to the next
    /// whitespace, comment or word.
    fn error_run(&mut self, start: usize) {
        while !self.is_at_end() {
            let c = self.peek();
            if c.is_whitespace() || c == '#' || c.is_ascii_alphanumeric() {
                break;
            }
            self.advance();
        }

        self.push_token(start);
    }

    fn push_token(&mut self, start: usize) {
        let text: String = self.chars[start..self.current].iter().collect();
        let span = self.span_at(start);
        self.tokens.push(Token::classify(text, span));
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }

    fn span_at(&self, index: usize) -> Span {
        Span {
            line: self.line,
            column: index - self.line_start,
        }
    }

    /// Advances the lexer cursor by one character.
    ///
    /// Caller must ensure the end of input has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character without consuming it, or `'\0'` at
    /// the end of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

#[cfg(test)]
mod tests {
    use crate::lexer::token::{TokenKind, END_OF_INPUT};
    use crate::lexer::tokenize;
    use indoc::indoc;

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn splits_words_and_appends_sentinel() {
        assert_eq!(
            lexemes("IF next-is-wall THEN turnleft END IF"),
            ["IF", "next-is-wall", "THEN", "turnleft", "END", "IF", END_OF_INPUT]
        );
    }

    #[test]
    fn empty_source_is_only_sentinel() {
        let tokens = tokenize("   \n\t ");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_end_of_input());
        assert_eq!(tokens[0].span.line, 2);
    }

    #[test]
    fn skips_comments() {
        let source = indoc! {"
            # leading comment
            move # trailing comment
            skip
        "};
        assert_eq!(lexemes(source), ["move", "skip", END_OF_INPUT]);
    }

    #[test]
    fn tracks_line_and_column() {
        let tokens = tokenize("PROGRAM Test IS\n  BEGIN");
        assert_eq!((tokens[1].span.line, tokens[1].span.column), (1, 8));
        assert_eq!((tokens[3].span.line, tokens[3].span.column), (2, 2));
    }

    #[test]
    fn non_word_runs_become_error_tokens() {
        let tokens = tokenize("move; 2fast {x}");
        let kinds: Vec<_> = tokens.iter().map(|t| (t.lexeme.as_str(), t.kind)).collect();
        assert_eq!(
            kinds,
            [
                ("move", TokenKind::Identifier),
                (";", TokenKind::Error),
                ("2fast", TokenKind::Error),
                ("{", TokenKind::Error),
                ("x", TokenKind::Identifier),
                ("}", TokenKind::Error),
                (END_OF_INPUT, TokenKind::EndOfInput),
            ]
        );
    }
}
