/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Token classification predicates for BL.
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

use crate::ast::condition::Condition;
use regex::Regex;
use std::sync::OnceLock;

/// Reserved BL keywords, in grammar order.
pub const KEYWORDS: [&str; 10] = [
    "PROGRAM",
    "IS",
    "INSTRUCTION",
    "BEGIN",
    "END",
    "IF",
    "THEN",
    "ELSE",
    "WHILE",
    "DO",
];

/// Determines whether a word is a **reserved keyword** in BL.
///
/// Keywords are case-sensitive: `IF` is a keyword, `if` is an identifier.
///
/// # BL Examples
/// ```text
/// WHILE     -> keyword
/// while     -> identifier
/// turnleft  -> identifier
/// ```
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "PROGRAM"
            | "IS"
            | "INSTRUCTION"
            | "BEGIN"
            | "END"
            | "IF"
            | "THEN"
            | "ELSE"
            | "WHILE"
            | "DO"
    )
}

/// Determines whether a word is one of the condition keywords
/// (`next-is-empty`, `random`, `x-is-less-than-y`, ...).
///
/// Unlike `Condition::parse`, this check is exact: condition tokens are
/// written in lowercase in BL source.
pub fn is_condition(word: &str) -> bool {
    Condition::ALL.iter().any(|c| c.as_str() == word)
}

/// Shape of every BL word: a letter followed by letters, digits or `-`.
pub fn is_word(word: &str) -> bool {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("valid word pattern"))
        .is_match(word)
}

/// Determines whether a word may name a program, an instruction or a
/// call target.
///
/// An identifier is a word that is neither a keyword nor a condition.
pub fn is_identifier(word: &str) -> bool {
    is_word(word) && !is_keyword(word) && !is_condition(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_sensitive() {
        for kw in KEYWORDS {
            assert!(is_keyword(kw));
            assert!(!is_identifier(kw));
            assert!(is_identifier(&kw.to_lowercase()));
        }
    }

    #[test]
    fn identifiers_are_letter_led_words() {
        assert!(is_identifier("move"));
        assert!(is_identifier("FindObstacle"));
        assert!(is_identifier("turn-around-2"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("-x"));
        assert!(!is_identifier("a_b"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn conditions_are_not_identifiers() {
        assert!(is_condition("next-is-enemy"));
        assert!(is_condition("x-is-less-than-y"));
        assert!(!is_identifier("next-is-enemy"));
        assert!(!is_condition("NEXT-IS-ENEMY"));
        assert!(is_identifier("NEXT-IS-ENEMY"));
    }
}
