/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * File:     condition.rs
 * Purpose:  The closed set of test conditions guarding IF / WHILE.
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

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A test condition used by `IF`, `IF ... ELSE` and `WHILE`.
///
/// The parser never interprets a condition; it only checks that the
/// token belongs to this vocabulary and stores the matching value.
///
/// # Surface Syntax
/// ```text
/// next-is-empty        -> Condition::NextIsEmpty
/// x-is-less-than-y     -> Condition::Less
/// true                 -> Condition::True
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsWall,
    NextIsNotWall,
    NextIsFriend,
    NextIsNotFriend,
    NextIsEnemy,
    NextIsNotEnemy,
    Random,
    True,

    /* ----------------------------- */
    /* RELATIONAL TESTS              */
    /* ----------------------------- */
    Less,
    LessOrEqual,
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
}

impl Condition {
    /// Every condition, in declaration order.
    pub const ALL: [Condition; 16] = [
        Condition::NextIsEmpty,
        Condition::NextIsNotEmpty,
        Condition::NextIsWall,
        Condition::NextIsNotWall,
        Condition::NextIsFriend,
        Condition::NextIsNotFriend,
        Condition::NextIsEnemy,
        Condition::NextIsNotEnemy,
        Condition::Random,
        Condition::True,
        Condition::Less,
        Condition::LessOrEqual,
        Condition::Equal,
        Condition::NotEqual,
        Condition::Greater,
        Condition::GreaterOrEqual,
    ];

    /// Canonical surface text of the condition, as written in BL source.
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::NextIsEmpty => "next-is-empty",
            Condition::NextIsNotEmpty => "next-is-not-empty",
            Condition::NextIsWall => "next-is-wall",
            Condition::NextIsNotWall => "next-is-not-wall",
            Condition::NextIsFriend => "next-is-friend",
            Condition::NextIsNotFriend => "next-is-not-friend",
            Condition::NextIsEnemy => "next-is-enemy",
            Condition::NextIsNotEnemy => "next-is-not-enemy",
            Condition::Random => "random",
            Condition::True => "true",
            Condition::Less => "x-is-less-than-y",
            Condition::LessOrEqual => "x-is-less-than-or-equal-to-y",
            Condition::Equal => "x-is-equal-to-y",
            Condition::NotEqual => "x-is-not-equal-to-y",
            Condition::Greater => "x-is-greater-than-y",
            Condition::GreaterOrEqual => "x-is-greater-than-or-equal-to-y",
        }
    }

    /// Looks up a condition by its surface text.
    ///
    /// Matching is case-insensitive, and `_` is accepted in place of the
    /// surface separator `-`, so `NEXT_IS_EMPTY` and `next-is-empty` name
    /// the same condition.
    pub fn parse(text: &str) -> Option<Condition> {
        let normalized = text.replace('_', "-").to_ascii_lowercase();
        Condition::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
    }
}

/// Converts condition token text into its `Condition`.
///
/// Callers are expected to have classified the token with
/// `lexer::keywords::is_condition` first; unknown text yields `None`.
pub fn parse_condition(text: &str) -> Option<Condition> {
    Condition::parse(text)
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by `Condition::from_str` for unknown text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a BL condition")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::parse(s).ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
