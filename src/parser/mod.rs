/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the BL recursive-descent parser.
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse_*` entry points
pub mod parser;

/// Statement-level parsing:
/// - IF / IF_ELSE / WHILE / CALL
/// - blocks
pub mod statements;

/// Program-level parsing:
/// - PROGRAM header
/// - INSTRUCTION definitions
/// - main body
pub mod program;

/// Shared parser helpers:
/// - token matching
/// - required-token consumption
/// - error construction
pub mod helpers;

pub use parser::{parse_block, parse_program, parse_program_with_options, parse_statement, Parser};
