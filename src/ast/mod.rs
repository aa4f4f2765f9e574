/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module for the BL abstract syntax tree.
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

/// Test conditions for IF / WHILE.
pub mod condition;

/// Statement tree and kernel operations.
pub mod stmt;

/// Whole programs and their instruction context.
pub mod program;

pub use condition::{parse_condition, Condition};
pub use program::{is_primitive_instruction, DefinitionError, Program, PRIMITIVE_INSTRUCTIONS};
pub use stmt::{Kind, Statement};
