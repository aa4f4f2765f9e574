/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * File:     program.rs
 * Purpose:  A complete BL program: name, instruction context, main body.
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

use crate::ast::stmt::{Kind, Statement};
use crate::lexer::keywords::is_identifier;
use serde::Serialize;
use std::collections::BTreeMap;
use std::mem;
use thiserror::Error;

/// Instruction names built into BL. Programs may call them but never
/// redefine them.
pub const PRIMITIVE_INSTRUCTIONS: [&str; 5] = ["move", "turnleft", "turnright", "infect", "skip"];

/// Returns `true` if `name` is a primitive BL instruction.
pub fn is_primitive_instruction(name: &str) -> bool {
    PRIMITIVE_INSTRUCTIONS.contains(&name)
}

/// Why an instruction definition was refused by a `Program`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("instruction '{0}' is already defined")]
    Duplicate(String),

    #[error("'{0}' is a primitive instruction and cannot be redefined")]
    Reserved(String),
}

/// A parsed BL program.
///
/// # Invariants
/// - Every context entry and the body are BLOCK statements
/// - No context key is a primitive instruction name
/// - Context keys are unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    name: String,
    context: BTreeMap<String, Statement>,
    body: Statement,
}

impl Program {
    /// Creates a program with an empty context and an empty body.
    ///
    /// # Panics
    /// If `name` is not a valid BL identifier.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(
            is_identifier(&name),
            "Program::new: '{}' is not an IDENTIFIER",
            name
        );
        Self {
            name,
            context: BTreeMap::new(),
            body: Statement::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instruction definitions, keyed by name.
    pub fn context(&self) -> &BTreeMap<String, Statement> {
        &self.context
    }

    /// Body of the instruction `name`, if defined.
    pub fn instruction(&self, name: &str) -> Option<&Statement> {
        self.context.get(name)
    }

    /// Main body (the statements between `BEGIN` and `END`).
    pub fn body(&self) -> &Statement {
        &self.body
    }

    /// Adds the instruction `name`, moving `body` in and leaving it as an
    /// empty BLOCK.
    ///
    /// On error nothing is moved.
    ///
    /// # Panics
    /// If `name` is not a valid BL identifier or `body` is not a BLOCK.
    pub fn define_instruction(
        &mut self,
        name: &str,
        body: &mut Statement,
    ) -> Result<(), DefinitionError> {
        assert!(
            is_identifier(name),
            "define_instruction: '{}' is not an IDENTIFIER",
            name
        );
        assert!(
            body.kind() == Kind::Block,
            "define_instruction: body of '{}' must be a BLOCK",
            name
        );

        if is_primitive_instruction(name) {
            return Err(DefinitionError::Reserved(name.to_string()));
        }
        if self.context.contains_key(name) {
            return Err(DefinitionError::Duplicate(name.to_string()));
        }

        self.context.insert(name.to_string(), mem::take(body));
        Ok(())
    }

    /// Removes the instruction `name` and hands back its body.
    pub fn remove_instruction(&mut self, name: &str) -> Option<Statement> {
        self.context.remove(name)
    }

    /// Exchanges the main body with `body`.
    ///
    /// # Panics
    /// If `body` is not a BLOCK.
    pub fn swap_body(&mut self, body: &mut Statement) {
        assert!(
            body.kind() == Kind::Block,
            "swap_body: program body must be a BLOCK"
        );
        mem::swap(&mut self.body, body);
    }

    /// Pretty JSON dump of the whole program.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
