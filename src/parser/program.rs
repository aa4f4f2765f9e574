/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * Program-Level Parsing Logic
 *
 *   Program        ::= "PROGRAM" Identifier "IS" {InstructionDef}
 *                      "BEGIN" Block "END" Identifier
 *   InstructionDef ::= "INSTRUCTION" Identifier "IS" Block "END" Identifier
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

use crate::ast::program::{is_primitive_instruction, DefinitionError};
use crate::ast::Program;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::parser::parser::Parser;
use tracing::debug;

impl Parser {
    /// Parses a whole program and requires that only the sentinel remains.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        self.consume_keyword("PROGRAM")?;
        let name = self.consume_identifier()?;
        self.consume_keyword("IS")?;

        debug!(program = %name, "parsing BL program");
        let mut program = Program::new(name.clone());

        if !self.check_keyword("INSTRUCTION") && !self.check_keyword("BEGIN") {
            return Err(self.unexpected("'INSTRUCTION' or 'BEGIN'"));
        }

        while self.check_keyword("INSTRUCTION") {
            self.instruction(&mut program)?;
        }

        self.consume_keyword("BEGIN")?;
        let mut body = self.parse_block()?;
        program.swap_body(&mut body);

        self.consume_keyword("END")?;
        self.consume_closing_name(&name)?;
        self.expect_end_of_input()?;

        Ok(program)
    }

    /// Parses one `INSTRUCTION name IS block END name` definition and adds
    /// it to the program's context.
    fn instruction(&mut self, program: &mut Program) -> ParseResult<()> {
        self.consume_keyword("INSTRUCTION")?;

        let name_position = self.current;
        let name_span = self.peek().span;
        let name = self.consume_identifier()?;

        if is_primitive_instruction(&name) {
            return Err(ParseError::new(
                ParseErrorKind::ReservedName { name },
                name_position,
                name_span,
            ));
        }

        self.consume_keyword("IS")?;
        let mut body = self.parse_block()?;
        self.consume_keyword("END")?;
        self.consume_closing_name(&name)?;

        program.define_instruction(&name, &mut body).map_err(|e| {
            let kind = match e {
                DefinitionError::Duplicate(name) => ParseErrorKind::DuplicateInstruction { name },
                DefinitionError::Reserved(name) => ParseErrorKind::ReservedName { name },
            };
            ParseError::new(kind, name_position, name_span)
        })?;

        debug!(instruction = %name, "defined instruction");
        Ok(())
    }
}
