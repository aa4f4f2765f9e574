/*
 * =============================================================================
 *  BLPARSE - BL Block Language Front End
 * =============================================================================
 *
 *  File:     printer.rs
 *  Purpose:  Renders BL syntax trees back into canonical BL source.
 *
 *  The printed form is not byte-identical to the original source (comments
 *  and layout are lost), but re-parsing it always yields an equal tree.
 *
 *  Author:   Sam Wilcox
 *
 *  License:
 *  This file is part of the BLPARSE project.
 *
 *  BLPARSE is dual-licensed under the terms of:
 *    - The MIT license
 *    - The Apache License, Version 2.0
 *
 * -----------------------------------------------------------------------------
 *  Warranty Disclaimer:
 * -----------------------------------------------------------------------------
 *  Unless required by applicable law or agreed to in writing, this software is
 *  distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 *  either express or implied.
 *
 * =============================================================================
 */

use crate::ast::{Kind, Program, Statement};
use std::fmt::{self, Write};

/// Spaces added per nesting level.
pub const INDENT_SIZE: usize = 2;

/// ============================================================================
/// statement_to_string
/// ============================================================================
/// Renders `statement` with every line indented by `indent` spaces.
///
/// A BLOCK prints its statements one after another at the same indent; the
/// bodies of IF / WHILE are indented one level further.
///
/// Example (`indent = 0`):
/// ```text
/// IF next-is-wall THEN
///   turnleft
/// ELSE
///   move
/// END IF
/// ```
/// ============================================================================
pub fn statement_to_string(statement: &Statement, indent: usize) -> String {
    let mut out = String::new();
    write_statement(&mut out, statement, indent).expect("writing to a String cannot fail");
    out
}

fn write_statement<W: Write>(out: &mut W, s: &Statement, indent: usize) -> fmt::Result {
    let pad = " ".repeat(indent);

    match s.kind() {
        Kind::Block => {
            for child in s.children() {
                write_statement(out, child, indent)?;
            }
        }

        Kind::If | Kind::IfElse => {
            let condition = s.condition().map(|c| c.as_str()).unwrap_or_default();
            writeln!(out, "{}IF {} THEN", pad, condition)?;
            write_statement(out, &s.children()[0], indent + INDENT_SIZE)?;

            if let Some(else_body) = s.children().get(1) {
                writeln!(out, "{}ELSE", pad)?;
                write_statement(out, else_body, indent + INDENT_SIZE)?;
            }

            writeln!(out, "{}END IF", pad)?;
        }

        Kind::While => {
            let condition = s.condition().map(|c| c.as_str()).unwrap_or_default();
            writeln!(out, "{}WHILE {} DO", pad, condition)?;
            write_statement(out, &s.children()[0], indent + INDENT_SIZE)?;
            writeln!(out, "{}END WHILE", pad)?;
        }

        Kind::Call => {
            writeln!(out, "{}{}", pad, s.instruction().unwrap_or_default())?;
        }
    }

    Ok(())
}

fn write_program<W: Write>(out: &mut W, program: &Program) -> fmt::Result {
    writeln!(out, "PROGRAM {} IS", program.name())?;
    writeln!(out)?;

    for (name, body) in program.context() {
        writeln!(out, "{}INSTRUCTION {} IS", " ".repeat(INDENT_SIZE), name)?;
        write_statement(out, body, 2 * INDENT_SIZE)?;
        writeln!(out, "{}END {}", " ".repeat(INDENT_SIZE), name)?;
        writeln!(out)?;
    }

    writeln!(out, "BEGIN")?;
    write_statement(out, program.body(), INDENT_SIZE)?;
    writeln!(out, "END {}", program.name())
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_program(f, self)
    }
}
