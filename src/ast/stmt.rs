/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * File:     stmt.rs
 * Purpose:  The BL statement tree and its kernel operations.
 *
 * Every statement is a node tagged with exactly one `Kind`:
 *
 *   Kind     | children              | condition | instruction
 *   ---------+-----------------------+-----------+------------
 *   BLOCK    | 0..N (never BLOCK)    | no        | no
 *   IF       | 1 BLOCK               | yes       | no
 *   IF_ELSE  | 2 BLOCKs              | yes       | no
 *   WHILE    | 1 BLOCK               | yes       | no
 *   CALL     | 0                     | no        | yes
 *
 * Trees are only built and taken apart through the assemble / disassemble
 * operations below. Any statement handed in as a part is moved into the
 * tree and left behind as an empty BLOCK, so no node ever has two parents.
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

use crate::ast::condition::Condition;
use crate::lexer::keywords::is_identifier;
use serde::Serialize;
use std::fmt;
use std::mem;

/// The kind tag of a statement node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Block,
    If,
    IfElse,
    While,
    Call,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Block => "BLOCK",
            Kind::If => "IF",
            Kind::IfElse => "IF_ELSE",
            Kind::While => "WHILE",
            Kind::Call => "CALL",
        };
        f.write_str(name)
    }
}

/// Root label of a statement node.
///
/// The label carries the per-kind fields, so a condition can only exist on
/// IF / IF_ELSE / WHILE and an instruction name only on CALL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
enum Label {
    Block,
    If { condition: Condition },
    IfElse { condition: Condition },
    While { condition: Condition },
    Call { instruction: String },
}

/// A node of the BL abstract syntax tree.
///
/// A fresh `Statement` is an empty BLOCK. Structural equality (`==`)
/// compares kinds, fields and children recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    #[serde(flatten)]
    label: Label,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Statement>,
}

impl Default for Statement {
    fn default() -> Self {
        Self::new()
    }
}

impl Statement {
    /// Creates an empty BLOCK.
    pub fn new() -> Self {
        Self {
            label: Label::Block,
            children: Vec::new(),
        }
    }

    /* ----------------------------- */
    /* OBSERVERS                     */
    /* ----------------------------- */

    /// Returns the kind of the root node.
    pub fn kind(&self) -> Kind {
        match self.label {
            Label::Block => Kind::Block,
            Label::If { .. } => Kind::If,
            Label::IfElse { .. } => Kind::IfElse,
            Label::While { .. } => Kind::While,
            Label::Call { .. } => Kind::Call,
        }
    }

    /// Condition of an IF / IF_ELSE / WHILE node, `None` otherwise.
    pub fn condition(&self) -> Option<Condition> {
        match self.label {
            Label::If { condition }
            | Label::IfElse { condition }
            | Label::While { condition } => Some(condition),
            Label::Block | Label::Call { .. } => None,
        }
    }

    /// Instruction name of a CALL node, `None` otherwise.
    pub fn instruction(&self) -> Option<&str> {
        match &self.label {
            Label::Call { instruction } => Some(instruction),
            _ => None,
        }
    }

    /// Read-only view of the children in order.
    pub fn children(&self) -> &[Statement] {
        &self.children
    }

    /// Number of statements in a BLOCK.
    ///
    /// # Panics
    /// If `self` is not a BLOCK.
    pub fn length_of_block(&self) -> usize {
        self.expect_kind(Kind::Block);
        self.children.len()
    }

    /// `true` for a BLOCK with no statements.
    pub fn is_empty_block(&self) -> bool {
        self.kind() == Kind::Block && self.children.is_empty()
    }

    /* ----------------------------- */
    /* OWNERSHIP                     */
    /* ----------------------------- */

    /// Moves the whole tree of `source` into `self`, leaving `source` as an
    /// empty BLOCK.
    pub fn transfer_from(&mut self, source: &mut Statement) {
        *self = mem::take(source);
    }

    /* ----------------------------- */
    /* BLOCK                         */
    /* ----------------------------- */

    /// Inserts `child` at `pos`, shifting later statements right.
    ///
    /// `child` is moved into the block and left as an empty BLOCK.
    ///
    /// # Panics
    /// - If `self` is not a BLOCK
    /// - If `child` is a BLOCK
    /// - If `pos > self.length_of_block()`
    pub fn add_to_block(&mut self, pos: usize, child: &mut Statement) {
        self.expect_kind(Kind::Block);
        assert!(
            child.kind() != Kind::Block,
            "add_to_block: child must not be a BLOCK"
        );
        assert!(
            pos <= self.children.len(),
            "add_to_block: position {} out of range for block of length {}",
            pos,
            self.children.len()
        );

        self.children.insert(pos, mem::take(child));
    }

    /// Detaches and returns the statement at `pos`.
    ///
    /// # Panics
    /// - If `self` is not a BLOCK
    /// - If `pos >= self.length_of_block()`
    pub fn remove_from_block(&mut self, pos: usize) -> Statement {
        self.expect_kind(Kind::Block);
        assert!(
            pos < self.children.len(),
            "remove_from_block: position {} out of range for block of length {}",
            pos,
            self.children.len()
        );

        self.children.remove(pos)
    }

    /* ----------------------------- */
    /* IF                            */
    /* ----------------------------- */

    /// Replaces `self` with `IF condition THEN body END IF`.
    ///
    /// `body` is moved in and left as an empty BLOCK.
    ///
    /// # Panics
    /// If `body` is not a BLOCK.
    pub fn assemble_if(&mut self, condition: Condition, body: &mut Statement) {
        body.expect_kind(Kind::Block);
        self.label = Label::If { condition };
        self.children = vec![mem::take(body)];
    }

    /// Takes an IF apart: moves its body into `body`, resets `self` to an
    /// empty BLOCK and returns the condition.
    ///
    /// # Panics
    /// If `self` is not an IF.
    pub fn disassemble_if(&mut self, body: &mut Statement) -> Condition {
        self.expect_kind(Kind::If);
        let (condition, mut children) = self.take_parts();
        *body = children.remove(0);
        condition
    }

    /// Replaces `self` with `IF condition THEN then_body ELSE else_body END IF`.
    ///
    /// Both bodies are moved in and left as empty BLOCKs.
    ///
    /// # Panics
    /// If either body is not a BLOCK.
    pub fn assemble_if_else(
        &mut self,
        condition: Condition,
        then_body: &mut Statement,
        else_body: &mut Statement,
    ) {
        then_body.expect_kind(Kind::Block);
        else_body.expect_kind(Kind::Block);
        self.label = Label::IfElse { condition };
        self.children = vec![mem::take(then_body), mem::take(else_body)];
    }

    /// Takes an IF_ELSE apart into its two bodies and returns the condition.
    ///
    /// # Panics
    /// If `self` is not an IF_ELSE.
    pub fn disassemble_if_else(
        &mut self,
        then_body: &mut Statement,
        else_body: &mut Statement,
    ) -> Condition {
        self.expect_kind(Kind::IfElse);
        let (condition, children) = self.take_parts();
        let mut bodies = children.into_iter();
        *then_body = bodies.next().unwrap_or_default();
        *else_body = bodies.next().unwrap_or_default();
        condition
    }

    /* ----------------------------- */
    /* WHILE                         */
    /* ----------------------------- */

    /// Replaces `self` with `WHILE condition DO body END WHILE`.
    ///
    /// # Panics
    /// If `body` is not a BLOCK.
    pub fn assemble_while(&mut self, condition: Condition, body: &mut Statement) {
        body.expect_kind(Kind::Block);
        self.label = Label::While { condition };
        self.children = vec![mem::take(body)];
    }

    /// Takes a WHILE apart into its body and returns the condition.
    ///
    /// # Panics
    /// If `self` is not a WHILE.
    pub fn disassemble_while(&mut self, body: &mut Statement) -> Condition {
        self.expect_kind(Kind::While);
        let (condition, mut children) = self.take_parts();
        *body = children.remove(0);
        condition
    }

    /* ----------------------------- */
    /* CALL                          */
    /* ----------------------------- */

    /// Replaces `self` with a call to `instruction`.
    ///
    /// # Panics
    /// If `instruction` is not a valid BL identifier.
    pub fn assemble_call(&mut self, instruction: &str) {
        assert!(
            is_identifier(instruction),
            "assemble_call: '{}' is not an IDENTIFIER",
            instruction
        );
        self.label = Label::Call {
            instruction: instruction.to_string(),
        };
        self.children = Vec::new();
    }

    /// Takes a CALL apart, returning its instruction name.
    ///
    /// # Panics
    /// If `self` is not a CALL.
    pub fn disassemble_call(&mut self) -> String {
        self.expect_kind(Kind::Call);
        match mem::take(self).label {
            Label::Call { instruction } => instruction,
            _ => unreachable!("kind checked above"),
        }
    }

    /* ----------------------------- */
    /* SERIALIZATION                 */
    /* ----------------------------- */

    /// Pretty JSON dump of the tree.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /* ----------------------------- */
    /* INTERNALS                     */
    /* ----------------------------- */

    fn expect_kind(&self, expected: Kind) {
        let actual = self.kind();
        assert!(
            actual == expected,
            "expected a {} statement, found {}",
            expected,
            actual
        );
    }

    /// Empties `self`, returning the condition and children of a
    /// conditional node.
    fn take_parts(&mut self) -> (Condition, Vec<Statement>) {
        let Statement { label, children } = mem::take(self);
        let condition = match label {
            Label::If { condition }
            | Label::IfElse { condition }
            | Label::While { condition } => condition,
            Label::Block | Label::Call { .. } => unreachable!("kind checked by caller"),
        };
        (condition, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str) -> Statement {
        let mut s = Statement::new();
        s.assemble_call(name);
        s
    }

    fn block_of(names: &[&str]) -> Statement {
        let mut block = Statement::new();
        for name in names {
            let mut c = call(name);
            let end = block.length_of_block();
            block.add_to_block(end, &mut c);
        }
        block
    }

    #[test]
    fn new_statement_is_empty_block() {
        let s = Statement::new();
        assert_eq!(s.kind(), Kind::Block);
        assert_eq!(s.length_of_block(), 0);
        assert!(s.is_empty_block());
        assert_eq!(s.condition(), None);
        assert_eq!(s.instruction(), None);
    }

    #[test]
    fn add_to_block_moves_child_and_empties_source() {
        let mut block = block_of(&["move", "skip"]);
        let mut child = call("infect");

        block.add_to_block(1, &mut child);

        assert!(child.is_empty_block());
        let names: Vec<_> = block
            .children()
            .iter()
            .map(|c| c.instruction().unwrap())
            .collect();
        assert_eq!(names, ["move", "infect", "skip"]);
    }

    #[test]
    fn remove_from_block_detaches_child() {
        let mut block = block_of(&["a", "b", "c"]);
        let removed = block.remove_from_block(1);

        assert_eq!(removed.instruction(), Some("b"));
        assert_eq!(block.length_of_block(), 2);
        assert_eq!(block.children()[1].instruction(), Some("c"));
    }

    #[test]
    #[should_panic(expected = "must not be a BLOCK")]
    fn add_to_block_rejects_block_child() {
        let mut block = Statement::new();
        let mut inner = Statement::new();
        block.add_to_block(0, &mut inner);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn add_to_block_rejects_position_past_end() {
        let mut block = Statement::new();
        let mut c = call("move");
        block.add_to_block(1, &mut c);
    }

    #[test]
    #[should_panic(expected = "expected a BLOCK statement, found CALL")]
    fn length_of_block_requires_block() {
        call("move").length_of_block();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn remove_from_empty_block_panics() {
        Statement::new().remove_from_block(0);
    }

    #[test]
    fn if_assemble_and_disassemble_are_inverse() {
        let original = block_of(&["move", "turnleft"]);
        let mut body = original.clone();
        let mut s = Statement::new();

        s.assemble_if(Condition::NextIsWall, &mut body);
        assert!(body.is_empty_block());
        assert_eq!(s.kind(), Kind::If);
        assert_eq!(s.condition(), Some(Condition::NextIsWall));
        assert_eq!(s.children().len(), 1);

        let mut out = Statement::new();
        let c = s.disassemble_if(&mut out);
        assert_eq!(c, Condition::NextIsWall);
        assert_eq!(out, original);
        assert!(s.is_empty_block());
    }

    #[test]
    fn if_else_assemble_and_disassemble_are_inverse() {
        let then_original = block_of(&["move"]);
        let else_original = block_of(&["turnright", "skip"]);
        let mut then_body = then_original.clone();
        let mut else_body = else_original.clone();
        let mut s = call("replaced");

        s.assemble_if_else(Condition::Random, &mut then_body, &mut else_body);
        assert!(then_body.is_empty_block());
        assert!(else_body.is_empty_block());
        assert_eq!(s.kind(), Kind::IfElse);
        assert_eq!(s.instruction(), None);

        let mut then_out = Statement::new();
        let mut else_out = Statement::new();
        assert_eq!(
            s.disassemble_if_else(&mut then_out, &mut else_out),
            Condition::Random
        );
        assert_eq!(then_out, then_original);
        assert_eq!(else_out, else_original);
        assert!(s.is_empty_block());
    }

    #[test]
    fn while_assemble_and_disassemble_are_inverse() {
        let original = block_of(&["infect"]);
        let mut body = original.clone();
        let mut s = Statement::new();

        s.assemble_while(Condition::True, &mut body);
        assert_eq!(s.kind(), Kind::While);

        let mut out = Statement::new();
        assert_eq!(s.disassemble_while(&mut out), Condition::True);
        assert_eq!(out, original);
    }

    #[test]
    fn call_assemble_and_disassemble_are_inverse() {
        let mut s = call("jump-twice");
        assert_eq!(s.kind(), Kind::Call);
        assert!(s.children().is_empty());
        assert_eq!(s.disassemble_call(), "jump-twice");
        assert!(s.is_empty_block());
    }

    #[test]
    #[should_panic(expected = "not an IDENTIFIER")]
    fn assemble_call_rejects_keyword() {
        Statement::new().assemble_call("WHILE");
    }

    #[test]
    #[should_panic(expected = "expected a IF statement")]
    fn disassemble_if_requires_if() {
        let mut out = Statement::new();
        call("move").disassemble_if(&mut out);
    }

    #[test]
    fn transfer_from_empties_source() {
        let mut source = block_of(&["move"]);
        let mut target = Statement::new();
        target.transfer_from(&mut source);
        assert_eq!(target.length_of_block(), 1);
        assert!(source.is_empty_block());
    }

    #[test]
    fn json_dump_tags_kinds() {
        let mut body = block_of(&["move"]);
        let mut s = Statement::new();
        s.assemble_while(Condition::NextIsEmpty, &mut body);

        let json: serde_json::Value = serde_json::from_str(&s.to_json().unwrap()).unwrap();
        assert_eq!(json["kind"], "WHILE");
        assert_eq!(json["condition"], "next-is-empty");
        assert_eq!(json["children"][0]["kind"], "BLOCK");
        assert_eq!(json["children"][0]["children"][0]["instruction"], "move");
    }
}
