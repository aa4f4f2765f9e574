/*
 * ==========================================================================
 * BLPARSE - BL Block Language Front End
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * Grammar handled here:
 *
 *   Block      ::= {Statement}
 *   Statement  ::= IfStmt | WhileStmt | CallStmt
 *   IfStmt     ::= "IF" Condition "THEN" Block ["ELSE" Block] "END" "IF"
 *   WhileStmt  ::= "WHILE" Condition "DO" Block "END" "WHILE"
 *   CallStmt   ::= Identifier
 *
 * Every IF and WHILE is closed by its own END, so an ELSE always belongs
 * to the nearest open IF.
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

use crate::ast::Statement;
use crate::error::ParseResult;
use crate::lexer::keywords::{is_identifier, is_keyword};
use crate::parser::parser::Parser;

impl Parser {
    /// Parses a single statement starting at the front token.
    ///
    /// This is the dispatcher for the statement grammar: it inspects the
    /// front token and routes to the IF, WHILE or CALL rule.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let front = &self.peek().lexeme;
        if !is_keyword(front) && !is_identifier(front) {
            return Err(self.unexpected("a statement"));
        }

        if self.check_keyword("IF") {
            return self.if_statement();
        }

        if self.check_keyword("WHILE") {
            return self.while_statement();
        }

        self.call_statement()
    }

    /// Parses statements into a BLOCK until the front token is `END`,
    /// `ELSE` or the end of input. An empty block is valid.
    pub fn parse_block(&mut self) -> ParseResult<Statement> {
        let mut block = Statement::new();

        while !self.check_keyword("END") && !self.check_keyword("ELSE") && !self.is_at_end() {
            let mut statement = self.parse_statement()?;
            let end = block.length_of_block();
            block.add_to_block(end, &mut statement);
        }

        Ok(block)
    }

    /// Parses `IF c THEN block [ELSE block] END IF`.
    fn if_statement(&mut self) -> ParseResult<Statement> {
        self.consume_keyword("IF")?;
        let condition = self.consume_condition()?;
        self.consume_keyword("THEN")?;

        let mut statement = Statement::new();
        self.nested(|p| {
            let mut then_body = p.parse_block()?;

            if p.match_keyword("ELSE") {
                let mut else_body = p.parse_block()?;
                statement.assemble_if_else(condition, &mut then_body, &mut else_body);
            } else {
                statement.assemble_if(condition, &mut then_body);
            }
            Ok(())
        })?;

        self.consume_keyword("END")?;
        self.consume_keyword("IF")?;
        Ok(statement)
    }

    /// Parses `WHILE c DO block END WHILE`.
    fn while_statement(&mut self) -> ParseResult<Statement> {
        self.consume_keyword("WHILE")?;
        let condition = self.consume_condition()?;
        self.consume_keyword("DO")?;

        let mut body = self.nested(Parser::parse_block)?;
        let mut statement = Statement::new();
        statement.assemble_while(condition, &mut body);

        self.consume_keyword("END")?;
        self.consume_keyword("WHILE")?;
        Ok(statement)
    }

    /// Parses a call to a (primitive or user-defined) instruction.
    fn call_statement(&mut self) -> ParseResult<Statement> {
        let name = self.consume_identifier()?;
        let mut statement = Statement::new();
        statement.assemble_call(&name);
        Ok(statement)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Condition, Kind};
    use crate::config::ParseOptions;
    use crate::error::ParseErrorKind;
    use crate::lexer::tokenize;
    use crate::parser::parser::Parser;
    use indoc::indoc;

    fn parser(source: &str) -> Parser {
        Parser::new(tokenize(source))
    }

    #[test]
    fn parses_call() {
        let s = parser("turnleft").parse_statement().unwrap();
        assert_eq!(s.kind(), Kind::Call);
        assert_eq!(s.instruction(), Some("turnleft"));
    }

    #[test]
    fn parses_nested_while_and_if() {
        let source = indoc! {"
            WHILE true DO
              IF next-is-wall THEN
                turnleft
              END IF
              move
            END WHILE
        "};
        let s = parser(source).parse_statement().unwrap();

        assert_eq!(s.kind(), Kind::While);
        assert_eq!(s.condition(), Some(Condition::True));
        let body = &s.children()[0];
        assert_eq!(body.length_of_block(), 2);
        assert_eq!(body.children()[0].kind(), Kind::If);
        assert_eq!(body.children()[1].instruction(), Some("move"));
    }

    #[test]
    fn else_binds_to_nearest_if() {
        let source = "IF random THEN IF true THEN a ELSE b END IF END IF";
        let s = parser(source).parse_statement().unwrap();

        assert_eq!(s.kind(), Kind::If);
        let inner = &s.children()[0].children()[0];
        assert_eq!(inner.kind(), Kind::IfElse);
    }

    #[test]
    fn block_stops_at_end_else_and_sentinel() {
        let mut p = parser("move skip END");
        let block = p.parse_block().unwrap();
        assert_eq!(block.length_of_block(), 2);
        assert!(p.check_keyword("END"));

        let mut p = parser("ELSE move");
        assert!(p.parse_block().unwrap().is_empty_block());
        assert_eq!(p.position(), 0);

        let mut p = parser("");
        assert!(p.parse_block().unwrap().is_empty_block());
    }

    #[test]
    fn leaves_trailing_tokens_unconsumed() {
        let mut p = parser("move skip");
        p.parse_statement().unwrap();
        assert_eq!(p.peek().lexeme, "skip");
    }

    #[test]
    fn rejects_keyword_that_cannot_start_statement() {
        let err = parser("THEN move").parse_statement().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
        assert_eq!(err.position, 0);
    }

    #[test]
    fn rejects_error_token() {
        let err = parser("move;").parse_block().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: "a statement".to_string(),
                found: ";".to_string(),
            }
        );
        assert_eq!(err.position, 1);
    }

    #[test]
    fn rejects_wrong_closing_keyword() {
        let err = parser("WHILE true DO move END IF")
            .parse_statement()
            .unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: "'WHILE'".to_string(),
                found: "IF".to_string(),
            }
        );
        assert_eq!(err.position, 5);
    }

    #[test]
    fn missing_end_is_end_of_input() {
        let err = parser("IF true THEN move").parse_statement().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedEndOfInput {
                expected: "'END'".to_string()
            }
        );
    }

    #[test]
    fn nesting_limit_is_enforced() {
        let source = "WHILE true DO WHILE true DO WHILE true DO move END WHILE END WHILE END WHILE";
        let options = ParseOptions::default().with_max_nesting_depth(2);

        let err = Parser::with_options(tokenize(source), options)
            .parse_statement()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 2 });

        let options = ParseOptions::default().with_max_nesting_depth(3);
        assert!(Parser::with_options(tokenize(source), options)
            .parse_statement()
            .is_ok());
    }
}
