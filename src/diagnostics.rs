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

use crate::error::ParseError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for BL parse errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
pub struct DiagnosticPrinter {
    /// Full source text of the file being parsed.
    source: String,

    /// Name of the source file (e.g. `roamer.bl`), for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a diagnostic for `error`.
    ///
    /// # Output Example
    /// ```text
    /// error[BL0005]: closing name 'Q' does not match 'P'
    ///   --> test.bl:1:28
    ///     |
    ///   1 | PROGRAM P IS BEGIN foo END Q
    ///     |                            ^
    /// help: close it with `END P`
    /// ```
    pub fn render(&self, error: &ParseError) -> String {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics; `saturating_sub` guards line 0
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n",
            error.code(),
            error,
            self.file_name,
            line,
            column + 1
        );

        out.push_str("    |\n");
        out.push_str(&format!("{:>3} | {}\n", line, src_line));
        out.push_str(&format!("    | {}^\n", caret_padding(src_line, column)));

        if let Some(help) = &error.help {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &ParseError) {
        eprint!("{}", self.render(error));
    }
}

/// Blanks out the first `column` chars of `line`, keeping tabs so the caret
/// lines up however the terminal expands them.
fn caret_padding(line: &str, column: usize) -> String {
    let mut padding: String = line
        .chars()
        .take(column)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    // The end-of-input sentinel can sit past the last char of its line
    let shown = padding.chars().count();
    padding.push_str(&" ".repeat(column.saturating_sub(shown)));
    padding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_program_source;

    #[test]
    fn renders_caret_under_offending_token() {
        let source = "PROGRAM P IS BEGIN foo END Q";
        let error = parse_program_source(source).unwrap_err();
        let report = DiagnosticPrinter::new("test.bl", source).render(&error);

        let expected = [
            "error[BL0005]: closing name 'Q' does not match 'P'\n".to_string(),
            "  --> test.bl:1:28\n".to_string(),
            "    |\n".to_string(),
            "  1 | PROGRAM P IS BEGIN foo END Q\n".to_string(),
            format!("    | {}^\n", " ".repeat(27)),
            "help: close it with `END P`\n".to_string(),
        ]
        .concat();
        assert_eq!(report, expected);
    }

    #[test]
    fn end_of_input_points_past_last_line() {
        let source = "PROGRAM P IS\nBEGIN\n";
        let error = parse_program_source(source).unwrap_err();
        let report = DiagnosticPrinter::new("short.bl", source).render(&error);

        assert!(report.starts_with("error[BL0006]: unexpected end of input, expected 'END'\n"));
        assert!(report.contains("short.bl:3:1"));
    }

    #[test]
    fn caret_keeps_tab_indentation() {
        let source = "PROGRAM P IS\nBEGIN\n\tIF sunny THEN move END IF\nEND P";
        let error = parse_program_source(source).unwrap_err();
        let report = DiagnosticPrinter::new("tabs.bl", source).render(&error);

        assert_eq!(error.span, Span::new(3, 4));
        assert!(report.contains("  3 | \tIF sunny THEN move END IF\n"));
        assert!(report.contains("    | \t   ^\n"));
    }
}
