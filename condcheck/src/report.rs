//! Finding renderers
//!
//! Text output in the familiar `path:line:col: warning: ...` form with a
//! source-context line, and JSON output for tooling.

use condcheck_parser::SourceMap;
use serde::Serialize;

use crate::inspection::Finding;

/// Render a single finding with its source context.
pub fn render_finding(finding: &Finding, path: &str, source: &str) -> String {
    let map = SourceMap::new(source);
    let pos = map.line_col(finding.span.start);

    let mut out = format!(
        "{}:{}:{}: warning: {}",
        path, pos.line, pos.column, finding.message
    );

    if let Some(line) = source.lines().nth(pos.line - 1) {
        let col = pos.column - 1;
        let len = finding
            .span
            .len()
            .min(line.len().saturating_sub(col))
            .max(1);
        out.push_str(&format!(
            "\n  {} | {}\n  {} | {}{}",
            pos.line,
            line,
            " ".repeat(pos.line.to_string().len()),
            " ".repeat(col),
            "^".repeat(len)
        ));
    }

    out
}

/// One file's findings, as serialized by `--json`
#[derive(Debug, Serialize)]
struct JsonFinding<'a> {
    path: &'a str,
    line: usize,
    column: usize,
    start: usize,
    end: usize,
    value: bool,
    message: &'a str,
}

/// Render findings for one file as a JSON array.
pub fn render_findings_json(
    findings: &[Finding],
    path: &str,
    source: &str,
) -> serde_json::Result<String> {
    let map = SourceMap::new(source);
    let entries: Vec<JsonFinding<'_>> = findings
        .iter()
        .map(|finding| {
            let pos = map.line_col(finding.span.start);
            JsonFinding {
                path,
                line: pos.line,
                column: pos.column,
                start: finding.span.start,
                end: finding.span.end,
                value: finding.value,
                message: &finding.message,
            }
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::inspect_source;

    #[test]
    fn test_render_finding_text() {
        let source = "if 2 < 3:\n    pass\n";
        let (findings, errors) = inspect_source(source);
        assert!(errors.is_empty());
        assert_eq!(findings.len(), 1);

        let rendered = render_finding(&findings[0], "demo.py", source);
        assert!(rendered.starts_with("demo.py:1:4: warning: The condition is always true"));
        assert!(rendered.contains("if 2 < 3:"));
        assert!(rendered.contains("^^^^^"));
    }

    #[test]
    fn test_render_findings_json() {
        let source = "if 2 < 3:\n    pass\n";
        let (findings, _) = inspect_source(source);

        let json = render_findings_json(&findings, "demo.py", source).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["line"], 1);
        assert_eq!(parsed[0]["column"], 4);
        assert_eq!(parsed[0]["value"], true);
        assert_eq!(parsed[0]["message"], "The condition is always true");
    }
}
