//! Diagnostic rendering: plain one-liners, labeled ariadne reports, and
//! JSON objects for tooling.
//!
//! Labeled rendering needs the collaborator's source text; when either the
//! text or the diagnostic's span is missing, rendering falls back to the
//! plain form. JSON output is one object per diagnostic, matching the
//! `--json` mode of the CLI.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::diagnostic::{codes, Diagnostic, Severity};

/// How diagnostics should be rendered to the user.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Colorize labeled reports.
    pub color: bool,
    /// Emit machine-readable JSON instead of human-readable text.
    pub json: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

/// Render a diagnostic as a plain one-line message.
pub fn render_plain(diag: &Diagnostic) -> String {
    match &diag.field_name {
        Some(field) => format!("{} (type {}, field {})", diag, diag.type_name, field),
        None => format!("{} (type {})", diag, diag.type_name),
    }
}

/// Render a diagnostic as a labeled ariadne report against the given source.
///
/// Falls back to [`render_plain`] when the diagnostic carries no span.
/// Output is colorless when `color` is false, for stable test output.
pub fn render_report(diag: &Diagnostic, source: &str, color: bool) -> String {
    let Some(span) = diag.span else {
        return render_plain(diag);
    };

    let config = Config::default().with_color(color);
    let source_len = source.len();

    // Clamp to source bounds; ariadne needs a non-empty span.
    let clamp = |r: Range<usize>| -> Range<usize> {
        let s = r.start.min(source_len);
        let e = r.end.min(source_len).max(s);
        if s == e {
            // Degenerate span: widen to one character inside the source.
            let s = s.min(source_len.saturating_sub(1));
            s..(s + 1).min(source_len)
        } else {
            s..e
        }
    };
    let range = clamp(span.start as usize..span.end as usize);

    let (kind, label_color) = match diag.severity {
        Severity::Warning => (ReportKind::Warning, Color::Yellow),
        Severity::Error => (ReportKind::Error, Color::Red),
    };

    let label_message = match &diag.field_name {
        Some(field) => format!("field '{}' declared here", field),
        None => format!("type '{}' declared here", diag.type_name),
    };

    let mut builder = Report::build(kind, range.clone())
        .with_code(diag.code)
        .with_message(&diag.message)
        .with_config(config)
        .with_label(
            Label::new(range)
                .with_message(label_message)
                .with_color(label_color),
        );

    if let Some(help) = help_for(diag) {
        builder.set_help(help);
    }

    let report = builder.finish();
    let mut buf = Vec::new();
    let cache = Source::from(source);
    report.write(cache, &mut buf).expect("failed to write diagnostic");
    String::from_utf8(buf).expect("diagnostic output should be valid UTF-8")
}

/// Render a diagnostic as a single-line JSON object.
pub fn render_json(diag: &Diagnostic) -> String {
    let span = diag
        .span
        .map(|s| serde_json::json!({ "start": s.start, "end": s.end }));
    serde_json::json!({
        "code": diag.code,
        "severity": diag.severity.to_string(),
        "message": diag.message,
        "type": diag.type_name,
        "field": diag.field_name,
        "span": span,
    })
    .to_string()
}

/// A fix hint for codes where a plausible fix exists.
fn help_for(diag: &Diagnostic) -> Option<String> {
    match diag.code {
        codes::UNVERIFIABLE_FIELD => Some(
            "give the field a nullable domain so an unset value can be observed, \
             or remove the mandatory marker"
                .to_string(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn unverifiable(span: Option<Span>) -> Diagnostic {
        Diagnostic::warning(
            codes::UNVERIFIABLE_FIELD,
            "Example.Struct1",
            "field 'count' has a value type but no unset representation; it will not be verified",
        )
        .with_field("count")
        .with_span(span)
    }

    #[test]
    fn plain_names_type_and_field() {
        let out = render_plain(&unverifiable(None));
        assert!(out.starts_with("warning[W0001]:"));
        assert!(out.contains("type Example.Struct1"));
        assert!(out.contains("field count"));
    }

    #[test]
    fn report_without_span_falls_back_to_plain() {
        let out = render_report(&unverifiable(None), "struct Struct1", false);
        assert_eq!(out, render_plain(&unverifiable(None)));
    }

    #[test]
    fn report_labels_the_field_declaration() {
        let source = "struct Struct1 {\n    required int count;\n}\n";
        // Span of "count" on line 2.
        let start = source.find("count").unwrap() as u32;
        let diag = unverifiable(Some(Span::new(start, start + 5)));
        let out = render_report(&diag, source, false);
        assert!(out.contains("W0001"), "missing code: {}", out);
        assert!(out.contains("Warning"), "missing kind: {}", out);
        assert!(
            out.contains("field 'count' declared here"),
            "missing label: {}",
            out
        );
        assert!(out.contains("Help"), "missing help: {}", out);
    }

    #[test]
    fn report_clamps_out_of_bounds_span() {
        let diag = unverifiable(Some(Span::new(500, 600)));
        // Must not panic; span is clamped to the source.
        let out = render_report(&diag, "short", false);
        assert!(out.contains("W0001"));
    }

    #[test]
    fn json_shape() {
        let diag = unverifiable(Some(Span::new(4, 9)));
        let out = render_json(&diag);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["code"], "W0001");
        assert_eq!(value["severity"], "warning");
        assert_eq!(value["type"], "Example.Struct1");
        assert_eq!(value["field"], "count");
        assert_eq!(value["span"]["start"], 4);
        assert_eq!(value["span"]["end"], 9);
    }

    #[test]
    fn json_null_field_and_span() {
        let diag = Diagnostic::warning(codes::UNVERIFIABLE_FIELD, "A", "msg");
        let value: serde_json::Value = serde_json::from_str(&render_json(&diag)).unwrap();
        assert!(value["field"].is_null());
        assert!(value["span"].is_null());
    }
}
