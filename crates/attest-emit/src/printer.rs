//! Width-aware printer for the document IR.
//!
//! At each `Group` boundary the printer measures the flat width of the
//! contents against the remaining line width and picks flat or broken
//! layout. Indentation is emitted lazily, just before the next text, so
//! blank lines never carry trailing whitespace.

use crate::doc::Doc;

/// Configuration for printed output.
#[derive(Debug, Clone)]
pub struct PrintConfig {
    /// Number of spaces per indentation level. Default: 4.
    pub indent_size: usize,
    /// Maximum line width before groups break. Default: 100.
    pub max_width: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_size: 4,
            max_width: 100,
        }
    }
}

/// Render a document as a string respecting the given config.
pub fn print(doc: &Doc, config: &PrintConfig) -> String {
    let mut printer = Printer {
        out: String::new(),
        col: 0,
        pending_indent: None,
        config,
    };
    printer.emit(doc, 0, false);

    // Canonical output ends with exactly one newline.
    if !printer.out.is_empty() && !printer.out.ends_with('\n') {
        printer.out.push('\n');
    }
    printer.out
}

struct Printer<'a> {
    out: String,
    /// The column the next text will start at (pending indent included).
    col: usize,
    /// Indent to emit before the next text, if a line break just happened.
    pending_indent: Option<usize>,
    config: &'a PrintConfig,
}

impl Printer<'_> {
    fn emit(&mut self, doc: &Doc, indent: usize, flat: bool) {
        match doc {
            Doc::Text(s) => {
                self.flush_indent();
                self.out.push_str(s);
                self.col += s.len();
            }

            Doc::Space => {
                if flat {
                    self.flush_indent();
                    self.out.push(' ');
                    self.col += 1;
                } else {
                    self.newline(indent);
                }
            }

            Doc::Softline => {
                if !flat {
                    self.newline(indent);
                }
            }

            Doc::Hardline => self.newline(indent),

            Doc::Indent(child) => {
                self.emit(child, indent + self.config.indent_size, flat);
            }

            Doc::Group(child) => {
                let width = flat_width(child);
                let fits = width != usize::MAX && self.col + width <= self.config.max_width;
                self.emit(child, indent, flat || fits);
            }

            Doc::Concat(parts) => {
                for part in parts {
                    self.emit(part, indent, flat);
                }
            }
        }
    }

    fn newline(&mut self, indent: usize) {
        self.out.push('\n');
        self.pending_indent = Some(indent);
        self.col = indent;
    }

    fn flush_indent(&mut self) {
        if let Some(n) = self.pending_indent.take() {
            for _ in 0..n {
                self.out.push(' ');
            }
        }
    }
}

/// Width of a document when rendered flat on one line.
///
/// `usize::MAX` marks content containing a `Hardline`, which can never fit
/// flat.
fn flat_width(doc: &Doc) -> usize {
    match doc {
        Doc::Text(s) => s.len(),
        Doc::Space => 1,
        Doc::Softline => 0,
        Doc::Hardline => usize::MAX,
        Doc::Indent(child) | Doc::Group(child) => flat_width(child),
        Doc::Concat(parts) => {
            let mut total: usize = 0;
            for part in parts {
                let w = flat_width(part);
                if w == usize::MAX {
                    return usize::MAX;
                }
                total = total.saturating_add(w);
            }
            total
        }
    }
}
