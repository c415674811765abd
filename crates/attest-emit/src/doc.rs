//! Layout-intent document IR for emitted source text.
//!
//! The renderer builds a document describing formatting intent (groups,
//! indentation, line breaks) and the printer decides at each `Group`
//! boundary whether to lay the content out flat or broken.

/// A document IR node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doc {
    /// Literal text to emit verbatim.
    Text(String),
    /// A space in flat mode; a newline + indent in broken mode.
    Space,
    /// Nothing in flat mode; a newline + indent in broken mode.
    Softline,
    /// Always a newline + indent, regardless of mode.
    Hardline,
    /// Increase indentation for the child by the configured indent size.
    Indent(Box<Doc>),
    /// Render the child flat if it fits the remaining line width,
    /// broken otherwise.
    Group(Box<Doc>),
    /// A sequence of nodes rendered in order.
    Concat(Vec<Doc>),
}

// ── Helper constructors ─────────────────────────────────────────────────

/// A `Text` node from a string-like value.
pub fn text(s: impl Into<String>) -> Doc {
    Doc::Text(s.into())
}

/// A `Space` node (space in flat mode, newline in broken mode).
pub fn space() -> Doc {
    Doc::Space
}

/// A `Softline` node (nothing in flat mode, newline in broken mode).
pub fn softline() -> Doc {
    Doc::Softline
}

/// A `Hardline` node (always a newline).
pub fn hardline() -> Doc {
    Doc::Hardline
}

/// An `Indent` wrapper that increases indentation for its child.
pub fn indent(doc: Doc) -> Doc {
    Doc::Indent(Box::new(doc))
}

/// A `Group` that tries flat layout first, breaking if it exceeds width.
pub fn group(doc: Doc) -> Doc {
    Doc::Group(Box::new(doc))
}

/// A `Concat` from a vector of nodes.
pub fn concat(parts: Vec<Doc>) -> Doc {
    Doc::Concat(parts)
}

/// Interleave a separator between items.
pub fn join(separator: Doc, items: Vec<Doc>) -> Doc {
    let mut parts = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            parts.push(separator.clone());
        }
        parts.push(item);
    }
    Doc::Concat(parts)
}
