//! Emission of generated verification units as source text.
//!
//! The behavioral contract lives in the structured unit (`attest-codegen`);
//! this crate is the default emission collaborator. It lowers a unit to a
//! layout-intent document IR and prints it as a partial-type fragment to be
//! merged textually into the type's definition.
//!
//! - [`doc`]: the document IR (text, line breaks, indentation, groups)
//! - [`printer`]: width-aware printing of a document
//! - [`render`]: lowering a generated unit to a document

pub mod doc;
pub mod printer;
pub mod render;

pub use doc::Doc;
pub use printer::{print, PrintConfig};
pub use render::{render_unit, unit_doc, unit_file_name};
