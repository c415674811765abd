//! Loading descriptor JSON produced by the parsing collaborator.
//!
//! A descriptor file is a JSON array of type descriptors. Several files may
//! be merged into one [`DescriptorSet`]; a type appearing in more than one
//! file is the same configuration error as a type appearing twice in one.

use std::path::Path;

use crate::set::{DescriptorError, DescriptorSet};
use crate::TypeDescriptor;

/// Parse a descriptor JSON document (a top-level array).
pub fn parse_descriptors(content: &str) -> Result<Vec<TypeDescriptor>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Read and parse one descriptor file.
pub fn load_file(path: &Path) -> Result<Vec<TypeDescriptor>, DescriptorError> {
    let content = std::fs::read_to_string(path).map_err(|e| DescriptorError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_descriptors(&content).map_err(|e| DescriptorError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load several descriptor files and merge them into one set.
pub fn load_set<P: AsRef<Path>>(paths: &[P]) -> Result<DescriptorSet, DescriptorError> {
    let mut set = DescriptorSet::new();
    for path in paths {
        for ty in load_file(path.as_ref())? {
            set.insert(ty)?;
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_array_of_descriptors() {
        let json = r#"[
            { "name": "Base", "namespace": "Ex", "kind": "class", "opts_in": true },
            { "name": "Point", "namespace": "Ex", "kind": "value" }
        ]"#;
        let types = parse_descriptors(json).unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].qualified_name(), "Ex.Base");
        assert!(types[0].opts_in);
        assert!(!types[1].opts_in);
    }

    #[test]
    fn parse_rejects_non_array() {
        let result = parse_descriptors(r#"{ "name": "Base", "kind": "class" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let result = parse_descriptors(r#"[{ "name": "Base", "kind": "interface" }]"#);
        assert!(result.is_err());
    }
}
