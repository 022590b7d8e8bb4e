//! JSON formatter: the tree snapshot, pretty-printed with serde_json

use super::registry::{FormatError, Formatter};
use crate::tree::{snapshot_tree, RenderedTree};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &RenderedTree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&snapshot_tree(tree))
            .map_err(|e| FormatError::Serialize(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tree snapshot as JSON"
    }
}
