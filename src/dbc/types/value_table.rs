use serde_derive::{Deserialize, Serialize};

/// Named enumeration declared with `VAL_TABLE_`.
#[derive(Default, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ValueTable {
    /// Table name; may be empty.
    pub identifier: String,
    /// Entries in declaration order.
    pub entries: Vec<ValueTableEntry>,
}

/// One `<value> "<label>"` pair. Values cover both signed and unsigned 64-bit codes.
#[derive(Default, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ValueTableEntry {
    pub value: i128,
    pub label: String,
}

impl ValueTable {
    /// Label for a raw value, if listed.
    pub fn label(&self, value: i128) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.label.as_str())
    }
}
