//! CanDatabase model.
//!
//! This module defines the in-memory **CAN database** produced by the DBC parser.
//! Messages are stored by identity: the map key is the numeric CAN id and the value
//! is the message payload (name, dlc, senders, comment, cycle time, signals).
//! Directives that patch a message after its definition (`CM_`, `BA_`, `VAL_`, ...)
//! therefore update fields in place and never touch the key.
//!
//! **Lookups**: `message(id)`, `message_by_name(name)`, `signal(id, name)`, `value_table(name)`.
//! Names are matched exactly, as written in the `.dbc` file.
//!

use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dbc::types::{
    attributes::{AttributeBounds, AttributeDefinition, AttributeValue},
    message::Message,
    signal::Signal,
    value_table::ValueTable,
};

/// In-memory representation of a CAN database (DBC).
///
/// Holds the global metadata (version, nodes, `NS_` symbols), the messages keyed by id,
/// the named value tables and the attribute bookkeeping gathered from `BA_DEF_`,
/// `BA_DEF_DEF_` and `BA_` directives.
#[derive(Default, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CanDatabase {
    // --- General information ---
    /// Database version string (`VERSION "..."`).
    pub version: String,
    /// Network comment (`CM_ "..."`).
    pub comment: Option<String>,
    /// Nodes/ECUs in declaration order (`BU_:`).
    pub nodes: Vec<String>,
    /// New-symbol list in declaration order (`NS_ :`).
    pub symbols: Vec<String>,

    // --- Main storage ---
    /// Messages by CAN id (identity → payload).
    pub messages: BTreeMap<u32, Message>,
    /// Value tables (`VAL_TABLE_`) in declaration order.
    pub value_tables: Vec<ValueTable>,

    // --- Well-known vendor attributes ---
    /// Range and default of `GenMsgCycleTime` (milliseconds).
    pub gen_msg_cycle_time: AttributeBounds<u32>,
    /// Range and default of `GenSigStartValue`.
    pub gen_sig_start_value: AttributeBounds<f64>,

    // --- Generic attributes ---
    /// Every attribute declared with `BA_DEF_`, by name.
    pub attribute_definitions: BTreeMap<String, AttributeDefinition>,
    /// Database-level attribute values (`BA_ "Name" <value>;`).
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl CanDatabase {
    // --------- Messages --------

    /// Returns a `&Message` given the numeric CAN id.
    pub fn message(&self, id: u32) -> Option<&Message> {
        self.messages.get(&id)
    }

    /// Returns a `&mut Message` given the numeric CAN id.
    pub fn message_mut(&mut self, id: u32) -> Option<&mut Message> {
        self.messages.get_mut(&id)
    }

    /// Returns the first message with the given name.
    pub fn message_by_name(&self, name: &str) -> Option<&Message> {
        self.messages.values().find(|msg| msg.name == name)
    }

    /// Iterates the messages in ascending id order.
    pub fn iter_messages(&self) -> impl Iterator<Item = &Message> + '_ {
        self.messages.values()
    }

    // --------- Signals --------

    /// Returns the signal `name` of message `id`.
    pub fn signal(&self, id: u32, name: &str) -> Option<&Signal> {
        self.message(id)?.signal(name)
    }

    /// Returns the signal `name` of message `id` for in-place updates.
    pub fn signal_mut(&mut self, id: u32, name: &str) -> Option<&mut Signal> {
        self.message_mut(id)?.signal_mut(name)
    }

    /// Total number of signals across all messages.
    pub fn signal_count(&self) -> usize {
        self.messages.values().map(|msg| msg.signals.len()).sum()
    }

    // --------- Value tables --------

    /// Returns the value table declared with the given identifier.
    pub fn value_table(&self, identifier: &str) -> Option<&ValueTable> {
        self.value_tables
            .iter()
            .find(|table| table.identifier == identifier)
    }
}
