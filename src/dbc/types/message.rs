use crate::dbc::types::{
    attributes::AttributeValue,
    signal::{MuxRole, Signal},
};
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

const CAN_SFF_MASK: u32 = 0x7FF; // 11 bit
const CAN_EFF_MASK: u32 = 0x1FFF_FFFF; // 29 bit
const CAN_EFF_FLAG: u32 = 0x8000_0000; // "extended" flag, SocketCAN style

/// CAN message defined in the database (`BO_`).
///
/// The numeric `id` is the identity of the message: [`CanDatabase`](crate::dbc::types::database::CanDatabase)
/// stores messages keyed by it. Every other field is payload, filled by the `BO_` line itself,
/// by the `SG_` lines that follow it, and by later directives (`CM_ BO_`, `BA_ ... BO_`, `BO_TX_BU_`).
#[derive(Default, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Numeric CAN id as written in the DBC (extended ids carry bit 31).
    pub id: u32,
    /// Message name.
    pub name: String,
    /// Payload length in bytes.
    pub dlc: u16,
    /// Transmitting nodes. Empty when the sender is `Vector__XXX`.
    pub senders: Vec<String>,
    /// Cycle time in milliseconds (`BA_ "GenMsgCycleTime" BO_ ...`).
    pub cycle_time: Option<u32>,
    /// Associated comment (`CM_ BO_`).
    pub comment: Option<String>,
    /// Signals in declaration order.
    pub signals: Vec<Signal>,

    // --- Message Attribute Entry ---
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Message {
    /// True for 29-bit identifiers: flagged with bit 31 or larger than 11 bit.
    pub fn is_extended(&self) -> bool {
        (self.id & CAN_EFF_FLAG) != 0 || (self.id & CAN_EFF_MASK) > CAN_SFF_MASK
    }

    /// Identifier without the extended flag.
    pub fn raw_id(&self) -> u32 {
        if self.is_extended() {
            self.id & CAN_EFF_MASK
        } else {
            self.id & CAN_SFF_MASK
        }
    }

    /// Hexadecimal identifier, uppercase, without the extended flag (e.g. `"0x64"`).
    pub fn id_hex(&self) -> String {
        format!("0x{:X}", self.raw_id())
    }

    /// Returns a signal of this message by name.
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|sig| sig.name == name)
    }

    /// Returns a signal of this message by name for in-place updates.
    pub fn signal_mut(&mut self, name: &str) -> Option<&mut Signal> {
        self.signals.iter_mut().find(|sig| sig.name == name)
    }

    /// The multiplexer switch of this message, if any.
    pub fn multiplexer(&self) -> Option<&Signal> {
        self.signals
            .iter()
            .find(|sig| sig.mux == MuxRole::Multiplexer)
    }

    /// Signals gated by the multiplexer value `index`.
    pub fn multiplexed_by(&self, index: u32) -> impl Iterator<Item = &Signal> + '_ {
        self.signals
            .iter()
            .filter(move |sig| sig.mux == MuxRole::Multiplexed(index))
    }
}
