use crate::dbc::types::attributes::AttributeValue;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Definition of a signal within a CAN message (`SG_`).
///
/// Describes position/bit-length, endianness, sign, scaling (factor/offset),
/// valid range, unit of measure, receivers and multiplexing role, plus the data
/// attached later by `CM_ SG_`, `BA_ "GenSigStartValue"`, `SIG_VALTYPE_` and `VAL_`.
#[derive(Default, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Signal {
    /// Signal name, unique within its message.
    pub name: String,
    /// Start bit in the payload.
    pub start_bit: u16,
    /// Bit length.
    pub bit_length: u16,
    /// Byte order (`@0` Motorola, `@1` Intel).
    pub endian: Endianness,
    /// Signedness (`+` / `-`).
    pub sign: Signedness,
    /// Scaling factor.
    pub factor: f64,
    /// Scaling offset.
    pub offset: f64,
    /// Minimum physical value.
    pub min: f64,
    /// Maximum physical value.
    pub max: f64,
    /// Unit of measure.
    pub unit: String,
    /// Receiver nodes. `Vector__XXX` is never listed.
    pub receivers: Vec<String>,
    /// Multiplexing role.
    pub mux: MuxRole,
    /// Initial value (`BA_ "GenSigStartValue"`).
    pub start_value: StartValue,
    /// Associated comment (`CM_ SG_`).
    pub comment: Option<String>,
    /// Declared representation (`SIG_VALTYPE_`).
    pub value_type: Option<ValueType>,
    /// Value labels as `"<value> <label> <value> <label> ..."`, in declaration order (`VAL_`).
    pub value_description: Option<String>,

    // --- Signal Attribute Entry ---
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Signal {
    /// Numeric start value, if one was assigned.
    pub fn start_value_numeric(&self) -> Option<f64> {
        match self.start_value {
            StartValue::Numeric(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Endianness {
    #[default]
    Motorola, // 0
    Intel, // 1
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Signedness {
    #[default]
    Unsigned, // +
    Signed, // -
}

/// What role (if any) a signal plays in multiplexing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuxRole {
    /// Not multiplexed (always present).
    #[default]
    NotMultiplexed,
    /// This signal is the multiplexer switch (marked as `M` in DBC).
    Multiplexer,
    /// This signal is present when the switch equals the index (marked as `mX`).
    Multiplexed(u32),
}

/// Initial value of a signal.
///
/// Only numeric start values are applied by the parser; `Text` exists for
/// models built by hand or by other tools.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum StartValue {
    #[default]
    Absent,
    Numeric(f64),
    Text(String),
}

/// Representation declared by `SIG_VALTYPE_`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    /// Signed or unsigned integer (code `0`).
    Integer,
    /// IEEE float, 32-bit (code `1`).
    Float32,
    /// IEEE double, 64-bit (code `2`).
    Float64,
}

impl ValueType {
    pub fn from_code(code: u8) -> Option<ValueType> {
        match code {
            0 => Some(ValueType::Integer),
            1 => Some(ValueType::Float32),
            2 => Some(ValueType::Float64),
            _ => None,
        }
    }
}
