//! # candb
//!
//! Grammar-driven parser for **CAN databases** (`.dbc`).
//!
//! ## Highlights
//! - **Single pass**: the whole file is matched against a PEG grammar, then a post-order walk
//!   builds messages and signals and patches them with later `CM_`, `BA_`, `VAL_` and
//!   `SIG_VALTYPE_` directives.
//! - **Identity-keyed model**: [`CanDatabase`] stores messages by CAN id; patches update the
//!   payload in place.
//! - **All or nothing**: a parse returns a complete database or a [`DbcParseError`].
//! - **Windows-1252 aware** file loading (feature `file`, on by default).
//!
//! The library logs through the [`log`] facade and never installs a logger.

pub mod dbc;

// Top-level re-exports (appear under Crate Items → Structs)
#[doc(inline)]
pub use crate::dbc::types::{
    attributes::{AttrKind, AttrObject, AttributeBounds, AttributeDefinition, AttributeValue},
    database::CanDatabase,
    errors::DbcParseError,
    message::Message,
    signal::{Endianness, MuxRole, Signal, Signedness, StartValue, ValueType},
    value_table::{ValueTable, ValueTableEntry},
};
#[doc(inline)]
pub use crate::dbc::{DbcParser, ParserConfig};
