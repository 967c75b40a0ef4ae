use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Range and default of an attribute the database tracks explicitly
/// (`GenMsgCycleTime`, `GenSigStartValue`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeBounds<T> {
    /// Lower bound from `BA_DEF_`.
    pub min: Option<T>,
    /// Upper bound from `BA_DEF_`.
    pub max: Option<T>,
    /// Default from `BA_DEF_DEF_`.
    pub default: Option<T>,
}

impl<T> Default for AttributeBounds<T> {
    fn default() -> Self {
        AttributeBounds {
            min: None,
            max: None,
            default: None,
        }
    }
}

/// Attribute declared by a `BA_DEF_` line, with the default from `BA_DEF_DEF_`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Attribute name.
    pub name: String,
    /// Kind of object the attribute applies to.
    pub object: AttrObject,
    /// Value kind and range/members.
    pub kind: AttrKind,
    /// Default value (`BA_DEF_DEF_`).
    pub default: Option<AttributeValue>,
}

/// Attribute value kinds as declared by `BA_DEF_` lines in DBC.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttrKind {
    Int { min: Option<i64>, max: Option<i64> },
    Hex { min: Option<u64>, max: Option<u64> },
    Float { min: Option<f64>, max: Option<f64> },
    String,
    Enum(Vec<String>),
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttrKind::Int { .. } => "Int",
            AttrKind::Hex { .. } => "Hex",
            AttrKind::Float { .. } => "Float",
            AttrKind::String => "String",
            AttrKind::Enum(_) => "Enum",
        })
    }
}

/// Concrete attribute value stored on database/message/signal entities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Str(String),
    Int(i64),
    Hex(u64), // displayed as 0x..
    Float(f64),
    Enum(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Str(s) => write!(f, "{}", s),
            AttributeValue::Int(i) => write!(f, "{}", i),
            AttributeValue::Hex(h) => write!(f, "0x{:X}", h),
            AttributeValue::Float(x) => write!(f, "{}", x),
            AttributeValue::Enum(s) => write!(f, "{}", s),
        }
    }
}

/// The type of Object of the Attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrObject {
    #[default]
    Database,
    Node,
    Message,
    Signal,
    EnvironmentVariable,
}

impl fmt::Display for AttrObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttrObject::Database => "Database",
            AttrObject::Node => "Node",
            AttrObject::Message => "Message",
            AttrObject::Signal => "Signal",
            AttrObject::EnvironmentVariable => "EnvironmentVariable",
        })
    }
}
