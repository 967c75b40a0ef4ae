//! Transient state shared by the semantic actions of a single parse.
//!
//! Leaf rules push their token text onto one of five LIFO stacks, in source order.
//! Every composite rule pops exactly the values its sub-rules pushed, in the order the
//! grammar guarantees. Popping from an empty stack is a [`DbcParseError::StackUnderflow`];
//! values still present when a top-level statement ends are a
//! [`DbcParseError::UnconsumedValues`]. Both mean grammar and actions disagree.

use log::warn;
use std::fmt::Debug;
use std::str::FromStr;

use crate::dbc::types::{
    attributes::{AttrKind, AttrObject},
    errors::DbcParseError,
    signal::{MuxRole, Signal},
};

/// The five value stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stack {
    Identifiers,
    Numbers,
    Phrases,
    Signs,
    EcuTokens,
}

impl Stack {
    fn name(self) -> &'static str {
        match self {
            Stack::Identifiers => "identifier",
            Stack::Numbers => "number",
            Stack::Phrases => "phrase",
            Stack::Signs => "sign",
            Stack::EcuTokens => "receiver",
        }
    }
}

/// Multiplex marker seen after a signal name, waiting for the signal to complete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum PendingMux {
    #[default]
    None,
    Multiplexer,
    Index(u32),
}

/// Object an attribute assignment (`BA_`) points at.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AttrTarget {
    Database,
    Node(String),
    Message(u32),
    Signal(u32, String),
    EnvironmentVariable(String),
    /// The id did not convert; the assignment is dropped.
    Unresolved,
}

/// Attribute value token, before it is typed against a definition.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum RawValue {
    Number(String),
    Text(String),
}

impl RawValue {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            RawValue::Number(s) | RawValue::Text(s) => s,
        }
    }
}

#[derive(Default, Debug)]
pub(crate) struct ParseContext {
    identifiers: Vec<String>,
    numbers: Vec<String>,
    phrases: Vec<String>,
    signs: Vec<String>,
    ecu_tokens: Vec<String>,

    // --- carry state ---
    pub(crate) mux: PendingMux,
    /// Signals of the `BO_` block being assembled.
    pub(crate) signals: Vec<Signal>,
    /// `(number, phrase)` pairs of the current `VAL_` / `VAL_TABLE_`, numbers as written.
    pub(crate) pairs: Vec<(String, String)>,
    /// Members of the current `BA_DEF_ ... ENUM`.
    pub(crate) enum_values: Vec<String>,
    pub(crate) attr_object: Option<AttrObject>,
    pub(crate) attr_kind: Option<AttrKind>,
    pub(crate) attr_target: Option<AttrTarget>,
    pub(crate) attr_value: Option<RawValue>,
}

impl ParseContext {
    fn stack(&self, stack: Stack) -> &Vec<String> {
        match stack {
            Stack::Identifiers => &self.identifiers,
            Stack::Numbers => &self.numbers,
            Stack::Phrases => &self.phrases,
            Stack::Signs => &self.signs,
            Stack::EcuTokens => &self.ecu_tokens,
        }
    }

    fn stack_mut(&mut self, stack: Stack) -> &mut Vec<String> {
        match stack {
            Stack::Identifiers => &mut self.identifiers,
            Stack::Numbers => &mut self.numbers,
            Stack::Phrases => &mut self.phrases,
            Stack::Signs => &mut self.signs,
            Stack::EcuTokens => &mut self.ecu_tokens,
        }
    }

    pub(crate) fn push(&mut self, stack: Stack, token: String) {
        self.stack_mut(stack).push(token);
    }

    pub(crate) fn len(&self, stack: Stack) -> usize {
        self.stack(stack).len()
    }

    /// Pops the most recent value of `stack`.
    pub(crate) fn take(
        &mut self,
        stack: Stack,
        directive: &'static str,
    ) -> Result<String, DbcParseError> {
        self.stack_mut(stack)
            .pop()
            .ok_or(DbcParseError::StackUnderflow {
                stack: stack.name(),
                directive,
            })
    }

    /// Pops a number and converts it; a value that does not fit `T` fails the parse.
    pub(crate) fn take_number<T: FromStr>(
        &mut self,
        directive: &'static str,
    ) -> Result<T, DbcParseError> {
        let token: String = self.take(Stack::Numbers, directive)?;
        token
            .parse::<T>()
            .map_err(|_| DbcParseError::InvalidNumber { token, directive })
    }

    /// Pops a number and converts it; a value that does not fit `T` is logged and yields `None`.
    pub(crate) fn take_number_lenient<T: FromStr>(
        &mut self,
        directive: &'static str,
    ) -> Result<Option<T>, DbcParseError> {
        let token: String = self.take(Stack::Numbers, directive)?;
        match token.parse::<T>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => {
                warn!("Unable to convert '{}' to a number in {}", token, directive);
                Ok(None)
            }
        }
    }

    /// Empties `stack`, returning its values in source order.
    pub(crate) fn drain(&mut self, stack: Stack) -> Vec<String> {
        std::mem::take(self.stack_mut(stack))
    }

    /// Clears the five stacks.
    pub(crate) fn clear_stacks(&mut self) {
        self.identifiers.clear();
        self.numbers.clear();
        self.phrases.clear();
        self.signs.clear();
        self.ecu_tokens.clear();
    }

    /// Returns the role for the signal being completed and clears the marker.
    pub(crate) fn take_mux(&mut self) -> MuxRole {
        match std::mem::take(&mut self.mux) {
            PendingMux::None => MuxRole::NotMultiplexed,
            PendingMux::Multiplexer => MuxRole::Multiplexer,
            PendingMux::Index(idx) => MuxRole::Multiplexed(idx),
        }
    }

    /// Drops every piece of per-message state.
    pub(crate) fn reset_message(&mut self) {
        self.signals.clear();
        self.mux = PendingMux::None;
        self.ecu_tokens.clear();
    }

    /// Checks that the statement just completed consumed everything it produced.
    pub(crate) fn finish_statement(&mut self, directive: &'static str) -> Result<(), DbcParseError> {
        let mut leftovers: Vec<String> = Vec::new();
        for stack in [
            Stack::Identifiers,
            Stack::Numbers,
            Stack::Phrases,
            Stack::Signs,
            Stack::EcuTokens,
        ] {
            if !self.stack(stack).is_empty() {
                leftovers.push(format!("{}s={:?}", stack.name(), self.stack(stack)));
            }
        }
        note(&mut leftovers, "mux", (self.mux != PendingMux::None).then_some(&self.mux));
        note(&mut leftovers, "signals", (!self.signals.is_empty()).then_some(&self.signals.len()));
        note(&mut leftovers, "pairs", (!self.pairs.is_empty()).then_some(&self.pairs));
        note(&mut leftovers, "enum values", (!self.enum_values.is_empty()).then_some(&self.enum_values));
        note(&mut leftovers, "attribute object", self.attr_object.as_ref());
        note(&mut leftovers, "attribute kind", self.attr_kind.as_ref());
        note(&mut leftovers, "attribute target", self.attr_target.as_ref());
        note(&mut leftovers, "attribute value", self.attr_value.as_ref());

        if leftovers.is_empty() {
            return Ok(());
        }

        *self = ParseContext::default();
        Err(DbcParseError::UnconsumedValues {
            directive,
            details: leftovers.join(", "),
        })
    }
}

fn note<T: Debug>(leftovers: &mut Vec<String>, what: &str, value: Option<&T>) {
    if let Some(v) = value {
        leftovers.push(format!("{}={:?}", what, v));
    }
}
