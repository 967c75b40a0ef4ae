use serde_derive::{Deserialize, Serialize};

/// Diagnostics switches for [`DbcParser`](crate::dbc::DbcParser).
///
/// Neither option changes the parse result; both only add log output.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Emit a `trace!` line for every grammar rule visited by the walker.
    pub trace_rules: bool,
    /// Log the normalized input with line numbers (`debug!`) before matching.
    pub dump_input: bool,
}

impl ParserConfig {
    pub fn with_trace_rules(mut self, enabled: bool) -> Self {
        self.trace_rules = enabled;
        self
    }

    pub fn with_dump_input(mut self, enabled: bool) -> Self {
        self.dump_input = enabled;
        self
    }
}
