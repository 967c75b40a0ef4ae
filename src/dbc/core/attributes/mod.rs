pub(crate) mod ba_;
pub(crate) mod ba_def_;
pub(crate) mod ba_def_def_;
pub(crate) mod sig_valtype_;
pub(crate) mod value;

/// Cycle time of a message in milliseconds.
pub(crate) const GEN_MSG_CYCLE_TIME: &str = "GenMsgCycleTime";
/// Initial raw value of a signal.
pub(crate) const GEN_SIG_START_VALUE: &str = "GenSigStartValue";
