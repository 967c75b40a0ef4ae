use log::warn;

// BS_: <baudrate>:<BTR1>,<BTR2>
// Bit timing is obsolete and not stored.
pub(crate) fn decode(text: &str) {
    if text.trim_start_matches("BS_").trim().trim_start_matches(':').trim().is_empty() {
        return;
    }
    warn!("BS_ bit timing is not implemented, ignoring '{}'", text.trim());
}
