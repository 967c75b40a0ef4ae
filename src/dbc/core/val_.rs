use log::debug;

use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::core::val_table_;
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError};

const DIRECTIVE: &str = "VAL_";

/// Attach value labels to a signal as `"<value> <label> <value> <label> ..."`.
/// Example: `VAL_ 100 DRIVER_HEARTBEAT_cmd 2 "REBOOT" 1 "SYNC" 0 "NOOP" ;`
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    let signal_name: String = ctx.take(Stack::Identifiers, DIRECTIVE)?;
    let pairs: Vec<(String, String)> = std::mem::take(&mut ctx.pairs);
    let Some(id) = ctx.take_number_lenient::<u32>(DIRECTIVE)? else {
        return Ok(());
    };

    if val_table_::integer_codes(&pairs, DIRECTIVE).is_none() {
        return Ok(());
    }

    let Some(sig) = db.signal_mut(id, &signal_name) else {
        debug!("{}: signal {}/{} not found", DIRECTIVE, id, signal_name);
        return Ok(());
    };

    let description: String = pairs
        .iter()
        .map(|(value, label)| format!("{} {}", value, label))
        .collect::<Vec<String>>()
        .join(" ");
    sig.value_description = Some(description);
    Ok(())
}
