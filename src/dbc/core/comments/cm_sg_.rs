use log::debug;

use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError};

const DIRECTIVE: &str = "CM_ SG_";

/// Example: `CM_ SG_ 100 DRIVER_HEARTBEAT_cmd "Heartbeat command";`
/// The phrase may span several lines.
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    let comment: String = ctx.take(Stack::Phrases, DIRECTIVE)?;
    let signal_name: String = ctx.take(Stack::Identifiers, DIRECTIVE)?;
    let Some(id) = ctx.take_number_lenient::<u32>(DIRECTIVE)? else {
        return Ok(());
    };

    match db.signal_mut(id, &signal_name) {
        Some(sig) => sig.comment = Some(comment),
        None => debug!("{}: signal {}/{} not found", DIRECTIVE, id, signal_name),
    }
    Ok(())
}
