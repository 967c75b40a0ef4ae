use log::{debug, warn};

use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError, signal::ValueType};

const DIRECTIVE: &str = "SIG_VALTYPE_";

/// Example: `SIG_VALTYPE_ 123 FUEL_STATUS_level : 1;`
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    let code: Option<u8> = ctx.take_number_lenient(DIRECTIVE)?;
    let signal_name: String = ctx.take(Stack::Identifiers, DIRECTIVE)?;
    let id: Option<u32> = ctx.take_number_lenient(DIRECTIVE)?;
    let (Some(code), Some(id)) = (code, id) else {
        return Ok(());
    };

    let Some(value_type) = ValueType::from_code(code) else {
        warn!("{}: unknown value type {} for {}/{}", DIRECTIVE, code, id, signal_name);
        return Ok(());
    };

    match db.signal_mut(id, &signal_name) {
        Some(sig) => sig.value_type = Some(value_type),
        None => debug!("{}: signal {}/{} not found", DIRECTIVE, id, signal_name),
    }
    Ok(())
}
