use log::debug;

use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError};

const DIRECTIVE: &str = "CM_ BO_";

/// Example: `CM_ BO_ 100 "Sync message used to synchronize the controllers";`
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    let comment: String = ctx.take(Stack::Phrases, DIRECTIVE)?;
    let Some(id) = ctx.take_number_lenient::<u32>(DIRECTIVE)? else {
        return Ok(());
    };

    match db.message_mut(id) {
        Some(msg) => msg.comment = Some(comment),
        None => debug!("{}: message {} not found", DIRECTIVE, id),
    }
    Ok(())
}
