use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError};

pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    // Expected format:
    // CM_ "Comment regarding the network";
    db.comment = Some(ctx.take(Stack::Phrases, "CM_")?);
    Ok(())
}
