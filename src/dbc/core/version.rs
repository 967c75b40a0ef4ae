use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError};

pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    // Example: VERSION "1.0"
    db.version = ctx.take(Stack::Phrases, "VERSION")?;
    Ok(())
}
