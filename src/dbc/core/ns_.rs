use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::types::database::CanDatabase;

/// Collect the `NS_ :` symbol list, one indented symbol per line.
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) {
    db.symbols.extend(ctx.drain(Stack::Identifiers));
}
