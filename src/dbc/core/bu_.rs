use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::types::database::CanDatabase;

/// Register the node names of a `BU_` line, in declaration order.
/// Example: `BU_: ECU1 ECU2 ECU3`
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) {
    for name in ctx.drain(Stack::Identifiers) {
        if !db.nodes.contains(&name) {
            db.nodes.push(name);
        }
    }
}
