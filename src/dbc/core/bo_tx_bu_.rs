use log::debug;

use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::core::NO_NODE;
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError};

const DIRECTIVE: &str = "BO_TX_BU_";

/// Parse `BO_TX_BU_` lines assigning additional transmitters to a message.
/// Example: `BO_TX_BU_ 500 : IO,DRIVER;`
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    let nodes: Vec<String> = ctx.drain(Stack::EcuTokens);
    let Some(id) = ctx.take_number_lenient::<u32>(DIRECTIVE)? else {
        return Ok(());
    };

    let Some(msg) = db.message_mut(id) else {
        debug!("{}: message {} not found", DIRECTIVE, id);
        return Ok(());
    };

    for name in nodes {
        if name != NO_NODE && !msg.senders.contains(&name) {
            msg.senders.push(name);
        }
    }
    Ok(())
}
