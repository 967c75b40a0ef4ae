use log::{debug, warn};

use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::core::NO_NODE;
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError, message::Message};

const DIRECTIVE: &str = "BO_";

/// Build a message from a `BO_` block once all of its `SG_` lines are complete.
/// Example: `BO_ 100 DRIVER_HEARTBEAT: 1 DRIVER`
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    if ctx.len(Stack::Numbers) < 2 || ctx.len(Stack::Identifiers) < 2 {
        debug!("Skipping incomplete {} definition", DIRECTIVE);
        ctx.clear_stacks();
        ctx.reset_message();
        return Ok(());
    }

    let dlc: u16 = ctx.take_number(DIRECTIVE)?;
    let id: u32 = ctx.take_number(DIRECTIVE)?;
    let sender: String = ctx.take(Stack::Identifiers, DIRECTIVE)?;
    let name: String = ctx.take(Stack::Identifiers, DIRECTIVE)?;

    let senders: Vec<String> = if sender == NO_NODE {
        Vec::new()
    } else {
        vec![sender]
    };

    let signals = std::mem::take(&mut ctx.signals);
    ctx.reset_message();

    debug!(
        "Message {} '{}' dlc={} with {} signals",
        id,
        name,
        dlc,
        signals.len()
    );

    let msg: Message = Message {
        id,
        name,
        dlc,
        senders,
        signals,
        ..Default::default()
    };

    if let Some(previous) = db.messages.insert(id, msg) {
        warn!(
            "Message id {} defined twice, '{}' replaced by the later definition",
            id, previous.name
        );
    }
    Ok(())
}
