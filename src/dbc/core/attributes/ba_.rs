use log::{debug, warn};
use std::collections::BTreeMap;

use crate::dbc::context::{AttrTarget, ParseContext, RawValue, Stack};
use crate::dbc::core::attributes::{GEN_MSG_CYCLE_TIME, GEN_SIG_START_VALUE, value};
use crate::dbc::types::{
    attributes::AttributeValue, database::CanDatabase, errors::DbcParseError, signal::StartValue,
};

const DIRECTIVE: &str = "BA_";

/// Assign an attribute value.
///
/// Expected formats:
/// - `BA_ "DBName" "TestCAN";`
/// - `BA_ "NmStationAddress" BU_ DRIVER 1;`
/// - `BA_ "GenMsgCycleTime" BO_ 100 1000;`
/// - `BA_ "GenSigStartValue" SG_ 100 DRIVER_HEARTBEAT_cmd 1;`
/// - `BA_ "EnvScale" EV_ EnvGear 2;`
///
/// A target that does not exist is a no-op.
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    let raw: Option<RawValue> = ctx.attr_value.take();
    let target: AttrTarget = ctx.attr_target.take().unwrap_or(AttrTarget::Database);
    let name: String = ctx.take(Stack::Phrases, DIRECTIVE)?;
    let Some(raw) = raw else {
        warn!("{} \"{}\": missing value", DIRECTIVE, name);
        return Ok(());
    };

    match target {
        AttrTarget::Message(id) if name == GEN_MSG_CYCLE_TIME => {
            let Some(cycle_time) = value::whole_u32(raw.as_str()) else {
                warn!("{} \"{}\": invalid cycle time '{}'", DIRECTIVE, name, raw.as_str());
                return Ok(());
            };
            match db.message_mut(id) {
                Some(msg) => msg.cycle_time = Some(cycle_time),
                None => debug!("{}: message {} not found", DIRECTIVE, id),
            }
        }
        AttrTarget::Signal(id, signal_name) if name == GEN_SIG_START_VALUE => {
            let RawValue::Number(token) = &raw else {
                warn!(
                    "{} \"{}\": textual start value for {}/{} is not supported",
                    DIRECTIVE, name, id, signal_name
                );
                return Ok(());
            };
            let Ok(start) = token.parse::<f64>() else {
                warn!("{} \"{}\": invalid start value '{}'", DIRECTIVE, name, token);
                return Ok(());
            };
            match db.signal_mut(id, &signal_name) {
                Some(sig) => sig.start_value = StartValue::Numeric(start),
                None => debug!("{}: signal {}/{} not found", DIRECTIVE, id, signal_name),
            }
        }
        AttrTarget::Database => {
            if let Some(v) = typed_value(db, &name, &raw) {
                db.attributes.insert(name, v);
            }
        }
        AttrTarget::Message(id) => {
            let v: Option<AttributeValue> = typed_value(db, &name, &raw);
            match db.message_mut(id) {
                Some(msg) => store(&mut msg.attributes, name, v),
                None => debug!("{}: message {} not found", DIRECTIVE, id),
            }
        }
        AttrTarget::Signal(id, signal_name) => {
            let v: Option<AttributeValue> = typed_value(db, &name, &raw);
            match db.signal_mut(id, &signal_name) {
                Some(sig) => store(&mut sig.attributes, name, v),
                None => debug!("{}: signal {}/{} not found", DIRECTIVE, id, signal_name),
            }
        }
        AttrTarget::Node(node) => {
            debug!("{} \"{}\": node attribute for '{}' not stored", DIRECTIVE, name, node);
        }
        AttrTarget::EnvironmentVariable(env) => {
            debug!("{} \"{}\": environment attribute for '{}' not stored", DIRECTIVE, name, env);
        }
        AttrTarget::Unresolved => {
            debug!("{} \"{}\": unresolved target", DIRECTIVE, name);
        }
    }
    Ok(())
}

fn typed_value(db: &CanDatabase, name: &str, raw: &RawValue) -> Option<AttributeValue> {
    let kind = db.attribute_definitions.get(name).map(|def| &def.kind);
    value::typed(name, kind, raw)
}

fn store(map: &mut BTreeMap<String, AttributeValue>, name: String, v: Option<AttributeValue>) {
    if let Some(v) = v {
        map.insert(name, v);
    }
}

// --- targets ---

pub(crate) fn decode_target_node(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let node: String = ctx.take(Stack::Identifiers, DIRECTIVE)?;
    ctx.attr_target = Some(AttrTarget::Node(node));
    Ok(())
}

pub(crate) fn decode_target_message(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let target: AttrTarget = match ctx.take_number_lenient::<u32>(DIRECTIVE)? {
        Some(id) => AttrTarget::Message(id),
        None => AttrTarget::Unresolved,
    };
    ctx.attr_target = Some(target);
    Ok(())
}

pub(crate) fn decode_target_signal(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let signal_name: String = ctx.take(Stack::Identifiers, DIRECTIVE)?;
    let target: AttrTarget = match ctx.take_number_lenient::<u32>(DIRECTIVE)? {
        Some(id) => AttrTarget::Signal(id, signal_name),
        None => AttrTarget::Unresolved,
    };
    ctx.attr_target = Some(target);
    Ok(())
}

pub(crate) fn decode_target_env(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let env: String = ctx.take(Stack::Identifiers, DIRECTIVE)?;
    ctx.attr_target = Some(AttrTarget::EnvironmentVariable(env));
    Ok(())
}
