use log::{debug, warn};

use crate::dbc::context::{ParseContext, RawValue, Stack};
use crate::dbc::core::attributes::{GEN_MSG_CYCLE_TIME, GEN_SIG_START_VALUE, value};
use crate::dbc::types::{database::CanDatabase, errors::DbcParseError};

const DIRECTIVE: &str = "BA_DEF_DEF_";

pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    // Expected formats:
    // BA_DEF_DEF_  "GenMsgCycleTime" 0;
    // BA_DEF_DEF_  "DBName" "";
    // BA_DEF_DEF_  "IsCan" "Yes";
    let raw: Option<RawValue> = ctx.attr_value.take();
    let name: String = ctx.take(Stack::Phrases, DIRECTIVE)?;
    let Some(raw) = raw else {
        warn!("{} \"{}\": missing value", DIRECTIVE, name);
        return Ok(());
    };

    // Tracked defaults do not depend on BA_DEF_ having been seen
    match name.as_str() {
        GEN_MSG_CYCLE_TIME => match value::whole_u32(raw.as_str()) {
            Some(v) => db.gen_msg_cycle_time.default = Some(v),
            None => warn!("{} \"{}\": invalid default '{}'", DIRECTIVE, name, raw.as_str()),
        },
        GEN_SIG_START_VALUE => match raw.as_str().trim().parse::<f64>() {
            Ok(v) => db.gen_sig_start_value.default = Some(v),
            Err(_) => warn!("{} \"{}\": invalid default '{}'", DIRECTIVE, name, raw.as_str()),
        },
        _ => {}
    }

    match db.attribute_definitions.get_mut(&name) {
        Some(def) => {
            def.default = value::typed(&name, Some(&def.kind), &raw);
        }
        None => debug!("{} \"{}\": no definition, default not stored", DIRECTIVE, name),
    }
    Ok(())
}
