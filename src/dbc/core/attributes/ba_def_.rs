use log::{debug, warn};

use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::core::attributes::{GEN_MSG_CYCLE_TIME, GEN_SIG_START_VALUE};
use crate::dbc::types::{
    attributes::{AttrKind, AttrObject, AttributeDefinition},
    database::CanDatabase,
    errors::DbcParseError,
};

const DIRECTIVE: &str = "BA_DEF_";

/// Register an attribute definition.
///
/// Expected formats:
/// - `BA_DEF_  "DBName" STRING;`
/// - `BA_DEF_ BO_ "GenMsgCycleTime" INT 0 65535;`
/// - `BA_DEF_ BU_ "NmhBaseAddress" HEX 0 536870911;`
/// - `BA_DEF_ SG_ "GenSigStartValue" FLOAT 0 100;`
/// - `BA_DEF_ BO_ "VFrameFormat" ENUM "StandardCAN","ExtendedCAN";`
///
/// `GenMsgCycleTime` (on `BO_`) and `GenSigStartValue` (on `SG_`) also update the
/// bounds the database tracks for them.
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    let name: String = ctx.take(Stack::Phrases, DIRECTIVE)?;
    let object: AttrObject = ctx.attr_object.take().unwrap_or_default();
    let Some(kind) = ctx.attr_kind.take() else {
        warn!("{} \"{}\": missing value type", DIRECTIVE, name);
        return Ok(());
    };

    match (name.as_str(), object) {
        (GEN_MSG_CYCLE_TIME, AttrObject::Message) => match &kind {
            AttrKind::Int { min, max } => {
                db.gen_msg_cycle_time.min = cycle_time_bound(&name, *min);
                db.gen_msg_cycle_time.max = cycle_time_bound(&name, *max);
            }
            other => warn!("{} \"{}\": expected INT, found {}", DIRECTIVE, name, other),
        },
        (GEN_SIG_START_VALUE, AttrObject::Signal) => {
            let (min, max) = float_bounds(&kind);
            db.gen_sig_start_value.min = min;
            db.gen_sig_start_value.max = max;
        }
        _ => {}
    }

    debug!("Attribute definition \"{}\" on {}: {}", name, object, kind);

    // a default that arrived first stays attached
    let default = db
        .attribute_definitions
        .get(&name)
        .and_then(|def| def.default.clone());
    db.attribute_definitions.insert(
        name.clone(),
        AttributeDefinition {
            name,
            object,
            kind,
            default,
        },
    );
    Ok(())
}

fn cycle_time_bound(name: &str, value: Option<i64>) -> Option<u32> {
    let value: i64 = value?;
    match u32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("{} \"{}\": bound {} out of range", DIRECTIVE, name, value);
            None
        }
    }
}

fn float_bounds(kind: &AttrKind) -> (Option<f64>, Option<f64>) {
    match kind {
        AttrKind::Int { min, max } => (min.map(|v| v as f64), max.map(|v| v as f64)),
        AttrKind::Hex { min, max } => (min.map(|v| v as f64), max.map(|v| v as f64)),
        AttrKind::Float { min, max } => (*min, *max),
        AttrKind::String | AttrKind::Enum(_) => (None, None),
    }
}

// --- sub-rules ---

// BU_ / BO_ / SG_ / EV_ between the keyword and the name
pub(crate) fn decode_object(ctx: &mut ParseContext, text: &str) {
    ctx.attr_object = Some(match text.trim() {
        "BU_" => AttrObject::Node,
        "BO_" => AttrObject::Message,
        "SG_" => AttrObject::Signal,
        "EV_" => AttrObject::EnvironmentVariable,
        _ => AttrObject::Database,
    });
}

pub(crate) fn decode_int(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let max: Option<i64> = ctx.take_number_lenient(DIRECTIVE)?;
    let min: Option<i64> = ctx.take_number_lenient(DIRECTIVE)?;
    ctx.attr_kind = Some(AttrKind::Int { min, max });
    Ok(())
}

pub(crate) fn decode_hex(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let max: Option<u64> = ctx.take_number_lenient(DIRECTIVE)?;
    let min: Option<u64> = ctx.take_number_lenient(DIRECTIVE)?;
    ctx.attr_kind = Some(AttrKind::Hex { min, max });
    Ok(())
}

pub(crate) fn decode_float(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let max: Option<f64> = ctx.take_number_lenient(DIRECTIVE)?;
    let min: Option<f64> = ctx.take_number_lenient(DIRECTIVE)?;
    ctx.attr_kind = Some(AttrKind::Float { min, max });
    Ok(())
}

pub(crate) fn decode_string(ctx: &mut ParseContext) {
    ctx.attr_kind = Some(AttrKind::String);
}

pub(crate) fn decode_enum_value(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let member: String = ctx.take(Stack::Phrases, DIRECTIVE)?;
    ctx.enum_values.push(member);
    Ok(())
}

pub(crate) fn decode_enum(ctx: &mut ParseContext) {
    let members: Vec<String> = std::mem::take(&mut ctx.enum_values);
    ctx.attr_kind = Some(AttrKind::Enum(members));
}

#[cfg(test)]
mod tests {
    use crate::dbc::from_str;
    use crate::dbc::types::attributes::{AttrKind, AttrObject};

    #[test]
    fn test_generic_definitions() {
        let text: &str = "\
BA_DEF_  \"DBName\" STRING ;
BA_DEF_ BU_ \"NmhBaseAddress\" HEX 0 536870911;
BA_DEF_ SG_ \"SigScale\" FLOAT -1.5 1.5;
BA_DEF_ BO_ \"VFrameFormat\" ENUM \"StandardCAN\",\"ExtendedCAN\";
BA_DEF_ EV_ \"EnvCount\" INT 0 10;
";
        let db = from_str(text).unwrap();
        assert_eq!(db.attribute_definitions.len(), 5);

        let def = &db.attribute_definitions["DBName"];
        assert_eq!(def.object, AttrObject::Database);
        assert_eq!(def.kind, AttrKind::String);

        let def = &db.attribute_definitions["NmhBaseAddress"];
        assert_eq!(def.object, AttrObject::Node);
        assert_eq!(def.kind, AttrKind::Hex { min: Some(0), max: Some(536870911) });

        let def = &db.attribute_definitions["SigScale"];
        assert_eq!(def.kind, AttrKind::Float { min: Some(-1.5), max: Some(1.5) });

        let def = &db.attribute_definitions["VFrameFormat"];
        assert_eq!(def.object, AttrObject::Message);
        assert_eq!(
            def.kind,
            AttrKind::Enum(vec!["StandardCAN".to_string(), "ExtendedCAN".to_string()])
        );

        assert_eq!(
            db.attribute_definitions["EnvCount"].object,
            AttrObject::EnvironmentVariable
        );
    }

    #[test]
    fn test_tracked_bounds() {
        let text: &str = "\
BA_DEF_ BO_ \"GenMsgCycleTime\" INT 0 65535;
BA_DEF_ SG_ \"GenSigStartValue\" INT 0 0;
";
        let db = from_str(text).unwrap();
        assert_eq!(db.gen_msg_cycle_time.min, Some(0));
        assert_eq!(db.gen_msg_cycle_time.max, Some(65535));
        assert_eq!(db.gen_msg_cycle_time.default, None);
        assert_eq!(db.gen_sig_start_value.min, Some(0.0));
        assert_eq!(db.gen_sig_start_value.max, Some(0.0));
    }

    #[test]
    fn test_wrong_object_does_not_touch_bounds() {
        let db = from_str("BA_DEF_ SG_ \"GenMsgCycleTime\" INT 0 100;\n").unwrap();
        assert_eq!(db.gen_msg_cycle_time.max, None);
        assert!(db.attribute_definitions.contains_key("GenMsgCycleTime"));
    }

    #[test]
    fn test_negative_cycle_time_bound_is_dropped() {
        let db = from_str("BA_DEF_ BO_ \"GenMsgCycleTime\" INT -1 100;\n").unwrap();
        assert_eq!(db.gen_msg_cycle_time.min, None);
        assert_eq!(db.gen_msg_cycle_time.max, Some(100));
    }
}
