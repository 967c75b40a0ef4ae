use log::warn;

use crate::dbc::context::{ParseContext, RawValue, Stack};
use crate::dbc::types::{
    attributes::{AttrKind, AttributeValue},
    errors::DbcParseError,
};

/// Value of `BA_DEF_DEF_` / `BA_`: a number or a quoted string.
pub(crate) fn decode(ctx: &mut ParseContext, text: &str) -> Result<(), DbcParseError> {
    let raw: RawValue = if text.starts_with('"') {
        RawValue::Text(ctx.take(Stack::Phrases, "attribute value")?)
    } else {
        RawValue::Number(ctx.take(Stack::Numbers, "attribute value")?)
    };
    ctx.attr_value = Some(raw);
    Ok(())
}

/// Convert a raw value to the kind declared by `BA_DEF_`.
///
/// Without a definition the token shape decides: quoted text is a string, a number
/// is an integer when it has no fractional part and a float otherwise.
/// Values that do not convert are logged and dropped.
pub(crate) fn typed(name: &str, kind: Option<&AttrKind>, raw: &RawValue) -> Option<AttributeValue> {
    let token: &str = raw.as_str().trim();
    let value: Option<AttributeValue> = match kind {
        Some(AttrKind::Int { .. }) => token.parse::<i64>().ok().map(AttributeValue::Int),
        Some(AttrKind::Hex { .. }) => parse_hex(token).map(AttributeValue::Hex),
        Some(AttrKind::Float { .. }) => token.parse::<f64>().ok().map(AttributeValue::Float),
        Some(AttrKind::String) => Some(AttributeValue::Str(token.to_string())),
        Some(AttrKind::Enum(members)) => match raw {
            // assignments carry the index, defaults usually the member itself
            RawValue::Number(_) => token
                .parse::<usize>()
                .ok()
                .and_then(|idx| members.get(idx))
                .map(|member| AttributeValue::Enum(member.clone())),
            RawValue::Text(_) => members
                .iter()
                .find(|member| member.as_str() == token)
                .map(|member| AttributeValue::Enum(member.clone())),
        },
        None => match raw {
            RawValue::Text(_) => Some(AttributeValue::Str(token.to_string())),
            RawValue::Number(_) => token
                .parse::<i64>()
                .ok()
                .map(AttributeValue::Int)
                .or_else(|| token.parse::<f64>().ok().map(AttributeValue::Float)),
        },
    };

    if value.is_none() {
        warn!("Attribute '{}': value '{}' does not match its definition", name, token);
    }
    value
}

/// Millisecond values such as `GenMsgCycleTime`: `100` and `100.0` are both accepted,
/// fractional or negative values are not.
pub(crate) fn whole_u32(token: &str) -> Option<u32> {
    let token: &str = token.trim();
    if let Ok(v) = token.parse::<u32>() {
        return Some(v);
    }
    let v: f64 = token.parse::<f64>().ok()?;
    if v.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&v) {
        Some(v as u32)
    } else {
        None
    }
}

fn parse_hex(token: &str) -> Option<u64> {
    match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => token.parse::<u64>().ok(),
    }
}
