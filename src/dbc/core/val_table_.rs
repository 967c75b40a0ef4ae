use log::warn;

use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::types::{
    database::CanDatabase,
    errors::DbcParseError,
    value_table::{ValueTable, ValueTableEntry},
};

/// `<number> "<label>"`, shared by `VAL_TABLE_` and `VAL_`.
/// The number stays as written until the enclosing directive completes.
pub(crate) fn decode_pair(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let label: String = ctx.take(Stack::Phrases, "value pair")?;
    let value: String = ctx.take(Stack::Numbers, "value pair")?;
    ctx.pairs.push((value, label));
    Ok(())
}

/// Converts the raw codes of a pair list. Codes span the signed 64-bit and the
/// unsigned 64-bit range; a code that is not an integer drops the whole list.
pub(crate) fn integer_codes(
    pairs: &[(String, String)],
    directive: &str,
) -> Option<Vec<i128>> {
    let mut codes: Vec<i128> = Vec::with_capacity(pairs.len());
    for (token, label) in pairs {
        match token.parse::<i128>() {
            Ok(code) => codes.push(code),
            Err(_) => {
                warn!(
                    "{}: value '{}' of label \"{}\" is not an integer, directive dropped",
                    directive, token, label
                );
                return None;
            }
        }
    }
    Some(codes)
}

/// Example: `VAL_TABLE_ ABS_fault_info 2 "active faults stored" 1 "inactive faults stored" 0 "no faults stored" ;`
pub(crate) fn decode(ctx: &mut ParseContext, db: &mut CanDatabase) -> Result<(), DbcParseError> {
    let identifier: String = ctx.take(Stack::Identifiers, "VAL_TABLE_")?;
    let pairs: Vec<(String, String)> = std::mem::take(&mut ctx.pairs);
    let Some(codes) = integer_codes(&pairs, "VAL_TABLE_") else {
        return Ok(());
    };

    let entries: Vec<ValueTableEntry> = codes
        .into_iter()
        .zip(pairs)
        .map(|(value, (_, label))| ValueTableEntry { value, label })
        .collect();

    db.value_tables.push(ValueTable {
        identifier,
        entries,
    });
    Ok(())
}
