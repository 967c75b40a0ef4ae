use log::debug;

use crate::dbc::context::{ParseContext, Stack};
use crate::dbc::types::errors::DbcParseError;

// Node and environment-variable comments are accepted but not stored:
// the model keeps nodes as plain names and has no environment variables.

/// Example: `CM_ BU_ DRIVER "The driver controller";`
pub(crate) fn decode(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let _comment: String = ctx.take(Stack::Phrases, "CM_ BU_")?;
    let node: String = ctx.take(Stack::Identifiers, "CM_ BU_")?;
    debug!("CM_ BU_: comment for node '{}' not stored", node);
    Ok(())
}

/// Example: `CM_ EV_ EnvGear "Selected gear";`
pub(crate) fn decode_env(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let _comment: String = ctx.take(Stack::Phrases, "CM_ EV_")?;
    let env: String = ctx.take(Stack::Identifiers, "CM_ EV_")?;
    debug!("CM_ EV_: comment for environment variable '{}' not stored", env);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::dbc::from_str;

    #[test]
    fn test_accepted_and_dropped() {
        let text: &str = "\
BU_: DRIVER

CM_ BU_ DRIVER \"The driver controller driving the car\";
CM_ EV_ EnvGear \"Selected gear\";
";
        let db = from_str(text).unwrap();
        assert_eq!(db.nodes, vec!["DRIVER"]);
        assert_eq!(db.comment, None);
    }
}
