use log::debug;

use crate::dbc::context::{ParseContext, PendingMux, Stack};
use crate::dbc::core::{NO_NODE, strings};
use crate::dbc::types::{
    errors::DbcParseError,
    signal::{Endianness, MuxRole, Signal, Signedness},
};

const DIRECTIVE: &str = "SG_";

/// Build a signal from a `SG_` line and queue it for the enclosing `BO_`.
/// Example: `SG_ SENSOR_SONARS_left m0 : 16|12@1+ (0.1,0) [0|0] "" DRIVER,IO`
pub(crate) fn decode(ctx: &mut ParseContext) -> Result<(), DbcParseError> {
    let receivers: Vec<String> = ctx
        .drain(Stack::EcuTokens)
        .into_iter()
        .filter(|node| node != NO_NODE)
        .collect();

    let unit: String = ctx.take(Stack::Phrases, DIRECTIVE)?;
    let max: f64 = ctx.take_number(DIRECTIVE)?;
    let min: f64 = ctx.take_number(DIRECTIVE)?;
    let offset: f64 = ctx.take_number(DIRECTIVE)?;
    let factor: f64 = ctx.take_number(DIRECTIVE)?;

    let sign: Signedness = match ctx.take(Stack::Signs, DIRECTIVE)?.as_str() {
        "-" => Signedness::Signed,
        _ => Signedness::Unsigned,
    };
    let endian: Endianness = match ctx.take(Stack::Numbers, DIRECTIVE)?.as_str() {
        "0" => Endianness::Motorola,
        _ => Endianness::Intel,
    };
    let bit_length: u16 = ctx.take_number(DIRECTIVE)?;
    let start_bit: u16 = ctx.take_number(DIRECTIVE)?;
    let name: String = ctx.take(Stack::Identifiers, DIRECTIVE)?;

    let mux: MuxRole = ctx.take_mux();

    debug!(
        "Signal '{}' {}|{} {:?} {:?} {:?}",
        name, start_bit, bit_length, endian, sign, mux
    );

    ctx.signals.push(Signal {
        name,
        start_bit,
        bit_length,
        endian,
        sign,
        factor,
        offset,
        min,
        max,
        unit,
        receivers,
        mux,
        ..Default::default()
    });
    Ok(())
}

// `M` after the signal name
pub(crate) fn decode_multiplexer(ctx: &mut ParseContext) {
    ctx.mux = PendingMux::Multiplexer;
}

// `m<k>` after the signal name
pub(crate) fn decode_mux_index(ctx: &mut ParseContext, text: &str) -> Result<(), DbcParseError> {
    let digits: &str = strings::mux_index(text);
    let index: u32 = digits.parse().map_err(|_| DbcParseError::InvalidNumber {
        token: text.to_string(),
        directive: DIRECTIVE,
    })?;
    ctx.mux = PendingMux::Index(index);
    Ok(())
}
