//! Semantic actions, one module per DBC directive.
//!
//! Leaf tokens are pushed onto the [`ParseContext`] stacks here; every composite
//! directive has a `decode` in its own module that pops what its sub-rules pushed and
//! builds or patches the [`CanDatabase`].

pub(crate) mod attributes;
pub(crate) mod bo_;
pub(crate) mod bo_tx_bu_;
pub(crate) mod bs_;
pub(crate) mod bu_;
pub(crate) mod comments;
pub(crate) mod ns_;
pub(crate) mod sg_;
pub(crate) mod strings;
pub(crate) mod val_;
pub(crate) mod val_table_;
pub(crate) mod version;

use log::debug;

use crate::dbc::{
    context::{ParseContext, Stack},
    grammar::Directive,
    types::{database::CanDatabase, errors::DbcParseError},
};

/// Node name DBC tools write when a message or signal has no sender/receiver.
pub(crate) const NO_NODE: &str = "Vector__XXX";

/// Runs the action of a completed rule.
pub(crate) fn apply(
    directive: Directive,
    text: &str,
    ctx: &mut ParseContext,
    db: &mut CanDatabase,
) -> Result<(), DbcParseError> {
    match directive {
        // --- leaves ---
        Directive::Identifier => {
            ctx.push(Stack::Identifiers, text.to_string());
            Ok(())
        }
        Directive::EcuToken => {
            ctx.push(Stack::EcuTokens, text.to_string());
            Ok(())
        }
        Directive::Number | Directive::ByteOrder => {
            ctx.push(Stack::Numbers, text.to_string());
            Ok(())
        }
        Directive::Phrase => {
            ctx.push(Stack::Phrases, strings::unquote(text));
            Ok(())
        }
        Directive::Sign => {
            ctx.push(Stack::Signs, text.to_string());
            Ok(())
        }
        Directive::Multiplexer => {
            sg_::decode_multiplexer(ctx);
            Ok(())
        }
        Directive::MuxIndex => sg_::decode_mux_index(ctx, text),

        // --- header ---
        Directive::Version => version::decode(ctx, db),
        Directive::Symbols => {
            ns_::decode(ctx, db);
            Ok(())
        }
        Directive::BitTiming => {
            bs_::decode(text);
            Ok(())
        }
        Directive::Nodes => {
            bu_::decode(ctx, db);
            Ok(())
        }

        // --- entities ---
        Directive::Message => bo_::decode(ctx, db),
        Directive::Signal => sg_::decode(ctx),
        Directive::TxNodes => bo_tx_bu_::decode(ctx, db),
        Directive::NumberPhrasePair => val_table_::decode_pair(ctx),
        Directive::ValueTable => val_table_::decode(ctx, db),
        Directive::ValueDescription => val_::decode(ctx, db),

        // --- comments ---
        Directive::MessageComment => comments::cm_bo_::decode(ctx, db),
        Directive::SignalComment => comments::cm_sg_::decode(ctx, db),
        Directive::NodeComment => comments::cm_bu_::decode(ctx),
        Directive::EnvVarComment => comments::cm_bu_::decode_env(ctx),
        Directive::NetworkComment => comments::cm_::decode(ctx, db),

        // --- attributes ---
        Directive::AttrObjectType => {
            attributes::ba_def_::decode_object(ctx, text);
            Ok(())
        }
        Directive::AttrInt => attributes::ba_def_::decode_int(ctx),
        Directive::AttrHex => attributes::ba_def_::decode_hex(ctx),
        Directive::AttrFloat => attributes::ba_def_::decode_float(ctx),
        Directive::AttrString => {
            attributes::ba_def_::decode_string(ctx);
            Ok(())
        }
        Directive::AttrEnum => {
            attributes::ba_def_::decode_enum(ctx);
            Ok(())
        }
        Directive::EnumValue => attributes::ba_def_::decode_enum_value(ctx),
        Directive::AttrDefinition => attributes::ba_def_::decode(ctx, db),
        Directive::AttrDefault => attributes::ba_def_def_::decode(ctx, db),
        Directive::TargetNode => attributes::ba_::decode_target_node(ctx),
        Directive::TargetMessage => attributes::ba_::decode_target_message(ctx),
        Directive::TargetSignal => attributes::ba_::decode_target_signal(ctx),
        Directive::TargetEnvVar => attributes::ba_::decode_target_env(ctx),
        Directive::AttrValue => attributes::value::decode(ctx, text),
        Directive::AttrAssignment => attributes::ba_::decode(ctx, db),
        Directive::SignalValueType => attributes::sig_valtype_::decode(ctx, db),

        Directive::Ignored => {
            debug!("Skipping unsupported directive: {}", first_word(text));
            Ok(())
        }
    }
}

fn first_word(text: &str) -> &str {
    text.split_ascii_whitespace().next().unwrap_or("")
}
