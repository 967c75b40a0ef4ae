//! Grammar engine.
//!
//! `dbc.pest` is compiled into [`DbcGrammar`] at build time. A parse first matches the
//! whole input; only a complete match is walked. The walk is post-order, so every rule
//! completes after its sub-rules, and each completed rule that carries meaning becomes a
//! [`Directive`] handed to the semantic actions in `core`.

use log::trace;
use pest::{
    Parser,
    error::{Error, LineColLocation},
    iterators::Pair,
};
use pest_derive::Parser;

use crate::dbc::{
    config::ParserConfig,
    context::ParseContext,
    core::apply,
    types::{database::CanDatabase, errors::DbcParseError},
};

#[derive(Parser)]
#[grammar = "dbc/dbc.pest"]
pub(crate) struct DbcGrammar;

/// Semantic events, one per grammar rule that carries meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Directive {
    // leaves
    Identifier,
    EcuToken,
    Number,
    Phrase,
    Sign,
    ByteOrder,
    Multiplexer,
    MuxIndex,

    // header
    Version,
    Symbols,
    BitTiming,
    Nodes,

    // entities
    Message,
    Signal,
    TxNodes,
    NumberPhrasePair,
    ValueTable,
    ValueDescription,

    // comments
    MessageComment,
    SignalComment,
    NodeComment,
    EnvVarComment,
    NetworkComment,

    // attributes
    AttrObjectType,
    AttrInt,
    AttrHex,
    AttrFloat,
    AttrString,
    AttrEnum,
    EnumValue,
    AttrDefinition,
    AttrDefault,
    TargetNode,
    TargetMessage,
    TargetSignal,
    TargetEnvVar,
    AttrValue,
    AttrAssignment,
    SignalValueType,

    Ignored,
}

impl Directive {
    /// Structural rules (statement wrappers, `NS_` entries, `BS_` values) have no directive.
    pub(crate) fn from_rule(rule: Rule) -> Option<Directive> {
        let directive: Directive = match rule {
            Rule::TOKEN => Directive::Identifier,
            Rule::ECU_TOKEN => Directive::EcuToken,
            Rule::number => Directive::Number,
            Rule::phrase => Directive::Phrase,
            Rule::sign => Directive::Sign,
            Rule::byte_order => Directive::ByteOrder,
            Rule::muxer => Directive::Multiplexer,
            Rule::mux_ndx => Directive::MuxIndex,

            Rule::version => Directive::Version,
            Rule::ns => Directive::Symbols,
            Rule::bs => Directive::BitTiming,
            Rule::bu => Directive::Nodes,

            Rule::message => Directive::Message,
            Rule::signal => Directive::Signal,
            Rule::bo_tx_bu => Directive::TxNodes,
            Rule::number_phrase_pair => Directive::NumberPhrasePair,
            Rule::val_table => Directive::ValueTable,
            Rule::value_description => Directive::ValueDescription,

            Rule::comment_message => Directive::MessageComment,
            Rule::comment_signal => Directive::SignalComment,
            Rule::comment_node => Directive::NodeComment,
            Rule::comment_env => Directive::EnvVarComment,
            Rule::comment_network => Directive::NetworkComment,

            Rule::object_type => Directive::AttrObjectType,
            Rule::attr_int => Directive::AttrInt,
            Rule::attr_hex => Directive::AttrHex,
            Rule::attr_float => Directive::AttrFloat,
            Rule::attr_string => Directive::AttrString,
            Rule::attr_enum => Directive::AttrEnum,
            Rule::enum_value => Directive::EnumValue,
            Rule::ba_def => Directive::AttrDefinition,
            Rule::ba_def_def => Directive::AttrDefault,
            Rule::target_node => Directive::TargetNode,
            Rule::target_message => Directive::TargetMessage,
            Rule::target_signal => Directive::TargetSignal,
            Rule::target_env => Directive::TargetEnvVar,
            Rule::attribute_value => Directive::AttrValue,
            Rule::ba => Directive::AttrAssignment,
            Rule::sig_valtype => Directive::SignalValueType,

            Rule::ignored => Directive::Ignored,

            _ => return None,
        };
        Some(directive)
    }
}

/// Keyword of a top-level statement, used to label leftover-value errors.
fn statement_keyword(rule: Rule) -> &'static str {
    match rule {
        Rule::version => "VERSION",
        Rule::ns => "NS_",
        Rule::bs => "BS_",
        Rule::bu => "BU_",
        Rule::val_table => "VAL_TABLE_",
        Rule::bo_tx_bu => "BO_TX_BU_",
        Rule::message => "BO_",
        Rule::comment => "CM_",
        Rule::ba_def_def => "BA_DEF_DEF_",
        Rule::ba_def => "BA_DEF_",
        Rule::ba => "BA_",
        Rule::sig_valtype => "SIG_VALTYPE_",
        Rule::value_description => "VAL_",
        Rule::ignored => "ignored directive",
        _ => "statement",
    }
}

// names used in syntax error messages
fn rule_label(rule: &Rule) -> String {
    match rule {
        Rule::TOKEN | Rule::ECU_TOKEN => "identifier".to_string(),
        Rule::number => "number".to_string(),
        Rule::phrase => "quoted string".to_string(),
        Rule::sign => "sign (+ or -)".to_string(),
        Rule::byte_order => "byte order (0 or 1)".to_string(),
        Rule::EOI => "end of input".to_string(),
        other => format!("{:?}", other),
    }
}

fn syntax_error(err: Error<Rule>) -> DbcParseError {
    let (line, column) = match &err.line_col {
        LineColLocation::Pos(pos) => *pos,
        LineColLocation::Span(start, _) => *start,
    };
    let err: Error<Rule> = err.renamed_rules(rule_label);
    DbcParseError::Syntax {
        line,
        column,
        message: err.variant.message().into_owned(),
    }
}

/// Matches `text` and runs the semantic actions over the match tree.
pub(crate) fn run(text: &str, config: &ParserConfig) -> Result<CanDatabase, DbcParseError> {
    let mut pairs = DbcGrammar::parse(Rule::dbc, text).map_err(syntax_error)?;

    let mut ctx: ParseContext = ParseContext::default();
    let mut db: CanDatabase = CanDatabase::default();

    let Some(root) = pairs.next() else {
        return Ok(db);
    };

    for statement in root.into_inner() {
        let rule: Rule = statement.as_rule();
        if rule == Rule::EOI {
            continue;
        }
        walk(statement, &mut ctx, &mut db, config)?;
        ctx.finish_statement(statement_keyword(rule))?;
    }

    Ok(db)
}

fn walk(
    pair: Pair<'_, Rule>,
    ctx: &mut ParseContext,
    db: &mut CanDatabase,
    config: &ParserConfig,
) -> Result<(), DbcParseError> {
    let rule: Rule = pair.as_rule();
    let text: &str = pair.as_str();

    if config.trace_rules {
        let (line, column) = pair.as_span().start_pos().line_col();
        trace!("{}:{} {:?} {:?}", line, column, rule, text);
    }

    for inner in pair.into_inner() {
        walk(inner, ctx, db, config)?;
    }

    match Directive::from_rule(rule) {
        Some(directive) => apply(directive, text, ctx, db),
        None => Ok(()),
    }
}
