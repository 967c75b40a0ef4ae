//! # dbc
//!
//! `dbc` is the module to work with `.dbc` files.
//!
//! The text is matched against a parsing-expression grammar (`dbc.pest`); as rules
//! complete, a small state machine assembles messages and signals and patches them with
//! the comments, attributes and value labels declared later in the file.
//!
//! ```
//! let text = r#"
//! BU_: DRIVER MOTOR
//!
//! BO_ 100 DRIVER_HEARTBEAT: 1 DRIVER
//!  SG_ DRIVER_HEARTBEAT_cmd : 0|8@1+ (1,0) [0|0] "" MOTOR
//!
//! BA_ "GenMsgCycleTime" BO_ 100 1000;
//! "#;
//! let db = candb::dbc::from_str(text).unwrap();
//! assert_eq!(db.message(100).unwrap().cycle_time, Some(1000));
//! ```

pub mod config;
pub(crate) mod context;
pub(crate) mod core;
pub(crate) mod grammar;
pub mod parse;
pub mod types;

pub use config::ParserConfig;
#[cfg(feature = "file")]
pub use parse::from_file;
pub use parse::{DbcParser, from_bytes, from_str, normalize_line_endings};
