//! A parser for GNU-style command lines
//!
//! ```text
//! prog --output=out.txt -v input.txt -- --passed-through
//! ```
//!
//! Syntax | Meaning
//! -|-
//! `--name`, `-n` | Sets the option `name`
//! `--name=value`, `--name value`, `-n value` | Sets `name` to `value` (only for options that take a value)
//! `--` | Everything after it is kept aside, uninterpreted
//! Anything else | A positional argument
//!
//! Options are always looked up by their full name, whichever form was used on the command
//! line. If an option is given more than once, the last occurrence wins.
//!
//! ```
//! use dash_args::{ArgParser, OptionDef};
//!
//! let mut parser = ArgParser::new([
//!     OptionDef::new("verbose", "Be loud"),
//!     OptionDef::new("jobs", "Parallelism").takes_value(),
//! ]);
//!
//! parser.parse_from(["make", "-j", "4", "all"]).unwrap();
//!
//! assert_eq!(parser.get("jobs").value::<u32>(), Ok(4));
//! assert!(!parser.get("verbose").value::<bool>().unwrap());
//! assert_eq!(parser.positional(0).as_str(), Ok("all"));
//! ```
//!
//! # Limitations
//!
//! - Short options can't be combined: `-abc` is read as `-a` and the rest is ignored.
//! - A value can never start with `-`, so `--offset -5` is a missing value error.

mod args;
mod error;
mod parser;
mod registry;
mod value;

pub use error::{InvalidArguments, InvalidDefinition};
pub use parser::ArgParser;
pub use registry::{OptionDef, Registry};
pub use value::{FromValue, Key, ValueRef};
