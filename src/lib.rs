//! Minimal command line option parser that binds options to plain variables.
//!
//! Each option is declared with a `&mut` borrow of the variable that should
//! receive its value, so option outputs are ordinary locals initialized to
//! whatever defaults the caller wants. Parsing walks the argument vector
//! once, writes through the bindings, and collects everything that is not an
//! option into a remaining-arguments list.
//!
//! ```
//! use optbind::{Opt, Parser};
//!
//! let mut input: &str = "";
//! let mut verbosity = 0u32;
//!
//! let mut parser = Parser::new(vec![
//!     Opt::string('i', "input-file", "input file", true, &mut input),
//!     Opt::flag_count('v', "verbose", "verbose logging", &mut verbosity),
//! ]);
//!
//! let args = ["demo", "-vv", "-i", "data.txt", "extra"];
//! parser.parse(&args)?;
//! assert_eq!(parser.remaining_args(), ["extra"]);
//!
//! drop(parser);
//! assert_eq!(input, "data.txt");
//! assert_eq!(verbosity, 2);
//! # Ok::<(), optbind::Error>(())
//! ```
//!
//! On failure the expected host behavior is to print its own usage preamble,
//! then [`Parser::print_options_usage`] and the error, and exit non-zero.
//!
//! String and path bindings are views into the argument vector; no argument
//! text is copied or allocated. Single-threaded use only: a parser instance
//! is meant to be fed one argument vector at process startup.

use thiserror::Error;

mod opt;
mod parser;

pub use crate::opt::{Bind, Opt};
pub use crate::parser::Parser;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failed parse or path validation.
///
/// `Display` is the stable diagnostic text, naming the option by both its
/// short and long form so it can be grepped in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown option --{long}")]
    UnknownLongOption { long: String },

    #[error("unknown short option -{short}")]
    UnknownShortOption { short: char },

    /// A parameter-taking short option may only close a cluster; anywhere
    /// else its value would be ambiguous.
    #[error("short option -{short} cannot be used in the middle of a flag list, it requires a value")]
    MidClusterParameter { short: char },

    #[error("option -{short}/--{long} requires a parameter")]
    MissingParameter { short: char, long: String },

    #[error("option -{short}/--{long} shouldn't be specified more than once")]
    DuplicateOption { short: char, long: String },

    #[error("invalid integer value \"{value}\" specified for option -{short}/--{long}")]
    InvalidIntValue { short: char, long: String, value: String },

    #[error("invalid float value \"{value}\" specified for option -{short}/--{long}")]
    InvalidFloatValue { short: char, long: String, value: String },

    #[error("option -{short}/--{long} is required")]
    MissingRequiredOption { short: char, long: String },

    #[error("option -{short}/--{long} requires a readable file: {path}")]
    PathNotReadable { short: char, long: String, path: String },
}
