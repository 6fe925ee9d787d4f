//! # deeply command line
//!
//! Runs the comparison engine over JSON files:
//! - **cli**: argument definitions
//! - **commands**: subcommand execution
//! - **input**: reading values and engine configuration
//! - **error**: error types
//! - **logging**: tracing setup on stderr
//!
//! ## Usage
//!
//! ```text
//! deeply compare matches --expect expect.json --actual actual.json
//! deeply rank --expect expect.json --candidates candidates.json --top 3
//! deeply distance kitten sitting
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logging;

pub use cli::{Args, Command};
pub use commands::{run, Outcome};
pub use error::{Error, Result};
