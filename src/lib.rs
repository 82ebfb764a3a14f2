//! A terminal assistant that turns plain requests into shell commands.
//!
//! Each line of input is matched, in order, against a few built-in
//! directives, a table of canned replies, the user's aliases and a keyword +
//! regex intent table. Whatever command comes out is checked against a
//! denylist and then run through the system shell. Input that matches
//! nothing may get a "did you mean" suggestion.
//!
//! The main entry point is [`Assistant`]. Process execution sits behind the
//! [`command::ProcessExecutor`] trait so the pipeline can be driven without
//! spawning anything.

pub mod alias;
pub mod command;
pub mod config;
mod dispatcher;
pub mod easter_egg;
mod external;
pub mod history;
pub mod intent;
pub mod io_adapters;
pub mod meta;
pub mod runner;
pub mod safety;
pub mod suggest;
pub mod ui;

pub use config::{Args, Config};
pub use dispatcher::{Assistant, Flow};
pub use external::SystemShell;
pub use ui::Console;
