//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_STYLE, MAX_TEXT_LENGTH};
pub use env::{Config, Style};
