#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use flag::*;
pub use generator::*;
pub use outcome::*;
pub use preset::*;
pub use reveal::RevealResult;
pub use stats::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod flag;
mod generator;
mod outcome;
mod preset;
pub mod reveal;
mod stats;
mod types;
