#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod layout;
mod session;
mod types;
