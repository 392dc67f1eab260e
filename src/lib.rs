#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod client;
pub mod coord;
pub mod event;
pub mod grid;
pub mod player;
pub mod roster;
pub mod test_util;
