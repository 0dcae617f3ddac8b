#![forbid(unsafe_code)]

pub mod content;
pub mod model;
pub mod time;

pub use time::Clock;
