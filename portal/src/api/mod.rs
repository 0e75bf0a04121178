pub mod error;
pub mod invoke;
pub mod mkube;
