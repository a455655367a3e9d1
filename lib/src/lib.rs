#![deny(unused_imports)]

pub mod math;
pub mod projection;
pub mod utils;
