mod angle;
mod misc;
mod noneg;
mod point;
mod traits;
mod vector;

pub use angle::*;
pub use misc::*;
pub use noneg::*;
pub use point::*;
pub use traits::*;
pub use vector::*;
