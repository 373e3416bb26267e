pub mod days;
pub mod section;
pub mod time;

pub use days::*;
pub use section::*;
pub use time::*;
