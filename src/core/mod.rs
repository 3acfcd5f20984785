pub mod age;
pub mod compatibility;
pub mod date_input;
pub mod generation;
pub mod zodiac;

pub use crate::domain::model::{AgeResult, CompatibilityResult, DateInput};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
