mod date;
mod error;
pub mod lenient;
pub mod mealplan;
pub mod recipe;
pub mod shopping;

pub use date::*;
pub use error::*;
