mod command;
mod demo;
mod query;

pub use command::*;
pub use demo::*;
pub use query::*;
