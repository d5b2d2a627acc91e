mod autosave;
mod command;
mod fingerprint;

pub use autosave::*;
pub use command::*;
pub use fingerprint::*;
