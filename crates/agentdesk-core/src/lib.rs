pub mod client;
pub mod defaults;
pub mod error;
pub mod export;
pub mod intake;
pub mod io;
pub mod knowledge;
pub mod lifecycle;
pub mod link;
pub mod paths;
pub mod prompts;
pub mod types;
pub mod website;

pub use error::{DeskError, Result};
