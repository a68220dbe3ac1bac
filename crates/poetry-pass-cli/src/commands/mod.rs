//! Command implementations.

pub mod config;
pub mod extract;
pub mod inspect;

pub use self::config::execute_config;
pub use self::extract::{execute_all, execute_poetry, execute_words};
pub use self::inspect::execute_inspect;
