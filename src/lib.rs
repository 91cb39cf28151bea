pub mod cli;
pub mod config;
pub mod domains;
pub mod error;
pub mod history;
pub mod logging;
pub mod runtime_paths;
pub mod store;

pub type Result<T> = std::result::Result<T, error::SpendwiseChatError>;
