pub mod config;
pub mod error;
pub mod manager;
pub mod navigate;
pub mod protocol;
pub mod shell;
pub mod storage;
pub mod utils;

pub use manager::FileManager;
pub use shell::Shell;
pub use storage::FileStorage;
