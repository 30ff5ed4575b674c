pub mod chaos;
pub mod config;
pub mod context;
pub mod error;
pub mod lifecycle;
pub mod pool;
