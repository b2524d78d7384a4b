pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod launch;
pub mod server;
pub mod session;
