pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod handlers;
pub mod input;
pub mod menu;
pub mod models;
pub mod schema;
pub mod session;

pub use error::{CareError, Result};
pub use session::Session;
