pub mod business_hours;
pub mod config;
pub mod event;

pub use business_hours::*;
pub use config::Config;
pub use event::*;
