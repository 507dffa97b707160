pub mod config_service;
pub mod draw_service;
pub mod export_service;
pub mod feedback_service;

pub use config_service::*;
pub use draw_service::*;
pub use export_service::*;
pub use feedback_service::*;
