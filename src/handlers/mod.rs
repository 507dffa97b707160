pub mod lottery_config;
pub mod draw;
pub mod export;
pub mod feedback;

pub use lottery_config::lottery_config_config;
pub use draw::draw_config;
pub use export::export_config;
pub use feedback::feedback_config;
