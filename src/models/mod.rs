pub mod common;
pub mod directory;
pub mod export;
pub mod feedback;
pub mod lottery_config;
pub mod lottery_record;
pub mod pagination;
pub mod prize;

pub use common::*;
pub use directory::*;
pub use export::*;
pub use feedback::*;
pub use lottery_config::*;
pub use lottery_record::*;
pub use pagination::*;
pub use prize::*;
