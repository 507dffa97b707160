pub mod directory_picker;

pub use directory_picker::*;
