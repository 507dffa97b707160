pub mod id_generator;
pub mod validation;

pub use id_generator::*;
pub use validation::*;
