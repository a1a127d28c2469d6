pub mod plant;
pub mod validate;

pub use plant::*;
pub use validate::*;
