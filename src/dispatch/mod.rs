pub mod allocate;
pub mod cost;
pub mod error;
pub mod merit;

pub use allocate::*;
pub use cost::*;
pub use error::*;
pub use merit::*;
