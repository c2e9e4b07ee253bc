pub mod types;
pub mod validate;
pub mod queries;
pub mod store;

pub use types::*;
pub use validate::*;
pub use store::*;
