pub mod entity;
pub mod path;
pub mod role;
pub mod token;

pub use entity::*;
pub use path::*;
pub use role::*;
pub use token::*;
