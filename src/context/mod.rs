pub mod session;
pub use session::*;

pub mod catalog;
pub use catalog::*;
