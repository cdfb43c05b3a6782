// HTTP routes
pub mod health;
pub mod instagram;
pub mod showcase;

pub use health::*;
pub use instagram::*;
pub use showcase::*;
