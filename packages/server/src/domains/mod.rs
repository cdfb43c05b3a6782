// Domain modules
pub mod instagram;
pub mod showcase;
