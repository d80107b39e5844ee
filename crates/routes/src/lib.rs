mod pathname;

pub use pathname::*;
