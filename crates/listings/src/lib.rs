mod request;
mod types;
mod user;
mod utils;

pub use request::*;
pub use types::*;
pub use user::*;
pub use utils::*;
