mod delivery;
mod root;
mod types;
mod validate;

pub use delivery::*;
pub use root::*;
pub use types::*;
pub use validate::*;
