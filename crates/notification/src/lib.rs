mod dry_run;
mod emailjs;
mod service;
pub(crate) mod template;

pub use dry_run::*;
pub use emailjs::*;
pub use service::*;
