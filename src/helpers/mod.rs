pub mod auth;
pub(crate) mod json;
mod keyed_lock;

pub use json::*;
pub use keyed_lock::KeyedLock;
