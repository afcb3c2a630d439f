mod chat;
mod inference;
mod task;
pub mod user;

pub use chat::*;
pub use inference::*;
pub use task::*;
pub use user::*;
