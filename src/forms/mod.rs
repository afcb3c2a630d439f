pub mod chat;
pub mod user;

pub use chat::ChatForm;
pub use user::{normalize_email, LoginForm, RegisterForm};
