mod extractor;
mod getheader;
mod manager;
mod manager_middleware;
mod method;

pub use extractor::{Caller, LoggedUser};
pub use getheader::*;
pub use manager::*;
pub use manager_middleware::*;

use crate::models::Identity;
use std::sync::Arc;

/// Result of authenticating one request, kept in the request extensions.
#[derive(Debug, Clone)]
pub enum Authentication {
    User(Arc<Identity>),
    /// A bearer token was sent but did not verify
    Rejected(String),
    Anonymous,
}
