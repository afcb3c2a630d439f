//! External Service Connectors
//!
//! Adapters for the services this backend talks to. Today that is the hosted
//! model inference API.
//!
//! ## Architecture Pattern
//!
//! 1. Define a trait in `{service}/mod.rs` → allows mocking in tests
//! 2. Implement the HTTP client in `{service}/client.rs`
//! 3. Inject the trait object into services → they never depend on HTTP details
//!
//! ## Testing
//!
//! ```ignore
//! let connector: Arc<dyn InferenceConnector> = Arc::new(MockInferenceConnector::echo());
//! ```

pub mod errors;
pub mod inference;

pub use errors::ConnectorError;
pub use inference::{InferenceClient, InferenceConnector};
#[cfg(test)]
pub use inference::MockInferenceConnector;
