//! Data models shared by the gateway, the provider adapters and the HTTP layer.
//!
//! - `provider`: the closed set of supported translation vendors.
//! - `translation`: normalized request and result types.

// Author: kelexine (https://github.com/kelexine)

pub mod provider;
pub mod translation;

pub use provider::Provider;
pub use translation::{ProviderRequest, TranslationRequest, TranslationResult, AUTO};
