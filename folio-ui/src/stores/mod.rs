//! Store types for UI state management
//!
//! folio-web creates these once in the app layout and shares them through
//! context. Each store derives `Store` for fine-grained reactivity via lensing.

pub mod site;

pub use site::*;
