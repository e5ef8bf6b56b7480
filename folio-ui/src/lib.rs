//! folio-ui - View components and display types for the folio site
//!
//! Contains display types, stores, and pure view components. Pages in
//! folio-web own the data and wire the callbacks.

pub mod components;
pub mod display_types;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
