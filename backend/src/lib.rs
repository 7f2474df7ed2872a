//! Inspection buffer for inbound shipment webhooks.
//!
//! Captured deliveries live in a bounded, newest-first [`store::RecordStore`]
//! shared by the HTTP handlers in [`handlers`].

pub mod app;
pub mod config;
pub mod handlers;
pub mod model;
pub mod schema;
pub mod store;
pub mod view;

pub use app::{create_router, AppState};
