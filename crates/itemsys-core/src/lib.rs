//! itemsys-core - Core traits and types for the item-system gateway
//!
//! This crate provides the abstractions the REST layer dispatches against:
//! the typed call surfaces of the two backend RPC services, the error
//! taxonomy their failures are classified into, and the per-request call
//! context carrying deadline and cancellation.

pub mod context;
pub mod error;
pub mod models;
pub mod services;

pub use context::CallContext;
pub use error::{ServiceError, ServiceResult};
pub use services::{ItemService, UserService};
