//! itemsys-rpc - RPC clients for the backend services
//!
//! Implements the `UserService` and `ItemService` traits by forwarding
//! each operation as JSON over a long-lived channel. Channels are created
//! once at startup and shared by every request; connection establishment
//! is lazy, so an unreachable backend surfaces errors per call instead of
//! preventing the gateway from starting.

mod channel;
mod items;
mod users;

pub mod testing;

pub use channel::{InvalidEndpoint, RpcChannel};
pub use items::ItemServiceClient;
pub use users::UserServiceClient;
