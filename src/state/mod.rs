//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `verify`, etc.) so individual
//! components can depend on small focused models. Each module holds plain
//! data plus pure transition logic; timer and DOM side effects are issued
//! by the owning component based on the values these methods return.

pub mod account;
pub mod auth;
pub mod chat;
pub mod conversations;
pub mod toast;
pub mod verify;
pub mod welcome;
