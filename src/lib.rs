//! Workspace placeholder crate.
//!
//! Exposes feature flags that map onto the individual workspace crates
//! (`core-session`, `core-live`, `core-auth`). Host applications can depend
//! on `tunelink-workspace` and enable the documented features without wiring
//! each crate individually.

#[cfg(feature = "session")]
pub use core_session;

#[cfg(feature = "live-progress")]
pub use core_live;

#[cfg(feature = "auth")]
pub use core_auth;
