//! Boundary ports and the use cases that drive them.
//!
//! Each port is a single-method capability injected into its use case at
//! construction, so tests can substitute fakes. Use cases forward one call
//! and hand back whatever the port returned.

pub mod email;
pub mod item;

pub use email::{EmailPort, EmailPortError, SendInviteEmailUseCase};
pub use item::{GetItemQuantityUseCase, ItemPort, StorageItemPort};
