//! Player state - the context container and the stores it owns

mod context;
mod platform;
mod unlock;

pub use context::WikiContext;
pub use platform::PlatformStorage;
pub use unlock::UnlockFlagStore;
