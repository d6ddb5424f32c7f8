//! Concrete adapter implementations

pub mod memory;
pub mod mock_auth;
pub mod seed;

pub use memory::MemoryStore;
pub use mock_auth::MockAuthProvider;
