pub mod interface;
pub mod memory;

pub use interface::{StoreError, TripStore};
pub use memory::MemoryTripStore;
