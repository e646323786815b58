//! Item catalog: the store that knows what exists and what is on the shelf.
//!
//! Pure in-process state; no IO.

pub mod in_memory;
pub mod store;

pub use in_memory::InMemoryItemStore;
pub use store::ItemStore;
