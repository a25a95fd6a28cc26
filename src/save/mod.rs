//! Persistence for the opponent model: a text codec and the stores that
//! own load/save.
pub mod codec;
pub mod disk;
pub mod memory;
pub mod store;

pub use disk::Disk;
pub use memory::Memory;
pub use store::Store;
