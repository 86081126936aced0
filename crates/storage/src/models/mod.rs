pub mod entry;
pub mod score;

pub use entry::Entry;
