//! Storage adapters implementing the `AssessmentStore` port.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
