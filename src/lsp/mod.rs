pub mod backend;
pub mod document;
pub mod models;

pub use backend::FcsBackend;
pub use document::DocumentError;
