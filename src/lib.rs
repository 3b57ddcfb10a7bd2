pub mod analysis;
pub mod cancellation;
pub mod completion;
pub mod config;
pub mod logging;
pub mod lsp;
pub mod text;
