pub mod selection;

// Re-export all modules
pub use selection::*;
