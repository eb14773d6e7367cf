// handlers/public/mod.rs - Public status handlers
//
// Route Prefix: none (/, /health)
pub mod status;

pub use status::{health, root};
