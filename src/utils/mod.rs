pub mod repo;

pub use repo::{current_reference, preflight, Preflight};
