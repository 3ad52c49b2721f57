/*
[INPUT]:  Public API exports for the futures-order-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod summary;

pub use summary::{RequestSummary, ResponseSummary};
