//! Core building blocks: request validation and destination-path derivation
//! (`request`), and starting the external converter (`launch`). These are
//! consumed by the high-level `api` module.
pub mod launch;
pub mod request;
