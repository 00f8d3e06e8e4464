//! API route modules. Each module exposes `pub fn router()` and is merged
//! into the application router in `lib.rs`.

pub mod alm;
pub mod document;
pub mod export;
pub mod gdpr;
pub mod generate;
pub mod standards;
pub mod status;
pub mod validate;
