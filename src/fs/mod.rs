//! Filesystem module.
//!
//! Provides:
//! - Output directory management
//! - Filename derivation and sanitization

pub mod naming;
pub mod paths;

pub use naming::{image_filename, sanitize_filename, txt_filename};
pub use paths::ensure_dir;
