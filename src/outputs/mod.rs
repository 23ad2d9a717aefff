//! Output generation for the post material.
//!
//! # Submodules
//!
//! - [`caption`]: Builds and writes the copy-paste Instagram caption
//! - [`json`]: Writes the per-edition metadata the post renderer consumes
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── caption.txt
//! └── 2026-10-16/
//!     └── evening.json
//! ```

pub mod caption;
pub mod json;
