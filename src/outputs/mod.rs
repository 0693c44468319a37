//! Output generation.
//!
//! - [`log_file`]: the per-run append-only text log of matching articles
//!
//! ```text
//! ./
//! ├── cbsnews_log_2024-05-06_14-30-05.txt
//! └── cbsnews_log_2024-05-07_09-00-00.txt
//! ```

pub mod log_file;
