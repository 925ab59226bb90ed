//! Output generation for the client-side JSON files.
//!
//! # Submodules
//!
//! - [`json`]: Pretty-prints any record list to a file and reports its size
//! - [`indexes`]: Derives and writes the lightweight episode index
//!
//! # Output Structure
//!
//! ```text
//! docs/data/
//! ├── episodes.json        # Full records with transcripts
//! ├── episodes-index.json  # Records with a 500-character preview
//! └── topics.json          # Topic to episode links, busiest first
//! ```

pub mod indexes;
pub mod json;
