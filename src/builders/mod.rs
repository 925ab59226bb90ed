//! The two batch jobs that produce `docs/data/`.
//!
//! Each builder follows the same pattern:
//!
//! 1. **Collect**: Walk its input directory in sorted filename order and turn
//!    each usable file into a record
//! 2. **Write**: Serialize the records to their output file(s) and log a summary
//!
//! | Builder | Module | Input | Output |
//! |---------|--------|-------|--------|
//! | Episodes | [`episodes`] | `episodes/<slug>/transcript.md` | `episodes.json`, `episodes-index.json` |
//! | Topics | [`topics`] | `index/*.md` | `topics.json` |
//!
//! Builders share nothing at runtime and can run in either order.

pub mod episodes;
pub mod topics;
