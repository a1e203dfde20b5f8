//! Library side of the `normstat` binary: logging setup, run orchestration,
//! and terminal selectors.

pub mod logging;
pub mod pipeline;
pub mod prompt;
