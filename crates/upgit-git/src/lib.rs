//! # upgit-git
//!
//! Git operations abstraction layer for upgit, built on the `git`
//! executable. Every operation runs as a subprocess with the target
//! repository passed via `-C`, and any non-zero exit status is treated
//! uniformly as that operation's failure.

mod cli;
mod error;
mod traits;

pub use cli::GitCli;
pub use error::{Error, Result};
pub use traits::GitOps;
