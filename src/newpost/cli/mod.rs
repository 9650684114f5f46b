//! The `newpost` command line. This is the only layer that writes to the
//! terminal, installs logging or decides exit codes.

pub mod logging;
pub mod print;
pub mod setup;
