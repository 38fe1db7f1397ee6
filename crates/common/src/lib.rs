//! Cross-crate helpers shared by the server crate and the binary.

pub mod utils;
