pub mod cli;
pub mod credentials;
mod macros;
pub mod reporter;
pub mod sts;
pub mod types;
