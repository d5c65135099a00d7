//! # Hitchart
//!
//! An interactive query shell for a small chart dataset of artists and
//! their songs. Commands are validated against a fixed grammar, routed
//! to the read-only query layer in `hitchart-core`, and rendered as
//! line-oriented text.

pub mod parser;
pub mod presenter;
pub mod repl;
pub mod session;
