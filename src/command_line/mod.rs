//! Linker command-line parsing
//!
//! Text flows through [`assembler`] (line joining, launcher/tool extraction),
//! [`tokenizer`] (quote-aware splitting) and [`classify`] (flag grouping) to end up
//! as a sequence of typed [`Argument`]s.

pub mod argument;
pub mod assembler;
pub mod classify;
pub mod tokenizer;

pub use argument::Argument;
pub use assembler::{assemble, AssembledLine};
pub use classify::{classify, classify_group, group_tokens, Invocation};
pub use tokenizer::split_line;
