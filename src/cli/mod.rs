pub mod repl;
pub mod style;

pub use repl::{Repl, Step};
