//! Interactive questionnaire session

mod repl;

pub use repl::{LineReader, SessionError, SessionRepl};
