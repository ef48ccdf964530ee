pub mod command;
pub mod extractor;
pub mod ledger;
pub mod transcript;

pub use command::{Command, Response, SessionController};
pub use extractor::Candidate;
pub use ledger::Ledger;
