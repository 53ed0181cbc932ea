pub mod error;
pub mod models;
pub mod tally;
pub mod store;
pub mod prompt;
pub mod directory;
pub mod messages;
pub mod session;
pub mod controller;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use tally::{Tally, TallyEntry, Winner};
pub use store::{KeyValueStore, MemoryStore};
pub use prompt::{Prompt, ScriptedPrompt};
pub use directory::{Directory, StaticDirectory};
pub use session::{BallotNotice, Chrome, LoginFields, LoginOutcome, RoundState, View, VoteReceipt, VoteRejection, VotingSession};
pub use controller::{CastError, Controller, Reload};
