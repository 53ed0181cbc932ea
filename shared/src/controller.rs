use crate::directory::Directory;
use crate::error::{Error, Result};
use crate::models::{AdminCredentials, Candidate};
use crate::prompt::Prompt;
use crate::session::{LoginOutcome, VoteReceipt, VoteRejection, VotingSession};
use crate::store::KeyValueStore;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum CastError {
    #[error(transparent)]
    Rejected(#[from] VoteRejection),
    #[error("Vote recorded but candidates could not be reloaded: {0}")]
    Reload(Error),
}

/// What a freshly fetched candidate list is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    Ballot,
    RoundOutcome,
}

/// Drives a [`VotingSession`] through the handlers that wait on the directory.
///
/// Each async handler is a synchronous `begin_*` step, a fetch, and an
/// `apply_*` step. Event-loop drivers that cannot hold `&mut self` across the
/// fetch call the steps directly and do the fetch themselves.
pub struct Controller<S, P, D> {
    session: VotingSession<S, P>,
    directory: D,
}

impl<S: KeyValueStore, P: Prompt, D: Directory> Controller<S, P, D> {
    pub fn new(session: VotingSession<S, P>, directory: D) -> Self {
        Self { session, directory }
    }

    pub fn session(&self) -> &VotingSession<S, P> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut VotingSession<S, P> {
        &mut self.session
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub async fn load_candidates(&self) -> Result<Vec<Candidate>> {
        self.directory.candidates().await
    }

    /// Page-load entry point. A failed load is left to the caller.
    pub async fn start(&mut self) -> Result<()> {
        let loaded = self.load_candidates().await;
        self.apply_candidates(loaded, Reload::Ballot)
    }

    pub async fn cast_vote(&mut self, candidate: &str) -> std::result::Result<VoteReceipt, CastError> {
        let receipt = self.begin_vote(candidate)?;
        let loaded = self.load_candidates().await;
        self.apply_candidates(loaded, Reload::Ballot)
            .map_err(CastError::Reload)?;
        Ok(receipt)
    }

    pub async fn admin_login(&mut self, username: &str, password: &str) -> LoginOutcome {
        let record = self.directory.admin_credentials().await;
        self.apply_credentials(record, username, password)
    }

    pub async fn admin_logout(&mut self) -> Result<()> {
        self.begin_logout();
        let loaded = self.load_candidates().await;
        self.apply_candidates(loaded, Reload::RoundOutcome)
    }

    /// Records the vote. On success the caller reloads with [`Reload::Ballot`].
    pub fn begin_vote(&mut self, candidate: &str) -> std::result::Result<VoteReceipt, VoteRejection> {
        self.session.cast_vote(candidate)
    }

    /// Ends the admin session. The caller reloads with [`Reload::RoundOutcome`].
    pub fn begin_logout(&mut self) {
        self.session.end_admin_session();
    }

    /// A failed load leaves the current view in place and is handed back.
    pub fn apply_candidates(&mut self, loaded: Result<Vec<Candidate>>, reload: Reload) -> Result<()> {
        let candidates = loaded.map_err(|e| {
            error!(?reload, "Candidate list could not be loaded: {}", e);
            e
        })?;
        match reload {
            Reload::Ballot => self.session.render_candidates(candidates),
            Reload::RoundOutcome => self.session.show_round_outcome(candidates),
        }
        Ok(())
    }

    pub fn apply_credentials(&mut self, record: Result<AdminCredentials>, username: &str, password: &str) -> LoginOutcome {
        self.session.complete_admin_login(record, username, password)
    }

    pub fn start_voting(&mut self) {
        self.session.start_voting();
    }

    pub fn stop_voting(&mut self) {
        self.session.stop_voting();
    }
}
