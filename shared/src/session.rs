use crate::error::Result;
use crate::messages;
use crate::models::{AdminCredentials, Candidate};
use crate::prompt::Prompt;
use crate::store::{keys, KeyValueStore};
use crate::tally::{Tally, TallyEntry, Winner};
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Closed,
    OpenNotVoted,
    OpenVoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallotNotice {
    VotingClosed,
    AlreadyVoted,
}

impl BallotNotice {
    pub fn message(self) -> &'static str {
        match self {
            BallotNotice::VotingClosed => messages::VOTING_INACTIVE,
            BallotNotice::AlreadyVoted => messages::ALREADY_VOTED_NOTICE,
        }
    }
}

/// Contents of the main region. Each render replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Blank,
    Ballot {
        candidates: Vec<Candidate>,
        can_vote: bool,
        notice: Option<BallotNotice>,
    },
    AdminPanel { results: Vec<TallyEntry> },
    Winner(Option<Winner>),
}

/// Visibility and enablement of the controls around the main region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub login_button_visible: bool,
    pub login_form_visible: bool,
    pub admin_controls_visible: bool,
    pub start_enabled: bool,
    pub stop_enabled: bool,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum VoteRejection {
    #[error("Voting is closed")]
    VotingClosed,
    #[error("This browser has already voted")]
    AlreadyVoted,
    #[error("Vote cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub candidate: String,
    pub votes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    Denied,
    Unavailable,
}

/// Contents of the login form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub username: String,
    pub password: String,
}

impl LoginFields {
    /// What a submit sends: both inputs with surrounding whitespace removed.
    pub fn submission(&self) -> (String, String) {
        (self.username.trim().to_string(), self.password.trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }

    fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

/// Vote and round state for one browser. Constructed on page load from the
/// persisted flags, mutated only by the event handlers below.
pub struct VotingSession<S, P> {
    store: S,
    prompt: P,
    tally: Tally,
    has_voted: bool,
    admin: bool,
    chrome: Chrome,
    login: LoginFields,
    view: View,
}

impl<S: KeyValueStore, P: Prompt> VotingSession<S, P> {
    pub fn new(store: S, prompt: P) -> Self {
        let tally = match store.get(keys::TALLY) {
            Some(raw) => Tally::from_json(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable stored tally: {}", e);
                Tally::new()
            }),
            None => Tally::new(),
        };
        let has_voted = store.get_flag(keys::HAS_VOTED);
        let voting_open = store.get_flag(keys::VOTING_OPEN);

        Self {
            store,
            prompt,
            tally,
            has_voted,
            admin: false,
            chrome: Chrome {
                login_button_visible: true,
                login_form_visible: false,
                admin_controls_visible: false,
                start_enabled: !voting_open,
                stop_enabled: voting_open,
            },
            login: LoginFields::default(),
            view: View::Blank,
        }
    }

    pub fn voting_open(&self) -> bool {
        self.store.get_flag(keys::VOTING_OPEN)
    }

    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn round_state(&self) -> RoundState {
        match (self.voting_open(), self.store.get_flag(keys::HAS_VOTED)) {
            (false, _) => RoundState::Closed,
            (true, false) => RoundState::OpenNotVoted,
            (true, true) => RoundState::OpenVoted,
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    pub fn login_fields(&self) -> &LoginFields {
        &self.login
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn render_candidates(&mut self, candidates: Vec<Candidate>) {
        let added = candidates.iter()
            .filter(|c| self.tally.ensure(&c.name))
            .count();

        let voting_open = self.voting_open();
        self.has_voted = self.store.get_flag(keys::HAS_VOTED);

        let notice = if !voting_open {
            Some(BallotNotice::VotingClosed)
        } else if self.has_voted {
            Some(BallotNotice::AlreadyVoted)
        } else {
            None
        };

        debug!(candidates = candidates.len(), added, voting_open, has_voted = self.has_voted, "Rendering ballot");
        self.view = View::Ballot {
            candidates,
            can_vote: voting_open && !self.has_voted,
            notice,
        };
    }

    /// Flags are re-read from the store so a stale view cannot vote twice.
    pub fn cast_vote(&mut self, candidate: &str) -> std::result::Result<VoteReceipt, VoteRejection> {
        if !self.store.get_flag(keys::VOTING_OPEN) {
            warn!(candidate, "Vote rejected: voting closed");
            self.prompt.notify(messages::VOTING_CLOSED_ALERT);
            return Err(VoteRejection::VotingClosed);
        }
        if self.store.get_flag(keys::HAS_VOTED) {
            warn!(candidate, "Vote rejected: already voted");
            self.prompt.notify(messages::ALREADY_VOTED_ALERT);
            return Err(VoteRejection::AlreadyVoted);
        }
        if !self.prompt.confirm(&messages::confirm_vote(candidate)) {
            debug!(candidate, "Vote cancelled");
            return Err(VoteRejection::Cancelled);
        }

        let votes = self.tally.increment(candidate);
        match self.tally.to_json() {
            Ok(json) => self.store.set(keys::TALLY, &json),
            Err(e) => error!(candidate, "Tally could not be serialized, stored copy left as is: {}", e),
        }
        self.store.set_flag(keys::HAS_VOTED, true);
        self.has_voted = true;

        info!(candidate, votes, "Vote recorded");
        self.prompt.notify(&messages::vote_recorded(candidate));
        Ok(VoteReceipt { candidate: candidate.to_string(), votes })
    }

    pub fn show_login_form(&mut self) {
        self.chrome.login_form_visible = true;
    }

    pub fn cancel_login_form(&mut self) {
        self.chrome.login_form_visible = false;
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.login.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.login.password = value.into();
    }

    /// Applies the fetched credential record to a login attempt. The login
    /// inputs are cleared whatever the outcome.
    pub fn complete_admin_login(
        &mut self,
        record: Result<AdminCredentials>,
        username: &str,
        password: &str,
    ) -> LoginOutcome {
        let outcome = self.check_credentials(record, username, password);
        self.login.clear();
        outcome
    }

    fn check_credentials(
        &mut self,
        record: Result<AdminCredentials>,
        username: &str,
        password: &str,
    ) -> LoginOutcome {
        match record {
            Ok(credentials) if credentials.matches(username, password) => {
                self.admin = true;
                self.chrome.login_form_visible = false;
                self.chrome.login_button_visible = false;
                self.chrome.admin_controls_visible = true;
                self.sync_round_controls();
                self.view = View::AdminPanel { results: self.tally.entries().to_vec() };
                info!("Administrator signed in");
                LoginOutcome::Granted
            }
            Ok(_) => {
                warn!("Administrator sign-in rejected");
                self.prompt.notify(messages::WRONG_CREDENTIALS);
                self.chrome.login_button_visible = true;
                LoginOutcome::Denied
            }
            Err(e) => {
                warn!("Administrator record unavailable: {}", e);
                self.prompt.notify(messages::CREDENTIALS_UNAVAILABLE);
                self.chrome.login_button_visible = true;
                LoginOutcome::Unavailable
            }
        }
    }

    /// First half of logout; runs before the candidate reload.
    pub fn end_admin_session(&mut self) {
        self.admin = false;
        self.chrome.admin_controls_visible = false;
        self.chrome.login_button_visible = true;
        info!("Administrator signed out");
    }

    /// Second half of logout. A closed round shows its winner and is wiped;
    /// an open round goes back to the ballot.
    pub fn show_round_outcome(&mut self, candidates: Vec<Candidate>) {
        if self.voting_open() {
            self.render_candidates(candidates);
            return;
        }

        let winner = self.tally.winner();
        match &winner {
            Some(w) => info!(winner = %w.name, votes = w.votes, "Round closed"),
            None => info!("Round closed with no votes"),
        }
        self.view = View::Winner(winner);
        self.reset_round();
    }

    pub fn start_voting(&mut self) {
        self.store.set_flag(keys::VOTING_OPEN, true);
        self.store.set_flag(keys::HAS_VOTED, false);
        self.has_voted = false;
        self.sync_round_controls();
        info!("Voting started");
        self.prompt.notify(messages::VOTING_STARTED);
    }

    pub fn stop_voting(&mut self) {
        self.store.set_flag(keys::VOTING_OPEN, false);
        self.sync_round_controls();
        info!("Voting stopped");
        self.prompt.notify(messages::VOTING_STOPPED);
    }

    fn sync_round_controls(&mut self) {
        let open = self.voting_open();
        self.chrome.start_enabled = !open;
        self.chrome.stop_enabled = open;
    }

    fn reset_round(&mut self) {
        self.tally.clear();
        self.store.remove(keys::TALLY);
        self.store.set_flag(keys::HAS_VOTED, false);
        self.has_voted = false;
    }
}
