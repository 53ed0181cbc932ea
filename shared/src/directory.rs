use crate::error::{Error, ErrorCode, Result};
use crate::models::{AdminCredentials, Candidate};
use std::cell::Cell;

/// Read-only remote source of candidates and administrator credentials.
#[allow(async_fn_in_trait)]
pub trait Directory {
    async fn candidates(&self) -> Result<Vec<Candidate>>;
    async fn admin_credentials(&self) -> Result<AdminCredentials>;
}

/// Fixed in-memory directory. Either resource can be set to fail.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    candidates: Option<Vec<Candidate>>,
    credentials: Option<AdminCredentials>,
    candidate_fetches: Cell<usize>,
}

impl StaticDirectory {
    pub fn new(candidates: Vec<Candidate>, credentials: AdminCredentials) -> Self {
        Self {
            candidates: Some(candidates),
            credentials: Some(credentials),
            candidate_fetches: Cell::new(0),
        }
    }

    pub fn without_candidates(mut self) -> Self {
        self.candidates = None;
        self
    }

    pub fn without_credentials(mut self) -> Self {
        self.credentials = None;
        self
    }

    pub fn candidate_fetches(&self) -> usize {
        self.candidate_fetches.get()
    }
}

impl Directory for StaticDirectory {
    async fn candidates(&self) -> Result<Vec<Candidate>> {
        self.candidate_fetches.set(self.candidate_fetches.get() + 1);
        self.candidates.clone()
            .ok_or_else(|| Error::new(ErrorCode::FetchFailure, "Candidate list unavailable"))
    }

    async fn admin_credentials(&self) -> Result<AdminCredentials> {
        self.credentials.clone()
            .ok_or_else(|| Error::new(ErrorCode::FetchFailure, "Administrator record unavailable"))
    }
}
