//! Sports facade

use std::sync::Arc;

use paddock_store::{MatchesRepo, Result};

use crate::messages::{
    GetMatchRequest, GetMatchResponse, ListMatchesRequest, ListMatchesResponse,
};

/// Sports operations over any matches repository
#[derive(Clone)]
pub struct SportsService {
    repo: Arc<dyn MatchesRepo>,
}

impl SportsService {
    pub fn new(repo: Arc<dyn MatchesRepo>) -> Self {
        Self { repo }
    }

    pub fn list_matches(&self, request: ListMatchesRequest) -> Result<ListMatchesResponse> {
        tracing::debug!(has_filter = request.filter.is_some(), "list_matches");
        let matches = self.repo.list(request.filter)?;
        Ok(ListMatchesResponse { matches })
    }

    /// # Errors
    ///
    /// `NotFound` when no match has `match_id`.
    pub fn get_match(&self, request: GetMatchRequest) -> Result<GetMatchResponse> {
        tracing::debug!(match_id = request.match_id, "get_match");
        let found = self.repo.get_by_id(request.match_id)?;
        Ok(GetMatchResponse { r#match: found })
    }
}
