//! Racing facade

use std::sync::Arc;

use paddock_store::{RacesRepo, Result};

use crate::messages::{GetRaceRequest, GetRaceResponse, ListRacesRequest, ListRacesResponse};

/// Racing operations over any races repository
#[derive(Clone)]
pub struct RacingService {
    repo: Arc<dyn RacesRepo>,
}

impl RacingService {
    pub fn new(repo: Arc<dyn RacesRepo>) -> Self {
        Self { repo }
    }

    /// List races matching the request's filter
    ///
    /// An absent filter lists visible races in ascending start order.
    pub fn list_races(&self, request: ListRacesRequest) -> Result<ListRacesResponse> {
        tracing::debug!(has_filter = request.filter.is_some(), "list_races");
        let races = self.repo.list(request.filter)?;
        Ok(ListRacesResponse { races })
    }

    /// Fetch a single race by id
    ///
    /// # Errors
    ///
    /// `NotFound` when no race has `race_id`; storage and mapping failures
    /// as reported by the repository.
    pub fn get_race(&self, request: GetRaceRequest) -> Result<GetRaceResponse> {
        tracing::debug!(race_id = request.race_id, "get_race");
        let race = self.repo.get_by_id(request.race_id)?;
        Ok(GetRaceResponse { race })
    }
}
