use super::OnCallClient;
use crate::error::{OncallError, Result};
use crate::model::TeamSchedule;
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Canned {
    Schedule(TeamSchedule),
    Status(StatusCode),
}

/// An [`OnCallClient`] that answers from canned responses.
///
/// Teams without a canned response get a 404, the same as an unknown team
/// slug on the real API. Every call is recorded, see [`InMemoryClient::requests`].
#[derive(Debug, Default)]
pub struct InMemoryClient {
    responses: HashMap<String, Canned>,
    requests: RefCell<Vec<(String, u32)>>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(mut self, team_id: impl Into<String>, schedule: TeamSchedule) -> Self {
        self.responses
            .insert(team_id.into(), Canned::Schedule(schedule));
        self
    }

    pub fn with_status(mut self, team_id: impl Into<String>, status: StatusCode) -> Self {
        self.responses.insert(team_id.into(), Canned::Status(status));
        self
    }

    /// `(team_id, days_forward)` for every call made so far, in call order.
    pub fn requests(&self) -> Vec<(String, u32)> {
        self.requests.borrow().clone()
    }
}

impl OnCallClient for InMemoryClient {
    fn team_schedule(&self, team_id: &str, days_forward: u32) -> Result<TeamSchedule> {
        self.requests
            .borrow_mut()
            .push((team_id.to_string(), days_forward));

        match self.responses.get(team_id) {
            Some(Canned::Schedule(schedule)) => Ok(schedule.clone()),
            Some(Canned::Status(status)) => Err(OncallError::ApiStatus {
                team: team_id.to_string(),
                status: *status,
            }),
            None => Err(OncallError::ApiStatus {
                team: team_id.to_string(),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::fixtures::single_user_schedule;
    use super::*;

    #[test]
    fn returns_canned_schedule() {
        let client =
            InMemoryClient::new().with_schedule("t1", single_user_schedule("T1", "alice", None));

        let schedule = client.team_schedule("t1", 30).unwrap();
        assert_eq!(schedule.team.name, "T1");
    }

    #[test]
    fn returns_canned_status() {
        let client = InMemoryClient::new().with_status("t1", StatusCode::BAD_GATEWAY);

        let err = client.team_schedule("t1", 30).unwrap_err();
        assert!(matches!(
            err,
            OncallError::ApiStatus { status, .. } if status == StatusCode::BAD_GATEWAY
        ));
    }

    #[test]
    fn unknown_team_is_not_found() {
        let client = InMemoryClient::new();

        let err = client.team_schedule("nope", 30).unwrap_err();
        assert!(matches!(
            err,
            OncallError::ApiStatus { status, .. } if status == StatusCode::NOT_FOUND
        ));
    }

    #[test]
    fn records_requests_in_order() {
        let client = InMemoryClient::new();
        let _ = client.team_schedule("b", 7);
        let _ = client.team_schedule("a", 30);

        assert_eq!(
            client.requests(),
            vec![("b".to_string(), 7), ("a".to_string(), 30)]
        );
    }
}
