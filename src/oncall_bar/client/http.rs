use super::OnCallClient;
use crate::credentials::Credentials;
use crate::error::{OncallError, Result};
use crate::model::TeamSchedule;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.victorops.com";

const API_ID_HEADER: &str = "X-VO-Api-Id";
const API_KEY_HEADER: &str = "X-VO-Api-Key";

/// VictorOps public API client.
///
/// One blocking GET per call, with the client's default timeout and no
/// retries: the next SwiftBar refresh is the retry.
pub struct HttpClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpClient {
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| OncallError::Config(format!("invalid base_url {:?}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(OncallError::Config(format!(
                "base_url {} cannot hold a path",
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("oncall-bar/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    fn schedule_url(&self, team_id: &str, days_forward: u32) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "api-public",
                "v2",
                "team",
                team_id,
                "oncall",
                "schedule",
            ]);
        }
        url.query_pairs_mut()
            .append_pair("daysForward", &days_forward.to_string());
        url
    }
}

impl OnCallClient for HttpClient {
    fn team_schedule(&self, team_id: &str, days_forward: u32) -> Result<TeamSchedule> {
        let url = self.schedule_url(team_id, days_forward);
        debug!(team = team_id, %url, "requesting on-call schedule");

        let response = self
            .client
            .get(url)
            .header(API_ID_HEADER, &self.credentials.api_id)
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        debug!(team = team_id, %status, "schedule response");
        if !status.is_success() {
            return Err(OncallError::ApiStatus {
                team: team_id.to_string(),
                status,
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|source| OncallError::Decode {
            team: team_id.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Credentials {
        Credentials::new("key-123", "id-456")
    }

    // The blocking client owns its own runtime, so it has to run off the
    // async test's worker threads.
    async fn fetch(base_url: String, team: &'static str) -> Result<TeamSchedule> {
        tokio::task::spawn_blocking(move || {
            HttpClient::new(&base_url, credentials())?.team_schedule(team, 30)
        })
        .await
        .unwrap()
    }

    #[test]
    fn test_schedule_url() {
        let client = HttpClient::new("https://api.victorops.com/", credentials()).unwrap();
        assert_eq!(
            client.schedule_url("team-abc", 7).as_str(),
            "https://api.victorops.com/api-public/v2/team/team-abc/oncall/schedule?daysForward=7"
        );
    }

    #[test]
    fn test_schedule_url_escapes_team_id() {
        let client = HttpClient::new("http://localhost:9000/proxy", credentials()).unwrap();
        assert_eq!(
            client.schedule_url("a/b c", 0).as_str(),
            "http://localhost:9000/proxy/api-public/v2/team/a%2Fb%20c/oncall/schedule?daysForward=0"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpClient::new("not a url", credentials()),
            Err(OncallError::Config(_))
        ));
        assert!(matches!(
            HttpClient::new("mailto:ops@example.com", credentials()),
            Err(OncallError::Config(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_sends_auth_headers_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api-public/v2/team/team-abc/oncall/schedule"))
            .and(query_param("daysForward", "30"))
            .and(header("X-VO-Api-Id", "id-456"))
            .and(header("X-VO-Api-Key", "key-123"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "team": {"name": "Platform", "slug": "team-abc"},
                "schedules": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let schedule = fetch(server.uri(), "team-abc").await.unwrap();
        assert_eq!(schedule.team.name, "Platform");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = fetch(server.uri(), "team-abc").await.unwrap_err();
        match err {
            OncallError::ApiStatus { team, status } => {
                assert_eq!(team, "team-abc");
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            }
            other => panic!("expected ApiStatus, got {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = fetch(server.uri(), "team-abc").await.unwrap_err();
        assert!(matches!(err, OncallError::Decode { team, .. } if team == "team-abc"));
    }

    #[test]
    fn test_connection_refused() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = HttpClient::new(&format!("http://127.0.0.1:{}", port), credentials()).unwrap();

        let err = client.team_schedule("team-abc", 30).unwrap_err();
        assert!(matches!(err, OncallError::Http(_)));
    }
}
