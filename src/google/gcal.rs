//! Google Calendar API calls made on behalf of the signed-in user

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::{GoogleClient, GoogleError, decode_response};

/// The only calendar the relay reads from or writes to
pub const PRIMARY_CALENDAR: &str = "primary";

/// A busy interval as reported by the freeBusy endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusyPeriod {
    pub start: String,
    pub end: String,
}

#[derive(Serialize)]
struct FreeBusyItem<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct FreeBusyQuery<'a> {
    #[serde(rename = "timeMin")]
    time_min: &'a str,
    #[serde(rename = "timeMax")]
    time_max: &'a str,
    items: Vec<FreeBusyItem<'a>>,
}

#[derive(Deserialize, Default)]
struct FreeBusyCalendar {
    #[serde(default)]
    busy: Vec<BusyPeriod>,
}

#[derive(Deserialize)]
struct FreeBusyResponse {
    #[serde(default)]
    calendars: HashMap<String, FreeBusyCalendar>,
}

impl GoogleClient {
    /// Insert an event into the primary calendar. The event is sent
    /// as-is and Google's response is returned with its status.
    pub async fn create_event(
        &self,
        access_token: &str,
        event: &Value,
    ) -> Result<(StatusCode, Value), GoogleError> {
        let url = self.api_url(&format!("/calendar/v3/calendars/{}/events", PRIMARY_CALENDAR));
        let res = self
            .http
            .post(url)
            .bearer_auth(access_token)
            .json(event)
            .send()
            .await?;
        decode_response(res, |status| {
            status == StatusCode::OK || status == StatusCode::CREATED
        })
        .await
    }

    /// Query the busy intervals of the primary calendar between
    /// `time_min` and `time_max`, in the order Google returns them.
    pub async fn free_busy(
        &self,
        access_token: &str,
        time_min: &str,
        time_max: &str,
    ) -> Result<Vec<BusyPeriod>, GoogleError> {
        let query = FreeBusyQuery {
            time_min,
            time_max,
            items: vec![FreeBusyItem {
                id: PRIMARY_CALENDAR,
            }],
        };
        let res = self
            .http
            .post(self.api_url("/calendar/v3/freeBusy"))
            .bearer_auth(access_token)
            .json(&query)
            .send()
            .await?;
        let (_, mut resp): (_, FreeBusyResponse) =
            decode_response(res, |status| status == StatusCode::OK).await?;

        Ok(resp
            .calendars
            .remove(PRIMARY_CALENDAR)
            .unwrap_or_default()
            .busy)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::google::GoogleConfig;

    fn test_client(server_url: &str) -> GoogleClient {
        let mut config = GoogleConfig::new("test_client_id", "test_secret", "http://localhost/cb");
        config.api_url = server_url.to_string();
        GoogleClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn it_forwards_the_event_unchanged() {
        let mut server = mockito::Server::new_async().await;
        let event = json!({
            "summary": "Haircut",
            "start": {"dateTime": "2024-01-01T10:00:00Z"},
            "end": {"dateTime": "2024-01-01T10:30:00Z"},
            "extendedProperties": {"private": {"booking": "42"}}
        });
        let mock = server
            .mock("POST", "/calendar/v3/calendars/primary/events")
            .match_header("authorization", "Bearer tok")
            .match_body(Matcher::Json(event.clone()))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "evt_1", "status": "confirmed"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let (status, created) = client.create_event("tok", &event).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], "evt_1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_rejects_unexpected_event_statuses() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/calendar/v3/calendars/primary/events")
            .with_status(202)
            .with_body("{}")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client.create_event("tok", &json!({})).await.unwrap_err();

        assert!(matches!(
            err,
            GoogleError::Status { status, .. } if status == StatusCode::ACCEPTED
        ));
    }

    #[tokio::test]
    async fn it_queries_the_primary_calendar() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/calendar/v3/freeBusy")
            .match_header("authorization", "Bearer tok")
            .match_body(Matcher::Json(json!({
                "timeMin": "2024-01-01T00:00:00Z",
                "timeMax": "2024-01-02T00:00:00Z",
                "items": [{"id": "primary"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "kind": "calendar#freeBusy",
                    "calendars": {
                        "primary": {
                            "busy": [
                                {"start": "2024-01-01T09:00:00Z", "end": "2024-01-01T10:00:00Z"},
                                {"start": "2024-01-01T13:00:00Z", "end": "2024-01-01T14:00:00Z"}
                            ]
                        }
                    }
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let busy = client
            .free_busy("tok", "2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z")
            .await
            .unwrap();

        assert_eq!(
            busy,
            vec![
                BusyPeriod {
                    start: "2024-01-01T09:00:00Z".to_string(),
                    end: "2024-01-01T10:00:00Z".to_string(),
                },
                BusyPeriod {
                    start: "2024-01-01T13:00:00Z".to_string(),
                    end: "2024-01-01T14:00:00Z".to_string(),
                },
            ]
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_treats_a_missing_calendar_as_free() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/calendar/v3/freeBusy")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"kind": "calendar#freeBusy"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let busy = client
            .free_busy("tok", "2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z")
            .await
            .unwrap();

        assert!(busy.is_empty());
    }
}
