//! Analytics endpoint.

use case_auth::StaffSession;
use case_core::entities::CaseAnalytics;
use case_core::enums::TimeRange;

use crate::error::ApiError;
use crate::http::{check_response, ensure_live};
use crate::ApiClient;

impl ApiClient {
    /// Fetch aggregate case metrics: `GET /api/admin/analytics`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the session is dead, the request fails, or
    /// the response cannot be parsed.
    pub async fn fetch_analytics(
        &self,
        session: &StaffSession,
        range: TimeRange,
    ) -> Result<CaseAnalytics, ApiError> {
        ensure_live(session)?;
        let resp = self
            .http
            .get(self.url("/api/admin/analytics"))
            .bearer_auth(&session.raw_token)
            .query(&[("time_range", range.as_str())])
            .send()
            .await?;
        let resp = check_response(resp).await?;

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use case_core::enums::CaseStatus;

    use crate::http::testing::live_session;

    #[tokio::test]
    async fn fetch_sends_range_and_parses_aggregate() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/analytics"))
            .and(query_param("time_range", "90d"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "time_range": "90d",
                "total_cases": 128,
                "status_counts": [
                    { "status": "Submitted", "count": 40 },
                    { "status": "Initial questionnaire", "count": 88 }
                ],
                "average_ai_score": 74.5,
                "total_estimated_amount": 512000.0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), 5);
        let analytics = client
            .fetch_analytics(&live_session(), TimeRange::Quarter)
            .await
            .unwrap();

        assert_eq!(analytics.time_range, TimeRange::Quarter);
        assert_eq!(analytics.total_cases, 128);
        assert_eq!(analytics.status_counts.len(), 2);
        assert_eq!(analytics.status_counts[0].status, CaseStatus::Submitted);
        assert_eq!(analytics.average_ai_score, Some(74.5));
    }

    #[tokio::test]
    async fn sparse_payload_fills_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/analytics"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "total_cases": 3 })),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), 5);
        let analytics = client
            .fetch_analytics(&live_session(), TimeRange::Month)
            .await
            .unwrap();

        assert_eq!(analytics.total_cases, 3);
        assert!(analytics.status_counts.is_empty());
        assert!(analytics.average_ai_score.is_none());
        assert_eq!(analytics.total_estimated_amount, 0.0);
    }
}
