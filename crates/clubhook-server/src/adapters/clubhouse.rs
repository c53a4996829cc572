//! Clubhouse Member API client
//!
//! Resolves member ids to profiles using `GET /api/v3/members/{id}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use clubhook::{DomainError, Member, MemberLookup};

use super::USER_AGENT;

const TOKEN_HEADER: &str = "Clubhouse-Token";

/// HTTP implementation of MemberLookup
pub struct ClubhouseClient {
    client: Client,
    base_url: Url,
    api_token: String,
}

impl ClubhouseClient {
    pub fn new(
        base_url: Url,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_token: api_token.into(),
        })
    }

    fn member_url(&self, member_id: &str) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::Validation(format!(
                    "Clubhouse API URL cannot have a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "v3", "members", member_id]);
        Ok(url)
    }
}

#[async_trait]
impl MemberLookup for ClubhouseClient {
    async fn get_member(&self, member_id: &str) -> Result<Member, DomainError> {
        let url = self.member_url(member_id)?;
        tracing::debug!(member_id = %member_id, "Fetching Clubhouse member");

        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, self.api_token.as_str())
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Clubhouse API error: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DomainError::not_found("member", member_id));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(DomainError::ExternalService(format!(
                "Failed to get member {member_id}: {body:?} (status code: {})",
                status.as_u16()
            )));
        }

        response.json::<Member>().await.map_err(|e| {
            DomainError::ExternalService(format!("Invalid Clubhouse member response: {e}"))
        })
    }
}
