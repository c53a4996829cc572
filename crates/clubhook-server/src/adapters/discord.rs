//! Discord webhook sink
//!
//! Posts translated messages to a Discord "Execute Webhook" URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use clubhook::{DiscordMessage, DomainError, MessageSink};

use super::USER_AGENT;

/// HTTP implementation of MessageSink
pub struct DiscordWebhook {
    client: Client,
    url: Url,
}

impl DiscordWebhook {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl MessageSink for DiscordWebhook {
    async fn send(&self, message: &DiscordMessage) -> Result<(), DomainError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(message)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Discord webhook error: {e}")))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Discord webhook responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(format!(
                "Discord webhook rejected message: {body:?} (status code: {})",
                status.as_u16()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhook::{Embed, EmbedField};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> DiscordMessage {
        DiscordMessage::with_embed(Embed {
            title: "Created story: Fix login bug".to_string(),
            url: "https://app.clubhouse.io/acme/story/13".to_string(),
            description: String::new(),
            color: 5424154,
            fields: vec![EmbedField::inline("Type", "bug")],
        })
    }

    fn sink(server: &MockServer) -> DiscordWebhook {
        let url = Url::parse(&format!("{}/api/webhooks/1/abc", server.uri())).unwrap();
        DiscordWebhook::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/webhooks/1/abc"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::to_value(message()).unwrap()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        sink(&server).send(&message()).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid Form Body"))
            .mount(&server)
            .await;

        let err = sink(&server).send(&message()).await.unwrap_err();
        match err {
            DomainError::ExternalService(msg) => {
                assert!(msg.contains("Invalid Form Body"));
                assert!(msg.contains("400"));
            }
            other => panic!("Expected ExternalService, got {other:?}"),
        }
    }
}
