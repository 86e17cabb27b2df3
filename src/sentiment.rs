//! Client for the external comment-sentiment classifier.
//!
//! The classifier is an opaque synchronous service: one comment in, one
//! label out. No retries here; the caller owns the failure policy.

use serde::{Deserialize, Serialize};

use crate::domain::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Positive" => Some(SentimentLabel::Positive),
            "Negative" => Some(SentimentLabel::Negative),
            "Neutral" => Some(SentimentLabel::Neutral),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct SentimentClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    comment: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    label: String,
}

impl SentimentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn classify(&self, comment: &str) -> Result<SentimentLabel, ServiceError> {
        let url = format!("{}/classify", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ClassifyRequest { comment })
            .send()
            .await
            .map_err(|e| ServiceError::External(format!("sentiment classifier unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(ServiceError::External(format!(
                "sentiment classifier returned {}",
                response.status()
            )));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::External(format!("sentiment classifier response: {}", e)))?;

        SentimentLabel::parse(&body.label)
            .ok_or_else(|| ServiceError::External(format!("unknown sentiment label: {}", body.label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ] {
            assert_eq!(SentimentLabel::parse(label.as_str()), Some(label));
        }
        assert_eq!(SentimentLabel::parse("meh"), None);
    }
}
