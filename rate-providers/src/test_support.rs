//! Test doubles shared by the adapter tests.

use std::collections::HashMap;
use std::sync::Mutex;

use fxquote_types::{JsonTransport, ProviderError};

/// A recorded outbound call: URL plus query pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    pub query: Vec<(String, String)>,
}

/// Simple in-memory transport with canned responses keyed by URL.
pub struct MockTransport {
    responses: Mutex<HashMap<String, Result<serde_json::Value, ProviderError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(self, url: &str, body: serde_json::Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(body));
        self
    }

    pub fn fail(self, url: &str, err: ProviderError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl JsonTransport for MockTransport {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(Err(ProviderError::Status(404)))
    }
}
