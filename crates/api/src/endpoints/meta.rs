use reqwest::Response;

use crate::{ApiClient, ApiRequest, Result};

pub fn information() -> ApiRequest {
    ApiRequest::get("meta")
}

impl ApiClient {
    /// Buildkite meta information, such as the webhook source IP ranges.
    /// Does not require a scoped token.
    pub async fn get_meta_information(&self) -> Result<Response> {
        self.execute(information()).await
    }
}
