use reqwest::Response;

use super::organization_path;
use crate::{ApiClient, ApiRequest, Result};

pub fn list(org_slug: &str) -> ApiRequest {
    ApiRequest::get(format!("{}/emojis", organization_path(org_slug)))
}

impl ApiClient {
    /// Custom and built-in emojis available to the organization.
    pub async fn list_emojis(&self, org_slug: &str) -> Result<Response> {
        self.execute(list(org_slug)).await
    }
}
