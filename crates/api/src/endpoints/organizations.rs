use reqwest::Response;

use super::organization_path;
use crate::{ApiClient, ApiRequest, Result};

pub fn list() -> ApiRequest {
    ApiRequest::get("organizations")
}

pub fn get(org_slug: &str) -> ApiRequest {
    ApiRequest::get(organization_path(org_slug))
}

impl ApiClient {
    /// Organizations the token has access to.
    pub async fn list_organizations(&self) -> Result<Response> {
        self.execute(list()).await
    }

    pub async fn get_organization(&self, org_slug: &str) -> Result<Response> {
        self.execute(get(org_slug)).await
    }
}
