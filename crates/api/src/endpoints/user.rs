use reqwest::Response;

use crate::{ApiClient, ApiRequest, Result};

pub fn current() -> ApiRequest {
    ApiRequest::get("user")
}

impl ApiClient {
    /// The user who owns the access token.
    pub async fn get_current_user(&self) -> Result<Response> {
        self.execute(current()).await
    }
}
