//! Inspect or revoke the token the client authenticates with.

use reqwest::Response;

use crate::{ApiClient, ApiRequest, Result};

const PATH: &str = "access-token";

pub fn get_current() -> ApiRequest {
    ApiRequest::get(PATH)
}

pub fn revoke_current() -> ApiRequest {
    ApiRequest::delete(PATH)
}

impl ApiClient {
    /// Details about the token used to authenticate the request.
    pub async fn get_current_token(&self) -> Result<Response> {
        self.execute(get_current()).await
    }

    /// Revokes the token used to authenticate the request. The client is
    /// unusable against the API afterwards.
    pub async fn revoke_current_token(&self) -> Result<Response> {
        self.execute(revoke_current()).await
    }
}
