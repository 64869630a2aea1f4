use reqwest::Response;

use super::organization_path;
use crate::{ApiClient, ApiRequest, Params, Result};

fn agent_path(org_slug: &str, agent_id: &str) -> String {
    format!("{}/agents/{agent_id}", organization_path(org_slug))
}

/// Filters include `name`, `hostname` and `version`.
pub fn list(org_slug: &str, params: Option<&Params>) -> ApiRequest {
    ApiRequest::get(format!("{}/agents", organization_path(org_slug))).with_optional_params(params)
}

pub fn get(org_slug: &str, agent_id: &str) -> ApiRequest {
    ApiRequest::get(agent_path(org_slug, agent_id))
}

pub fn stop(org_slug: &str, agent_id: &str, params: Option<&Params>) -> ApiRequest {
    ApiRequest::put(format!("{}/stop", agent_path(org_slug, agent_id)))
        .with_optional_params(params)
}

impl ApiClient {
    pub async fn list_agents(&self, org_slug: &str, params: Option<&Params>) -> Result<Response> {
        self.execute(list(org_slug, params)).await
    }

    pub async fn get_agent(&self, org_slug: &str, agent_id: &str) -> Result<Response> {
        self.execute(get(org_slug, agent_id)).await
    }

    /// The API defaults to `force=true`, canceling any job the agent is running.
    pub async fn stop_agent(
        &self,
        org_slug: &str,
        agent_id: &str,
        params: Option<&Params>,
    ) -> Result<Response> {
        self.execute(stop(org_slug, agent_id, params)).await
    }
}
