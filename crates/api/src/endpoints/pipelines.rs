//! Pipeline management.
//!
//! Pipeline definitions are passed through as JSON; any `Serialize` value
//! works, `serde_json::Value` included. A YAML pipeline carries its steps as
//! a string under the `configuration` key:
//!
//! ```
//! use serde_json::json;
//!
//! let definition = json!({
//!     "name": "My Pipeline",
//!     "repository": "git@github.com:acme-inc/my-pipeline.git",
//!     "configuration": "steps:\n - command: \"script/release.sh\"\n   name: \"Build :package:\"",
//! });
//! let request = buildkite_api::endpoints::pipelines::create_yaml("acme", &definition).unwrap();
//! assert_eq!(request.method(), "POST");
//! ```

use reqwest::Response;
use serde::Serialize;

use super::{organization_path, pipeline_path};
use crate::{ApiClient, ApiRequest, Result};

pub fn list(org_slug: &str) -> ApiRequest {
    ApiRequest::get(format!("{}/pipelines", organization_path(org_slug)))
}

pub fn get(org_slug: &str, pipeline_slug: &str) -> ApiRequest {
    ApiRequest::get(pipeline_path(org_slug, pipeline_slug))
}

pub fn create_yaml<B: Serialize + ?Sized>(org_slug: &str, definition: &B) -> Result<ApiRequest> {
    ApiRequest::post(format!("{}/pipelines", organization_path(org_slug))).with_json(definition)
}

/// Same endpoint as [`create_yaml`]; the definition carries a `steps` array
/// instead of a `configuration` string.
pub fn create_visual_step<B: Serialize + ?Sized>(
    org_slug: &str,
    definition: &B,
) -> Result<ApiRequest> {
    ApiRequest::post(format!("{}/pipelines", organization_path(org_slug))).with_json(definition)
}

pub fn update<B: Serialize + ?Sized>(
    org_slug: &str,
    pipeline_slug: &str,
    definition: &B,
) -> Result<ApiRequest> {
    ApiRequest::patch(pipeline_path(org_slug, pipeline_slug)).with_json(definition)
}

pub fn archive(org_slug: &str, pipeline_slug: &str) -> ApiRequest {
    ApiRequest::post(format!("{}/archive", pipeline_path(org_slug, pipeline_slug)))
}

pub fn unarchive(org_slug: &str, pipeline_slug: &str) -> ApiRequest {
    ApiRequest::post(format!("{}/unarchive", pipeline_path(org_slug, pipeline_slug)))
}

pub fn delete(org_slug: &str, pipeline_slug: &str) -> ApiRequest {
    ApiRequest::delete(pipeline_path(org_slug, pipeline_slug))
}

pub fn add_webhook(org_slug: &str, pipeline_slug: &str) -> ApiRequest {
    ApiRequest::post(format!("{}/webhook", pipeline_path(org_slug, pipeline_slug)))
}

impl ApiClient {
    pub async fn list_pipelines(&self, org_slug: &str) -> Result<Response> {
        self.execute(list(org_slug)).await
    }

    pub async fn get_pipeline(&self, org_slug: &str, pipeline_slug: &str) -> Result<Response> {
        self.execute(get(org_slug, pipeline_slug)).await
    }

    pub async fn create_yaml_pipeline<B: Serialize + ?Sized>(
        &self,
        org_slug: &str,
        definition: &B,
    ) -> Result<Response> {
        self.execute(create_yaml(org_slug, definition)?).await
    }

    pub async fn create_visual_step_pipeline<B: Serialize + ?Sized>(
        &self,
        org_slug: &str,
        definition: &B,
    ) -> Result<Response> {
        self.execute(create_visual_step(org_slug, definition)?)
            .await
    }

    /// Only the fields present in `definition` are changed.
    pub async fn update_pipeline<B: Serialize + ?Sized>(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        definition: &B,
    ) -> Result<Response> {
        self.execute(update(org_slug, pipeline_slug, definition)?)
            .await
    }

    /// Archived pipelines are read-only and hidden from the dashboard.
    pub async fn archive_pipeline(&self, org_slug: &str, pipeline_slug: &str) -> Result<Response> {
        self.execute(archive(org_slug, pipeline_slug)).await
    }

    pub async fn unarchive_pipeline(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
    ) -> Result<Response> {
        self.execute(unarchive(org_slug, pipeline_slug)).await
    }

    pub async fn delete_pipeline(&self, org_slug: &str, pipeline_slug: &str) -> Result<Response> {
        self.execute(delete(org_slug, pipeline_slug)).await
    }

    /// Creates the GitHub webhook for a pipeline whose repository is hosted
    /// on GitHub.
    pub async fn add_webhook(&self, org_slug: &str, pipeline_slug: &str) -> Result<Response> {
        self.execute(add_webhook(org_slug, pipeline_slug)).await
    }
}
