//! Builds, addressed by pipeline-scoped build number.
//!
//! Filters such as `branch`, `commit`, `state` or `created_from` are passed
//! as [`Params`]; repeat a key with a `[]` suffix to filter on several
//! values.

use reqwest::Response;

use super::{build_path, organization_path, pipeline_path};
use crate::{ApiClient, ApiRequest, Params, Result};

pub fn list_all(params: Option<&Params>) -> ApiRequest {
    ApiRequest::get("builds").with_optional_params(params)
}

pub fn list_for_organization(org_slug: &str, params: Option<&Params>) -> ApiRequest {
    ApiRequest::get(format!("{}/builds", organization_path(org_slug))).with_optional_params(params)
}

pub fn list_for_pipeline(
    org_slug: &str,
    pipeline_slug: &str,
    params: Option<&Params>,
) -> ApiRequest {
    ApiRequest::get(format!("{}/builds", pipeline_path(org_slug, pipeline_slug)))
        .with_optional_params(params)
}

pub fn get(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    params: Option<&Params>,
) -> ApiRequest {
    ApiRequest::get(build_path(org_slug, pipeline_slug, build_number)).with_optional_params(params)
}

/// `commit` and `branch` go in the query string, not a JSON body.
pub fn create(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    params: Option<&Params>,
) -> ApiRequest {
    ApiRequest::post(build_path(org_slug, pipeline_slug, build_number))
        .with_optional_params(params)
}

pub fn cancel(org_slug: &str, pipeline_slug: &str, build_number: &str) -> ApiRequest {
    ApiRequest::put(format!(
        "{}/cancel",
        build_path(org_slug, pipeline_slug, build_number)
    ))
}

pub fn rebuild(org_slug: &str, pipeline_slug: &str, build_number: &str) -> ApiRequest {
    ApiRequest::put(format!(
        "{}/rebuild",
        build_path(org_slug, pipeline_slug, build_number)
    ))
}

impl ApiClient {
    /// Builds across every organization the token can see, newest first.
    pub async fn list_all_builds(&self, params: Option<&Params>) -> Result<Response> {
        self.execute(list_all(params)).await
    }

    pub async fn list_organization_builds(
        &self,
        org_slug: &str,
        params: Option<&Params>,
    ) -> Result<Response> {
        self.execute(list_for_organization(org_slug, params))
            .await
    }

    pub async fn list_pipeline_builds(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        params: Option<&Params>,
    ) -> Result<Response> {
        self.execute(list_for_pipeline(org_slug, pipeline_slug, params))
            .await
    }

    /// `include_retried_jobs=true` returns every job execution, not only the latest.
    pub async fn get_build(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        params: Option<&Params>,
    ) -> Result<Response> {
        self.execute(get(org_slug, pipeline_slug, build_number, params))
            .await
    }

    pub async fn create_build(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        params: Option<&Params>,
    ) -> Result<Response> {
        self.execute(create(org_slug, pipeline_slug, build_number, params))
            .await
    }

    /// Only builds in the `scheduled` or `running` state can be canceled.
    pub async fn cancel_build(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
    ) -> Result<Response> {
        self.execute(cancel(org_slug, pipeline_slug, build_number))
            .await
    }

    /// Starts a new build with the same commit, branch and message.
    pub async fn rebuild_build(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
    ) -> Result<Response> {
        self.execute(rebuild(org_slug, pipeline_slug, build_number))
            .await
    }
}
