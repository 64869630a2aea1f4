use reqwest::Response;

use super::job_path;
use crate::{ApiClient, ApiRequest, Params, Result};

pub fn retry(org_slug: &str, pipeline_slug: &str, build_number: &str, job_id: &str) -> ApiRequest {
    ApiRequest::put(format!(
        "{}/retry",
        job_path(org_slug, pipeline_slug, build_number, job_id)
    ))
}

/// `unblocker` and block step `fields` are sent as query parameters.
pub fn unblock(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    job_id: &str,
    params: Option<&Params>,
) -> ApiRequest {
    ApiRequest::put(format!(
        "{}/unblock",
        job_path(org_slug, pipeline_slug, build_number, job_id)
    ))
    .with_optional_params(params)
}

pub fn log(org_slug: &str, pipeline_slug: &str, build_number: &str, job_id: &str) -> ApiRequest {
    ApiRequest::get(format!(
        "{}/log",
        job_path(org_slug, pipeline_slug, build_number, job_id)
    ))
}

pub fn delete_log(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    job_id: &str,
) -> ApiRequest {
    ApiRequest::delete(format!(
        "{}/log",
        job_path(org_slug, pipeline_slug, build_number, job_id)
    ))
}

pub fn env_vars(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    job_id: &str,
) -> ApiRequest {
    ApiRequest::get(format!(
        "{}/env",
        job_path(org_slug, pipeline_slug, build_number, job_id)
    ))
}

impl ApiClient {
    /// Retries a failed or timed out job.
    pub async fn retry_job(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        job_id: &str,
    ) -> Result<Response> {
        self.execute(retry(org_slug, pipeline_slug, build_number, job_id))
            .await
    }

    /// Unblocks a "Block pipeline" job. Check the job's `unblockable`
    /// property first.
    pub async fn unblock_job(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        job_id: &str,
        params: Option<&Params>,
    ) -> Result<Response> {
        self.execute(unblock(
            org_slug,
            pipeline_slug,
            build_number,
            job_id,
            params,
        ))
        .await
    }

    pub async fn get_job_log(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        job_id: &str,
    ) -> Result<Response> {
        self.execute(log(org_slug, pipeline_slug, build_number, job_id))
            .await
    }

    pub async fn delete_job_log(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        job_id: &str,
    ) -> Result<Response> {
        self.execute(delete_log(org_slug, pipeline_slug, build_number, job_id))
            .await
    }

    pub async fn get_job_env_vars(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        job_id: &str,
    ) -> Result<Response> {
        self.execute(env_vars(org_slug, pipeline_slug, build_number, job_id))
            .await
    }
}
