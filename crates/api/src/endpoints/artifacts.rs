//! Files uploaded by agents while running a job.

use reqwest::Response;

use super::{build_path, job_path};
use crate::{ApiClient, ApiRequest, Result};

fn artifact_path(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    job_id: &str,
    artifact_id: &str,
) -> String {
    format!(
        "{}/artifacts/{artifact_id}",
        job_path(org_slug, pipeline_slug, build_number, job_id)
    )
}

pub fn list_for_build(org_slug: &str, pipeline_slug: &str, build_number: &str) -> ApiRequest {
    ApiRequest::get(format!(
        "{}/artifacts",
        build_path(org_slug, pipeline_slug, build_number)
    ))
}

pub fn list_for_job(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    job_id: &str,
) -> ApiRequest {
    ApiRequest::get(format!(
        "{}/artifacts",
        job_path(org_slug, pipeline_slug, build_number, job_id)
    ))
}

pub fn get(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    job_id: &str,
    artifact_id: &str,
) -> ApiRequest {
    ApiRequest::get(artifact_path(
        org_slug,
        pipeline_slug,
        build_number,
        job_id,
        artifact_id,
    ))
}

pub fn download(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    job_id: &str,
    artifact_id: &str,
) -> ApiRequest {
    ApiRequest::get(format!(
        "{}/download",
        artifact_path(org_slug, pipeline_slug, build_number, job_id, artifact_id)
    ))
}

pub fn delete(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    job_id: &str,
    artifact_id: &str,
) -> ApiRequest {
    ApiRequest::delete(artifact_path(
        org_slug,
        pipeline_slug,
        build_number,
        job_id,
        artifact_id,
    ))
}

impl ApiClient {
    pub async fn list_build_artifacts(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
    ) -> Result<Response> {
        self.execute(list_for_build(org_slug, pipeline_slug, build_number))
            .await
    }

    pub async fn list_job_artifacts(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        job_id: &str,
    ) -> Result<Response> {
        self.execute(list_for_job(org_slug, pipeline_slug, build_number, job_id))
            .await
    }

    pub async fn get_artifact(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        job_id: &str,
        artifact_id: &str,
    ) -> Result<Response> {
        self.execute(get(
            org_slug,
            pipeline_slug,
            build_number,
            job_id,
            artifact_id,
        ))
        .await
    }

    /// The API answers with a 302 to a short-lived storage URL. reqwest
    /// follows it, so the returned response is normally the file itself.
    pub async fn download_artifact(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        job_id: &str,
        artifact_id: &str,
    ) -> Result<Response> {
        self.execute(download(
            org_slug,
            pipeline_slug,
            build_number,
            job_id,
            artifact_id,
        ))
        .await
    }

    /// Deletes the stored file; the artifact record stays with state `deleted`.
    pub async fn delete_artifact(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
        job_id: &str,
        artifact_id: &str,
    ) -> Result<Response> {
        self.execute(delete(
            org_slug,
            pipeline_slug,
            build_number,
            job_id,
            artifact_id,
        ))
        .await
    }
}
