//! One module per Buildkite API resource.
//!
//! Each module exposes plain functions that turn typed arguments into an
//! [`ApiRequest`](crate::ApiRequest), and an `impl ApiClient` block whose
//! methods send those requests. Identifiers are substituted into paths
//! verbatim.

pub mod access_token;
pub mod agents;
pub mod annotations;
pub mod artifacts;
pub mod builds;
pub mod emojis;
pub mod jobs;
pub mod meta;
pub mod organizations;
pub mod pipelines;
pub mod user;

pub(crate) fn organization_path(org_slug: &str) -> String {
    format!("organizations/{org_slug}")
}

pub(crate) fn pipeline_path(org_slug: &str, pipeline_slug: &str) -> String {
    format!("{}/pipelines/{pipeline_slug}", organization_path(org_slug))
}

pub(crate) fn build_path(org_slug: &str, pipeline_slug: &str, build_number: &str) -> String {
    format!(
        "{}/builds/{build_number}",
        pipeline_path(org_slug, pipeline_slug)
    )
}

pub(crate) fn job_path(
    org_slug: &str,
    pipeline_slug: &str,
    build_number: &str,
    job_id: &str,
) -> String {
    format!(
        "{}/jobs/{job_id}",
        build_path(org_slug, pipeline_slug, build_number)
    )
}
