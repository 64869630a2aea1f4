use reqwest::Response;

use super::build_path;
use crate::{ApiClient, ApiRequest, Result};

pub fn list_for_build(org_slug: &str, pipeline_slug: &str, build_number: &str) -> ApiRequest {
    ApiRequest::get(format!(
        "{}/annotations",
        build_path(org_slug, pipeline_slug, build_number)
    ))
}

impl ApiClient {
    pub async fn list_build_annotations(
        &self,
        org_slug: &str,
        pipeline_slug: &str,
        build_number: &str,
    ) -> Result<Response> {
        self.execute(list_for_build(org_slug, pipeline_slug, build_number))
            .await
    }
}
