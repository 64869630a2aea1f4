use buildkite_api::{ApiClient, ApiError, ApiRequest, Params};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_endpoint(server.uri(), "abc123").unwrap()
}

#[tokio::test]
async fn test_list_pipelines() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/acme/pipelines"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"slug": "ci", "name": "CI"},
            {"slug": "deploy", "name": "Deploy"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let response = client.list_pipelines("acme").await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
    assert!(received[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_create_build_sends_params_as_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/organizations/acme/pipelines/ci/builds/5"))
        .and(query_param("commit", "HEAD"))
        .and(query_param("branch", "main"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "number": 6,
            "state": "scheduled"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let params = Params::new().with("commit", "HEAD").with("branch", "main");
    let response = client
        .create_build("acme", "ci", "5", Some(&params))
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let received = mock_server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_create_yaml_pipeline_sends_json_body() {
    let mock_server = MockServer::start().await;

    let definition = serde_json::json!({
        "name": "My Pipeline",
        "repository": "git@github.com:acme-inc/my-pipeline.git",
        "configuration": "steps:\n - command: \"script/release.sh\""
    });

    Mock::given(method("POST"))
        .and(path("/v2/organizations/acme/pipelines"))
        .and(header("content-type", "application/json"))
        .and(body_json(&definition))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "slug": "my-pipeline"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let response = client
        .create_yaml_pipeline("acme", &definition)
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_update_pipeline_is_patch_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v2/organizations/acme/pipelines/ci"))
        .and(body_json(serde_json::json!({"default_branch": "main"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let response = client
        .update_pipeline("acme", "ci", &serde_json::json!({"default_branch": "main"}))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_non_success_status_is_returned_not_raised() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"message": "No organization found"})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/organizations/acme/pipelines/ci/builds/5/cancel"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    let response = client.get_organization("missing").await.unwrap();
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "No organization found");

    let response = client.cancel_build("acme", "ci", "5").await.unwrap();
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn test_authorization_identical_across_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    client.get_current_user().await.unwrap();
    client.get_meta_information().await.unwrap();
    client.list_organizations().await.unwrap();
    client
        .execute(
            ApiRequest::get("user")
                .with_header("Authorization", "Bearer someone-else")
                .unwrap(),
        )
        .await
        .unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 4);
    for request in &received {
        let values: Vec<_> = request.headers.get_all("authorization").iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "Bearer abc123");
    }
}

#[tokio::test]
async fn test_list_builds_with_array_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/acme/builds"))
        .and(query_param("state[]", "running"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let params = Params::new()
        .with("state[]", "scheduled")
        .with("state[]", "running");
    client
        .list_organization_builds("acme", Some(&params))
        .await
        .unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("state%5B%5D=scheduled&state%5B%5D=running")
    );
}

#[tokio::test]
async fn test_job_and_agent_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(
            "/v2/organizations/acme/pipelines/ci/builds/5/jobs/j1/unblock",
        ))
        .and(query_param("unblocker", "u1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/acme/pipelines/ci/builds/5/jobs/j1/log"))
        .respond_with(ResponseTemplate::new(200).set_body_string("build output"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/organizations/acme/agents/a1/stop"))
        .and(query_param("force", "false"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    let unblock = Params::new().with("unblocker", "u1");
    let response = client
        .unblock_job("acme", "ci", "5", "j1", Some(&unblock))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let log = client
        .get_job_log("acme", "ci", "5", "j1")
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(log, "build output");

    let stop = Params::new().with("force", "false");
    let response = client.stop_agent("acme", "a1", Some(&stop)).await.unwrap();
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn test_artifact_and_annotation_endpoints() {
    let mock_server = MockServer::start().await;
    let build = "/v2/organizations/acme/pipelines/ci/builds/5";

    Mock::given(method("GET"))
        .and(path(format!("{build}/artifacts")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{build}/jobs/j1/artifacts/a1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{build}/annotations")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    assert_eq!(
        client
            .list_build_artifacts("acme", "ci", "5")
            .await
            .unwrap()
            .status(),
        200
    );
    assert_eq!(
        client
            .delete_artifact("acme", "ci", "5", "j1", "a1")
            .await
            .unwrap()
            .status(),
        204
    );
    assert_eq!(
        client
            .list_build_annotations("acme", "ci", "5")
            .await
            .unwrap()
            .status(),
        200
    );
}

#[tokio::test]
async fn test_access_token_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uuid": "b63254c0-3271-4a98-8270-7cfbd6c2f14e",
            "scopes": ["read_build"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/access-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let token: serde_json::Value = client
        .get_current_token()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(token["scopes"][0], "read_build");

    let response = client.revoke_current_token().await.unwrap();
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn test_invalid_method_never_reaches_server() {
    let mock_server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    for bad in ["CONNECT", "post", "FETCH"] {
        let err = client.request(bad, "user", None, None).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidMethod { .. }));
    }

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_request_with_version_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/emojis"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let response = client
        .execute(ApiRequest::get("emojis").with_version(1))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
