//! End-to-end tests of the service clients against a local HTTP server

use std::sync::Arc;

use futures::TryStreamExt;
use serde_json::json;
use wiremock::matchers::{
    body_json, header, header_exists, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ibm_iam_sdk::domain::enterprise_management::{ListAccountsParams, UpdateAccountParams};
use ibm_iam_sdk::domain::iam_access_groups::{GetAccessGroupParams, GroupMemberParams};
use ibm_iam_sdk::domain::iam_identity::{CreateApiKeyParams, ListApiKeysParams};
use ibm_iam_sdk::infrastructure::{BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator};
use ibm_iam_sdk::{
    BaseServiceOptions, EnterpriseManagementV1, IamAccessGroupsV2, IamIdentityV1, SdkError,
};

fn identity(server: &MockServer) -> IamIdentityV1 {
    let auth = BearerTokenAuthenticator::new("test-token").unwrap();
    IamIdentityV1::new(BaseServiceOptions::new(
        "iam_identity",
        server.uri(),
        Arc::new(auth),
    ))
    .unwrap()
}

fn access_groups(server: &MockServer) -> IamAccessGroupsV2 {
    IamAccessGroupsV2::new(BaseServiceOptions::new(
        "iam_access_groups",
        server.uri(),
        Arc::new(NoAuthAuthenticator),
    ))
    .unwrap()
}

fn enterprise(server: &MockServer) -> EnterpriseManagementV1 {
    let auth = BasicAuthenticator::new("user", "pass").unwrap();
    EnterpriseManagementV1::new(BaseServiceOptions::new(
        "enterprise_management",
        format!("{}/v1/", server.uri()),
        Arc::new(auth),
    ))
    .unwrap()
}

#[tokio::test]
async fn test_create_api_key_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/apikeys"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(header("Entity-Lock", "true"))
        .and(header_exists("User-Agent"))
        .and(header(
            "X-IBMCloud-SDK-Analytics",
            "service_name=iam_identity;service_version=v1;operation_id=createApiKey",
        ))
        .and(body_json(json!({
            "name": "ci-key",
            "iam_id": "iam-ServiceId-1",
            "store_value": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "ApiKey-1",
            "crn": "crn:v1:bluemix:public:iam-identity::a/acc::apikey:ApiKey-1",
            "name": "ci-key",
            "iam_id": "iam-ServiceId-1",
            "account_id": "acc",
            "apikey": "secret"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = CreateApiKeyParams {
        name: "ci-key".into(),
        iam_id: "iam-ServiceId-1".into(),
        store_value: Some(true),
        entity_lock: Some("true".into()),
        ..Default::default()
    };
    let response = identity(&server).create_api_key(&params).await.unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.result.id, "ApiKey-1");
    assert_eq!(response.result.apikey, "secret");
}

#[tokio::test]
async fn test_api_error_passes_status_and_transaction_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/groups/AccessGroupId-missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("Transaction-Id", "tx-404")
                .set_body_json(json!({
                    "code": "not_found",
                    "errors": [{ "code": "not_found", "message": "Group not found" }]
                })),
        )
        .mount(&server)
        .await;

    let params = GetAccessGroupParams {
        access_group_id: "AccessGroupId-missing".into(),
        ..Default::default()
    };
    let err = access_groups(&server)
        .get_access_group(&params)
        .await
        .unwrap_err();

    match err {
        SdkError::Api {
            status,
            message,
            body,
            transaction_id,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Group not found");
            assert_eq!(transaction_id.as_deref(), Some("tx-404"));
            assert_eq!(body.unwrap()["code"], "not_found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_membership_check_over_head() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/v2/groups/ag-1/members/IBMid-1"))
        .and(header("Transaction-Id", "tx-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let params = GroupMemberParams {
        access_group_id: "ag-1".into(),
        iam_id: "IBMid-1".into(),
        transaction_id: Some("tx-1".into()),
        ..Default::default()
    };
    let response = access_groups(&server)
        .is_member_of_access_group(&params)
        .await
        .unwrap();

    assert_eq!(response.status, 204);
}

#[tokio::test]
async fn test_api_keys_pager_follows_page_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apikeys"))
        .and(query_param("account_id", "acc"))
        .and(query_param_is_missing("pagetoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 1,
            "next": format!("{}/v1/apikeys?account_id=acc&pagesize=1&pagetoken=tok-2", server.uri()),
            "apikeys": [{ "id": "ApiKey-1", "name": "first" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/apikeys"))
        .and(query_param("account_id", "acc"))
        .and(query_param("pagetoken", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 1,
            "apikeys": [{ "id": "ApiKey-2", "name": "second" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListApiKeysParams {
        account_id: Some("acc".into()),
        pagesize: Some(1),
        ..Default::default()
    };
    let keys: Vec<_> = identity(&server)
        .api_keys_pager(params)
        .unwrap()
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<_> = keys.iter().map(|key| key.id.as_str()).collect();
    assert_eq!(ids, vec!["ApiKey-1", "ApiKey-2"]);
}

#[tokio::test]
async fn test_enterprise_service_url_keeps_base_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .and(query_param("enterprise_id", "ent-1"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rows_count": 1,
            "resources": [{ "id": "acc-1", "name": "dev" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v1/accounts/acc-1"))
        .and(body_json(json!({ "parent": "crn:v1:::enterprise::a/acc::account-group:ag-2" })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let service = enterprise(&server);

    let params = ListAccountsParams {
        enterprise_id: Some("ent-1".into()),
        ..Default::default()
    };
    let accounts = service.list_accounts(&params).await.unwrap();
    assert_eq!(accounts.result.rows_count, Some(1));
    assert_eq!(accounts.result.resources[0].id.as_deref(), Some("acc-1"));

    let update = UpdateAccountParams {
        account_id: "acc-1".into(),
        parent: "crn:v1:::enterprise::a/acc::account-group:ag-2".into(),
        ..Default::default()
    };
    let response = service.update_account(&update).await.unwrap();
    assert_eq!(response.status, 202);
}
