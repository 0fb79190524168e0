use crate::config::ServiceConfig;
use crate::domain::iam_access_groups::*;
use crate::domain::{ApiRequest, DetailedResponse, EmptyObject, Pager, RequiredParams, SdkError};
use crate::infrastructure::base_service::{service_pager, BaseService, BaseServiceOptions};

pub const DEFAULT_SERVICE_URL: &str = "https://iam.cloud.ibm.com";
pub const DEFAULT_SERVICE_NAME: &str = "iam_access_groups";
const SERVICE_VERSION: &str = "v2";

const TRANSACTION_ID: &str = "Transaction-Id";

type Response<T> = Result<DetailedResponse<T>, SdkError>;

/// Client for the IAM Access Groups API
#[derive(Debug, Clone)]
pub struct IamAccessGroupsV2 {
    base: BaseService,
}

impl IamAccessGroupsV2 {
    pub fn new(options: BaseServiceOptions) -> Result<Self, SdkError> {
        Ok(Self {
            base: BaseService::new(options, SERVICE_VERSION)?,
        })
    }

    /// Build a client from `<SERVICE_NAME>_*` environment variables
    pub fn new_from_config(service_name: &str) -> Result<Self, SdkError> {
        let config = ServiceConfig::from_env(service_name)?;
        Self::new(BaseServiceOptions::from_service_config(
            &config,
            DEFAULT_SERVICE_URL,
        )?)
    }

    pub fn base(&self) -> &BaseService {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }

    pub fn set_service_url(&mut self, url: &str) -> Result<(), SdkError> {
        self.base.set_service_url(url)
    }

    // Access groups

    /// Create an access group in an account
    pub async fn create_access_group(&self, params: &CreateAccessGroupParams) -> Response<Group> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .string("name", &params.name)
            .check()?;

        let request = ApiRequest::post("/v2/groups", "createAccessGroup")
            .query("account_id", params.account_id.as_str())
            .body_field("name", &params.name)
            .body_field_opt("description", params.description.as_ref())
            .accept_json()
            .content_type_json()
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// List the access groups of an account, optionally only those an IAM id belongs to
    pub async fn list_access_groups(&self, params: &ListAccessGroupsParams) -> Response<GroupsList> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::get("/v2/groups", "listAccessGroups")
            .query("account_id", params.account_id.as_str())
            .query_opt("iam_id", params.iam_id.as_deref())
            .query_opt("membership_type", params.membership_type.as_deref())
            .query_opt("limit", params.limit)
            .query_opt("offset", params.offset)
            .query_opt("sort", params.sort.as_deref())
            .query_opt("show_federated", params.show_federated)
            .query_opt("hide_public_access", params.hide_public_access)
            .accept_json()
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_access_group(&self, params: &GetAccessGroupParams) -> Response<Group> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .check()?;

        let request = ApiRequest::get("/v2/groups/{access_group_id}", "getAccessGroup")
            .path_param("access_group_id", &params.access_group_id)
            .query_opt("show_federated", params.show_federated)
            .accept_json()
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn update_access_group(&self, params: &UpdateAccessGroupParams) -> Response<Group> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .string("if_match", &params.if_match)
            .check()?;

        let request = ApiRequest::patch("/v2/groups/{access_group_id}", "updateAccessGroup")
            .path_param("access_group_id", &params.access_group_id)
            .body_field_opt("name", params.name.as_ref())
            .body_field_opt("description", params.description.as_ref())
            .accept_json()
            .content_type_json()
            .header("If-Match", &params.if_match)
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Delete an access group; `force` also removes its members and rules
    pub async fn delete_access_group(&self, params: &DeleteAccessGroupParams) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .check()?;

        let request = ApiRequest::delete("/v2/groups/{access_group_id}", "deleteAccessGroup")
            .path_param("access_group_id", &params.access_group_id)
            .query_opt("force", params.force)
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub fn access_groups_pager(
        &self,
        params: ListAccessGroupsParams,
    ) -> Result<Pager<ListAccessGroupsParams, GroupsList>, SdkError> {
        service_pager(self, params, |service: Self, params| async move {
            service.list_access_groups(&params).await
        })
    }

    // Membership

    /// Membership check. A 2xx status means the IAM id is a member; a 404
    /// surfaces as an API error.
    pub async fn is_member_of_access_group(
        &self,
        params: &IsMemberOfAccessGroupParams,
    ) -> Response<EmptyObject> {
        self.group_member_request(
            ApiRequest::head(
                "/v2/groups/{access_group_id}/members/{iam_id}",
                "isMemberOfAccessGroup",
            ),
            params,
        )
        .await
    }

    pub async fn add_members_to_access_group(
        &self,
        params: &AddMembersToAccessGroupParams,
    ) -> Response<AddGroupMembersResponse> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .check()?;

        let request = ApiRequest::put(
            "/v2/groups/{access_group_id}/members",
            "addMembersToAccessGroup",
        )
        .path_param("access_group_id", &params.access_group_id)
        .body_field_opt("members", params.members.as_ref())
        .accept_json()
        .content_type_json()
        .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn list_access_group_members(
        &self,
        params: &ListAccessGroupMembersParams,
    ) -> Response<GroupMembersList> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .check()?;

        let request = ApiRequest::get(
            "/v2/groups/{access_group_id}/members",
            "listAccessGroupMembers",
        )
        .path_param("access_group_id", &params.access_group_id)
        .query_opt("membership_type", params.membership_type.as_deref())
        .query_opt("limit", params.limit)
        .query_opt("offset", params.offset)
        .query_opt("type", params.member_type.as_deref())
        .query_opt("verbose", params.verbose)
        .query_opt("sort", params.sort.as_deref())
        .accept_json()
        .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn remove_member_from_access_group(
        &self,
        params: &RemoveMemberFromAccessGroupParams,
    ) -> Response<EmptyObject> {
        self.group_member_request(
            ApiRequest::delete(
                "/v2/groups/{access_group_id}/members/{iam_id}",
                "removeMemberFromAccessGroup",
            ),
            params,
        )
        .await
    }

    async fn group_member_request(
        &self,
        request: ApiRequest,
        params: &GroupMemberParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .string("iam_id", &params.iam_id)
            .check()?;

        let request = request
            .path_param("access_group_id", &params.access_group_id)
            .path_param("iam_id", &params.iam_id)
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Remove several members at once; per-member results are in the response
    pub async fn remove_members_from_access_group(
        &self,
        params: &RemoveMembersFromAccessGroupParams,
    ) -> Response<DeleteGroupBulkMembersResponse> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .check()?;

        let request = ApiRequest::post(
            "/v2/groups/{access_group_id}/members/delete",
            "removeMembersFromAccessGroup",
        )
        .path_param("access_group_id", &params.access_group_id)
        .body_field_opt("members", params.members.as_ref())
        .accept_json()
        .content_type_json()
        .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Remove an IAM id from every access group of the account
    pub async fn remove_member_from_all_access_groups(
        &self,
        params: &RemoveMemberFromAllAccessGroupsParams,
    ) -> Response<DeleteFromAllGroupsResponse> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .string("iam_id", &params.iam_id)
            .check()?;

        let request = ApiRequest::delete(
            "/v2/groups/_allgroups/members/{iam_id}",
            "removeMemberFromAllAccessGroups",
        )
        .path_param("iam_id", &params.iam_id)
        .query("account_id", params.account_id.as_str())
        .accept_json()
        .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Add an IAM id to several access groups at once
    pub async fn add_member_to_multiple_access_groups(
        &self,
        params: &AddMemberToMultipleAccessGroupsParams,
    ) -> Response<AddMembershipMultipleGroupsResponse> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .string("iam_id", &params.iam_id)
            .check()?;

        let request = ApiRequest::put(
            "/v2/groups/_allgroups/members/{iam_id}",
            "addMemberToMultipleAccessGroups",
        )
        .path_param("iam_id", &params.iam_id)
        .query("account_id", params.account_id.as_str())
        .body_field_opt("type", params.member_type.as_ref())
        .body_field_opt("groups", params.groups.as_ref())
        .accept_json()
        .content_type_json()
        .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub fn access_group_members_pager(
        &self,
        params: ListAccessGroupMembersParams,
    ) -> Result<Pager<ListAccessGroupMembersParams, GroupMembersList>, SdkError> {
        service_pager(self, params, |service: Self, params| async move {
            service.list_access_group_members(&params).await
        })
    }

    // Dynamic membership rules

    /// Add a rule granting federated users dynamic membership
    pub async fn add_access_group_rule(&self, params: &AddAccessGroupRuleParams) -> Response<Rule> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .string("realm_name", &params.realm_name)
            .list("conditions", &params.conditions)
            .check()?;

        let request = ApiRequest::post("/v2/groups/{access_group_id}/rules", "addAccessGroupRule")
            .path_param("access_group_id", &params.access_group_id)
            .body_field("expiration", &params.expiration)
            .body_field("realm_name", &params.realm_name)
            .body_field("conditions", &params.conditions)
            .body_field_opt("name", params.name.as_ref())
            .accept_json()
            .content_type_json()
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn list_access_group_rules(
        &self,
        params: &ListAccessGroupRulesParams,
    ) -> Response<RulesList> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .check()?;

        let request =
            ApiRequest::get("/v2/groups/{access_group_id}/rules", "listAccessGroupRules")
                .path_param("access_group_id", &params.access_group_id)
                .accept_json()
                .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
                .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_access_group_rule(&self, params: &GetAccessGroupRuleParams) -> Response<Rule> {
        self.rule_request(
            ApiRequest::get(
                "/v2/groups/{access_group_id}/rules/{rule_id}",
                "getAccessGroupRule",
            )
            .accept_json(),
            params,
        )
        .await
    }

    /// Replace every field of a rule
    pub async fn replace_access_group_rule(
        &self,
        params: &ReplaceAccessGroupRuleParams,
    ) -> Response<Rule> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .string("rule_id", &params.rule_id)
            .string("if_match", &params.if_match)
            .string("realm_name", &params.realm_name)
            .list("conditions", &params.conditions)
            .check()?;

        let request = ApiRequest::put(
            "/v2/groups/{access_group_id}/rules/{rule_id}",
            "replaceAccessGroupRule",
        )
        .path_param("access_group_id", &params.access_group_id)
        .path_param("rule_id", &params.rule_id)
        .body_field("expiration", &params.expiration)
        .body_field("realm_name", &params.realm_name)
        .body_field("conditions", &params.conditions)
        .body_field_opt("name", params.name.as_ref())
        .accept_json()
        .content_type_json()
        .header("If-Match", &params.if_match)
        .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn remove_access_group_rule(
        &self,
        params: &RemoveAccessGroupRuleParams,
    ) -> Response<EmptyObject> {
        self.rule_request(
            ApiRequest::delete(
                "/v2/groups/{access_group_id}/rules/{rule_id}",
                "removeAccessGroupRule",
            ),
            params,
        )
        .await
    }

    async fn rule_request<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        params: &AccessGroupRuleParams,
    ) -> Response<T> {
        RequiredParams::new()
            .string("access_group_id", &params.access_group_id)
            .string("rule_id", &params.rule_id)
            .check()?;

        let request = request
            .path_param("access_group_id", &params.access_group_id)
            .path_param("rule_id", &params.rule_id)
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    // Account settings

    pub async fn get_account_settings(
        &self,
        params: &GetAccountSettingsParams,
    ) -> Response<AccountSettings> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::get("/v2/groups/settings", "getAccountSettings")
            .query("account_id", params.account_id.as_str())
            .accept_json()
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Toggle the public access group of an account
    pub async fn update_account_settings(
        &self,
        params: &UpdateAccountSettingsParams,
    ) -> Response<AccountSettings> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::patch("/v2/groups/settings", "updateAccountSettings")
            .query("account_id", params.account_id.as_str())
            .body_field_opt("public_access_enabled", params.public_access_enabled)
            .accept_json()
            .content_type_json()
            .header_opt(TRANSACTION_ID, params.transaction_id.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::{Headers, HttpMethod};
    use crate::infrastructure::auth::NoAuthAuthenticator;
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use bytes::Bytes;
    use serde_json::json;

    const URL: &str = "https://iam.test.cloud.ibm.com";

    fn url(path: &str) -> String {
        format!("{}{}", URL, path)
    }

    fn service(client: MockHttpClient) -> (IamAccessGroupsV2, Arc<MockHttpClient>) {
        let client = Arc::new(client);
        let options = BaseServiceOptions::new(DEFAULT_SERVICE_NAME, URL, Arc::new(NoAuthAuthenticator))
            .with_http_client(client.clone());
        (IamAccessGroupsV2::new(options).unwrap(), client)
    }

    #[tokio::test]
    async fn test_create_access_group_sends_account_in_query() {
        let (groups, client) = service(MockHttpClient::new().with_response(
            HttpMethod::Post,
            url("/v2/groups"),
            201,
            json!({ "id": "AccessGroupId-1", "name": "admins" }),
        ));

        let params = CreateAccessGroupParams {
            account_id: "acc".into(),
            name: "admins".into(),
            description: Some("Admins".into()),
            transaction_id: Some("tx-1".into()),
            ..Default::default()
        };
        let response = groups.create_access_group(&params).await.unwrap();
        assert_eq!(response.result.id.as_deref(), Some("AccessGroupId-1"));

        let sent = client.last_request().unwrap();
        assert_eq!(sent.url, url("/v2/groups?account_id=acc"));
        assert_eq!(sent.header("Transaction-Id"), Some("tx-1"));
        assert_eq!(
            sent.json_body().unwrap(),
            json!({ "name": "admins", "description": "Admins" })
        );
        assert_eq!(
            sent.header("X-IBMCloud-SDK-Analytics"),
            Some("service_name=iam_access_groups;service_version=v2;operation_id=createAccessGroup")
        );
    }

    #[tokio::test]
    async fn test_create_access_group_missing_params() {
        let (groups, client) = service(MockHttpClient::new());

        let err = groups
            .create_access_group(&CreateAccessGroupParams::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Missing required parameters: account_id, name");
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_access_groups_query() {
        let (groups, client) = service(MockHttpClient::new().with_response(
            HttpMethod::Get,
            url("/v2/groups"),
            200,
            json!({ "limit": 10, "offset": 0, "total_count": 0, "groups": [] }),
        ));

        let params = ListAccessGroupsParams {
            account_id: "acc".into(),
            iam_id: Some("IBMid-1".into()),
            membership_type: Some("static".into()),
            limit: Some(10),
            show_federated: Some(false),
            hide_public_access: Some(true),
            ..Default::default()
        };
        groups.list_access_groups(&params).await.unwrap();

        assert_eq!(
            client.last_request().unwrap().url,
            url("/v2/groups?account_id=acc&iam_id=IBMid-1&membership_type=static&limit=10&show_federated=false&hide_public_access=true")
        );
    }

    #[tokio::test]
    async fn test_update_access_group_patch_with_if_match() {
        let (groups, client) = service(MockHttpClient::new().with_response(
            HttpMethod::Patch,
            url("/v2/groups/ag-1"),
            200,
            json!({ "id": "ag-1", "name": "renamed" }),
        ));

        let params = UpdateAccessGroupParams {
            access_group_id: "ag-1".into(),
            if_match: "etag".into(),
            name: Some("renamed".into()),
            ..Default::default()
        };
        groups.update_access_group(&params).await.unwrap();

        let sent = client.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Patch);
        assert_eq!(sent.header("If-Match"), Some("etag"));
        assert!(sent.header("Transaction-Id").is_none());
    }

    #[tokio::test]
    async fn test_delete_access_group_force() {
        let (groups, client) = service(MockHttpClient::new().with_raw_response(
            HttpMethod::Delete,
            url("/v2/groups/ag-1"),
            204,
            Vec::new(),
            Bytes::new(),
        ));

        let params = DeleteAccessGroupParams {
            access_group_id: "ag-1".into(),
            force: Some(true),
            ..Default::default()
        };
        let response = groups.delete_access_group(&params).await.unwrap();

        assert_eq!(response.status, 204);
        assert_eq!(client.last_request().unwrap().url, url("/v2/groups/ag-1?force=true"));
    }

    #[tokio::test]
    async fn test_is_member_uses_head_and_maps_not_found() {
        let client = MockHttpClient::new()
            .with_raw_response(
                HttpMethod::Head,
                url("/v2/groups/ag-1/members/IBMid-1"),
                204,
                Vec::new(),
                Bytes::new(),
            )
            .with_raw_response(
                HttpMethod::Head,
                url("/v2/groups/ag-1/members/IBMid-2"),
                404,
                Vec::new(),
                Bytes::new(),
            );
        let (groups, _) = service(client);

        let member = GroupMemberParams {
            access_group_id: "ag-1".into(),
            iam_id: "IBMid-1".into(),
            ..Default::default()
        };
        assert_eq!(groups.is_member_of_access_group(&member).await.unwrap().status, 204);

        let stranger = GroupMemberParams {
            iam_id: "IBMid-2".into(),
            ..member
        };
        let err = groups.is_member_of_access_group(&stranger).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_add_members_body_uses_type() {
        let (groups, client) = service(MockHttpClient::new().with_response(
            HttpMethod::Put,
            url("/v2/groups/ag-1/members"),
            207,
            json!({ "members": [{ "iam_id": "IBMid-1", "type": "user", "status_code": 200 }] }),
        ));

        let params = AddMembersToAccessGroupParams {
            access_group_id: "ag-1".into(),
            members: Some(vec![
                AddGroupMembersRequestMembersItem::new("IBMid-1", "user"),
                AddGroupMembersRequestMembersItem::new("iam-ServiceId-1", "service"),
            ]),
            ..Default::default()
        };
        let response = groups.add_members_to_access_group(&params).await.unwrap();
        assert_eq!(response.status, 207);
        assert_eq!(response.result.members[0].member_type.as_deref(), Some("user"));

        assert_eq!(
            client.last_request().unwrap().json_body().unwrap(),
            json!({
                "members": [
                    { "iam_id": "IBMid-1", "type": "user" },
                    { "iam_id": "iam-ServiceId-1", "type": "service" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_remove_members_posts_to_delete_route() {
        let (groups, client) = service(MockHttpClient::new().with_response(
            HttpMethod::Post,
            url("/v2/groups/ag-1/members/delete"),
            207,
            json!({ "access_group_id": "ag-1", "members": [] }),
        ));

        let params = RemoveMembersFromAccessGroupParams {
            access_group_id: "ag-1".into(),
            members: Some(vec!["IBMid-1".into(), "IBMid-2".into()]),
            ..Default::default()
        };
        groups.remove_members_from_access_group(&params).await.unwrap();

        assert_eq!(
            client.last_request().unwrap().json_body().unwrap(),
            json!({ "members": ["IBMid-1", "IBMid-2"] })
        );
    }

    #[tokio::test]
    async fn test_all_groups_membership_routes() {
        let client = MockHttpClient::new()
            .with_response(
                HttpMethod::Put,
                url("/v2/groups/_allgroups/members/IBMid-1"),
                207,
                json!({ "iam_id": "IBMid-1", "groups": [{ "access_group_id": "ag-1", "status_code": 200 }] }),
            )
            .with_response(
                HttpMethod::Delete,
                url("/v2/groups/_allgroups/members/IBMid-1"),
                207,
                json!({ "iam_id": "IBMid-1", "groups": [] }),
            );
        let (groups, client) = service(client);

        let added = groups
            .add_member_to_multiple_access_groups(&AddMemberToMultipleAccessGroupsParams {
                account_id: "acc".into(),
                iam_id: "IBMid-1".into(),
                member_type: Some("user".into()),
                groups: Some(vec!["ag-1".into()]),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(added.result.groups[0].status_code, Some(200));

        let sent = client.last_request().unwrap();
        assert_eq!(sent.url, url("/v2/groups/_allgroups/members/IBMid-1?account_id=acc"));
        assert_eq!(
            sent.json_body().unwrap(),
            json!({ "type": "user", "groups": ["ag-1"] })
        );

        let err = groups
            .remove_member_from_all_access_groups(&RemoveMemberFromAllAccessGroupsParams {
                iam_id: "IBMid-1".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: account_id");
    }

    #[tokio::test]
    async fn test_add_rule_body() {
        let (groups, client) = service(MockHttpClient::new().with_response(
            HttpMethod::Post,
            url("/v2/groups/ag-1/rules"),
            201,
            json!({ "id": "rule-1", "expiration": 12 }),
        ));

        let params = AddAccessGroupRuleParams {
            access_group_id: "ag-1".into(),
            expiration: 12,
            realm_name: "https://idp.example.com".into(),
            conditions: vec![RuleConditions::new("isManager", "EQUALS", "true")],
            name: Some("managers".into()),
            ..Default::default()
        };
        let response = groups.add_access_group_rule(&params).await.unwrap();
        assert_eq!(response.result.expiration, Some(12));

        assert_eq!(
            client.last_request().unwrap().json_body().unwrap(),
            json!({
                "expiration": 12,
                "realm_name": "https://idp.example.com",
                "conditions": [{ "claim": "isManager", "operator": "EQUALS", "value": "true" }],
                "name": "managers"
            })
        );
    }

    #[tokio::test]
    async fn test_replace_rule_requires_every_field() {
        let (groups, _) = service(MockHttpClient::new());

        let params = ReplaceAccessGroupRuleParams {
            access_group_id: "ag-1".into(),
            rule_id: "rule-1".into(),
            ..Default::default()
        };
        let err = groups.replace_access_group_rule(&params).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing required parameters: if_match, realm_name, conditions"
        );
    }

    #[tokio::test]
    async fn test_update_account_settings() {
        let (groups, client) = service(MockHttpClient::new().with_response(
            HttpMethod::Patch,
            url("/v2/groups/settings"),
            200,
            json!({ "account_id": "acc", "public_access_enabled": false }),
        ));

        let params = UpdateAccountSettingsParams {
            account_id: "acc".into(),
            public_access_enabled: Some(false),
            ..Default::default()
        };
        let response = groups.update_account_settings(&params).await.unwrap();
        assert_eq!(response.result.public_access_enabled, Some(false));

        let sent = client.last_request().unwrap();
        assert_eq!(sent.url, url("/v2/groups/settings?account_id=acc"));
        assert_eq!(sent.json_body().unwrap(), json!({ "public_access_enabled": false }));
    }

    #[tokio::test]
    async fn test_caller_transaction_id_header_wins() {
        let (groups, client) = service(MockHttpClient::new().with_response(
            HttpMethod::Get,
            url("/v2/groups/ag-1/rules"),
            200,
            json!({ "rules": [] }),
        ));

        let mut headers = Headers::new();
        headers.insert("transaction-id".into(), "from-caller".into());
        let params = ListAccessGroupRulesParams {
            access_group_id: "ag-1".into(),
            transaction_id: Some("from-params".into()),
            headers,
        };
        groups.list_access_group_rules(&params).await.unwrap();

        let sent = client.last_request().unwrap();
        assert_eq!(sent.header("Transaction-Id"), Some("from-caller"));
    }

    macro_rules! assert_route {
        ($client:expr, $call:expr, $method:ident, $path:expr) => {{
            let before = $client.requests().len();
            let _ = $call.await;
            let requests = $client.requests();
            assert_eq!(requests.len(), before + 1, "nothing sent for {}", $path);
            let sent = &requests[before];
            assert_eq!(sent.method, HttpMethod::$method, "{}", $path);
            assert_eq!(sent.url.split('?').next().unwrap(), url($path));
        }};
    }

    macro_rules! assert_missing {
        ($call:expr, $names:expr) => {{
            let err = $call.await.unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Missing required parameters: {}", $names)
            );
        }};
    }

    #[tokio::test]
    async fn test_every_operation_uses_its_route() {
        let (groups, client) = service(MockHttpClient::new());

        let member = GroupMemberParams {
            access_group_id: "ag-1".into(),
            iam_id: "IBMid-1".into(),
            ..Default::default()
        };
        let rule = AccessGroupRuleParams {
            access_group_id: "ag-1".into(),
            rule_id: "rule-1".into(),
            ..Default::default()
        };
        let conditions = vec![RuleConditions {
            claim: "isManager".into(),
            operator: "EQUALS".into(),
            value: "true".into(),
        }];

        assert_route!(
            client,
            groups.create_access_group(&CreateAccessGroupParams {
                account_id: "acc".into(),
                name: "admins".into(),
                ..Default::default()
            }),
            Post,
            "/v2/groups"
        );
        assert_route!(
            client,
            groups.list_access_groups(&ListAccessGroupsParams {
                account_id: "acc".into(),
                ..Default::default()
            }),
            Get,
            "/v2/groups"
        );
        assert_route!(
            client,
            groups.get_access_group(&GetAccessGroupParams {
                access_group_id: "ag-1".into(),
                ..Default::default()
            }),
            Get,
            "/v2/groups/ag-1"
        );
        assert_route!(
            client,
            groups.update_access_group(&UpdateAccessGroupParams {
                access_group_id: "ag-1".into(),
                if_match: "*".into(),
                ..Default::default()
            }),
            Patch,
            "/v2/groups/ag-1"
        );
        assert_route!(
            client,
            groups.delete_access_group(&DeleteAccessGroupParams {
                access_group_id: "ag-1".into(),
                ..Default::default()
            }),
            Delete,
            "/v2/groups/ag-1"
        );

        assert_route!(
            client,
            groups.is_member_of_access_group(&member),
            Head,
            "/v2/groups/ag-1/members/IBMid-1"
        );
        assert_route!(
            client,
            groups.add_members_to_access_group(&AddMembersToAccessGroupParams {
                access_group_id: "ag-1".into(),
                ..Default::default()
            }),
            Put,
            "/v2/groups/ag-1/members"
        );
        assert_route!(
            client,
            groups.list_access_group_members(&ListAccessGroupMembersParams {
                access_group_id: "ag-1".into(),
                ..Default::default()
            }),
            Get,
            "/v2/groups/ag-1/members"
        );
        assert_route!(
            client,
            groups.remove_member_from_access_group(&member),
            Delete,
            "/v2/groups/ag-1/members/IBMid-1"
        );
        assert_route!(
            client,
            groups.remove_members_from_access_group(&RemoveMembersFromAccessGroupParams {
                access_group_id: "ag-1".into(),
                ..Default::default()
            }),
            Post,
            "/v2/groups/ag-1/members/delete"
        );
        assert_route!(
            client,
            groups.remove_member_from_all_access_groups(&RemoveMemberFromAllAccessGroupsParams {
                account_id: "acc".into(),
                iam_id: "IBMid-1".into(),
                ..Default::default()
            }),
            Delete,
            "/v2/groups/_allgroups/members/IBMid-1"
        );
        assert_route!(
            client,
            groups.add_member_to_multiple_access_groups(&AddMemberToMultipleAccessGroupsParams {
                account_id: "acc".into(),
                iam_id: "IBMid-1".into(),
                ..Default::default()
            }),
            Put,
            "/v2/groups/_allgroups/members/IBMid-1"
        );

        assert_route!(
            client,
            groups.add_access_group_rule(&AddAccessGroupRuleParams {
                access_group_id: "ag-1".into(),
                expiration: 12,
                realm_name: "https://idp.example.com".into(),
                conditions: conditions.clone(),
                ..Default::default()
            }),
            Post,
            "/v2/groups/ag-1/rules"
        );
        assert_route!(
            client,
            groups.list_access_group_rules(&ListAccessGroupRulesParams {
                access_group_id: "ag-1".into(),
                ..Default::default()
            }),
            Get,
            "/v2/groups/ag-1/rules"
        );
        assert_route!(client, groups.get_access_group_rule(&rule), Get, "/v2/groups/ag-1/rules/rule-1");
        assert_route!(
            client,
            groups.replace_access_group_rule(&ReplaceAccessGroupRuleParams {
                access_group_id: "ag-1".into(),
                rule_id: "rule-1".into(),
                if_match: "*".into(),
                expiration: 12,
                realm_name: "https://idp.example.com".into(),
                conditions,
                ..Default::default()
            }),
            Put,
            "/v2/groups/ag-1/rules/rule-1"
        );
        assert_route!(
            client,
            groups.remove_access_group_rule(&rule),
            Delete,
            "/v2/groups/ag-1/rules/rule-1"
        );

        assert_route!(
            client,
            groups.get_account_settings(&GetAccountSettingsParams {
                account_id: "acc".into(),
                ..Default::default()
            }),
            Get,
            "/v2/groups/settings"
        );
        assert_route!(
            client,
            groups.update_account_settings(&UpdateAccountSettingsParams {
                account_id: "acc".into(),
                ..Default::default()
            }),
            Patch,
            "/v2/groups/settings"
        );

        assert_eq!(client.requests().len(), 19);
    }

    #[tokio::test]
    async fn test_default_params_report_missing_names() {
        let (groups, client) = service(MockHttpClient::new());

        assert_missing!(groups.create_access_group(&Default::default()), "account_id, name");
        assert_missing!(groups.list_access_groups(&Default::default()), "account_id");
        assert_missing!(groups.get_access_group(&Default::default()), "access_group_id");
        assert_missing!(
            groups.update_access_group(&Default::default()),
            "access_group_id, if_match"
        );
        assert_missing!(groups.delete_access_group(&Default::default()), "access_group_id");

        assert_missing!(
            groups.is_member_of_access_group(&Default::default()),
            "access_group_id, iam_id"
        );
        assert_missing!(groups.add_members_to_access_group(&Default::default()), "access_group_id");
        assert_missing!(groups.list_access_group_members(&Default::default()), "access_group_id");
        assert_missing!(
            groups.remove_member_from_access_group(&Default::default()),
            "access_group_id, iam_id"
        );
        assert_missing!(
            groups.remove_members_from_access_group(&Default::default()),
            "access_group_id"
        );
        assert_missing!(
            groups.remove_member_from_all_access_groups(&Default::default()),
            "account_id, iam_id"
        );
        assert_missing!(
            groups.add_member_to_multiple_access_groups(&Default::default()),
            "account_id, iam_id"
        );

        assert_missing!(
            groups.add_access_group_rule(&Default::default()),
            "access_group_id, realm_name, conditions"
        );
        assert_missing!(groups.list_access_group_rules(&Default::default()), "access_group_id");
        assert_missing!(
            groups.get_access_group_rule(&Default::default()),
            "access_group_id, rule_id"
        );
        assert_missing!(
            groups.replace_access_group_rule(&Default::default()),
            "access_group_id, rule_id, if_match, realm_name, conditions"
        );
        assert_missing!(
            groups.remove_access_group_rule(&Default::default()),
            "access_group_id, rule_id"
        );

        assert_missing!(groups.get_account_settings(&Default::default()), "account_id");
        assert_missing!(groups.update_account_settings(&Default::default()), "account_id");

        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_access_groups_pager_follows_offset() {
        let client = MockHttpClient::new()
            .with_response(
                HttpMethod::Get,
                url("/v2/groups"),
                200,
                json!({
                    "limit": 1, "offset": 0, "total_count": 2,
                    "groups": [{ "id": "ag-1", "name": "admins" }],
                    "next": { "href": "https://iam.test.cloud.ibm.com/v2/groups?account_id=acc&limit=1&offset=1" }
                }),
            )
            .with_response(
                HttpMethod::Get,
                url("/v2/groups"),
                200,
                json!({
                    "limit": 1, "offset": 1, "total_count": 2,
                    "groups": [{ "id": "ag-2", "name": "viewers" }]
                }),
            );
        let (groups, client) = service(client);

        let params = ListAccessGroupsParams {
            account_id: "acc".into(),
            limit: Some(1),
            ..Default::default()
        };
        let all = groups.access_groups_pager(params).unwrap().get_all().await.unwrap();

        let ids: Vec<_> = all.iter().filter_map(|group| group.id.as_deref()).collect();
        assert_eq!(ids, vec!["ag-1", "ag-2"]);

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, url("/v2/groups?account_id=acc&limit=1"));
        assert_eq!(requests[1].url, url("/v2/groups?account_id=acc&limit=1&offset=1"));
    }

    #[tokio::test]
    async fn test_members_pager_follows_offset() {
        let client = MockHttpClient::new()
            .with_response(
                HttpMethod::Get,
                url("/v2/groups/ag-1/members"),
                200,
                json!({
                    "limit": 1, "offset": 0, "total_count": 2,
                    "members": [{ "iam_id": "IBMid-1" }],
                    "next": { "href": "https://iam.test.cloud.ibm.com/v2/groups/ag-1/members?limit=1&offset=1" }
                }),
            )
            .with_response(
                HttpMethod::Get,
                url("/v2/groups/ag-1/members"),
                200,
                json!({
                    "limit": 1, "offset": 1, "total_count": 2,
                    "members": [{ "iam_id": "IBMid-2" }]
                }),
            );
        let (groups, client) = service(client);

        let params = ListAccessGroupMembersParams {
            access_group_id: "ag-1".into(),
            limit: Some(1),
            ..Default::default()
        };
        let mut pager = groups.access_group_members_pager(params).unwrap();

        let first = pager.get_next().await.unwrap();
        assert_eq!(first[0].iam_id.as_deref(), Some("IBMid-1"));
        assert!(pager.has_next());

        let second = pager.get_next().await.unwrap();
        assert_eq!(second[0].iam_id.as_deref(), Some("IBMid-2"));
        assert!(!pager.has_next());
        assert!(matches!(pager.get_next().await, Err(SdkError::NoMoreResults)));

        let requests = client.requests();
        assert_eq!(requests[1].url, url("/v2/groups/ag-1/members?limit=1&offset=1"));
    }
}
