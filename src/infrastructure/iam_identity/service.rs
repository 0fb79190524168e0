//! IAM Identity v1 client: API keys, service IDs, trusted profiles, account
//! settings, MFA and activity reports, templates and template assignments

use crate::config::ServiceConfig;
use crate::domain::iam_identity::*;
use crate::domain::{ApiRequest, DetailedResponse, EmptyObject, Pager, RequiredParams, SdkError};
use crate::infrastructure::base_service::{service_pager, BaseService, BaseServiceOptions};

pub const DEFAULT_SERVICE_URL: &str = "https://iam.cloud.ibm.com";
pub const DEFAULT_SERVICE_NAME: &str = "iam_identity";
const SERVICE_VERSION: &str = "v1";

type Response<T> = Result<DetailedResponse<T>, SdkError>;

/// Client for the IAM Identity API
#[derive(Debug, Clone)]
pub struct IamIdentityV1 {
    base: BaseService,
}

impl IamIdentityV1 {
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

    // API keys

    /// List API keys, filtered by account, IAM id and scope
    pub async fn list_api_keys(&self, params: &ListApiKeysParams) -> Response<ApiKeyList> {
        let request = ApiRequest::get("/v1/apikeys", "listApiKeys")
            .query_opt("account_id", params.account_id.as_deref())
            .query_opt("iam_id", params.iam_id.as_deref())
            .query_opt("pagesize", params.pagesize)
            .query_opt("pagetoken", params.pagetoken.as_deref())
            .query_opt("scope", params.scope.as_deref())
            .query_opt("type", params.api_key_type.as_deref())
            .query_opt("sort", params.sort.as_deref())
            .query_opt("order", params.order.as_deref())
            .query_opt("include_history", params.include_history)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Create an API key for a user or service ID
    pub async fn create_api_key(&self, params: &CreateApiKeyParams) -> Response<ApiKey> {
        RequiredParams::new()
            .string("name", &params.name)
            .string("iam_id", &params.iam_id)
            .check()?;

        let request = ApiRequest::post("/v1/apikeys", "createApiKey")
            .body_field("name", &params.name)
            .body_field("iam_id", &params.iam_id)
            .body_field_opt("description", params.description.as_ref())
            .body_field_opt("account_id", params.account_id.as_ref())
            .body_field_opt("apikey", params.apikey.as_ref())
            .body_field_opt("store_value", params.store_value)
            .body_field_opt("support_sessions", params.support_sessions)
            .body_field_opt("action_when_leaked", params.action_when_leaked.as_ref())
            .accept_json()
            .content_type_json()
            .header_opt("Entity-Lock", params.entity_lock.as_ref())
            .header_opt("Entity-Disable", params.entity_disable.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Look up the details of the API key sent in the `IAM-ApiKey` header
    pub async fn get_api_keys_details(&self, params: &GetApiKeysDetailsParams) -> Response<ApiKey> {
        let request = ApiRequest::get("/v1/apikeys/details", "getApiKeysDetails")
            .query_opt("include_history", params.include_history)
            .accept_json()
            .header_opt("IAM-ApiKey", params.iam_api_key.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_api_key(&self, params: &GetApiKeyParams) -> Response<ApiKey> {
        RequiredParams::new().string("id", &params.id).check()?;

        let request = ApiRequest::get("/v1/apikeys/{id}", "getApiKey")
            .path_param("id", &params.id)
            .query_opt("include_history", params.include_history)
            .query_opt("include_activity", params.include_activity)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Update name, description or leak handling of an API key
    pub async fn update_api_key(&self, params: &UpdateApiKeyParams) -> Response<ApiKey> {
        RequiredParams::new()
            .string("id", &params.id)
            .string("if_match", &params.if_match)
            .check()?;

        let request = ApiRequest::put("/v1/apikeys/{id}", "updateApiKey")
            .path_param("id", &params.id)
            .body_field_opt("name", params.name.as_ref())
            .body_field_opt("description", params.description.as_ref())
            .body_field_opt("support_sessions", params.support_sessions)
            .body_field_opt("action_when_leaked", params.action_when_leaked.as_ref())
            .accept_json()
            .content_type_json()
            .header("If-Match", &params.if_match)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn delete_api_key(&self, params: &DeleteApiKeyParams) -> Response<EmptyObject> {
        self.api_key_action(ApiRequest::delete("/v1/apikeys/{id}", "deleteApiKey"), params)
            .await
    }

    pub async fn lock_api_key(&self, params: &LockApiKeyParams) -> Response<EmptyObject> {
        self.api_key_action(ApiRequest::post("/v1/apikeys/{id}/lock", "lockApiKey"), params)
            .await
    }

    pub async fn unlock_api_key(&self, params: &UnlockApiKeyParams) -> Response<EmptyObject> {
        self.api_key_action(
            ApiRequest::delete("/v1/apikeys/{id}/lock", "unlockApiKey"),
            params,
        )
        .await
    }

    pub async fn disable_api_key(&self, params: &DisableApiKeyParams) -> Response<EmptyObject> {
        self.api_key_action(
            ApiRequest::post("/v1/apikeys/{id}/disable", "disableApiKey"),
            params,
        )
        .await
    }

    pub async fn enable_api_key(&self, params: &EnableApiKeyParams) -> Response<EmptyObject> {
        self.api_key_action(
            ApiRequest::delete("/v1/apikeys/{id}/disable", "enableApiKey"),
            params,
        )
        .await
    }

    async fn api_key_action(
        &self,
        request: ApiRequest,
        params: &ApiKeyIdParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new().string("id", &params.id).check()?;

        let request = request
            .path_param("id", &params.id)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub fn api_keys_pager(
        &self,
        params: ListApiKeysParams,
    ) -> Result<Pager<ListApiKeysParams, ApiKeyList>, SdkError> {
        service_pager(self, params, |service: Self, params| async move {
            service.list_api_keys(&params).await
        })
    }

    // Service IDs

    pub async fn list_service_ids(&self, params: &ListServiceIdsParams) -> Response<ServiceIdList> {
        let request = ApiRequest::get("/v1/serviceids/", "listServiceIds")
            .query_opt("account_id", params.account_id.as_deref())
            .query_opt("name", params.name.as_deref())
            .query_opt("pagesize", params.pagesize)
            .query_opt("pagetoken", params.pagetoken.as_deref())
            .query_opt("sort", params.sort.as_deref())
            .query_opt("order", params.order.as_deref())
            .query_opt("include_history", params.include_history)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Create a service ID, optionally with a first API key
    pub async fn create_service_id(&self, params: &CreateServiceIdParams) -> Response<ServiceId> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .string("name", &params.name)
            .check()?;

        let request = ApiRequest::post("/v1/serviceids/", "createServiceId")
            .body_field("account_id", &params.account_id)
            .body_field("name", &params.name)
            .body_field_opt("description", params.description.as_ref())
            .body_field_opt("unique_instance_crns", params.unique_instance_crns.as_ref())
            .body_field_opt("apikey", params.apikey.as_ref())
            .accept_json()
            .content_type_json()
            .header_opt("Entity-Lock", params.entity_lock.as_ref())
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_service_id(&self, params: &GetServiceIdParams) -> Response<ServiceId> {
        RequiredParams::new().string("id", &params.id).check()?;

        let request = ApiRequest::get("/v1/serviceids/{id}", "getServiceId")
            .path_param("id", &params.id)
            .query_opt("include_history", params.include_history)
            .query_opt("include_activity", params.include_activity)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn update_service_id(&self, params: &UpdateServiceIdParams) -> Response<ServiceId> {
        RequiredParams::new()
            .string("id", &params.id)
            .string("if_match", &params.if_match)
            .check()?;

        let request = ApiRequest::put("/v1/serviceids/{id}", "updateServiceId")
            .path_param("id", &params.id)
            .body_field_opt("name", params.name.as_ref())
            .body_field_opt("description", params.description.as_ref())
            .body_field_opt("unique_instance_crns", params.unique_instance_crns.as_ref())
            .accept_json()
            .content_type_json()
            .header("If-Match", &params.if_match)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn delete_service_id(&self, params: &DeleteServiceIdParams) -> Response<EmptyObject> {
        self.service_id_action(
            ApiRequest::delete("/v1/serviceids/{id}", "deleteServiceId"),
            params,
        )
        .await
    }

    pub async fn lock_service_id(&self, params: &LockServiceIdParams) -> Response<EmptyObject> {
        self.service_id_action(
            ApiRequest::post("/v1/serviceids/{id}/lock", "lockServiceId"),
            params,
        )
        .await
    }

    pub async fn unlock_service_id(&self, params: &UnlockServiceIdParams) -> Response<EmptyObject> {
        self.service_id_action(
            ApiRequest::delete("/v1/serviceids/{id}/lock", "unlockServiceId"),
            params,
        )
        .await
    }

    async fn service_id_action(
        &self,
        request: ApiRequest,
        params: &ServiceIdIdParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new().string("id", &params.id).check()?;

        let request = request
            .path_param("id", &params.id)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub fn service_ids_pager(
        &self,
        params: ListServiceIdsParams,
    ) -> Result<Pager<ListServiceIdsParams, ServiceIdList>, SdkError> {
        service_pager(self, params, |service: Self, params| async move {
            service.list_service_ids(&params).await
        })
    }

    // Trusted profiles

    pub async fn create_profile(&self, params: &CreateProfileParams) -> Response<TrustedProfile> {
        RequiredParams::new()
            .string("name", &params.name)
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::post("/v1/profiles", "createProfile")
            .body_field("name", &params.name)
            .body_field("account_id", &params.account_id)
            .body_field_opt("description", params.description.as_ref())
            .accept_json()
            .content_type_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn list_profiles(&self, params: &ListProfilesParams) -> Response<TrustedProfilesList> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::get("/v1/profiles", "listProfiles")
            .query("account_id", params.account_id.as_str())
            .query_opt("name", params.name.as_deref())
            .query_opt("pagesize", params.pagesize)
            .query_opt("sort", params.sort.as_deref())
            .query_opt("order", params.order.as_deref())
            .query_opt("include_history", params.include_history)
            .query_opt("pagetoken", params.pagetoken.as_deref())
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_profile(&self, params: &GetProfileParams) -> Response<TrustedProfile> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .check()?;

        let request = ApiRequest::get("/v1/profiles/{profile-id}", "getProfile")
            .path_param("profile-id", &params.profile_id)
            .query_opt("include_activity", params.include_activity)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn update_profile(&self, params: &UpdateProfileParams) -> Response<TrustedProfile> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("if_match", &params.if_match)
            .check()?;

        let request = ApiRequest::put("/v1/profiles/{profile-id}", "updateProfile")
            .path_param("profile-id", &params.profile_id)
            .body_field_opt("name", params.name.as_ref())
            .body_field_opt("description", params.description.as_ref())
            .accept_json()
            .content_type_json()
            .header("If-Match", &params.if_match)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn delete_profile(&self, params: &DeleteProfileParams) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .check()?;

        let request = ApiRequest::delete("/v1/profiles/{profile-id}", "deleteProfile")
            .path_param("profile-id", &params.profile_id)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub fn profiles_pager(
        &self,
        params: ListProfilesParams,
    ) -> Result<Pager<ListProfilesParams, TrustedProfilesList>, SdkError> {
        service_pager(self, params, |service: Self, params| async move {
            service.list_profiles(&params).await
        })
    }

    // Claim rules

    /// Add a claim rule that maps federated users or compute resources to a profile
    pub async fn create_claim_rule(&self, params: &CreateClaimRuleParams) -> Response<ProfileClaimRule> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("type", &params.rule_type)
            .list("conditions", &params.conditions)
            .check()?;

        let request = ApiRequest::post("/v1/profiles/{profile-id}/rules", "createClaimRule")
            .path_param("profile-id", &params.profile_id)
            .body_field("type", &params.rule_type)
            .body_field("conditions", &params.conditions)
            .body_field_opt("context", params.context.as_ref())
            .body_field_opt("name", params.name.as_ref())
            .body_field_opt("realm_name", params.realm_name.as_ref())
            .body_field_opt("cr_type", params.cr_type.as_ref())
            .body_field_opt("expiration", params.expiration)
            .accept_json()
            .content_type_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn list_claim_rules(&self, params: &ListClaimRulesParams) -> Response<ProfileClaimRuleList> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .check()?;

        let request = ApiRequest::get("/v1/profiles/{profile-id}/rules", "listClaimRules")
            .path_param("profile-id", &params.profile_id)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_claim_rule(&self, params: &GetClaimRuleParams) -> Response<ProfileClaimRule> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("rule_id", &params.rule_id)
            .check()?;

        let request = ApiRequest::get("/v1/profiles/{profile-id}/rules/{rule-id}", "getClaimRule")
            .path_param("profile-id", &params.profile_id)
            .path_param("rule-id", &params.rule_id)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn update_claim_rule(&self, params: &UpdateClaimRuleParams) -> Response<ProfileClaimRule> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("rule_id", &params.rule_id)
            .string("if_match", &params.if_match)
            .string("type", &params.rule_type)
            .list("conditions", &params.conditions)
            .check()?;

        let request =
            ApiRequest::put("/v1/profiles/{profile-id}/rules/{rule-id}", "updateClaimRule")
                .path_param("profile-id", &params.profile_id)
                .path_param("rule-id", &params.rule_id)
                .body_field("type", &params.rule_type)
                .body_field("conditions", &params.conditions)
                .body_field_opt("context", params.context.as_ref())
                .body_field_opt("name", params.name.as_ref())
                .body_field_opt("realm_name", params.realm_name.as_ref())
                .body_field_opt("cr_type", params.cr_type.as_ref())
                .body_field_opt("expiration", params.expiration)
                .accept_json()
                .content_type_json()
                .header("If-Match", &params.if_match)
                .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn delete_claim_rule(&self, params: &DeleteClaimRuleParams) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("rule_id", &params.rule_id)
            .check()?;

        let request =
            ApiRequest::delete("/v1/profiles/{profile-id}/rules/{rule-id}", "deleteClaimRule")
                .path_param("profile-id", &params.profile_id)
                .path_param("rule-id", &params.rule_id)
                .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    // Links

    /// Link a compute resource to a profile
    pub async fn create_link(&self, params: &CreateLinkParams) -> Response<ProfileLink> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("cr_type", &params.cr_type)
            .string("link.crn", &params.link.crn)
            .string("link.namespace", &params.link.namespace)
            .check()?;

        let request = ApiRequest::post("/v1/profiles/{profile-id}/links", "createLink")
            .path_param("profile-id", &params.profile_id)
            .body_field("cr_type", &params.cr_type)
            .body_field("link", &params.link)
            .body_field_opt("name", params.name.as_ref())
            .accept_json()
            .content_type_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn list_links(&self, params: &ListLinksParams) -> Response<ProfileLinkList> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .check()?;

        let request = ApiRequest::get("/v1/profiles/{profile-id}/links", "listLinks")
            .path_param("profile-id", &params.profile_id)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_link(&self, params: &GetLinkParams) -> Response<ProfileLink> {
        self.link_request(
            ApiRequest::get("/v1/profiles/{profile-id}/links/{link-id}", "getLink").accept_json(),
            params,
        )
        .await
    }

    pub async fn delete_link(&self, params: &DeleteLinkParams) -> Response<EmptyObject> {
        self.link_request(
            ApiRequest::delete("/v1/profiles/{profile-id}/links/{link-id}", "deleteLink"),
            params,
        )
        .await
    }

    async fn link_request<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        params: &LinkIdParams,
    ) -> Response<T> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("link_id", &params.link_id)
            .check()?;

        let request = request
            .path_param("profile-id", &params.profile_id)
            .path_param("link-id", &params.link_id)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    // Identities

    /// Identities that may assume the profile
    pub async fn get_profile_identities(
        &self,
        params: &GetProfileIdentitiesParams,
    ) -> Response<ProfileIdentitiesResponse> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .check()?;

        let request =
            ApiRequest::get("/v1/profiles/{profile-id}/identities", "getProfileIdentities")
                .path_param("profile-id", &params.profile_id)
                .accept_json()
                .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Replace every identity that may assume the profile
    pub async fn set_profile_identities(
        &self,
        params: &SetProfileIdentitiesParams,
    ) -> Response<ProfileIdentitiesResponse> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("if_match", &params.if_match)
            .check()?;

        let request =
            ApiRequest::put("/v1/profiles/{profile-id}/identities", "setProfileIdentities")
                .path_param("profile-id", &params.profile_id)
                .body_field_opt("identities", params.identities.as_ref())
                .accept_json()
                .content_type_json()
                .header("If-Match", &params.if_match)
                .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Add one identity to the profile
    pub async fn set_profile_identity(
        &self,
        params: &SetProfileIdentityParams,
    ) -> Response<ProfileIdentityResponse> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("identity_type", &params.identity_type)
            .string("identifier", &params.identifier)
            .string("type", &params.kind)
            .check()?;

        let request = ApiRequest::post(
            "/v1/profiles/{profile-id}/identities/{identity-type}",
            "setProfileIdentity",
        )
        .path_param("profile-id", &params.profile_id)
        .path_param("identity-type", &params.identity_type)
        .body_field("identifier", &params.identifier)
        .body_field("type", &params.kind)
        .body_field_opt("accounts", params.accounts.as_ref())
        .body_field_opt("description", params.description.as_ref())
        .accept_json()
        .content_type_json()
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_profile_identity(
        &self,
        params: &GetProfileIdentityParams,
    ) -> Response<ProfileIdentityResponse> {
        self.profile_identity_request(
            ApiRequest::get(
                "/v1/profiles/{profile-id}/identities/{identity-type}/{identifier-id}",
                "getProfileIdentity",
            )
            .accept_json(),
            params,
        )
        .await
    }

    pub async fn delete_profile_identity(
        &self,
        params: &DeleteProfileIdentityParams,
    ) -> Response<EmptyObject> {
        self.profile_identity_request(
            ApiRequest::delete(
                "/v1/profiles/{profile-id}/identities/{identity-type}/{identifier-id}",
                "deleteProfileIdentity",
            ),
            params,
        )
        .await
    }

    async fn profile_identity_request<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        params: &ProfileIdentityIdParams,
    ) -> Response<T> {
        RequiredParams::new()
            .string("profile_id", &params.profile_id)
            .string("identity_type", &params.identity_type)
            .string("identifier_id", &params.identifier_id)
            .check()?;

        let request = request
            .path_param("profile-id", &params.profile_id)
            .path_param("identity-type", &params.identity_type)
            .path_param("identifier-id", &params.identifier_id)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    // Account settings

    pub async fn get_account_settings(
        &self,
        params: &GetAccountSettingsParams,
    ) -> Response<AccountSettingsResponse> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::get(
            "/v1/accounts/{account_id}/settings/identity",
            "getAccountSettings",
        )
        .path_param("account_id", &params.account_id)
        .query_opt("include_history", params.include_history)
        .accept_json()
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Update the identity settings of an account; unset fields keep their value
    pub async fn update_account_settings(
        &self,
        params: &UpdateAccountSettingsParams,
    ) -> Response<AccountSettingsResponse> {
        RequiredParams::new()
            .string("if_match", &params.if_match)
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::put(
            "/v1/accounts/{account_id}/settings/identity",
            "updateAccountSettings",
        )
        .path_param("account_id", &params.account_id)
        .body_field_opt("restrict_create_service_id", params.restrict_create_service_id.as_ref())
        .body_field_opt(
            "restrict_create_platform_apikey",
            params.restrict_create_platform_apikey.as_ref(),
        )
        .body_field_opt("allowed_ip_addresses", params.allowed_ip_addresses.as_ref())
        .body_field_opt("mfa", params.mfa.as_ref())
        .body_field_opt("user_mfa", params.user_mfa.as_ref())
        .body_field_opt(
            "session_expiration_in_seconds",
            params.session_expiration_in_seconds.as_ref(),
        )
        .body_field_opt(
            "session_invalidation_in_seconds",
            params.session_invalidation_in_seconds.as_ref(),
        )
        .body_field_opt("max_sessions_per_identity", params.max_sessions_per_identity.as_ref())
        .body_field_opt(
            "system_access_token_expiration_in_seconds",
            params.system_access_token_expiration_in_seconds.as_ref(),
        )
        .body_field_opt(
            "system_refresh_token_expiration_in_seconds",
            params.system_refresh_token_expiration_in_seconds.as_ref(),
        )
        .accept_json()
        .content_type_json()
        .header("If-Match", &params.if_match)
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Settings in effect after account, template and enterprise layers are combined
    pub async fn get_effective_account_settings(
        &self,
        params: &GetEffectiveAccountSettingsParams,
    ) -> Response<EffectiveAccountSettingsResponse> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::get(
            "/v1/accounts/{account_id}/effective_settings/identity",
            "getEffectiveAccountSettings",
        )
        .path_param("account_id", &params.account_id)
        .query_opt("include_history", params.include_history)
        .query_opt("resolve_user_mfa", params.resolve_user_mfa)
        .accept_json()
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    // MFA and activity reports

    pub async fn get_mfa_status(&self, params: &GetMfaStatusParams) -> Response<UserMfaEnrollments> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .string("iam_id", &params.iam_id)
            .check()?;

        let request = ApiRequest::get("/v1/mfa/accounts/{account_id}/status", "getMfaStatus")
            .path_param("account_id", &params.account_id)
            .query("iam_id", params.iam_id.as_str())
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Start an MFA enrollment report; poll it with [`Self::get_mfa_report`]
    pub async fn create_mfa_report(&self, params: &CreateMfaReportParams) -> Response<ReportReference> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::post("/v1/mfa/accounts/{account_id}/report", "createMfaReport")
            .path_param("account_id", &params.account_id)
            .query_opt("type", params.report_type.as_deref())
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_mfa_report(&self, params: &GetMfaReportParams) -> Response<ReportMfaEnrollmentStatus> {
        self.report_request(
            ApiRequest::get(
                "/v1/mfa/accounts/{account_id}/report/{reference}",
                "getMfaReport",
            ),
            params,
        )
        .await
    }

    /// Start an inactive-entities report; poll it with [`Self::get_report`]
    pub async fn create_report(&self, params: &CreateReportParams) -> Response<ReportReference> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request =
            ApiRequest::post("/v1/activity/accounts/{account_id}/report", "createReport")
                .path_param("account_id", &params.account_id)
                .query_opt("type", params.report_type.as_deref())
                .query_opt("duration", params.duration.as_deref())
                .accept_json()
                .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_report(&self, params: &GetReportParams) -> Response<Report> {
        self.report_request(
            ApiRequest::get(
                "/v1/activity/accounts/{account_id}/report/{reference}",
                "getReport",
            ),
            params,
        )
        .await
    }

    async fn report_request<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        params: &ReportIdParams,
    ) -> Response<T> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .string("reference", &params.reference)
            .check()?;

        let request = request
            .path_param("account_id", &params.account_id)
            .path_param("reference", &params.reference)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    // Account settings assignments

    pub async fn list_account_settings_assignments(
        &self,
        params: &ListAccountSettingsAssignmentsParams,
    ) -> Response<TemplateAssignmentListResponse> {
        self.list_assignments(
            ApiRequest::get(
                "/v1/account_settings_assignments/",
                "listAccountSettingsAssignments",
            ),
            params,
        )
        .await
    }

    /// Assign an account settings template version to an account or account group
    pub async fn create_account_settings_assignment(
        &self,
        params: &CreateAccountSettingsAssignmentParams,
    ) -> Response<TemplateAssignmentResponse> {
        self.create_assignment(
            ApiRequest::post(
                "/v1/account_settings_assignments/",
                "createAccountSettingsAssignment",
            ),
            params,
        )
        .await
    }

    pub async fn get_account_settings_assignment(
        &self,
        params: &GetAccountSettingsAssignmentParams,
    ) -> Response<TemplateAssignmentResponse> {
        self.get_assignment(
            ApiRequest::get(
                "/v1/account_settings_assignments/{assignment_id}",
                "getAccountSettingsAssignment",
            ),
            params,
        )
        .await
    }

    pub async fn delete_account_settings_assignment(
        &self,
        params: &DeleteAccountSettingsAssignmentParams,
    ) -> Response<ExceptionResponse> {
        self.delete_assignment(
            ApiRequest::delete(
                "/v1/account_settings_assignments/{assignment_id}",
                "deleteAccountSettingsAssignment",
            ),
            params,
        )
        .await
    }

    /// Move an assignment to another template version
    pub async fn update_account_settings_assignment(
        &self,
        params: &UpdateAccountSettingsAssignmentParams,
    ) -> Response<TemplateAssignmentResponse> {
        self.update_assignment(
            ApiRequest::patch(
                "/v1/account_settings_assignments/{assignment_id}",
                "updateAccountSettingsAssignment",
            ),
            params,
        )
        .await
    }

    pub fn account_settings_assignments_pager(
        &self,
        params: ListAccountSettingsAssignmentsParams,
    ) -> Result<Pager<ListAccountSettingsAssignmentsParams, TemplateAssignmentListResponse>, SdkError>
    {
        service_pager(self, params, |service: Self, params| async move {
            service.list_account_settings_assignments(&params).await
        })
    }

    // Account settings templates

    pub async fn list_account_settings_templates(
        &self,
        params: &ListAccountSettingsTemplatesParams,
    ) -> Response<AccountSettingsTemplateList> {
        self.list_templates(
            ApiRequest::get("/v1/account_settings_templates", "listAccountSettingsTemplates"),
            params,
        )
        .await
    }

    pub async fn create_account_settings_template(
        &self,
        params: &CreateAccountSettingsTemplateParams,
    ) -> Response<AccountSettingsTemplateResponse> {
        let request = ApiRequest::post(
            "/v1/account_settings_templates",
            "createAccountSettingsTemplate",
        );
        let request = account_settings_template_body(request, &params.template)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_latest_account_settings_template_version(
        &self,
        params: &GetLatestAccountSettingsTemplateVersionParams,
    ) -> Response<AccountSettingsTemplateResponse> {
        self.get_latest_template_version(
            ApiRequest::get(
                "/v1/account_settings_templates/{template_id}",
                "getLatestAccountSettingsTemplateVersion",
            ),
            params,
        )
        .await
    }

    pub async fn delete_all_versions_of_account_settings_template(
        &self,
        params: &DeleteAllVersionsOfAccountSettingsTemplateParams,
    ) -> Response<EmptyObject> {
        self.delete_all_template_versions(
            ApiRequest::delete(
                "/v1/account_settings_templates/{template_id}",
                "deleteAllVersionsOfAccountSettingsTemplate",
            ),
            params,
        )
        .await
    }

    pub async fn list_versions_of_account_settings_template(
        &self,
        params: &ListVersionsOfAccountSettingsTemplateParams,
    ) -> Response<AccountSettingsTemplateList> {
        self.list_template_versions(
            ApiRequest::get(
                "/v1/account_settings_templates/{template_id}/versions",
                "listVersionsOfAccountSettingsTemplate",
            ),
            params,
        )
        .await
    }

    pub async fn create_account_settings_template_version(
        &self,
        params: &CreateAccountSettingsTemplateVersionParams,
    ) -> Response<AccountSettingsTemplateResponse> {
        RequiredParams::new()
            .string("template_id", &params.template_id)
            .check()?;

        let request = ApiRequest::post(
            "/v1/account_settings_templates/{template_id}/versions",
            "createAccountSettingsTemplateVersion",
        )
        .path_param("template_id", &params.template_id);
        let request = account_settings_template_body(request, &params.template)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_account_settings_template_version(
        &self,
        params: &GetAccountSettingsTemplateVersionParams,
    ) -> Response<AccountSettingsTemplateResponse> {
        self.get_template_version(
            ApiRequest::get(
                "/v1/account_settings_templates/{template_id}/versions/{version}",
                "getAccountSettingsTemplateVersion",
            ),
            params,
        )
        .await
    }

    /// Update an uncommitted template version
    pub async fn update_account_settings_template_version(
        &self,
        params: &UpdateAccountSettingsTemplateVersionParams,
    ) -> Response<AccountSettingsTemplateResponse> {
        RequiredParams::new()
            .string("if_match", &params.if_match)
            .string("template_id", &params.template_id)
            .string("version", &params.version)
            .check()?;

        let request = ApiRequest::put(
            "/v1/account_settings_templates/{template_id}/versions/{version}",
            "updateAccountSettingsTemplateVersion",
        )
        .path_param("template_id", &params.template_id)
        .path_param("version", &params.version)
        .header("If-Match", &params.if_match);
        let request = account_settings_template_body(request, &params.template)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn delete_account_settings_template_version(
        &self,
        params: &DeleteAccountSettingsTemplateVersionParams,
    ) -> Response<EmptyObject> {
        self.template_version_action(
            ApiRequest::delete(
                "/v1/account_settings_templates/{template_id}/versions/{version}",
                "deleteAccountSettingsTemplateVersion",
            ),
            params,
        )
        .await
    }

    /// Commit a template version; committed versions can no longer change
    pub async fn commit_account_settings_template(
        &self,
        params: &CommitAccountSettingsTemplateParams,
    ) -> Response<EmptyObject> {
        self.template_version_action(
            ApiRequest::post(
                "/v1/account_settings_templates/{template_id}/versions/{version}/commit",
                "commitAccountSettingsTemplate",
            ),
            params,
        )
        .await
    }

    pub fn account_settings_templates_pager(
        &self,
        params: ListAccountSettingsTemplatesParams,
    ) -> Result<Pager<ListAccountSettingsTemplatesParams, AccountSettingsTemplateList>, SdkError>
    {
        service_pager(self, params, |service: Self, params| async move {
            service.list_account_settings_templates(&params).await
        })
    }

    pub fn account_settings_template_versions_pager(
        &self,
        params: ListVersionsOfAccountSettingsTemplateParams,
    ) -> Result<Pager<ListVersionsOfAccountSettingsTemplateParams, AccountSettingsTemplateList>, SdkError>
    {
        service_pager(self, params, |service: Self, params| async move {
            service
                .list_versions_of_account_settings_template(&params)
                .await
        })
    }

    // Trusted profile assignments

    pub async fn list_trusted_profile_assignments(
        &self,
        params: &ListTrustedProfileAssignmentsParams,
    ) -> Response<TemplateAssignmentListResponse> {
        self.list_assignments(
            ApiRequest::get("/v1/profile_assignments/", "listTrustedProfileAssignments"),
            params,
        )
        .await
    }

    /// Assign a trusted profile template version to an account or account group
    pub async fn create_trusted_profile_assignment(
        &self,
        params: &CreateTrustedProfileAssignmentParams,
    ) -> Response<TemplateAssignmentResponse> {
        self.create_assignment(
            ApiRequest::post("/v1/profile_assignments/", "createTrustedProfileAssignment"),
            params,
        )
        .await
    }

    pub async fn get_trusted_profile_assignment(
        &self,
        params: &GetTrustedProfileAssignmentParams,
    ) -> Response<TemplateAssignmentResponse> {
        self.get_assignment(
            ApiRequest::get(
                "/v1/profile_assignments/{assignment_id}",
                "getTrustedProfileAssignment",
            ),
            params,
        )
        .await
    }

    pub async fn delete_trusted_profile_assignment(
        &self,
        params: &DeleteTrustedProfileAssignmentParams,
    ) -> Response<ExceptionResponse> {
        self.delete_assignment(
            ApiRequest::delete(
                "/v1/profile_assignments/{assignment_id}",
                "deleteTrustedProfileAssignment",
            ),
            params,
        )
        .await
    }

    pub async fn update_trusted_profile_assignment(
        &self,
        params: &UpdateTrustedProfileAssignmentParams,
    ) -> Response<TemplateAssignmentResponse> {
        self.update_assignment(
            ApiRequest::patch(
                "/v1/profile_assignments/{assignment_id}",
                "updateTrustedProfileAssignment",
            ),
            params,
        )
        .await
    }

    pub fn trusted_profile_assignments_pager(
        &self,
        params: ListTrustedProfileAssignmentsParams,
    ) -> Result<Pager<ListTrustedProfileAssignmentsParams, TemplateAssignmentListResponse>, SdkError>
    {
        service_pager(self, params, |service: Self, params| async move {
            service.list_trusted_profile_assignments(&params).await
        })
    }

    // Trusted profile templates

    pub async fn list_profile_templates(
        &self,
        params: &ListProfileTemplatesParams,
    ) -> Response<TrustedProfileTemplateList> {
        self.list_templates(
            ApiRequest::get("/v1/profile_templates", "listProfileTemplates"),
            params,
        )
        .await
    }

    pub async fn create_profile_template(
        &self,
        params: &CreateProfileTemplateParams,
    ) -> Response<TrustedProfileTemplateResponse> {
        let request = ApiRequest::post("/v1/profile_templates", "createProfileTemplate");
        let request =
            profile_template_body(request, &params.template).caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_latest_profile_template_version(
        &self,
        params: &GetLatestProfileTemplateVersionParams,
    ) -> Response<TrustedProfileTemplateResponse> {
        self.get_latest_template_version(
            ApiRequest::get(
                "/v1/profile_templates/{template_id}",
                "getLatestProfileTemplateVersion",
            ),
            params,
        )
        .await
    }

    pub async fn delete_all_versions_of_profile_template(
        &self,
        params: &DeleteAllVersionsOfProfileTemplateParams,
    ) -> Response<EmptyObject> {
        self.delete_all_template_versions(
            ApiRequest::delete(
                "/v1/profile_templates/{template_id}",
                "deleteAllVersionsOfProfileTemplate",
            ),
            params,
        )
        .await
    }

    pub async fn list_versions_of_profile_template(
        &self,
        params: &ListVersionsOfProfileTemplateParams,
    ) -> Response<TrustedProfileTemplateList> {
        self.list_template_versions(
            ApiRequest::get(
                "/v1/profile_templates/{template_id}/versions",
                "listVersionsOfProfileTemplate",
            ),
            params,
        )
        .await
    }

    pub async fn create_profile_template_version(
        &self,
        params: &CreateProfileTemplateVersionParams,
    ) -> Response<TrustedProfileTemplateResponse> {
        RequiredParams::new()
            .string("template_id", &params.template_id)
            .check()?;

        let request = ApiRequest::post(
            "/v1/profile_templates/{template_id}/versions",
            "createProfileTemplateVersion",
        )
        .path_param("template_id", &params.template_id);
        let request =
            profile_template_body(request, &params.template).caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_profile_template_version(
        &self,
        params: &GetProfileTemplateVersionParams,
    ) -> Response<TrustedProfileTemplateResponse> {
        self.get_template_version(
            ApiRequest::get(
                "/v1/profile_templates/{template_id}/versions/{version}",
                "getProfileTemplateVersion",
            ),
            params,
        )
        .await
    }

    pub async fn update_profile_template_version(
        &self,
        params: &UpdateProfileTemplateVersionParams,
    ) -> Response<TrustedProfileTemplateResponse> {
        RequiredParams::new()
            .string("if_match", &params.if_match)
            .string("template_id", &params.template_id)
            .string("version", &params.version)
            .check()?;

        let request = ApiRequest::put(
            "/v1/profile_templates/{template_id}/versions/{version}",
            "updateProfileTemplateVersion",
        )
        .path_param("template_id", &params.template_id)
        .path_param("version", &params.version)
        .header("If-Match", &params.if_match);
        let request =
            profile_template_body(request, &params.template).caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn delete_profile_template_version(
        &self,
        params: &DeleteProfileTemplateVersionParams,
    ) -> Response<EmptyObject> {
        self.template_version_action(
            ApiRequest::delete(
                "/v1/profile_templates/{template_id}/versions/{version}",
                "deleteProfileTemplateVersion",
            ),
            params,
        )
        .await
    }

    pub async fn commit_profile_template(
        &self,
        params: &CommitProfileTemplateParams,
    ) -> Response<EmptyObject> {
        self.template_version_action(
            ApiRequest::post(
                "/v1/profile_templates/{template_id}/versions/{version}/commit",
                "commitProfileTemplate",
            ),
            params,
        )
        .await
    }

    pub fn profile_templates_pager(
        &self,
        params: ListProfileTemplatesParams,
    ) -> Result<Pager<ListProfileTemplatesParams, TrustedProfileTemplateList>, SdkError> {
        service_pager(self, params, |service: Self, params| async move {
            service.list_profile_templates(&params).await
        })
    }

    pub fn profile_template_versions_pager(
        &self,
        params: ListVersionsOfProfileTemplateParams,
    ) -> Result<Pager<ListVersionsOfProfileTemplateParams, TrustedProfileTemplateList>, SdkError>
    {
        service_pager(self, params, |service: Self, params| async move {
            service.list_versions_of_profile_template(&params).await
        })
    }

    // Shared shapes of the two template families

    async fn list_assignments(
        &self,
        request: ApiRequest,
        params: &ListAssignmentsParams,
    ) -> Response<TemplateAssignmentListResponse> {
        let request = request
            .query_opt("account_id", params.account_id.as_deref())
            .query_opt("template_id", params.template_id.as_deref())
            .query_opt("template_version", params.template_version.as_deref())
            .query_opt("target", params.target.as_deref())
            .query_opt("target_type", params.target_type.as_deref())
            .query_opt("limit", params.limit)
            .query_opt("pagetoken", params.pagetoken.as_deref())
            .query_opt("sort", params.sort.as_deref())
            .query_opt("order", params.order.as_deref())
            .query_opt("include_history", params.include_history)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn create_assignment(
        &self,
        request: ApiRequest,
        params: &CreateAssignmentParams,
    ) -> Response<TemplateAssignmentResponse> {
        RequiredParams::new()
            .string("template_id", &params.template_id)
            .string("target_type", &params.target_type)
            .string("target", &params.target)
            .check()?;

        let request = request
            .body_field("template_id", &params.template_id)
            .body_field("template_version", &params.template_version)
            .body_field("target_type", &params.target_type)
            .body_field("target", &params.target)
            .accept_json()
            .content_type_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn get_assignment(
        &self,
        request: ApiRequest,
        params: &GetAssignmentParams,
    ) -> Response<TemplateAssignmentResponse> {
        RequiredParams::new()
            .string("assignment_id", &params.assignment_id)
            .check()?;

        let request = request
            .path_param("assignment_id", &params.assignment_id)
            .query_opt("include_history", params.include_history)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn delete_assignment(
        &self,
        request: ApiRequest,
        params: &DeleteAssignmentParams,
    ) -> Response<ExceptionResponse> {
        RequiredParams::new()
            .string("assignment_id", &params.assignment_id)
            .check()?;

        let request = request
            .path_param("assignment_id", &params.assignment_id)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn update_assignment(
        &self,
        request: ApiRequest,
        params: &UpdateAssignmentParams,
    ) -> Response<TemplateAssignmentResponse> {
        RequiredParams::new()
            .string("assignment_id", &params.assignment_id)
            .string("if_match", &params.if_match)
            .check()?;

        let request = request
            .path_param("assignment_id", &params.assignment_id)
            .body_field("template_version", &params.template_version)
            .accept_json()
            .content_type_json()
            .header("If-Match", &params.if_match)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn list_templates<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        params: &ListTemplatesParams,
    ) -> Response<T> {
        let request = request
            .query_opt("account_id", params.account_id.as_deref())
            .query_opt("limit", params.limit)
            .query_opt("pagetoken", params.pagetoken.as_deref())
            .query_opt("sort", params.sort.as_deref())
            .query_opt("order", params.order.as_deref())
            .query_opt("include_history", params.include_history)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn get_latest_template_version<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        params: &GetLatestTemplateVersionParams,
    ) -> Response<T> {
        RequiredParams::new()
            .string("template_id", &params.template_id)
            .check()?;

        let request = request
            .path_param("template_id", &params.template_id)
            .query_opt("include_history", params.include_history)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn delete_all_template_versions(
        &self,
        request: ApiRequest,
        params: &TemplateIdParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("template_id", &params.template_id)
            .check()?;

        let request = request
            .path_param("template_id", &params.template_id)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn list_template_versions<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        params: &ListTemplateVersionsParams,
    ) -> Response<T> {
        RequiredParams::new()
            .string("template_id", &params.template_id)
            .check()?;

        let request = request
            .path_param("template_id", &params.template_id)
            .query_opt("limit", params.limit)
            .query_opt("pagetoken", params.pagetoken.as_deref())
            .query_opt("sort", params.sort.as_deref())
            .query_opt("order", params.order.as_deref())
            .query_opt("include_history", params.include_history)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn get_template_version<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        params: &GetTemplateVersionParams,
    ) -> Response<T> {
        RequiredParams::new()
            .string("template_id", &params.template_id)
            .string("version", &params.version)
            .check()?;

        let request = request
            .path_param("template_id", &params.template_id)
            .path_param("version", &params.version)
            .query_opt("include_history", params.include_history)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    async fn template_version_action(
        &self,
        request: ApiRequest,
        params: &TemplateVersionParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("template_id", &params.template_id)
            .string("version", &params.version)
            .check()?;

        let request = request
            .path_param("template_id", &params.template_id)
            .path_param("version", &params.version)
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }
}

fn account_settings_template_body(
    request: ApiRequest,
    template: &AccountSettingsTemplateFields,
) -> ApiRequest {
    request
        .body_field_opt("account_id", template.account_id.as_ref())
        .body_field_opt("name", template.name.as_ref())
        .body_field_opt("description", template.description.as_ref())
        .body_field_opt("account_settings", template.account_settings.as_ref())
        .accept_json()
        .content_type_json()
}

fn profile_template_body(request: ApiRequest, template: &ProfileTemplateFields) -> ApiRequest {
    request
        .body_field_opt("account_id", template.account_id.as_ref())
        .body_field_opt("name", template.name.as_ref())
        .body_field_opt("description", template.description.as_ref())
        .body_field_opt("profile", template.profile.as_ref())
        .body_field_opt(
            "policy_template_references",
            template.policy_template_references.as_ref(),
        )
        .body_field_opt("action_controls", template.action_controls.as_ref())
        .accept_json()
        .content_type_json()
}
