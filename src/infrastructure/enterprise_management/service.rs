use crate::config::ServiceConfig;
use crate::domain::enterprise_management::*;
use crate::domain::{ApiRequest, DetailedResponse, EmptyObject, Pager, RequiredParams, SdkError};
use crate::infrastructure::base_service::{service_pager, BaseService, BaseServiceOptions};

pub const DEFAULT_SERVICE_URL: &str = "https://enterprise.cloud.ibm.com/v1";
pub const DEFAULT_SERVICE_NAME: &str = "enterprise_management";
const SERVICE_VERSION: &str = "v1";

type Response<T> = Result<DetailedResponse<T>, SdkError>;

/// Client for the Enterprise Management API
#[derive(Debug, Clone)]
pub struct EnterpriseManagementV1 {
    base: BaseService,
}

impl EnterpriseManagementV1 {
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

    // Enterprises

    /// Turn a standalone account into an enterprise account
    pub async fn create_enterprise(
        &self,
        params: &CreateEnterpriseParams,
    ) -> Response<CreateEnterpriseResponse> {
        RequiredParams::new()
            .string("source_account_id", &params.source_account_id)
            .string("name", &params.name)
            .string("primary_contact_iam_id", &params.primary_contact_iam_id)
            .check()?;

        let request = ApiRequest::post("/enterprises", "createEnterprise")
            .body_field("source_account_id", &params.source_account_id)
            .body_field("name", &params.name)
            .body_field("primary_contact_iam_id", &params.primary_contact_iam_id)
            .body_field_opt("domain", params.domain.as_ref())
            .accept_json()
            .content_type_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn list_enterprises(
        &self,
        params: &ListEnterprisesParams,
    ) -> Response<ListEnterprisesResponse> {
        let request = ApiRequest::get("/enterprises", "listEnterprises")
            .query_opt("enterprise_account_id", params.enterprise_account_id.as_deref())
            .query_opt("account_group_id", params.account_group_id.as_deref())
            .query_opt("account_id", params.account_id.as_deref())
            .query_opt("next_docid", params.next_docid.as_deref())
            .query_opt("limit", params.limit)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_enterprise(&self, params: &GetEnterpriseParams) -> Response<Enterprise> {
        RequiredParams::new()
            .string("enterprise_id", &params.enterprise_id)
            .check()?;

        let request = ApiRequest::get("/enterprises/{enterprise_id}", "getEnterprise")
            .path_param("enterprise_id", &params.enterprise_id)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Update the name, domain or primary contact of an enterprise
    pub async fn update_enterprise(&self, params: &UpdateEnterpriseParams) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("enterprise_id", &params.enterprise_id)
            .check()?;

        let request = ApiRequest::patch("/enterprises/{enterprise_id}", "updateEnterprise")
            .path_param("enterprise_id", &params.enterprise_id)
            .body_field_opt("name", params.name.as_ref())
            .body_field_opt("domain", params.domain.as_ref())
            .body_field_opt("primary_contact_iam_id", params.primary_contact_iam_id.as_ref())
            .content_type_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_enterprise_permissible_actions(
        &self,
        params: &GetEnterprisePermissibleActionsParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("enterprise_id", &params.enterprise_id)
            .check()?;

        let request = permissible_actions(
            ApiRequest::post(
                "/enterprises/{enterprise_id}/permissible-actions",
                "getEnterprisePermissibleActions",
            )
            .path_param("enterprise_id", &params.enterprise_id),
            params.actions.as_ref(),
        )
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Move an existing standalone account into the enterprise
    pub async fn import_account_to_enterprise(
        &self,
        params: &ImportAccountToEnterpriseParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("enterprise_id", &params.enterprise_id)
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::put(
            "/enterprises/{enterprise_id}/import/accounts/{account_id}",
            "importAccountToEnterprise",
        )
        .path_param("enterprise_id", &params.enterprise_id)
        .path_param("account_id", &params.account_id)
        .body_field_opt("parent", params.parent.as_ref())
        .body_field_opt("billing_unit_id", params.billing_unit_id.as_ref())
        .content_type_json()
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub fn enterprises_pager(
        &self,
        params: ListEnterprisesParams,
    ) -> Result<Pager<ListEnterprisesParams, ListEnterprisesResponse>, SdkError> {
        service_pager(self, params, |service: Self, params| async move {
            service.list_enterprises(&params).await
        })
    }

    // Accounts

    /// Create a new account under an enterprise or account group
    pub async fn create_account(&self, params: &CreateAccountParams) -> Response<CreateAccountResponse> {
        RequiredParams::new()
            .string("parent", &params.parent)
            .string("name", &params.name)
            .string("owner_iam_id", &params.owner_iam_id)
            .check()?;

        let request = ApiRequest::post("/accounts", "createAccount")
            .body_field("parent", &params.parent)
            .body_field("name", &params.name)
            .body_field("owner_iam_id", &params.owner_iam_id)
            .accept_json()
            .content_type_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn list_accounts(&self, params: &ListAccountsParams) -> Response<ListAccountsResponse> {
        let request = ApiRequest::get("/accounts", "listAccounts")
            .query_opt("enterprise_id", params.enterprise_id.as_deref())
            .query_opt("account_group_id", params.account_group_id.as_deref())
            .query_opt("next_docid", params.next_docid.as_deref())
            .query_opt("parent", params.parent.as_deref())
            .query_opt("limit", params.limit)
            .query_opt("include_deleted", params.include_deleted)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_account(&self, params: &GetAccountParams) -> Response<Account> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request = ApiRequest::get("/accounts/{account_id}", "getAccount")
            .path_param("account_id", &params.account_id)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    /// Move an account to another parent
    pub async fn update_account(&self, params: &UpdateAccountParams) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .string("parent", &params.parent)
            .check()?;

        let request = ApiRequest::patch("/accounts/{account_id}", "updateAccount")
            .path_param("account_id", &params.account_id)
            .body_field("parent", &params.parent)
            .content_type_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_account_permissible_actions(
        &self,
        params: &GetAccountPermissibleActionsParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("account_id", &params.account_id)
            .check()?;

        let request = permissible_actions(
            ApiRequest::post(
                "/accounts/{account_id}/permissible-actions",
                "getAccountPermissibleActions",
            )
            .path_param("account_id", &params.account_id),
            params.actions.as_ref(),
        )
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub fn accounts_pager(
        &self,
        params: ListAccountsParams,
    ) -> Result<Pager<ListAccountsParams, ListAccountsResponse>, SdkError> {
        service_pager(self, params, |service: Self, params| async move {
            service.list_accounts(&params).await
        })
    }

    // Account groups

    pub async fn create_account_group(
        &self,
        params: &CreateAccountGroupParams,
    ) -> Response<CreateAccountGroupResponse> {
        RequiredParams::new()
            .string("parent", &params.parent)
            .string("name", &params.name)
            .string("primary_contact_iam_id", &params.primary_contact_iam_id)
            .check()?;

        let request = ApiRequest::post("/account-groups", "createAccountGroup")
            .body_field("parent", &params.parent)
            .body_field("name", &params.name)
            .body_field("primary_contact_iam_id", &params.primary_contact_iam_id)
            .accept_json()
            .content_type_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn list_account_groups(
        &self,
        params: &ListAccountGroupsParams,
    ) -> Response<ListAccountGroupsResponse> {
        let request = ApiRequest::get("/account-groups", "listAccountGroups")
            .query_opt("enterprise_id", params.enterprise_id.as_deref())
            .query_opt("parent_account_group_id", params.parent_account_group_id.as_deref())
            .query_opt("next_docid", params.next_docid.as_deref())
            .query_opt("parent", params.parent.as_deref())
            .query_opt("limit", params.limit)
            .query_opt("include_deleted", params.include_deleted)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_account_group(&self, params: &GetAccountGroupParams) -> Response<AccountGroup> {
        RequiredParams::new()
            .string("account_group_id", &params.account_group_id)
            .check()?;

        let request = ApiRequest::get("/account-groups/{account_group_id}", "getAccountGroup")
            .path_param("account_group_id", &params.account_group_id)
            .accept_json()
            .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn update_account_group(
        &self,
        params: &UpdateAccountGroupParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("account_group_id", &params.account_group_id)
            .check()?;

        let request =
            ApiRequest::patch("/account-groups/{account_group_id}", "updateAccountGroup")
                .path_param("account_group_id", &params.account_group_id)
                .body_field_opt("name", params.name.as_ref())
                .body_field_opt("primary_contact_iam_id", params.primary_contact_iam_id.as_ref())
                .content_type_json()
                .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub async fn get_account_group_permissible_actions(
        &self,
        params: &GetAccountGroupPermissibleActionsParams,
    ) -> Response<EmptyObject> {
        RequiredParams::new()
            .string("account_group_id", &params.account_group_id)
            .check()?;

        let request = permissible_actions(
            ApiRequest::post(
                "/account-groups/{account_group_id}/permissible-actions",
                "getAccountGroupPermissibleActions",
            )
            .path_param("account_group_id", &params.account_group_id),
            params.actions.as_ref(),
        )
        .caller_headers(&params.headers);

        self.base.create_request(request).await
    }

    pub fn account_groups_pager(
        &self,
        params: ListAccountGroupsParams,
    ) -> Result<Pager<ListAccountGroupsParams, ListAccountGroupsResponse>, SdkError> {
        service_pager(self, params, |service: Self, params| async move {
            service.list_account_groups(&params).await
        })
    }
}

fn permissible_actions(request: ApiRequest, actions: Option<&Vec<String>>) -> ApiRequest {
    request.body_field_opt("actions", actions).content_type_json()
}
