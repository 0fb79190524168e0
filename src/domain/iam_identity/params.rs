//! Operation parameters for the IAM Identity API
//!
//! Required parameters are plain fields, optional ones are `Option`s. Every
//! struct carries caller `headers` that are applied last.

use crate::domain::error::SdkError;
use crate::domain::pagination::PageCursor;
use crate::domain::request::Headers;

use super::models::{
    AccountSettingsComponent, AccountSettingsUserMfa, ActionControls,
    ApiKeyInsideCreateServiceIdRequest, CreateProfileLinkRequestLink, PolicyTemplateReference,
    ProfileClaimRuleConditions, ProfileIdentityRequest, ResponseContext,
    TemplateProfileComponentRequest,
};

macro_rules! pagetoken_cursor {
    ($($params:ty),+ $(,)?) => {
        $(
            impl PageCursor for $params {
                fn cursor(&self) -> Option<String> {
                    self.pagetoken.clone()
                }

                fn set_cursor(&mut self, cursor: &str) -> Result<(), SdkError> {
                    self.pagetoken = Some(cursor.to_string());
                    Ok(())
                }
            }
        )+
    };
}

// API keys

#[derive(Debug, Clone, Default)]
pub struct ListApiKeysParams {
    pub account_id: Option<String>,
    pub iam_id: Option<String>,
    pub pagesize: Option<i64>,
    pub pagetoken: Option<String>,
    /// `entity` or `account`
    pub scope: Option<String>,
    /// `user` or `serviceid`
    pub api_key_type: Option<String>,
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub order: Option<String>,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct CreateApiKeyParams {
    pub name: String,
    pub iam_id: String,
    pub description: Option<String>,
    pub account_id: Option<String>,
    /// Bring your own key value instead of a generated one
    pub apikey: Option<String>,
    pub store_value: Option<bool>,
    pub support_sessions: Option<bool>,
    /// `none`, `disable` or `delete`
    pub action_when_leaked: Option<String>,
    pub entity_lock: Option<String>,
    pub entity_disable: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetApiKeysDetailsParams {
    /// Key value to look up, sent as the `IAM-ApiKey` header
    pub iam_api_key: Option<String>,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetApiKeyParams {
    pub id: String,
    pub include_history: Option<bool>,
    pub include_activity: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateApiKeyParams {
    pub id: String,
    pub if_match: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub support_sessions: Option<bool>,
    pub action_when_leaked: Option<String>,
    pub headers: Headers,
}

/// Parameters of the API key operations addressed by id alone
#[derive(Debug, Clone, Default)]
pub struct ApiKeyIdParams {
    pub id: String,
    pub headers: Headers,
}

impl ApiKeyIdParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: Headers::new(),
        }
    }
}

pub type DeleteApiKeyParams = ApiKeyIdParams;
pub type LockApiKeyParams = ApiKeyIdParams;
pub type UnlockApiKeyParams = ApiKeyIdParams;
pub type DisableApiKeyParams = ApiKeyIdParams;
pub type EnableApiKeyParams = ApiKeyIdParams;

// Service IDs

#[derive(Debug, Clone, Default)]
pub struct ListServiceIdsParams {
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub pagesize: Option<i64>,
    pub pagetoken: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct CreateServiceIdParams {
    pub account_id: String,
    pub name: String,
    pub description: Option<String>,
    pub unique_instance_crns: Option<Vec<String>>,
    pub apikey: Option<ApiKeyInsideCreateServiceIdRequest>,
    pub entity_lock: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetServiceIdParams {
    pub id: String,
    pub include_history: Option<bool>,
    pub include_activity: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceIdParams {
    pub id: String,
    pub if_match: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub unique_instance_crns: Option<Vec<String>>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceIdIdParams {
    pub id: String,
    pub headers: Headers,
}

impl ServiceIdIdParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: Headers::new(),
        }
    }
}

pub type DeleteServiceIdParams = ServiceIdIdParams;
pub type LockServiceIdParams = ServiceIdIdParams;
pub type UnlockServiceIdParams = ServiceIdIdParams;

// Trusted profiles

#[derive(Debug, Clone, Default)]
pub struct CreateProfileParams {
    pub name: String,
    pub account_id: String,
    pub description: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ListProfilesParams {
    pub account_id: String,
    pub name: Option<String>,
    pub pagesize: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub include_history: Option<bool>,
    pub pagetoken: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetProfileParams {
    pub profile_id: String,
    pub include_activity: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub profile_id: String,
    pub if_match: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub headers: Headers,
}

/// Parameters of the profile operations addressed by profile id alone
#[derive(Debug, Clone, Default)]
pub struct ProfileIdParams {
    pub profile_id: String,
    pub headers: Headers,
}

impl ProfileIdParams {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            headers: Headers::new(),
        }
    }
}

pub type DeleteProfileParams = ProfileIdParams;
pub type ListClaimRulesParams = ProfileIdParams;
pub type ListLinksParams = ProfileIdParams;
pub type GetProfileIdentitiesParams = ProfileIdParams;

// Claim rules

#[derive(Debug, Clone, Default)]
pub struct CreateClaimRuleParams {
    pub profile_id: String,
    /// `Profile-SAML` or `Profile-CR`
    pub rule_type: String,
    pub conditions: Vec<ProfileClaimRuleConditions>,
    pub context: Option<ResponseContext>,
    pub name: Option<String>,
    pub realm_name: Option<String>,
    pub cr_type: Option<String>,
    pub expiration: Option<i64>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateClaimRuleParams {
    pub profile_id: String,
    pub rule_id: String,
    pub if_match: String,
    pub rule_type: String,
    pub conditions: Vec<ProfileClaimRuleConditions>,
    pub context: Option<ResponseContext>,
    pub name: Option<String>,
    pub realm_name: Option<String>,
    pub cr_type: Option<String>,
    pub expiration: Option<i64>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ClaimRuleIdParams {
    pub profile_id: String,
    pub rule_id: String,
    pub headers: Headers,
}

pub type GetClaimRuleParams = ClaimRuleIdParams;
pub type DeleteClaimRuleParams = ClaimRuleIdParams;

// Links

#[derive(Debug, Clone, Default)]
pub struct CreateLinkParams {
    pub profile_id: String,
    /// `VSI`, `IKS_SA` or `ROKS_SA`
    pub cr_type: String,
    pub link: CreateProfileLinkRequestLink,
    pub name: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct LinkIdParams {
    pub profile_id: String,
    pub link_id: String,
    pub headers: Headers,
}

pub type GetLinkParams = LinkIdParams;
pub type DeleteLinkParams = LinkIdParams;

// Identities

#[derive(Debug, Clone, Default)]
pub struct SetProfileIdentitiesParams {
    pub profile_id: String,
    pub if_match: String,
    pub identities: Option<Vec<ProfileIdentityRequest>>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct SetProfileIdentityParams {
    pub profile_id: String,
    /// Path segment: `user`, `serviceid` or `crn`
    pub identity_type: String,
    pub identifier: String,
    /// Body `type`: `user`, `serviceid` or `crn`
    pub kind: String,
    pub accounts: Option<Vec<String>>,
    pub description: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileIdentityIdParams {
    pub profile_id: String,
    pub identity_type: String,
    pub identifier_id: String,
    pub headers: Headers,
}

pub type GetProfileIdentityParams = ProfileIdentityIdParams;
pub type DeleteProfileIdentityParams = ProfileIdentityIdParams;

// Account settings

#[derive(Debug, Clone, Default)]
pub struct GetAccountSettingsParams {
    pub account_id: String,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccountSettingsParams {
    pub if_match: String,
    pub account_id: String,
    pub restrict_create_service_id: Option<String>,
    pub restrict_create_platform_apikey: Option<String>,
    pub allowed_ip_addresses: Option<String>,
    pub mfa: Option<String>,
    pub user_mfa: Option<Vec<AccountSettingsUserMfa>>,
    pub session_expiration_in_seconds: Option<String>,
    pub session_invalidation_in_seconds: Option<String>,
    pub max_sessions_per_identity: Option<String>,
    pub system_access_token_expiration_in_seconds: Option<String>,
    pub system_refresh_token_expiration_in_seconds: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetEffectiveAccountSettingsParams {
    pub account_id: String,
    pub include_history: Option<bool>,
    pub resolve_user_mfa: Option<bool>,
    pub headers: Headers,
}

// MFA and activity reports

#[derive(Debug, Clone, Default)]
pub struct GetMfaStatusParams {
    pub account_id: String,
    pub iam_id: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct CreateMfaReportParams {
    pub account_id: String,
    /// Report type, `mfa_status` when unset
    pub report_type: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct CreateReportParams {
    pub account_id: String,
    /// Report type, `inactive` when unset
    pub report_type: Option<String>,
    /// ISO 8601 duration such as `720h`
    pub duration: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ReportIdParams {
    pub account_id: String,
    pub reference: String,
    pub headers: Headers,
}

pub type GetMfaReportParams = ReportIdParams;
pub type GetReportParams = ReportIdParams;

// Template assignments, shared by account settings and trusted profile templates

#[derive(Debug, Clone, Default)]
pub struct ListAssignmentsParams {
    pub account_id: Option<String>,
    pub template_id: Option<String>,
    pub template_version: Option<String>,
    pub target: Option<String>,
    /// `Account` or `AccountGroup`
    pub target_type: Option<String>,
    pub limit: Option<i64>,
    pub pagetoken: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAssignmentParams {
    pub template_id: String,
    pub template_version: i64,
    pub target_type: String,
    pub target: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetAssignmentParams {
    pub assignment_id: String,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteAssignmentParams {
    pub assignment_id: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAssignmentParams {
    pub assignment_id: String,
    pub if_match: String,
    pub template_version: i64,
    pub headers: Headers,
}

pub type ListAccountSettingsAssignmentsParams = ListAssignmentsParams;
pub type CreateAccountSettingsAssignmentParams = CreateAssignmentParams;
pub type GetAccountSettingsAssignmentParams = GetAssignmentParams;
pub type DeleteAccountSettingsAssignmentParams = DeleteAssignmentParams;
pub type UpdateAccountSettingsAssignmentParams = UpdateAssignmentParams;
pub type ListTrustedProfileAssignmentsParams = ListAssignmentsParams;
pub type CreateTrustedProfileAssignmentParams = CreateAssignmentParams;
pub type GetTrustedProfileAssignmentParams = GetAssignmentParams;
pub type DeleteTrustedProfileAssignmentParams = DeleteAssignmentParams;
pub type UpdateTrustedProfileAssignmentParams = UpdateAssignmentParams;

// Templates, shared by account settings and trusted profile templates

#[derive(Debug, Clone, Default)]
pub struct ListTemplatesParams {
    pub account_id: Option<String>,
    pub limit: Option<i64>,
    pub pagetoken: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetLatestTemplateVersionParams {
    pub template_id: String,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateIdParams {
    pub template_id: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ListTemplateVersionsParams {
    pub template_id: String,
    pub limit: Option<i64>,
    pub pagetoken: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetTemplateVersionParams {
    pub template_id: String,
    pub version: String,
    pub include_history: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateVersionParams {
    pub template_id: String,
    pub version: String,
    pub headers: Headers,
}

pub type ListAccountSettingsTemplatesParams = ListTemplatesParams;
pub type GetLatestAccountSettingsTemplateVersionParams = GetLatestTemplateVersionParams;
pub type DeleteAllVersionsOfAccountSettingsTemplateParams = TemplateIdParams;
pub type ListVersionsOfAccountSettingsTemplateParams = ListTemplateVersionsParams;
pub type GetAccountSettingsTemplateVersionParams = GetTemplateVersionParams;
pub type DeleteAccountSettingsTemplateVersionParams = TemplateVersionParams;
pub type CommitAccountSettingsTemplateParams = TemplateVersionParams;
pub type ListProfileTemplatesParams = ListTemplatesParams;
pub type GetLatestProfileTemplateVersionParams = GetLatestTemplateVersionParams;
pub type DeleteAllVersionsOfProfileTemplateParams = TemplateIdParams;
pub type ListVersionsOfProfileTemplateParams = ListTemplateVersionsParams;
pub type GetProfileTemplateVersionParams = GetTemplateVersionParams;
pub type DeleteProfileTemplateVersionParams = TemplateVersionParams;
pub type CommitProfileTemplateParams = TemplateVersionParams;

/// Body shared by account settings template creation and updates
#[derive(Debug, Clone, Default)]
pub struct AccountSettingsTemplateFields {
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub account_settings: Option<AccountSettingsComponent>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAccountSettingsTemplateParams {
    pub template: AccountSettingsTemplateFields,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAccountSettingsTemplateVersionParams {
    pub template_id: String,
    pub template: AccountSettingsTemplateFields,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccountSettingsTemplateVersionParams {
    pub if_match: String,
    pub template_id: String,
    pub version: String,
    pub template: AccountSettingsTemplateFields,
    pub headers: Headers,
}

/// Body shared by trusted profile template creation and updates
#[derive(Debug, Clone, Default)]
pub struct ProfileTemplateFields {
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub profile: Option<TemplateProfileComponentRequest>,
    pub policy_template_references: Option<Vec<PolicyTemplateReference>>,
    pub action_controls: Option<ActionControls>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateProfileTemplateParams {
    pub template: ProfileTemplateFields,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct CreateProfileTemplateVersionParams {
    pub template_id: String,
    pub template: ProfileTemplateFields,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileTemplateVersionParams {
    pub if_match: String,
    pub template_id: String,
    pub version: String,
    pub template: ProfileTemplateFields,
    pub headers: Headers,
}

pagetoken_cursor!(
    ListApiKeysParams,
    ListServiceIdsParams,
    ListProfilesParams,
    ListAssignmentsParams,
    ListTemplatesParams,
    ListTemplateVersionsParams,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagetoken_cursor() {
        let mut params = ListApiKeysParams {
            account_id: Some("acc".to_string()),
            ..Default::default()
        };
        assert_eq!(params.cursor(), None);

        params.set_cursor("tok").unwrap();
        assert_eq!(params.cursor(), Some("tok".to_string()));
        assert_eq!(params.account_id.as_deref(), Some("acc"));
    }

    #[test]
    fn test_id_params_constructor() {
        let params = ApiKeyIdParams::new("ApiKey-1");
        assert_eq!(params.id, "ApiKey-1");
        assert!(params.headers.is_empty());
    }
}
