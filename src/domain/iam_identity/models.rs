//! Wire models for the IAM Identity API
//!
//! Response models default every field so that partially populated payloads
//! still decode; optional fields are omitted when serializing.

use serde::{Deserialize, Serialize};

use crate::domain::pagination::{query_param_from_url, PagedResult};

/// Query parameter carrying the page token in `next` links
pub const PAGE_TOKEN_PARAM: &str = "pagetoken";

/// Request metadata echoed back by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

/// One entry of an entity's change history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityHistoryRecord {
    pub timestamp: String,
    pub iam_id: String,
    pub iam_id_account: String,
    pub action: String,
    pub params: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_authn: Option<String>,
    pub authn_count: i64,
}

// API keys

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_tag: Option<String>,
    pub crn: String,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_sessions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_when_leaked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub iam_id: String,
    pub account_id: String,
    /// Only populated when the key value was stored or just created
    pub apikey: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<EntityHistoryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub apikeys: Vec<ApiKey>,
}

/// API key created together with a service ID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyInsideCreateServiceIdRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_value: Option<bool>,
}

// Service IDs

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    pub id: String,
    pub iam_id: String,
    pub entity_tag: String,
    pub crn: String,
    pub locked: bool,
    pub created_at: String,
    pub modified_at: String,
    pub account_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unique_instance_crns: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<EntityHistoryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apikey: Option<ApiKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceIdList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub serviceids: Vec<ServiceId>,
}

// Trusted profiles

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustedProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    pub id: String,
    pub entity_tag: String,
    pub crn: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    pub iam_id: String,
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ims_account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ims_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<EntityHistoryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustedProfilesList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub profiles: Vec<TrustedProfile>,
}

// Claim rules

/// A single claim comparison, e.g. `blueGroups EQUALS "admins"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileClaimRuleConditions {
    pub claim: String,
    pub operator: String,
    pub value: String,
}

impl ProfileClaimRuleConditions {
    pub fn new(
        claim: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            claim: claim.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileClaimRule {
    pub id: String,
    pub entity_tag: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm_name: Option<String>,
    pub expiration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cr_type: Option<String>,
    pub conditions: Vec<ProfileClaimRuleConditions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileClaimRuleList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    pub rules: Vec<ProfileClaimRule>,
}

// Links

/// Compute resource a profile link points at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProfileLinkRequestLink {
    pub crn: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLinkLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLink {
    pub id: String,
    pub entity_tag: String,
    pub created_at: String,
    pub modified_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub cr_type: String,
    pub link: ProfileLinkLink,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLinkList {
    pub links: Vec<ProfileLink>,
}

// Identities

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileIdentityRequest {
    pub identifier: String,
    /// `user`, `serviceid` or `crn`
    #[serde(rename = "type")]
    pub identity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileIdentityResponse {
    pub iam_id: String,
    pub identifier: String,
    #[serde(rename = "type")]
    pub identity_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileIdentitiesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_tag: Option<String>,
    pub identities: Vec<ProfileIdentityResponse>,
}

// Account settings

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsUserMfa {
    pub iam_id: String,
    /// `NONE`, `NONE_NO_ROPC`, `TOTP`, `TOTP4ALL`, `LEVEL1`, `LEVEL2` or `LEVEL3`
    pub mfa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectiveAccountSettingsUserMfa {
    pub iam_id: String,
    pub mfa: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    pub account_id: String,
    pub restrict_create_service_id: String,
    pub restrict_create_platform_apikey: String,
    pub allowed_ip_addresses: String,
    pub entity_tag: String,
    pub mfa: String,
    pub user_mfa: Vec<AccountSettingsUserMfa>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<EntityHistoryRecord>,
    pub session_expiration_in_seconds: String,
    pub session_invalidation_in_seconds: String,
    pub max_sessions_per_identity: String,
    pub system_access_token_expiration_in_seconds: String,
    pub system_refresh_token_expiration_in_seconds: String,
}

/// Account settings as carried by a template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_create_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_create_platform_apikey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_ip_addresses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_mfa: Option<Vec<AccountSettingsUserMfa>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_expiration_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_invalidation_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sessions_per_identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_access_token_expiration_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_refresh_token_expiration_in_seconds: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsEffectiveSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_create_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_create_platform_apikey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_ip_addresses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_mfa: Vec<EffectiveAccountSettingsUserMfa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_expiration_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_invalidation_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sessions_per_identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_access_token_expiration_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_refresh_token_expiration_in_seconds: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsAccountSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_create_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_create_platform_apikey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_ip_addresses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_mfa: Vec<EffectiveAccountSettingsUserMfa>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<EntityHistoryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_expiration_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_invalidation_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sessions_per_identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_access_token_expiration_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_refresh_token_expiration_in_seconds: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsAssignedTemplatesSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_create_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_create_platform_apikey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_ip_addresses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_mfa: Vec<EffectiveAccountSettingsUserMfa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_expiration_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_invalidation_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sessions_per_identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_access_token_expiration_in_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_refresh_token_expiration_in_seconds: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectiveAccountSettingsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    pub account_id: String,
    pub effective: AccountSettingsEffectiveSection,
    pub account: AccountSettingsAccountSection,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assigned_templates: Vec<AccountSettingsAssignedTemplatesSection>,
}

// MFA reporting

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MfaEnrollmentTypeStatus {
    pub required: bool,
    pub enrolled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountBasedMfaEnrollment {
    pub security_questions: MfaEnrollmentTypeStatus,
    pub totp: MfaEnrollmentTypeStatus,
    pub verisign: MfaEnrollmentTypeStatus,
    pub complies: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdBasedMfaEnrollment {
    pub trait_account_default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trait_user_specific: Option<String>,
    pub trait_effective: String,
    pub complies: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comply_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MfaEnrollments {
    pub effective_mfa_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_based_mfa: Option<IdBasedMfaEnrollment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_based_mfa: Option<AccountBasedMfaEnrollment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMfaEnrollments {
    pub iam_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_mfa_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_based_mfa: Option<IdBasedMfaEnrollment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_based_mfa: Option<AccountBasedMfaEnrollment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserReportMfaEnrollmentStatus {
    pub iam_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub enrollments: MfaEnrollments,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMfaEnrollmentStatus {
    pub created_by: String,
    pub reference: String,
    pub report_time: String,
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ims_account_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserReportMfaEnrollmentStatus>,
}

/// Handle returned when a report is requested
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportReference {
    pub reference: String,
}

// Activity reporting

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserActivity {
    pub iam_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_authn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApikeyActivityServiceid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApikeyActivityUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApikeyActivity {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub apikey_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serviceid: Option<ApikeyActivityServiceid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ApikeyActivityUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_authn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityActivity {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_authn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    pub created_by: String,
    pub reference: String,
    pub report_duration: String,
    pub report_start_time: String,
    pub report_end_time: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserActivity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub apikeys: Vec<ApikeyActivity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub serviceids: Vec<EntityActivity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<EntityActivity>,
}

// Template assignments

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateAssignmentResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateAssignmentResourceError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateAssignmentResponseResourceDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_created: Option<TemplateAssignmentResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<TemplateAssignmentResourceError>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateAssignmentResponseResource {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<TemplateAssignmentResponseResourceDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_settings: Option<TemplateAssignmentResponseResourceDetail>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub policy_template_refs: Vec<TemplateAssignmentResponseResourceDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateAssignmentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    pub id: String,
    pub account_id: String,
    pub template_id: String,
    pub template_version: i64,
    pub target_type: String,
    pub target: String,
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<TemplateAssignmentResponseResource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<EntityHistoryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub created_at: String,
    pub created_by_id: String,
    pub last_modified_at: String,
    pub last_modified_by_id: String,
    pub entity_tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateAssignmentListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub assignments: Vec<TemplateAssignmentResponse>,
}

// Account settings templates

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsTemplateResponse {
    pub id: String,
    pub version: i64,
    pub account_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub committed: bool,
    pub account_settings: AccountSettingsComponent,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<EntityHistoryRecord>,
    pub entity_tag: String,
    pub crn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsTemplateList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub account_settings_templates: Vec<AccountSettingsTemplateResponse>,
}

// Trusted profile templates

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyTemplateReference {
    pub id: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustedProfileTemplateClaimRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only `Profile-SAML` is supported
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
    pub conditions: Vec<ProfileClaimRuleConditions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateProfileComponentRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<TrustedProfileTemplateClaimRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identities: Option<Vec<ProfileIdentityRequest>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateProfileComponentResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<TrustedProfileTemplateClaimRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<ProfileIdentityResponse>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionControlsAddRemove {
    pub add: bool,
    pub remove: bool,
}

/// What a target account may change on assigned profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionControls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identities: Option<ActionControlsAddRemove>,
    pub rules: ActionControlsAddRemove,
    pub policies: ActionControlsAddRemove,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustedProfileTemplateResponse {
    pub id: String,
    pub version: i64,
    pub account_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<TemplateProfileComponentResponse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub policy_template_references: Vec<PolicyTemplateReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_controls: Option<ActionControls>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<EntityHistoryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustedProfileTemplateList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub profile_templates: Vec<TrustedProfileTemplateResponse>,
}

// Errors

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorItem {
    pub code: String,
    pub message_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Body returned by assignment deletes and by failed calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ResponseContext>,
    pub status_code: String,
    pub errors: Vec<ErrorItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

fn page_token(next: &Option<String>) -> Option<String> {
    next.as_deref()
        .and_then(|url| query_param_from_url(url, PAGE_TOKEN_PARAM))
}

impl PagedResult for ApiKeyList {
    type Item = ApiKey;

    fn next_cursor(&self) -> Option<String> {
        page_token(&self.next)
    }

    fn into_items(self) -> Vec<ApiKey> {
        self.apikeys
    }
}

impl PagedResult for ServiceIdList {
    type Item = ServiceId;

    fn next_cursor(&self) -> Option<String> {
        page_token(&self.next)
    }

    fn into_items(self) -> Vec<ServiceId> {
        self.serviceids
    }
}

impl PagedResult for TrustedProfilesList {
    type Item = TrustedProfile;

    fn next_cursor(&self) -> Option<String> {
        page_token(&self.next)
    }

    fn into_items(self) -> Vec<TrustedProfile> {
        self.profiles
    }
}

impl PagedResult for TemplateAssignmentListResponse {
    type Item = TemplateAssignmentResponse;

    fn next_cursor(&self) -> Option<String> {
        page_token(&self.next)
    }

    fn into_items(self) -> Vec<TemplateAssignmentResponse> {
        self.assignments
    }
}

impl PagedResult for AccountSettingsTemplateList {
    type Item = AccountSettingsTemplateResponse;

    fn next_cursor(&self) -> Option<String> {
        page_token(&self.next)
    }

    fn into_items(self) -> Vec<AccountSettingsTemplateResponse> {
        self.account_settings_templates
    }
}

impl PagedResult for TrustedProfileTemplateList {
    type Item = TrustedProfileTemplateResponse;

    fn next_cursor(&self) -> Option<String> {
        page_token(&self.next)
    }

    fn into_items(self) -> Vec<TrustedProfileTemplateResponse> {
        self.profile_templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_decodes_partial_payload() {
        let json = serde_json::json!({
            "id": "ApiKey-123",
            "crn": "crn:v1:bluemix:public:iam-identity::a/acc::apikey:ApiKey-123",
            "locked": true,
            "name": "my-key",
            "iam_id": "IBMid-1",
            "account_id": "acc",
            "created_by": "IBMid-1",
            "history": [{
                "timestamp": "2024-01-01T00:00+0000",
                "iam_id": "IBMid-1",
                "iam_id_account": "acc",
                "action": "create",
                "params": ["a"],
                "message": "created"
            }]
        });

        let key: ApiKey = serde_json::from_value(json).unwrap();
        assert_eq!(key.id, "ApiKey-123");
        assert!(key.locked);
        assert_eq!(key.apikey, "");
        assert_eq!(key.history.len(), 1);
        assert_eq!(key.history[0].action, "create");
    }

    #[test]
    fn test_claim_rule_type_uses_wire_name() {
        let rule = ProfileClaimRule {
            rule_type: "Profile-SAML".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["type"], "Profile-SAML");
        assert!(json.get("rule_type").is_none());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_page_token_from_next_link() {
        let list = ApiKeyList {
            next: Some("https://iam.cloud.ibm.com/v1/apikeys?pagesize=1&pagetoken=tok-2".into()),
            apikeys: vec![ApiKey::default()],
            ..Default::default()
        };

        assert_eq!(list.next_cursor(), Some("tok-2".to_string()));
        assert_eq!(list.into_items().len(), 1);
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let list = ServiceIdList::default();
        assert_eq!(list.next_cursor(), None);
    }

    #[test]
    fn test_effective_settings_user_name_is_camel_case_on_wire() {
        let json = serde_json::json!({
            "iam_id": "IBMid-1",
            "mfa": "TOTP",
            "userName": "user@example.com"
        });
        let mfa: EffectiveAccountSettingsUserMfa = serde_json::from_value(json).unwrap();
        assert_eq!(mfa.user_name.as_deref(), Some("user@example.com"));
    }
}
