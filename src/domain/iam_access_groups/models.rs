use serde::{Deserialize, Serialize};

use crate::domain::pagination::{query_param_from_url, PagedResult};

/// Query parameter carrying the offset in `next.href` links
pub const OFFSET_PARAM: &str = "offset";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HrefStruct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_federated: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupsList {
    pub limit: i64,
    pub offset: i64,
    pub total_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<HrefStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<HrefStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<HrefStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<HrefStruct>,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListGroupMembersResponseMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub member_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupMembersList {
    pub limit: i64,
    pub offset: i64,
    pub total_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<HrefStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<HrefStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<HrefStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<HrefStruct>,
    pub members: Vec<ListGroupMembersResponseMember>,
}

/// A member to add; `type` is `user`, `service` or `profile`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddGroupMembersRequestMembersItem {
    pub iam_id: String,
    #[serde(rename = "type")]
    pub member_type: String,
}

impl AddGroupMembersRequestMembersItem {
    pub fn new(iam_id: impl Into<String>, member_type: impl Into<String>) -> Self {
        Self {
            iam_id: iam_id.into(),
            member_type: member_type.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddGroupMembersResponseMembersItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub member_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddGroupMembersResponse {
    pub members: Vec<AddGroupMembersResponseMembersItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteGroupBulkMembersResponseMembersItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteGroupBulkMembersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_group_id: Option<String>,
    pub members: Vec<DeleteGroupBulkMembersResponseMembersItem>,
}

/// Per-group outcome of an `_allgroups` membership change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupMembershipResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorItem>,
}

pub type DeleteFromAllGroupsResponseGroupsItem = GroupMembershipResult;
pub type AddMembershipMultipleGroupsResponseGroupsItem = GroupMembershipResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteFromAllGroupsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_id: Option<String>,
    pub groups: Vec<DeleteFromAllGroupsResponseGroupsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddMembershipMultipleGroupsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_id: Option<String>,
    pub groups: Vec<AddMembershipMultipleGroupsResponseGroupsItem>,
}

/// Claim comparison of a dynamic rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConditions {
    pub claim: String,
    /// `EQUALS`, `EQUALS_IGNORE_CASE`, `IN`, `NOT_EQUALS_IGNORE_CASE`,
    /// `NOT_EQUALS` or `CONTAINS`
    pub operator: String,
    pub value: String,
}

impl RuleConditions {
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
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RuleConditions>,
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
pub struct RulesList {
    pub rules: Vec<Rule>,
}

/// Access-group settings of an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_access_enabled: Option<bool>,
}

fn next_offset(next: &Option<HrefStruct>) -> Option<String> {
    next.as_ref()
        .and_then(|link| link.href.as_deref())
        .and_then(|href| query_param_from_url(href, OFFSET_PARAM))
}

impl PagedResult for GroupsList {
    type Item = Group;

    fn next_cursor(&self) -> Option<String> {
        next_offset(&self.next)
    }

    fn into_items(self) -> Vec<Group> {
        self.groups
    }
}

impl PagedResult for GroupMembersList {
    type Item = ListGroupMembersResponseMember;

    fn next_cursor(&self) -> Option<String> {
        next_offset(&self.next)
    }

    fn into_items(self) -> Vec<ListGroupMembersResponseMember> {
        self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_list_offset_cursor() {
        let list: GroupsList = serde_json::from_value(serde_json::json!({
            "limit": 1,
            "offset": 0,
            "total_count": 2,
            "next": { "href": "https://iam.cloud.ibm.com/v2/groups?account_id=acc&limit=1&offset=1" },
            "groups": [{ "id": "AccessGroupId-1", "name": "admins" }]
        }))
        .unwrap();

        assert_eq!(list.next_cursor(), Some("1".to_string()));
        let groups = list.into_items();
        assert_eq!(groups[0].name.as_deref(), Some("admins"));
    }

    #[test]
    fn test_members_list_without_next_is_last_page() {
        let list: GroupMembersList = serde_json::from_value(serde_json::json!({
            "limit": 50,
            "offset": 0,
            "total_count": 1,
            "members": [{ "iam_id": "IBMid-1", "type": "user" }]
        }))
        .unwrap();

        assert_eq!(list.next_cursor(), None);
        assert_eq!(list.members[0].member_type.as_deref(), Some("user"));
    }

    #[test]
    fn test_add_member_item_serializes_type() {
        let item = AddGroupMembersRequestMembersItem::new("iam-ServiceId-1", "service");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "iam_id": "iam-ServiceId-1", "type": "service" }));
    }
}
