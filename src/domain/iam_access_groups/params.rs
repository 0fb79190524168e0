use crate::domain::error::SdkError;
use crate::domain::pagination::PageCursor;
use crate::domain::request::Headers;

use super::models::{AddGroupMembersRequestMembersItem, RuleConditions};

#[derive(Debug, Clone, Default)]
pub struct CreateAccessGroupParams {
    pub account_id: String,
    pub name: String,
    pub description: Option<String>,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ListAccessGroupsParams {
    pub account_id: String,
    pub transaction_id: Option<String>,
    /// Only groups this IAM id belongs to
    pub iam_id: Option<String>,
    /// `static`, `dynamic` or `all`
    pub membership_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort: Option<String>,
    pub show_federated: Option<bool>,
    pub hide_public_access: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetAccessGroupParams {
    pub access_group_id: String,
    pub transaction_id: Option<String>,
    pub show_federated: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccessGroupParams {
    pub access_group_id: String,
    pub if_match: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteAccessGroupParams {
    pub access_group_id: String,
    pub transaction_id: Option<String>,
    /// Delete even when the group still has members or rules
    pub force: Option<bool>,
    pub headers: Headers,
}

/// Parameters of single-member operations
#[derive(Debug, Clone, Default)]
pub struct GroupMemberParams {
    pub access_group_id: String,
    pub iam_id: String,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

pub type IsMemberOfAccessGroupParams = GroupMemberParams;
pub type RemoveMemberFromAccessGroupParams = GroupMemberParams;

#[derive(Debug, Clone, Default)]
pub struct AddMembersToAccessGroupParams {
    pub access_group_id: String,
    pub members: Option<Vec<AddGroupMembersRequestMembersItem>>,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ListAccessGroupMembersParams {
    pub access_group_id: String,
    pub transaction_id: Option<String>,
    pub membership_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// `user`, `service` or `profile`
    pub member_type: Option<String>,
    pub verbose: Option<bool>,
    pub sort: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct RemoveMembersFromAccessGroupParams {
    pub access_group_id: String,
    pub members: Option<Vec<String>>,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct RemoveMemberFromAllAccessGroupsParams {
    pub account_id: String,
    pub iam_id: String,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct AddMemberToMultipleAccessGroupsParams {
    pub account_id: String,
    pub iam_id: String,
    /// `user`, `service` or `profile`
    pub member_type: Option<String>,
    pub groups: Option<Vec<String>>,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct AddAccessGroupRuleParams {
    pub access_group_id: String,
    /// Hours a dynamic membership lasts after the last login
    pub expiration: i64,
    pub realm_name: String,
    pub conditions: Vec<RuleConditions>,
    pub name: Option<String>,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ListAccessGroupRulesParams {
    pub access_group_id: String,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct AccessGroupRuleParams {
    pub access_group_id: String,
    pub rule_id: String,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

pub type GetAccessGroupRuleParams = AccessGroupRuleParams;
pub type RemoveAccessGroupRuleParams = AccessGroupRuleParams;

#[derive(Debug, Clone, Default)]
pub struct ReplaceAccessGroupRuleParams {
    pub access_group_id: String,
    pub rule_id: String,
    pub if_match: String,
    pub expiration: i64,
    pub realm_name: String,
    pub conditions: Vec<RuleConditions>,
    pub name: Option<String>,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetAccountSettingsParams {
    pub account_id: String,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccountSettingsParams {
    pub account_id: String,
    pub public_access_enabled: Option<bool>,
    pub transaction_id: Option<String>,
    pub headers: Headers,
}

fn parse_offset(cursor: &str) -> Result<i64, SdkError> {
    cursor
        .parse()
        .map_err(|_| SdkError::invalid_parameter(format!("invalid offset cursor '{}'", cursor)))
}

impl PageCursor for ListAccessGroupsParams {
    fn cursor(&self) -> Option<String> {
        self.offset.map(|offset| offset.to_string())
    }

    fn set_cursor(&mut self, cursor: &str) -> Result<(), SdkError> {
        self.offset = Some(parse_offset(cursor)?);
        Ok(())
    }
}

impl PageCursor for ListAccessGroupMembersParams {
    fn cursor(&self) -> Option<String> {
        self.offset.map(|offset| offset.to_string())
    }

    fn set_cursor(&mut self, cursor: &str) -> Result<(), SdkError> {
        self.offset = Some(parse_offset(cursor)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_cursor_roundtrip() {
        let mut params = ListAccessGroupsParams {
            account_id: "acc".to_string(),
            ..Default::default()
        };
        assert_eq!(params.cursor(), None);

        params.set_cursor("50").unwrap();
        assert_eq!(params.offset, Some(50));
    }

    #[test]
    fn test_non_numeric_offset_is_rejected() {
        let mut params = ListAccessGroupMembersParams::default();
        let err = params.set_cursor("abc").unwrap_err();
        assert!(matches!(err, SdkError::InvalidParameter { .. }));
    }
}
