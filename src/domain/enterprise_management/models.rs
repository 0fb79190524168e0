use serde::{Deserialize, Serialize};

use crate::domain::pagination::{query_param_from_url, PagedResult};

/// Query parameter carrying the document cursor in `next_url`
pub const NEXT_DOCID_PARAM: &str = "next_docid";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enterprise {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_iam_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    /// CRN of the parent enterprise or account group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_iam_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enterprise_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_iam_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEnterpriseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_account_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAccountResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAccountGroupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListEnterprisesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    pub resources: Vec<Enterprise>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAccountsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    pub resources: Vec<Account>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAccountGroupsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    pub resources: Vec<AccountGroup>,
}

fn next_docid(next_url: &Option<String>) -> Option<String> {
    next_url
        .as_deref()
        .and_then(|url| query_param_from_url(url, NEXT_DOCID_PARAM))
}

impl PagedResult for ListEnterprisesResponse {
    type Item = Enterprise;

    fn next_cursor(&self) -> Option<String> {
        next_docid(&self.next_url)
    }

    fn into_items(self) -> Vec<Enterprise> {
        self.resources
    }
}

impl PagedResult for ListAccountsResponse {
    type Item = Account;

    fn next_cursor(&self) -> Option<String> {
        next_docid(&self.next_url)
    }

    fn into_items(self) -> Vec<Account> {
        self.resources
    }
}

impl PagedResult for ListAccountGroupsResponse {
    type Item = AccountGroup;

    fn next_cursor(&self) -> Option<String> {
        next_docid(&self.next_url)
    }

    fn into_items(self) -> Vec<AccountGroup> {
        self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_docid_from_relative_next_url() {
        let list: ListAccountsResponse = serde_json::from_value(serde_json::json!({
            "rows_count": 1,
            "next_url": "/v1/accounts?limit=1&next_docid=b7f0",
            "resources": [{ "id": "acc-1", "paid": true }]
        }))
        .unwrap();

        assert_eq!(list.next_cursor(), Some("b7f0".to_string()));
        assert_eq!(list.resources[0].paid, Some(true));
    }

    #[test]
    fn test_null_next_url_ends_paging() {
        let list: ListEnterprisesResponse = serde_json::from_value(serde_json::json!({
            "rows_count": 0,
            "next_url": null,
            "resources": []
        }))
        .unwrap();

        assert_eq!(list.next_cursor(), None);
    }
}
