use crate::domain::error::SdkError;
use crate::domain::pagination::PageCursor;
use crate::domain::request::Headers;

// Enterprises

#[derive(Debug, Clone, Default)]
pub struct CreateEnterpriseParams {
    /// Standalone account that becomes the enterprise account
    pub source_account_id: String,
    pub name: String,
    pub primary_contact_iam_id: String,
    pub domain: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ListEnterprisesParams {
    pub enterprise_account_id: Option<String>,
    pub account_group_id: Option<String>,
    pub account_id: Option<String>,
    pub next_docid: Option<String>,
    pub limit: Option<i64>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetEnterpriseParams {
    pub enterprise_id: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEnterpriseParams {
    pub enterprise_id: String,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub primary_contact_iam_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetEnterprisePermissibleActionsParams {
    pub enterprise_id: String,
    pub actions: Option<Vec<String>>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ImportAccountToEnterpriseParams {
    pub enterprise_id: String,
    pub account_id: String,
    /// Parent CRN, the enterprise itself when unset
    pub parent: Option<String>,
    pub billing_unit_id: Option<String>,
    pub headers: Headers,
}

// Accounts

#[derive(Debug, Clone, Default)]
pub struct CreateAccountParams {
    pub parent: String,
    pub name: String,
    pub owner_iam_id: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ListAccountsParams {
    pub enterprise_id: Option<String>,
    pub account_group_id: Option<String>,
    pub next_docid: Option<String>,
    pub parent: Option<String>,
    pub limit: Option<i64>,
    pub include_deleted: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetAccountParams {
    pub account_id: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccountParams {
    pub account_id: String,
    /// CRN of the new parent
    pub parent: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetAccountPermissibleActionsParams {
    pub account_id: String,
    pub actions: Option<Vec<String>>,
    pub headers: Headers,
}

// Account groups

#[derive(Debug, Clone, Default)]
pub struct CreateAccountGroupParams {
    pub parent: String,
    pub name: String,
    pub primary_contact_iam_id: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct ListAccountGroupsParams {
    pub enterprise_id: Option<String>,
    pub parent_account_group_id: Option<String>,
    pub next_docid: Option<String>,
    pub parent: Option<String>,
    pub limit: Option<i64>,
    pub include_deleted: Option<bool>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetAccountGroupParams {
    pub account_group_id: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccountGroupParams {
    pub account_group_id: String,
    pub name: Option<String>,
    pub primary_contact_iam_id: Option<String>,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default)]
pub struct GetAccountGroupPermissibleActionsParams {
    pub account_group_id: String,
    pub actions: Option<Vec<String>>,
    pub headers: Headers,
}

macro_rules! next_docid_cursor {
    ($($params:ty),+ $(,)?) => {
        $(
            impl PageCursor for $params {
                fn cursor(&self) -> Option<String> {
                    self.next_docid.clone()
                }

                fn set_cursor(&mut self, cursor: &str) -> Result<(), SdkError> {
                    self.next_docid = Some(cursor.to_string());
                    Ok(())
                }
            }
        )+
    };
}

next_docid_cursor!(ListEnterprisesParams, ListAccountsParams, ListAccountGroupsParams);
