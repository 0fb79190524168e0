//! `<resource> list` commands

use serde::Serialize;
use tracing::info;

use super::Command;
use crate::config::{AppConfig, ServiceConfig};
use crate::domain::enterprise_management::{
    ListAccountGroupsParams, ListAccountsParams, ListEnterprisesParams,
};
use crate::domain::iam_access_groups::ListAccessGroupsParams;
use crate::domain::iam_identity::{ListApiKeysParams, ListProfilesParams, ListServiceIdsParams};
use crate::domain::{PageCursor, PagedResult, Pager};
use crate::infrastructure::base_service::BaseServiceOptions;
use crate::infrastructure::{
    enterprise_management, iam_access_groups, iam_identity, EnterpriseManagementV1,
    IamAccessGroupsV2, IamIdentityV1,
};

/// Options for a service: `<NAME>_*` variables first, then `services.<name>`
/// from the application config for anything left unset
pub fn service_options(
    config: &AppConfig,
    service_name: &str,
    default_url: &str,
) -> anyhow::Result<BaseServiceOptions> {
    let service_config = ServiceConfig::from_env(service_name)?;
    options_with_overrides(config, service_config, default_url)
}

fn options_with_overrides(
    config: &AppConfig,
    mut service_config: ServiceConfig,
    default_url: &str,
) -> anyhow::Result<BaseServiceOptions> {
    if let Some(overrides) = config.service(&service_config.service_name) {
        if service_config.url.is_none() {
            service_config.url = overrides.url.clone();
        }
        service_config.disable_ssl |= overrides.disable_ssl;
    }

    let mut options = BaseServiceOptions::from_service_config(&service_config, default_url)?;
    if let Some(timeout) = config.http.timeout() {
        options = options.with_timeout(timeout);
    }

    Ok(options)
}

fn identity(config: &AppConfig) -> anyhow::Result<IamIdentityV1> {
    let options = service_options(
        config,
        iam_identity::DEFAULT_SERVICE_NAME,
        iam_identity::DEFAULT_SERVICE_URL,
    )?;
    Ok(IamIdentityV1::new(options)?)
}

fn access_groups(config: &AppConfig) -> anyhow::Result<IamAccessGroupsV2> {
    let options = service_options(
        config,
        iam_access_groups::DEFAULT_SERVICE_NAME,
        iam_access_groups::DEFAULT_SERVICE_URL,
    )?;
    Ok(IamAccessGroupsV2::new(options)?)
}

fn enterprise(config: &AppConfig) -> anyhow::Result<EnterpriseManagementV1> {
    let options = service_options(
        config,
        enterprise_management::DEFAULT_SERVICE_NAME,
        enterprise_management::DEFAULT_SERVICE_URL,
    )?;
    Ok(EnterpriseManagementV1::new(options)?)
}

/// Walk every page and print the collected items as a JSON array
async fn print_all<P, R>(resource: &str, mut pager: Pager<P, R>) -> anyhow::Result<()>
where
    P: PageCursor + Clone + Send + Sync + 'static,
    R: PagedResult + Send + 'static,
    R::Item: Serialize + Send + 'static,
{
    let items = pager.get_all().await?;
    info!(resource, count = items.len(), "Listed resources");
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}

pub async fn run(config: &AppConfig, command: Command) -> anyhow::Result<()> {
    match command {
        Command::ApiKeys(command) => {
            let args = command.into_args();
            let params = ListApiKeysParams {
                account_id: args.account_id,
                iam_id: args.iam_id,
                pagesize: args.page_size,
                ..Default::default()
            };
            print_all("api-keys", identity(config)?.api_keys_pager(params)?).await
        }
        Command::ServiceIds(command) => {
            let args = command.into_args();
            let params = ListServiceIdsParams {
                account_id: args.account_id,
                name: args.name,
                pagesize: args.page_size,
                ..Default::default()
            };
            print_all("service-ids", identity(config)?.service_ids_pager(params)?).await
        }
        Command::Profiles(command) => {
            let args = command.into_args();
            let params = ListProfilesParams {
                account_id: args.account_id,
                pagesize: args.page_size,
                ..Default::default()
            };
            print_all("profiles", identity(config)?.profiles_pager(params)?).await
        }
        Command::AccessGroups(command) => {
            let args = command.into_args();
            let params = ListAccessGroupsParams {
                account_id: args.account_id,
                iam_id: args.iam_id,
                limit: args.page_size,
                ..Default::default()
            };
            print_all(
                "access-groups",
                access_groups(config)?.access_groups_pager(params)?,
            )
            .await
        }
        Command::Enterprises(command) => {
            let args = command.into_args();
            let params = ListEnterprisesParams {
                enterprise_account_id: args.enterprise_account_id,
                account_id: args.account_id,
                limit: args.page_size,
                ..Default::default()
            };
            print_all("enterprises", enterprise(config)?.enterprises_pager(params)?).await
        }
        Command::Accounts(command) => {
            let args = command.into_args();
            let params = ListAccountsParams {
                enterprise_id: args.enterprise_id,
                parent: args.parent,
                limit: args.page_size,
                ..Default::default()
            };
            print_all("accounts", enterprise(config)?.accounts_pager(params)?).await
        }
        Command::AccountGroups(command) => {
            let args = command.into_args();
            let params = ListAccountGroupsParams {
                enterprise_id: args.enterprise_id,
                parent: args.parent,
                limit: args.page_size,
                ..Default::default()
            };
            print_all(
                "account-groups",
                enterprise(config)?.account_groups_pager(params)?,
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceOverride;
    use crate::infrastructure::base_service::BaseService;

    fn config_with_override(url: &str, disable_ssl: bool) -> AppConfig {
        let mut config = AppConfig::default();
        config.services.insert(
            "iam_access_groups".to_string(),
            ServiceOverride {
                url: Some(url.to_string()),
                disable_ssl,
            },
        );
        config
    }

    #[test]
    fn test_config_override_fills_missing_url() {
        let config = config_with_override("https://iam.test.cloud.ibm.com", true);

        let options = options_with_overrides(
            &config,
            ServiceConfig::new("iam_access_groups"),
            iam_access_groups::DEFAULT_SERVICE_URL,
        )
        .unwrap();

        assert_eq!(options.service_url, "https://iam.test.cloud.ibm.com");
        assert!(options.disable_ssl_verification);
        assert_eq!(options.timeout, Some(std::time::Duration::from_secs(60)));
    }

    #[test]
    fn test_environment_url_wins_over_config() {
        let config = config_with_override("https://from-config", false);
        let service_config =
            ServiceConfig::new("iam_access_groups").with_url("https://from-env");

        let options = options_with_overrides(
            &config,
            service_config,
            iam_access_groups::DEFAULT_SERVICE_URL,
        )
        .unwrap();

        assert_eq!(options.service_url, "https://from-env");
    }

    #[test]
    fn test_default_url_and_authenticator() {
        let options = options_with_overrides(
            &AppConfig::default(),
            ServiceConfig::new("enterprise_management").with_bearer_token("token"),
            enterprise_management::DEFAULT_SERVICE_URL,
        )
        .unwrap();

        let service = BaseService::new(options, "v1").unwrap();
        assert_eq!(service.service_url(), "https://enterprise.cloud.ibm.com/v1");
        assert_eq!(service.authenticator().authentication_type(), "bearertoken");
    }
}
