//! `repocreds-cli` - resolve repository credentials through the access gate.

mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use authz_resolver_sdk::{AuthZResolverClient, PolicyEnforcer};
use clap::{Parser, Subcommand};
use repocreds::{LookupService, RepoCredsLocalClient, ServiceConfig};
use repocreds_sdk::{
    RepoCreds, RepoCredsClientV1, RepoCredsError, RepoCredsListQuery, RepoCredsQuery,
    RepoCredsStore,
};
use repocreds_security::SecurityContext;
use repocreds_security::constants::{FIRST_PARTY_SCOPE, SUBJECT_TYPE_USER};
use serde::Serialize;

use crate::config::AppConfig;

/// Look up repository credentials as a given subject.
#[derive(Parser, Debug)]
#[command(name = "repocreds-cli", version, about, long_about = None)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subject name to act as. Omit to call anonymously.
    #[arg(long, global = true)]
    subject: Option<String>,

    /// Group claim of the subject. May be repeated.
    #[arg(long = "group", global = true)]
    groups: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the credentials for one repository URL.
    Get {
        /// Repository URL, matched exactly.
        url: String,
    },

    /// List credential records the subject may read, without secrets.
    List {
        /// Only consider the record with exactly this URL.
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    One(RepoCreds),
    Many(Vec<RepoCreds>),
}

fn security_context(cli: &Cli) -> SecurityContext {
    let Some(name) = cli.subject.as_deref() else {
        return SecurityContext::anonymous();
    };
    SecurityContext::builder()
        .subject_name(name)
        .subject_type(SUBJECT_TYPE_USER)
        .groups(cli.groups.clone())
        .token_scopes(vec![FIRST_PARTY_SCOPE.to_owned()])
        .build()
}

fn build_client(cfg: &AppConfig) -> Result<Arc<dyn RepoCredsClientV1>> {
    let authz: Arc<dyn AuthZResolverClient> = Arc::new(
        static_authz_plugin::Service::from_config(&cfg.authz)
            .context("invalid authz configuration")?,
    );
    let store: Arc<dyn RepoCredsStore> = Arc::new(
        static_repocreds_plugin::Service::from_config(&cfg.credentials)
            .context("invalid credentials configuration")?,
    );

    let svc = LookupService::new(
        store,
        PolicyEnforcer::new(authz),
        ServiceConfig::from(&cfg.repocreds),
    );
    Ok(Arc::new(RepoCredsLocalClient::new(Arc::new(svc))))
}

async fn execute(
    client: &dyn RepoCredsClientV1,
    ctx: &SecurityContext,
    command: &Commands,
) -> Result<Output, RepoCredsError> {
    match command {
        Commands::Get { url } => client
            .get_repository_credentials(ctx, &RepoCredsQuery::new(url.as_str()))
            .await
            .map(Output::One),
        Commands::List { url } => client
            .list_repository_credentials(ctx, &RepoCredsListQuery { url: url.clone() })
            .await
            .map(Output::Many),
    }
}

fn exit_status(err: &RepoCredsError) -> u8 {
    match err {
        RepoCredsError::PermissionDenied => 3,
        RepoCredsError::NotFound { .. } => 4,
        RepoCredsError::Internal => 1,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;
    logging::init(&cfg.logging);

    tracing::debug!(
        config = ?cli.config,
        credentials = cfg.credentials.credentials.len(),
        "configuration loaded"
    );

    let client = build_client(&cfg)?;
    let ctx = security_context(&cli);

    match execute(client.as_ref(), &ctx, &cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("error: {e}");
            Ok(ExitCode::from(exit_status(&e)))
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use clap::CommandFactory;
    use static_authz_plugin::config::{AuthZMode, Effect, PolicyRule, RoleBinding};
    use static_repocreds_plugin::CredentialEntry;

    use super::*;

    const URL: &str = "https://github.com/org/repo";

    fn app_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.authz.mode = AuthZMode::Rules;
        cfg.authz.role_bindings.push(RoleBinding {
            subject: "ops".to_owned(),
            role: "role:admin".to_owned(),
        });
        cfg.authz.policies.push(PolicyRule {
            role: "role:admin".to_owned(),
            resource: "repositories".to_owned(),
            action: "*".to_owned(),
            object: "*".to_owned(),
            effect: Effect::Allow,
        });
        cfg.credentials.credentials.push(CredentialEntry {
            url: URL.to_owned(),
            username: Some("deploy".to_owned()),
            password: Some("s3cret".to_owned()),
            ..CredentialEntry::default()
        });
        cfg
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_get_with_subject_and_groups() {
        let cli = Cli::try_parse_from([
            "repocreds-cli",
            "--config",
            "cfg.yaml",
            "get",
            URL,
            "--subject",
            "alice",
            "--group",
            "ops",
            "--group",
            "dev",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Get { ref url } if url == URL));
        assert_eq!(cli.subject.as_deref(), Some("alice"));
        assert_eq!(cli.groups, ["ops", "dev"]);

        let ctx = security_context(&cli);
        assert_eq!(ctx.subject_name(), Some("alice"));
        assert_eq!(ctx.groups(), ["ops", "dev"]);
    }

    #[test]
    fn no_subject_means_anonymous() {
        let cli = Cli::try_parse_from(["repocreds-cli", "list"]).unwrap();
        assert!(security_context(&cli).is_anonymous());
    }

    #[tokio::test]
    async fn get_output_omits_secrets() {
        let client = build_client(&app_config()).unwrap();
        let ctx = SecurityContext::builder().subject_name("x").group("ops").build();

        let output = execute(client.as_ref(), &ctx, &Commands::Get { url: URL.to_owned() })
            .await
            .unwrap();
        let json = serde_json::to_string(&output).unwrap();

        assert!(json.contains("deploy"));
        assert!(!json.contains("s3cret"));
    }

    #[tokio::test]
    async fn errors_map_to_distinct_exit_codes() {
        let client = build_client(&app_config()).unwrap();
        let admin = SecurityContext::builder().subject_name("ops").build();

        let missing = execute(
            client.as_ref(),
            &admin,
            &Commands::Get {
                url: "https://github.com/org/other".to_owned(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(exit_status(&missing), 4);

        let denied = execute(
            client.as_ref(),
            &SecurityContext::anonymous(),
            &Commands::Get { url: URL.to_owned() },
        )
        .await
        .unwrap_err();
        assert_eq!(exit_status(&denied), 3);
    }

    #[tokio::test]
    async fn list_without_url_differs_from_empty_url() {
        let client = build_client(&app_config()).unwrap();
        let admin = SecurityContext::builder().subject_name("ops").build();

        let all = execute(client.as_ref(), &admin, &Commands::List { url: None })
            .await
            .unwrap();
        let json = serde_json::to_string(&all).unwrap();
        assert!(json.contains(URL));
        assert!(!json.contains("s3cret"));

        let empty = execute(
            client.as_ref(),
            &admin,
            &Commands::List {
                url: Some(String::new()),
            },
        )
        .await
        .unwrap();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn invalid_authz_config_fails_startup() {
        let mut cfg = app_config();
        cfg.authz.policies[0].object = "[unclosed".to_owned();
        assert!(build_client(&cfg).is_err());
    }
}
