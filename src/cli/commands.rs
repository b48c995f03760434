//! Command handlers for the CLI
//!
//! Each handler loads the API configuration document, runs the requested
//! inspection and returns the process exit code.

use std::fmt::Write as _;

use tracing::info;

use super::args::{InspectArgs, TargetArgs};
use crate::api::{
    AuthFeatures, ValidationReport, has_cookie_auth_enabled, load_api_config, validate_api,
};
use crate::config::AppConfig;
use crate::constants::exit;
use crate::errors::{AppError, Result};

/// Handle the check command
pub async fn handle_check(args: TargetArgs, config: &AppConfig) -> Result<i32> {
    let path = config.api_config_path(args.file);
    let document = load_api_config(&path).await?;

    let enabled = has_cookie_auth_enabled(document.api.as_ref());
    info!("Cookie auth for {}: {}", path.display(), enabled);
    println!("cookie auth: {}", if enabled { "enabled" } else { "disabled" });

    Ok(if enabled {
        exit::SUCCESS
    } else {
        exit::COOKIE_AUTH_DISABLED
    })
}

/// Handle the inspect command
pub async fn handle_inspect(args: InspectArgs, config: &AppConfig) -> Result<i32> {
    let path = config.api_config_path(args.target.file);
    let document = load_api_config(&path).await?;
    let features = AuthFeatures::from_api(document.api.as_ref());

    if args.json {
        let json = serde_json::to_string_pretty(&features)
            .map_err(|e| AppError::generic(format!("Failed to serialize features: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", render_features(&features));
    }

    Ok(exit::SUCCESS)
}

/// Handle the validate command
pub async fn handle_validate(args: TargetArgs, config: &AppConfig) -> Result<i32> {
    let path = config.api_config_path(args.file);
    let document = load_api_config(&path).await?;
    let report = validate_api(document.api.as_ref());

    print!("{}", render_report(&report));

    // Surface error-level issues as a validation error for the caller
    report.into_result()?;
    Ok(exit::SUCCESS)
}

/// Human-readable summary of auth features
pub fn render_features(features: &AuthFeatures) -> String {
    let mut out = String::new();
    let none = || "(none)".to_string();
    let list = |items: &[String]| {
        if items.is_empty() {
            none()
        } else {
            items.join(", ")
        }
    };

    let _ = writeln!(out, "Auth features");
    let _ = writeln!(out, "=============");
    let _ = writeln!(out, "has auth providers:        {}", features.has_auth_providers);
    let _ = writeln!(
        out,
        "cookie providers:          {}",
        list(&features.cookie_provider_ids)
    );
    let _ = writeln!(
        out,
        "role definitions:          {}",
        if features.role_definitions.is_empty() {
            none()
        } else {
            features.role_definitions.clone()
        }
    );
    let _ = writeln!(
        out,
        "operations requiring auth: {}",
        list(&features.operations_requiring_auth)
    );
    out
}

/// Human-readable validation report
pub fn render_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "cookie auth: {}",
        if report.cookie_auth_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    if report.issues.is_empty() {
        let _ = writeln!(out, "no issues found");
        return out;
    }

    for issue in report.errors() {
        let _ = writeln!(out, "error: {}", issue);
    }
    for issue in report.warnings() {
        let _ = writeln!(out, "warning: {}", issue);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ValidationIssue;
    use tempfile::TempDir;

    fn config_for(path: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.api.config_path = path.to_path_buf();
        config
    }

    #[test]
    fn test_render_features() {
        let features = AuthFeatures {
            has_auth_providers: true,
            cookie_provider_ids: vec!["github".to_string()],
            role_definitions: "\"admin\"".to_string(),
            operations_requiring_auth: Vec::new(),
        };
        let out = render_features(&features);
        assert!(out.contains("has auth providers:        true"));
        assert!(out.contains("cookie providers:          github"));
        assert!(out.contains("operations requiring auth: (none)"));
    }

    #[test]
    fn test_render_report() {
        let report = ValidationReport {
            cookie_auth_enabled: false,
            issues: vec![
                ValidationIssue::RedirectUrisWithoutCookieAuth,
                ValidationIssue::AuthRequiredWithoutProviders {
                    operations: vec!["Me".to_string()],
                },
            ],
        };
        let out = render_report(&report);
        assert!(out.starts_with("cookie auth: disabled"));
        let error_pos = out.find("error:").unwrap();
        let warning_pos = out.find("warning:").unwrap();
        assert!(error_pos < warning_pos);

        let clean = render_report(&ValidationReport::default());
        assert!(clean.contains("no issues found"));
    }

    #[tokio::test]
    async fn test_check_exit_codes() {
        let temp_dir = TempDir::new().unwrap();
        let enabled = temp_dir.path().join("enabled.json");
        let disabled = temp_dir.path().join("disabled.json");
        tokio::fs::write(
            &enabled,
            r#"{"api":{"authenticationConfig":{"cookieBased":{"providers":[{"id":"gh","kind":"AuthProviderGithub"}]}}}}"#,
        )
        .await
        .unwrap();
        tokio::fs::write(&disabled, r#"{"api":{}}"#).await.unwrap();

        let code = handle_check(TargetArgs { file: None }, &config_for(&enabled))
            .await
            .unwrap();
        assert_eq!(code, exit::SUCCESS);

        let code = handle_check(
            TargetArgs {
                file: Some(disabled.clone()),
            },
            &config_for(&enabled),
        )
        .await
        .unwrap();
        assert_eq!(code, exit::COOKIE_AUTH_DISABLED);
    }

    #[tokio::test]
    async fn test_validate_fails_on_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("protected.json");
        tokio::fs::write(
            &path,
            r#"{"api":{"operations":[{"name":"Me","operationType":"QUERY","authenticationConfig":{"required":true}}]}}"#,
        )
        .await
        .unwrap();

        let result = handle_validate(TargetArgs { file: None }, &config_for(&path)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_missing_document_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result = handle_check(TargetArgs { file: None }, &config_for(&path)).await;
        assert!(matches!(result, Err(AppError::Load(_))));
    }
}
