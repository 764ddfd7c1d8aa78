//! Globus environment and service URL resolution.
//!
//! The environment is selected with `GLOBUS_SDK_ENVIRONMENT` (default
//! `production`). A single service can be pointed elsewhere with
//! `GLOBUS_SDK_SERVICE_URL_<SERVICE>`, e.g. `GLOBUS_SDK_SERVICE_URL_NEXUS`.

use crate::error::{Error, ErrorKind, Result};

/// Environment variable selecting the Globus environment.
pub const ENVIRONMENT_VAR: &str = "GLOBUS_SDK_ENVIRONMENT";

/// Prefix of the per-service URL override variables.
pub const SERVICE_URL_VAR_PREFIX: &str = "GLOBUS_SDK_SERVICE_URL_";

/// The default environment.
pub const PRODUCTION: &str = "production";

/// Base URL of `service` in `environment`.
///
/// ```rust
/// use globus_nexus_transport::service_url_for;
///
/// assert_eq!(
///     service_url_for("nexus", "production"),
///     "https://nexus.api.globusonline.org/"
/// );
/// assert_eq!(
///     service_url_for("nexus", "sandbox"),
///     "https://nexus.api.sandbox.globuscs.info/"
/// );
/// ```
pub fn service_url_for(service: &str, environment: &str) -> String {
    match (environment, service) {
        (PRODUCTION, "nexus") => "https://nexus.api.globusonline.org/".to_string(),
        (PRODUCTION, "auth") => "https://auth.globus.org/".to_string(),
        (PRODUCTION, _) => format!("https://{}.api.globus.org/", service),
        ("preview", "auth") => "https://auth.preview.globus.org/".to_string(),
        ("preview", _) => format!("https://{}.api.preview.globus.org/", service),
        (env, "auth") => format!("https://auth.{}.globuscs.info/", env),
        (env, _) => format!("https://{}.api.{}.globuscs.info/", service, env),
    }
}

/// Resolve the base URL of `service` from the process environment.
pub fn service_url(service: &str) -> Result<String> {
    resolve_service_url(service, |name| std::env::var(name).ok())
}

/// Resolve using an arbitrary variable lookup.
pub(crate) fn resolve_service_url<F>(service: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let override_var = format!("{}{}", SERVICE_URL_VAR_PREFIX, service.to_uppercase());
    if let Some(url) = lookup(&override_var).filter(|v| !v.trim().is_empty()) {
        url::Url::parse(&url).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("{} is not a valid URL", override_var)),
                e,
            )
        })?;
        tracing::debug!(service, url = %url, "Using service URL override");
        return Ok(url);
    }

    let environment = lookup(ENVIRONMENT_VAR)
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| PRODUCTION.to_string());

    Ok(service_url_for(service, &environment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_production_urls() {
        assert_eq!(
            service_url_for("nexus", "production"),
            "https://nexus.api.globusonline.org/"
        );
        assert_eq!(service_url_for("auth", "production"), "https://auth.globus.org/");
        assert_eq!(
            service_url_for("groups", "production"),
            "https://groups.api.globus.org/"
        );
    }

    #[test]
    fn test_preview_and_test_environment_urls() {
        assert_eq!(
            service_url_for("nexus", "preview"),
            "https://nexus.api.preview.globus.org/"
        );
        assert_eq!(
            service_url_for("auth", "preview"),
            "https://auth.preview.globus.org/"
        );
        assert_eq!(
            service_url_for("nexus", "integration"),
            "https://nexus.api.integration.globuscs.info/"
        );
        assert_eq!(
            service_url_for("auth", "sandbox"),
            "https://auth.sandbox.globuscs.info/"
        );
    }

    #[test]
    fn test_resolve_defaults_to_production() {
        let url = resolve_service_url("nexus", lookup_from(&[])).unwrap();
        assert_eq!(url, "https://nexus.api.globusonline.org/");
    }

    #[test]
    fn test_resolve_uses_environment_variable() {
        let url = resolve_service_url(
            "nexus",
            lookup_from(&[(ENVIRONMENT_VAR, "Sandbox")]),
        )
        .unwrap();
        assert_eq!(url, "https://nexus.api.sandbox.globuscs.info/");
    }

    #[test]
    fn test_resolve_prefers_service_override() {
        let url = resolve_service_url(
            "nexus",
            lookup_from(&[
                (ENVIRONMENT_VAR, "sandbox"),
                ("GLOBUS_SDK_SERVICE_URL_NEXUS", "http://localhost:8080/"),
            ]),
        )
        .unwrap();
        assert_eq!(url, "http://localhost:8080/");
    }

    #[test]
    fn test_resolve_rejects_invalid_override() {
        let err = resolve_service_url(
            "nexus",
            lookup_from(&[("GLOBUS_SDK_SERVICE_URL_NEXUS", "not a url")]),
        )
        .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
        assert!(err.to_string().contains("GLOBUS_SDK_SERVICE_URL_NEXUS"));
    }
}
