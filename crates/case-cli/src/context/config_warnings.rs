use case_config::CaseConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_env_typos(config: &CaseConfig) {
    for warning in collect_env_typo_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_typo_warnings<I>(config: &CaseConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.backend.is_configured() && has_env_prefix(&env_keys, "CASEDESK_BACKEND") {
        warnings.push(
            "Backend config appears default while CASEDESK_BACKEND* env vars exist. Use double underscores (example: CASEDESK_BACKEND__BASE_URL)."
                .to_string(),
        );
    }

    if !config.auth.has_inline_token() && has_single_underscore_key(&env_keys, "CASEDESK_AUTH_") {
        warnings.push(
            "Auth config appears default while CASEDESK_AUTH* env vars exist. Use double underscores (example: CASEDESK_AUTH__TOKEN)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

/// Match `CASEDESK_AUTH_TOKEN` but not the correctly nested `CASEDESK_AUTH__TOKEN`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('_'))
    })
}

#[cfg(test)]
mod tests {
    use case_config::{BackendConfig, CaseConfig};

    use super::collect_env_typo_warnings;

    #[test]
    fn warns_for_unconfigured_backend_with_env_prefix() {
        let config = CaseConfig::default();
        let warnings = collect_env_typo_warnings(
            &config,
            vec![(
                "CASEDESK_BACKEND_BASE_URL".to_string(),
                "https://claims.example.com".to_string(),
            )],
        );

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("CASEDESK_BACKEND__BASE_URL"));
    }

    #[test]
    fn does_not_warn_when_configured() {
        let config = CaseConfig {
            backend: BackendConfig {
                base_url: "https://claims.example.com".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings = collect_env_typo_warnings(
            &config,
            vec![(
                "CASEDESK_BACKEND__BASE_URL".to_string(),
                "https://claims.example.com".to_string(),
            )],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn correctly_nested_auth_key_does_not_warn() {
        let config = CaseConfig::default();
        let warnings = collect_env_typo_warnings(
            &config,
            vec![("CASEDESK_AUTH__TOKEN".to_string(), "t".to_string())],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn flat_auth_key_warns() {
        let config = CaseConfig::default();
        let warnings = collect_env_typo_warnings(
            &config,
            vec![("CASEDESK_AUTH_TOKEN".to_string(), "t".to_string())],
        );

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("CASEDESK_AUTH__TOKEN"));
    }
}
