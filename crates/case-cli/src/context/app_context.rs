use case_api::ApiClient;
use case_auth::StaffSession;
use case_config::CaseConfig;
use case_core::permissions::Permissions;

/// Shared application resources initialized once at startup.
///
/// Every backend endpoint requires authentication, so initialization
/// fails up front when no live session can be resolved; commands that
/// work without one (init, schema, auth) never construct a context.
#[derive(Debug)]
pub struct AppContext {
    pub config: CaseConfig,
    pub client: ApiClient,
    pub session: StaffSession,
}

impl AppContext {
    /// Build the client and resolve the staff session.
    ///
    /// # Errors
    ///
    /// Fails when the backend is unconfigured or no live session token
    /// can be resolved (missing, undecodable, or expired).
    pub fn init(config: CaseConfig) -> anyhow::Result<Self> {
        if !config.backend.is_configured() {
            anyhow::bail!(
                "backend.base_url is not configured; set CASEDESK_BACKEND__BASE_URL \
                 or run `csd init` and edit .casedesk/config.toml"
            );
        }

        let client = ApiClient::new(
            config.backend.normalized_base_url(),
            config.backend.timeout_secs,
        );

        let inline = config
            .auth
            .has_inline_token()
            .then(|| config.auth.token.as_str());
        let session = case_auth::resolve_session(inline, &config.auth.keyring_service)?;

        tracing::debug!(
            user_id = %session.identity.user_id,
            role = session.identity.role.as_str(),
            "resolved staff session"
        );

        Ok(Self {
            config,
            client,
            session,
        })
    }

    /// Refuse the command locally when the session lacks `required`.
    ///
    /// # Errors
    ///
    /// Fails with the granted permission set named, so a subadmin can see
    /// what their role is missing.
    pub fn require_permission(&self, required: Permissions) -> anyhow::Result<()> {
        let granted = self.session.identity.permissions;
        if granted.allows(required) {
            return Ok(());
        }
        anyhow::bail!(
            "permission denied: requires {required} (signed in as {} with {granted})",
            self.session.identity.role.as_str()
        )
    }
}
