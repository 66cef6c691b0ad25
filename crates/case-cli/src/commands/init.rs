use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

const CONFIG_DIR: &str = ".casedesk";
const CONFIG_FILE: &str = "config.toml";

const STARTER_CONFIG: &str = r#"# casedesk project configuration.
# Values here override ~/.config/casedesk/config.toml; CASEDESK_* env
# vars (double-underscore nesting, e.g. CASEDESK_BACKEND__BASE_URL)
# override both.

[backend]
base_url = ""
# timeout_secs = 30

[general]
# default_limit = 200
# default_time_range = "30d"
# watch_interval_secs = 30
"#;

#[derive(Debug, Serialize)]
struct InitResponse {
    path: String,
    created: bool,
}

/// Handle `csd init`.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_DIR).join(CONFIG_FILE);
    write_starter_config(&path, args.force)?;

    output(
        &InitResponse {
            path: path.display().to_string(),
            created: true,
        },
        flags.format,
    )
}

fn write_starter_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, STARTER_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{STARTER_CONFIG, write_starter_config};

    #[test]
    fn starter_config_loads_through_the_config_stack() {
        let config: case_config::CaseConfig =
            toml::from_str(STARTER_CONFIG).expect("starter config should parse");
        assert!(!config.backend.is_configured());
        assert_eq!(config.general.default_limit, 200);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        write_starter_config(&path, false).expect("first write should work");

        let error = write_starter_config(&path, false).expect_err("second write should fail");
        assert!(error.to_string().contains("already exists"));

        write_starter_config(&path, true).expect("force write should work");
    }
}
