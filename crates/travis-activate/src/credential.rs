//! API token lookup.

use std::process::Command;

use tracing::debug;

use travis_core::ApiToken;
use travis_core::Result;
use travis_core::error::AuthError;

/// Resolve the API token: an explicit value wins, otherwise the global git
/// config entry `key` is read.
pub fn load_token(explicit: Option<&str>, key: &str) -> Result<ApiToken> {
    if let Some(token) = explicit {
        let token = ApiToken::new(token);
        if token.is_empty() {
            return Err(AuthError::TokenMissing {
                key: key.to_string(),
            }
            .into());
        }
        debug!("Using token supplied on the command line");
        return Ok(token);
    }

    read_git_config("git", key)
}

/// Run `<git> config --global <key>` and take its output as the token.
fn read_git_config(git: &str, key: &str) -> Result<ApiToken> {
    debug!(key, "Reading token from git config");

    let output = Command::new(git)
        .args(["config", "--global", key])
        .output()
        .map_err(|e| AuthError::CredentialStore {
            message: format!("failed to run {}: {}", git, e),
        })?;

    // git exits 1 when the key is unset.
    if output.status.code() == Some(1) {
        return Err(AuthError::TokenMissing {
            key: key.to_string(),
        }
        .into());
    }

    if !output.status.success() {
        return Err(AuthError::CredentialStore {
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    let token = ApiToken::new(String::from_utf8_lossy(&output.stdout));
    if token.is_empty() {
        return Err(AuthError::TokenMissing {
            key: key.to_string(),
        }
        .into());
    }

    Ok(token)
}
