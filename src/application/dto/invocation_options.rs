use super::Settings;
use crate::ports::outbound::InvocationOptions;

/// Process-wide identity reported to the scanning engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub telemetry_id: String,
    /// Tag naming the integration the request came from (e.g. "vscode")
    pub source: String,
    pub dev_mode: bool,
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self {
            telemetry_id: String::new(),
            source: "vscode".to_string(),
            dev_mode: false,
        }
    }
}

/// Builds the engine options for one invocation
///
/// The provider token is only included when it is non-empty.
pub fn build_invocation_options(identity: &ClientIdentity, settings: &Settings) -> InvocationOptions {
    let mut options = InvocationOptions::new();
    let mut set = |key: &str, value: &str| {
        options.insert(key.to_string(), value.to_string());
    };

    set("RHDA_TOKEN", &identity.telemetry_id);
    set("RHDA_SOURCE", &identity.source);
    set("EXHORT_DEV_MODE", bool_flag(identity.dev_mode));
    set(
        "MATCH_MANIFEST_VERSIONS",
        bool_flag(settings.match_manifest_versions),
    );
    set("EXHORT_MVN_PATH", &settings.mvn_path);
    set("EXHORT_NPM_PATH", &settings.npm_path);
    set("EXHORT_GO_PATH", &settings.go_path);
    set("EXHORT_PYTHON3_PATH", &settings.python3_path);
    set("EXHORT_PIP3_PATH", &settings.pip3_path);
    set("EXHORT_PYTHON_PATH", &settings.python_path);
    set("EXHORT_PIP_PATH", &settings.pip_path);

    if !settings.provider_token.is_empty() {
        set("EXHORT_SNYK_TOKEN", &settings.provider_token);
    }

    options
}

fn bool_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
