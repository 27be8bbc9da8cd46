//! Configuration loading and resolution.
//!
//! Every value resolves as: explicit flag, then environment, then default.

use devtools_discovery::StaticHost;

use crate::types::ConfigError;

pub const ENV_PACKAGE: &str = "DEVTOOLS_PACKAGE";
pub const ENV_APP_LABEL: &str = "DEVTOOLS_APP_LABEL";
pub const ENV_APP_VERSION: &str = "DEVTOOLS_APP_VERSION";
pub const ENV_PROCESS_NAME: &str = "DEVTOOLS_PROCESS_NAME";
pub const ENV_INSPECTOR_PATH: &str = "DEVTOOLS_INSPECTOR_PATH";

/// Host metadata given on the command line.
#[derive(Debug, Clone, Default)]
pub struct HostOverrides {
    pub app_label: Option<String>,
    pub app_version: Option<String>,
    pub package: Option<String>,
    pub process_name: Option<String>,
}

/// Resolve host metadata from the process environment.
pub fn resolve_host(overrides: HostOverrides) -> Result<StaticHost, ConfigError> {
    resolve_host_with(overrides, |key| std::env::var(key).ok(), executable_name)
}

/// Resolve host metadata with explicit environment and executable lookups.
///
/// An empty package identifier or version is rejected: a target without an
/// identity can't be told apart in `chrome://inspect`.
pub fn resolve_host_with(
    overrides: HostOverrides,
    env: impl Fn(&str) -> Option<String>,
    exe_name: impl FnOnce() -> Result<String, ConfigError>,
) -> Result<StaticHost, ConfigError> {
    let package = match overrides.package.or_else(|| env(ENV_PACKAGE)) {
        Some(package) => package,
        None => exe_name()?,
    };
    if package.trim().is_empty() {
        return Err(ConfigError::MissingPackage);
    }

    let app_version = overrides
        .app_version
        .or_else(|| env(ENV_APP_VERSION))
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    if app_version.trim().is_empty() {
        return Err(ConfigError::MissingVersion);
    }

    let app_label = overrides
        .app_label
        .or_else(|| env(ENV_APP_LABEL))
        .unwrap_or_else(|| package.clone());
    let process_name = overrides
        .process_name
        .or_else(|| env(ENV_PROCESS_NAME))
        .unwrap_or_else(|| package.clone());

    Ok(StaticHost::new(app_label, app_version, package, process_name))
}

/// Resolve the inspector path advertised in the WebSocket and front-end URLs.
pub fn resolve_inspector_path(explicit: Option<&str>, addr: &str) -> String {
    resolve_inspector_path_with(explicit, addr, |key| std::env::var(key).ok())
}

/// Resolve the inspector path with an explicit environment lookup. Empty
/// values count as unset.
pub fn resolve_inspector_path_with(
    explicit: Option<&str>,
    addr: &str,
    env: impl Fn(&str) -> Option<String>,
) -> String {
    if let Some(path) = explicit.filter(|p| !p.trim().is_empty()) {
        return path.to_string();
    }

    if let Some(env_path) = env(ENV_INSPECTOR_PATH).filter(|p| !p.trim().is_empty()) {
        return env_path;
    }

    default_inspector_path(addr)
}

fn default_inspector_path(addr: &str) -> String {
    format!("{addr}/inspector")
}

fn executable_name() -> Result<String, ConfigError> {
    let exe = std::env::current_exe()?;
    exe.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or(ConfigError::MissingPackage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn exe() -> Result<String, ConfigError> {
        Ok("demo-app".to_string())
    }

    #[test]
    fn test_defaults_from_executable() {
        let host = resolve_host_with(HostOverrides::default(), env_of(&[]), exe).unwrap();
        assert_eq!(host.package_name, "demo-app");
        assert_eq!(host.app_label, "demo-app");
        assert_eq!(host.process_name, "demo-app");
        assert_eq!(host.app_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_env_over_default() {
        let env = env_of(&[
            (ENV_PACKAGE, "com.example.app"),
            (ENV_APP_LABEL, "Example"),
            (ENV_PROCESS_NAME, "com.example.app:sync"),
        ]);
        let host = resolve_host_with(HostOverrides::default(), env, exe).unwrap();
        assert_eq!(host.package_name, "com.example.app");
        assert_eq!(host.app_label, "Example");
        assert_eq!(host.process_name, "com.example.app:sync");
    }

    #[test]
    fn test_flag_over_env() {
        let overrides = HostOverrides {
            app_version: Some("9.9".to_string()),
            package: Some("cli.pkg".to_string()),
            ..Default::default()
        };
        let env = env_of(&[(ENV_PACKAGE, "env.pkg"), (ENV_APP_VERSION, "1.0")]);
        let host = resolve_host_with(overrides, env, exe).unwrap();
        assert_eq!(host.package_name, "cli.pkg");
        assert_eq!(host.app_version, "9.9");
    }

    #[test]
    fn test_empty_package_is_fatal() {
        let env = env_of(&[(ENV_PACKAGE, "  ")]);
        let err = resolve_host_with(HostOverrides::default(), env, exe).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPackage));
    }

    #[test]
    fn test_empty_version_is_fatal() {
        let env = env_of(&[(ENV_APP_VERSION, "")]);
        let err = resolve_host_with(HostOverrides::default(), env, exe).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion));
    }

    #[test]
    fn test_inspector_path_explicit() {
        assert_eq!(
            resolve_inspector_path(Some("host:1/custom"), "ignored"),
            "host:1/custom"
        );
        assert_eq!(default_inspector_path("127.0.0.1:9222"), "127.0.0.1:9222/inspector");
    }

    #[test]
    fn test_inspector_path_env_over_default() {
        let env = env_of(&[(ENV_INSPECTOR_PATH, "10.0.0.2:9222/inspector")]);
        assert_eq!(
            resolve_inspector_path_with(None, "127.0.0.1:9222", env),
            "10.0.0.2:9222/inspector"
        );
    }

    #[test]
    fn test_empty_inspector_path_is_unset() {
        let env = env_of(&[(ENV_INSPECTOR_PATH, "")]);
        assert_eq!(
            resolve_inspector_path_with(None, "127.0.0.1:9222", env),
            "127.0.0.1:9222/inspector"
        );

        let env = env_of(&[(ENV_INSPECTOR_PATH, "env:1/inspector")]);
        assert_eq!(
            resolve_inspector_path_with(Some(" "), "127.0.0.1:9222", env),
            "env:1/inspector"
        );
    }
}
