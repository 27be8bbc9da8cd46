//! Host application metadata consumed by the responder.

use serde::{Deserialize, Serialize};

/// Identity of the application being debugged.
pub trait HostContext: Send + Sync {
    /// Human-readable application name.
    fn app_label(&self) -> &str;
    fn app_version(&self) -> &str;
    /// Package or bundle identifier.
    fn package_name(&self) -> &str;
    /// Name of the current process. Secondary processes carry a `:suffix`.
    fn process_name(&self) -> &str;
}

/// A [`HostContext`] with values fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticHost {
    pub app_label: String,
    pub app_version: String,
    pub package_name: String,
    pub process_name: String,
}

impl StaticHost {
    pub fn new(
        app_label: impl Into<String>,
        app_version: impl Into<String>,
        package_name: impl Into<String>,
        process_name: impl Into<String>,
    ) -> Self {
        Self {
            app_label: app_label.into(),
            app_version: app_version.into(),
            package_name: package_name.into(),
            process_name: process_name.into(),
        }
    }
}

impl HostContext for StaticHost {
    fn app_label(&self) -> &str {
        &self.app_label
    }

    fn app_version(&self) -> &str {
        &self.app_version
    }

    fn package_name(&self) -> &str {
        &self.package_name
    }

    fn process_name(&self) -> &str {
        &self.process_name
    }
}
