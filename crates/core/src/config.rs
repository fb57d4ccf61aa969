use serde::Deserialize;

use atomic_executor_model::VersionInfo;

/// Default `service_name` reported by the version operation.
pub const DEFAULT_SERVICE_NAME: &str = "arp-atomic-executor";

/// Default `service_version`: the version of this crate.
pub const DEFAULT_SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Construction-time configuration of an [`AtomicExecutor`](crate::AtomicExecutor).
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutorConfig {
    /// Name exposed by the version operation.
    pub service_name: String,
    /// Version exposed by the version operation.
    pub service_version: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        ExecutorConfig {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_version: DEFAULT_SERVICE_VERSION.to_string(),
        }
    }
}

impl ExecutorConfig {
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    pub fn with_service_version(mut self, service_version: impl Into<String>) -> Self {
        self.service_version = service_version.into();
        self
    }

    /// The identity an executor built from this config reports.
    pub fn identity(&self) -> VersionInfo {
        VersionInfo::new(&self.service_name, &self.service_version)
    }
}
