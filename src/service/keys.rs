// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable names, persisted-store keys, and literal defaults.
//!
//! A logical setting deliberately has two spellings, one per namespace:
//! resolution order reconciles them, not a shared key. Grouping them here
//! keeps the accessor surface free of magic strings.

/// Environment variable names (override namespace).
pub mod env {
    /// Path to the private key used to sign registry tokens.
    pub const TOKEN_PRIVATE_KEY_PATH: &str = "TOKEN_PRIVATE_KEY_PATH";
    /// URL of the backing registry.
    pub const REGISTRY_URL: &str = "REGISTRY_URL";
    /// Internal URL of the job service.
    pub const JOBSERVICE_URL: &str = "JOBSERVICE_URL";
    /// URL of the core component.
    pub const CORE_URL: &str = "CORE_URL";
    /// Secret asserted by the core component on internal calls.
    pub const CORE_SECRET: &str = "CORE_SECRET";
    /// Username the core uses to access the registry.
    pub const REGISTRY_CREDENTIAL_USERNAME: &str = "REGISTRY_CREDENTIAL_USERNAME";
    /// Password the core uses to access the registry.
    pub const REGISTRY_CREDENTIAL_PASSWORD: &str = "REGISTRY_CREDENTIAL_PASSWORD";
    /// Secret asserted by the job service on internal calls.
    pub const JOBSERVICE_SECRET: &str = "JOBSERVICE_SECRET";
    /// URL of the Redis instance used by the registry.
    pub const REDIS_URL_REG: &str = "_REDIS_URL_REG";
    /// URL of the portal component.
    pub const PORTAL_URL: &str = "PORTAL_URL";
    /// URL of the registry controller.
    pub const REGISTRY_CONTROLLER_URL: &str = "REGISTRY_CONTROLLER_URL";
    /// Comma-separated registry types allowed for proxy-cache projects.
    pub const PERMITTED_REGISTRY_TYPES_FOR_PROXY_CACHE: &str =
        "PERMITTED_REGISTRY_TYPES_FOR_PROXY_CACHE";
    /// Garbage-collection blob reservation window in hours. Testing and
    /// debugging only; do not set in production.
    pub const GC_TIME_WINDOW_HOURS: &str = "GC_TIME_WINDOW_HOURS";
    /// Path to the key file encrypting stored secrets.
    pub const KEY_PATH: &str = "KEY_PATH";
}

/// Persisted-store key spellings.
pub mod store {
    /// External endpoint of the deployment, `protocol://host:port`.
    pub const EXT_ENDPOINT: &str = "ext_endpoint";
    /// Whether the deployment includes Notary.
    pub const WITH_NOTARY: &str = "with_notary";
    /// Whether the deployment includes Trivy.
    pub const WITH_TRIVY: &str = "with_trivy";
    /// Whether the deployment includes ChartMuseum.
    pub const WITH_CHARTMUSEUM: &str = "with_chartmuseum";
    /// Endpoint of the chart repository service.
    pub const CHART_REPOSITORY_URL: &str = "chart_repository_url";
    /// Internal URL of the core component.
    pub const CORE_URL: &str = "core_url";
    /// Node-local URL of the core component.
    pub const CORE_LOCAL_URL: &str = "core_local_url";
    /// Internal endpoint of the Notary server.
    pub const NOTARY_URL: &str = "notary_url";
    /// Endpoint of the Trivy adapter.
    pub const TRIVY_ADAPTER_URL: &str = "trivy_adapter_url";
    /// Whether the metric exporter is enabled.
    pub const METRIC_ENABLE: &str = "metric_enable";
    /// Listen port of the metric exporter.
    pub const METRIC_PORT: &str = "metric_port";
    /// HTTP path of the metric exporter.
    pub const METRIC_PATH: &str = "metric_path";
    /// Initial administrator password.
    pub const ADMIN_INITIAL_PASSWORD: &str = "admin_initial_password";
    /// Database engine type.
    pub const DATABASE_TYPE: &str = "database_type";
    /// PostgreSQL host.
    pub const POSTGRESQL_HOST: &str = "postgresql_host";
    /// PostgreSQL port.
    pub const POSTGRESQL_PORT: &str = "postgresql_port";
    /// PostgreSQL username.
    pub const POSTGRESQL_USERNAME: &str = "postgresql_username";
    /// PostgreSQL password.
    pub const POSTGRESQL_PASSWORD: &str = "postgresql_password";
    /// PostgreSQL database name.
    pub const POSTGRESQL_DATABASE: &str = "postgresql_database";
    /// PostgreSQL SSL mode.
    pub const POSTGRESQL_SSLMODE: &str = "postgresql_sslmode";
    /// PostgreSQL maximum idle pooled connections.
    pub const POSTGRESQL_MAX_IDLE_CONNS: &str = "postgresql_max_idle_conns";
    /// PostgreSQL maximum open pooled connections.
    pub const POSTGRESQL_MAX_OPEN_CONNS: &str = "postgresql_max_open_conns";
}

/// Literal defaults applied when neither env nor store yields a value.
pub mod defaults {
    /// Default path of the registry token signing key.
    pub const TOKEN_PRIVATE_KEY_PATH: &str = "/etc/core/private_key.pem";
    /// Default registry URL.
    pub const REGISTRY_URL: &str = "http://registry:5000";
    /// Default portal URL.
    pub const PORTAL_URL: &str = "http://portal:8080";
    /// Default registry controller URL.
    pub const REGISTRY_CTL_URL: &str = "http://registryctl:8080";
    /// Default path of the secret-encryption key file.
    pub const KEY_PATH: &str = "/etc/core/key";
    /// Default garbage-collection blob reservation window in hours.
    pub const GC_TIME_WINDOW_HOURS: i64 = 2;
    /// Path suffix of the token service on the core component.
    pub const TOKEN_SERVICE_SUFFIX: &str = "/service/token";
}
