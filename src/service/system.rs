// SPDX-License-Identifier: MIT OR Apache-2.0

//! The system-configuration facade.
//!
//! [`SystemConfig`] exposes the typed accessor surface over the layered
//! sources and owns the two lazily constructed security objects: the key
//! provider and the inter-service secret store. The facade is constructed
//! explicitly and passed to dependents at startup; the `OnceCell`s inside it
//! serialize first construction so concurrent first callers all observe the
//! same instance, fully built.
//!
//! Accessors that consult the persisted store take the [`Scope`] as an
//! explicit argument so the namespace decision is visible at every call
//! site.

use crate::adapters::FileKeyProvider;
use crate::domain::secret::{SecretStore, JOBSERVICE_USER};
use crate::domain::{ConfigError, Database, Metric, Postgres, Result, Scope};
use crate::ports::{ConfigStore, KeyProvider};
use crate::service::derived::{join_endpoint, strip_scheme};
use crate::service::keys::{defaults, env as env_keys, store as store_keys};
use crate::service::resolver::{env_i64_or, env_list, env_or, env_or_empty, env_value};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Factory producing the key provider on first use.
type KeyProviderFactory = Box<dyn Fn() -> Arc<dyn KeyProvider> + Send + Sync>;

/// The typed system-configuration facade.
///
/// Each accessor resolves from the highest-precedence source that yields a
/// value: a non-empty environment variable, then the backing store under the
/// given scope, then a literal default. Nothing is cached between calls
/// except the two singletons.
///
/// # Examples
///
/// ```rust
/// use corecfg::prelude::*;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// store.set("core_url", "http://core:8080/");
///
/// let cfg = SystemConfig::new(store);
/// assert_eq!(
///     cfg.internal_token_service_endpoint(Scope::System),
///     "http://core:8080/service/token"
/// );
/// ```
pub struct SystemConfig {
    store: Arc<dyn ConfigStore>,
    key_provider: OnceCell<Arc<dyn KeyProvider>>,
    secret_store: OnceCell<SecretStore>,
    key_provider_factory: KeyProviderFactory,
}

impl SystemConfig {
    /// Creates a facade over the given store with the default file-backed
    /// key provider.
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self::builder(store).build()
    }

    /// Creates a builder for a facade over the given store.
    pub fn builder(store: Arc<dyn ConfigStore>) -> SystemConfigBuilder {
        SystemConfigBuilder::new(store)
    }

    /// Startup hook forcing both singletons into existence.
    ///
    /// Calling this is optional; first accessor use builds them too. Both
    /// paths are idempotent, so calling `init` after an accessor already
    /// triggered construction is a no-op.
    pub fn init(&self) {
        let _ = self.key_provider();
        let _ = self.secret_store();
    }

    // ---- singleton-backed --------------------------------------------

    /// The process-wide key provider, constructed on first call.
    pub fn key_provider(&self) -> &Arc<dyn KeyProvider> {
        self.key_provider
            .get_or_init(|| (self.key_provider_factory)())
    }

    /// The key material used to encrypt the passwords of replication
    /// targets and other stored secrets.
    ///
    /// Delegates to the key provider; the key file is read on every call.
    pub fn secret_key(&self) -> Result<String> {
        self.key_provider().get(None)
    }

    /// The inter-service secret store, constructed on first call from the
    /// resolved job service secret.
    pub fn secret_store(&self) -> &SecretStore {
        self.secret_store.get_or_init(|| {
            let mut secrets = HashMap::new();
            secrets.insert(self.jobservice_secret(), JOBSERVICE_USER.to_string());
            SecretStore::new(secrets)
        })
    }

    // ---- layered resolution ------------------------------------------

    /// Resolves a value by fixed precedence: a non-empty environment
    /// variable wins, then the store queried under `scope`, then the
    /// literal default.
    ///
    /// The named accessors cover the known settings; this is the
    /// generalized primitive for callers that need the same layering over
    /// a setting of their own.
    pub fn resolve(
        &self,
        scope: Scope,
        env_name: &str,
        store_key: Option<&str>,
        default: &str,
    ) -> String {
        if let Some(value) = env_value(env_name) {
            return value;
        }
        if let Some(key) = store_key {
            let value = self.store.get_str(scope, key);
            if !value.is_empty() {
                return value;
            }
        }
        default.to_string()
    }

    // ---- direct environment reads ------------------------------------

    /// Path to the key for signing registry tokens.
    pub fn token_private_key_path(&self) -> String {
        env_or(
            env_keys::TOKEN_PRIVATE_KEY_PATH,
            defaults::TOKEN_PRIVATE_KEY_PATH,
        )
    }

    /// URL of the backing registry.
    pub fn registry_url(&self) -> String {
        env_or(env_keys::REGISTRY_URL, defaults::REGISTRY_URL)
    }

    /// Job service URL for internal communication between components.
    pub fn internal_jobservice_url(&self) -> String {
        env_or_empty(env_keys::JOBSERVICE_URL)
    }

    /// URL of the core component, as injected into the environment.
    pub fn core_url(&self) -> String {
        env_or_empty(env_keys::CORE_URL)
    }

    /// Secret the core component asserts when calling other components.
    pub fn core_secret(&self) -> String {
        env_or_empty(env_keys::CORE_SECRET)
    }

    /// Username and password the core uses to access the registry.
    pub fn registry_credential(&self) -> (String, String) {
        (
            env_or_empty(env_keys::REGISTRY_CREDENTIAL_USERNAME),
            env_or_empty(env_keys::REGISTRY_CREDENTIAL_PASSWORD),
        )
    }

    /// Secret the job service asserts when calling other components.
    pub fn jobservice_secret(&self) -> String {
        env_or_empty(env_keys::JOBSERVICE_SECRET)
    }

    /// URL of the Redis instance used by the registry.
    pub fn registry_redis_url(&self) -> String {
        env_or_empty(env_keys::REDIS_URL_REG)
    }

    /// URL of the portal component.
    pub fn portal_url(&self) -> String {
        env_or(env_keys::PORTAL_URL, defaults::PORTAL_URL)
    }

    /// URL of the registry controller.
    pub fn registry_ctl_url(&self) -> String {
        env_or(
            env_keys::REGISTRY_CONTROLLER_URL,
            defaults::REGISTRY_CTL_URL,
        )
    }

    /// Registry types permitted as proxy-cache upstreams.
    ///
    /// An unset or empty variable yields an empty list.
    pub fn permitted_registry_types_for_proxy_cache(&self) -> Vec<String> {
        env_list(env_keys::PERMITTED_REGISTRY_TYPES_FOR_PROXY_CACHE)
    }

    /// The garbage-collection blob reservation window, in hours.
    ///
    /// The environment override exists for testing and debugging only; a
    /// malformed value is discarded in favor of the default.
    pub fn gc_time_window(&self) -> i64 {
        env_i64_or(
            env_keys::GC_TIME_WINDOW_HOURS,
            defaults::GC_TIME_WINDOW_HOURS,
        )
    }

    // ---- store-backed reads ------------------------------------------

    /// Whether the deployment includes Notary.
    pub fn with_notary(&self, scope: Scope) -> bool {
        self.store.get_bool(scope, &store_keys::WITH_NOTARY.into())
    }

    /// Whether the deployment includes Trivy.
    pub fn with_trivy(&self, scope: Scope) -> bool {
        self.store.get_bool(scope, &store_keys::WITH_TRIVY.into())
    }

    /// Whether the deployment includes ChartMuseum.
    pub fn with_chartmuseum(&self, scope: Scope) -> bool {
        self.store
            .get_bool(scope, &store_keys::WITH_CHARTMUSEUM.into())
    }

    /// Endpoint of the chart repository service.
    ///
    /// This value backs a dependent integration and has no sensible
    /// default; resolving to empty is an error.
    pub fn chartmuseum_endpoint(&self, scope: Scope) -> Result<String> {
        let endpoint = self
            .store
            .get_str(scope, store_keys::CHART_REPOSITORY_URL)
            .trim()
            .to_string();
        if endpoint.is_empty() {
            return Err(ConfigError::MissingRequiredValue {
                key: store_keys::CHART_REPOSITORY_URL.to_string(),
            });
        }
        Ok(endpoint)
    }

    /// External endpoint of the deployment, `protocol://host:port`.
    pub fn ext_endpoint(&self, scope: Scope) -> String {
        self.store.get_str(scope, store_keys::EXT_ENDPOINT)
    }

    /// External URL without the scheme, `host:port`.
    pub fn ext_url(&self, scope: Scope) -> String {
        strip_scheme(&self.ext_endpoint(scope)).to_string()
    }

    /// Internal URL of the core component, trailing slash stripped.
    pub fn internal_core_url(&self, scope: Scope) -> String {
        self.store
            .get_str(scope, store_keys::CORE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Node-local URL of the core component.
    pub fn local_core_url(&self, scope: Scope) -> String {
        self.store.get_str(scope, store_keys::CORE_LOCAL_URL)
    }

    /// Token service endpoint for internal communication between
    /// components.
    pub fn internal_token_service_endpoint(&self, scope: Scope) -> String {
        join_endpoint(
            &self.internal_core_url(scope),
            defaults::TOKEN_SERVICE_SUFFIX,
        )
    }

    /// Notary server endpoint for internal communication.
    ///
    /// A conventional value; it may be unreachable when the deployment does
    /// not include Notary.
    pub fn internal_notary_endpoint(&self, scope: Scope) -> String {
        self.store.get_str(scope, store_keys::NOTARY_URL)
    }

    /// Endpoint of the Trivy adapter instance.
    pub fn trivy_adapter_url(&self, scope: Scope) -> String {
        self.store.get_str(scope, store_keys::TRIVY_ADAPTER_URL)
    }

    /// The overall metric exporter settings.
    pub fn metric(&self, scope: Scope) -> Metric {
        Metric {
            enabled: self.store.get_bool(scope, &store_keys::METRIC_ENABLE.into()),
            port: self.store.get_int(scope, &store_keys::METRIC_PORT.into()),
            path: self.store.get_str(scope, store_keys::METRIC_PATH),
        }
    }

    /// The initial administrator password.
    pub fn initial_admin_password(&self, scope: Scope) -> String {
        self.store.get_str(scope, store_keys::ADMIN_INITIAL_PASSWORD)
    }

    /// Database settings, assembled in one call.
    pub fn database(&self, scope: Scope) -> Database {
        Database {
            db_type: self.store.get_str(scope, store_keys::DATABASE_TYPE),
            postgres: Postgres {
                host: self.store.get_str(scope, store_keys::POSTGRESQL_HOST),
                port: self
                    .store
                    .get_int(scope, &store_keys::POSTGRESQL_PORT.into()),
                username: self.store.get_str(scope, store_keys::POSTGRESQL_USERNAME),
                password: self.store.get_str(scope, store_keys::POSTGRESQL_PASSWORD),
                database: self.store.get_str(scope, store_keys::POSTGRESQL_DATABASE),
                ssl_mode: self.store.get_str(scope, store_keys::POSTGRESQL_SSLMODE),
                max_idle_conns: self
                    .store
                    .get_int(scope, &store_keys::POSTGRESQL_MAX_IDLE_CONNS.into()),
                max_open_conns: self
                    .store
                    .get_int(scope, &store_keys::POSTGRESQL_MAX_OPEN_CONNS.into()),
            },
        }
    }
}

/// Builder for a [`SystemConfig`].
///
/// The key-provider factory hook exists for dependency injection: embedders
/// and tests can supply their own provider instead of the default
/// file-backed one resolved from `KEY_PATH`.
pub struct SystemConfigBuilder {
    store: Arc<dyn ConfigStore>,
    key_provider_factory: Option<KeyProviderFactory>,
}

impl SystemConfigBuilder {
    /// Creates a builder over the given store.
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        SystemConfigBuilder {
            store,
            key_provider_factory: None,
        }
    }

    /// Overrides the factory used to construct the key provider on first
    /// use.
    pub fn with_key_provider_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn KeyProvider> + Send + Sync + 'static,
    {
        self.key_provider_factory = Some(Box::new(factory));
        self
    }

    /// Uses an already-constructed key provider.
    pub fn with_key_provider(self, provider: Arc<dyn KeyProvider>) -> Self {
        self.with_key_provider_factory(move || provider.clone())
    }

    /// Builds the facade.
    pub fn build(self) -> SystemConfig {
        let factory = self.key_provider_factory.unwrap_or_else(|| {
            Box::new(|| {
                let path = env_or(env_keys::KEY_PATH, defaults::KEY_PATH);
                tracing::info!("key path: {}", path);
                Arc::new(FileKeyProvider::new(path)) as Arc<dyn KeyProvider>
            })
        });
        SystemConfig {
            store: self.store,
            key_provider: OnceCell::new(),
            secret_store: OnceCell::new(),
            key_provider_factory: factory,
        }
    }
}
