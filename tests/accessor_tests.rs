// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the typed accessor surface and source precedence.
//!
//! Environment variables are process-global and tests run concurrently, so
//! each variable is touched by exactly one test, and every test probes the
//! default before setting its override.

use corecfg::prelude::*;
use std::env;
use std::sync::Arc;

/// Helper to set and clean up environment variables
struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

fn facade() -> SystemConfig {
    SystemConfig::new(Arc::new(MemoryStore::new()))
}

#[test]
fn test_registry_url_default_then_override() {
    let cfg = facade();
    assert_eq!(cfg.registry_url(), "http://registry:5000");

    let mut guard = EnvGuard::new();
    guard.set("REGISTRY_URL", "http://registry.internal:5000");
    assert_eq!(cfg.registry_url(), "http://registry.internal:5000");
}

#[test]
fn test_portal_url_default_then_override() {
    let cfg = facade();
    assert_eq!(cfg.portal_url(), "http://portal:8080");

    let mut guard = EnvGuard::new();
    guard.set("PORTAL_URL", "http://portal.internal:8080");
    assert_eq!(cfg.portal_url(), "http://portal.internal:8080");
}

#[test]
fn test_registry_ctl_url_default_then_override() {
    let cfg = facade();
    assert_eq!(cfg.registry_ctl_url(), "http://registryctl:8080");

    let mut guard = EnvGuard::new();
    guard.set("REGISTRY_CONTROLLER_URL", "http://registryctl.internal:8080");
    assert_eq!(cfg.registry_ctl_url(), "http://registryctl.internal:8080");
}

#[test]
fn test_token_private_key_path_default_then_override() {
    let cfg = facade();
    assert_eq!(cfg.token_private_key_path(), "/etc/core/private_key.pem");

    let mut guard = EnvGuard::new();
    guard.set("TOKEN_PRIVATE_KEY_PATH", "/run/secrets/token_key.pem");
    assert_eq!(cfg.token_private_key_path(), "/run/secrets/token_key.pem");
}

#[test]
fn test_defaultless_env_accessors_yield_empty_then_value() {
    let cfg = facade();
    assert_eq!(cfg.internal_jobservice_url(), "");
    assert_eq!(cfg.core_url(), "");
    assert_eq!(cfg.core_secret(), "");
    assert_eq!(cfg.registry_redis_url(), "");

    let mut guard = EnvGuard::new();
    guard.set("JOBSERVICE_URL", "http://jobservice:8080");
    guard.set("CORE_URL", "http://core:8080");
    guard.set("CORE_SECRET", "core-shared-secret");
    guard.set("_REDIS_URL_REG", "redis://redis:6379/1");

    assert_eq!(cfg.internal_jobservice_url(), "http://jobservice:8080");
    assert_eq!(cfg.core_url(), "http://core:8080");
    assert_eq!(cfg.core_secret(), "core-shared-secret");
    assert_eq!(cfg.registry_redis_url(), "redis://redis:6379/1");
}

#[test]
fn test_registry_credential_pair() {
    let cfg = facade();
    assert_eq!(cfg.registry_credential(), (String::new(), String::new()));

    let mut guard = EnvGuard::new();
    guard.set("REGISTRY_CREDENTIAL_USERNAME", "registry-user");
    guard.set("REGISTRY_CREDENTIAL_PASSWORD", "registry-pass");
    assert_eq!(
        cfg.registry_credential(),
        ("registry-user".to_string(), "registry-pass".to_string())
    );
}

#[test]
fn test_permitted_registry_types_list() {
    let cfg = facade();

    // Unset yields an empty list.
    assert!(cfg.permitted_registry_types_for_proxy_cache().is_empty());

    // Empty yields an empty list, never a list containing "".
    let mut guard = EnvGuard::new();
    guard.set("PERMITTED_REGISTRY_TYPES_FOR_PROXY_CACHE", "");
    assert!(cfg.permitted_registry_types_for_proxy_cache().is_empty());

    guard.set(
        "PERMITTED_REGISTRY_TYPES_FOR_PROXY_CACHE",
        "docker-hub,quay,azure-acr",
    );
    assert_eq!(
        cfg.permitted_registry_types_for_proxy_cache(),
        vec!["docker-hub", "quay", "azure-acr"]
    );
}

#[test]
fn test_gc_time_window_override_and_malformed_fallback() {
    let cfg = facade();
    assert_eq!(cfg.gc_time_window(), 2);

    let mut guard = EnvGuard::new();
    guard.set("GC_TIME_WINDOW_HOURS", "6");
    assert_eq!(cfg.gc_time_window(), 6);

    guard.set("GC_TIME_WINDOW_HOURS", "not-a-number");
    assert_eq!(cfg.gc_time_window(), 2);
}

#[test]
fn test_resolve_precedence_env_store_default() {
    let store = Arc::new(MemoryStore::new());
    let cfg = SystemConfig::new(store.clone());

    // Neither source set: the literal default.
    assert_eq!(
        cfg.resolve(Scope::System, "RESOLVE_PROBE", Some("resolve_probe"), "fallback"),
        "fallback"
    );

    // Store only: store wins over the default.
    store.set("resolve_probe", "from-store");
    assert_eq!(
        cfg.resolve(Scope::System, "RESOLVE_PROBE", Some("resolve_probe"), "fallback"),
        "from-store"
    );

    // Env set too: env wins over the store.
    let mut guard = EnvGuard::new();
    guard.set("RESOLVE_PROBE", "from-env");
    assert_eq!(
        cfg.resolve(Scope::System, "RESOLVE_PROBE", Some("resolve_probe"), "fallback"),
        "from-env"
    );
}

#[test]
fn test_resolve_empty_env_falls_through() {
    let store = Arc::new(MemoryStore::new());
    store.set("resolve_empty_probe", "from-store");
    let cfg = SystemConfig::new(store);

    let mut guard = EnvGuard::new();
    guard.set("RESOLVE_EMPTY_PROBE", "");
    assert_eq!(
        cfg.resolve(
            Scope::System,
            "RESOLVE_EMPTY_PROBE",
            Some("resolve_empty_probe"),
            "fallback"
        ),
        "from-store"
    );
}
