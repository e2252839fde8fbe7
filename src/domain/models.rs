// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composite settings models assembled by the accessor surface.
//!
//! These records are built in a single call from independently resolved
//! keys; callers never observe a partially constructed value.

use serde::{Deserialize, Serialize};

/// Database settings: the engine type plus its connection parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// The database engine type, e.g. `postgresql`.
    #[serde(rename = "type")]
    pub db_type: String,
    /// PostgreSQL connection parameters.
    pub postgres: Postgres,
}

/// PostgreSQL connection parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postgres {
    /// Server host name.
    pub host: String,
    /// Server port.
    pub port: i32,
    /// Login user.
    pub username: String,
    /// Login password.
    pub password: String,
    /// Database name.
    pub database: String,
    /// SSL mode, e.g. `disable` or `require`.
    pub ssl_mode: String,
    /// Maximum number of idle pooled connections.
    pub max_idle_conns: i32,
    /// Maximum number of open pooled connections.
    pub max_open_conns: i32,
}

/// Metric exporter settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Whether the exporter is enabled.
    pub enabled: bool,
    /// Listen port of the exporter.
    pub port: i32,
    /// HTTP path the metrics are served on.
    pub path: String,
}
