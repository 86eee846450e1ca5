//! Environment-driven configuration for the dashboard.

use std::path::{Path, PathBuf};

use crate::completion_service::ReferencePolicy;

pub const DB_URL_ENV: &str = "LEARN_DB_URL";
pub const STRICT_REFERENCES_ENV: &str = "LEARN_STRICT_REFERENCES";
pub const DEFAULT_DB_URL: &str = "sqlite://dashboard.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub db_url: String,
    pub reference_policy: ReferencePolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            db_url: normalize_sqlite_url(DEFAULT_DB_URL.to_owned()),
            reference_policy: ReferencePolicy::default(),
        }
    }
}

impl DashboardConfig {
    /// Read `LEARN_DB_URL` and `LEARN_STRICT_REFERENCES` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_url = lookup(DB_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_URL.to_owned());
        let strict = lookup(STRICT_REFERENCES_ENV).is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            )
        });

        Self {
            db_url: normalize_sqlite_url(db_url),
            reference_policy: if strict {
                ReferencePolicy::Strict
            } else {
                ReferencePolicy::Permissive
            },
        }
    }
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL that
/// creates the database file on first use.
///
/// In-memory URLs are returned unchanged.
#[must_use]
pub fn normalize_sqlite_url(raw: String) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite:file:") {
        return trimmed.to_owned();
    }

    let (base, query) = match trimmed.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (trimmed, None),
    };
    let path_str = base
        .strip_prefix("sqlite://")
        .or_else(|| base.strip_prefix("sqlite:"))
        .unwrap_or(base);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    match query {
        Some(query) => format!("sqlite://{}?{query}", absolute.display()),
        None => format!("sqlite://{}?mode=rwc", absolute.display()),
    }
}
