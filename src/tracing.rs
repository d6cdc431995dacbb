//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! placement and resize state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=viewdock::placement=info` - module-level filtering
//! - `RUST_LOG=viewdock::update=debug` - message dispatch and membership diffs
//!
//! # Log Files
//!
//! Logs are written to `~/.config/viewdock/logs/viewdock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::collections::BTreeMap;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Membership;
use crate::registry::{ContainerId, ViewId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/viewdock/logs/viewdock.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "viewdock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of view placement for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipSnapshot {
    pub placements: BTreeMap<ViewId, ContainerId>,
    pub generated_count: usize,
}

impl MembershipSnapshot {
    pub fn from_membership(membership: &Membership) -> Self {
        Self {
            placements: membership
                .placements()
                .map(|(view, container)| (view.clone(), container.clone()))
                .collect(),
            generated_count: membership.generated_containers().len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &MembershipSnapshot) -> Option<String> {
        let mut changes: Vec<String> = other
            .placements
            .iter()
            .filter_map(|(view, after)| match self.placements.get(view) {
                Some(before) if before == after => None,
                Some(before) => Some(format!("{}: {} → {}", view, before, after)),
                None => Some(format!("{}: placed in {}", view, after)),
            })
            .collect();

        if self.generated_count != other.generated_count {
            changes.push(format!(
                "generated containers: {} → {}",
                self.generated_count, other.generated_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)], generated_count: usize) -> MembershipSnapshot {
        MembershipSnapshot {
            placements: pairs
                .iter()
                .map(|(v, c)| (ViewId::from(*v), ContainerId::from(*c)))
                .collect(),
            generated_count,
        }
    }

    #[test]
    fn test_diff_reports_moves() {
        let before = snapshot(&[("search", "explorer"), ("terminal", "panel")], 0);
        let after = snapshot(&[("search", "panel"), ("terminal", "panel")], 0);
        assert_eq!(
            before.diff(&after),
            Some("search: explorer → panel".to_string())
        );
    }

    #[test]
    fn test_diff_none_when_unchanged() {
        let before = snapshot(&[("search", "explorer")], 1);
        assert_eq!(before.diff(&before.clone()), None);
    }
}
