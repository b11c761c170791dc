//! Alert feed: seeded mock entries plus notices raised by control actions.

use std::collections::VecDeque;
use std::fmt;

/// Maximum number of alerts retained in the feed.
pub const MAX_ALERTS: usize = 30;

/// Severity badge of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
        };
        f.write_str(s)
    }
}

/// One alert entry. Control actions raise these in place of toasts.
#[derive(Debug, Clone)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
    /// Engine tick at which the alert was raised. Seed entries use 0.
    pub tick: u64,
}

/// Bounded feed of alerts, newest first.
#[derive(Debug, Clone)]
pub struct AlertFeed {
    entries: VecDeque<Alert>,
}

impl AlertFeed {
    /// Builds the feed pre-populated with the mock seed entries.
    pub fn seeded() -> Self {
        let mut feed = Self {
            entries: VecDeque::with_capacity(MAX_ALERTS),
        };
        feed.push(Alert {
            severity: Severity::Info,
            message: "New household connected to network".to_string(),
            tick: 0,
        });
        feed.push(Alert {
            severity: Severity::Success,
            message: "Optimization pass completed successfully".to_string(),
            tick: 0,
        });
        feed.push(Alert {
            severity: Severity::Warning,
            message: "High demand detected in Zone B".to_string(),
            tick: 0,
        });
        feed
    }

    /// Pushes a new alert to the front, evicting the oldest past the cap.
    pub fn push(&mut self, alert: Alert) {
        if self.entries.len() >= MAX_ALERTS {
            self.entries.pop_back();
        }
        self.entries.push_front(alert);
    }

    /// Iterates alerts newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent alert, if any.
    pub fn latest(&self) -> Option<&Alert> {
        self.entries.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_feed_has_three_entries_newest_first() {
        let feed = AlertFeed::seeded();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed.latest().map(|a| a.severity), Some(Severity::Warning));
    }

    #[test]
    fn feed_is_bounded() {
        let mut feed = AlertFeed::seeded();
        for i in 0..(MAX_ALERTS * 2) {
            feed.push(Alert {
                severity: Severity::Info,
                message: format!("entry {i}"),
                tick: i as u64,
            });
        }
        assert_eq!(feed.len(), MAX_ALERTS);
        // Newest entry survives at the front.
        assert!(
            feed.latest()
                .map(|a| a.message.ends_with(&format!("{}", MAX_ALERTS * 2 - 1)))
                .unwrap_or(false)
        );
    }
}
