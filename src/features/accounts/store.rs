//! The account store: identifier → registration date.
//!
//! Identifiers are normalized to uppercase and used as the unique key;
//! re-registering an identifier silently replaces its date. Records are
//! never removed: an account past its alert day stays listed with a
//! negative day count until the process exits. Nothing is persisted.

use chrono::{Duration, NaiveDate};
use dashmap::DashMap;
use std::sync::Arc;

/// Days between registration and the alert.
pub const ALERT_WINDOW_DAYS: i64 = 14;

/// One tracked account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub identifier: String,
    pub registered_on: NaiveDate,
}

impl AccountRecord {
    /// The date this account's alert fires.
    pub fn alert_date(&self) -> NaiveDate {
        self.registered_on + Duration::days(ALERT_WINDOW_DAYS)
    }

    /// Signed days until the alert date; negative once it has passed.
    pub fn days_until_alert(&self, today: NaiveDate) -> i64 {
        (self.alert_date() - today).num_days()
    }

    /// Whether the alert window matures exactly on `today`.
    ///
    /// Strict equality: a day missed (e.g. process downtime) is not
    /// caught up later.
    pub fn matures_on(&self, today: NaiveDate) -> bool {
        self.alert_date() == today
    }
}

/// Shared in-memory account store.
///
/// Cheap to clone: handlers and the sweep task each hold a handle to the
/// same underlying map. Serenity dispatches events on a multithreaded
/// runtime, so access goes through a concurrent map rather than relying
/// on cooperative scheduling.
#[derive(Clone, Default)]
pub struct AccountStore {
    accounts: Arc<DashMap<String, NaiveDate>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an account, keyed by the uppercased identifier.
    ///
    /// Returns the previous registration date if the identifier was
    /// already tracked.
    pub fn upsert(&self, identifier: &str, registered_on: NaiveDate) -> Option<NaiveDate> {
        self.accounts
            .insert(identifier.to_uppercase(), registered_on)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All records, sorted by identifier for stable report output.
    pub fn snapshot(&self) -> Vec<AccountRecord> {
        let mut records: Vec<AccountRecord> = self
            .accounts
            .iter()
            .map(|entry| AccountRecord {
                identifier: entry.key().clone(),
                registered_on: *entry.value(),
            })
            .collect();
        records.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        records
    }

    /// Identifiers whose alert window matures exactly on `today`.
    pub fn matured_on(&self, today: NaiveDate) -> Vec<String> {
        let mut matured: Vec<String> = self
            .accounts
            .iter()
            .filter(|entry| {
                *entry.value() + Duration::days(ALERT_WINDOW_DAYS) == today
            })
            .map(|entry| entry.key().clone())
            .collect();
        matured.sort();
        matured
    }
}
