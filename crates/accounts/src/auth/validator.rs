//! Ordered credential checks.
//!
//! Login walks a list of [`CredentialCheck`]s in order and stops at the first
//! one that accepts the pair.

use food_delivery_core::UserRecord;

use crate::config::FallbackAccount;

/// One way of accepting a username/password pair.
pub trait CredentialCheck {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` if this check accepts the pair.
    fn check(&self, records: &[UserRecord], username: &str, password: &str) -> bool;
}

/// Accepts a pair that exactly matches a stored record.
#[derive(Debug, Default, Clone, Copy)]
pub struct StoredRecordCheck;

impl CredentialCheck for StoredRecordCheck {
    fn name(&self) -> &'static str {
        "stored_record"
    }

    fn check(&self, records: &[UserRecord], username: &str, password: &str) -> bool {
        records.iter().any(|r| r.matches(username, password))
    }
}

/// Accepts the single built-in account.
#[derive(Debug, Clone)]
pub struct FallbackAccountCheck {
    account: FallbackAccount,
}

impl FallbackAccountCheck {
    #[must_use]
    pub const fn new(account: FallbackAccount) -> Self {
        Self { account }
    }
}

impl CredentialCheck for FallbackAccountCheck {
    fn name(&self) -> &'static str {
        "fallback_account"
    }

    fn check(&self, _records: &[UserRecord], username: &str, password: &str) -> bool {
        self.account.matches(username, password)
    }
}

/// Ordered chain of credential checks; first success wins.
pub struct CredentialValidator {
    checks: Vec<Box<dyn CredentialCheck + Send + Sync>>,
}

impl CredentialValidator {
    /// An empty chain. Rejects everything until checks are added.
    #[must_use]
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// Stored records first, then the fallback account.
    #[must_use]
    pub fn with_fallback(account: FallbackAccount) -> Self {
        Self::empty()
            .then(StoredRecordCheck)
            .then(FallbackAccountCheck::new(account))
    }

    /// Append a check to the end of the chain.
    #[must_use]
    pub fn then(mut self, check: impl CredentialCheck + Send + Sync + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Name of the first check that accepts the pair, if any.
    #[must_use]
    pub fn accepted_by(
        &self,
        records: &[UserRecord],
        username: &str,
        password: &str,
    ) -> Option<&'static str> {
        self.checks
            .iter()
            .find(|c| c.check(records, username, password))
            .map(|c| c.name())
    }

    /// Returns `true` if any check accepts the pair.
    #[must_use]
    pub fn validate(&self, records: &[UserRecord], username: &str, password: &str) -> bool {
        self.accepted_by(records, username, password).is_some()
    }
}

impl std::fmt::Debug for CredentialValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.checks.iter().map(|c| c.name()))
            .finish()
    }
}
