//! PROBITY Test Utilities
//!
//! Shared test infrastructure for the probity workspace:
//! - Fixture types that implement both `Logical` and `Fill`, private fields
//!   included
//! - Proptest generators for those fixtures
//! - Small helpers: decimal literals and throwaway recording contexts
//! - Assertions over recorded failures

// Re-export core types for convenience
pub use probity_core::{Failure, LabelPath, ProbityConfig, TestCase, TestContext};

use rust_decimal::Decimal;

/// Decimal from a float literal, rounded to the shortest exact form.
///
/// NaN and infinities become zero.
pub fn d(v: f64) -> Decimal {
    Decimal::try_from(v).unwrap_or_default()
}

/// A recording context named after the current test thread.
pub fn recording() -> TestCase {
    let name = std::thread::current()
        .name()
        .unwrap_or("recording")
        .to_string();
    TestCase::recording(name)
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Fixture types mirroring the shapes tests usually compare and fill.

    use super::*;
    use chrono::{DateTime, Utc};
    use probity_core::Complex64;
    use std::cmp::Ordering;
    use std::collections::HashMap;

    /// Compared through its ordering on `rank` alone; `note` never matters.
    #[derive(Debug, Clone, Default)]
    pub struct Ranked {
        pub rank: i64,
        pub note: i64,
    }

    impl Ranked {
        pub fn new(rank: i64, note: i64) -> Self {
            Self { rank, note }
        }
    }

    impl PartialEq for Ranked {
        fn eq(&self, other: &Self) -> bool {
            self.rank == other.rank
        }
    }

    impl PartialOrd for Ranked {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.rank.partial_cmp(&other.rank)
        }
    }

    probity_assert::logical_ordered!(Ranked);
    probity_rand::fill_record!(Ranked { rank, note });

    /// Compared through its equivalence on `tag` alone.
    #[derive(Debug, Clone, Default)]
    pub struct Tagged {
        pub tag: i64,
        pub note: i64,
    }

    impl Tagged {
        pub fn new(tag: i64, note: i64) -> Self {
            Self { tag, note }
        }
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.tag == other.tag
        }
    }

    probity_assert::logical_equivalent!(Tagged);
    probity_rand::fill_record!(Tagged { tag, note });

    /// A record with private fields; only this module can list them.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Account {
        pub id: String,
        owner: String,
        balance: Decimal,
        overdraft: Option<Decimal>,
    }

    impl Account {
        pub fn new(id: impl Into<String>, owner: impl Into<String>, balance: Decimal) -> Self {
            Self {
                id: id.into(),
                owner: owner.into(),
                balance,
                overdraft: None,
            }
        }

        pub fn with_overdraft(mut self, limit: Decimal) -> Self {
            self.overdraft = Some(limit);
            self
        }

        pub fn owner(&self) -> &str {
            &self.owner
        }

        pub fn balance(&self) -> Decimal {
            self.balance
        }

        pub fn overdraft(&self) -> Option<Decimal> {
            self.overdraft
        }
    }

    probity_assert::logical_record!(Account { id, owner, balance, overdraft });
    probity_rand::fill_record!(Account { id, owner, balance, overdraft });

    /// Nested aggregate: a sequence of records and a keyed map.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Ledger {
        pub name: String,
        pub accounts: Vec<Account>,
        totals: HashMap<String, Decimal>,
        frozen: bool,
    }

    impl Ledger {
        pub fn new(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                ..Self::default()
            }
        }

        pub fn with_account(mut self, account: Account) -> Self {
            *self.totals.entry(account.owner().to_string()).or_default() += account.balance();
            self.accounts.push(account);
            self
        }

        pub fn freeze(mut self) -> Self {
            self.frozen = true;
            self
        }

        pub fn totals(&self) -> &HashMap<String, Decimal> {
            &self.totals
        }

        pub fn is_frozen(&self) -> bool {
            self.frozen
        }
    }

    probity_assert::logical_record!(Ledger { name, accounts, totals, frozen });
    probity_rand::fill_record!(Ledger { name, accounts, totals, frozen });

    /// Timestamps, floats and complex parts in one record.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Sample {
        pub taken_at: DateTime<Utc>,
        pub value: f64,
        pub phase: Complex64,
        pub window: [u8; 4],
    }

    probity_assert::logical_record!(Sample { taken_at, value, phase, window });
    probity_rand::fill_record!(Sample { taken_at, value, phase, window });

    /// Two fields, both strings, neither public.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Credentials {
        user: String,
        token: String,
    }

    impl Credentials {
        pub fn new(user: impl Into<String>, token: impl Into<String>) -> Self {
            Self {
                user: user.into(),
                token: token.into(),
            }
        }

        pub fn user(&self) -> &str {
            &self.user
        }

        pub fn token(&self) -> &str {
            &self.token
        }
    }

    probity_assert::logical_record!(Credentials { user, token });
    probity_rand::fill_record!(Credentials { user, token });

    /// A ledger with two accounts for Alice and one for Bob.
    pub fn small_ledger() -> Ledger {
        Ledger::new("small")
            .with_account(Account::new("a-1", "alice", d(10.5)))
            .with_account(Account::new("a-2", "alice", d(2.0)))
            .with_account(Account::new("b-1", "bob", d(7.25)).with_overdraft(d(100.0)))
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for fixture types.

    use super::fixtures::*;
    use super::*;
    use proptest::prelude::*;

    /// Decimal with a mantissa below 10^15 in magnitude and a scale up to 10.
    pub fn arb_decimal() -> impl Strategy<Value = Decimal> {
        (-999_999_999_999_999i64..=999_999_999_999_999, 0u32..=10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    pub fn arb_seed() -> impl Strategy<Value = u64> {
        any::<u64>()
    }

    /// Account with short alphanumeric identifiers.
    pub fn arb_account() -> impl Strategy<Value = Account> {
        (
            "[a-z]-[0-9]{1,3}",
            "[a-z]{3,8}",
            arb_decimal(),
            proptest::option::of(arb_decimal()),
        )
            .prop_map(|(id, owner, balance, overdraft)| {
                let account = Account::new(id, owner, balance);
                match overdraft {
                    Some(limit) => account.with_overdraft(limit),
                    None => account,
                }
            })
    }

    pub fn arb_ledger() -> impl Strategy<Value = Ledger> {
        ("[a-z]{1,12}", prop::collection::vec(arb_account(), 0..5)).prop_map(
            |(name, accounts)| {
                accounts
                    .into_iter()
                    .fold(Ledger::new(name), |ledger, account| ledger.with_account(account))
            },
        )
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions over what a recording context collected.

    use super::*;

    /// Assert that some recorded failure points at `label`.
    #[track_caller]
    pub fn assert_failed_at(t: &TestCase, label: &str) {
        let failures = t.failures();
        assert!(
            failures.iter().any(|f| f.label() == Some(label)),
            "Expected a failure at {}, got: {:#?}",
            label,
            failures
        );
    }

    /// Assert that nothing was recorded.
    #[track_caller]
    pub fn assert_no_failures(t: &TestCase) {
        let failures = t.failures();
        assert!(failures.is_empty(), "Expected no failures, got: {:#?}", failures);
    }

    /// Labels of every recorded failure, in report order.
    pub fn failure_labels(t: &TestCase) -> Vec<String> {
        t.failures()
            .iter()
            .filter_map(|f| f.label().map(str::to_string))
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
