//! Black-box scenario tests
//!
//! These tests drive the ledger purely through the public `Ledger` trait
//! and assert observable balances, identifiers, and failure signals:
//! - Plain deposit/withdrawal sequences and balance snapshots
//! - Nested transaction commit chains
//! - Rollback at every depth, including cascading discard of entries that
//!   inner scopes had already committed into an outer scope
//! - Precondition failures with state left unchanged

use ledger_engine::{EntryId, InMemoryLedger, Ledger, LedgerError};
use rstest::rstest;
use std::collections::HashSet;

#[test]
fn balance_is_algebraic_sum_of_top_level_movements() {
    let mut ledger = InMemoryLedger::new();
    let amounts = [100, -10, 45, -200, 0, 65];

    for &amount in &amounts {
        if amount >= 0 {
            ledger.deposit(amount);
        } else {
            ledger.withdraw(-amount);
        }
    }

    assert_eq!(ledger.balance(), amounts.iter().sum::<i64>());
}

#[test]
fn identifiers_are_unique_across_the_ledger_lifetime() {
    let mut ledger = InMemoryLedger::new();
    let mut seen = HashSet::new();

    for i in 0..500 {
        assert!(seen.insert(ledger.deposit(i)));
        assert!(seen.insert(ledger.withdraw(i)));
    }

    // Ids minted inside scopes draw from the same space, committed or not
    ledger.begin();
    for i in 0..100 {
        assert!(seen.insert(ledger.deposit(i)));
    }
    ledger.rollback().unwrap();
}

#[test]
fn balance_at_matches_balance_after_each_top_level_write() {
    let mut ledger = InMemoryLedger::new();

    let d1 = ledger.deposit(100);
    assert_eq!(ledger.balance(), 100);
    assert_eq!(ledger.balance_at(&d1), Ok(100));

    let w1 = ledger.withdraw(10);
    assert_eq!(ledger.balance(), 90);
    assert_eq!(ledger.balance_at(&w1), Ok(90));

    // Snapshots stay stable under later operations
    ledger.deposit(1000);
    ledger.withdraw(999);
    assert_eq!(ledger.balance_at(&d1), Ok(100));
    assert_eq!(ledger.balance_at(&w1), Ok(90));
}

#[test]
fn rollback_restores_balance_observed_before_begin() {
    let mut ledger = InMemoryLedger::new();
    ledger.deposit(100);
    ledger.withdraw(25);
    let before = ledger.balance();

    ledger.begin();
    ledger.deposit(500);
    ledger.withdraw(200);
    let pending = ledger.withdraw(1);
    ledger.rollback().unwrap();

    assert_eq!(ledger.balance(), before);
    assert_eq!(
        ledger.balance_at(&pending),
        Err(LedgerError::unknown_entry(&pending))
    );
}

#[test]
fn nested_commits_resolve_only_at_the_outermost_commit() {
    let mut ledger = InMemoryLedger::new();

    ledger.begin();
    let d1 = ledger.deposit(10);
    ledger.begin();
    let d2 = ledger.deposit(20);
    ledger.begin();
    let d3 = ledger.deposit(30);

    ledger.commit().unwrap();
    ledger.commit().unwrap();
    // Two inner commits done, outermost still open: nothing resolvable
    for id in [&d1, &d2, &d3] {
        assert!(ledger.balance_at(id).is_err());
    }
    assert_eq!(ledger.balance(), 60);

    ledger.commit().unwrap();
    assert_eq!(ledger.balance_at(&d1), Ok(10));
    assert_eq!(ledger.balance_at(&d2), Ok(30));
    assert_eq!(ledger.balance_at(&d3), Ok(60));
}

#[test]
fn outer_rollback_discards_committed_inner_entries() {
    let mut ledger = InMemoryLedger::new();
    ledger.deposit(1000);

    ledger.begin();
    ledger.withdraw(100);
    ledger.begin();
    let inner = ledger.deposit(5);
    ledger.commit().unwrap();
    assert_eq!(ledger.balance(), 905);

    ledger.rollback().unwrap();

    assert_eq!(ledger.balance(), 1000);
    assert!(ledger.balance_at(&inner).is_err());
}

#[rstest]
#[case::commit("commit")]
#[case::rollback("rollback")]
fn finishing_without_a_transaction_fails_and_leaves_state_unchanged(#[case] operation: &str) {
    let mut ledger = InMemoryLedger::new();
    let d1 = ledger.deposit(100);

    let result = match operation {
        "commit" => ledger.commit(),
        _ => ledger.rollback(),
    };

    assert_eq!(result, Err(LedgerError::no_active_transaction(operation)));
    assert_eq!(ledger.balance(), 100);
    assert_eq!(ledger.balance_at(&d1), Ok(100));
}

// Literal sequence from the product contract: deposit 100, withdraw 10,
// then reconstruct both snapshots.
#[test]
fn scenario_deposit_withdraw_snapshots() {
    let mut ledger = InMemoryLedger::new();
    assert_eq!(ledger.balance(), 0);

    let d1 = ledger.deposit(100);
    assert_eq!(ledger.balance(), 100);

    let w1 = ledger.withdraw(10);
    assert_eq!(ledger.balance(), 90);

    assert_eq!(ledger.balance_at(&d1), Ok(100));
    assert_eq!(ledger.balance_at(&w1), Ok(90));
}

// Nested rollback-then-commit: the inner rollback discards only the inner
// scope; the outer deposit stays pending until the outer commit.
#[test]
fn scenario_nested_rollback_then_commit() {
    let mut ledger = InMemoryLedger::new();

    ledger.begin();
    let d1 = ledger.deposit(100);
    ledger.begin();
    let w1 = ledger.withdraw(10);
    assert_eq!(ledger.balance(), 90);

    ledger.rollback().unwrap();
    assert_eq!(ledger.balance(), 100);
    assert_eq!(ledger.balance_at(&w1), Err(LedgerError::unknown_entry(&w1)));
    // Outer deposit still pending, so it is not resolvable either
    assert!(ledger.balance_at(&d1).is_err());

    ledger.commit().unwrap();
    assert_eq!(ledger.balance(), 100);
    assert_eq!(ledger.balance_at(&d1), Ok(100));
}

#[test]
fn scenario_unknown_id_on_empty_ledger() {
    let ledger = InMemoryLedger::new();
    let result = ledger.balance_at(&EntryId::from("BAD_ID"));
    assert_eq!(result, Err(LedgerError::unknown_entry("BAD_ID")));
}

#[test]
fn deep_nesting_is_bounded_only_by_memory() {
    let mut ledger = InMemoryLedger::new();

    for i in 0..1_000 {
        ledger.begin();
        ledger.deposit(i);
    }
    assert_eq!(ledger.balance(), (0..1_000).sum::<i64>());

    for _ in 0..1_000 {
        ledger.commit().unwrap();
    }
    assert_eq!(ledger.balance(), (0..1_000).sum::<i64>());
    assert_eq!(ledger.committed_entry_count(), 1_000);
}

#[test]
fn interleaved_scopes_keep_running_balances_consistent() {
    let mut ledger = InMemoryLedger::new();
    let d0 = ledger.deposit(10);

    ledger.begin();
    let d1 = ledger.deposit(20);
    ledger.begin();
    ledger.withdraw(5);
    ledger.rollback().unwrap();
    let d2 = ledger.deposit(30);
    ledger.commit().unwrap();

    assert_eq!(ledger.balance(), 60);
    assert_eq!(ledger.balance_at(&d0), Ok(10));
    assert_eq!(ledger.balance_at(&d1), Ok(30));
    assert_eq!(ledger.balance_at(&d2), Ok(60));
}
