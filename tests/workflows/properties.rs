//! Property tests for the money-movement workflows.

use proptest::prelude::*;
use teller::domain::value_objects::Money;

use crate::common::{AccountFactory, TestStack};

/// `(balance, amount)` with `0 <= amount <= balance`.
fn covered_withdrawal() -> impl Strategy<Value = (i64, i64)> {
    (0i64..=100_000).prop_flat_map(|balance| (Just(balance), 0i64..=balance))
}

/// `(balance, amount)` with `amount > balance`.
fn overdrawn_withdrawal() -> impl Strategy<Value = (i64, i64)> {
    (0i64..=100_000).prop_flat_map(|balance| (Just(balance), balance + 1..=balance + 100_000))
}

/// `(to_paid_in, amount, from_balance)` with the transfer fully legal:
/// `amount <= from_balance` and `to_paid_in + amount <= 4000`.
fn legal_transfer() -> impl Strategy<Value = (i64, i64, i64)> {
    (0i64..=4_000)
        .prop_flat_map(|to_paid_in| (Just(to_paid_in), 0i64..=4_000 - to_paid_in))
        .prop_flat_map(|(to_paid_in, amount)| {
            (Just(to_paid_in), Just(amount), amount..=200_000)
        })
}

proptest! {
    #[test]
    fn covered_withdrawal_always_succeeds((balance, amount) in covered_withdrawal()) {
        let account = AccountFactory::with_balance("alice", balance);
        let account_id = account.id;
        let stack = TestStack::seeded(vec![account]);

        let result = stack.withdraw_money().execute(account_id, Money::new(amount));

        prop_assert!(result.is_ok());
        let stored = stack.repository.stored(account_id);
        prop_assert_eq!(stored.balance, Money::new(balance - amount));
        prop_assert_eq!(stored.withdrawn, Money::new(-amount));
        prop_assert_eq!(stack.repository.update_count(), 1);
    }

    #[test]
    fn overdrawn_withdrawal_never_persists((balance, amount) in overdrawn_withdrawal()) {
        let account = AccountFactory::with_balance("alice", balance);
        let account_id = account.id;
        let stack = TestStack::seeded(vec![account]);

        let result = stack.withdraw_money().execute(account_id, Money::new(amount));

        prop_assert!(result.is_err());
        prop_assert_eq!(stack.repository.update_count(), 0);
        prop_assert_eq!(stack.repository.stored(account_id).balance, Money::new(balance));
    }

    #[test]
    fn legal_transfer_conserves_money(
        (to_paid_in, amount, from_balance) in legal_transfer(),
        to_balance in 0i64..=100_000,
    ) {
        let from = AccountFactory::with_balance("alice", from_balance);
        let to = AccountFactory::with_paid_in("bob", to_balance, to_paid_in);
        let (from_id, to_id) = (from.id, to.id);
        let stack = TestStack::seeded(vec![from, to]);

        let result = stack
            .transfer_money()
            .execute(from_id, to_id, Money::new(amount));

        prop_assert!(result.is_ok());
        let from = stack.repository.stored(from_id);
        let to = stack.repository.stored(to_id);
        prop_assert_eq!(from.balance, Money::new(from_balance - amount));
        prop_assert_eq!(from.withdrawn, Money::new(-amount));
        prop_assert_eq!(to.balance, Money::new(to_balance + amount));
        prop_assert_eq!(to.paid_in, Money::new(to_paid_in + amount));
        prop_assert_eq!(
            from.balance + to.balance,
            Money::new(from_balance + to_balance)
        );
        prop_assert_eq!(stack.repository.update_count(), 2);
    }
}
