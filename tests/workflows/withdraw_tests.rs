//! Behavior tests for the withdraw workflow.

use rstest::rstest;
use teller::application::workflows::WorkflowError;
use teller::domain::account::DomainError;
use teller::domain::value_objects::{AccountId, Money};
use teller::infrastructure::RepositoryError;

use crate::common::{AccountFactory, TestStack};

#[rstest]
#[case(2000, 100)]
#[case(2000, 500)]
fn withdraw_success(#[case] from_balance: i64, #[case] amount: i64) {
    let account = AccountFactory::with_balance("alice", from_balance);
    let account_id = account.id;
    let stack = TestStack::seeded(vec![account]);

    stack
        .withdraw_money()
        .execute(account_id, Money::new(amount))
        .unwrap();

    let stored = stack.repository.stored(account_id);
    assert_eq!(stored.balance, Money::new(from_balance - amount));
    assert_eq!(stored.withdrawn, Money::new(-amount));
    assert!(stack.notifications.funds_low_notices().is_empty());
    assert_eq!(stack.repository.update_count(), 1);
}

#[rstest]
fn withdraw_success_with_funds_low_notification() {
    let account = AccountFactory::with_balance("alice", 500);
    let account_id = account.id;
    let email = account.owner.email().clone();
    let stack = TestStack::seeded(vec![account]);

    stack
        .withdraw_money()
        .execute(account_id, Money::new(100))
        .unwrap();

    let stored = stack.repository.stored(account_id);
    assert_eq!(stored.balance, Money::new(400));
    assert_eq!(stored.withdrawn, Money::new(-100));
    assert_eq!(stack.notifications.funds_low_notices(), vec![email]);
    assert_eq!(stack.repository.update_count(), 1);
}

#[rstest]
fn withdraw_fails_when_insufficient_funds() {
    let account = AccountFactory::with_balance("alice", 100);
    let account_id = account.id;
    let stack = TestStack::seeded(vec![account]);

    let result = stack
        .withdraw_money()
        .execute(account_id, Money::new(500));

    let error = result.unwrap_err();
    assert_eq!(error.to_string(), "Insufficient funds");
    assert!(matches!(
        error,
        WorkflowError::Domain(DomainError::InsufficientFunds { .. })
    ));
    assert_eq!(stack.repository.update_count(), 0);
    assert!(stack.notifications.funds_low_notices().is_empty());
    assert_eq!(stack.repository.stored(account_id).balance, Money::new(100));
}

#[rstest]
fn withdraw_fails_when_account_missing() {
    let stack = TestStack::seeded(vec![]);
    let unknown = AccountId::generate();

    let result = stack.withdraw_money().execute(unknown, Money::new(100));

    assert_eq!(
        result,
        Err(WorkflowError::Repository(RepositoryError::NotFound(
            unknown
        )))
    );
    assert_eq!(stack.repository.update_count(), 0);
}

#[rstest]
fn withdraw_of_zero_is_a_persisted_no_op() {
    let account = AccountFactory::with_balance("alice", 2000);
    let account_id = account.id;
    let stack = TestStack::seeded(vec![account]);

    stack
        .withdraw_money()
        .execute(account_id, Money::zero())
        .unwrap();

    let stored = stack.repository.stored(account_id);
    assert_eq!(stored.balance, Money::new(2000));
    assert_eq!(stored.withdrawn, Money::zero());
    assert_eq!(stack.repository.update_count(), 1);
}

#[rstest]
fn withdraw_rechecking_does_not_change_the_outcome() {
    // Predicates are pure: a failed withdrawal can be retried and fails
    // identically as long as the stored state is unchanged.
    let account = AccountFactory::with_balance("alice", 100);
    let account_id = account.id;
    let stack = TestStack::seeded(vec![account]);
    let workflow = stack.withdraw_money();

    let first = workflow.execute(account_id, Money::new(500));
    let second = workflow.execute(account_id, Money::new(500));

    assert_eq!(first, second);
    assert_eq!(stack.repository.update_count(), 0);
}
