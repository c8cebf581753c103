//! Tests for asynchronous chaining, hooks and task cancellation.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use anyhow::Result;
use outcome::{Error, ErrorCategory, Outcome, OutcomeFutureExt, defaults, join_outcome};
use rstest::{fixture, rstest};
use test_helpers::{ensure_codes, expect_failure, expect_success};
use tokio::sync::Mutex;

#[fixture]
fn steps() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

async fn lookup(id: u32) -> Outcome<u32> {
    tokio::task::yield_now().await;
    if id == 0 {
        Error::not_found("Member.NotFound", "member was not found").into()
    } else {
        Outcome::success(id)
    }
}

#[rstest]
#[tokio::test]
async fn merge_async_runs_steps_in_sequence(steps: Arc<AtomicUsize>) -> Result<()> {
    let order = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&order);
    let second = Arc::clone(&order);
    let outcome = lookup(7)
        .await
        .merge_async(|id| async move {
            first.lock().await.push("first");
            Outcome::success(id + 1)
        })
        .await
        .merge_async(|id| async move {
            second.lock().await.push("second");
            steps.fetch_add(1, Ordering::SeqCst);
            Outcome::success(id.to_string())
        })
        .await;
    assert_eq!(expect_success(outcome)?, "8");
    assert_eq!(*order.lock().await, ["first", "second"]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn merge_async_never_creates_later_steps_after_failure(
    steps: Arc<AtomicUsize>,
) -> Result<()> {
    let counter = Arc::clone(&steps);
    let outcome = lookup(0)
        .continue_merge_with(|id| async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Outcome::success(id * 2)
        })
        .await;
    assert_eq!(steps.load(Ordering::SeqCst), 0);
    ensure_codes(expect_failure(&outcome)?, &["Member.NotFound"])
}

#[tokio::test]
async fn future_extension_maps_and_chains() -> Result<()> {
    let text = lookup(5)
        .map_outcome(|id| id * 10)
        .continue_merge_with(|id| async move { Outcome::success(format!("member-{id}")) })
        .await;
    assert_eq!(expect_success(text)?, "member-50");
    Ok(())
}

#[tokio::test]
async fn async_matches_fold_both_branches() {
    let found = lookup(3)
        .await
        .match_async(|id| async move { id }, |_| async { 0 })
        .await;
    assert_eq!(found, 3);

    let missing = lookup(0)
        .await
        .match_first_error_async(
            |_| async { String::new() },
            |error| async move { error.code().to_owned() },
        )
        .await;
    assert_eq!(missing, "Member.NotFound");

    let all = lookup(0)
        .await
        .match_async(|_| async { 0 }, |errors| async move { errors.len() })
        .await;
    assert_eq!(all, 1);
}

#[rstest]
#[tokio::test]
async fn async_hooks_run_on_matching_branch(steps: Arc<AtomicUsize>) {
    let succeeded = lookup(1).await;
    let failed = lookup(0).await;

    let on_success = Arc::clone(&steps);
    succeeded
        .if_success_async(|_| async move {
            on_success.fetch_add(1, Ordering::SeqCst);
        })
        .await;
    let skipped = Arc::clone(&steps);
    failed
        .if_success_async(|_| async move {
            skipped.fetch_add(10, Ordering::SeqCst);
        })
        .await;
    let on_failure = Arc::clone(&steps);
    failed
        .if_failure_async(|errors| {
            let count = errors.len();
            async move {
                on_failure.fetch_add(count * 100, Ordering::SeqCst);
            }
        })
        .await;

    assert_eq!(steps.load(Ordering::SeqCst), 101);
}

#[tokio::test]
async fn or_else_async_recovers_failures() {
    let recovered = lookup(0)
        .await
        .or_else_async(|_| async { Outcome::success(42) })
        .await;
    assert_eq!(recovered, Outcome::success(42));
}

#[tokio::test]
async fn cancelled_tasks_become_unexpected_failures() -> Result<()> {
    let handle = tokio::spawn(async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Outcome::success(1)
    });
    handle.abort();
    let outcome = join_outcome(handle).await;
    let errors = expect_failure(&outcome)?;
    ensure_codes(errors, &[defaults::UNHANDLED_EXCEPTION_CODE])?;
    assert_eq!(errors.first().map(Error::category), Some(ErrorCategory::Unexpected));
    Ok(())
}

#[tokio::test]
async fn panicking_tasks_become_unexpected_failures() -> Result<()> {
    let handle = tokio::spawn(async {
        if lookup(1).await.is_success() {
            panic!("worker crashed");
        }
        Outcome::success(1)
    });
    let outcome = join_outcome(handle).await;
    ensure_codes(expect_failure(&outcome)?, &[defaults::UNHANDLED_EXCEPTION_CODE])
}

#[tokio::test]
async fn completed_tasks_pass_their_outcome_through() -> Result<()> {
    let handle = tokio::spawn(lookup(9));
    assert_eq!(expect_success(join_outcome(handle).await)?, 9);
    Ok(())
}
