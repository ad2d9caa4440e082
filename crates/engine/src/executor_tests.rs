// SPDX-License-Identifier: MIT

use super::*;
use offpeak_adapters::{FakeNotifyAdapter, FakePoolAdapter, PoolCall};
use offpeak_core::{Event, FakeClock, ResourcePhase, ResourceSnapshot};
use std::time::Duration;

fn executor(
    pool: &FakePoolAdapter,
    notify: &FakeNotifyAdapter,
    clock: &FakeClock,
) -> (
    Executor<FakePoolAdapter, FakeNotifyAdapter, FakeClock>,
    Arc<Mutex<TimerQueue>>,
) {
    let timers = Arc::new(Mutex::new(TimerQueue::new()));
    (
        Executor::new(pool.clone(), notify.clone(), Arc::clone(&timers), clock.clone()),
        timers,
    )
}

#[tokio::test]
async fn pause_and_resume_reach_the_pool() {
    let pool = FakePoolAdapter::new();
    pool.insert(ResourceSnapshot::new("a", "job").with_phase(ResourcePhase::Downloading));
    let notify = FakeNotifyAdapter::new();
    let clock = FakeClock::new();
    let (executor, _) = executor(&pool, &notify, &clock);

    executor
        .execute(Effect::Pause { id: "a".into() })
        .await
        .unwrap();
    executor
        .execute(Effect::Resume { id: "a".into() })
        .await
        .unwrap();
    executor.execute(Effect::ResumeSession).await.unwrap();

    assert_eq!(
        pool.calls(),
        vec![
            PoolCall::Pause("a".into()),
            PoolCall::Resume("a".into()),
            PoolCall::ResumeSession,
        ]
    );
}

#[tokio::test]
async fn set_timer_arms_the_queue() {
    let pool = FakePoolAdapter::new();
    let notify = FakeNotifyAdapter::new();
    let clock = FakeClock::new();
    let (executor, timers) = executor(&pool, &notify, &clock);

    executor
        .execute(Effect::SetTimer {
            id: "schedule:tick".to_string(),
            duration: Duration::from_secs(60),
        })
        .await
        .unwrap();

    let timers = timers.lock().unwrap();
    assert!(timers.is_pending("schedule:tick"));
    assert_eq!(
        timers.next_fire_at(),
        Some(clock.now() + Duration::from_secs(60))
    );
}

#[tokio::test]
async fn cancel_timer_tolerates_absent_timers() {
    let pool = FakePoolAdapter::new();
    let notify = FakeNotifyAdapter::new();
    let clock = FakeClock::new();
    let (executor, timers) = executor(&pool, &notify, &clock);

    // nothing armed; cancellation succeeds anyway
    executor
        .execute(Effect::CancelTimer {
            id: "schedule:tick".to_string(),
        })
        .await
        .unwrap();
    assert!(timers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn emit_delivers_through_the_notifier() {
    let pool = FakePoolAdapter::new();
    let notify = FakeNotifyAdapter::new();
    let clock = FakeClock::new();
    let (executor, _) = executor(&pool, &notify, &clock);

    executor
        .execute(Effect::Emit(Event::SchedulerEnabled))
        .await
        .unwrap();

    assert_eq!(notify.events(), vec![Event::SchedulerEnabled]);
}

#[tokio::test]
async fn pool_failures_surface_as_execute_errors() {
    let pool = FakePoolAdapter::new();
    pool.insert(ResourceSnapshot::new("a", "job"));
    pool.fail_commands(&"a".into());
    let notify = FakeNotifyAdapter::new();
    let clock = FakeClock::new();
    let (executor, _) = executor(&pool, &notify, &clock);

    let err = executor
        .execute(Effect::Pause { id: "a".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ExecuteError::Pool(_)));
}
