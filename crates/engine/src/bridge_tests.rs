// SPDX-License-Identifier: MIT

use super::*;
use crate::RuntimeDeps;
use chrono::NaiveDate;
use offpeak_adapters::{FakeConfigStore, FakeNotifyAdapter, FakePoolAdapter, PoolCall};
use offpeak_core::{
    FakeClock, ResourcePhase, ResourceSnapshot, ScheduleConfig, ScheduleTable, TargetState,
};

async fn suspended_runtime(
    pool: &FakePoolAdapter,
) -> Runtime<FakePoolAdapter, FakeNotifyAdapter, FakeConfigStore, FakeClock> {
    let clock = FakeClock::new();
    // Monday 14:30, inside a suspended slot
    clock.set_wall(
        NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap(),
    );
    let mut table = ScheduleTable::default();
    table.set_slot(0, 14, TargetState::Suspended);
    let store = FakeConfigStore::seeded(ScheduleConfig::new(table));

    Runtime::new(
        RuntimeDeps {
            pool: pool.clone(),
            notify: FakeNotifyAdapter::new(),
            store,
        },
        clock,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn bridge_forwards_events_in_order() {
    let pool = FakePoolAdapter::new();
    pool.insert(ResourceSnapshot::new("a", "job").with_phase(ResourcePhase::Downloading));
    let runtime = suspended_runtime(&pool).await;
    runtime.enable().await.unwrap();
    pool.clear_calls();

    pool.insert(ResourceSnapshot::new("new", "late").with_phase(ResourcePhase::Downloading));
    let (tx, bridge) = EventBridge::channel(8);
    tx.send(HostEvent::SessionStarted).await.unwrap();
    tx.send(HostEvent::ResourceAdded("new".into())).await.unwrap();
    drop(tx);

    bridge.run(&runtime).await;

    // session-started re-applies the suspended target to the whole pool,
    // then the add path pauses only the new resource
    assert_eq!(
        pool.calls(),
        vec![
            PoolCall::Pause("a".into()),
            PoolCall::Pause("new".into()),
            PoolCall::Pause("new".into()),
        ]
    );
}

#[tokio::test]
async fn bridge_survives_handler_errors() {
    let pool = FakePoolAdapter::new();
    pool.insert(ResourceSnapshot::new("a", "job").with_phase(ResourcePhase::Downloading));
    let runtime = suspended_runtime(&pool).await;
    runtime.enable().await.unwrap();
    pool.clear_calls();

    let (tx, bridge) = EventBridge::channel(8);
    pool.set_list_failing(true);
    tx.send(HostEvent::SessionResumed).await.unwrap();
    drop(tx);
    bridge.run(&runtime).await;

    // the failed sweep is logged and the bridge keeps going; a later event
    // with a healthy pool succeeds
    pool.set_list_failing(false);
    let (tx, bridge) = EventBridge::channel(8);
    tx.send(HostEvent::SessionResumed).await.unwrap();
    drop(tx);
    bridge.run(&runtime).await;

    assert_eq!(pool.calls(), vec![PoolCall::Pause("a".into())]);
}
