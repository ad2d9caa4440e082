// SPDX-License-Identifier: MIT

use super::TracedPoolAdapter;
use crate::pool::{FakePoolAdapter, PoolAdapter, PoolCall, PoolError};
use offpeak_core::{ResourcePhase, ResourceSnapshot};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[tokio::test]
async fn traced_wrapper_delegates_to_inner() {
    init_tracing();
    let fake = FakePoolAdapter::new();
    fake.insert(ResourceSnapshot::new("a", "job").with_phase(ResourcePhase::Downloading));
    let traced = TracedPoolAdapter::new(fake.clone());

    traced.pause(&"a".into()).await.unwrap();
    traced.resume(&"a".into()).await.unwrap();
    traced.resume_session().await.unwrap();

    assert_eq!(
        fake.calls(),
        vec![
            PoolCall::Pause("a".into()),
            PoolCall::Resume("a".into()),
            PoolCall::ResumeSession,
        ]
    );
    assert_eq!(traced.list().await.unwrap().len(), 1);
    assert!(traced.get(&"a".into()).await.unwrap().is_some());
}

#[tokio::test]
async fn traced_wrapper_passes_errors_through() {
    init_tracing();
    let fake = FakePoolAdapter::new();
    let traced = TracedPoolAdapter::new(fake);

    let err = traced.pause(&"ghost".into()).await.unwrap_err();
    assert!(matches!(err, PoolError::NotFound(_)));
}
