// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn snapshot_builder_defaults() {
    let snapshot = ResourceSnapshot::new("abc", "linux.iso");

    assert_eq!(snapshot.id, ResourceId::new("abc"));
    assert_eq!(snapshot.name, "linux.iso");
    assert_eq!(snapshot.phase, ResourcePhase::Queued);
    assert_eq!(snapshot.progress, 0.0);
    assert!(snapshot.auto_managed);
}

#[test]
fn snapshot_builder_overrides() {
    let snapshot = ResourceSnapshot::new("abc", "linux.iso")
        .with_phase(ResourcePhase::Seeding)
        .with_progress(100.0)
        .manual();

    assert_eq!(snapshot.phase, ResourcePhase::Seeding);
    assert!(snapshot.is_complete());
    assert!(!snapshot.auto_managed);
}

#[test]
fn is_complete_boundary() {
    let snapshot = ResourceSnapshot::new("abc", "x").with_progress(99.9);
    assert!(!snapshot.is_complete());

    let snapshot = snapshot.with_progress(100.0);
    assert!(snapshot.is_complete());
}

#[test]
fn phase_display_round_trips() {
    for phase in [
        ResourcePhase::Queued,
        ResourcePhase::Checking,
        ResourcePhase::Downloading,
        ResourcePhase::Seeding,
        ResourcePhase::Paused,
        ResourcePhase::Error,
    ] {
        assert_eq!(phase.to_string().parse::<ResourcePhase>().unwrap(), phase);
    }
    assert!("stalled".parse::<ResourcePhase>().is_err());
}

#[test]
fn resource_id_conversions() {
    let id = ResourceId::new("deadbeef");
    assert_eq!(id.to_string(), "deadbeef");

    let id: ResourceId = "deadbeef".into();
    assert_eq!(id.0, "deadbeef");

    let id: ResourceId = "deadbeef".to_string().into();
    assert_eq!(id.0, "deadbeef");
}
