// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn effect_names() {
    assert_eq!(Effect::Pause { id: "a".into() }.name(), "pause");
    assert_eq!(Effect::Resume { id: "a".into() }.name(), "resume");
    assert_eq!(Effect::ResumeSession.name(), "resume-session");
    assert_eq!(
        Effect::SetTimer {
            id: "t".to_string(),
            duration: Duration::from_secs(1),
        }
        .name(),
        "set-timer"
    );
    assert_eq!(Effect::CancelTimer { id: "t".to_string() }.name(), "cancel-timer");
    assert_eq!(Effect::Emit(Event::SchedulerEnabled).name(), "emit");
}

#[test]
fn event_names() {
    assert_eq!(
        Event::ScheduleStateChanged {
            state: TargetState::Suspended,
        }
        .name(),
        "schedule:state-changed"
    );
    assert_eq!(Event::SchedulerEnabled.name(), "scheduler:enabled");
    assert_eq!(Event::SchedulerDisabled.name(), "scheduler:disabled");
}

#[test]
fn state_change_event_serializes_state_label() {
    let event = Event::ScheduleStateChanged {
        state: TargetState::Active,
    };

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"active\""));

    let back: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
