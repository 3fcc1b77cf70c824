use super::*;

// =============================================================
// Push
// =============================================================

#[test]
fn push_appends_in_creation_order() {
    let mut state = NotificationsState::default();
    state.push(NotificationKind::Success, "primeiro");
    state.push(NotificationKind::Error, "segundo");
    let messages: Vec<&str> = state.items.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["primeiro", "segundo"]);
}

#[test]
fn push_allocates_unique_monotonic_ids() {
    let mut state = NotificationsState::default();
    let a = state.push(NotificationKind::Success, "a");
    let b = state.push(NotificationKind::Success, "b");
    let c = state.push(NotificationKind::Error, "c");
    assert!(a < b && b < c);
}

#[test]
fn push_after_removal_does_not_reuse_ids() {
    let mut state = NotificationsState::default();
    let a = state.push(NotificationKind::Success, "a");
    state.remove(a);
    let b = state.push(NotificationKind::Success, "b");
    assert!(b > a);
}

// =============================================================
// Remove
// =============================================================

#[test]
fn remove_deletes_only_the_target() {
    let mut state = NotificationsState::default();
    let a = state.push(NotificationKind::Success, "a");
    let b = state.push(NotificationKind::Error, "b");
    state.remove(a);
    let ids: Vec<NotificationId> = state.items.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![b]);
}

#[test]
fn remove_is_idempotent() {
    let mut state = NotificationsState::default();
    let a = state.push(NotificationKind::Success, "a");
    state.remove(a);
    state.remove(a);
    assert!(state.items.is_empty());
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut state = NotificationsState::default();
    state.push(NotificationKind::Success, "a");
    let before = state.clone();
    state.remove(999);
    assert_eq!(state, before);
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn notification_kind_serializes_lowercase() {
    let notification = Notification {
        id: 1,
        kind: NotificationKind::Error,
        message: "falhou".to_owned(),
    };
    let json = serde_json::to_value(&notification).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": 1, "kind": "error", "message": "falhou" })
    );
}
