use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(Notice::success("Login successful!"));
    let second = state.push(Notice::error("Failed to fetch projects."));

    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].notice.message, "Failed to fetch projects.");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let first = state.push(Notice::success("Task created successfully!"));
    let second = state.push(Notice::success("Task deleted successfully!"));

    assert!(state.dismiss(first));
    assert!(!state.dismiss(first));
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push(Notice::success("a"));
    state.dismiss(first);
    assert_ne!(state.push(Notice::success("b")), first);
}
