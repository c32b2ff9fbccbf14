use super::*;

fn notice(approved: bool, reviewed: bool) -> Notice {
    Notice {
        id: "n-1".to_owned(),
        start_time: 1_709_596_800_000,
        end_time: 1_710_892_800_000,
        reason: "On holiday".to_owned(),
        approved,
        reviewed,
    }
}

// =============================================================
// Notice status derivation
// =============================================================

#[test]
fn approved_notice_is_approved() {
    assert_eq!(notice(true, false).status(), NoticeStatus::Approved);
}

#[test]
fn approved_wins_over_reviewed() {
    assert_eq!(notice(true, true).status(), NoticeStatus::Approved);
}

#[test]
fn reviewed_but_not_approved_is_declined() {
    assert_eq!(notice(false, true).status(), NoticeStatus::Declined);
}

#[test]
fn untouched_notice_is_under_review() {
    assert_eq!(notice(false, false).status(), NoticeStatus::UnderReview);
}

#[test]
fn every_flag_combination_yields_exactly_one_status() {
    for approved in [false, true] {
        for reviewed in [false, true] {
            let status = notice(approved, reviewed).status();
            let matches = [
                status == NoticeStatus::Approved,
                status == NoticeStatus::Declined,
                status == NoticeStatus::UnderReview,
            ];
            assert_eq!(matches.iter().filter(|m| **m).count(), 1);
        }
    }
}

#[test]
fn status_labels_are_distinct() {
    assert_eq!(NoticeStatus::Approved.label(), "Approved");
    assert_eq!(NoticeStatus::Declined.label(), "Declined");
    assert_eq!(NoticeStatus::UnderReview.label(), "Under Review");
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn notice_deserializes_from_camel_case() {
    let parsed: Notice = serde_json::from_value(serde_json::json!({
        "id": "n-9",
        "startTime": 1_709_596_800_000_i64,
        "endTime": 1_710_892_800_000_i64,
        "reason": "Exams",
        "approved": false,
        "reviewed": true,
    }))
    .unwrap();
    assert_eq!(parsed.start_time, 1_709_596_800_000);
    assert_eq!(parsed.status(), NoticeStatus::Declined);
}

#[test]
fn notice_flags_default_to_false_when_missing() {
    let parsed: Notice = serde_json::from_value(serde_json::json!({
        "id": "n-9",
        "startTime": 0,
        "endTime": 0,
        "reason": "",
    }))
    .unwrap();
    assert_eq!(parsed.status(), NoticeStatus::UnderReview);
}

#[test]
fn membership_deserializes_from_camel_case() {
    let parsed: WorkspaceMembership = serde_json::from_value(serde_json::json!({
        "groupId": 42,
        "groupName": "Alpha",
        "groupThumbnail": "/thumbs/42.png",
        "yourPermission": ["admin"],
    }))
    .unwrap();
    assert_eq!(parsed.group_id, 42);
    assert_eq!(parsed.your_permission, vec!["admin".to_owned()]);
}

#[test]
fn session_user_tolerates_missing_optionals() {
    let parsed: SessionUser = serde_json::from_value(serde_json::json!({
        "userId": 7,
        "username": "kit",
        "displayname": "Kit",
    }))
    .unwrap();
    assert!(parsed.workspaces.is_empty());
    assert!(!parsed.is_owner);
}
