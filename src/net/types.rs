#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A workspace the user is a member of, as returned by the session endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMembership {
    pub group_id: i64,
    pub group_name: String,
    #[serde(default)]
    pub group_thumbnail: String,
    #[serde(default)]
    pub your_permission: Vec<String>,
}

/// The authenticated user as returned by the session endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
    pub displayname: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceMembership>,
    #[serde(default)]
    pub can_make_workspace: bool,
    #[serde(default)]
    pub is_owner: bool,
}

/// An inactivity notice with its review lifecycle flags. Times are unix
/// milliseconds.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub reason: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub reviewed: bool,
}

/// Review status derived from a notice's flags. `approved` wins over
/// `reviewed`; a notice that is neither is still under review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeStatus {
    Approved,
    Declined,
    UnderReview,
}

impl Notice {
    /// Derive the single status for this notice.
    pub fn status(&self) -> NoticeStatus {
        if self.approved {
            NoticeStatus::Approved
        } else if self.reviewed {
            NoticeStatus::Declined
        } else {
            NoticeStatus::UnderReview
        }
    }
}

impl NoticeStatus {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Declined => "Declined",
            Self::UnderReview => "Under Review",
        }
    }

    /// Icon glyph shown next to the label.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Approved => "\u{2713}",
            Self::Declined => "\u{2715}",
            Self::UnderReview => "\u{23F3}",
        }
    }

    /// CSS class modifier for status-dependent styling.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Declined => "declined",
            Self::UnderReview => "pending",
        }
    }
}
