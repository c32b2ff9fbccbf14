//! List of inactivity notices with their review status.

use leptos::prelude::*;

use crate::net::types::Notice;
use crate::util::dates;

/// Card listing the user's inactivity notices in the order given.
///
/// Each row shows a status icon, a status label, the formatted date range,
/// and the reason. An empty list renders a fixed placeholder instead.
#[component]
pub fn NoticeList(notices: Vec<Notice>) -> impl IntoView {
    view! {
        <div class="notice-list">
            <h2 class="notice-list__title">"Inactivity Notices"</h2>
            {if notices.is_empty() {
                view! {
                    <p class="notice-list__empty">"No inactivity notices found."</p>
                }
                    .into_any()
            } else {
                view! {
                    <div class="notice-list__rows">
                        {notices
                            .into_iter()
                            .map(|notice| view! { <NoticeRow notice=notice/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

/// Single notice row.
#[component]
fn NoticeRow(notice: Notice) -> impl IntoView {
    let status = notice.status();
    let range = dates::format_range(notice.start_time, notice.end_time);
    let icon_class = format!("notice-list__icon notice-list__icon--{}", status.css_modifier());
    let label_class = format!("notice-list__status notice-list__status--{}", status.css_modifier());

    view! {
        <div class="notice-list__row">
            <span class=icon_class>{status.glyph()}</span>
            <div class="notice-list__body">
                <div class="notice-list__meta">
                    <span class=label_class>{status.label()}</span>
                    <span class="notice-list__dates">{range}</span>
                </div>
                <p class="notice-list__reason">{notice.reason}</p>
            </div>
        </div>
    }
}
