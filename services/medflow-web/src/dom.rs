// services/medflow-web/src/dom.rs
//
// MedFlow Site - Browser helpers
//

use chrono::NaiveDate;
use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Below this width the doctor view shows list and detail one at a time.
const COMPACT_WIDTH: f64 = 1024.0;

/// Smooth-scroll to the element with the given id.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        log::debug!("No section #{id} to scroll to");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn is_compact() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .is_some_and(|width| width < COMPACT_WIDTH)
}

/// Today's local date from the browser clock.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Date stamp used on saved history entries and attachments.
pub fn visit_date() -> String {
    today().format("%d.%m.%Y").to_string()
}
