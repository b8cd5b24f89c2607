// services/medflow-web/src/components/icons.rs
//
// MedFlow Site - Icon glyphs
//

use leptos::*;

/// Glyph for an icon key used by fixtures and the dictionary.
pub fn glyph(key: &str) -> &'static str {
    match key {
        "user" => "👤",
        "users" => "👥",
        "bar-chart" => "📊",
        "bell" => "🔔",
        "calendar" => "📅",
        "clock" => "🕒",
        "dollar" => "💵",
        "trending-up" => "📈",
        "stethoscope" => "🩺",
        "heart-pulse" => "❤️",
        "brain" => "🧠",
        "baby" => "👶",
        "smile" => "🦷",
        "scan-face" => "🧴",
        "pill" => "💊",
        "file" => "📄",
        "flask" => "🧪",
        "clipboard" => "📋",
        "send" => "✈️",
        "check" => "✓",
        "back" => "←",
        "close" => "✕",
        "menu" => "☰",
        "globe" => "🌐",
        "mail" => "✉️",
        "star" => "★",
        "warning" => "⚠️",
        _ => "•",
    }
}

#[component]
pub fn Icon(
    name: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("inline-flex items-center justify-center leading-none {class}") aria-hidden="true">
            {glyph(name)}
        </span>
    }
}
