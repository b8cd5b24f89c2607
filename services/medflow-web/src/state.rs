// services/medflow-web/src/state.rs
//
// MedFlow Site - Reactive State Management
//

use leptos::*;
use medflow_shared::config::MedflowConfig;
use medflow_shared::i18n::{dictionary, Translations};
use medflow_shared::types::{Language, Role};

use crate::dom::scroll_to_section;

/// Page-wide state. All fields are Copy handles, so AppState is Copy.
#[derive(Clone, Copy)]
pub struct AppState {
    pub lang: RwSignal<Language>,
    pub role: RwSignal<Role>,
    pub menu_open: RwSignal<bool>,
    pub config: StoredValue<MedflowConfig>,
}

impl AppState {
    pub fn new(config: MedflowConfig) -> Self {
        Self {
            lang: create_rw_signal(config.default_language),
            role: create_rw_signal(config.default_role),
            menu_open: create_rw_signal(false),
            config: store_value(config),
        }
    }

    /// Active dictionary. Tracked, so text re-renders on language change.
    pub fn t(&self) -> &'static Translations {
        dictionary(self.lang.get())
    }

    /// Active dictionary without subscribing the caller.
    pub fn t_untracked(&self) -> &'static Translations {
        dictionary(self.lang.get_untracked())
    }

    pub fn toggle_language(&self) {
        self.lang.update(|lang| *lang = lang.toggled());
        log::info!("Language switched to {}", self.lang.get_untracked().code());
    }

    /// Switch the demo to `role` and bring it into view.
    pub fn open_demo(&self, role: Role) {
        self.role.set(role);
        self.menu_open.set(false);
        scroll_to_section("demo");
        log::info!("Demo opened as {}", role.slug());
    }

    /// Scroll to a section and close the mobile menu.
    pub fn go_to(&self, section: &str) {
        self.menu_open.set(false);
        scroll_to_section(section);
    }
}

pub fn provide_app_state(config: MedflowConfig) -> AppState {
    let state = AppState::new(config);
    provide_context(state);
    state
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Run a fallible demo action against a signal.
///
/// A declined action leaves the value as it was and is only logged at debug
/// level; the UI shows no error.
pub fn dispatch<T, R>(
    signal: RwSignal<T>,
    action: &str,
    f: impl FnOnce(&mut T) -> medflow_shared::Result<R>,
) -> Option<R>
where
    T: 'static,
{
    match signal.try_update(f)? {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{action} declined: {err}");
            None
        }
    }
}
