// services/medflow-web/src/app.rs
//
// MedFlow Site - Main Application Component
//

use leptos::*;
use medflow_shared::config::MedflowConfig;

use crate::components::{DemoShell, Features, Footer, Hero, Nav, TelegramPromo, WhyUs};
use crate::state::provide_app_state;

#[component]
pub fn App(config: MedflowConfig) -> impl IntoView {
    let state = provide_app_state(config);

    view! {
        <div class="min-h-screen bg-white font-sans text-slate-900" lang=move || state.lang.get().code()>
            <Nav />

            <main>
                <Hero />
                <Features />
                <DemoShell />
                <TelegramPromo />
                <WhyUs />
            </main>

            <Footer />
        </div>
    }
}
