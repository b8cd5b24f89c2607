// services/medflow-web/src/components/hero.rs
//
// MedFlow Site - Hero section
//

use leptos::*;
use medflow_shared::types::Role;

use crate::components::reveal::Reveal;
use crate::state::use_app_state;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_app_state();
    let hero = move || &state.t().hero;

    // The title carries a kicker line and a headline separated by a newline.
    let kicker = move || hero().title.split_once('\n').map_or("", |(kicker, _)| kicker);
    let headline = move || hero().title.split_once('\n').map_or(hero().title, |(_, headline)| headline);

    view! {
        <section class="relative overflow-hidden bg-gradient-to-b from-blue-50 to-white pb-20 pt-16 lg:pb-28 lg:pt-24">
            <div class="mx-auto max-w-7xl px-4 text-center sm:px-6 lg:px-8">
                <Reveal>
                    <span class="inline-block rounded-full bg-blue-100 px-4 py-1 text-sm font-semibold text-blue-700">
                        {kicker}
                    </span>
                    <h1 class="mx-auto mt-6 max-w-4xl text-4xl font-extrabold leading-tight tracking-tight text-slate-900 sm:text-5xl lg:text-6xl">
                        {headline}
                    </h1>
                    <p class="mx-auto mt-6 max-w-2xl text-lg text-slate-600">
                        {move || hero().subtitle}
                    </p>
                </Reveal>

                <Reveal class="delay-200">
                    <div class="mt-10 flex flex-col items-center justify-center gap-4 sm:flex-row">
                        <button
                            class="w-full rounded-xl bg-blue-600 px-8 py-4 text-base font-semibold text-white shadow-lg shadow-blue-600/30 hover:bg-blue-700 sm:w-auto"
                            on:click=move |_| state.open_demo(Role::Admin)
                        >
                            {move || hero().cta_primary}
                        </button>
                        <button
                            class="w-full rounded-xl border border-slate-200 bg-white px-8 py-4 text-base font-semibold text-slate-700 hover:bg-slate-50 sm:w-auto"
                            on:click=move |_| state.open_demo(Role::Patient)
                        >
                            {move || hero().cta_secondary}
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
