// services/medflow-web/src/components/why_us.rs
//
// MedFlow Site - "Why us" section
//

use leptos::*;

use crate::components::reveal::Reveal;
use crate::state::use_app_state;

#[component]
pub fn WhyUs() -> impl IntoView {
    let state = use_app_state();
    let why_us = move || &state.t().why_us;

    view! {
        <section id="why-us" class="bg-slate-900 py-20 text-white lg:py-28">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center">
                    <h2 class="text-3xl font-bold sm:text-4xl">{move || why_us().title}</h2>
                </Reveal>

                <div class="mt-14 grid gap-8 md:grid-cols-3">
                    {move || {
                        why_us()
                            .items
                            .iter()
                            .enumerate()
                            .map(|(idx, item)| {
                                view! {
                                    <div class="rounded-2xl border border-white/10 bg-white/5 p-8">
                                        <span class="text-4xl font-extrabold text-blue-400">
                                            {format!("{:02}", idx + 1)}
                                        </span>
                                        <h3 class="mt-4 text-xl font-semibold">{item.title}</h3>
                                        <p class="mt-2 text-slate-300">{item.desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
