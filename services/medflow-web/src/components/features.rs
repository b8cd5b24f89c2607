// services/medflow-web/src/components/features.rs
//
// MedFlow Site - Feature grid
//

use leptos::*;

use crate::components::icons::glyph;
use crate::components::reveal::Reveal;
use crate::state::use_app_state;

#[component]
pub fn Features() -> impl IntoView {
    let state = use_app_state();
    let features = move || &state.t().features;

    view! {
        <section id="features" class="bg-white py-20 lg:py-28">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <Reveal class="mx-auto max-w-3xl text-center">
                    <p class="text-sm font-semibold uppercase tracking-wider text-blue-600">
                        {move || features().eyebrow}
                    </p>
                    <h2 class="mt-3 text-3xl font-bold text-slate-900 sm:text-4xl">
                        {move || features().title}
                    </h2>
                    <p class="mt-4 text-lg text-slate-600">{move || features().subtitle}</p>
                </Reveal>

                <div class="mt-16 grid gap-8 sm:grid-cols-2 lg:grid-cols-4">
                    {(0..4)
                        .map(|idx| {
                            let card = move || features().list.get(idx);
                            view! {
                                <Reveal class="h-full">
                                    <div class="h-full rounded-2xl border border-slate-100 bg-slate-50 p-6 transition hover:-translate-y-1 hover:shadow-lg">
                                        <div class="flex h-12 w-12 items-center justify-center rounded-xl bg-blue-100 text-2xl">
                                            {move || card().map(|f| glyph(f.icon))}
                                        </div>
                                        <h3 class="mt-5 text-lg font-semibold text-slate-900">
                                            {move || card().map(|f| f.title)}
                                        </h3>
                                        <p class="mt-2 text-sm leading-relaxed text-slate-600">
                                            {move || card().map(|f| f.desc)}
                                        </p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
