// services/medflow-web/src/components/footer.rs
//
// MedFlow Site - Footer
//

use leptos::*;

use crate::components::icons::Icon;
use crate::state::use_app_state;

#[component]
pub fn Footer() -> impl IntoView {
    let state = use_app_state();
    let footer = move || &state.t().footer;

    view! {
        <footer class="border-t border-slate-100 bg-white py-12">
            <div class="mx-auto flex max-w-7xl flex-col gap-8 px-4 sm:px-6 md:flex-row md:items-center md:justify-between lg:px-8">
                <div>
                    <div class="flex items-center gap-2">
                        <span class="flex h-8 w-8 items-center justify-center rounded-lg bg-blue-600 font-bold text-white">"M"</span>
                        <span class="text-lg font-bold">"MedFlow"</span>
                    </div>
                    <p class="mt-3 max-w-sm text-sm text-slate-500">{move || footer().description}</p>
                </div>

                <div class="flex flex-wrap items-center gap-6 text-sm text-slate-500">
                    <a href="#" class="hover:text-slate-900">{move || footer().privacy}</a>
                    <a href="#" class="hover:text-slate-900">{move || footer().terms}</a>
                    <a href="mailto:info@medflow.uz" class="flex items-center gap-1 hover:text-slate-900">
                        <Icon name="mail" />
                        "info@medflow.uz"
                    </a>
                </div>
            </div>
            <p class="mt-10 text-center text-xs text-slate-400">{move || footer().rights}</p>
        </footer>
    }
}
