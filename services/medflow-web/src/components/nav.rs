// services/medflow-web/src/components/nav.rs
//
// MedFlow Site - Navigation bar
//

use leptos::*;
use medflow_shared::types::Role;

use crate::components::icons::{glyph, Icon};
use crate::state::use_app_state;

#[component]
pub fn Nav() -> impl IntoView {
    let state = use_app_state();
    let nav = move || &state.t().nav;

    let links = move || {
        view! {
            <button class="nav-link text-sm font-medium text-slate-600 hover:text-blue-600" on:click=move |_| state.go_to("features")>
                {move || nav().features}
            </button>
            <button class="nav-link text-sm font-medium text-slate-600 hover:text-blue-600" on:click=move |_| state.open_demo(Role::Admin)>
                {move || nav().clinic_system}
            </button>
            <button class="nav-link text-sm font-medium text-slate-600 hover:text-blue-600" on:click=move |_| state.open_demo(Role::Patient)>
                {move || nav().online_queue}
            </button>
            <button class="nav-link text-sm font-medium text-slate-600 hover:text-blue-600" on:click=move |_| state.go_to("why-us")>
                {move || nav().why_us}
            </button>
        }
    };

    view! {
        <nav class="sticky top-0 z-50 border-b border-slate-100 bg-white/80 backdrop-blur-md">
            <div class="mx-auto flex h-16 max-w-7xl items-center justify-between px-4 sm:px-6 lg:px-8">
                <a href="#" class="flex items-center gap-2">
                    <span class="flex h-9 w-9 items-center justify-center rounded-xl bg-blue-600 text-lg font-bold text-white">"M"</span>
                    <span class="text-xl font-bold tracking-tight">"MedFlow"</span>
                </a>

                <div class="hidden items-center gap-8 md:flex">
                    {links}
                </div>

                <div class="hidden items-center gap-3 md:flex">
                    <button
                        class="flex items-center gap-1 rounded-lg border border-slate-200 px-3 py-1.5 text-sm font-semibold text-slate-700 hover:bg-slate-50"
                        title=move || nav().language
                        on:click=move |_| state.toggle_language()
                    >
                        <Icon name="globe" />
                        {move || state.lang.get().badge()}
                    </button>
                    <button class="rounded-lg bg-slate-900 px-4 py-2 text-sm font-semibold text-white hover:bg-slate-800">
                        {move || nav().login}
                    </button>
                </div>

                // Mobile menu toggle
                <button
                    class="rounded-lg p-2 text-slate-700 md:hidden"
                    on:click=move |_| state.menu_open.update(|open| *open = !*open)
                >
                    <span class="text-xl leading-none" aria-hidden="true">
                        {move || glyph(menu_icon(state.menu_open.get()))}
                    </span>
                </button>
            </div>

            <Show when=move || state.menu_open.get()>
                <div class="flex flex-col gap-4 border-t border-slate-100 bg-white px-4 py-4 md:hidden">
                    {links}
                    <div class="flex items-center gap-3 pt-2">
                        <button
                            class="rounded-lg border border-slate-200 px-3 py-1.5 text-sm font-semibold"
                            on:click=move |_| state.toggle_language()
                        >
                            {move || state.lang.get().toggled().native_name()}
                        </button>
                        <button class="flex-1 rounded-lg bg-slate-900 px-4 py-2 text-sm font-semibold text-white">
                            {move || nav().login}
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

fn menu_icon(open: bool) -> &'static str {
    if open {
        "close"
    } else {
        "menu"
    }
}
