// services/medflow-web/src/components/demo.rs
//
// MedFlow Site - Role-switch demo shell
// One role view at a time inside a mock browser window.
//

use leptos::*;
use medflow_shared::types::Role;

use crate::components::admin::AdminView;
use crate::components::doctor::DoctorView;
use crate::components::patient::PatientView;
use crate::components::reveal::Reveal;
use crate::state::use_app_state;

#[component]
pub fn DemoShell() -> impl IntoView {
    let state = use_app_state();
    let demo = move || &state.t().demo;

    let title = move || {
        if state.role.get().is_clinic() {
            demo().title_clinic
        } else {
            demo().title_patient
        }
    };
    let subtitle = move || {
        if state.role.get().is_clinic() {
            demo().subtitle_clinic
        } else {
            demo().subtitle_patient
        }
    };

    view! {
        <section id="demo" class="bg-slate-50 py-20 lg:py-28">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <Reveal class="mx-auto max-w-3xl text-center">
                    <span class="inline-flex items-center gap-2 rounded-full bg-green-100 px-3 py-1 text-xs font-semibold text-green-700">
                        <span class="h-2 w-2 animate-pulse rounded-full bg-green-500"></span>
                        {move || demo().common.live_test}
                    </span>
                    <h2 class="mt-4 text-3xl font-bold text-slate-900 sm:text-4xl">{title}</h2>
                    <p class="mt-4 text-lg text-slate-600">{subtitle}</p>
                </Reveal>

                <div class="mt-10 flex flex-wrap justify-center gap-2">
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! { <RoleButton role=role /> })
                        .collect_view()}
                </div>

                <div class="mt-8 overflow-hidden rounded-2xl border border-slate-200 bg-white shadow-2xl">
                    <Toolbar />
                    <div class="min-h-[600px] bg-slate-50">
                        {move || match state.role.get() {
                            Role::Admin => view! { <AdminView /> }.into_view(),
                            Role::Doctor => view! { <DoctorView /> }.into_view(),
                            Role::Patient => view! { <PatientView /> }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn RoleButton(role: Role) -> impl IntoView {
    let state = use_app_state();
    let roles = move || &state.t().demo.roles;

    let label = move || match role {
        Role::Admin => roles().admin,
        Role::Doctor => roles().doctor,
        Role::Patient => roles().patient,
    };
    let class = move || {
        if state.role.get() == role {
            "rounded-xl bg-blue-600 px-5 py-2.5 text-sm font-semibold text-white shadow-md"
        } else {
            "rounded-xl bg-white px-5 py-2.5 text-sm font-semibold text-slate-600 ring-1 ring-slate-200 hover:bg-slate-100"
        }
    };

    view! {
        <button
            class=class
            on:click=move |_| {
                state.role.set(role);
                log::info!("Demo role switched to {}", role.slug());
            }
        >
            {label}
        </button>
    }
}

/// Fake browser chrome with the per-role address.
#[component]
fn Toolbar() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="flex items-center gap-4 border-b border-slate-200 bg-slate-100 px-4 py-3">
            <div class="flex gap-1.5">
                <span class="h-3 w-3 rounded-full bg-red-400"></span>
                <span class="h-3 w-3 rounded-full bg-yellow-400"></span>
                <span class="h-3 w-3 rounded-full bg-green-400"></span>
            </div>
            <div class="flex-1 truncate rounded-md bg-white px-3 py-1 text-center font-mono text-xs text-slate-500">
                {move || format!("app.medflow.uz/{}", state.role.get().slug())}
            </div>
        </div>
    }
}
