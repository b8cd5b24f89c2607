// services/medflow-web/src/components/admin.rs
//
// MedFlow Site - Admin dashboard (display only)
//

use leptos::*;
use medflow_shared::fixtures::{kpis, mock_doctors, revenue_series, visit_series};
use medflow_shared::types::{Doctor, DoctorStatus, Kpi};

use crate::components::charts::{AreaChart, BarChart};
use crate::components::icons::glyph;
use crate::state::use_app_state;

#[component]
pub fn AdminView() -> impl IntoView {
    let state = use_app_state();
    let admin = move || &state.t().demo.admin;

    view! {
        <div class="space-y-6 p-4 sm:p-6">
            <div class="grid gap-4 sm:grid-cols-3">
                {move || kpis(admin()).into_iter().map(|kpi| view! { <KpiCard kpi=kpi /> }).collect_view()}
            </div>

            <div class="grid gap-4 lg:grid-cols-2">
                <div class="rounded-2xl bg-white p-5 shadow-sm ring-1 ring-slate-100">
                    <div class="mb-4 flex items-center justify-between">
                        <h3 class="font-semibold text-slate-900">{move || admin().chart_revenue}</h3>
                        <span class="text-xs text-slate-400">{move || admin().period}</span>
                    </div>
                    <AreaChart points=revenue_series() />
                </div>
                <div class="rounded-2xl bg-white p-5 shadow-sm ring-1 ring-slate-100">
                    <div class="mb-4 flex items-center justify-between">
                        <h3 class="font-semibold text-slate-900">{move || admin().chart_visits}</h3>
                        <span class="text-xs text-slate-400">{move || admin().period}</span>
                    </div>
                    <BarChart points=visit_series() />
                </div>
            </div>

            <div class="overflow-hidden rounded-2xl bg-white shadow-sm ring-1 ring-slate-100">
                <div class="flex items-center justify-between border-b border-slate-100 px-5 py-4">
                    <h3 class="font-semibold text-slate-900">{move || admin().doctors_title}</h3>
                    <button class="text-sm font-semibold text-blue-600 hover:text-blue-700">
                        {move || admin().view_all}
                    </button>
                </div>
                <div class="overflow-x-auto">
                    <table class="w-full min-w-[640px] text-left text-sm">
                        <thead class="bg-slate-50 text-xs uppercase text-slate-500">
                            <tr>
                                <th class="px-5 py-3">{move || admin().doctor_name}</th>
                                <th class="px-5 py-3">{move || admin().specialty}</th>
                                <th class="px-5 py-3">{move || admin().patients_treated}</th>
                                <th class="px-5 py-3">{move || admin().revenue_gen}</th>
                                <th class="px-5 py-3">{move || admin().rating}</th>
                                <th class="px-5 py-3">{move || admin().status}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-100">
                            {mock_doctors()
                                .into_iter()
                                .map(|doctor| view! { <DoctorRow doctor=doctor /> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
fn KpiCard(kpi: Kpi) -> impl IntoView {
    view! {
        <div class="rounded-2xl bg-white p-5 shadow-sm ring-1 ring-slate-100">
            <div class="flex items-start justify-between">
                <span class=format!(
                    "flex h-11 w-11 items-center justify-center rounded-xl bg-{0}-50 text-xl text-{0}-600",
                    kpi.accent,
                )>{glyph(kpi.icon)}</span>
                {kpi.growth.map(|growth| {
                    view! {
                        <span class="rounded-full bg-green-50 px-2 py-0.5 text-xs font-semibold text-green-600">
                            {growth}
                        </span>
                    }
                })}
            </div>
            <p class="mt-4 text-2xl font-bold text-slate-900">{kpi.value}</p>
            <p class="text-sm text-slate-500">{kpi.label}</p>
        </div>
    }
}

#[component]
fn DoctorRow(doctor: Doctor) -> impl IntoView {
    let status_class = match doctor.status {
        DoctorStatus::Online => "bg-green-50 text-green-700",
        DoctorStatus::Busy => "bg-amber-50 text-amber-700",
        DoctorStatus::Offline => "bg-slate-100 text-slate-500",
    };

    view! {
        <tr class="hover:bg-slate-50">
            <td class="px-5 py-3">
                <div class="flex items-center gap-3">
                    <span class="flex h-9 w-9 items-center justify-center rounded-full bg-blue-100 text-xs font-bold text-blue-700">
                        {doctor.initials.clone()}
                    </span>
                    <span class="font-medium text-slate-900">{doctor.name.clone()}</span>
                </div>
            </td>
            <td class="px-5 py-3 text-slate-600">{doctor.specialty.clone()}</td>
            <td class="px-5 py-3 text-slate-600">{doctor.patients}</td>
            <td class="px-5 py-3 font-medium text-slate-900">{doctor.revenue.clone()}</td>
            <td class="px-5 py-3 text-amber-500">{format!("{} {:.1}", glyph("star"), doctor.rating)}</td>
            <td class="px-5 py-3">
                <span class=format!("rounded-full px-2.5 py-1 text-xs font-semibold {status_class}")>
                    {doctor.status.label()}
                </span>
            </td>
        </tr>
    }
}
