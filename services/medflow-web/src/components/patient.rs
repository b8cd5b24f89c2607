// services/medflow-web/src/components/patient.rs
//
// MedFlow Site - Patient app
// Dashboard with the live queue card, and the booking wizard.
//

use leptos::*;
use medflow_shared::booking::{upcoming_dates, BookingStep, BookingWizard};
use medflow_shared::fixtures::{initial_appointments, mock_doctors, mock_specialties};
use medflow_shared::i18n::SummaryLabels;
use medflow_shared::queue::QueueCountdown;
use medflow_shared::types::{Appointment, AppointmentStatus, Doctor, Specialty};

use crate::components::icons::{glyph, Icon};
use crate::dom::today;
use crate::mock::start_queue_countdown;
use crate::state::{dispatch, use_app_state};

#[component]
pub fn PatientView() -> impl IntoView {
    let state = use_app_state();
    let (queue_config, booking_config) =
        state.config.with_value(|config| (config.queue.clone(), config.booking.clone()));

    let wizard = create_rw_signal(BookingWizard::new());
    let appointments = create_rw_signal(initial_appointments(&state.t_untracked().demo.patient));
    let queue = create_rw_signal(QueueCountdown::from_config(&queue_config));
    let notify = create_rw_signal(false);

    let dates = store_value(upcoming_dates(today(), booking_config.upcoming_days));
    let slots = store_value(booking_config.time_slots);

    start_queue_countdown(queue, queue_config.interval());

    let on_dashboard = create_memo(move |_| wizard.with(|w| w.step()) == BookingStep::Dashboard);

    view! {
        <div class="mx-auto w-full max-w-md p-4 sm:p-6">
            <Show
                when=move || on_dashboard.get()
                fallback=move || view! {
                    <Wizard wizard=wizard appointments=appointments dates=dates slots=slots />
                }
            >
                <Dashboard wizard=wizard appointments=appointments queue=queue notify=notify />
            </Show>
        </div>
    }
}

#[component]
fn Dashboard(
    wizard: RwSignal<BookingWizard>,
    appointments: RwSignal<Vec<Appointment>>,
    queue: RwSignal<QueueCountdown>,
    notify: RwSignal<bool>,
) -> impl IntoView {
    let state = use_app_state();
    let patient = move || &state.t().demo.patient;

    view! {
        <div class="space-y-5">
            <div>
                <h3 class="text-2xl font-bold text-slate-900">{move || patient().welcome}</h3>
                <p class="mt-1 text-sm text-slate-500">{move || patient().next_visit}</p>
            </div>

            <QueueCard queue=queue notify=notify />

            <button
                class="flex w-full items-center justify-center gap-2 rounded-2xl bg-blue-600 py-4 font-semibold text-white shadow-lg shadow-blue-600/30 hover:bg-blue-700"
                on:click=move |_| {
                    dispatch(wizard, "start booking", BookingWizard::start);
                }
            >
                <Icon name="calendar" />
                {move || patient().book_appointment}
            </button>

            <div class="rounded-2xl bg-white p-5 shadow-sm ring-1 ring-slate-100">
                <h4 class="mb-3 font-semibold text-slate-900">{move || patient().my_appointments}</h4>
                <div class="space-y-3">
                    <For
                        each=move || appointments.get()
                        key=|appointment| appointment.id
                        children=move |appointment| view! { <AppointmentRow appointment=appointment /> }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn QueueCard(queue: RwSignal<QueueCountdown>, notify: RwSignal<bool>) -> impl IntoView {
    let state = use_app_state();
    let patient = move || &state.t().demo.patient;

    let toggle_class = move || {
        if notify.get() {
            "relative h-6 w-11 rounded-full bg-white transition"
        } else {
            "relative h-6 w-11 rounded-full bg-white/30 transition"
        }
    };
    let knob_class = move || {
        if notify.get() {
            "absolute left-6 top-1 h-4 w-4 rounded-full bg-blue-600 transition-all"
        } else {
            "absolute left-1 top-1 h-4 w-4 rounded-full bg-white transition-all"
        }
    };

    view! {
        <div class="rounded-2xl bg-gradient-to-br from-blue-600 to-indigo-600 p-5 text-white shadow-lg">
            <div class="flex items-center justify-between">
                <span class="text-sm font-medium opacity-80">{move || patient().status}</span>
                <span class="flex items-center gap-1 rounded-full bg-white/20 px-2 py-0.5 text-xs">
                    <span class="h-1.5 w-1.5 animate-pulse rounded-full bg-green-300"></span>
                    {move || state.t().demo.common.live_test}
                </span>
            </div>
            <div class="mt-4 flex items-end justify-between">
                <div>
                    <p class="text-xs opacity-80">{move || patient().queue_position}</p>
                    <p class="text-5xl font-extrabold">{move || queue.with(|q| q.position())}</p>
                </div>
                <div class="text-right">
                    <p class="text-xs opacity-80">{move || patient().your_turn_in}</p>
                    <p class="text-xl font-bold">
                        {move || queue.with(|q| q.eta_minutes())}" "{move || patient().minutes}
                    </p>
                </div>
            </div>
            <div class="mt-4 h-2 overflow-hidden rounded-full bg-white/20">
                <div
                    class="h-full rounded-full bg-white transition-all duration-700"
                    style=move || format!("width: {}%", queue.with(|q| q.progress_percent()))
                ></div>
            </div>
            <div class="mt-4 flex items-center justify-between border-t border-white/20 pt-4">
                <span class="flex items-center gap-2 text-sm">
                    <Icon name="bell" />
                    {move || patient().notify_me}
                </span>
                <button
                    class=toggle_class
                    role="switch"
                    aria-checked=move || notify.get().to_string()
                    on:click=move |_| notify.update(|on| *on = !*on)
                >
                    <span class=knob_class></span>
                </button>
            </div>
        </div>
    }
}

#[component]
fn AppointmentRow(appointment: Appointment) -> impl IntoView {
    let state = use_app_state();
    let patient = move || &state.t().demo.patient;
    let status = appointment.status;

    let badge_class = match status {
        AppointmentStatus::Upcoming => "bg-green-50 text-green-700",
        AppointmentStatus::Completed => "bg-slate-100 text-slate-500",
    };
    let badge_label = move || match status {
        AppointmentStatus::Upcoming => patient().confirmed_badge,
        AppointmentStatus::Completed => patient().completed_badge,
    };

    view! {
        <div class="flex items-center gap-3 rounded-xl bg-slate-50 p-3">
            <span class="flex h-10 w-10 items-center justify-center rounded-xl bg-blue-100 text-lg">
                {glyph("stethoscope")}
            </span>
            <div class="min-w-0 flex-1">
                <p class="truncate text-sm font-semibold text-slate-900">{appointment.doctor}</p>
                <p class="text-xs text-slate-500">
                    {appointment.specialty}" • "{appointment.date}", "{appointment.time}
                </p>
            </div>
            <span class=format!("rounded-full px-2 py-0.5 text-[10px] font-semibold {badge_class}")>
                {badge_label}
            </span>
        </div>
    }
}

#[component]
fn Wizard(
    wizard: RwSignal<BookingWizard>,
    appointments: RwSignal<Vec<Appointment>>,
    dates: StoredValue<Vec<String>>,
    slots: StoredValue<Vec<String>>,
) -> impl IntoView {
    let state = use_app_state();
    let step = create_memo(move |_| wizard.with(|w| w.step()));

    let step_title = move || {
        let titles = &state.t().demo.patient.steps;
        match step.get() {
            BookingStep::Dashboard | BookingStep::Specialty => titles.specialty,
            BookingStep::Doctor => titles.doctor,
            BookingStep::Date => titles.date,
            BookingStep::Time => titles.time,
            BookingStep::Confirm => titles.confirm,
        }
    };

    view! {
        <div class="space-y-5">
            <div class="flex items-center gap-3">
                <button
                    class="flex h-9 w-9 items-center justify-center rounded-full bg-white text-slate-600 shadow-sm ring-1 ring-slate-200 hover:bg-slate-50"
                    title=move || state.t().demo.common.back
                    on:click=move |_| {
                        dispatch(wizard, "booking back", BookingWizard::back);
                    }
                >
                    <Icon name="back" />
                </button>
                <h3 class="flex-1 text-lg font-bold text-slate-900">{step_title}</h3>
            </div>

            <div class="flex gap-1.5">
                {BookingStep::WIZARD
                    .into_iter()
                    .map(|marker| {
                        let class = move || {
                            if marker.index() <= step.get().index() {
                                "h-1.5 flex-1 rounded-full bg-blue-600"
                            } else {
                                "h-1.5 flex-1 rounded-full bg-slate-200"
                            }
                        };
                        view! { <span class=class></span> }
                    })
                    .collect_view()}
            </div>

            {move || match step.get() {
                BookingStep::Dashboard => ().into_view(),
                BookingStep::Specialty => view! { <SpecialtyStep wizard=wizard /> }.into_view(),
                BookingStep::Doctor => view! { <DoctorStep wizard=wizard /> }.into_view(),
                BookingStep::Date => view! {
                    <ChoiceGrid
                        options=dates.get_value()
                        on_pick=Callback::new(move |date: String| {
                            dispatch(wizard, "choose date", |w| w.choose_date(date));
                        })
                    />
                }
                .into_view(),
                BookingStep::Time => view! {
                    <ChoiceGrid
                        options=slots.get_value()
                        on_pick=Callback::new(move |time: String| {
                            dispatch(wizard, "choose time", |w| w.choose_time(time));
                        })
                    />
                }
                .into_view(),
                BookingStep::Confirm => view! { <ConfirmStep wizard=wizard appointments=appointments /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn SpecialtyStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="grid grid-cols-2 gap-3">
            {mock_specialties()
                .into_iter()
                .map(|specialty| {
                    let picked = specialty.clone();
                    view! {
                        <button
                            class="flex flex-col items-center gap-2 rounded-2xl bg-white p-4 text-center shadow-sm ring-1 ring-slate-100 hover:ring-blue-300"
                            on:click=move |_| {
                                let picked: Specialty = picked.clone();
                                dispatch(wizard, "choose specialty", |w| w.choose_specialty(picked));
                            }
                        >
                            <span class="text-3xl">{glyph(&specialty.icon)}</span>
                            <span class="text-sm font-semibold text-slate-900">{specialty.name.clone()}</span>
                            <span class="text-xs text-slate-400">
                                {specialty.count}" "{move || state.t().demo.patient.doctors_count}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DoctorStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let state = use_app_state();
    let doctors: Vec<Doctor> = wizard.with_untracked(|w| {
        w.available_doctors(&mock_doctors()).into_iter().cloned().collect()
    });

    if doctors.is_empty() {
        return view! {
            <div class="rounded-2xl border border-dashed border-slate-300 bg-white p-8 text-center text-sm text-slate-500">
                {move || state.t().demo.patient.no_doctors}
            </div>
        }
        .into_view();
    }

    doctors
        .into_iter()
        .map(|doctor| {
            let picked = doctor.clone();
            view! {
                <button
                    class="mb-3 flex w-full items-center gap-4 rounded-2xl bg-white p-4 text-left shadow-sm ring-1 ring-slate-100 hover:ring-blue-300"
                    on:click=move |_| {
                        let picked = picked.clone();
                        dispatch(wizard, "choose doctor", |w| w.choose_doctor(picked));
                    }
                >
                    <span class="flex h-12 w-12 items-center justify-center rounded-full bg-blue-100 font-bold text-blue-700">
                        {doctor.initials.clone()}
                    </span>
                    <span class="flex-1">
                        <span class="block font-semibold text-slate-900">{doctor.name.clone()}</span>
                        <span class="block text-xs text-slate-500">{doctor.specialty.clone()}</span>
                    </span>
                    <span class="text-xs font-semibold text-amber-500">
                        {format!("{} {:.1}", glyph("star"), doctor.rating)}
                    </span>
                </button>
            }
        })
        .collect_view()
}

/// Grid of plain string options (dates or time slots).
#[component]
fn ChoiceGrid(options: Vec<String>, on_pick: Callback<String>) -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="grid grid-cols-3 gap-3">
            {options
                .into_iter()
                .map(|option| {
                    let picked = option.clone();
                    view! {
                        <button
                            class="rounded-xl bg-white px-3 py-3 text-center shadow-sm ring-1 ring-slate-100 hover:bg-blue-50 hover:ring-blue-300"
                            on:click=move |_| on_pick.call(picked.clone())
                        >
                            <span class="block text-sm font-semibold text-slate-900">{option}</span>
                            <span class="block text-[10px] text-green-600">{move || state.t().demo.patient.available}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ConfirmStep(wizard: RwSignal<BookingWizard>, appointments: RwSignal<Vec<Appointment>>) -> impl IntoView {
    let state = use_app_state();
    let patient = move || &state.t().demo.patient;
    let data = wizard.with_untracked(|w| w.data().clone());

    let confirm = move |_| {
        let id = appointments.with(|list| list.iter().map(|a| a.id).max().unwrap_or(0) + 1);
        if let Some(appointment) = dispatch(wizard, "confirm booking", |w| w.confirm(id)) {
            log::info!(
                "Booking confirmed: {} on {} at {}",
                appointment.doctor,
                appointment.date,
                appointment.time
            );
            appointments.update(|list| list.push(appointment));
        }
    };

    let rows: [(fn(&SummaryLabels) -> &'static str, Option<String>); 4] = [
        (|labels| labels.doctor, data.doctor.as_ref().map(|d| d.name.clone())),
        (|labels| labels.specialty, data.specialty.as_ref().map(|s| s.name.clone())),
        (|labels| labels.date, data.date.clone()),
        (|labels| labels.time, data.time.clone()),
    ];

    view! {
        <div class="space-y-5 rounded-2xl bg-white p-5 shadow-sm ring-1 ring-slate-100">
            <div class="text-center">
                <span class="mx-auto flex h-14 w-14 items-center justify-center rounded-full bg-green-100 text-2xl text-green-600">
                    {glyph("check")}
                </span>
                <h4 class="mt-3 text-lg font-bold text-slate-900">{move || patient().confirm_question}</h4>
                <p class="text-sm text-slate-500">{move || patient().confirm_hint}</p>
            </div>
            <dl class="divide-y divide-slate-100 rounded-xl bg-slate-50 px-4">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="flex justify-between py-3 text-sm">
                            <dt class="text-slate-500">{move || label(&patient().summary)}</dt>
                            <dd class="font-semibold text-slate-900">{value.unwrap_or_default()}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            <button
                class="w-full rounded-xl bg-blue-600 py-3 font-semibold text-white hover:bg-blue-700"
                on:click=confirm
            >
                {move || state.t().demo.common.confirm}
            </button>
        </div>
    }
}
