// services/medflow-web/src/components/doctor.rs
//
// MedFlow Site - Doctor workspace
// Patient queue, patient card with the examination panel, and history.
//

use leptos::*;
use medflow_shared::examination::{DiscardedDraft, ExamWorkflow, Pane, QuickEntry};
use medflow_shared::fixtures::{initial_history, mock_patients};
use medflow_shared::types::{AttachmentKind, HistoryKind, MedicalHistoryItem, Patient, PatientStatus};

use crate::components::icons::{glyph, Icon};
use crate::dom::{is_compact, visit_date};
use crate::state::{dispatch, use_app_state};

#[component]
pub fn DoctorView() -> impl IntoView {
    let state = use_app_state();
    let workflow = create_rw_signal(ExamWorkflow::new(
        mock_patients(),
        initial_history(&state.t_untracked().demo.doctor),
    ));
    let discarded = create_rw_signal(None::<DiscardedDraft>);

    let pane = create_memo(move |_| workflow.with(|w| w.pane()));
    let list_class = move || match pane.get() {
        Pane::List => "flex w-full flex-col border-r border-slate-200 bg-white lg:w-80",
        Pane::Detail => "hidden w-full flex-col border-r border-slate-200 bg-white lg:flex lg:w-80",
    };
    let detail_class = move || match pane.get() {
        Pane::List => "hidden flex-1 flex-col lg:flex",
        Pane::Detail => "flex flex-1 flex-col",
    };

    view! {
        <div class="relative flex min-h-[600px]">
            <aside class=list_class>
                <PatientList workflow=workflow discarded=discarded />
            </aside>
            <section class=detail_class>
                <DraftWarning discarded=discarded />
                <PatientDetail workflow=workflow />
            </section>
            <QuickEntryModal workflow=workflow />
        </div>
    }
}

#[component]
fn PatientList(
    workflow: RwSignal<ExamWorkflow>,
    discarded: RwSignal<Option<DiscardedDraft>>,
) -> impl IntoView {
    let state = use_app_state();
    let doctor = move || &state.t().demo.doctor;

    let in_progress = move || workflow.with(|w| w.patients_with(PatientStatus::InProgress));
    let waiting = move || workflow.with(|w| w.patients_with(PatientStatus::Waiting));

    view! {
        <div class="border-b border-slate-100 p-4">
            <h3 class="font-semibold text-slate-900">{move || doctor().patient_list}</h3>
            <input
                class="mt-3 w-full rounded-lg border border-slate-200 bg-slate-50 px-3 py-2 text-sm"
                placeholder=move || state.t().demo.common.search_placeholder
                readonly=true
            />
        </div>
        <div class="flex-1 space-y-5 overflow-y-auto p-4">
            <div>
                <p class="mb-2 text-xs font-semibold uppercase tracking-wider text-slate-400">
                    {move || doctor().in_progress_title}
                </p>
                <Show
                    when=move || !in_progress().is_empty()
                    fallback=move || view! {
                        <p class="rounded-lg border border-dashed border-slate-200 p-3 text-center text-xs text-slate-400">
                            {move || doctor().no_current_patients}
                        </p>
                    }
                >
                    <For
                        each=in_progress
                        key=|patient| patient.id.clone()
                        children=move |patient| view! { <PatientRow patient=patient workflow=workflow discarded=discarded /> }
                    />
                </Show>
            </div>
            <div>
                <p class="mb-2 text-xs font-semibold uppercase tracking-wider text-slate-400">
                    {move || doctor().queue_title}
                </p>
                <For
                    each=waiting
                    key=|patient| patient.id.clone()
                    children=move |patient| view! { <PatientRow patient=patient workflow=workflow discarded=discarded /> }
                />
            </div>
        </div>
    }
}

#[component]
fn PatientRow(
    patient: Patient,
    workflow: RwSignal<ExamWorkflow>,
    discarded: RwSignal<Option<DiscardedDraft>>,
) -> impl IntoView {
    let state = use_app_state();
    let id = store_value(patient.id.clone());
    let is_selected = move || workflow.with(|w| w.is_selected(&id.get_value()));
    let class = move || {
        if is_selected() {
            "flex w-full items-center gap-3 rounded-xl bg-blue-50 p-3 text-left ring-1 ring-blue-200"
        } else {
            "flex w-full items-center gap-3 rounded-xl p-3 text-left hover:bg-slate-50"
        }
    };

    let select = move |_| {
        let compact = is_compact();
        let picked = dispatch(workflow, "select patient", |w| {
            w.select_patient(&id.get_value(), compact)
        });
        if let Some(Some(draft)) = picked {
            log::warn!(
                "Unsaved examination of patient {} discarded ({} medicines, {} attachments)",
                draft.patient_id,
                draft.draft.medicines.len(),
                draft.draft.attachments.len()
            );
            discarded.set(Some(draft));
        }
    };

    view! {
        <button class=class on:click=select>
            <span class="flex h-10 w-10 shrink-0 items-center justify-center rounded-full bg-blue-100 font-semibold text-blue-700">
                {patient.initial()}
            </span>
            <span class="min-w-0 flex-1">
                <span class="block truncate text-sm font-medium text-slate-900">{patient.name.clone()}</span>
                <span class="block text-xs text-slate-500">
                    {patient.age}" "{move || state.t().demo.common.years_old}" • "{patient.last_visit.clone()}
                </span>
            </span>
            <StatusBadge status=patient.status />
        </button>
    }
}

#[component]
fn StatusBadge(status: PatientStatus) -> impl IntoView {
    let state = use_app_state();
    let doctor = move || &state.t().demo.doctor;

    let class = match status {
        PatientStatus::Waiting => "bg-amber-50 text-amber-700",
        PatientStatus::InProgress => "bg-green-50 text-green-700",
        PatientStatus::Completed => "bg-slate-100 text-slate-500",
    };
    let label = move || match status {
        PatientStatus::Waiting => doctor().waiting_badge,
        PatientStatus::InProgress => doctor().on_air,
        PatientStatus::Completed => doctor().completed_badge,
    };

    view! {
        <span class=format!("shrink-0 rounded-full px-2 py-0.5 text-[10px] font-semibold {class}")>
            {label}
        </span>
    }
}

#[component]
fn DraftWarning(discarded: RwSignal<Option<DiscardedDraft>>) -> impl IntoView {
    let state = use_app_state();

    view! {
        <Show when=move || discarded.with(Option::is_some)>
            <div class="flex items-center justify-between gap-3 border-b border-amber-200 bg-amber-50 px-4 py-2 text-sm text-amber-800">
                <span class="flex items-center gap-2">
                    <Icon name="warning" />
                    {move || state.t().demo.doctor.draft_discarded}
                </span>
                <button class="text-xs font-semibold hover:underline" on:click=move |_| discarded.set(None)>
                    {move || state.t().demo.common.dismiss}
                </button>
            </div>
        </Show>
    }
}

#[component]
fn PatientDetail(workflow: RwSignal<ExamWorkflow>) -> impl IntoView {
    let state = use_app_state();
    let selected = create_memo(move |_| workflow.with(|w| w.selected().cloned()));

    move || match selected.get() {
        None => view! {
            <div class="flex flex-1 items-center justify-center p-8 text-sm text-slate-400">
                {move || state.t().demo.doctor.no_current_patients}
            </div>
        }
        .into_view(),
        Some(patient) => view! { <PatientCard patient=patient workflow=workflow /> }.into_view(),
    }
}

#[component]
fn PatientCard(patient: Patient, workflow: RwSignal<ExamWorkflow>) -> impl IntoView {
    let state = use_app_state();
    let doctor = move || &state.t().demo.doctor;
    let common = move || &state.t().demo.common;
    let status = patient.status;

    let start = move |_| {
        if dispatch(workflow, "start visit", ExamWorkflow::start_visit).is_some() {
            log::info!("Visit started");
        }
    };
    let finish = move |_| {
        if dispatch(workflow, "finish visit", ExamWorkflow::finish_visit).is_some() {
            log::info!("Visit finished");
        }
    };

    let action = match status {
        PatientStatus::Waiting => view! {
            <button class="rounded-xl bg-blue-600 px-5 py-2.5 text-sm font-semibold text-white hover:bg-blue-700" on:click=start>
                {move || doctor().start_visit}
            </button>
        }
        .into_view(),
        PatientStatus::InProgress => view! {
            <button class="rounded-xl bg-green-600 px-5 py-2.5 text-sm font-semibold text-white hover:bg-green-700" on:click=finish>
                {move || doctor().finish_visit}
            </button>
        }
        .into_view(),
        PatientStatus::Completed => view! { <StatusBadge status=status /> }.into_view(),
    };

    view! {
        <div class="flex-1 space-y-5 overflow-y-auto p-4 sm:p-6">
            <button
                class="flex items-center gap-1 text-sm font-medium text-slate-500 hover:text-slate-900 lg:hidden"
                on:click=move |_| workflow.update(ExamWorkflow::back_to_list)
            >
                <Icon name="back" />
                {move || common().back}
            </button>

            <div class="flex flex-col gap-4 rounded-2xl bg-white p-5 shadow-sm ring-1 ring-slate-100 sm:flex-row sm:items-center sm:justify-between">
                <div class="flex items-center gap-4">
                    <span class="flex h-14 w-14 items-center justify-center rounded-2xl bg-blue-600 text-xl font-bold text-white">
                        {patient.initial()}
                    </span>
                    <div>
                        <p class="text-xs uppercase tracking-wider text-slate-400">{move || doctor().current_patient}</p>
                        <h3 class="text-lg font-bold text-slate-900">{patient.name.clone()}</h3>
                        <p class="text-sm text-slate-500">
                            {patient.age}" "{move || common().years_old}" • "{patient.card_number()}
                        </p>
                    </div>
                </div>
                {action}
            </div>

            <Show when=move || status == PatientStatus::InProgress>
                <ExaminationPanel workflow=workflow />
            </Show>

            <HistoryTimeline workflow=workflow />
        </div>
    }
}

#[component]
fn ExaminationPanel(workflow: RwSignal<ExamWorkflow>) -> impl IntoView {
    let state = use_app_state();
    let doctor = move || &state.t().demo.doctor;

    let add_medicine = move || {
        dispatch(workflow, "add medicine", ExamWorkflow::add_medicine);
    };
    let save = move |_| {
        let copy = &state.t_untracked().demo.doctor;
        let date = visit_date();
        if dispatch(workflow, "save examination", |w| {
            w.save_examination(copy.exam_title, copy.exam_description, &date)
        })
        .is_some()
        {
            log::info!("Examination saved");
        }
    };
    let attach = move |kind: AttachmentKind| {
        let name = state.t_untracked().demo.doctor.file_names.get(kind);
        workflow.update(|w| w.attach(kind, name, visit_date()));
    };

    let medicines = move || workflow.with(|w| w.draft().medicines.clone());
    let attachments = move || workflow.with(|w| w.draft().attachments.clone());
    let draft_empty = move || workflow.with(|w| w.draft().is_empty());

    view! {
        <div class="space-y-4 rounded-2xl bg-white p-5 shadow-sm ring-1 ring-green-200">
            <div class="flex items-center justify-between">
                <h4 class="font-semibold text-slate-900">{move || doctor().actions}</h4>
                <div class="flex gap-2">
                    <button
                        class="rounded-lg bg-indigo-50 px-3 py-1.5 text-xs font-semibold text-indigo-700 hover:bg-indigo-100"
                        on:click=move |_| workflow.update(|w| w.open_quick_entry(QuickEntry::Diagnosis))
                    >
                        {glyph("clipboard")}" "{move || doctor().add_diagnosis}
                    </button>
                    <button
                        class="rounded-lg bg-purple-50 px-3 py-1.5 text-xs font-semibold text-purple-700 hover:bg-purple-100"
                        on:click=move |_| workflow.update(|w| w.open_quick_entry(QuickEntry::Prescription))
                    >
                        {glyph("pill")}" "{move || doctor().write_prescription}
                    </button>
                </div>
            </div>

            <div>
                <label class="text-xs font-semibold text-slate-500">{move || doctor().add_medicine}</label>
                <input
                    class="mt-1 w-full rounded-lg border border-slate-200 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none"
                    placeholder=move || doctor().medicine_placeholder
                    prop:value=move || workflow.with(|w| w.medicine_input().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        workflow.update(|w| w.set_medicine_input(text));
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add_medicine();
                        }
                    }
                />
                <div class="mt-2 flex flex-wrap gap-2">
                    <For
                        each={move || medicines().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(idx, medicine)| format!("{idx}-{medicine}")
                        children=move |(_, medicine)| view! {
                            <span class="rounded-full bg-blue-50 px-3 py-1 text-xs font-medium text-blue-700">
                                {glyph("pill")}" "{medicine}
                            </span>
                        }
                    />
                </div>
            </div>

            <div>
                <label class="text-xs font-semibold text-slate-500">{move || doctor().attach_file}</label>
                <div class="mt-1 flex flex-wrap gap-2">
                    {AttachmentKind::ALL
                        .into_iter()
                        .map(|kind| view! {
                            <button
                                class="rounded-lg border border-dashed border-slate-300 px-3 py-1.5 text-xs font-medium text-slate-600 hover:border-blue-400 hover:text-blue-600"
                                on:click=move |_| attach(kind)
                            >
                                "+ "{move || doctor().file_types.get(kind)}
                            </button>
                        })
                        .collect_view()}
                </div>
                <div class="mt-2 flex flex-wrap gap-2">
                    <For
                        each={move || attachments().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(idx, attachment)| format!("{idx}-{}", attachment.name)
                        children=move |(_, attachment)| view! {
                            <span class="rounded-lg bg-slate-100 px-3 py-1 text-xs text-slate-700">
                                {glyph("file")}" "{attachment.name}
                            </span>
                        }
                    />
                </div>
            </div>

            <div class="flex justify-end">
                <button
                    class="rounded-xl bg-slate-900 px-5 py-2 text-sm font-semibold text-white hover:bg-slate-800 disabled:cursor-not-allowed disabled:opacity-40"
                    disabled=draft_empty
                    on:click=save
                >
                    {move || doctor().save_exam}
                </button>
            </div>
        </div>
    }
}

#[component]
fn HistoryTimeline(workflow: RwSignal<ExamWorkflow>) -> impl IntoView {
    let state = use_app_state();
    let history = move || workflow.with(|w| w.history().to_vec());

    view! {
        <div class="rounded-2xl bg-white p-5 shadow-sm ring-1 ring-slate-100">
            <h4 class="mb-4 font-semibold text-slate-900">{move || state.t().demo.doctor.history}</h4>
            <div class="space-y-4">
                <For
                    each=history
                    key=|item| item.id
                    children=move |item| view! { <HistoryEntry item=item /> }
                />
            </div>
        </div>
    }
}

#[component]
fn HistoryEntry(item: MedicalHistoryItem) -> impl IntoView {
    let (icon, accent) = match item.kind {
        HistoryKind::Diagnosis => ("clipboard", "bg-indigo-100 text-indigo-700"),
        HistoryKind::Prescription => ("pill", "bg-purple-100 text-purple-700"),
        HistoryKind::Lab => ("flask", "bg-amber-100 text-amber-700"),
        HistoryKind::Exam => ("stethoscope", "bg-green-100 text-green-700"),
    };

    view! {
        <div class="flex gap-3">
            <span class=format!("flex h-9 w-9 shrink-0 items-center justify-center rounded-full {accent}")>
                {glyph(icon)}
            </span>
            <div class="min-w-0 flex-1 border-b border-slate-100 pb-4">
                <div class="flex items-center justify-between gap-2">
                    <p class="font-medium text-slate-900">{item.title}</p>
                    <span class="shrink-0 text-xs text-slate-400">{item.date}</span>
                </div>
                <p class="mt-1 text-sm text-slate-600">{item.description}</p>
                {item.medicines.filter(|m| !m.is_empty()).map(|medicines| view! {
                    <div class="mt-2 flex flex-wrap gap-1.5">
                        {medicines
                            .into_iter()
                            .map(|medicine| view! {
                                <span class="rounded-full bg-blue-50 px-2 py-0.5 text-xs text-blue-700">{medicine}</span>
                            })
                            .collect_view()}
                    </div>
                })}
                {item.attachments.filter(|a| !a.is_empty()).map(|attachments| view! {
                    <div class="mt-2 flex flex-wrap gap-1.5">
                        {attachments
                            .into_iter()
                            .map(|attachment| view! {
                                <span class="rounded-lg bg-slate-100 px-2 py-0.5 text-xs text-slate-600">
                                    {glyph("file")}" "{attachment.name}" • "{attachment.date}
                                </span>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn QuickEntryModal(workflow: RwSignal<ExamWorkflow>) -> impl IntoView {
    let state = use_app_state();
    let doctor = move || &state.t().demo.doctor;
    let common = move || &state.t().demo.common;

    let entry = create_memo(move |_| workflow.with(|w| w.quick_entry().map(|form| form.entry)));
    let title = move || match entry.get() {
        Some(QuickEntry::Prescription) => doctor().modal_prescription_title,
        _ => doctor().modal_diagnosis_title,
    };

    let save = move |_| {
        let title = title();
        let date = visit_date();
        if dispatch(workflow, "save quick entry", |w| w.save_quick_entry(title, &date)).is_some() {
            log::info!("Quick entry saved: {title}");
        }
    };

    view! {
        <Show when=move || entry.get().is_some()>
            <div class="absolute inset-0 z-20 flex items-center justify-center bg-slate-900/40 p-4">
                <div class="w-full max-w-md rounded-2xl bg-white p-6 shadow-2xl">
                    <h4 class="text-lg font-semibold text-slate-900">{title}</h4>
                    <textarea
                        class="mt-4 h-32 w-full resize-none rounded-lg border border-slate-200 p-3 text-sm focus:border-blue-500 focus:outline-none"
                        placeholder=move || doctor().input_placeholder
                        prop:value=move || workflow.with(|w| w.quick_entry().map(|form| form.text.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            workflow.update(|w| w.set_quick_entry_text(text));
                        }
                    ></textarea>
                    <div class="mt-4 flex justify-end gap-2">
                        <button
                            class="rounded-lg px-4 py-2 text-sm font-medium text-slate-600 hover:bg-slate-100"
                            on:click=move |_| workflow.update(ExamWorkflow::close_quick_entry)
                        >
                            {move || common().cancel}
                        </button>
                        <button
                            class="rounded-lg bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700"
                            on:click=save
                        >
                            {move || common().save}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
