// services/medflow-web/src/components/telegram.rs
//
// MedFlow Site - Telegram bot promo with a static mock chat
//

use leptos::*;
use medflow_shared::i18n::ChatSide;

use crate::components::icons::Icon;
use crate::components::reveal::Reveal;
use crate::state::use_app_state;

#[component]
pub fn TelegramPromo() -> impl IntoView {
    let state = use_app_state();
    let telegram = move || &state.t().telegram;

    let chat = move || {
        telegram()
            .chat
            .iter()
            .map(|line| {
                let (row, bubble, sender) = match line.side {
                    ChatSide::Bot => (
                        "flex justify-start",
                        "rounded-2xl rounded-tl-sm bg-white text-slate-800 shadow-sm",
                        telegram().bot_label,
                    ),
                    ChatSide::User => (
                        "flex justify-end",
                        "rounded-2xl rounded-tr-sm bg-sky-500 text-white",
                        telegram().user_label,
                    ),
                };
                view! {
                    <div class=row>
                        <div class=format!("max-w-[80%] px-4 py-2 text-sm {bubble}")>
                            <p class="mb-1 text-[10px] font-semibold uppercase opacity-60">{sender}</p>
                            {line.text}
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="bg-gradient-to-br from-sky-50 to-blue-50 py-20 lg:py-28">
            <div class="mx-auto grid max-w-7xl items-center gap-12 px-4 sm:px-6 lg:grid-cols-2 lg:px-8">
                <Reveal>
                    <span class="inline-flex items-center gap-2 rounded-full bg-sky-100 px-4 py-1 text-sm font-semibold text-sky-700">
                        <Icon name="send" />
                        {move || telegram().badge}
                    </span>
                    <h2 class="mt-5 text-3xl font-bold text-slate-900 sm:text-4xl">
                        {move || telegram().title}
                    </h2>
                    <p class="mt-4 text-lg text-slate-600">{move || telegram().subtitle}</p>
                    <button class="mt-8 inline-flex items-center gap-2 rounded-xl bg-sky-500 px-6 py-3 font-semibold text-white hover:bg-sky-600">
                        <Icon name="send" />
                        {move || telegram().button}
                    </button>
                </Reveal>

                <Reveal class="delay-200">
                    <div class="mx-auto w-full max-w-sm overflow-hidden rounded-3xl border border-slate-200 bg-slate-100 shadow-2xl">
                        <div class="flex items-center gap-3 bg-sky-500 px-4 py-3 text-white">
                            <span class="flex h-9 w-9 items-center justify-center rounded-full bg-white/20 font-bold">"M"</span>
                            <div>
                                <p class="text-sm font-semibold">"MedFlow Bot"</p>
                                <p class="text-xs opacity-80">"online"</p>
                            </div>
                        </div>
                        <div class="flex flex-col gap-3 p-4">
                            {chat}
                            <div class="mt-2 grid grid-cols-2 gap-2">
                                <span class="rounded-lg bg-white py-2 text-center text-xs font-semibold text-sky-600 shadow-sm">
                                    {move || telegram().chat_confirm}
                                </span>
                                <span class="rounded-lg bg-white py-2 text-center text-xs font-semibold text-sky-600 shadow-sm">
                                    {move || telegram().chat_other_time}
                                </span>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
