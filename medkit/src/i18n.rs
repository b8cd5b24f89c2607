//! Hard-coded two-locale dictionary.
//!
//! Every user-facing string of the site lives here, including the mock copy
//! used by the demo. Both locales fill the same structs, so a missing key is a
//! compile error rather than a blank label.

use serde::Serialize;

use crate::types::{AttachmentKind, Language};

#[derive(Debug, Serialize)]
pub struct Translations {
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub features: FeaturesCopy,
    pub telegram: TelegramCopy,
    pub demo: DemoCopy,
    pub why_us: WhyUsCopy,
    pub footer: FooterCopy,
}

#[derive(Debug, Serialize)]
pub struct NavCopy {
    pub features: &'static str,
    pub clinic_system: &'static str,
    pub online_queue: &'static str,
    pub why_us: &'static str,
    pub login: &'static str,
    pub language: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HeroCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FeaturesCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub list: &'static [FeatureCopy],
}

#[derive(Debug, Serialize)]
pub struct FeatureCopy {
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TelegramCopy {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button: &'static str,
    pub bot_label: &'static str,
    pub user_label: &'static str,
    pub chat: &'static [ChatLine],
    pub chat_confirm: &'static str,
    pub chat_other_time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSide {
    Bot,
    User,
}

#[derive(Debug, Serialize)]
pub struct ChatLine {
    pub side: ChatSide,
    pub text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DemoCopy {
    pub title_clinic: &'static str,
    pub subtitle_clinic: &'static str,
    pub title_patient: &'static str,
    pub subtitle_patient: &'static str,
    pub roles: RoleCopy,
    pub common: CommonCopy,
    pub doctor: DoctorCopy,
    pub admin: AdminCopy,
    pub patient: PatientCopy,
}

#[derive(Debug, Serialize)]
pub struct RoleCopy {
    pub admin: &'static str,
    pub doctor: &'static str,
    pub patient: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CommonCopy {
    pub live_test: &'static str,
    pub search_placeholder: &'static str,
    pub years_old: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub success: &'static str,
    pub back: &'static str,
    pub dismiss: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DoctorCopy {
    pub patient_list: &'static str,
    pub queue_title: &'static str,
    pub in_progress_title: &'static str,
    pub no_current_patients: &'static str,
    pub on_air: &'static str,
    pub waiting_badge: &'static str,
    pub completed_badge: &'static str,
    pub start_visit: &'static str,
    pub finish_visit: &'static str,
    pub current_patient: &'static str,
    pub add_diagnosis: &'static str,
    pub write_prescription: &'static str,
    pub attach_file: &'static str,
    pub add_medicine: &'static str,
    pub save_exam: &'static str,
    pub history: &'static str,
    pub actions: &'static str,
    pub diagnosis_history: &'static str,
    pub initial_diagnosis_title: &'static str,
    pub initial_xray_name: &'static str,
    pub test_results: &'static str,
    pub modal_diagnosis_title: &'static str,
    pub modal_prescription_title: &'static str,
    pub input_placeholder: &'static str,
    pub medicine_placeholder: &'static str,
    pub exam_title: &'static str,
    pub exam_description: &'static str,
    pub draft_discarded: &'static str,
    pub file_types: FileLabels,
    pub file_names: FileLabels,
}

/// One label per attachment kind.
#[derive(Debug, Serialize)]
pub struct FileLabels {
    pub mrt: &'static str,
    pub eco: &'static str,
    pub rentgen: &'static str,
}

impl FileLabels {
    pub fn get(&self, kind: AttachmentKind) -> &'static str {
        match kind {
            AttachmentKind::Mrt => self.mrt,
            AttachmentKind::Eco => self.eco,
            AttachmentKind::Rentgen => self.rentgen,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminCopy {
    pub revenue: &'static str,
    pub patients: &'static str,
    pub efficiency: &'static str,
    pub chart_revenue: &'static str,
    pub chart_visits: &'static str,
    pub period: &'static str,
    pub doctors_title: &'static str,
    pub view_all: &'static str,
    pub doctor_name: &'static str,
    pub specialty: &'static str,
    pub patients_treated: &'static str,
    pub revenue_gen: &'static str,
    pub rating: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PatientCopy {
    pub welcome: &'static str,
    pub next_visit: &'static str,
    pub book_appointment: &'static str,
    pub my_appointments: &'static str,
    pub medical_history: &'static str,
    pub status: &'static str,
    pub today: &'static str,
    pub select_time: &'static str,
    pub queue_position: &'static str,
    pub your_turn_in: &'static str,
    pub minutes: &'static str,
    pub notify_me: &'static str,
    pub confirmed_badge: &'static str,
    pub completed_badge: &'static str,
    pub available: &'static str,
    pub doctors_count: &'static str,
    pub confirm_question: &'static str,
    pub confirm_hint: &'static str,
    pub summary: SummaryLabels,
    pub steps: StepTitles,
    pub no_doctors: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryLabels {
    pub doctor: &'static str,
    pub specialty: &'static str,
    pub date: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StepTitles {
    pub specialty: &'static str,
    pub doctor: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub confirm: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WhyUsCopy {
    pub title: &'static str,
    pub items: &'static [WhyItem],
}

#[derive(Debug, Serialize)]
pub struct WhyItem {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FooterCopy {
    pub description: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
    pub rights: &'static str,
}

/// Dictionary for the given locale.
pub fn dictionary(lang: Language) -> &'static Translations {
    match lang {
        Language::Uz => &UZ,
        Language::Ru => &RU,
    }
}

pub static UZ: Translations = Translations {
    nav: NavCopy {
        features: "Imkoniyatlar",
        clinic_system: "Klinika Tizimi",
        online_queue: "Navbat Olish",
        why_us: "Nega Biz?",
        login: "Kirish",
        language: "Til",
    },
    hero: HeroCopy {
        title: "Elektron Tibbiyot Tizimi\nQog‘ozbozlik tugadi. Klinikangiz endi to‘liq raqamli.",
        subtitle: "Bemor kartalari, qabul ma’lumotlari va shifokor ish jarayonlari yagona xavfsiz tizimda boshqariladi. MedFlow klinikadagi barcha ish jarayonlarini tartibga soladi.",
        cta_primary: "Tizimni ko‘rish",
        cta_secondary: "Bemor ilovasini ko‘rish",
    },
    features: FeaturesCopy {
        eyebrow: "Raqamli Transformatsiya",
        title: "Klinikalar uchun raqamli yechimlar",
        subtitle: "Shifokorlar va ma’muriyat ishini yengillashtiruvchi zamonaviy workflow vositalari.",
        list: &[
            FeatureCopy {
                title: "Elektron bemor kartasi",
                desc: "Barcha tashriflar tarixi, tashxislar, tayinlovlar, tahlillar va hujjatlar yagona xavfsiz bazada saqlanadi.",
                icon: "user",
            },
            FeatureCopy {
                title: "Klinika boshqaruvi (CRM)",
                desc: "Shifokorlar yuklamasi, bemor oqimi, moliyaviy hisobotlar va xodimlar faoliyati to‘liq nazorat ostida.",
                icon: "bar-chart",
            },
            FeatureCopy {
                title: "Avtomatik eslatmalar",
                desc: "Bemorlarga qabul vaqti haqida SMS eslatmalar yuborish orqali kelmay qolish holatlari kamaytiriladi.",
                icon: "bell",
            },
            FeatureCopy {
                title: "Onlayn navbat va qabul",
                desc: "Bemorlar masofadan qabulga yozilishi mumkin. Bu klinikadagi tirbandlik va tartibsizlikni bartaraf etadi.",
                icon: "calendar",
            },
        ],
    },
    telegram: TelegramCopy {
        badge: "Telegram integratsiyasi",
        title: "Telegram Bot Integratsiyasi",
        subtitle: "Bemor ilovasi Telegram bot orqali ham to'liq integratsiya qilingan. Ilovani yuklab olish shart emas — barcha xizmatlar (navbat, qabul, tarix) Telegram orqali boshqariladi.",
        button: "Telegram Botni Sinab Ko'rish",
        bot_label: "Bot",
        user_label: "Siz",
        chat: &[
            ChatLine {
                side: ChatSide::Bot,
                text: "Assalomu alaykum! MedFlow Botiga xush kelibsiz. Qanday yordam bera olaman?",
            },
            ChatLine {
                side: ChatSide::User,
                text: "Dr. Azimov qabuliga yozilmoqchiman.",
            },
            ChatLine {
                side: ChatSide::Bot,
                text: "Xo'p, Dr. Azimov 15-May kuni soat 14:00 da bo'sh. Band qilaymi?",
            },
        ],
        chat_confirm: "Ha, tasdiqlash",
        chat_other_time: "Boshqa vaqt",
    },
    demo: DemoCopy {
        title_clinic: "Interaktiv demo — Klinika boshqaruv tizimi",
        subtitle_clinic: "Klinika rahbarlari va shifokorlar uchun yagona nazorat markazi.",
        title_patient: "Interaktiv demo — Bemorlar uchun ilova",
        subtitle_patient: "Bemorlar uydan chiqmasdan shifokor qabuliga yoziladi va navbatini ko‘radi.",
        roles: RoleCopy {
            admin: "Administrator rejimi",
            doctor: "Shifokor rejimi",
            patient: "Bemor ilovasi",
        },
        common: CommonCopy {
            live_test: "Jonli Test",
            search_placeholder: "Qidirish...",
            years_old: "yosh",
            save: "Saqlash",
            cancel: "Bekor qilish",
            confirm: "Tasdiqlash",
            success: "Muvaffaqiyatli!",
            back: "Orqaga",
            dismiss: "Yopish",
        },
        doctor: DoctorCopy {
            patient_list: "Bemorlar bazasi",
            queue_title: "Navbatdagi bemorlar",
            in_progress_title: "Qabul jarayonida",
            no_current_patients: "Hozirda bemor yo'q",
            on_air: "QABULDA",
            waiting_badge: "Kutmoqda",
            completed_badge: "Yakunlangan",
            start_visit: "Bemorni qabul qilish",
            finish_visit: "Qabulni yakunlash",
            current_patient: "Bemor kartasi",
            add_diagnosis: "Tashxis",
            write_prescription: "Retsept",
            attach_file: "Fayl biriktirish",
            add_medicine: "Dori qo'shish",
            save_exam: "Qo'shish",
            history: "Kasallik tarixi",
            actions: "Ko'rik natijalari",
            diagnosis_history: "Shikoyat: Nafas qisishi. Surunkali bronxit xuruji.",
            initial_diagnosis_title: "Bronxit",
            initial_xray_name: "Ko'krak qafasi rentgeni",
            test_results: "Qon tahlili natijalari",
            modal_diagnosis_title: "Yangi Tashxis",
            modal_prescription_title: "Yangi Retsept",
            input_placeholder: "Batafsil ma'lumot kiriting...",
            medicine_placeholder: "Dori nomini kiriting va Enter bosing...",
            exam_title: "Qabul natijalari",
            exam_description: "Navbatdagi ko'rik o'tkazildi.",
            draft_discarded: "Saqlanmagan ko'rik ma'lumotlari bekor qilindi",
            file_types: FileLabels {
                mrt: "MRT",
                eco: "EKG/EKO",
                rentgen: "Rentgen",
            },
            file_names: FileLabels {
                mrt: "Bosh miya MRT",
                eco: "Yurak EXO",
                rentgen: "O'pka Rentgen",
            },
        },
        admin: AdminCopy {
            revenue: "Jami Daromad",
            patients: "Bemorlar soni",
            efficiency: "Samaradorlik",
            chart_revenue: "Daromad (Mln so'm)",
            chart_visits: "Haftalik Tashriflar",
            period: "Oxirgi 30 kun",
            doctors_title: "Shifokorlar Ko'rsatkichlari",
            view_all: "Barchasini ko'rish",
            doctor_name: "Shifokor",
            specialty: "Mutaxassislik",
            patients_treated: "Qabul qilingan",
            revenue_gen: "Tushum",
            rating: "Reyting",
            status: "Holat",
        },
        patient: PatientCopy {
            welcome: "Salom, Alisher!",
            next_visit: "Keyingi qabul: 14:30, Dr. Azimov",
            book_appointment: "Qabulga yozilish",
            my_appointments: "Mening qabullarim",
            medical_history: "Hujjatlar",
            status: "Navbat holati",
            today: "Bugun",
            select_time: "Qabul vaqtini tanlang",
            queue_position: "Navbatdagi o'rningiz",
            your_turn_in: "Qabulga kirish",
            minutes: "daqiqadan so'ng",
            notify_me: "Meni ogohlantirish",
            confirmed_badge: "Tasdiqlangan",
            completed_badge: "Yakunlangan",
            available: "Bo'sh",
            doctors_count: "shifokor",
            confirm_question: "Qabulni tasdiqlaysizmi?",
            confirm_hint: "Quyidagi ma'lumotlarni tekshiring",
            summary: SummaryLabels {
                doctor: "Shifokor",
                specialty: "Mutaxassislik",
                date: "Sana",
                time: "Vaqt",
            },
            steps: StepTitles {
                specialty: "Mutaxassislikni tanlang",
                doctor: "Shifokorni tanlang",
                date: "Kunni tanlang",
                time: "Vaqtni tanlang",
                confirm: "Ma'lumotlarni tasdiqlash",
            },
            no_doctors: "Bu mutaxassislik bo'yicha shifokorlar topilmadi.",
        },
    },
    why_us: WhyUsCopy {
        title: "Nima uchun klinikalar MedFlow’ni tanlaydi?",
        items: &[
            WhyItem {
                title: "Ish jarayonlari soddalashadi",
                desc: "Barcha jarayonlar raqamlashtiriladi va boshqariladi.",
            },
            WhyItem {
                title: "Bemorlar kam kutadi",
                desc: "Belgilangan vaqt asosida qabul — tirbandlik 40% gacha kamayadi.",
            },
            WhyItem {
                title: "Klinikaga ishonch ortadi",
                desc: "Zamonaviy xizmat sifati klinika nufuzini oshiradi.",
            },
        ],
    },
    footer: FooterCopy {
        description: "MedFlow — klinikalar va shifoxonalar uchun workflow tizimi",
        privacy: "Maxfiylik siyosati",
        terms: "Foydalanish shartlari",
        rights: "© 2026 MedFlow Inc.",
    },
};

pub static RU: Translations = Translations {
    nav: NavCopy {
        features: "Возможности",
        clinic_system: "Система клиники",
        online_queue: "Онлайн-запись",
        why_us: "Почему мы?",
        login: "Вход",
        language: "Язык",
    },
    hero: HeroCopy {
        title: "Электронная медицинская система\nБумажная работа осталась в прошлом.",
        subtitle: "Карты пациентов, приёмы и рабочие процессы врачей объединены в одной защищённой системе. MedFlow упрощает все процессы в клинике.",
        cta_primary: "Посмотреть систему",
        cta_secondary: "Посмотреть приложение",
    },
    features: FeaturesCopy {
        eyebrow: "Цифровая трансформация",
        title: "Цифровые решения для клиник",
        subtitle: "Современные инструменты для оптимизации работы врачей и администрации.",
        list: &[
            FeatureCopy {
                title: "Электронная карта пациента",
                desc: "Вся история посещений, диагнозы, назначения, анализы и документы хранятся в единой защищённой системе.",
                icon: "user",
            },
            FeatureCopy {
                title: "Управление клиникой (CRM)",
                desc: "Контроль нагрузки врачей, потока пациентов, финансовых отчётов и работы персонала.",
                icon: "bar-chart",
            },
            FeatureCopy {
                title: "Автоматические напоминания",
                desc: "SMS-уведомления пациентам о приёмах снижают количество пропусков визитов.",
                icon: "bell",
            },
            FeatureCopy {
                title: "Онлайн-запись и очередь",
                desc: "Пациенты записываются дистанционно, что устраняет очереди и хаос в клинике.",
                icon: "calendar",
            },
        ],
    },
    telegram: TelegramCopy {
        badge: "Интеграция с Telegram",
        title: "Интеграция с Telegram Ботом",
        subtitle: "Приложение пациента полностью интегрировано с Telegram. Не нужно скачивать приложение — управление очередью, записью и историей через бот.",
        button: "Попробовать Telegram Бот",
        bot_label: "Бот",
        user_label: "Вы",
        chat: &[
            ChatLine {
                side: ChatSide::Bot,
                text: "Здравствуйте! Добро пожаловать в MedFlow Бот. Чем могу помочь?",
            },
            ChatLine {
                side: ChatSide::User,
                text: "Хочу записаться к Др. Азимову.",
            },
            ChatLine {
                side: ChatSide::Bot,
                text: "Хорошо, Др. Азимов свободен 15 мая в 14:00. Забронировать?",
            },
        ],
        chat_confirm: "Да, подтвердить",
        chat_other_time: "Другое время",
    },
    demo: DemoCopy {
        title_clinic: "Интерактивная демонстрация — система клиники",
        subtitle_clinic: "Единый центр управления для руководителей и врачей.",
        title_patient: "Интерактивная демонстрация — приложение",
        subtitle_patient: "Пациенты могут записываться к врачу онлайн и отслеживать очередь.",
        roles: RoleCopy {
            admin: "Режим администратора",
            doctor: "Режим врача",
            patient: "Приложение пациента",
        },
        common: CommonCopy {
            live_test: "Живой Тест",
            search_placeholder: "Поиск...",
            years_old: "лет",
            save: "Сохранить",
            cancel: "Отмена",
            confirm: "Подтвердить",
            success: "Успешно!",
            back: "Назад",
            dismiss: "Закрыть",
        },
        doctor: DoctorCopy {
            patient_list: "База пациентов",
            queue_title: "Пациенты в очереди",
            in_progress_title: "На приеме",
            no_current_patients: "Сейчас пациентов нет",
            on_air: "НА ПРИЁМЕ",
            waiting_badge: "Ожидает",
            completed_badge: "Завершён",
            start_visit: "Начать прием",
            finish_visit: "Завершить прием",
            current_patient: "Карта пациента",
            add_diagnosis: "Диагноз",
            write_prescription: "Рецепт",
            attach_file: "Прикрепить файл",
            add_medicine: "Добавить лекарство",
            save_exam: "Добавить",
            history: "История болезни",
            actions: "Результаты осмотра",
            diagnosis_history: "Жалоба: Одышка. Назначены антибиотики.",
            initial_diagnosis_title: "Бронхит",
            initial_xray_name: "Рентген грудной клетки",
            test_results: "Результаты анализов",
            modal_diagnosis_title: "Новый Диагноз",
            modal_prescription_title: "Новый Рецепт",
            input_placeholder: "Введите данные...",
            medicine_placeholder: "Введите название лекарства и нажмите Enter...",
            exam_title: "Результаты приёма",
            exam_description: "Проведён очередной осмотр.",
            draft_discarded: "Несохранённые данные осмотра отменены",
            file_types: FileLabels {
                mrt: "МРТ",
                eco: "ЭКГ/ЭХО",
                rentgen: "Рентген",
            },
            file_names: FileLabels {
                mrt: "МРТ головного мозга",
                eco: "ЭХО сердца",
                rentgen: "Рентген лёгких",
            },
        },
        admin: AdminCopy {
            revenue: "Доходы, расходы",
            patients: "Кол-во пациентов",
            efficiency: "Эффективность",
            chart_revenue: "Доходы (Млн сум)",
            chart_visits: "Еженедельные визиты",
            period: "Последние 30 дней",
            doctors_title: "Показатели Врачей",
            view_all: "Смотреть все",
            doctor_name: "Врач",
            specialty: "Специальность",
            patients_treated: "Принято",
            revenue_gen: "Выручка",
            rating: "Рейтинг",
            status: "Статус",
        },
        patient: PatientCopy {
            welcome: "Здравствуйте, Алишер!",
            next_visit: "След. визит: 14:30, Др. Азимов",
            book_appointment: "Записаться",
            my_appointments: "Мои записи",
            medical_history: "Документы",
            status: "Очередь",
            today: "Сегодня",
            select_time: "Выберите время приема",
            queue_position: "Ваша позиция в очереди",
            your_turn_in: "Вход на прием через",
            minutes: "минут",
            notify_me: "Уведомить меня",
            confirmed_badge: "Подтверждено",
            completed_badge: "Завершено",
            available: "Свободно",
            doctors_count: "врачей",
            confirm_question: "Подтверждаете запись?",
            confirm_hint: "Проверьте данные ниже",
            summary: SummaryLabels {
                doctor: "Врач",
                specialty: "Специальность",
                date: "Дата",
                time: "Время",
            },
            steps: StepTitles {
                specialty: "Выберите специальность",
                doctor: "Выберите врача",
                date: "Выберите дату",
                time: "Выберите время",
                confirm: "Подтверждение",
            },
            no_doctors: "Врачей этой специальности не найдено.",
        },
    },
    why_us: WhyUsCopy {
        title: "Почему клиники выбирают MedFlow?",
        items: &[
            WhyItem {
                title: "Упрощённые рабочие процессы",
                desc: "Все операции переведены в цифровой формат.",
            },
            WhyItem {
                title: "Меньше ожиданий",
                desc: "Приёмы по времени сокращают очереди до 40%.",
            },
            WhyItem {
                title: "Рост доверия к клинике",
                desc: "Современный сервис повышает репутацию и лояльность пациентов.",
            },
        ],
    },
    footer: FooterCopy {
        description: "MedFlow — система управления клиникой",
        privacy: "Политика конфиденциальности",
        terms: "Условия использования",
        rights: "© 2026 MedFlow Inc.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::BTreeMap;

    /// Flatten a dictionary into `path -> text` pairs.
    fn flatten(lang: Language) -> BTreeMap<String, String> {
        fn walk(prefix: String, value: &Value, out: &mut BTreeMap<String, String>) {
            match value {
                Value::Object(map) => {
                    for (key, child) in map {
                        walk(format!("{prefix}.{key}"), child, out);
                    }
                }
                Value::Array(items) => {
                    for (idx, child) in items.iter().enumerate() {
                        walk(format!("{prefix}[{idx}]"), child, out);
                    }
                }
                Value::String(text) => {
                    out.insert(prefix, text.clone());
                }
                other => panic!("unexpected leaf at {prefix}: {other}"),
            }
        }

        let value = serde_json::to_value(dictionary(lang)).unwrap();
        let mut out = BTreeMap::new();
        walk(String::new(), &value, &mut out);
        out
    }

    #[test]
    fn test_locales_share_every_key() {
        let uz = flatten(Language::Uz);
        let ru = flatten(Language::Ru);

        let uz_keys: Vec<_> = uz.keys().collect();
        let ru_keys: Vec<_> = ru.keys().collect();
        assert_eq!(uz_keys, ru_keys);
    }

    #[test]
    fn test_no_empty_entries() {
        for lang in [Language::Uz, Language::Ru] {
            for (path, text) in flatten(lang) {
                assert!(!text.trim().is_empty(), "{}{} is empty", lang.code(), path);
            }
        }
    }

    #[test]
    fn test_toggle_swaps_dictionary() {
        let lang = Language::Uz;
        assert_eq!(dictionary(lang).nav.login, "Kirish");
        assert_eq!(dictionary(lang.toggled()).nav.login, "Вход");
        assert_eq!(lang.toggled().toggled(), lang);
    }

    #[test]
    fn test_visible_copy_differs_between_locales() {
        let uz = flatten(Language::Uz);
        let ru = flatten(Language::Ru);

        assert_ne!(uz[".hero.title"], ru[".hero.title"]);
        assert_ne!(uz[".demo.patient.no_doctors"], ru[".demo.patient.no_doctors"]);
        assert_ne!(uz[".demo.doctor.exam_title"], ru[".demo.doctor.exam_title"]);
    }

    #[test]
    fn test_feature_icons_match() {
        let uz: Vec<_> = UZ.features.list.iter().map(|f| f.icon).collect();
        let ru: Vec<_> = RU.features.list.iter().map(|f| f.icon).collect();
        assert_eq!(uz, ru);
    }
}
