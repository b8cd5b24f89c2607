use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Uz,
    Ru,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Uz => Language::Ru,
            Language::Ru => Language::Uz,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
        }
    }

    /// Label shown on the desktop language button.
    pub fn badge(self) -> &'static str {
        match self {
            Language::Uz => "UZ",
            Language::Ru => "RU",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::Uz => "O'zbekcha",
            Language::Ru => "Русский",
        }
    }
}

/// Dashboard shown inside the demo shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Doctor,
    Patient,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Doctor, Role::Patient];

    /// Path segment shown in the fake browser toolbar.
    pub fn slug(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }

    /// Admin and doctor share the clinic headline; the patient app has its own.
    pub fn is_clinic(self) -> bool {
        matches!(self, Role::Admin | Role::Doctor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientStatus {
    Waiting,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub last_visit: String,
    pub diagnosis: Option<String>,
    pub status: PatientStatus,
}

impl Patient {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Card number printed under the patient name.
    pub fn card_number(&self) -> String {
        format!("#{}4023", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Diagnosis,
    Prescription,
    Lab,
    Exam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Mrt,
    Eco,
    Rentgen,
}

impl AttachmentKind {
    pub const ALL: [AttachmentKind; 3] =
        [AttachmentKind::Mrt, AttachmentKind::Eco, AttachmentKind::Rentgen];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub name: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistoryItem {
    pub id: u64,
    pub kind: HistoryKind,
    pub title: String,
    pub date: String,
    pub description: String,
    pub attachments: Option<Vec<Attachment>>,
    pub medicines: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub doctor: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    Online,
    Busy,
    Offline,
}

impl DoctorStatus {
    pub fn label(self) -> &'static str {
        match self {
            DoctorStatus::Online => "Online",
            DoctorStatus::Busy => "Busy",
            DoctorStatus::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub patients: u32,
    pub revenue: String,
    pub rating: f32,
    pub status: DoctorStatus,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: u32,
}

/// One labelled sample of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Headline figure on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpi {
    pub icon: &'static str,
    pub accent: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub growth: Option<&'static str>,
}
