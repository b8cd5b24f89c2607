//! Hard-coded stand-ins for a clinic backend.
//!
//! Each call returns a fresh copy, so views that mutate their data never touch
//! what the next view starts from.

use crate::i18n::{AdminCopy, DoctorCopy, PatientCopy};
use crate::types::{
    Appointment, AppointmentStatus, Attachment, AttachmentKind, ChartPoint, Doctor, DoctorStatus,
    HistoryKind, Kpi, MedicalHistoryItem, Patient, PatientStatus, Specialty,
};

/// Date stamp carried by the seeded history entries.
const SEED_DATE: &str = "12.05.2024";

pub fn mock_patients() -> Vec<Patient> {
    let patient = |id: &str, name: &str, age, last_visit: &str, status, diagnosis: Option<&str>| {
        Patient {
            id: id.to_string(),
            name: name.to_string(),
            age,
            last_visit: last_visit.to_string(),
            diagnosis: diagnosis.map(str::to_string),
            status,
        }
    };

    vec![
        patient("1", "Alisher Sobirjonov", 34, "12.05.2024", PatientStatus::Waiting, Some("Bronxit")),
        patient("2", "Elena Ivanova", 28, "10.05.2024", PatientStatus::InProgress, None),
        patient("3", "Jamshid Karimov", 45, "02.04.2024", PatientStatus::Completed, Some("Gipertoniya")),
        patient("4", "Malika Azizova", 22, "Bugun", PatientStatus::Waiting, None),
    ]
}

pub fn mock_doctors() -> Vec<Doctor> {
    let doctor = |id, name: &str, specialty: &str, patients, revenue: &str, rating, status, initials: &str| {
        Doctor {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
            patients,
            revenue: revenue.to_string(),
            rating,
            status,
            initials: initials.to_string(),
        }
    };

    vec![
        doctor(1, "Dr. Aziz Rahimov", "Kardiolog", 145, "12.5 M", 4.9, DoctorStatus::Busy, "AR"),
        doctor(2, "Dr. Nodira Aliyeva", "Terapevt", 230, "15.2 M", 4.8, DoctorStatus::Online, "NA"),
        doctor(3, "Dr. Jasur Karimov", "Nevropatolog", 98, "9.8 M", 4.7, DoctorStatus::Offline, "JK"),
        doctor(4, "Dr. Malika Zokirova", "Pediatr", 180, "11.0 M", 4.9, DoctorStatus::Online, "MZ"),
    ]
}

pub fn mock_specialties() -> Vec<Specialty> {
    [
        ("Terapevt", "stethoscope", 4),
        ("Kardiolog", "heart-pulse", 2),
        ("Nevropatolog", "brain", 3),
        ("Pediatr", "baby", 5),
        ("Stomatolog", "smile", 3),
        ("Dermatolog", "scan-face", 1),
    ]
    .into_iter()
    .map(|(name, icon, count)| Specialty {
        id: name.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        count,
    })
    .collect()
}

fn series(points: &[(&str, f64)]) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|(label, value)| ChartPoint {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

/// Monthly revenue in millions.
pub fn revenue_series() -> Vec<ChartPoint> {
    series(&[
        ("Jan", 120.0),
        ("Feb", 135.0),
        ("Mar", 160.0),
        ("Apr", 145.0),
        ("May", 190.0),
        ("Jun", 210.0),
    ])
}

/// Visits per weekday.
pub fn visit_series() -> Vec<ChartPoint> {
    series(&[
        ("Mon", 45.0),
        ("Tue", 52.0),
        ("Wed", 48.0),
        ("Thu", 61.0),
        ("Fri", 55.0),
        ("Sat", 30.0),
    ])
}

pub fn kpis(copy: &AdminCopy) -> [Kpi; 3] {
    [
        Kpi {
            icon: "dollar",
            accent: "blue",
            value: "124.5 M",
            label: copy.revenue,
            growth: Some("+12.5%"),
        },
        Kpi {
            icon: "users",
            accent: "indigo",
            value: "1,240",
            label: copy.patients,
            growth: Some("+5.2%"),
        },
        Kpi {
            icon: "trending-up",
            accent: "purple",
            value: "94%",
            label: copy.efficiency,
            growth: None,
        },
    ]
}

/// History the doctor view opens with, newest first.
pub fn initial_history(copy: &DoctorCopy) -> Vec<MedicalHistoryItem> {
    vec![
        MedicalHistoryItem {
            id: 1,
            kind: HistoryKind::Diagnosis,
            title: copy.initial_diagnosis_title.to_string(),
            date: SEED_DATE.to_string(),
            description: copy.diagnosis_history.to_string(),
            attachments: Some(vec![Attachment {
                kind: AttachmentKind::Rentgen,
                name: copy.initial_xray_name.to_string(),
                date: SEED_DATE.to_string(),
            }]),
            medicines: Some(vec!["Amoxicillin 500mg".to_string(), "Paracetamol".to_string()]),
        },
        MedicalHistoryItem {
            id: 2,
            kind: HistoryKind::Lab,
            title: copy.test_results.to_string(),
            date: SEED_DATE.to_string(),
            description: "Hemoglobin: 130, RBC: 4.5".to_string(),
            attachments: None,
            medicines: None,
        },
    ]
}

pub fn initial_appointments(copy: &PatientCopy) -> Vec<Appointment> {
    vec![Appointment {
        id: 1,
        doctor: "Dr. Azimov".to_string(),
        specialty: "Kardiolog".to_string(),
        date: copy.today.to_string(),
        time: "14:30".to_string(),
        status: AppointmentStatus::Upcoming,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::UZ;

    #[test]
    fn test_series_have_six_points() {
        assert_eq!(revenue_series().len(), 6);
        assert_eq!(visit_series().len(), 6);
        assert_eq!(revenue_series()[5].value, 210.0);
    }

    #[test]
    fn test_specialty_ids_are_unique() {
        let specialties = mock_specialties();
        let mut ids: Vec<_> = specialties.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), specialties.len());
    }

    #[test]
    fn test_every_doctor_has_a_listed_specialty() {
        let specialties = mock_specialties();
        for doctor in mock_doctors() {
            assert!(specialties.iter().any(|s| s.name == doctor.specialty));
        }
    }

    #[test]
    fn test_seeded_history_is_localized() {
        let history = initial_history(&UZ.demo.doctor);
        assert_eq!(history[0].title, "Bronxit");
        assert_eq!(history[1].kind, HistoryKind::Lab);
        assert_eq!(history[0].medicines.as_ref().map(Vec::len), Some(2));
    }
}
