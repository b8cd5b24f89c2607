//! Patient booking wizard.
//!
//! A linear flow: dashboard → specialty → doctor → date → time → confirm.
//! Each selection is accepted only on its own step and moves the wizard one
//! step forward; `back` moves one step backward. Confirming produces an
//! [`Appointment`] and returns the wizard to the dashboard with nothing
//! selected.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::errors::{DemoError, Result};
use crate::types::{Appointment, AppointmentStatus, Doctor, Specialty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum BookingStep {
    #[default]
    Dashboard,
    Specialty,
    Doctor,
    Date,
    Time,
    Confirm,
}

impl BookingStep {
    /// The five wizard steps, in order, for the progress strip.
    pub const WIZARD: [BookingStep; 5] = [
        BookingStep::Specialty,
        BookingStep::Doctor,
        BookingStep::Date,
        BookingStep::Time,
        BookingStep::Confirm,
    ];

    pub fn index(self) -> u8 {
        match self {
            BookingStep::Dashboard => 0,
            BookingStep::Specialty => 1,
            BookingStep::Doctor => 2,
            BookingStep::Date => 3,
            BookingStep::Time => 4,
            BookingStep::Confirm => 5,
        }
    }

    fn next(self) -> Self {
        match self {
            BookingStep::Dashboard => BookingStep::Specialty,
            BookingStep::Specialty => BookingStep::Doctor,
            BookingStep::Doctor => BookingStep::Date,
            BookingStep::Date => BookingStep::Time,
            BookingStep::Time | BookingStep::Confirm => BookingStep::Confirm,
        }
    }

    fn previous(self) -> Self {
        match self {
            BookingStep::Dashboard | BookingStep::Specialty => BookingStep::Dashboard,
            BookingStep::Doctor => BookingStep::Specialty,
            BookingStep::Date => BookingStep::Doctor,
            BookingStep::Time => BookingStep::Date,
            BookingStep::Confirm => BookingStep::Time,
        }
    }
}

/// Selections accumulated while walking the wizard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingData {
    pub specialty: Option<Specialty>,
    pub doctor: Option<Doctor>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl BookingData {
    pub fn is_complete(&self) -> bool {
        self.specialty.is_some() && self.doctor.is_some() && self.date.is_some() && self.time.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == BookingData::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    step: BookingStep,
    data: BookingData,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn data(&self) -> &BookingData {
        &self.data
    }

    fn expect_step(&self, expected: BookingStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(DemoError::StepMismatch {
                expected,
                actual: self.step,
            })
        }
    }

    fn advance(&mut self) {
        self.step = self.step.next();
    }

    /// Leave the dashboard and open the specialty picker.
    pub fn start(&mut self) -> Result<()> {
        self.expect_step(BookingStep::Dashboard)?;
        self.data = BookingData::default();
        self.advance();
        Ok(())
    }

    pub fn choose_specialty(&mut self, specialty: Specialty) -> Result<()> {
        self.expect_step(BookingStep::Specialty)?;
        self.data = BookingData {
            specialty: Some(specialty),
            ..BookingData::default()
        };
        self.advance();
        Ok(())
    }

    /// Doctors whose specialty matches the chosen one, in fixture order.
    pub fn available_doctors<'a>(&self, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
        match &self.data.specialty {
            Some(specialty) => doctors
                .iter()
                .filter(|doc| doc.specialty == specialty.name)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn choose_doctor(&mut self, doctor: Doctor) -> Result<()> {
        self.expect_step(BookingStep::Doctor)?;
        let specialty = self
            .data
            .specialty
            .as_ref()
            .ok_or(DemoError::MissingSelection("specialty"))?;
        if doctor.specialty != specialty.name {
            return Err(DemoError::DoctorMismatch {
                doctor: doctor.name,
                specialty: specialty.name.clone(),
            });
        }

        self.data.doctor = Some(doctor);
        self.data.date = None;
        self.data.time = None;
        self.advance();
        Ok(())
    }

    pub fn choose_date(&mut self, date: impl Into<String>) -> Result<()> {
        self.expect_step(BookingStep::Date)?;
        self.data.date = Some(date.into());
        self.data.time = None;
        self.advance();
        Ok(())
    }

    pub fn choose_time(&mut self, time: impl Into<String>) -> Result<()> {
        self.expect_step(BookingStep::Time)?;
        self.data.time = Some(time.into());
        self.advance();
        Ok(())
    }

    /// Step back once. Returning to the dashboard cancels the booking.
    pub fn back(&mut self) -> Result<()> {
        if self.step == BookingStep::Dashboard {
            return Err(DemoError::AtDashboard);
        }
        self.step = self.step.previous();
        if self.step == BookingStep::Dashboard {
            self.data = BookingData::default();
        }
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.step = BookingStep::Dashboard;
        self.data = BookingData::default();
    }

    /// Turn the collected selections into an upcoming appointment.
    pub fn confirm(&mut self, id: u64) -> Result<Appointment> {
        self.expect_step(BookingStep::Confirm)?;
        let (Some(doctor), Some(date), Some(time)) =
            (&self.data.doctor, &self.data.date, &self.data.time)
        else {
            return Err(DemoError::MissingSelection("doctor, date and time"));
        };
        if self.data.specialty.is_none() {
            return Err(DemoError::MissingSelection("specialty"));
        }

        let appointment = Appointment {
            id,
            doctor: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            date: date.clone(),
            time: time.clone(),
            status: AppointmentStatus::Upcoming,
        };
        self.cancel();
        Ok(appointment)
    }
}

/// The next `days` calendar days after `today`, formatted `dd/mm`.
pub fn upcoming_dates(today: NaiveDate, days: u32) -> Vec<String> {
    (1..=u64::from(days))
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| date.format("%d/%m").to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{mock_doctors, mock_specialties};

    fn specialty(name: &str) -> Specialty {
        mock_specialties()
            .into_iter()
            .find(|s| s.name == name)
            .unwrap()
    }

    fn walk_to_confirm(wizard: &mut BookingWizard) {
        let doctors = mock_doctors();
        wizard.start().unwrap();
        wizard.choose_specialty(specialty("Kardiolog")).unwrap();
        let doctor = wizard.available_doctors(&doctors)[0].clone();
        wizard.choose_doctor(doctor).unwrap();
        wizard.choose_date("21/10").unwrap();
        wizard.choose_time("14:00").unwrap();
    }

    #[test]
    fn test_full_booking() {
        let mut wizard = BookingWizard::new();
        walk_to_confirm(&mut wizard);
        assert_eq!(wizard.step(), BookingStep::Confirm);
        assert!(wizard.data().is_complete());

        let appointment = wizard.confirm(42).unwrap();
        assert_eq!(appointment.id, 42);
        assert_eq!(appointment.doctor, "Dr. Aziz Rahimov");
        assert_eq!(appointment.specialty, "Kardiolog");
        assert_eq!(appointment.date, "21/10");
        assert_eq!(appointment.time, "14:00");
        assert_eq!(appointment.status, AppointmentStatus::Upcoming);

        assert_eq!(wizard.step(), BookingStep::Dashboard);
        assert!(wizard.data().is_empty());
    }

    #[test]
    fn test_confirm_only_from_confirm_step() {
        let mut wizard = BookingWizard::new();
        assert!(wizard.confirm(1).is_err());

        wizard.start().unwrap();
        wizard.choose_specialty(specialty("Terapevt")).unwrap();
        let err = wizard.confirm(1).unwrap_err();
        assert_eq!(
            err,
            DemoError::StepMismatch {
                expected: BookingStep::Confirm,
                actual: BookingStep::Doctor,
            }
        );
        assert_eq!(wizard.step(), BookingStep::Doctor);
    }

    #[test]
    fn test_no_forward_skip() {
        let mut wizard = BookingWizard::new();
        assert!(wizard.choose_specialty(specialty("Pediatr")).is_err());
        assert!(wizard.choose_time("09:00").is_err());

        wizard.start().unwrap();
        assert!(wizard.choose_date("20/10").is_err());
        assert!(wizard.choose_time("09:00").is_err());
        assert_eq!(wizard.step(), BookingStep::Specialty);
        assert!(wizard.data().is_empty());
    }

    #[test]
    fn test_specialty_without_doctors() {
        let doctors = mock_doctors();
        let mut wizard = BookingWizard::new();
        wizard.start().unwrap();
        wizard.choose_specialty(specialty("Stomatolog")).unwrap();

        assert!(wizard.available_doctors(&doctors).is_empty());
        assert!(wizard.choose_date("20/10").is_err());

        wizard.back().unwrap();
        assert_eq!(wizard.step(), BookingStep::Specialty);
    }

    #[test]
    fn test_doctor_must_match_specialty() {
        let doctors = mock_doctors();
        let pediatrician = doctors.iter().find(|d| d.specialty == "Pediatr").unwrap();

        let mut wizard = BookingWizard::new();
        wizard.start().unwrap();
        wizard.choose_specialty(specialty("Kardiolog")).unwrap();

        let err = wizard.choose_doctor(pediatrician.clone()).unwrap_err();
        assert!(matches!(err, DemoError::DoctorMismatch { .. }));
        assert_eq!(wizard.step(), BookingStep::Doctor);
        assert!(wizard.data().doctor.is_none());
    }

    #[test]
    fn test_back_decrements_and_cancels_at_dashboard() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.back(), Err(DemoError::AtDashboard));

        walk_to_confirm(&mut wizard);
        wizard.back().unwrap();
        assert_eq!(wizard.step(), BookingStep::Time);
        assert!(wizard.data().time.is_some());

        wizard.back().unwrap();
        wizard.back().unwrap();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), BookingStep::Specialty);

        wizard.back().unwrap();
        assert_eq!(wizard.step(), BookingStep::Dashboard);
        assert!(wizard.data().is_empty());
    }

    #[test]
    fn test_reselecting_clears_later_choices() {
        let mut wizard = BookingWizard::new();
        walk_to_confirm(&mut wizard);

        wizard.back().unwrap();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), BookingStep::Date);
        wizard.choose_date("22/10").unwrap();

        assert_eq!(wizard.data().date.as_deref(), Some("22/10"));
        assert!(wizard.data().time.is_none());
        assert_eq!(wizard.step(), BookingStep::Time);
        assert!(wizard.confirm(7).is_err());
    }

    #[test]
    fn test_step_indices() {
        let indices: Vec<_> = BookingStep::WIZARD.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        assert_eq!(BookingStep::Dashboard.index(), 0);
    }

    #[test]
    fn test_upcoming_dates_cross_month_end() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 29).unwrap();
        assert_eq!(
            upcoming_dates(today, 5),
            vec!["30/10", "31/10", "01/11", "02/11", "03/11"]
        );
        assert!(upcoming_dates(today, 0).is_empty());
    }
}
