//! Doctor examination workflow.
//!
//! Holds a local copy of the patient roster (the fixture itself is never
//! touched), the selected patient, the pending examination draft and the
//! shared history timeline. Visits move waiting → in_progress → completed.

use crate::errors::{DemoError, Result};
use crate::types::{Attachment, AttachmentKind, HistoryKind, MedicalHistoryItem, Patient, PatientStatus};

/// Which half of the split layout is shown on narrow screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    List,
    Detail,
}

/// Medicines and attachments collected but not yet saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExamDraft {
    pub medicines: Vec<String>,
    pub attachments: Vec<Attachment>,
}

impl ExamDraft {
    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty() && self.attachments.is_empty()
    }
}

/// Unsaved draft dropped because another patient was selected.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscardedDraft {
    pub patient_id: String,
    pub draft: ExamDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickEntry {
    Diagnosis,
    Prescription,
}

impl QuickEntry {
    pub fn kind(self) -> HistoryKind {
        match self {
            QuickEntry::Diagnosis => HistoryKind::Diagnosis,
            QuickEntry::Prescription => HistoryKind::Prescription,
        }
    }
}

/// Open quick-entry modal and its text.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickEntryForm {
    pub entry: QuickEntry,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ExamWorkflow {
    roster: Vec<Patient>,
    selected: Option<String>,
    pane: Pane,
    history: Vec<MedicalHistoryItem>,
    draft: ExamDraft,
    medicine_input: String,
    quick_entry: Option<QuickEntryForm>,
    next_id: u64,
}

impl ExamWorkflow {
    /// Selects the first patient in progress, else the first waiting one,
    /// else the first on the roster.
    pub fn new(roster: Vec<Patient>, history: Vec<MedicalHistoryItem>) -> Self {
        let selected = roster
            .iter()
            .find(|p| p.status == PatientStatus::InProgress)
            .or_else(|| roster.iter().find(|p| p.status == PatientStatus::Waiting))
            .or_else(|| roster.first())
            .map(|p| p.id.clone());
        let next_id = history.iter().map(|item| item.id).max().unwrap_or(0) + 1;

        Self {
            roster,
            selected,
            pane: Pane::List,
            history,
            draft: ExamDraft::default(),
            medicine_input: String::new(),
            quick_entry: None,
            next_id,
        }
    }

    pub fn roster(&self) -> &[Patient] {
        &self.roster
    }

    pub fn patients_with(&self, status: PatientStatus) -> Vec<Patient> {
        self.roster
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    pub fn selected(&self) -> Option<&Patient> {
        let id = self.selected.as_deref()?;
        self.roster.iter().find(|p| p.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// The examination panel is open while the selected visit is in progress.
    pub fn is_examining(&self) -> bool {
        self.selected()
            .is_some_and(|p| p.status == PatientStatus::InProgress)
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn history(&self) -> &[MedicalHistoryItem] {
        &self.history
    }

    pub fn draft(&self) -> &ExamDraft {
        &self.draft
    }

    pub fn medicine_input(&self) -> &str {
        &self.medicine_input
    }

    pub fn quick_entry(&self) -> Option<&QuickEntryForm> {
        self.quick_entry.as_ref()
    }

    fn selected_mut(&mut self) -> Result<&mut Patient> {
        let id = self
            .selected
            .clone()
            .ok_or(DemoError::MissingSelection("patient"))?;
        self.roster
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DemoError::UnknownPatient(id))
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Select a patient. In compact layouts the detail pane opens.
    ///
    /// Switching to a different patient clears the pending draft; a non-empty
    /// draft is handed back so the caller can warn about it.
    pub fn select_patient(&mut self, id: &str, compact: bool) -> Result<Option<DiscardedDraft>> {
        if !self.roster.iter().any(|p| p.id == id) {
            return Err(DemoError::UnknownPatient(id.to_string()));
        }
        if compact {
            self.pane = Pane::Detail;
        }
        if self.is_selected(id) {
            return Ok(None);
        }

        let previous = self.selected.replace(id.to_string());
        let draft = std::mem::take(&mut self.draft);
        self.medicine_input.clear();

        Ok(match previous {
            Some(patient_id) if !draft.is_empty() => Some(DiscardedDraft { patient_id, draft }),
            _ => None,
        })
    }

    pub fn back_to_list(&mut self) {
        self.pane = Pane::List;
    }

    pub fn start_visit(&mut self) -> Result<()> {
        let patient = self.selected_mut()?;
        if patient.status != PatientStatus::Waiting {
            return Err(DemoError::InvalidTransition(patient.status));
        }
        patient.status = PatientStatus::InProgress;
        Ok(())
    }

    /// Complete the visit and return to the patient list.
    pub fn finish_visit(&mut self) -> Result<()> {
        let patient = self.selected_mut()?;
        if patient.status != PatientStatus::InProgress {
            return Err(DemoError::InvalidTransition(patient.status));
        }
        patient.status = PatientStatus::Completed;
        self.pane = Pane::List;
        Ok(())
    }

    pub fn set_medicine_input(&mut self, text: impl Into<String>) {
        self.medicine_input = text.into();
    }

    /// Move the medicine input into the draft.
    pub fn add_medicine(&mut self) -> Result<()> {
        let medicine = self.medicine_input.trim();
        if medicine.is_empty() {
            return Err(DemoError::EmptyInput);
        }
        self.draft.medicines.push(medicine.to_string());
        self.medicine_input.clear();
        Ok(())
    }

    pub fn attach(&mut self, kind: AttachmentKind, name: impl Into<String>, date: impl Into<String>) {
        self.draft.attachments.push(Attachment {
            kind,
            name: name.into(),
            date: date.into(),
        });
    }

    /// Save the draft as an exam entry at the top of the history.
    pub fn save_examination(&mut self, title: &str, description: &str, date: &str) -> Result<()> {
        if self.draft.is_empty() {
            return Err(DemoError::EmptyExamination);
        }
        let draft = std::mem::take(&mut self.draft);
        let item = MedicalHistoryItem {
            id: self.take_id(),
            kind: HistoryKind::Exam,
            title: title.to_string(),
            date: date.to_string(),
            description: description.to_string(),
            attachments: Some(draft.attachments),
            medicines: Some(draft.medicines),
        };
        self.history.insert(0, item);
        Ok(())
    }

    pub fn open_quick_entry(&mut self, entry: QuickEntry) {
        self.quick_entry = Some(QuickEntryForm {
            entry,
            text: String::new(),
        });
    }

    pub fn set_quick_entry_text(&mut self, text: impl Into<String>) {
        if let Some(form) = self.quick_entry.as_mut() {
            form.text = text.into();
        }
    }

    pub fn close_quick_entry(&mut self) {
        self.quick_entry = None;
    }

    /// Save the open modal. Blank text keeps the modal open.
    pub fn save_quick_entry(&mut self, title: &str, date: &str) -> Result<()> {
        let form = self
            .quick_entry
            .as_ref()
            .ok_or(DemoError::MissingSelection("quick entry"))?;
        let text = form.text.trim();
        if text.is_empty() {
            return Err(DemoError::EmptyInput);
        }

        let entry = form.entry;
        let item = MedicalHistoryItem {
            id: self.next_id,
            kind: entry.kind(),
            title: title.to_string(),
            date: date.to_string(),
            description: text.to_string(),
            attachments: None,
            medicines: match entry {
                QuickEntry::Diagnosis => Some(Vec::new()),
                QuickEntry::Prescription => None,
            },
        };
        self.next_id += 1;
        self.history.insert(0, item);
        self.quick_entry = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{initial_history, mock_patients};
    use crate::i18n::UZ;

    const TODAY: &str = "16.10.2026";

    fn workflow() -> ExamWorkflow {
        ExamWorkflow::new(mock_patients(), initial_history(&UZ.demo.doctor))
    }

    fn status_of(workflow: &ExamWorkflow, name: &str) -> PatientStatus {
        workflow
            .roster()
            .iter()
            .find(|p| p.name == name)
            .unwrap()
            .status
    }

    #[test]
    fn test_initial_selection_prefers_visit_in_progress() {
        let workflow = workflow();
        assert_eq!(workflow.selected().unwrap().name, "Elena Ivanova");
        assert!(workflow.is_examining());
        assert_eq!(workflow.pane(), Pane::List);

        let waiting_only = ExamWorkflow::new(
            mock_patients()
                .into_iter()
                .filter(|p| p.status != PatientStatus::InProgress)
                .collect(),
            Vec::new(),
        );
        assert_eq!(waiting_only.selected().unwrap().name, "Alisher Sobirjonov");
        assert!(!waiting_only.is_examining());
    }

    #[test]
    fn test_visit_lifecycle() {
        let mut workflow = workflow();
        workflow.select_patient("4", true).unwrap();
        assert_eq!(workflow.pane(), Pane::Detail);
        assert_eq!(status_of(&workflow, "Malika Azizova"), PatientStatus::Waiting);
        assert!(!workflow.is_examining());

        workflow.start_visit().unwrap();
        assert_eq!(status_of(&workflow, "Malika Azizova"), PatientStatus::InProgress);
        assert!(workflow.is_examining());

        workflow.finish_visit().unwrap();
        assert_eq!(status_of(&workflow, "Malika Azizova"), PatientStatus::Completed);
        assert_eq!(workflow.pane(), Pane::List);
        assert!(!workflow.is_examining());
    }

    #[test]
    fn test_start_visit_touches_only_selected_patient() {
        let mut workflow = workflow();
        workflow.select_patient("1", false).unwrap();
        workflow.start_visit().unwrap();

        assert_eq!(status_of(&workflow, "Alisher Sobirjonov"), PatientStatus::InProgress);
        assert_eq!(status_of(&workflow, "Malika Azizova"), PatientStatus::Waiting);
        assert_eq!(status_of(&workflow, "Elena Ivanova"), PatientStatus::InProgress);
        assert_eq!(status_of(&workflow, "Jamshid Karimov"), PatientStatus::Completed);
        assert_eq!(mock_patients()[0].status, PatientStatus::Waiting);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut workflow = workflow();
        workflow.select_patient("3", false).unwrap();
        assert_eq!(
            workflow.start_visit(),
            Err(DemoError::InvalidTransition(PatientStatus::Completed))
        );
        assert_eq!(
            workflow.finish_visit(),
            Err(DemoError::InvalidTransition(PatientStatus::Completed))
        );

        workflow.select_patient("4", false).unwrap();
        assert!(workflow.finish_visit().is_err());
        assert_eq!(status_of(&workflow, "Malika Azizova"), PatientStatus::Waiting);
    }

    #[test]
    fn test_unknown_patient() {
        let mut workflow = workflow();
        assert_eq!(
            workflow.select_patient("99", true),
            Err(DemoError::UnknownPatient("99".to_string()))
        );
        assert_eq!(workflow.pane(), Pane::List);
    }

    #[test]
    fn test_empty_examination_is_noop() {
        let mut workflow = workflow();
        let before = workflow.history().len();

        assert_eq!(
            workflow.save_examination("Qabul", "Ko'rik", TODAY),
            Err(DemoError::EmptyExamination)
        );
        assert_eq!(workflow.history().len(), before);
    }

    #[test]
    fn test_save_examination_prepends() {
        let mut workflow = workflow();
        workflow.set_medicine_input("  Ibuprofen 200mg ");
        workflow.add_medicine().unwrap();
        assert_eq!(workflow.medicine_input(), "");
        workflow.attach(AttachmentKind::Mrt, "Bosh miya MRT", TODAY);

        workflow
            .save_examination("Qabul natijalari", "Navbatdagi ko'rik o'tkazildi.", TODAY)
            .unwrap();

        let newest = &workflow.history()[0];
        assert_eq!(newest.kind, HistoryKind::Exam);
        assert_eq!(newest.medicines.as_deref(), Some(&["Ibuprofen 200mg".to_string()][..]));
        assert_eq!(newest.attachments.as_ref().map(Vec::len), Some(1));
        assert_eq!(workflow.history().len(), 3);
        assert!(workflow.draft().is_empty());
    }

    #[test]
    fn test_blank_medicine_is_rejected() {
        let mut workflow = workflow();
        workflow.set_medicine_input("   ");
        assert_eq!(workflow.add_medicine(), Err(DemoError::EmptyInput));
        assert!(workflow.draft().medicines.is_empty());
    }

    #[test]
    fn test_switching_patient_discards_draft() {
        let mut workflow = workflow();
        workflow.set_medicine_input("Paracetamol");
        workflow.add_medicine().unwrap();
        workflow.set_medicine_input("half typed");

        let discarded = workflow.select_patient("4", false).unwrap().unwrap();
        assert_eq!(discarded.patient_id, "2");
        assert_eq!(discarded.draft.medicines, vec!["Paracetamol".to_string()]);
        assert!(workflow.draft().is_empty());
        assert_eq!(workflow.medicine_input(), "");

        assert_eq!(workflow.select_patient("1", false).unwrap(), None);
    }

    #[test]
    fn test_reselecting_same_patient_keeps_draft() {
        let mut workflow = workflow();
        workflow.attach(AttachmentKind::Eco, "Yurak EXO", TODAY);

        assert_eq!(workflow.select_patient("2", true).unwrap(), None);
        assert_eq!(workflow.draft().attachments.len(), 1);
    }

    #[test]
    fn test_quick_entry() {
        let mut workflow = workflow();
        assert!(workflow.save_quick_entry("Yangi Tashxis", TODAY).is_err());

        workflow.open_quick_entry(QuickEntry::Diagnosis);
        workflow.set_quick_entry_text("  ");
        assert_eq!(workflow.save_quick_entry("Yangi Tashxis", TODAY), Err(DemoError::EmptyInput));
        assert!(workflow.quick_entry().is_some());

        workflow.set_quick_entry_text("O'tkir bronxit");
        workflow.save_quick_entry("Yangi Tashxis", TODAY).unwrap();
        assert!(workflow.quick_entry().is_none());

        let newest = &workflow.history()[0];
        assert_eq!(newest.kind, HistoryKind::Diagnosis);
        assert_eq!(newest.description, "O'tkir bronxit");
        assert_eq!(newest.medicines, Some(Vec::new()));

        workflow.open_quick_entry(QuickEntry::Prescription);
        workflow.set_quick_entry_text("Amoxicillin 3x1");
        workflow.save_quick_entry("Yangi Retsept", TODAY).unwrap();
        assert_eq!(workflow.history()[0].kind, HistoryKind::Prescription);
        assert_eq!(workflow.history()[0].medicines, None);
        assert_ne!(workflow.history()[0].id, workflow.history()[1].id);
    }

    #[test]
    fn test_cancel_quick_entry() {
        let mut workflow = workflow();
        let before = workflow.history().len();
        workflow.open_quick_entry(QuickEntry::Prescription);
        workflow.set_quick_entry_text("draft");
        workflow.close_quick_entry();

        assert!(workflow.quick_entry().is_none());
        assert_eq!(workflow.history().len(), before);
    }

    #[test]
    fn test_malika_scenario() {
        let mut workflow = workflow();
        workflow.select_patient("4", true).unwrap();
        assert_eq!(workflow.selected().unwrap().name, "Malika Azizova");

        workflow.start_visit().unwrap();
        assert!(workflow.is_examining());
        assert_eq!(workflow.pane(), Pane::Detail);

        workflow.finish_visit().unwrap();
        assert_eq!(workflow.selected().unwrap().status, PatientStatus::Completed);
        assert_eq!(workflow.pane(), Pane::List);
    }
}
