use std::collections::BTreeSet;

/// Registration wizard pages, numbered 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WorkerStep {
    #[default]
    PersonalInfo,
    ServiceCategory,
    Documents,
    ServiceArea,
}

impl WorkerStep {
    pub const TOTAL: u8 = 4;

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::ServiceCategory => 2,
            Self::Documents => 3,
            Self::ServiceArea => 4,
        }
    }

    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::PersonalInfo),
            2 => Some(Self::ServiceCategory),
            3 => Some(Self::Documents),
            4 => Some(Self::ServiceArea),
            _ => None,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::ServiceCategory => "Service Category",
            Self::Documents => "Document Verification",
            Self::ServiceArea => "Service Area",
        }
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        self.prev().is_none()
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.next().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot {
    GovernmentId,
    SkillCertificate,
}

impl DocumentSlot {
    pub const ALL: [Self; 2] = [Self::GovernmentId, Self::SkillCertificate];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::GovernmentId => "Government ID Proof",
            Self::SkillCertificate => "Skill Certificate (Optional)",
        }
    }

    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::GovernmentId => "Aadhaar, PAN, Voter ID, or Driving License",
            Self::SkillCertificate => "Any relevant certification or training proof",
        }
    }
}

/// Free-form registration fields. Nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerProfileDraft {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub years_experience: String,
    pub categories: BTreeSet<String>,
    pub base_location: String,
    pub radius_km: String,
}

impl Default for WorkerProfileDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            mobile: String::new(),
            email: String::new(),
            years_experience: String::new(),
            categories: BTreeSet::new(),
            base_location: String::new(),
            radius_km: "5".to_string(),
        }
    }
}

impl WorkerProfileDraft {
    /// Flip a service category checkbox.
    pub fn toggle_category(&mut self, name: &str) {
        if !self.categories.remove(name) {
            self.categories.insert(name.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkerOnboarding {
    step: WorkerStep,
    pub draft: WorkerProfileDraft,
}

impl WorkerOnboarding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> WorkerStep {
        self.step
    }

    /// Continue; stays on the last page.
    pub fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            log::debug!("worker onboarding {} -> {}", self.step.number(), next.number());
            self.step = next;
        }
    }

    /// Back; stays on the first page.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.step.number() * 100 / WorkerStep::TOTAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continue_and_back_clamp_at_the_ends() {
        let mut wizard = WorkerOnboarding::new();
        assert_eq!(wizard.step().number(), 1);
        wizard.back();
        assert_eq!(wizard.step().number(), 1);
        for expected in 2..=4 {
            wizard.advance();
            assert_eq!(wizard.step().number(), expected);
        }
        wizard.advance();
        assert_eq!(wizard.step(), WorkerStep::ServiceArea);
        for expected in (1..=3).rev() {
            wizard.back();
            assert_eq!(wizard.step().number(), expected);
        }
    }

    #[test]
    fn every_step_moves_by_one() {
        for n in 1..=WorkerStep::TOTAL {
            let step = WorkerStep::from_number(n).unwrap();
            assert_eq!(step.next().map(WorkerStep::number), (n < 4).then_some(n + 1));
            assert_eq!(step.prev().map(WorkerStep::number), (n > 1).then_some(n - 1));
        }
        assert!(WorkerStep::PersonalInfo.is_first());
        assert!(WorkerStep::ServiceArea.is_last());
    }

    #[test]
    fn last_step_is_reachable_with_empty_fields() {
        let mut wizard = WorkerOnboarding::new();
        for _ in 0..3 {
            wizard.advance();
        }
        assert_eq!(wizard.step(), WorkerStep::ServiceArea);
        assert!(wizard.draft.full_name.is_empty());
        assert!(wizard.draft.categories.is_empty());
        assert_eq!(wizard.progress_percent(), 100);
    }

    #[test]
    fn progress_tracks_step() {
        let mut wizard = WorkerOnboarding::new();
        assert_eq!(wizard.progress_percent(), 25);
        wizard.advance();
        assert_eq!(wizard.progress_percent(), 50);
    }

    #[test]
    fn category_toggle_flips_membership() {
        let mut draft = WorkerProfileDraft::default();
        assert_eq!(draft.radius_km, "5");
        draft.toggle_category("Plumber");
        assert!(draft.categories.contains("Plumber"));
        draft.toggle_category("Plumber");
        assert!(draft.categories.is_empty());
    }
}
