use shared::models::{Education, ProfileDraft, Project, Skill};

/// First wizard step (basic info).
pub const FIRST_STEP: u8 = 1;
/// Last wizard step (education and resume).
pub const LAST_STEP: u8 = 4;

/// State of the four-step onboarding wizard.
///
/// Holds the accumulating [`ProfileDraft`] plus one "current entry" per
/// collection. Add actions validate the current entry, append a copy on
/// success and reset the entry to defaults; failures leave both the entry
/// and the collection untouched and bubble the message up for a toast.
/// The resume file is staged separately by the page; it is not part of the
/// serialized draft.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingForm {
    /// Current step, always within `FIRST_STEP..=LAST_STEP`.
    pub step: u8,
    /// The accumulating profile.
    pub draft: ProfileDraft,
    /// Skill entry being edited on step 2.
    pub skill_entry: Skill,
    /// Project entry being edited on step 3.
    pub project_entry: Project,
    /// Education entry being edited on step 4.
    pub education_entry: Education,
    /// Pending role tag (step 1).
    pub role_entry: String,
    /// Pending interest tag (step 1).
    pub interest_entry: String,
    /// Pending tech-stack tag for the current project (step 3).
    pub stack_entry: String,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            step: FIRST_STEP,
            draft: ProfileDraft::default(),
            skill_entry: Skill::default(),
            project_entry: Project::default(),
            education_entry: Education::default(),
            role_entry: String::new(),
            interest_entry: String::new(),
            stack_entry: String::new(),
        }
    }
}

impl OnboardingForm {
    /// Start a fresh wizard, prefilling the name from the session identity.
    pub fn new(name: Option<&str>) -> Self {
        let mut form = Self::default();
        if let Some(name) = name {
            form.draft.name = name.to_string();
        }
        form
    }

    /// Advance one step, clamped at the last step.
    pub fn next_step(&mut self) {
        self.step = (self.step + 1).min(LAST_STEP);
    }

    /// Go back one step, clamped at the first step.
    pub fn previous_step(&mut self) {
        self.step = self.step.saturating_sub(1).max(FIRST_STEP);
    }

    /// Completion percentage for the progress bar.
    pub fn progress_percent(&self) -> u32 {
        u32::from(self.step) * 100 / u32::from(LAST_STEP)
    }

    /// Validate the current skill entry and admit it into the draft.
    ///
    /// On success the entry resets to defaults. On failure nothing changes
    /// and the user-facing message is returned.
    pub fn add_skill(&mut self) -> Result<(), &'static str> {
        self.skill_entry.validate()?;
        self.draft.skills.push(self.skill_entry.clone());
        self.skill_entry = Skill::default();
        Ok(())
    }

    /// Remove the skill at `index`; out-of-range indices are a no-op.
    pub fn remove_skill(&mut self, index: usize) {
        if index < self.draft.skills.len() {
            self.draft.skills.remove(index);
        }
    }

    /// Validate the current project entry and admit it into the draft.
    pub fn add_project(&mut self) -> Result<(), &'static str> {
        self.project_entry.validate()?;
        self.draft.projects.push(self.project_entry.clone());
        self.project_entry = Project::default();
        self.stack_entry.clear();
        Ok(())
    }

    /// Remove the project at `index`; out-of-range indices are a no-op.
    pub fn remove_project(&mut self, index: usize) {
        if index < self.draft.projects.len() {
            self.draft.projects.remove(index);
        }
    }

    /// Validate the current education entry and admit it into the draft.
    pub fn add_education(&mut self) -> Result<(), &'static str> {
        self.education_entry.validate()?;
        self.draft.education.push(self.education_entry.clone());
        self.education_entry = Education::default();
        Ok(())
    }

    /// Remove the education entry at `index`; out-of-range is a no-op.
    pub fn remove_education(&mut self, index: usize) {
        if index < self.draft.education.len() {
            self.draft.education.remove(index);
        }
    }

    /// Commit the pending role tag. Enter key and the add button both land
    /// here; empty input is ignored.
    pub fn commit_role(&mut self) {
        commit_tag(&mut self.role_entry, &mut self.draft.roles);
    }

    /// Remove the role at `index`.
    pub fn remove_role(&mut self, index: usize) {
        if index < self.draft.roles.len() {
            self.draft.roles.remove(index);
        }
    }

    /// Commit the pending interest tag.
    pub fn commit_interest(&mut self) {
        commit_tag(&mut self.interest_entry, &mut self.draft.interests);
    }

    /// Remove the interest at `index`.
    pub fn remove_interest(&mut self, index: usize) {
        if index < self.draft.interests.len() {
            self.draft.interests.remove(index);
        }
    }

    /// Commit the pending tech-stack tag into the current project entry.
    pub fn commit_stack_item(&mut self) {
        commit_tag(&mut self.stack_entry, &mut self.project_entry.stack);
    }

    /// Remove the stack tag at `index` from the current project entry.
    pub fn remove_stack_item(&mut self, index: usize) {
        if index < self.project_entry.stack.len() {
            self.project_entry.stack.remove(index);
        }
    }

    /// Whether final submission must be blocked (no skills yet).
    pub fn submit_blocked(&self) -> bool {
        self.draft.submit_blocked()
    }
}

/// Shared non-empty check for all tag-like collections; trims, appends and
/// clears the pending value in one place.
fn commit_tag(entry: &mut String, collection: &mut Vec<String>) {
    let value = entry.trim();
    if value.is_empty() {
        return;
    }
    collection.push(value.to_string());
    entry.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_skill() -> Skill {
        Skill {
            name: "React".to_string(),
            years: 2.0,
            last_used: None,
            level: 5,
        }
    }

    #[test]
    fn test_step_starts_at_one() {
        assert_eq!(OnboardingForm::default().step, FIRST_STEP);
    }

    #[test]
    fn test_step_clamps_at_bounds() {
        let mut form = OnboardingForm::default();
        form.previous_step();
        form.previous_step();
        assert_eq!(form.step, FIRST_STEP);

        for _ in 0..10 {
            form.next_step();
        }
        assert_eq!(form.step, LAST_STEP);
    }

    #[test]
    fn test_step_clamped_under_arbitrary_sequences() {
        let mut form = OnboardingForm::default();
        let moves = [1, 1, -1, 1, 1, 1, 1, -1, -1, -1, -1, -1, 1];
        for delta in moves {
            if delta > 0 {
                form.next_step();
            } else {
                form.previous_step();
            }
            assert!((FIRST_STEP..=LAST_STEP).contains(&form.step));
        }
    }

    #[test]
    fn test_progress_percent() {
        let mut form = OnboardingForm::default();
        assert_eq!(form.progress_percent(), 25);
        form.next_step();
        assert_eq!(form.progress_percent(), 50);
        form.next_step();
        form.next_step();
        assert_eq!(form.progress_percent(), 100);
    }

    #[test]
    fn test_add_skill_appends_and_resets_entry() {
        let mut form = OnboardingForm::default();
        form.skill_entry = valid_skill();
        assert!(form.add_skill().is_ok());
        assert_eq!(form.draft.skills.len(), 1);
        assert_eq!(form.draft.skills[0].name, "React");
        assert_eq!(form.skill_entry, Skill::default());
    }

    #[test]
    fn test_failing_add_never_changes_length() {
        let mut form = OnboardingForm::default();
        form.skill_entry = Skill {
            name: String::new(),
            years: 2.0,
            ..Skill::default()
        };
        assert!(form.add_skill().is_err());
        assert!(form.draft.skills.is_empty());

        form.skill_entry = Skill {
            name: "React".to_string(),
            years: 0.0,
            ..Skill::default()
        };
        assert!(form.add_skill().is_err());
        assert!(form.draft.skills.is_empty());
        // The failed entry is preserved for correction.
        assert_eq!(form.skill_entry.name, "React");
    }

    #[test]
    fn test_collection_length_tracks_adds_minus_removes() {
        let mut form = OnboardingForm::default();
        let mut successful_adds = 0;
        for (name, years) in [("React", 2.0), ("", 3.0), ("Rust", 4.0), ("Go", 0.0)] {
            form.skill_entry = Skill {
                name: name.to_string(),
                years,
                ..Skill::default()
            };
            if form.add_skill().is_ok() {
                successful_adds += 1;
            }
        }
        assert_eq!(form.draft.skills.len(), successful_adds);
        assert_eq!(successful_adds, 2);

        form.remove_skill(0);
        assert_eq!(form.draft.skills.len(), 1);
        assert_eq!(form.draft.skills[0].name, "Rust");

        // Out-of-range removes are no-ops.
        form.remove_skill(10);
        assert_eq!(form.draft.skills.len(), 1);
    }

    #[test]
    fn test_remove_available_regardless_of_step() {
        let mut form = OnboardingForm::default();
        form.skill_entry = valid_skill();
        form.add_skill().unwrap();
        form.next_step();
        form.next_step();
        form.remove_skill(0);
        assert!(form.draft.skills.is_empty());
    }

    #[test]
    fn test_add_project_resets_pending_stack_tag() {
        let mut form = OnboardingForm::default();
        form.project_entry = Project {
            title: "Shop".to_string(),
            description: "Storefront".to_string(),
            stack: vec!["React".to_string()],
        };
        form.stack_entry = "half-typed".to_string();
        assert!(form.add_project().is_ok());
        assert_eq!(form.draft.projects.len(), 1);
        assert_eq!(form.project_entry, Project::default());
        assert!(form.stack_entry.is_empty());
    }

    #[test]
    fn test_add_education_validates() {
        let mut form = OnboardingForm::default();
        assert!(form.add_education().is_err());
        assert!(form.draft.education.is_empty());

        form.education_entry = Education {
            degree: "B.S.".to_string(),
            institution: "MIT".to_string(),
            year: Some("2020".to_string()),
        };
        assert!(form.add_education().is_ok());
        assert_eq!(form.draft.education.len(), 1);
    }

    #[test]
    fn test_tag_commit_ignores_empty_and_whitespace() {
        let mut form = OnboardingForm::default();
        form.commit_role();
        assert!(form.draft.roles.is_empty());

        form.role_entry = "   ".to_string();
        form.commit_role();
        assert!(form.draft.roles.is_empty());

        form.role_entry = " Backend Developer ".to_string();
        form.commit_role();
        assert_eq!(form.draft.roles, vec!["Backend Developer".to_string()]);
        assert!(form.role_entry.is_empty());
    }

    #[test]
    fn test_stack_tags_accumulate_on_project_entry() {
        let mut form = OnboardingForm::default();
        for item in ["React", "Node.js"] {
            form.stack_entry = item.to_string();
            form.commit_stack_item();
        }
        assert_eq!(form.project_entry.stack.len(), 2);

        form.remove_stack_item(0);
        assert_eq!(form.project_entry.stack, vec!["Node.js".to_string()]);
    }

    #[test]
    fn test_submit_blocked_until_a_skill_exists() {
        let mut form = OnboardingForm::default();
        assert!(form.submit_blocked());
        form.skill_entry = valid_skill();
        form.add_skill().unwrap();
        assert!(!form.submit_blocked());
    }

    #[test]
    fn test_new_prefills_name() {
        let form = OnboardingForm::new(Some("Ada Lovelace"));
        assert_eq!(form.draft.name, "Ada Lovelace");
        assert!(OnboardingForm::new(None).draft.name.is_empty());
    }
}
