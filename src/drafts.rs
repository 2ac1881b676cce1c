//! Milestone drafts and their validation
//!
//! A [`DraftList`] holds the milestones a user is editing before submission.
//! It always offers at least one slot. [`validate`] narrows it down to the
//! drafts that are complete enough to send.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An unpersisted milestone being edited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneDraft {
    /// Milestone title
    #[serde(default)]
    pub title: String,
    /// Milestone detail
    #[serde(default)]
    pub description: String,
    /// Deadline date string (YYYY-MM-DD from the date picker)
    #[serde(default)]
    pub deadline: String,
    /// Budget as a numeric string
    #[serde(default)]
    pub budget: String,
}

/// Editable field of a [`MilestoneDraft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Title
    Title,
    /// Description
    Description,
    /// Deadline
    Deadline,
    /// Budget
    Budget,
}

impl DraftField {
    /// All fields in form order
    pub const ALL: [Self; 4] = [Self::Title, Self::Budget, Self::Description, Self::Deadline];

    /// Human-readable label used by prompts
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Milestone Title",
            Self::Description => "Milestone Detail",
            Self::Deadline => "Deadline",
            Self::Budget => "Budget (USD)",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Deadline => "deadline",
            Self::Budget => "budget",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "deadline" => Ok(Self::Deadline),
            "budget" => Ok(Self::Budget),
            other => Err(format!("unknown milestone field: {other}")),
        }
    }
}

impl MilestoneDraft {
    /// Read a single field
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Deadline => &self.deadline,
            DraftField::Budget => &self.budget,
        }
    }

    /// Replace a single field
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Deadline => self.deadline = value,
            DraftField::Budget => self.budget = value,
        }
    }

    /// Whether the draft may be submitted
    ///
    /// Text fields are trimmed; deadline and budget only need to be
    /// non-empty. Budget is not checked for being numeric.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.deadline.is_empty()
            && !self.budget.is_empty()
    }
}

/// Ordered list of drafts, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftList {
    drafts: Vec<MilestoneDraft>,
}

impl Default for DraftList {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftList {
    /// A list with a single empty draft
    pub fn new() -> Self {
        Self {
            drafts: vec![MilestoneDraft::default()],
        }
    }

    /// Build a list from existing drafts (an empty input yields one empty slot)
    pub fn from_drafts(drafts: Vec<MilestoneDraft>) -> Self {
        if drafts.is_empty() {
            Self::new()
        } else {
            Self { drafts }
        }
    }

    /// Append an empty draft
    pub fn add(&mut self) {
        self.drafts.push(MilestoneDraft::default());
    }

    /// Replace one field of the draft at `index`; out-of-range is a no-op
    pub fn update(&mut self, index: usize, field: DraftField, value: impl Into<String>) {
        if let Some(draft) = self.drafts.get_mut(index) {
            draft.set(field, value.into());
        } else {
            tracing::warn!(index, len = self.drafts.len(), "ignoring update of missing draft");
        }
    }

    /// Remove the draft at `index` unless it is the last one left
    ///
    /// Returns whether a draft was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.drafts.len() <= 1 || index >= self.drafts.len() {
            return false;
        }
        self.drafts.remove(index);
        true
    }

    /// Number of drafts (at least 1)
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Draft at `index`
    pub fn get(&self, index: usize) -> Option<&MilestoneDraft> {
        self.drafts.get(index)
    }

    /// Drafts in display order
    pub fn as_slice(&self) -> &[MilestoneDraft] {
        &self.drafts
    }

    /// Iterate drafts in display order
    pub fn iter(&self) -> std::slice::Iter<'_, MilestoneDraft> {
        self.drafts.iter()
    }

    /// Label for the submit action
    pub fn submit_label(&self, submitting: bool) -> String {
        if submitting {
            return "Creating...".to_string();
        }
        let n = self.drafts.len();
        format!("Create {n} Milestone{}", if n > 1 { "s" } else { "" })
    }
}

impl<'a> IntoIterator for &'a DraftList {
    type Item = &'a MilestoneDraft;
    type IntoIter = std::slice::Iter<'a, MilestoneDraft>;

    fn into_iter(self) -> Self::IntoIter {
        self.drafts.iter()
    }
}

/// A draft that passed validation, with its position in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    /// Index in the originating [`DraftList`]
    pub index: usize,
    /// The draft itself
    pub draft: MilestoneDraft,
}

/// Keep only complete drafts, preserving order
pub fn validate(drafts: &[MilestoneDraft]) -> Vec<ValidDraft> {
    drafts
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_complete())
        .map(|(index, d)| ValidDraft {
            index,
            draft: d.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(title: &str) -> MilestoneDraft {
        MilestoneDraft {
            title: title.to_string(),
            description: format!("{title} detail"),
            deadline: "2025-06-30".to_string(),
            budget: "1000".to_string(),
        }
    }

    #[test]
    fn test_new_list_has_one_empty_slot() {
        let list = DraftList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some(&MilestoneDraft::default()));
    }

    #[test]
    fn test_add_appends_empty_draft() {
        let mut list = DraftList::from_drafts(vec![complete("a"), complete("b")]);
        list.add();

        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), Some(&complete("a")));
        assert_eq!(list.get(2), Some(&MilestoneDraft::default()));
    }

    #[test]
    fn test_remove_keeps_last_slot() {
        let mut list = DraftList::new();
        assert!(!list.remove(0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_by_index() {
        let mut list = DraftList::from_drafts(vec![complete("a"), complete("b"), complete("c")]);
        assert!(list.remove(1));

        let titles: Vec<&str> = list.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut list = DraftList::from_drafts(vec![complete("a"), complete("b")]);
        assert!(!list.remove(5));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_update_touches_only_target_field() {
        let mut list = DraftList::from_drafts(vec![complete("a"), complete("b")]);
        list.update(1, DraftField::Budget, "2500");

        assert_eq!(list.get(0), Some(&complete("a")));
        let b = list.get(1).unwrap();
        assert_eq!(b.budget, "2500");
        assert_eq!(b.title, "b");
        assert_eq!(b.deadline, "2025-06-30");
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let mut list = DraftList::new();
        list.update(3, DraftField::Title, "ghost");
        assert_eq!(list, DraftList::new());
    }

    #[test]
    fn test_from_empty_drafts_yields_one_slot() {
        assert_eq!(DraftList::from_drafts(vec![]).len(), 1);
    }

    #[test]
    fn test_validate_excludes_each_blank_field() {
        for field in DraftField::ALL {
            let mut draft = complete("x");
            draft.set(field, String::new());
            assert!(validate(&[draft]).is_empty(), "blank {field} should be excluded");
        }
    }

    #[test]
    fn test_validate_trims_text_fields_only() {
        let mut blank_title = complete("x");
        blank_title.title = "   ".to_string();
        let mut blank_desc = complete("x");
        blank_desc.description = "\n\t".to_string();
        assert!(validate(&[blank_title, blank_desc]).is_empty());

        // Deadline and budget are only checked for emptiness
        let mut spacey = complete("x");
        spacey.budget = " ".to_string();
        spacey.deadline = " ".to_string();
        assert_eq!(validate(&[spacey]).len(), 1);
    }

    #[test]
    fn test_validate_does_not_check_budget_is_numeric() {
        let mut draft = complete("x");
        draft.budget = "lots".to_string();
        assert_eq!(validate(&[draft]).len(), 1);
    }

    #[test]
    fn test_validate_preserves_order_and_indices() {
        let drafts = vec![
            complete("a"),
            MilestoneDraft::default(),
            complete("b"),
            complete("c"),
        ];

        let valid = validate(&drafts);
        let got: Vec<(usize, &str)> = valid.iter().map(|v| (v.index, v.draft.title.as_str())).collect();
        assert_eq!(got, vec![(0, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_submit_label() {
        let mut list = DraftList::new();
        assert_eq!(list.submit_label(false), "Create 1 Milestone");
        list.add();
        assert_eq!(list.submit_label(false), "Create 2 Milestones");
        assert_eq!(list.submit_label(true), "Creating...");
    }

    #[test]
    fn test_draft_field_parse() {
        assert_eq!("deadline".parse::<DraftField>(), Ok(DraftField::Deadline));
        assert!("due".parse::<DraftField>().is_err());
    }
}
