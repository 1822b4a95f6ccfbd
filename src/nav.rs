//! Navigation state machine for the simulated screen.
//!
//! A single `NavState` owns the current view and the optional selected
//! project id. Every control that can cause a transition goes through
//! `navigate`; the B button goes through `back`. The transition graph is
//! deliberately flat: any view may jump to any other view, and `back` is
//! a static lookup table, not a history stack.

/// The mutually exclusive display modes the screen can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Landing screen with the typewriter greeting and clock.
    Landing,
    /// About screen: bio, skills, certifications.
    About,
    /// Projects list.
    Projects,
    /// Detail screen for the currently selected project.
    ProjectDetail,
    /// Contact form.
    Contact,
}

/// Navigation state: the single source of navigational truth.
///
/// All view-rendering code reads this immutably; only the input handlers
/// mutate it, through `navigate` and `back`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    /// Currently displayed view.
    pub current: View,
    /// Id of the project being detailed.
    ///
    /// Set only when entering `ProjectDetail`; a stale value may linger
    /// after leaving that view, which is harmless because nothing reads
    /// it unless `current` is `ProjectDetail`.
    pub selected_project: Option<String>,
}

impl NavState {
    /// Creates the startup state: landing screen, nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: View::Landing,
            selected_project: None,
        }
    }

    /// Transitions to `view`. Total and idempotent: last write wins, any
    /// view may be requested from any view.
    ///
    /// `project_id` is required in practice when `view` is
    /// `ProjectDetail` and ignored-but-stored otherwise; when `None`, the
    /// previous selection is retained.
    pub fn navigate(&mut self, view: View, project_id: Option<&str>) {
        self.current = view;
        if let Some(id) = project_id {
            self.selected_project = Some(id.to_string());
        }
    }

    /// The B-button back mapping. A static table, not a history stack:
    /// detail returns to the projects list, the three top-level sections
    /// return to landing, and landing stays put.
    ///
    /// Returns `true` when a transition happened, so the caller can give
    /// the button a different meaning on the landing screen.
    pub fn back(&mut self) -> bool {
        match self.current {
            View::ProjectDetail => {
                self.current = View::Projects;
                true
            }
            View::Projects | View::About | View::Contact => {
                self.current = View::Landing;
                true
            }
            View::Landing => false,
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_landing() {
        let nav = NavState::new();
        assert_eq!(nav.current, View::Landing);
        assert!(nav.selected_project.is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut nav = NavState::new();
        nav.navigate(View::About, None);
        nav.navigate(View::Contact, None);
        nav.navigate(View::Projects, None);
        assert_eq!(nav.current, View::Projects);
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let mut nav = NavState::new();
        nav.navigate(View::ProjectDetail, Some("2"));
        let snapshot = nav.clone();
        nav.navigate(View::ProjectDetail, Some("2"));
        assert_eq!(nav, snapshot);
    }

    #[test]
    fn test_project_selection_set_on_detail() {
        let mut nav = NavState::new();
        nav.navigate(View::ProjectDetail, Some("3"));
        assert_eq!(nav.current, View::ProjectDetail);
        assert_eq!(nav.selected_project.as_deref(), Some("3"));
    }

    #[test]
    fn test_selection_retained_without_id() {
        let mut nav = NavState::new();
        nav.navigate(View::ProjectDetail, Some("1"));
        nav.navigate(View::Contact, None);
        // Stale but harmless: nothing reads it outside ProjectDetail.
        assert_eq!(nav.selected_project.as_deref(), Some("1"));
    }

    #[test]
    fn test_back_from_detail_lands_on_projects() {
        let mut nav = NavState::new();
        nav.navigate(View::Projects, None);
        nav.navigate(View::ProjectDetail, Some("3"));
        assert!(nav.back());
        assert_eq!(nav.current, View::Projects);
    }

    #[test]
    fn test_back_is_a_table_not_a_stack() {
        let mut nav = NavState::new();
        // Reach projects via about: a stack would return to About.
        nav.navigate(View::About, None);
        nav.navigate(View::Projects, None);
        nav.navigate(View::ProjectDetail, Some("4"));
        assert!(nav.back());
        assert_eq!(nav.current, View::Projects);
        assert!(nav.back());
        assert_eq!(nav.current, View::Landing);
    }

    #[test]
    fn test_back_on_landing_is_a_no_op() {
        let mut nav = NavState::new();
        assert!(!nav.back());
        assert_eq!(nav.current, View::Landing);
    }

    #[test]
    fn test_back_from_top_level_sections() {
        for view in [View::About, View::Projects, View::Contact] {
            let mut nav = NavState::new();
            nav.navigate(view, None);
            assert!(nav.back());
            assert_eq!(nav.current, View::Landing);
        }
    }
}
