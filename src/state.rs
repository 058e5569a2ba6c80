use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::fixtures;
use crate::catalog::loader;
use crate::catalog::model::{Catalog, Course, LearnerProgress};
use crate::catalog::progress::{curriculum_totals, percent};
use crate::catalog::query::{query_indices, CatalogQuery, SortKey};
use crate::color::CategoryColors;
use crate::config::Config;
use crate::route::Route;

// ---------------------------------------------------------------------------
// Small view enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Curriculum,
    Instructor,
    Reviews,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Curriculum,
        DetailTab::Instructor,
        DetailTab::Reviews,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Curriculum => "Curriculum",
            DetailTab::Instructor => "Instructor",
            DetailTab::Reviews => "Reviews",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressTab {
    #[default]
    Courses,
    Achievements,
    Analytics,
}

impl ProgressTab {
    pub const ALL: [ProgressTab; 3] = [
        ProgressTab::Courses,
        ProgressTab::Achievements,
        ProgressTab::Analytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProgressTab::Courses => "My Courses",
            ProgressTab::Achievements => "Achievements",
            ProgressTab::Analytics => "Analytics",
        }
    }
}

/// Title used when the player opens on the course trailer.
pub const PREVIEW_TITLE: &str = "Course Preview";

/// The inline video player. Playback itself is not modelled, only the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub title: String,
    pub playing: bool,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Courses currently browsed.
    pub catalog: Catalog,

    /// Badge colour per catalog category.
    pub category_colors: CategoryColors,

    /// Mock learner data for the progress dashboard.
    pub progress: LearnerProgress,

    pub route: Route,

    /// Collapsed navigation menu (narrow windows) is expanded.
    pub menu_open: bool,

    /// Search term, filters and sort of the courses page.
    pub query: CatalogQuery,

    /// Indices into `catalog` of courses passing `query`, in display order (cached).
    pub visible_indices: Vec<usize>,

    pub view_mode: ViewMode,

    /// Ids of courses the learner enrolled in this session.
    pub enrolled: BTreeSet<String>,

    pub detail_tab: DetailTab,

    /// Open video player on the course page, if any.
    pub player: Option<PlayerState>,

    pub progress_tab: ProgressTab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(fixtures::catalog(), &Config::default())
    }
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let mut state = Self {
            category_colors: CategoryColors::new(catalog.categories()),
            catalog,
            progress: fixtures::learner_progress(),
            route: Route::default(),
            menu_open: false,
            query: CatalogQuery {
                sort: config.default_sort,
                ..CatalogQuery::default()
            },
            visible_indices: Vec::new(),
            view_mode: config.view_mode,
            enrolled: BTreeSet::new(),
            detail_tab: DetailTab::default(),
            player: None,
            progress_tab: ProgressTab::default(),
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Build the state from settings, loading the configured catalog file if any.
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(fixtures::catalog(), config);
        if let Some(path) = &config.catalog_path {
            state.load_catalog_file(path);
        }
        state
    }

    /// Preferences worth keeping for the next session.
    pub fn to_config(&self, previous: &Config) -> Config {
        Config {
            default_sort: self.query.sort,
            view_mode: self.view_mode,
            catalog_path: previous.catalog_path.clone(),
        }
    }

    // -- Catalog --

    /// Replace the catalog, reset filters and leave any page tied to the old catalog.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.category_colors = CategoryColors::new(catalog.categories());
        self.catalog = catalog;
        self.query.clear_filters();
        self.enrolled.clear();
        if matches!(self.route, Route::CourseDetails(_)) {
            self.navigate(Route::Courses);
        }
        self.refilter();
        self.status_message = None;
    }

    /// Load a catalog file; on failure keep the current catalog and report the error.
    pub fn load_catalog_file(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} courses in {} categories from {}",
                    catalog.len(),
                    catalog.categories().len(),
                    path.display()
                );
                self.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Recompute `visible_indices` after a query change.
    pub fn refilter(&mut self) {
        self.visible_indices = query_indices(self.catalog.courses(), &self.query);
        log::debug!(
            "{} of {} courses visible",
            self.visible_indices.len(),
            self.catalog.len()
        );
    }

    pub fn visible_courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.visible_indices
            .iter()
            .map(|&i| &self.catalog.courses()[i])
    }

    // -- Navigation --

    pub fn navigate(&mut self, route: Route) {
        if route != self.route {
            log::debug!("Navigating {} -> {}", self.route, route);
            if matches!(route, Route::CourseDetails(_)) {
                self.detail_tab = DetailTab::default();
                self.player = None;
            }
        }
        self.route = route;
        self.menu_open = false;
    }

    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    // -- Courses page --

    pub fn set_search_term(&mut self, term: &str) {
        self.query.term = term.to_string();
        self.refilter();
    }

    pub fn set_category(&mut self, category: &str) {
        self.query.category = category.to_string();
        self.refilter();
    }

    pub fn set_level(&mut self, level: &str) {
        self.query.level = level.to_string();
        self.refilter();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.query.clear_filters();
        self.refilter();
    }

    pub fn has_active_filters(&self) -> bool {
        self.query.has_active_filters()
    }

    /// Open the courses page filtered to a single category.
    pub fn browse_category(&mut self, category: &str) {
        self.query.clear_filters();
        self.set_category(category);
        self.navigate(Route::Courses);
    }

    // -- Course page --

    pub fn is_enrolled(&self, id: &str) -> bool {
        self.enrolled.contains(id)
    }

    /// Completed and total lessons of an enrolled course's curriculum,
    /// `None` when the learner is not enrolled.
    pub fn lesson_progress(&self, id: &str) -> Option<(u32, u32)> {
        if !self.is_enrolled(id) {
            return None;
        }
        let totals = fixtures::course_detail(&self.catalog, id)
            .map(|detail| curriculum_totals(&detail.curriculum))
            .unwrap_or((0, 0));
        Some(totals)
    }

    /// Progress shown on a course card and on the course page.
    pub fn course_progress(&self, id: &str) -> Option<u8> {
        self.lesson_progress(id)
            .map(|(done, total)| percent(done, total))
    }

    pub fn enroll(&mut self, id: &str) {
        if self.catalog.get(id).is_some() && self.enrolled.insert(id.to_string()) {
            log::info!("Enrolled in course {id}");
        }
    }

    pub fn play_lesson(&mut self, title: &str) {
        self.player = Some(PlayerState {
            title: title.to_string(),
            playing: false,
        });
    }

    pub fn preview_course(&mut self) {
        self.play_lesson(PREVIEW_TITLE);
    }

    pub fn close_player(&mut self) {
        self.player = None;
    }

    pub fn toggle_play(&mut self) {
        if let Some(player) = &mut self.player {
            player.playing = !player.playing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::query::ALL;

    fn visible_ids(state: &AppState) -> Vec<&str> {
        state.visible_courses().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn starts_on_home_with_everything_visible() {
        let state = AppState::default();
        assert_eq!(state.route, Route::Home);
        assert_eq!(visible_ids(&state), ["1", "4", "2", "6", "3", "5"]);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn config_sets_initial_sort_and_view() {
        let config = Config {
            default_sort: SortKey::PriceLow,
            view_mode: ViewMode::List,
            catalog_path: None,
        };
        let state = AppState::new(fixtures::catalog(), &config);
        assert_eq!(state.view_mode, ViewMode::List);
        assert_eq!(visible_ids(&state), ["4", "3", "6", "1", "5", "2"]);
        assert_eq!(state.to_config(&config), config);
    }

    #[test]
    fn every_change_refilters() {
        let mut state = AppState::default();
        state.set_search_term("python");
        assert_eq!(visible_ids(&state), ["6"]);

        state.set_search_term("");
        state.set_category("Web Development");
        state.set_sort(SortKey::PriceLow);
        assert_eq!(visible_ids(&state), ["1", "5"]);

        state.set_level("Advanced");
        assert_eq!(visible_ids(&state), ["5"]);

        state.set_level("Intermediate");
        assert!(visible_ids(&state).is_empty());
    }

    #[test]
    fn clear_filters_restores_full_list_but_keeps_sort() {
        let mut state = AppState::default();
        state.set_sort(SortKey::Rating);
        state.set_search_term("zzz");
        state.set_category("Design");
        assert!(state.has_active_filters());

        state.clear_filters();
        assert!(!state.has_active_filters());
        assert_eq!(state.query.category, ALL);
        assert_eq!(visible_ids(&state), ["2", "1", "5", "3", "6", "4"]);
    }

    #[test]
    fn browse_category_opens_filtered_courses() {
        let mut state = AppState::default();
        state.set_search_term("react");
        state.toggle_menu();
        state.browse_category("Data Science");

        assert_eq!(state.route, Route::Courses);
        assert!(!state.menu_open);
        assert_eq!(state.query.term, "");
        assert_eq!(visible_ids(&state), ["2", "6"]);
    }

    #[test]
    fn navigation_closes_menu() {
        let mut state = AppState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.navigate_path("/progress");
        assert_eq!(state.route, Route::Progress);
        assert!(!state.menu_open);
    }

    #[test]
    fn opening_a_course_resets_its_page() {
        let mut state = AppState::default();
        state.navigate_path("/course/1");
        state.detail_tab = DetailTab::Curriculum;
        state.play_lesson("CSS Grid System");

        state.navigate_path("/course/2");
        assert_eq!(state.detail_tab, DetailTab::Overview);
        assert!(state.player.is_none());
    }

    #[test]
    fn enrollment_is_tracked_per_course() {
        let mut state = AppState::default();
        assert!(!state.is_enrolled("1"));
        state.enroll("1");
        state.enroll("1");
        state.enroll("nope");
        assert!(state.is_enrolled("1"));
        assert_eq!(state.enrolled.len(), 1);
    }

    #[test]
    fn progress_is_shown_only_for_enrolled_courses() {
        let mut state = AppState::default();
        for course in fixtures::courses() {
            assert_eq!(
                state.course_progress(&course.id).is_some(),
                state.is_enrolled(&course.id),
                "course {}",
                course.id
            );
        }
        assert_eq!(state.course_progress("1"), None);

        state.enroll("1");
        state.enroll("5");
        assert_eq!(state.lesson_progress("1"), Some((3, 20)));
        assert_eq!(state.course_progress("1"), Some(15));
        assert_eq!(state.lesson_progress("5"), Some((0, 0)));
        assert_eq!(state.course_progress("5"), Some(0));
        assert_eq!(state.course_progress("3"), None);
    }

    #[test]
    fn card_and_course_page_agree_on_progress() {
        let mut state = AppState::default();
        state.enroll("1");

        let detail = fixtures::course_detail(&state.catalog, "1").unwrap();
        let (done, total) = curriculum_totals(&detail.curriculum);
        assert_eq!(state.course_progress("1"), Some(percent(done, total)));
    }

    #[test]
    fn player_toggles_and_closes() {
        let mut state = AppState::default();
        state.toggle_play();
        assert!(state.player.is_none());

        state.preview_course();
        assert_eq!(state.player.as_ref().map(|p| p.title.as_str()), Some(PREVIEW_TITLE));
        state.toggle_play();
        assert_eq!(state.player.as_ref().map(|p| p.playing), Some(true));
        state.toggle_play();
        assert_eq!(state.player.as_ref().map(|p| p.playing), Some(false));

        state.close_player();
        assert!(state.player.is_none());
    }

    #[test]
    fn failed_catalog_load_keeps_current_catalog() {
        let mut state = AppState::default();
        state.load_catalog_file(Path::new("/definitely/missing/catalog.json"));
        assert_eq!(state.catalog.len(), 6);
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Error:")));
    }

    #[test]
    fn new_catalog_resets_filters_and_course_page() {
        let mut state = AppState::default();
        state.set_category("Design");
        state.enroll("3");
        state.navigate_path("/course/3");

        let courses = fixtures::courses().into_iter().take(2).collect();
        state.set_catalog(Catalog::from_courses(courses).unwrap());

        assert_eq!(state.route, Route::Courses);
        assert!(state.enrolled.is_empty());
        assert_eq!(visible_ids(&state), ["1", "2"]);
    }
}
