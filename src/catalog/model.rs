use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Level – difficulty of a course
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Course – one catalog entry
// ---------------------------------------------------------------------------

/// A single course as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique within a [`Catalog`].
    pub id: String,
    pub title: String,
    pub description: String,
    /// Opaque path of the cover image; may be empty.
    #[serde(default)]
    pub image: String,
    pub instructor: String,
    /// Human-readable label, e.g. "40 hours".
    pub duration: String,
    /// Number of enrolled students.
    pub students: u32,
    pub rating: f64,
    pub price: f64,
    pub level: Level,
    pub category: String,
}

// ---------------------------------------------------------------------------
// CourseDetail – everything shown on the course page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    pub name: String,
    pub title: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub title: String,
    pub duration: String,
    pub completed: bool,
}

/// A curriculum section. `lesson_count` is the advertised number of lessons,
/// `lessons` only lists the ones published so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub lesson_count: u32,
    pub duration: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub name: String,
    /// Whole stars, 1 to 5.
    pub stars: u8,
    pub date: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetail {
    pub course: Course,
    pub instructor: Instructor,
    pub reviews: u32,
    /// List price before discount, if the course is discounted.
    pub original_price: Option<f64>,
    pub language: String,
    pub last_updated: String,
    pub what_you_will_learn: Vec<String>,
    pub curriculum: Vec<Section>,
    pub requirements: Vec<String>,
    pub features: Vec<String>,
    /// Share of reviews per star count: (stars, percent), 5 stars first.
    pub rating_breakdown: Vec<(u8, u8)>,
    pub reviews_sample: Vec<Review>,
}

impl CourseDetail {
    /// Minimal detail page for a course that has no curated content.
    pub fn from_course(course: Course) -> Self {
        let instructor = Instructor {
            name: course.instructor.clone(),
            title: String::new(),
            bio: String::new(),
        };
        CourseDetail {
            course,
            instructor,
            reviews: 0,
            original_price: None,
            language: "English".to_string(),
            last_updated: String::new(),
            what_you_will_learn: Vec::new(),
            curriculum: Vec::new(),
            requirements: Vec::new(),
            features: Vec::new(),
            rating_breakdown: Vec::new(),
            reviews_sample: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Learner progress
// ---------------------------------------------------------------------------

/// A course the learner is enrolled in, as shown on the progress dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledCourse {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    pub total_duration: String,
    pub time_spent: String,
    pub last_accessed: String,
    pub next_lesson: String,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    /// Date the achievement was earned; `None` while still locked.
    pub earned_on: Option<String>,
}

impl Achievement {
    pub fn is_earned(&self) -> bool {
        self.earned_on.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyStats {
    pub total_hours: u32,
    pub lessons_completed: u32,
    pub courses_active: u32,
    pub streak_days: u32,
    pub weekly_goal_hours: u32,
    pub completion_rate: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyHours {
    pub label: String,
    pub hours: u32,
}

/// Everything the progress dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct LearnerProgress {
    pub enrolled: Vec<EnrolledCourse>,
    pub achievements: Vec<Achievement>,
    pub weekly: WeeklyStats,
    pub monthly: Vec<WeeklyHours>,
}

// ---------------------------------------------------------------------------
// Catalog – the validated course collection
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate course id '{0}'")]
    DuplicateId(String),
}

/// The full course collection with a pre-computed category index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
    /// Categories in order of first appearance.
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting collections with repeated ids.
    pub fn from_courses(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen_ids = BTreeSet::new();
        let mut categories: Vec<String> = Vec::new();

        for course in &courses {
            if !seen_ids.insert(course.id.as_str()) {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
            if !categories.contains(&course.category) {
                categories.push(course.category.clone());
            }
        }

        Ok(Catalog {
            courses,
            categories,
        })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Number of courses listed under `category`.
    pub fn count_in_category(&self, category: &str) -> usize {
        self.courses.iter().filter(|c| c.category == category).count()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut courses = fixtures::courses();
        let mut dup = courses[0].clone();
        dup.title = "Another title".to_string();
        courses.push(dup);

        let err = Catalog::from_courses(courses).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("1".to_string()));
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let catalog = fixtures::catalog();
        assert_eq!(
            catalog.categories(),
            ["Web Development", "Data Science", "Design", "Marketing"]
        );
    }

    #[test]
    fn count_in_category_and_lookup() {
        let catalog = fixtures::catalog();
        assert_eq!(catalog.count_in_category("Web Development"), 2);
        assert_eq!(catalog.count_in_category("Cooking"), 0);
        assert_eq!(
            catalog.get("6").map(|c| c.title.as_str()),
            Some("Python for Data Analysis")
        );
        assert!(catalog.get("42").is_none());
    }

    #[test]
    fn level_display_matches_filter_strings() {
        let names: Vec<String> = Level::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, ["Beginner", "Intermediate", "Advanced"]);
    }
}
