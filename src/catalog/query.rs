use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::Course;

/// Filter value that disables the category or level filter.
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Sort key
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most students first.
    #[default]
    Popular,
    /// Highest rating first.
    Rating,
    PriceLow,
    PriceHigh,
    /// Anything unrecognised: keep the input order.
    #[serde(other)]
    Unsorted,
}

impl SortKey {
    /// The keys offered in the "Sort by" selector.
    pub const CHOICES: [SortKey; 4] = [
        SortKey::Popular,
        SortKey::Rating,
        SortKey::PriceLow,
        SortKey::PriceHigh,
    ];

    /// Parse a sort key name. Unknown names map to [`SortKey::Unsorted`].
    pub fn parse(s: &str) -> SortKey {
        match s {
            "popular" => SortKey::Popular,
            "rating" => SortKey::Rating,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::Rating => "rating",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Unsorted => "unsorted",
        }
    }

    /// Label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Popular => "Most Popular",
            SortKey::Rating => "Highest Rated",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Unsorted => "Catalog Order",
        }
    }

    fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortKey::Popular => b.students.cmp(&a.students),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::PriceLow => a.price.total_cmp(&b.price),
            SortKey::PriceHigh => b.price.total_cmp(&a.price),
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A requested view of the catalog.
///
/// `category` and `level` are compared literally against the course fields;
/// only the exact string [`ALL`] disables them.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub term: String,
    pub category: String,
    pub level: String,
    pub sort: SortKey,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: ALL.to_string(),
            level: ALL.to_string(),
            sort: SortKey::default(),
        }
    }
}

impl CatalogQuery {
    /// Whether term, category or level restrict the result.
    pub fn has_active_filters(&self) -> bool {
        !self.term.is_empty() || self.category != ALL || self.level != ALL
    }

    /// Reset term, category and level. The sort key is kept.
    pub fn clear_filters(&mut self) {
        self.term.clear();
        self.category = ALL.to_string();
        self.level = ALL.to_string();
    }
}

/// Return indices of the courses that pass `query`, in display order.
///
/// A course passes when:
/// * `term` is empty, or occurs case-insensitively in the title or description
/// * `category` is [`ALL`] or equals the course category
/// * `level` is [`ALL`] or equals the course level
///
/// The sort is stable: equal keys keep their input order.
pub fn query_indices(courses: &[Course], query: &CatalogQuery) -> Vec<usize> {
    let needle = query.term.to_lowercase();

    let mut indices: Vec<usize> = courses
        .iter()
        .enumerate()
        .filter(|(_, course)| {
            matches_term(course, &needle)
                && (query.category == ALL || course.category == query.category)
                && (query.level == ALL || course.level.as_str() == query.level)
        })
        .map(|(i, _)| i)
        .collect();

    indices.sort_by(|&a, &b| query.sort.compare(&courses[a], &courses[b]));
    indices
}

/// Like [`query_indices`] but returns the courses themselves.
pub fn query<'a>(courses: &'a [Course], query: &CatalogQuery) -> Vec<&'a Course> {
    query_indices(courses, query)
        .into_iter()
        .map(|i| &courses[i])
        .collect()
}

/// `needle` must already be lowercase.
fn matches_term(course: &Course, needle: &str) -> bool {
    needle.is_empty()
        || course.title.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::catalog::model::Level;

    fn q(term: &str, category: &str, level: &str, sort: SortKey) -> CatalogQuery {
        CatalogQuery {
            term: term.to_string(),
            category: category.to_string(),
            level: level.to_string(),
            sort,
        }
    }

    fn ids(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|c| c.id.clone()).collect()
    }

    fn course(id: &str, rating: f64, price: f64, students: u32) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Course {id}"),
            description: String::new(),
            image: String::new(),
            instructor: "Someone".to_string(),
            duration: "1 hour".to_string(),
            students,
            rating,
            price,
            level: Level::Beginner,
            category: "Misc".to_string(),
        }
    }

    #[test]
    fn python_search_finds_single_course() {
        let courses = fixtures::courses();
        let result = query(&courses, &q("python", ALL, ALL, SortKey::Popular));
        assert_eq!(ids(&result), ["6"]);
        assert_eq!(result[0].title, "Python for Data Analysis");
    }

    #[test]
    fn category_filter_sorted_by_price_low() {
        let courses = fixtures::courses();
        let result = query(&courses, &q("", "Web Development", ALL, SortKey::PriceLow));
        assert_eq!(ids(&result), ["1", "5"]);
        assert_eq!(result[0].price, 89.0);
        assert_eq!(result[1].price, 99.0);
    }

    #[test]
    fn level_filter_advanced() {
        let courses = fixtures::courses();
        let result = query(&courses, &q("", ALL, "Advanced", SortKey::Popular));
        assert_eq!(ids(&result), ["5"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let courses = fixtures::courses();
        let upper = query(&courses, &q("REACT", ALL, ALL, SortKey::Popular));
        let lower = query(&courses, &q("react", ALL, ALL, SortKey::Popular));
        assert_eq!(upper, lower);
        // "React" appears in the description of 1 and the title of 5.
        assert_eq!(ids(&upper), ["1", "5"]);
    }

    #[test]
    fn term_matches_description_only() {
        let courses = fixtures::courses();
        let result = query(&courses, &q("figma", ALL, ALL, SortKey::Popular));
        assert_eq!(ids(&result), ["3"]);
    }

    #[test]
    fn popular_sorts_by_students_descending() {
        let courses = fixtures::courses();
        let result = query(&courses, &CatalogQuery::default());
        assert_eq!(ids(&result), ["1", "4", "2", "6", "3", "5"]);
    }

    #[test]
    fn result_is_a_subset_of_input() {
        let courses = fixtures::courses();
        for sort in SortKey::CHOICES {
            for result in [
                query(&courses, &q("data", ALL, ALL, sort)),
                query(&courses, &q("", "Design", "Beginner", sort)),
                query(&courses, &q("e", ALL, "Beginner", sort)),
            ] {
                assert!(result.iter().all(|c| courses.contains(c)));
                assert!(result.len() <= courses.len());
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let courses = fixtures::courses();
        let query_ = q("learn", "Data Science", ALL, SortKey::Rating);
        let once: Vec<Course> = query(&courses, &query_).into_iter().cloned().collect();
        let twice: Vec<Course> = query(&once, &query_).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn price_low_reversed_equals_price_high_without_ties() {
        let courses = vec![
            course("a", 4.0, 30.0, 10),
            course("b", 4.0, 10.0, 20),
            course("c", 4.0, 20.0, 30),
        ];
        let mut low = ids(&query(&courses, &q("", ALL, ALL, SortKey::PriceLow)));
        let high = ids(&query(&courses, &q("", ALL, ALL, SortKey::PriceHigh)));
        low.reverse();
        assert_eq!(low, high);
        assert_eq!(high, ["a", "c", "b"]);
    }

    #[test]
    fn equal_ratings_keep_input_order() {
        let courses = fixtures::courses();
        let result = query(&courses, &q("", ALL, ALL, SortKey::Rating));
        // 1 and 5 share 4.8, 3 and 6 share 4.7.
        assert_eq!(ids(&result), ["2", "1", "5", "3", "6", "4"]);
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let courses = fixtures::courses();
        let result = query(&courses, &q("", ALL, ALL, SortKey::PriceHigh));
        assert_eq!(ids(&result), ["2", "5", "1", "3", "6", "4"]);
    }

    #[test]
    fn unknown_sort_key_keeps_input_order() {
        let courses = fixtures::courses();
        let result = query(&courses, &q("", ALL, ALL, SortKey::parse("newest")));
        assert_eq!(ids(&result), ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn unknown_category_or_level_excludes_everything() {
        let courses = fixtures::courses();
        assert!(query(&courses, &q("", "Cooking", ALL, SortKey::Popular)).is_empty());
        assert!(query(&courses, &q("", "web development", ALL, SortKey::Popular)).is_empty());
        assert!(query(&courses, &q("", ALL, "Expert", SortKey::Popular)).is_empty());
        assert!(query(&courses, &q("", "All", ALL, SortKey::Popular)).is_empty());
    }

    #[test]
    fn empty_inputs_yield_empty_results() {
        assert!(query(&[], &CatalogQuery::default()).is_empty());
        let courses = fixtures::courses();
        assert!(query(&courses, &q("quantum knitting", ALL, ALL, SortKey::Popular)).is_empty());
    }

    #[test]
    fn sort_key_names_round_trip() {
        for key in SortKey::CHOICES {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::parse("PRICE-LOW"), SortKey::Unsorted);
    }

    #[test]
    fn clear_filters_keeps_sort() {
        let mut query_ = q("react", "Web Development", "Advanced", SortKey::PriceHigh);
        assert!(query_.has_active_filters());
        query_.clear_filters();
        assert!(!query_.has_active_filters());
        assert_eq!(query_.sort, SortKey::PriceHigh);
    }
}
