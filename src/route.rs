use std::fmt;

// ---------------------------------------------------------------------------
// Route – which page is on screen
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Courses,
    /// `/course/{id}`; the id is opaque and may not exist in the catalog.
    CourseDetails(String),
    Progress,
    Categories,
    NotFound(String),
}

/// Links shown in the navigation bar: (label, path).
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Courses", "/courses"),
    ("My Progress", "/progress"),
    ("Categories", "/categories"),
];

impl Route {
    pub fn parse(path: &str) -> Route {
        match path {
            "/" | "" => Route::Home,
            "/courses" => Route::Courses,
            "/progress" => Route::Progress,
            "/categories" => Route::Categories,
            _ => match path.strip_prefix("/course/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::CourseDetails(id.to_string())
                }
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Courses => "/courses".to_string(),
            Route::CourseDetails(id) => format!("/course/{id}"),
            Route::Progress => "/progress".to_string(),
            Route::Categories => "/categories".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether a navigation link pointing at `path` is the current page.
    pub fn is_active(&self, path: &str) -> bool {
        self.path() == path
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/courses"), Route::Courses);
        assert_eq!(Route::parse("/progress"), Route::Progress);
        assert_eq!(Route::parse("/categories"), Route::Categories);
        assert_eq!(
            Route::parse("/course/5"),
            Route::CourseDetails("5".to_string())
        );
    }

    #[test]
    fn malformed_course_paths_are_not_found() {
        assert_eq!(
            Route::parse("/course/"),
            Route::NotFound("/course/".to_string())
        );
        assert_eq!(
            Route::parse("/course/1/extra"),
            Route::NotFound("/course/1/extra".to_string())
        );
        assert_eq!(Route::parse("/pricing"), Route::NotFound("/pricing".to_string()));
    }

    #[test]
    fn nav_links_resolve_and_highlight() {
        for (_, path) in NAV_LINKS {
            let route = Route::parse(path);
            assert!(!matches!(route, Route::NotFound(_)));
            assert!(route.is_active(path));
        }
        assert!(!Route::CourseDetails("1".to_string()).is_active("/courses"));
    }
}
