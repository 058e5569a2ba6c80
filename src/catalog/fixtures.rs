//! Built-in mock content shown when no catalog file is configured.

use super::model::{
    Achievement, Catalog, Course, CourseDetail, EnrolledCourse, Instructor, LearnerProgress,
    Lesson, Level, Review, Section, WeeklyHours, WeeklyStats,
};

const WEB_DEV_IMAGE: &str = "assets/course-web-dev.jpg";
const DATA_SCIENCE_IMAGE: &str = "assets/course-data-science.jpg";
const UI_UX_IMAGE: &str = "assets/course-ui-ux.jpg";
const MARKETING_IMAGE: &str = "assets/course-marketing.jpg";

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    instructor: &str,
    duration: &str,
    students: u32,
    rating: f64,
    price: f64,
    level: Level,
    category: &str,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        instructor: instructor.to_string(),
        duration: duration.to_string(),
        students,
        rating,
        price,
        level,
        category: category.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Course catalog
// ---------------------------------------------------------------------------

/// The six-course catalog.
pub fn courses() -> Vec<Course> {
    vec![
        course(
            "1",
            "Complete Web Development Bootcamp",
            "Learn HTML, CSS, JavaScript, React, and Node.js from scratch. Build 10+ real-world projects and become a full-stack developer.",
            WEB_DEV_IMAGE,
            "Sarah Johnson",
            "40 hours",
            12500,
            4.8,
            89.0,
            Level::Beginner,
            "Web Development",
        ),
        course(
            "2",
            "Data Science & Machine Learning",
            "Master pandas, scikit-learn, and TensorFlow. Analyze data, build predictive models, and become a data scientist.",
            DATA_SCIENCE_IMAGE,
            "Dr. Michael Chen",
            "60 hours",
            8200,
            4.9,
            129.0,
            Level::Intermediate,
            "Data Science",
        ),
        course(
            "3",
            "UI/UX Design Masterclass",
            "Create beautiful, user-friendly designs. Learn Figma, design principles, user research, and prototyping.",
            UI_UX_IMAGE,
            "Emma Wilson",
            "35 hours",
            6800,
            4.7,
            79.0,
            Level::Beginner,
            "Design",
        ),
        course(
            "4",
            "Digital Marketing Strategy",
            "Build comprehensive marketing campaigns. Master SEO, social media marketing, email campaigns, and analytics.",
            MARKETING_IMAGE,
            "David Rodriguez",
            "25 hours",
            9500,
            4.6,
            69.0,
            Level::Beginner,
            "Marketing",
        ),
        course(
            "5",
            "Advanced React Development",
            "Deep dive into React hooks, context, performance optimization, testing, and modern React patterns.",
            WEB_DEV_IMAGE,
            "Alex Thompson",
            "30 hours",
            5200,
            4.8,
            99.0,
            Level::Advanced,
            "Web Development",
        ),
        course(
            "6",
            "Python for Data Analysis",
            "Learn Python fundamentals and data analysis with pandas, NumPy, and matplotlib. Perfect for beginners.",
            DATA_SCIENCE_IMAGE,
            "Lisa Chang",
            "28 hours",
            7100,
            4.7,
            79.0,
            Level::Beginner,
            "Data Science",
        ),
    ]
}

/// The built-in catalog. Fixture ids are unique, so this never fails.
pub fn catalog() -> Catalog {
    Catalog::from_courses(courses()).unwrap_or_default()
}

/// Courses highlighted on the home page.
pub fn featured(catalog: &Catalog) -> Vec<&Course> {
    catalog.courses().iter().take(4).collect()
}

/// Headline figures on the home page: (label, value).
pub fn site_stats() -> [(&'static str, &'static str); 4] {
    [
        ("Courses", "1,200+"),
        ("Students", "100K+"),
        ("Average Rating", "4.8"),
        ("Certificates", "50K+"),
    ]
}

// ---------------------------------------------------------------------------
// Course details
// ---------------------------------------------------------------------------

fn lesson(title: &str, duration: &str, completed: bool) -> Lesson {
    Lesson {
        title: title.to_string(),
        duration: duration.to_string(),
        completed,
    }
}

fn section(title: &str, lesson_count: u32, duration: &str, lessons: Vec<Lesson>) -> Section {
    Section {
        title: title.to_string(),
        lesson_count,
        duration: duration.to_string(),
        lessons,
    }
}

fn review(name: &str, stars: u8, date: &str, comment: &str) -> Review {
    Review {
        name: name.to_string(),
        stars,
        date: date.to_string(),
        comment: comment.to_string(),
    }
}

/// Detail page content for a catalog course. Course `1` carries the curated
/// curriculum; the others get a minimal page built from the listing.
pub fn course_detail(catalog: &Catalog, id: &str) -> Option<CourseDetail> {
    let course = catalog.get(id)?.clone();
    if id != "1" {
        return Some(CourseDetail::from_course(course));
    }

    Some(CourseDetail {
        course,
        instructor: Instructor {
            name: "Sarah Johnson".to_string(),
            title: "Senior Full Stack Developer".to_string(),
            bio: "Sarah is a senior full-stack developer with 8+ years of experience at top tech companies. She has taught over 50,000 students and specializes in modern web technologies.".to_string(),
        },
        reviews: 2450,
        original_price: Some(199.0),
        language: "English".to_string(),
        last_updated: "2024-01-15".to_string(),
        what_you_will_learn: strings(&[
            "Build responsive websites with HTML5 and CSS3",
            "Master JavaScript fundamentals and ES6+ features",
            "Create dynamic web apps with React.js",
            "Build backend APIs with Node.js and Express",
            "Work with databases using MongoDB",
            "Deploy applications to production",
            "Version control with Git and GitHub",
            "Modern development workflow and tools",
        ]),
        curriculum: vec![
            section(
                "HTML & CSS Fundamentals",
                12,
                "3 hours",
                vec![
                    lesson("Introduction to HTML", "15 min", true),
                    lesson("HTML Structure and Semantics", "20 min", true),
                    lesson("CSS Basics and Selectors", "18 min", true),
                    lesson("CSS Flexbox Layout", "25 min", false),
                    lesson("CSS Grid System", "22 min", false),
                ],
            ),
            section(
                "JavaScript Essentials",
                18,
                "5 hours",
                vec![
                    lesson("JavaScript Variables and Data Types", "16 min", false),
                    lesson("Functions and Scope", "20 min", false),
                    lesson("Arrays and Objects", "18 min", false),
                    lesson("DOM Manipulation", "25 min", false),
                    lesson("Event Handling", "22 min", false),
                ],
            ),
            section(
                "React Development",
                15,
                "8 hours",
                vec![
                    lesson("Introduction to React", "20 min", false),
                    lesson("Components and JSX", "25 min", false),
                    lesson("State and Props", "30 min", false),
                    lesson("Hooks in React", "35 min", false),
                    lesson("Building a React App", "45 min", false),
                ],
            ),
            section(
                "Backend Development",
                20,
                "10 hours",
                vec![
                    lesson("Node.js Fundamentals", "25 min", false),
                    lesson("Express.js Framework", "30 min", false),
                    lesson("RESTful APIs", "35 min", false),
                    lesson("Database Integration", "40 min", false),
                    lesson("Authentication & Security", "45 min", false),
                ],
            ),
        ],
        requirements: strings(&[
            "Basic computer literacy",
            "No prior programming experience required",
            "A computer with internet connection",
            "Willingness to learn and practice",
        ]),
        features: strings(&[
            "40 hours of video content",
            "10+ hands-on projects",
            "Lifetime access",
            "Certificate of completion",
            "Downloadable resources",
            "Community access",
        ]),
        rating_breakdown: vec![(5, 85), (4, 12), (3, 3), (2, 0), (1, 0)],
        reviews_sample: vec![
            review(
                "Alex Thompson",
                5,
                "2 weeks ago",
                "Outstanding course! Sarah explains complex concepts in a very clear and understandable way. The projects are practical and really help reinforce the learning.",
            ),
            review(
                "Maria Garcia",
                5,
                "1 month ago",
                "I went from knowing nothing about web development to building my own projects. The curriculum is well-structured and the instructor is very supportive.",
            ),
            review(
                "James Wilson",
                4,
                "2 months ago",
                "Great course overall. Covers all the essential topics for web development. Would recommend to anyone starting their coding journey.",
            ),
        ],
    })
}

// ---------------------------------------------------------------------------
// Learner progress
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn enrolled(
    id: &str,
    title: &str,
    instructor: &str,
    category: &str,
    total_lessons: u32,
    completed_lessons: u32,
    total_duration: &str,
    time_spent: &str,
    last_accessed: &str,
    next_lesson: &str,
) -> EnrolledCourse {
    EnrolledCourse {
        id: id.to_string(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        category: category.to_string(),
        total_lessons,
        completed_lessons,
        total_duration: total_duration.to_string(),
        time_spent: time_spent.to_string(),
        last_accessed: last_accessed.to_string(),
        next_lesson: next_lesson.to_string(),
        is_completed: completed_lessons >= total_lessons,
    }
}

fn achievement(title: &str, description: &str, earned_on: Option<&str>) -> Achievement {
    Achievement {
        title: title.to_string(),
        description: description.to_string(),
        earned_on: earned_on.map(str::to_string),
    }
}

/// The learner's dashboard data.
pub fn learner_progress() -> LearnerProgress {
    LearnerProgress {
        enrolled: vec![
            enrolled(
                "1",
                "Complete Web Development Bootcamp",
                "Sarah Johnson",
                "Web Development",
                45,
                29,
                "40 hours",
                "26 hours",
                "2 hours ago",
                "React Hooks Deep Dive",
            ),
            enrolled(
                "2",
                "Data Science & Machine Learning",
                "Dr. Michael Chen",
                "Data Science",
                52,
                16,
                "60 hours",
                "18 hours",
                "1 day ago",
                "Introduction to Pandas",
            ),
            enrolled(
                "3",
                "UI/UX Design Masterclass",
                "Emma Wilson",
                "Design",
                28,
                28,
                "35 hours",
                "35 hours",
                "1 week ago",
                "Course Completed!",
            ),
        ],
        achievements: vec![
            achievement(
                "First Course Completed",
                "Completed your first course",
                Some("2024-01-15"),
            ),
            achievement(
                "Speed Learner",
                "Completed 5 lessons in one day",
                Some("2024-01-10"),
            ),
            achievement(
                "Consistent Learner",
                "Learned for 7 days straight",
                Some("2024-01-08"),
            ),
            achievement("Knowledge Seeker", "Enrolled in 5 courses", None),
            achievement("Course Master", "Complete 10 courses", None),
        ],
        weekly: WeeklyStats {
            total_hours: 12,
            lessons_completed: 8,
            courses_active: 2,
            streak_days: 5,
            weekly_goal_hours: 15,
            completion_rate: 80,
        },
        monthly: [("Week 1", 8), ("Week 2", 12), ("Week 3", 15), ("Week 4", 12)]
            .into_iter()
            .map(|(label, hours)| WeeklyHours {
                label: label.to_string(),
                hours,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_catalog_has_six_unique_courses() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);
        assert!(Catalog::from_courses(courses()).is_ok());
    }

    #[test]
    fn featured_is_first_four() {
        let catalog = catalog();
        let ids: Vec<&str> = featured(&catalog).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn course_one_has_curated_detail() {
        let catalog = catalog();
        let detail = course_detail(&catalog, "1").unwrap();
        assert_eq!(detail.curriculum.len(), 4);
        assert_eq!(detail.original_price, Some(199.0));

        let plain = course_detail(&catalog, "4").unwrap();
        assert!(plain.curriculum.is_empty());
        assert_eq!(plain.instructor.name, "David Rodriguez");

        assert!(course_detail(&catalog, "99").is_none());
    }

    #[test]
    fn only_finished_course_is_completed() {
        let progress = learner_progress();
        let completed: Vec<&str> = progress
            .enrolled
            .iter()
            .filter(|c| c.is_completed)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(completed, ["3"]);
    }
}
