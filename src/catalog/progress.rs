use super::model::{Achievement, EnrolledCourse, Section};

/// Hours that fill one bar of the monthly chart.
pub const MONTHLY_CHART_MAX_HOURS: u32 = 20;

/// `round(100 * completed / total)`, clamped to `0..=100`.
/// A zero total renders as an empty bar.
pub fn percent(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (100.0 * completed as f64 / total as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

/// A [`percent`] value as a fraction for progress-bar widgets.
pub fn fraction(percent: u8) -> f32 {
    f32::from(percent.min(100)) / 100.0
}

/// Completed and total lessons across all listed lessons of a curriculum.
pub fn curriculum_totals(curriculum: &[Section]) -> (u32, u32) {
    curriculum.iter().fold((0, 0), |(done, total), section| {
        let completed = section.lessons.iter().filter(|l| l.completed).count() as u32;
        (done + completed, total + section.lessons.len() as u32)
    })
}

impl EnrolledCourse {
    pub fn percent(&self) -> u8 {
        percent(self.completed_lessons, self.total_lessons)
    }
}

/// Split enrolled courses into (active, completed), keeping their order.
pub fn split_by_completion(courses: &[EnrolledCourse]) -> (Vec<&EnrolledCourse>, Vec<&EnrolledCourse>) {
    courses.iter().partition(|c| !c.is_completed)
}

/// Width of a bar in the monthly chart, in `0.0..=1.0`.
pub fn monthly_bar_fraction(hours: u32) -> f32 {
    (hours as f32 / MONTHLY_CHART_MAX_HOURS as f32).clamp(0.0, 1.0)
}

pub fn earned_count(achievements: &[Achievement]) -> usize {
    achievements.iter().filter(|a| a.is_earned()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(percent(29, 45), 64);
        assert_eq!(percent(16, 52), 31);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 2), 50);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(percent(0, 10), 0);
        assert_eq!(percent(10, 10), 100);
        assert_eq!(percent(12, 10), 100);
        assert_eq!(percent(3, 0), 0);
    }

    #[test]
    fn fraction_fills_the_bar_at_one_hundred() {
        assert_eq!(fraction(0), 0.0);
        assert_eq!(fraction(percent(1, 2)), 0.5);
        assert_eq!(fraction(100), 1.0);
        assert_eq!(fraction(250), 1.0);
    }

    #[test]
    fn curriculum_totals_for_course_one() {
        let catalog = fixtures::catalog();
        let detail = fixtures::course_detail(&catalog, "1").unwrap();
        assert_eq!(curriculum_totals(&detail.curriculum), (3, 20));
        assert_eq!(curriculum_totals(&[]), (0, 0));
    }

    #[test]
    fn dashboard_figures() {
        let progress = fixtures::learner_progress();
        let (active, completed) = split_by_completion(&progress.enrolled);
        assert_eq!(active.len(), 2);
        assert_eq!(completed[0].percent(), 100);
        assert_eq!(earned_count(&progress.achievements), 3);

        let weekly = progress.weekly;
        assert_eq!(percent(weekly.total_hours, weekly.weekly_goal_hours), 80);
    }

    #[test]
    fn monthly_bars_fill_at_twenty_hours() {
        assert_eq!(monthly_bar_fraction(15), 0.75);
        assert_eq!(monthly_bar_fraction(30), 1.0);
        assert_eq!(monthly_bar_fraction(0), 0.0);
    }
}
