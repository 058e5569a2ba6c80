use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::catalog::model::{EnrolledCourse, LearnerProgress};
use crate::catalog::progress::{
    earned_count, monthly_bar_fraction, percent, split_by_completion, MONTHLY_CHART_MAX_HOURS,
};
use crate::route::Route;
use crate::state::{AppState, ProgressTab};
use crate::ui::widgets;

// ---------------------------------------------------------------------------
// Progress dashboard
// ---------------------------------------------------------------------------

pub fn progress_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new("My Learning Progress").size(28.0));
    ui.label(RichText::new("Track your learning journey and celebrate your achievements.").weak());
    ui.add_space(8.0);

    let progress = state.progress.clone();
    stat_cards(ui, &progress);
    ui.add_space(12.0);

    ui.horizontal(|ui: &mut Ui| {
        for tab in ProgressTab::ALL {
            ui.selectable_value(&mut state.progress_tab, tab, tab.label());
        }
    });
    ui.separator();

    match state.progress_tab {
        ProgressTab::Courses => {
            if let Some(id) = courses_tab(ui, state, &progress) {
                state.navigate(Route::CourseDetails(id));
            }
        }
        ProgressTab::Achievements => achievements_tab(ui, &progress),
        ProgressTab::Analytics => analytics_tab(ui, &progress),
    }
}

fn stat_cards(ui: &mut Ui, progress: &LearnerProgress) {
    let weekly = progress.weekly;
    ui.columns(4, |cols: &mut [Ui]| {
        egui::Frame::group(cols[0].style()).show(&mut cols[0], |ui: &mut Ui| {
            ui.label(RichText::new("This Week").weak());
            ui.label(RichText::new(format!("{}h", weekly.total_hours)).size(26.0).strong());
            ui.label(format!("of {}h goal", weekly.weekly_goal_hours));
            widgets::progress_bar(ui, percent(weekly.total_hours, weekly.weekly_goal_hours));
        });
        let rest = [
            ("Lessons Completed", weekly.lessons_completed, "This week"),
            ("Active Courses", weekly.courses_active, "In progress"),
            ("Learning Streak", weekly.streak_days, "Days in a row"),
        ];
        for (col, (title, value, caption)) in cols[1..].iter_mut().zip(rest) {
            egui::Frame::group(col.style()).show(col, |ui: &mut Ui| {
                ui.label(RichText::new(title).weak());
                ui.label(RichText::new(value.to_string()).size(26.0).strong());
                ui.label(caption);
            });
        }
    });
}

/// Returns the id of a course the learner chose to open.
fn courses_tab(ui: &mut Ui, state: &AppState, progress: &LearnerProgress) -> Option<String> {
    let mut opened = None;
    let (active, completed) = split_by_completion(&progress.enrolled);

    ui.heading("Continue Learning");
    if active.is_empty() {
        ui.label(RichText::new("No courses in progress.").weak());
    }
    for course in active {
        if active_course(ui, state, course) {
            opened = Some(course.id.clone());
        }
    }

    if !completed.is_empty() {
        ui.add_space(12.0);
        ui.heading("Completed Courses");
        ui.horizontal_wrapped(|ui: &mut Ui| {
            for course in completed {
                egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                    ui.set_width(widgets::CARD_WIDTH);
                    widgets::badge(ui, "✔ Completed", Color32::DARK_GREEN);
                    ui.label(RichText::new(&course.title).strong());
                    ui.label(RichText::new(format!("by {}", course.instructor)).weak());
                    if ui.button("Review Course").clicked() {
                        opened = Some(course.id.clone());
                    }
                });
            }
        });
    }
    opened
}

fn active_course(ui: &mut Ui, state: &AppState, course: &EnrolledCourse) -> bool {
    let mut open = false;
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        widgets::badge(ui, &course.category, state.category_colors.color_for(&course.category));
        ui.label(RichText::new(&course.title).size(18.0).strong());
        ui.label(RichText::new(format!("by {}", course.instructor)).weak());

        ui.horizontal(|ui: &mut Ui| {
            ui.label(format!(
                "{} of {} lessons",
                course.completed_lessons, course.total_lessons
            ));
            ui.label(format!("{} of {}", course.time_spent, course.total_duration));
        });
        widgets::progress_bar(ui, course.percent());

        ui.horizontal(|ui: &mut Ui| {
            ui.vertical(|ui: &mut Ui| {
                ui.label(RichText::new(format!("Next: {}", course.next_lesson)).strong());
                ui.label(RichText::new(format!("Last accessed {}", course.last_accessed)).weak());
            });
            if ui.button("▶ Continue Learning").clicked() {
                open = true;
            }
        });
    });
    open
}

fn achievements_tab(ui: &mut Ui, progress: &LearnerProgress) {
    ui.heading(format!(
        "Your Achievements ({} of {})",
        earned_count(&progress.achievements),
        progress.achievements.len()
    ));

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for achievement in &progress.achievements {
            egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                ui.set_width(widgets::CARD_WIDTH);
                let mut title = RichText::new(format!("🏆 {}", achievement.title)).strong();
                if !achievement.is_earned() {
                    title = title.weak();
                }
                ui.label(title);
                ui.label(RichText::new(&achievement.description).weak());
                match &achievement.earned_on {
                    Some(date) => ui.label(RichText::new(format!("Earned {date}")).color(Color32::GREEN)),
                    None => ui.label(RichText::new("Not earned yet").weak()),
                };
            });
        }
    });
}

fn analytics_tab(ui: &mut Ui, progress: &LearnerProgress) {
    ui.heading("Monthly Progress");
    for week in &progress.monthly {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(&week.label);
            ui.add(
                egui::ProgressBar::new(monthly_bar_fraction(week.hours))
                    .desired_width(320.0)
                    .text(format!("{}h", week.hours)),
            );
        });
    }
    ui.add_space(8.0);

    let bars: Vec<Bar> = progress
        .monthly
        .iter()
        .enumerate()
        .map(|(i, week)| Bar::new(i as f64 + 1.0, week.hours as f64).name(&week.label))
        .collect();

    Plot::new("monthly_hours")
        .height(200.0)
        .legend(egui_plot::Legend::default())
        .x_axis_label("Week")
        .y_axis_label("Hours")
        .include_y(MONTHLY_CHART_MAX_HOURS as f64)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Hours").color(Color32::LIGHT_BLUE));
        });
    ui.add_space(8.0);

    ui.heading("Completion Rate");
    let rate = progress.weekly.completion_rate.min(100) as u8;
    widgets::progress_bar(ui, rate);
    ui.label(RichText::new("Average completion across your active courses.").weak());
}
