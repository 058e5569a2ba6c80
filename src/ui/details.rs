use eframe::egui::{self, Color32, RichText, Ui};

use crate::catalog::fixtures;
use crate::catalog::model::CourseDetail;
use crate::catalog::progress::percent;
use crate::route::Route;
use crate::state::{AppState, DetailTab};
use crate::ui::widgets;

// ---------------------------------------------------------------------------
// Course details page
// ---------------------------------------------------------------------------

pub fn details_page(ui: &mut Ui, state: &mut AppState, id: &str) {
    let Some(detail) = fixtures::course_detail(&state.catalog, id) else {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(48.0);
            ui.heading("Course not found");
            ui.label(format!("There is no course with id '{id}'."));
            if ui.button("Back to Courses").clicked() {
                state.navigate(Route::Courses);
            }
        });
        return;
    };

    ui.columns(2, |cols: &mut [Ui]| {
        hero(&mut cols[0], state, &detail);
        purchase_card(&mut cols[1], state, &detail);
    });
    ui.add_space(12.0);

    video_player(ui, state);

    ui.horizontal(|ui: &mut Ui| {
        for tab in DetailTab::ALL {
            ui.selectable_value(&mut state.detail_tab, tab, tab.label());
        }
    });
    ui.separator();

    match state.detail_tab {
        DetailTab::Overview => overview_tab(ui, &detail),
        DetailTab::Curriculum => curriculum_tab(ui, state, &detail),
        DetailTab::Instructor => instructor_tab(ui, &detail),
        DetailTab::Reviews => reviews_tab(ui, &detail),
    }
}

fn hero(ui: &mut Ui, state: &AppState, detail: &CourseDetail) {
    let course = &detail.course;
    ui.horizontal(|ui: &mut Ui| {
        widgets::badge(ui, &course.category, state.category_colors.color_for(&course.category));
        widgets::badge(ui, course.level.as_str(), Color32::DARK_GRAY);
    });
    ui.label(RichText::new(&course.title).size(28.0).strong());
    ui.label(RichText::new(&course.description).size(15.0));
    ui.add_space(6.0);

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label(RichText::new(format!("★ {:.1}", course.rating)).color(Color32::GOLD));
        if detail.reviews > 0 {
            ui.label(RichText::new(format!("({} reviews)", widgets::thousands(detail.reviews))).weak());
        }
        ui.label(format!("👥 {} students", widgets::thousands(course.students)));
        ui.label(format!("🕑 {}", course.duration));
    });
    ui.add_space(6.0);

    ui.label(RichText::new(&detail.instructor.name).strong());
    if !detail.instructor.title.is_empty() {
        ui.label(RichText::new(&detail.instructor.title).weak());
    }
}

fn purchase_card(ui: &mut Ui, state: &mut AppState, detail: &CourseDetail) {
    let course = &detail.course;
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        let width = ui.available_width();
        let tint = state.category_colors.color_for(&course.category);
        widgets::cover(ui, &course.image, tint, width);
        if ui.button("▶ Preview Course").clicked() {
            state.preview_course();
        }

        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(widgets::price(course.price)).size(26.0).strong());
            if let Some(original) = detail.original_price {
                ui.label(RichText::new(widgets::price(original)).strikethrough().weak());
            }
        });

        if let Some((done, total)) = state.lesson_progress(&course.id) {
            ui.label("Your Progress");
            widgets::progress_bar(ui, percent(done, total));
            ui.label(RichText::new(format!("{done} of {total} lessons completed")).weak());
            if ui.button("Continue Learning").clicked() {
                state.detail_tab = DetailTab::Curriculum;
            }
        } else if ui.button("Enroll Now").clicked() {
            state.enroll(&course.id);
        }

        if !detail.features.is_empty() {
            ui.separator();
            ui.label(RichText::new("This course includes:").strong());
            for feature in &detail.features {
                ui.label(format!("✔ {feature}"));
            }
        }
    });
}

fn video_player(ui: &mut Ui, state: &mut AppState) {
    let Some(player) = &state.player else {
        return;
    };
    let title = player.title.clone();
    let playing = player.playing;

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(&title).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                if ui.button("✖").clicked() {
                    state.close_player();
                }
            });
        });

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 220.0),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(rect, 4.0, Color32::BLACK);
        let status = if playing { "Playing" } else { "Paused" };
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            status,
            egui::FontId::proportional(20.0),
            Color32::WHITE,
        );

        let icon = if playing { "⏸ Pause" } else { "▶ Play" };
        if ui.button(icon).clicked() {
            state.toggle_play();
        }
    });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

fn overview_tab(ui: &mut Ui, detail: &CourseDetail) {
    if !detail.what_you_will_learn.is_empty() {
        ui.heading("What you'll learn");
        egui::Grid::new("learn_grid")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui: &mut Ui| {
                for (i, item) in detail.what_you_will_learn.iter().enumerate() {
                    ui.label(format!("✔ {item}"));
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(12.0);
    }

    if !detail.requirements.is_empty() {
        ui.heading("Requirements");
        for req in &detail.requirements {
            ui.label(format!("• {req}"));
        }
        ui.add_space(12.0);
    }

    ui.heading("Course Details");
    egui::Grid::new("facts_grid")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            let course = &detail.course;
            for (label, value) in [
                ("Duration", course.duration.clone()),
                ("Level", course.level.to_string()),
                ("Language", detail.language.clone()),
                ("Last updated", detail.last_updated.clone()),
            ] {
                if value.is_empty() {
                    continue;
                }
                ui.label(RichText::new(label).weak());
                ui.label(value);
                ui.end_row();
            }
        });
}

fn curriculum_tab(ui: &mut Ui, state: &mut AppState, detail: &CourseDetail) {
    if detail.curriculum.is_empty() {
        ui.label("The curriculum for this course has not been published yet.");
        return;
    }

    let mut play = None;
    for (i, section) in detail.curriculum.iter().enumerate() {
        let header = format!(
            "{}  ({} lessons · {})",
            section.title, section.lesson_count, section.duration
        );
        egui::CollapsingHeader::new(RichText::new(header).strong())
            .id_salt(("section", i))
            .default_open(i == 0)
            .show(ui, |ui: &mut Ui| {
                for lesson in &section.lessons {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("▶").clicked() {
                            play = Some(lesson.title.clone());
                        }
                        let mut title = RichText::new(&lesson.title);
                        if lesson.completed {
                            title = title.strikethrough().weak();
                        }
                        ui.label(title);
                        if lesson.completed {
                            ui.label(RichText::new("✔").color(Color32::GREEN));
                        }
                        ui.label(RichText::new(&lesson.duration).weak());
                    });
                }
            });
    }

    if let Some(title) = play {
        state.play_lesson(&title);
    }
}

fn instructor_tab(ui: &mut Ui, detail: &CourseDetail) {
    ui.heading("About the Instructor");
    ui.label(RichText::new(&detail.instructor.name).size(20.0).strong());
    if !detail.instructor.title.is_empty() {
        ui.label(&detail.instructor.title);
    }
    if !detail.instructor.bio.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new(&detail.instructor.bio).weak());
    }
}

fn reviews_tab(ui: &mut Ui, detail: &CourseDetail) {
    ui.heading("Student Reviews");
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{:.1}", detail.course.rating)).size(32.0).strong());
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(widgets::stars(5)).color(Color32::GOLD));
            ui.label(format!("{} reviews", widgets::thousands(detail.reviews)));
        });
    });

    for &(stars, share) in &detail.rating_breakdown {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(format!("{stars} ★"));
            ui.add(
                egui::ProgressBar::new(share as f32 / 100.0)
                    .desired_width(200.0)
                    .text(format!("{share}%")),
            );
        });
    }
    ui.add_space(8.0);

    if detail.reviews_sample.is_empty() {
        ui.label(RichText::new("No reviews yet.").weak());
    }
    for review in &detail.reviews_sample {
        egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui: &mut Ui| {
                ui.label(RichText::new(&review.name).strong());
                ui.label(RichText::new(widgets::stars(review.stars)).color(Color32::GOLD));
                ui.label(RichText::new(&review.date).weak());
            });
            ui.label(&review.comment);
        });
    }
}
