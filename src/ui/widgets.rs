use std::path::Path;

use eframe::egui::{self, Color32, RichText, Sense, Ui};

use crate::catalog::model::Course;
use crate::catalog::progress;
use crate::color::CategoryColors;

pub const CARD_WIDTH: f32 = 260.0;
const COVER_HEIGHT: f32 = 110.0;

/// A small coloured label.
pub fn badge(ui: &mut Ui, text: &str, fill: Color32) {
    ui.label(
        RichText::new(format!(" {text} "))
            .small()
            .color(Color32::WHITE)
            .background_color(fill),
    );
}

pub fn stars(count: u8) -> String {
    "★".repeat(count.min(5) as usize)
}

pub fn price(amount: f64) -> String {
    format!("${amount:.0}")
}

/// `12500` → `12,500`.
pub fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Course cover: the image when it exists on disk, a tinted block otherwise.
pub fn cover(ui: &mut Ui, image: &str, tint: Color32, width: f32) {
    let path = Path::new(image);
    if !image.is_empty() && path.is_file() {
        let uri = match path.canonicalize() {
            Ok(abs) => format!("file://{}", abs.display()),
            Err(_) => format!("file://{image}"),
        };
        ui.add(
            egui::Image::new(uri)
                .max_width(width)
                .max_height(COVER_HEIGHT),
        );
    } else {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, COVER_HEIGHT), Sense::hover());
        ui.painter().rect_filled(rect, 4.0, tint.gamma_multiply(0.35));
    }
}

/// A horizontal progress indicator labelled with its percentage.
pub fn progress_bar(ui: &mut Ui, percent: u8) {
    ui.add(
        egui::ProgressBar::new(progress::fraction(percent))
            .desired_width(ui.available_width())
            .text(format!("{percent}%")),
    );
}

/// Render a catalog card. Returns true when the learner asked to open the course.
pub fn course_card(
    ui: &mut Ui,
    course: &Course,
    colors: &CategoryColors,
    progress: Option<u8>,
) -> bool {
    let mut open = false;
    let tint = colors.color_for(&course.category);

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(CARD_WIDTH);
        cover(ui, &course.image, tint, CARD_WIDTH);

        ui.horizontal(|ui: &mut Ui| {
            badge(ui, course.level.as_str(), Color32::DARK_GRAY);
            badge(ui, &course.category, tint);
        });

        if let Some(pct) = progress {
            ui.label(RichText::new("Progress").small());
            progress_bar(ui, pct);
        }

        ui.label(RichText::new(&course.title).strong().size(16.0));
        ui.label(RichText::new(&course.description).weak());
        ui.label(format!("by {}", course.instructor));

        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(format!("★ {:.1}", course.rating)).color(Color32::GOLD));
            ui.label(format!("👥 {}", thousands(course.students)));
            ui.label(format!("🕑 {}", course.duration));
        });

        ui.separator();
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(price(course.price)).strong().size(18.0));
            let action = if progress.is_some() {
                "Continue"
            } else {
                "View Course"
            };
            if ui.button(action).clicked() {
                open = true;
            }
        });
    });

    open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(12500), "12,500");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn stars_and_prices() {
        assert_eq!(stars(4), "★★★★");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(price(89.0), "$89");
    }
}
