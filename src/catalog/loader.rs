use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{Catalog, Course};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a course catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "id": "1", "title": "...", "level": "Beginner", ... }, ...]`
/// * `.csv`  – header row with the course field names, one course per row
pub fn load_file(path: &Path) -> Result<Catalog> {
    let courses = match extension(path).as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    Catalog::from_courses(courses)
        .with_context(|| format!("validating catalog {}", path.display()))
}

/// Write a catalog in the format implied by the extension.
pub fn save_file(catalog: &Catalog, path: &Path) -> Result<()> {
    match extension(path).as_str() {
        "json" => save_json(catalog.courses(), path),
        "csv" => save_csv(catalog.courses(), path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<Course>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON course list")
}

fn save_json(courses: &[Course], path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(courses).context("serializing courses")?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// CSV layout: `id,title,description,image,instructor,duration,students,rating,price,level,category`.
/// Column order is free; the header names matter.
fn load_csv(path: &Path) -> Result<Vec<Course>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    reader
        .deserialize::<Course>()
        .enumerate()
        .map(|(row_no, record)| record.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

fn save_csv(courses: &[Course], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    for course in courses {
        writer
            .serialize(course)
            .with_context(|| format!("writing course {}", course.id))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}
