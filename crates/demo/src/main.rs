// File: crates/demo/src/main.rs
// Summary: Demo loads a weight CSV, writes a smoothed SVG chart, and replays selector flows.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use vernier_analysis::{analysis_or_mock, meal_name, AnalysisError, MealRecord, MemoryStore, RecordStore};
use vernier_core::date::DateField;
use vernier_core::types::{CHART_HEIGHT, CHART_WIDTH, ITEM_PITCH};
use vernier_core::{
    area_path, moving_average, normalize, path_length, smooth_path, CalendarDate, DateWheel,
    OrderedValueList, Reveal, WheelSelector,
};

fn main() -> Result<()> {
    // Accept a CSV path from CLI or fall back to the bundled sample series.
    let weights = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let w = load_weight_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} samples from {}", w.len(), path.display());
            w
        }
        None => {
            println!("No CSV given, using bundled sample series");
            sample_weights()
        }
    };
    anyhow::ensure!(weights.len() >= 2, "need at least two samples to chart");

    render_progress_chart(&weights)?;
    replay_wheel_drag()?;
    replay_date_clamp()?;
    replay_analysis_boundary()?;
    Ok(())
}

fn render_progress_chart(weights: &[f64]) -> Result<()> {
    let smoothed = moving_average(weights, 3);
    let points = normalize(&smoothed, CHART_WIDTH, CHART_HEIGHT)
        .map_err(|e| anyhow::anyhow!("normalize failed: {e}"))?;
    let stroke = smooth_path(&points);
    let fill = area_path(&points, CHART_HEIGHT);
    let total = path_length(&points);

    // Step the reveal the way a display scheduler would (16 ms ticks).
    let mut reveal = Reveal::default();
    let mut elapsed = Duration::ZERO;
    while !reveal.is_done() {
        reveal.advance(Duration::from_millis(16));
        elapsed += Duration::from_millis(16);
        if elapsed.as_millis() % 320 == 0 {
            println!(
                "  t={:>4}ms progress={:.3} dash_offset={:>6.1} lead={}",
                elapsed.as_millis(),
                reveal.progress(),
                reveal.dash_offset(total),
                reveal.lead_index(points.len()),
            );
        }
    }

    let svg = format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\">\n",
            "  <path d=\"{fill}\" fill=\"#00000020\"/>\n",
            "  <path d=\"{stroke}\" fill=\"none\" stroke=\"#000\" stroke-width=\"3\"\n",
            "        stroke-linecap=\"round\" stroke-dasharray=\"{len:.1}\" stroke-dashoffset=\"{off:.1}\"/>\n",
            "</svg>\n"
        ),
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
        fill = fill,
        stroke = stroke,
        len = total,
        off = reveal.dash_offset(total),
    );

    let out = PathBuf::from("target/out/progress.svg");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, svg).with_context(|| format!("write {}", out.display()))?;
    println!("Wrote {} (path length {:.1})", out.display(), total);
    Ok(())
}

fn replay_wheel_drag() -> Result<()> {
    let heights = OrderedValueList::from_range_inclusive(140, 220)
        .map_err(|e| anyhow::anyhow!("height list: {e}"))?;
    let mut wheel = WheelSelector::new(heights, 170.0).with_unit("cm");
    wheel.on_value_change(|v| println!("  committed height: {v}"));

    println!("Wheel drag from {} ...", wheel.display_value(wheel.committed_value()));
    wheel.begin_drag();
    for step in 31..=50 {
        wheel.drag_to(step as f32 * ITEM_PITCH);
    }
    wheel.end_drag(50.0 * ITEM_PITCH);
    Ok(())
}

fn replay_date_clamp() -> Result<()> {
    let mut date = DateWheel::new(CalendarDate::new(31, 1, 2000))
        .map_err(|e| anyhow::anyhow!("date wheel: {e}"))?;
    date.on_date_change(|c| {
        println!(
            "  committed date: {:02}.{:02}.{}{}",
            c.day,
            c.month,
            c.year,
            if c.clamped { " (day clamped)" } else { "" }
        )
    });

    println!("Date settle: January -> February ...");
    date.begin_drag(DateField::Month);
    date.settle(DateField::Month, ITEM_PITCH); // index 1 == February
    Ok(())
}

fn replay_analysis_boundary() -> Result<()> {
    // A failed collaborator call falls back to the fixed mock payload.
    let analysis = analysis_or_mock(Err(AnalysisError::Collaborator("offline demo".to_string())));
    let name = meal_name(&analysis.food_items);
    println!("Analysis fallback: {name} ({} kcal)", analysis.total_calories);

    let mut store = MemoryStore::new();
    let saved = store
        .create_record(MealRecord::from_analysis("demo-user", name, &analysis, chrono::Utc::now()))
        .map_err(|e| anyhow::anyhow!("store: {e}"))?;
    let listed = store
        .list_records_by_owner("demo-user")
        .map_err(|e| anyhow::anyhow!("store: {e}"))?;
    println!("Stored record {} of {}", saved.id, listed.len());
    Ok(())
}

fn load_weight_csv(path: &std::path::Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = rdr.headers()?.clone();
    let col = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("weight"))
        .unwrap_or(headers.len().saturating_sub(1));

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if let Some(field) = rec.get(col) {
            if let Ok(v) = field.trim().parse::<f64>() {
                out.push(v);
            }
        }
    }
    Ok(out)
}

fn sample_weights() -> Vec<f64> {
    // Six months of weekly weigh-ins with noise
    vec![
        84.0, 83.6, 83.9, 83.1, 82.8, 83.0, 82.2, 81.9, 82.1, 81.4, 81.0, 81.3, 80.6, 80.2, 80.5,
        79.9, 79.6, 79.8, 79.1, 78.9, 79.0, 78.4, 78.2, 78.3,
    ]
}
