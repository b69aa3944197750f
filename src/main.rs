//! Swatch recipes binary: renders the neutral fill toggle over the neutral palette and
//! cross-checks the legacy call shape against the typed one.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, bail};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swatch_recipes::{
    color::Color,
    config::AppConfig,
    recipes::check_parity,
    report::{save_rows_json, toggle_rows, write_html_grid},
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut config = AppConfig::load();
    if let Some(seed) = env::args().nth(1) {
        let seed: Color = seed
            .parse()
            .with_context(|| format!("parsing seed color `{seed}`"))?;
        config = config.with_neutral_base_color(seed);
    }

    let palette = config.neutral_palette();
    let design = config.design_system();
    let deltas = config.toggle_deltas();
    info!(
        seed = %config.neutral_base_color(),
        swatches = palette.len(),
        hover = deltas.hover,
        active = deltas.active,
        focus = deltas.focus,
        "generated neutral palette"
    );

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("swatch-recipes");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let rows = toggle_rows(&palette, &deltas);
    let html_path = write_html_grid(
        &format!(
            "Neutral fill toggle (seed {}, hover {}, active {}, focus {})",
            config.neutral_base_color(),
            deltas.hover,
            deltas.active,
            deltas.focus
        ),
        &rows,
        out_dir.join("neutral_fill_toggle.html"),
    )
    .context("writing HTML grid")?;
    let json_path = save_rows_json(out_dir.join("neutral_fill_toggle.json"), &rows)
        .context("writing JSON rows")?;

    println!(
        "Generated recipe assets in {}:\n  - {}\n  - {}",
        out_dir.display(),
        html_path.display(),
        json_path.display()
    );

    let report = check_parity(&design, &palette).context("evaluating legacy recipe")?;
    if !report.is_consistent() {
        for mismatch in &report.mismatches {
            warn!(
                index = mismatch.index,
                state = %mismatch.state,
                legacy = %mismatch.legacy,
                typed = %mismatch.typed,
                "legacy and typed recipes disagree"
            );
        }
        bail!(
            "parity check failed: {} mismatches over {} swatches",
            report.mismatches.len(),
            report.compared
        );
    }
    info!(compared = report.compared, "legacy and typed recipes agree");

    Ok(())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
