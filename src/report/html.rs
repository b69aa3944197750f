#![forbid(unsafe_code)]

use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};

use super::ToggleRow;
use crate::{color::Color, recipes::FillState};

/// Label color with the better contrast on `background`.
#[inline]
fn label_color(background: Color) -> Color {
    if background.contrast(Color::WHITE) >= background.contrast(Color::BLACK) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Render one row per reference swatch with its state colors, returning the written path.
pub fn write_html_grid(
    title: &str,
    rows: &[ToggleRow],
    path: impl AsRef<std::path::Path>,
) -> Result<std::path::PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    let cols = 1 + FillState::ALL.len();
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:#111;color:#eee;font-family:system-ui}}
  h2{{margin:12px}}
  .g{{display:grid;grid-template-columns:repeat({cols},1fr);gap:6px;padding:8px}}
  .h{{font-weight:700;text-align:center}}
  .s{{aspect-ratio:4/1;border-radius:10px;display:flex;align-items:center;justify-content:center;
      font-weight:700}}
</style>
<h2>{title}</h2>
<div class="g">"#
    )?;
    write!(w, r#"<div class="h">reference</div>"#)?;
    for state in FillState::ALL {
        write!(w, r#"<div class="h">{state}</div>"#)?;
    }
    writeln!(w)?;
    for row in rows {
        let swatches = std::iter::once((format!("{}", row.index), row.reference)).chain(
            row.family
                .entries()
                .into_iter()
                .map(|(state, color)| (state.to_string(), *color)),
        );
        for (label, color) in swatches {
            writeln!(
                w,
                r#"<div class="s" style="background:{color};color:{}">{label} | {color}</div>"#,
                label_color(color)
            )?;
        }
    }
    writeln!(w, "</div>")?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_contrast_with_background() {
        assert_eq!(label_color(Color::BLACK), Color::WHITE);
        assert_eq!(label_color(Color::WHITE), Color::BLACK);
        assert_eq!(label_color(Color::new(0x20, 0x20, 0x20)), Color::WHITE);
    }
}
