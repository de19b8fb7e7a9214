//! `render`: draw the matrix into a standalone SVG document.

use crate::export::export_svg;
use crate::source::load_source;
use anyhow::Context;
use log::info;
use tmx_chart::{Layout, MatrixChart, ModeLabel, SvgScene, ViewMode};
use tmx_data::{Dataset, YEARS_COUNT};

/// Draw `dataset` and serialize the scene.
pub fn render_svg(dataset: Dataset, mode: ViewMode) -> anyhow::Result<String> {
    let mut scene = SvgScene::new();
    let mut indicator = ModeLabel::default();
    let chart = MatrixChart::render(
        dataset,
        Layout::default(),
        mode,
        &mut scene,
        &mut indicator,
    );
    info!(
        "Rendered {} cells in {} mode",
        chart.cells().count(),
        indicator.0
    );
    export_svg(&scene)
}

pub async fn run_render(input: &str, output: &str, mode: ViewMode) -> anyhow::Result<()> {
    let report = load_source(input, YEARS_COUNT).await?;
    let svg = render_svg(report.dataset, mode)?;
    tokio::fs::write(output, svg)
        .await
        .with_context(|| format!("failed to write {}", output))?;
    info!("Render complete. Output: {}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmx_chart::config::{TEMP_MAX, TEMP_MIN};
    use tmx_chart::ColorScale;
    use tmx_data::loader::load_str;

    const SAMPLE: &str = "date,max_temperature,min_temperature
2023-01-01,10,2
2023-01-02,14,4
";

    #[test]
    fn test_render_svg_document() {
        let dataset = load_str(SAMPLE, 10).unwrap().dataset;
        let color = ColorScale::new(TEMP_MIN, TEMP_MAX);
        let svg = render_svg(dataset, ViewMode::Min).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(">January</text>"));
        assert!(svg.contains(">2023</text>"));
        assert!(svg.contains(">0 °C</text>"));
        // min mode colors the January cell by its 2 °C minimum
        assert!(svg.to_lowercase().contains(&color.color(2.0)));
    }

    #[tokio::test]
    async fn test_run_render_writes_file() {
        let dir = std::env::temp_dir().join(format!("tmx-cmd-render-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("daily.csv");
        let output = dir.join("matrix.svg");
        std::fs::write(&input, SAMPLE).unwrap();

        run_render(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            ViewMode::Max,
        )
        .await
        .unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.trim_end().ends_with("</svg>"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
