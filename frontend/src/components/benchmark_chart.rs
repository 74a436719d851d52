use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use thiserror::Error;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::BenchmarkBar;
use crate::theme::Theme;

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 360;
const OURS: RGBColor = RGBColor(0x3b, 0x82, 0xf6);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("canvas backend unavailable")]
    NoBackend,
    #[error("drawing failed: {0}")]
    Draw(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(e.to_string())
    }
}

/// Upper bound of the y axis: the best score plus ten percent, capped at 100.
pub fn y_ceiling(bars: &[BenchmarkBar]) -> f64 {
    let max = bars.iter().map(|b| b.score).fold(0.0_f64, f64::max);
    (max * 1.1).min(100.0).max(1.0)
}

fn draw(canvas: HtmlCanvasElement, bars: &[BenchmarkBar], theme: Theme) -> Result<(), ChartError> {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::NoBackend)?;
    let root = backend.into_drawing_area();
    let (background, foreground, muted) = if theme.is_dark() {
        (BLACK, WHITE, RGBColor(0x8a, 0x8a, 0x8a))
    } else {
        (WHITE, BLACK, RGBColor(0x9c, 0x9c, 0x9c))
    };
    root.fill(&background)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..bars.len(), 0.0..y_ceiling(bars))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|x| bars.get(*x).map(|b| b.label.to_string()).unwrap_or_default())
        .y_label_formatter(&|y| format!("{:.0}%", y))
        .axis_style(&foreground)
        .label_style(("sans-serif", 14).into_font().color(&foreground))
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let color = if bar.is_ours { OURS } else { muted };
        let mut rect = Rectangle::new([(i, 0.0), (i + 1, bar.score)], color.filled());
        rect.set_margin(0, 0, 12, 12);
        rect
    }))?;

    root.present()?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct BenchmarkChartProps {
    pub bars: Vec<BenchmarkBar>,
    pub theme: Theme,
}

#[function_component(BenchmarkChart)]
pub fn benchmark_chart(props: &BenchmarkChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(bars, theme)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if !bars.is_empty() {
                        if let Err(e) = draw(canvas, bars, *theme) {
                            log::error!("Benchmark chart: {}", e);
                        }
                    }
                }
                || ()
            },
            (props.bars.clone(), props.theme),
        );
    }

    html! {
        <div class="benchmark-chart">
            <canvas
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                style="max-width: 100%;"
            />
            <ul class="benchmark-legend">
                {
                    for props.bars.iter().map(|bar| html! {
                        <li class={classes!(bar.is_ours.then(|| "ours"))}>
                            {format!("{}: {:.1}%", bar.label, bar.score)}
                        </li>
                    })
                }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(score: f64) -> BenchmarkBar {
        BenchmarkBar { label: "x", score, is_ours: false }
    }

    #[test]
    fn ceiling_leaves_headroom_but_stays_a_percentage() {
        assert!((y_ceiling(&[bar(50.0), bar(80.0)]) - 88.0).abs() < 1e-9);
        assert_eq!(y_ceiling(&[bar(98.5)]), 100.0);
    }

    #[test]
    fn empty_chart_still_has_an_axis() {
        assert_eq!(y_ceiling(&[]), 1.0);
    }
}
