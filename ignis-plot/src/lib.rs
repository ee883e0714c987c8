//! On-screen line plots for sweep results.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};

/// A runnable egui application for plotting sweep series.
///
/// Series are `[x, y]` pairs, as produced by `Sweep::series` in
/// `ignis-core`, though any pair data plots the same way.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
    x_label: Option<String>,
    y_label: Option<String>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named line series.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
        });

        self
    }

    /// Sets the axis labels.
    #[must_use]
    pub fn with_axis_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self.y_label = Some(y_label.to_string());

        self
    }

    /// Opens a native window titled `name` and blocks until it is closed.
    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot-id").legend(Legend::default());

            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label);
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label);
            }

            plot.show(ui, |plot_ui| {
                for series in &self.series {
                    let points = series.points.as_slice();
                    let name = &series.name;

                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}
