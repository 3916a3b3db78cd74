//! Character-grid renderers for the drawing traits

use crate::core::data::LineChart;
use crate::core::traits::{DotCanvas, LinePlotter};
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::format_float;
use crate::utils::output::OutputStyle;
use crate::utils::pagination::get_terminal_size;
use std::io::{self, Stdout, Write};

const SERIES_MARKERS: [char; 4] = ['*', '+', 'o', 'x'];

/// Pick a grid size: configured values win, otherwise fit the terminal
pub fn grid_size(width: u16, height: u16) -> (usize, usize) {
    let (rows, cols) = get_terminal_size().unwrap_or((24, 80));
    let width = if width > 0 { width } else { cols.saturating_sub(12).max(20) };
    let height = if height > 0 { height } else { rows.saturating_sub(8).max(10) };
    (width as usize, height as usize)
}

fn blank_grid(width: usize, height: usize) -> Vec<Vec<char>> {
    vec![vec![' '; width]; height]
}

fn write_rendered<W: Write>(out: &mut W, rendered: &str) -> AppResult<()> {
    out.write_all(rendered.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| AppError::Io(e.to_string()))
}

/// Dot plot on a character grid; x and y both span `-range..=range`
pub struct TerminalCanvas<W: Write = Stdout> {
    out: W,
    width: usize,
    height: usize,
    range: f64,
    cells: Vec<Vec<char>>,
    dots: usize,
}

impl TerminalCanvas<Stdout> {
    pub fn stdout(width: usize, height: usize) -> Self {
        Self::new(io::stdout(), width, height)
    }
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, width: usize, height: usize) -> Self {
        let width = width.max(3);
        let height = height.max(3);
        Self {
            out,
            width,
            height,
            range: 1.0,
            cells: blank_grid(width, height),
            dots: 0,
        }
    }

    fn cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if x.abs() > self.range || y.abs() > self.range {
            return None;
        }
        let col = ((x + self.range) / (2.0 * self.range) * (self.width - 1) as f64).round() as usize;
        let row = ((self.range - y) / (2.0 * self.range) * (self.height - 1) as f64).round() as usize;
        Some((row.min(self.height - 1), col.min(self.width - 1)))
    }

    /// The grid as text, one line per row
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for row in &self.cells {
            rendered.push_str(row.iter().collect::<String>().trim_end());
            rendered.push('\n');
        }
        rendered
    }

    pub fn dots_drawn(&self) -> usize {
        self.dots
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DotCanvas for TerminalCanvas<W> {
    fn set_world_coordinates(&mut self, range: f64) {
        self.range = range;
        self.cells = blank_grid(self.width, self.height);
    }

    fn dot(&mut self, x: f64, y: f64, size: u32) {
        let marker = if size >= 8 { '●' } else { '•' };
        if let Some((row, col)) = self.cell(x, y) {
            self.cells[row][col] = marker;
            self.dots += 1;
        }
    }

    fn finish(&mut self) -> AppResult<()> {
        let rendered = self.render();
        write_rendered(&mut self.out, &rendered)
    }
}

/// Line chart on a character grid, one marker per series
pub struct TerminalChart<W: Write = Stdout> {
    out: W,
    width: usize,
    height: usize,
}

impl TerminalChart<Stdout> {
    pub fn stdout(width: usize, height: usize) -> Self {
        Self::new(io::stdout(), width, height)
    }
}

impl<W: Write> TerminalChart<W> {
    pub fn new(out: W, width: usize, height: usize) -> Self {
        Self {
            out,
            width: width.max(2),
            height: height.max(2),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Lay the chart out as text
    pub fn render(&self, chart: &LineChart) -> String {
        let mut cells = blank_grid(self.width, self.height);
        let (lo, hi) = chart.value_bounds().unwrap_or((0.0, 1.0));
        let spread = if hi > lo { hi - lo } else { 1.0 };
        let points = chart.max_len().max(2);

        for (series, marker) in chart.series.iter().zip(SERIES_MARKERS.iter().cycle()) {
            for (i, &value) in series.values.iter().enumerate() {
                if !value.is_finite() {
                    continue;
                }
                let col = (i as f64 / (points - 1) as f64 * (self.width - 1) as f64).round() as usize;
                let row = ((hi - value) / spread * (self.height - 1) as f64).round() as usize;
                cells[row.min(self.height - 1)][col.min(self.width - 1)] = *marker;
            }
        }

        let hi_label = format_float(hi);
        let lo_label = format_float(lo);
        let gutter = hi_label.len().max(lo_label.len());

        let mut rendered = format!("{}\n", OutputStyle::title(&chart.title));
        rendered.push_str(&format!("{}\n", OutputStyle::muted(&chart.y_label)));
        for (i, row) in cells.iter().enumerate() {
            let label = match i {
                0 => hi_label.as_str(),
                _ if i == self.height - 1 => lo_label.as_str(),
                _ => "",
            };
            rendered.push_str(&format!(
                "{:>gutter$} │{}\n",
                label,
                row.iter().collect::<String>().trim_end(),
                gutter = gutter
            ));
        }
        rendered.push_str(&format!("{:>gutter$} └{}\n", "", "─".repeat(self.width), gutter = gutter));
        rendered.push_str(&format!(
            "{:>gutter$}  {} (1 to {})\n",
            "",
            OutputStyle::muted(&chart.x_label),
            chart.max_len(),
            gutter = gutter
        ));

        for (series, marker) in chart.series.iter().zip(SERIES_MARKERS.iter().cycle()) {
            rendered.push_str(&format!("  {} {}\n", marker, OutputStyle::label(&series.label)));
        }
        rendered
    }
}

impl<W: Write> LinePlotter for TerminalChart<W> {
    fn plot(&mut self, chart: &LineChart) -> AppResult<()> {
        let rendered = self.render(chart);
        write_rendered(&mut self.out, &rendered)
    }
}
