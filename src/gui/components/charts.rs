// src/gui/components/charts.rs
//
// Pie, bar and line charts drawn straight onto an egui Painter.
// All three tolerate empty input and just print "No data".

use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::present::{BarChart, LineSeries, PieSlice};

const PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
    Color32::from_rgb(0xd6, 0x27, 0x28),
    Color32::from_rgb(0x94, 0x67, 0xbd),
    Color32::from_rgb(0x8c, 0x56, 0x4b),
    Color32::from_rgb(0xe3, 0x77, 0xc2),
    Color32::from_rgb(0x7f, 0x7f, 0x7f),
    Color32::from_rgb(0xbc, 0xbd, 0x22),
    Color32::from_rgb(0x17, 0xbe, 0xcf),
];
const SKY_BLUE: Color32 = Color32::from_rgb(0x87, 0xce, 0xeb);

// Pie starts at 140° (counter-clockwise from 3 o'clock)
const PIE_START: f32 = 140.0 / 360.0 * TAU;
const PIE_STEP: f32 = TAU / 120.0;

const MARGIN_L: f32 = 48.0;
const MARGIN_B: f32 = 36.0;
const MARGIN_T: f32 = 8.0;
const MARGIN_R: f32 = 12.0;

pub fn color(i: usize) -> Color32 { PALETTE[i % PALETTE.len()] }

fn allocate(ui: &mut egui::Ui, height: f32) -> (egui::Response, egui::Painter) {
    let w = ui.available_width().max(200.0);
    ui.allocate_painter(Vec2::new(w, height), Sense::hover())
}

fn text_color(ui: &egui::Ui) -> Color32 { ui.visuals().text_color() }

fn no_data(painter: &egui::Painter, rect: Rect, color: Color32) {
    painter.text(rect.center(), Align2::CENTER_CENTER, "No data", FontId::proportional(14.0), color);
}

/* ---------------- Pie ---------------- */

fn on_circle(center: Pos2, r: f32, a: f32) -> Pos2 {
    // Screen y grows downward
    center + Vec2::new(r * a.cos(), -r * a.sin())
}

fn wedge(painter: &egui::Painter, center: Pos2, r: f32, a0: f32, a1: f32, fill: Color32) {
    let steps = ((a1 - a0) / PIE_STEP).ceil().max(1.0) as usize;
    let d = (a1 - a0) / steps as f32;
    for k in 0..steps {
        let pts = vec![
            center,
            on_circle(center, r, a0 + d * k as f32),
            on_circle(center, r, a0 + d * (k + 1) as f32),
        ];
        painter.add(Shape::convex_polygon(pts, fill, Stroke::new(0.5, fill)));
    }
}

pub fn pie(ui: &mut egui::Ui, slices: &[PieSlice]) {
    let (resp, painter) = allocate(ui, 380.0);
    let rect = resp.rect;
    let fg = text_color(ui);

    if slices.iter().all(|s| s.count == 0) {
        no_data(&painter, rect, fg);
        return;
    }

    let center = rect.center();
    let r = rect.height().min(rect.width()) * 0.34;
    let font = FontId::proportional(12.0);

    let mut a = PIE_START;
    for (i, s) in slices.iter().enumerate() {
        let sweep = (s.percent / 100.0) as f32 * TAU;
        if sweep <= 0.0 { continue; }
        wedge(&painter, center, r, a, a + sweep, color(i));

        let mid = a + sweep / 2.0;
        let outer = on_circle(center, r * 1.12, mid);
        let align = if mid.cos() >= 0.0 { Align2::LEFT_CENTER } else { Align2::RIGHT_CENTER };
        painter.text(outer, align, &s.label, font.clone(), fg);
        painter.text(on_circle(center, r * 0.6, mid), Align2::CENTER_CENTER, s.percent_label(), font.clone(), Color32::BLACK);
        a += sweep;
    }
}

/* ---------------- Axes ---------------- */

struct Axes {
    plot: Rect,
    x_min: f32,
    x_max: f32,
    y_max: f32,
}

impl Axes {
    fn new(rect: Rect, x_min: f32, x_max: f32, y_max: f32) -> Self {
        let plot = Rect::from_min_max(
            Pos2::new(rect.left() + MARGIN_L, rect.top() + MARGIN_T),
            Pos2::new(rect.right() - MARGIN_R, rect.bottom() - MARGIN_B),
        );
        Self { plot, x_min, x_max, y_max: y_max.max(1.0) }
    }

    fn x(&self, v: f32) -> f32 {
        let span = (self.x_max - self.x_min).max(1.0);
        self.plot.left() + (v - self.x_min) / span * self.plot.width()
    }

    fn y(&self, v: f32) -> f32 {
        self.plot.bottom() - v / self.y_max * self.plot.height()
    }

    fn draw(&self, painter: &egui::Painter, fg: Color32, x_label: &str, y_label: &str, grid: bool) {
        let stroke = Stroke::new(1.0, fg);
        let font = FontId::proportional(11.0);
        painter.line_segment([self.plot.left_bottom(), self.plot.right_bottom()], stroke);
        painter.line_segment([self.plot.left_bottom(), self.plot.left_top()], stroke);

        for k in 0..=4 {
            let v = self.y_max * k as f32 / 4.0;
            let y = self.y(v);
            painter.text(Pos2::new(self.plot.left() - 4.0, y), Align2::RIGHT_CENTER, format!("{v:.0}"), font.clone(), fg);
            if grid && k > 0 {
                let line = [Pos2::new(self.plot.left(), y), Pos2::new(self.plot.right(), y)];
                painter.extend(Shape::dashed_line(&line, Stroke::new(0.5, fg.gamma_multiply(0.5)), 6.0, 4.0));
            }
        }

        let bottom = self.plot.bottom() + MARGIN_B - 4.0;
        painter.text(Pos2::new(self.plot.center().x, bottom), Align2::CENTER_BOTTOM, x_label, font.clone(), fg);
        painter.text(Pos2::new(self.plot.left() - MARGIN_L + 2.0, self.plot.top()), Align2::LEFT_TOP, y_label, font, fg);
    }

    /// Year labels roughly every `step` years.
    fn year_ticks(&self, painter: &egui::Painter, fg: Color32, first: i32, last: i32) {
        let span = (last - first).max(1);
        let step = ((span as f32 / 10.0).ceil() as i32).max(1);
        let font = FontId::proportional(11.0);
        let mut y = first;
        while y <= last {
            painter.text(
                Pos2::new(self.x(y as f32), self.plot.bottom() + 3.0),
                Align2::CENTER_TOP,
                y.to_string(),
                font.clone(),
                fg,
            );
            y += step;
        }
    }
}

/* ---------------- Bar ---------------- */

pub fn bars(ui: &mut egui::Ui, chart: &BarChart, x_label: &str, y_label: &str) {
    let (resp, painter) = allocate(ui, 320.0);
    let fg = text_color(ui);

    let (Some(&(first, _)), Some(&(last, _))) = (chart.bars.first(), chart.bars.last()) else {
        no_data(&painter, resp.rect, fg);
        return;
    };

    // One slot per year in range so gaps stay visible
    let axes = Axes::new(resp.rect, first as f32 - 0.5, last as f32 + 0.5, chart.y_max as f32);
    let slot = axes.plot.width() / ((last - first + 1) as f32);
    let half = (slot * 0.4).max(0.5);

    for &(year, n) in &chart.bars {
        let x = axes.x(year as f32);
        let bar = Rect::from_min_max(Pos2::new(x - half, axes.y(n as f32)), Pos2::new(x + half, axes.plot.bottom()));
        painter.rect_filled(bar, 0.0, SKY_BLUE);
    }

    axes.draw(&painter, fg, x_label, y_label, false);
    axes.year_ticks(&painter, fg, first, last);

    if let Some(pos) = resp.hover_pos() {
        let year = (first as f32 + (pos.x - axes.plot.left()) / slot).floor() as i32;
        if let Some((_, n)) = chart.bars.iter().find(|(y, _)| *y == year) {
            resp.on_hover_text_at_pointer(format!("{year}: {n}"));
        }
    }
}

/* ---------------- Line ---------------- */

pub fn lines(ui: &mut egui::Ui, series: &[LineSeries], x_label: &str, y_label: &str, legend_title: &str) {
    let (resp, painter) = allocate(ui, 360.0);
    let fg = text_color(ui);

    let years = series.iter().flat_map(|s| s.points.iter().map(|&(y, _)| y));
    let (first, last) = years.fold((i32::MAX, i32::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
    if first > last {
        no_data(&painter, resp.rect, fg);
        return;
    }
    let y_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(_, n)| n))
        .max()
        .unwrap_or(0);

    let axes = Axes::new(resp.rect, first as f32, last as f32, y_max as f32 * 1.05);
    axes.draw(&painter, fg, x_label, y_label, true);
    axes.year_ticks(&painter, fg, first, last);

    for (i, s) in series.iter().enumerate() {
        let c = color(i);
        let pts: Vec<Pos2> = s
            .points
            .iter()
            .map(|&(y, n)| Pos2::new(axes.x(y as f32), axes.y(n as f32)))
            .collect();
        if pts.len() > 1 {
            painter.add(Shape::line(pts.clone(), Stroke::new(1.5, c)));
        }
        for p in pts {
            painter.circle_filled(p, 3.0, c);
        }
    }

    legend(&painter, axes.plot, fg, legend_title, series);
}

fn legend(painter: &egui::Painter, plot: Rect, fg: Color32, title: &str, series: &[LineSeries]) {
    if series.is_empty() { return; }
    let font = FontId::proportional(12.0);
    let row_h = 16.0;
    let w = 150.0;
    let h = row_h * (series.len() + 1) as f32 + 6.0;
    let frame = Rect::from_min_size(Pos2::new(plot.right() - w - 4.0, plot.top() + 4.0), Vec2::new(w, h));

    painter.rect_filled(frame, 3.0, painter.ctx().style().visuals.panel_fill.gamma_multiply(0.9));
    painter.text(frame.left_top() + Vec2::new(6.0, 3.0), Align2::LEFT_TOP, title, font.clone(), fg);
    for (i, s) in series.iter().enumerate() {
        let y = frame.top() + 3.0 + row_h * (i + 1) as f32 + row_h / 2.0;
        let x = frame.left() + 6.0;
        painter.line_segment([Pos2::new(x, y), Pos2::new(x + 16.0, y)], Stroke::new(2.0, color(i)));
        painter.text(Pos2::new(x + 22.0, y), Align2::LEFT_CENTER, &s.label, font.clone(), fg);
    }
}
