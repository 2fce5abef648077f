// src/gui/components/scatter_map.rs
//
// Scatter of bridge positions on a plain lon/lat canvas (no tiles).
// Equirectangular around the view centre, scaled like a web map at the
// given zoom. Drag pans, double-click recentres, hover shows the tooltip.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Vec2};

use crate::present::{MapPoint, MapView};

const TILE_PX: f64 = 256.0;
const METERS_PER_DEG_LAT: f64 = 111_320.0;
const MIN_RADIUS_PX: f32 = 2.5;
const HOVER_SLOP_PX: f32 = 6.0;
const POINT_FILL: Color32 = Color32::from_rgb(255, 0, 0);

/// Lon/lat ↔ screen mapping for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    center_lon: f64,
    center_lat: f64,
    origin: Pos2,
    px_per_deg: f64,
    lon_scale: f64,
}

impl Projection {
    pub fn new(view: MapView, origin: Pos2) -> Self {
        Self {
            center_lon: view.lon,
            center_lat: view.lat,
            origin,
            px_per_deg: TILE_PX * 2f64.powf(view.zoom) / 360.0,
            lon_scale: view.lat.to_radians().cos(),
        }
    }

    pub fn to_screen(&self, lon: f64, lat: f64) -> Pos2 {
        let dx = (lon - self.center_lon) * self.px_per_deg * self.lon_scale;
        let dy = (lat - self.center_lat) * self.px_per_deg;
        Pos2::new(self.origin.x + dx as f32, self.origin.y - dy as f32)
    }

    pub fn to_lon_lat(&self, p: Pos2) -> (f64, f64) {
        let dx = (p.x - self.origin.x) as f64;
        let dy = (p.y - self.origin.y) as f64;
        (
            self.center_lon + dx / (self.px_per_deg * self.lon_scale),
            self.center_lat - dy / self.px_per_deg,
        )
    }

    pub fn meters_to_px(&self, m: f64) -> f32 {
        (m / METERS_PER_DEG_LAT * self.px_per_deg) as f32
    }
}

pub fn draw(ui: &mut egui::Ui, points: &[MapPoint], view: MapView, radius_m: f64, pan: &mut (f32, f32)) {
    let size = Vec2::new(ui.available_width().max(200.0), 480.0);
    let (resp, painter) = ui.allocate_painter(size, Sense::click_and_drag());
    let rect = resp.rect;

    if resp.dragged() {
        let d = resp.drag_delta();
        pan.0 += d.x;
        pan.1 += d.y;
    }
    if resp.double_clicked() {
        *pan = (0.0, 0.0);
    }

    let fg = ui.visuals().text_color();
    painter.rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);

    let proj = Projection::new(view, rect.center() + Vec2::new(pan.0, pan.1));
    graticule(&painter, &proj, rect, fg);

    let r = proj.meters_to_px(radius_m).max(MIN_RADIUS_PX);
    let screen: Vec<Pos2> = points.iter().map(|p| proj.to_screen(p.lon, p.lat)).collect();
    for &s in &screen {
        if rect.expand(r).contains(s) {
            painter.circle_filled(s, r, POINT_FILL);
        }
    }

    if points.is_empty() {
        painter.text(rect.center(), Align2::CENTER_CENTER, "No bridges with coordinates", FontId::proportional(14.0), fg);
        return;
    }

    if let Some(pos) = resp.hover_pos() {
        let slop = r.max(HOVER_SLOP_PX);
        let nearest = screen
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.distance(pos)))
            .filter(|&(_, d)| d <= slop)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((i, _)) = nearest {
            resp.on_hover_text_at_pointer(points[i].tooltip.as_str());
        }
    }
}

/// Whole-degree lon/lat lines across the visible area.
fn graticule(painter: &egui::Painter, proj: &Projection, rect: egui::Rect, fg: Color32) {
    let stroke = Stroke::new(0.5, fg.gamma_multiply(0.3));
    let font = FontId::proportional(10.0);
    let (lon0, lat0) = proj.to_lon_lat(rect.left_bottom());
    let (lon1, lat1) = proj.to_lon_lat(rect.right_top());

    for lon in (lon0.ceil() as i32)..=(lon1.floor() as i32) {
        let x = proj.to_screen(lon as f64, 0.0).x;
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        painter.text(Pos2::new(x + 2.0, rect.bottom() - 2.0), Align2::LEFT_BOTTOM, format!("{lon}°"), font.clone(), fg);
    }
    for lat in (lat0.ceil() as i32)..=(lat1.floor() as i32) {
        let y = proj.to_screen(proj.center_lon, lat as f64).y;
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        painter.text(Pos2::new(rect.left() + 2.0, y - 2.0), Align2::LEFT_BOTTOM, format!("{lat}°"), font.clone(), fg);
    }
}
