use crate::model::Diagram;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, pos2, vec2};

const SIZE: [f32; 2] = [320.0, 170.0];

/// Dibuja el diagrama de la diapositiva en un lienzo fijo.
pub fn draw_diagram(ui: &mut Ui, diagram: Diagram) {
    let (response, painter) = ui.allocate_painter(vec2(SIZE[0], SIZE[1]), Sense::hover());
    let rect = response.rect;
    let ink = ui.visuals().strong_text_color();
    let accent = Color32::from_rgb(59, 130, 246);
    painter.rect_stroke(
        rect,
        8.0,
        Stroke::new(1.0, ui.visuals().weak_text_color()),
        egui::StrokeKind::Inside,
    );

    let pen = Pen { painter: &painter, rect, ink, accent };
    match diagram {
        Diagram::PointLinePlane => pen.point_line_plane(),
        Diagram::SegmentDerivation => pen.segment_derivation(),
        Diagram::AngleDefinition => pen.angle_definition(),
        Diagram::MidpointVisualization => pen.midpoint(),
        Diagram::ParallelPerpendicular => pen.parallel_perpendicular(),
        Diagram::CoordinateMidpoint => pen.coordinate_midpoint(),
        Diagram::GeometryMashup => pen.mashup(),
    }
}

struct Pen<'a> {
    painter: &'a Painter,
    rect: Rect,
    ink: Color32,
    accent: Color32,
}

impl Pen<'_> {
    /// Coordenadas relativas (0..1) dentro del lienzo
    fn at(&self, x: f32, y: f32) -> Pos2 {
        pos2(
            self.rect.left() + x * self.rect.width(),
            self.rect.top() + y * self.rect.height(),
        )
    }

    fn line(&self, a: Pos2, b: Pos2, color: Color32) {
        self.painter.line_segment([a, b], Stroke::new(2.0, color));
    }

    fn dot(&self, p: Pos2, label: &str) {
        self.painter.circle_filled(p, 4.0, self.accent);
        self.text(p + vec2(0.0, -12.0), label);
    }

    fn text(&self, p: Pos2, label: &str) {
        self.painter
            .text(p, Align2::CENTER_CENTER, label, FontId::proportional(13.0), self.ink);
    }

    fn arrow(&self, from: Pos2, to: Pos2) {
        self.painter.arrow(from, to - from, Stroke::new(2.0, self.ink));
    }

    fn point_line_plane(&self) {
        self.dot(self.at(0.15, 0.5), "A");
        self.text(self.at(0.15, 0.8), "Point");

        self.arrow(self.at(0.42, 0.5), self.at(0.3, 0.5));
        self.arrow(self.at(0.42, 0.5), self.at(0.55, 0.5));
        self.text(self.at(0.42, 0.8), "Line");

        let plane = vec![
            self.at(0.65, 0.65),
            self.at(0.75, 0.3),
            self.at(0.95, 0.3),
            self.at(0.85, 0.65),
        ];
        self.painter.add(egui::Shape::convex_polygon(
            plane,
            self.accent.gamma_multiply(0.25),
            Stroke::new(1.5, self.ink),
        ));
        self.text(self.at(0.8, 0.8), "Plane");
    }

    fn segment_derivation(&self) {
        self.arrow(self.at(0.5, 0.35), self.at(0.08, 0.35));
        self.arrow(self.at(0.5, 0.35), self.at(0.92, 0.35));
        self.text(self.at(0.5, 0.15), "Line");

        let a = self.at(0.3, 0.7);
        let b = self.at(0.7, 0.7);
        self.line(a, b, self.accent);
        self.dot(a, "A");
        self.dot(b, "B");
        self.text(self.at(0.5, 0.88), "Segment AB is part of the line");
    }

    fn angle_definition(&self) {
        let vertex = self.at(0.3, 0.75);
        self.arrow(vertex, self.at(0.85, 0.75));
        self.arrow(vertex, self.at(0.7, 0.2));
        self.dot(vertex, "B");
        self.text(self.at(0.88, 0.85), "C");
        self.text(self.at(0.72, 0.1), "A");
        self.text(self.at(0.45, 0.62), "∠ABC");
    }

    fn midpoint(&self) {
        let a = self.at(0.1, 0.5);
        let m = self.at(0.5, 0.5);
        let b = self.at(0.9, 0.5);
        self.line(a, b, self.ink);
        self.dot(a, "A");
        self.dot(m, "M");
        self.dot(b, "B");
        self.text(self.at(0.3, 0.7), "AM");
        self.text(self.at(0.7, 0.7), "MB");
        self.text(self.at(0.5, 0.88), "AM = MB");
    }

    fn parallel_perpendicular(&self) {
        self.line(self.at(0.05, 0.3), self.at(0.45, 0.3), self.ink);
        self.line(self.at(0.05, 0.6), self.at(0.45, 0.6), self.ink);
        self.text(self.at(0.25, 0.85), "Parallel");

        let cross = self.at(0.75, 0.5);
        self.line(self.at(0.55, 0.5), self.at(0.95, 0.5), self.ink);
        self.line(self.at(0.75, 0.1), self.at(0.75, 0.75), self.ink);
        self.painter.rect_stroke(
            Rect::from_min_size(cross - vec2(0.0, 10.0), vec2(10.0, 10.0)),
            0.0,
            Stroke::new(1.5, self.accent),
            egui::StrokeKind::Middle,
        );
        self.text(self.at(0.75, 0.85), "Perpendicular");
    }

    fn coordinate_midpoint(&self) {
        let origin = self.at(0.1, 0.85);
        self.arrow(origin, self.at(0.95, 0.85));
        self.arrow(origin, self.at(0.1, 0.08));
        let p = self.at(0.25, 0.65);
        let q = self.at(0.8, 0.25);
        self.line(p, q, self.accent);
        self.dot(p, "(x₁, y₁)");
        self.dot(q, "(x₂, y₂)");
        self.dot(self.at(0.525, 0.45), "M");
        self.text(self.at(0.62, 0.72), "M = ((x₁+x₂)/2, (y₁+y₂)/2)");
    }

    fn mashup(&self) {
        let vertex = self.at(0.2, 0.8);
        self.arrow(vertex, self.at(0.55, 0.8));
        self.arrow(vertex, self.at(0.45, 0.3));
        self.dot(vertex, "");
        self.line(self.at(0.6, 0.3), self.at(0.95, 0.3), self.ink);
        self.line(self.at(0.6, 0.45), self.at(0.95, 0.45), self.ink);
        self.dot(self.at(0.775, 0.7), "M");
        self.text(self.at(0.5, 0.1), "Segments · Angles · Lines");
    }
}
