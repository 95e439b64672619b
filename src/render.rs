use comparator_core::{DialStyle, DrawCommand, Scene};
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D painter for dial scenes.
pub struct DialPainter {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub style: DialStyle,
}

impl DialPainter {
    pub fn new(canvas: web::HtmlCanvasElement, style: DialStyle) -> anyhow::Result<Self> {
        use wasm_bindgen::JsCast;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx, style })
    }

    /// Resize for the current pixel density and repaint the whole scene.
    pub fn paint(&self, scene: &Scene) {
        let dpr = crate::dom::sync_canvas_backing_size(&self.canvas, self.style.size);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        for command in scene.commands() {
            self.draw(command);
        }
    }

    fn draw(&self, command: &DrawCommand) {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear => {
                let s = self.style.size as f64;
                ctx.clear_rect(0.0, 0.0, s, s);
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                ctx.begin_path();
                _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                if let Some(fill) = fill {
                    ctx.set_fill_style_str(&fill.to_css());
                    ctx.fill();
                }
                if let Some(stroke) = stroke {
                    ctx.set_stroke_style_str(&stroke.color.to_css());
                    ctx.set_line_width(stroke.width as f64);
                    ctx.stroke();
                }
            }
            DrawCommand::Rect { min, size, fill } => {
                ctx.set_fill_style_str(&fill.to_css());
                ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::Line {
                from,
                to,
                stroke,
                round_cap,
            } => {
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.set_stroke_style_str(&stroke.color.to_css());
                ctx.set_line_width(stroke.width as f64);
                ctx.set_line_cap(if *round_cap { "round" } else { "butt" });
                ctx.stroke();
            }
            DrawCommand::Polygon {
                points,
                fill,
                stroke,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return;
                };
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.close_path();
                ctx.set_fill_style_str(&fill.to_css());
                ctx.fill();
                ctx.set_stroke_style_str(&stroke.color.to_css());
                ctx.set_line_width(stroke.width as f64);
                ctx.stroke();
            }
            DrawCommand::Text {
                at,
                text,
                size_px,
                bold,
                color,
            } => {
                let weight = if *bold { "bold " } else { "" };
                ctx.set_font(&format!("{weight}{size_px}px {}", self.style.font_family));
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.set_fill_style_str(&color.to_css());
                _ = ctx.fill_text(text, at.x as f64, at.y as f64);
            }
        }
    }
}
