use jiggle::{Canvas, Color, System, SystemConfig, Vec2};
use wasm_bindgen::prelude::*;

/// Draw commands flattened for transfer to JavaScript.
#[derive(Default)]
struct FrameBuffer {
    /// [x, y, radius] per circle.
    circles: Vec<f32>,
    circle_colors: Vec<u32>,
    /// [x0, y0, x1, y1, thickness] per line.
    lines: Vec<f32>,
    line_colors: Vec<u32>,
}

impl FrameBuffer {
    fn clear(&mut self) {
        self.circles.clear();
        self.circle_colors.clear();
        self.lines.clear();
        self.line_colors.clear();
    }
}

impl Canvas<f32> for FrameBuffer {
    fn draw_circle(&mut self, center: Vec2<f32>, radius: f32, color: Color) {
        self.circles.extend_from_slice(&[center.x, center.y, radius]);
        self.circle_colors.push(color.to_u32());
    }

    fn draw_line(&mut self, from: Vec2<f32>, to: Vec2<f32>, thickness: f32, color: Color) {
        if color.is_transparent() {
            return;
        }
        self.lines.extend_from_slice(&[from.x, from.y, to.x, to.y, thickness]);
        self.line_colors.push(color.to_u32());
    }
}

// ---- Bouncing Ball Demo ----

#[wasm_bindgen]
pub struct BallDemo {
    system: System<f32>,
    ball: Vec<usize>,
    frame: FrameBuffer,
    poke_strength: f32,
}

#[wasm_bindgen]
impl BallDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, segments: usize) -> Result<BallDemo, JsValue> {
        let config = SystemConfig::new().with_damping(0.4);
        let mut system = System::with_config(width, height, config);
        let ball = system
            .create_ring(Vec2::new(width * 0.5, height * 0.25), 40.0, segments, 6.0, 1.0, 1.0)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let outline = Color::rgb(240, 160, 60);
        for &i in &ball {
            system.point_mut(i).color = outline;
        }
        for s in 0..segments {
            system.spring_mut(s).color = outline;
        }
        Ok(BallDemo {
            system,
            ball,
            frame: FrameBuffer::default(),
            poke_strength: 6.0,
        })
    }

    pub fn update(&mut self, dt: f32) {
        self.system.update(dt);
        self.frame.clear();
        self.system.draw(&mut self.frame);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.system.update_screen_size(width, height);
    }

    /// Kick the ball point nearest to (x, y) away from the click.
    pub fn poke(&mut self, x: f32, y: f32) {
        let at = Vec2::new(x, y);
        if let Some(center) = self.system.centroid(&self.ball) {
            let away = center - at;
            let len = (away.x * away.x + away.y * away.y).sqrt().max(1.0);
            let kick = Vec2::new(away.x / len, away.y / len - 1.0);
            self.system.poke(at, Vec2::new(kick.x * self.poke_strength, kick.y * self.poke_strength));
        }
    }

    pub fn set_poke_strength(&mut self, strength: f32) {
        self.poke_strength = strength;
    }

    /// Flat [x, y, radius] per drawn point, from the last update.
    pub fn circles(&self) -> Vec<f32> {
        self.frame.circles.clone()
    }

    /// `0xRRGGBBAA` per drawn point.
    pub fn circle_colors(&self) -> Vec<u32> {
        self.frame.circle_colors.clone()
    }

    /// Flat [x0, y0, x1, y1, thickness] per drawn spring.
    pub fn lines(&self) -> Vec<f32> {
        self.frame.lines.clone()
    }

    /// `0xRRGGBBAA` per drawn spring.
    pub fn line_colors(&self) -> Vec<u32> {
        self.frame.line_colors.clone()
    }

    /// Returns flat [x0, y0, x1, y1, ...] ball outline positions.
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.ball.len() * 2);
        for &i in &self.ball {
            let p = self.system.point(i).pos;
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    pub fn point_count(&self) -> usize {
        self.system.point_count()
    }
}
