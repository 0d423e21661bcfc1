use egui::{Color32, Context, Id, LayerId, Order, Pos2, Rect, ecolor::Hsva, vec2};
use rand::Rng;

const PARTICLE_COUNT: usize = 50;
const FALL_SECONDS: f32 = 3.0;

struct Particle {
    x: f32,
    speed: f32,
    delay: f32,
    drift: f32,
    hue: f32,
    size: f32,
}

/// Celebratory burst for excellent-or-better results: a short shower of
/// colored flakes painted over everything else.
pub struct Confetti {
    particles: Vec<Particle>,
    started_at: Option<f64>,
}

impl Confetti {
    pub fn burst() -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                speed: rng.gen_range(0.35..0.75),
                delay: rng.gen_range(0.0..0.5),
                drift: rng.gen_range(-0.04..0.04),
                hue: rng.gen_range(0.0..1.0),
                size: rng.gen_range(5.0..9.0),
            })
            .collect();
        Self {
            particles,
            started_at: None,
        }
    }

    /// Paints one frame. Returns false once the shower has finished.
    pub fn draw(&mut self, ctx: &Context) -> bool {
        let now = ctx.input(|i| i.time);
        let start = *self.started_at.get_or_insert(now);
        let elapsed = (now - start) as f32;
        if elapsed > FALL_SECONDS + 0.5 {
            return false;
        }

        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti")));

        for p in &self.particles {
            let t = elapsed - p.delay;
            if t < 0.0 {
                continue;
            }
            let y = screen.top() + t / FALL_SECONDS * p.speed * 4.0 * screen.height();
            if y > screen.bottom() {
                continue;
            }
            let x = screen.left()
                + (p.x + p.drift * (t * 6.0 + p.hue * 10.0).sin()) * screen.width();
            let color = Color32::from(Hsva::new(p.hue, 0.7, 0.9, 1.0));
            let rect = Rect::from_center_size(Pos2::new(x, y), vec2(p.size, p.size * 1.6));
            painter.rect_filled(rect, 1, color);
        }

        ctx.request_repaint();
        true
    }
}
