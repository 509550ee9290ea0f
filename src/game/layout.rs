//! Letterboxing the fixed logical screen into the window

/// Uniform scale plus centring offset from logical to window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    /// Largest uniform scale that fits `logical` inside `outside`, centred
    pub fn fit(outside: (f32, f32), logical: (f32, f32)) -> Self {
        let (ow, oh) = outside;
        let (lw, lh) = logical;
        if ow <= 0.0 || oh <= 0.0 || lw <= 0.0 || lh <= 0.0 {
            // Minimised window
            return Self { scale: 0.0, offset_x: 0.0, offset_y: 0.0 };
        }

        let scale = (ow / lw).min(oh / lh);
        Self {
            scale,
            offset_x: (ow - lw * scale) / 2.0,
            offset_y: (oh - lh * scale) / 2.0,
        }
    }

    /// Map a logical point to window pixels
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (self.offset_x + x * self.scale, self.offset_y + y * self.scale)
    }
}
