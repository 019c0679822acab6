/// Parameters of the confetti burst fired after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiBurst {
    pub particle_count: u32,

    /// Spread angle in degrees
    pub spread: f32,

    /// Vertical origin, 0.0 (top) to 1.0 (bottom) of the viewport
    pub origin_y: f32,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            origin_y: 0.6,
        }
    }
}

/// One-shot visual confirmation. Rendering belongs to the view layer.
pub trait CelebrationEffect: Send + Sync {
    fn celebrate(&self, burst: &ConfettiBurst);
}

/// Effect that does nothing, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCelebration;

impl CelebrationEffect for NoCelebration {
    fn celebrate(&self, _burst: &ConfettiBurst) {}
}
