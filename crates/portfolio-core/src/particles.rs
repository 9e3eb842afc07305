//! Decorative floating particles for the hero background.

use rand::Rng;

/// One particle's randomised geometry and animation timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Diameter in px, 1-5
    pub size: f64,
    /// Horizontal position in percent
    pub x: f64,
    /// Vertical position in percent
    pub y: f64,
    /// Animation delay in seconds, 0-5
    pub delay: f64,
    /// Animation period in seconds, 10-20
    pub duration: f64,
    /// Base opacity, 0.1-0.4
    pub opacity: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(1.0..5.0),
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..5.0),
            duration: rng.random_range(10.0..20.0),
            opacity: rng.random_range(0.1..0.4),
        }
    }

    /// Inline style for the particle element
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {x:.2}%; top: {y:.2}%; \
             opacity: {opacity:.2}; animation: float-particle {duration:.2}s linear {delay:.2}s infinite;",
            size = self.size,
            x = self.x,
            y = self.y,
            opacity = self.opacity,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// Generate `count` particles from `rng`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
