//! Decorative particles drifting behind the idle swarm screen.

use rand::Rng;
use serde::Serialize;

/// One particle, positioned in percent of the backdrop
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    /// Seconds per drift cycle
    pub duration: f64,
    /// Seconds before the first cycle
    pub delay: f64,
}

/// Particles generated once per mount
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                left: rng.random_range(0.0..100.0),
                top: rng.random_range(0.0..100.0),
                duration: 3.0 + rng.random_range(0.0..2.0),
                delay: rng.random_range(0.0..2.0),
            })
            .collect();

        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Rasterise onto a `width` x `height` character grid
    pub fn to_grid(&self, width: usize, height: usize) -> Vec<String> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let mut grid = vec![vec![' '; width]; height];

        for p in &self.particles {
            let col = ((p.left / 100.0) * width as f64) as usize;
            let row = ((p.top / 100.0) * height as f64) as usize;
            grid[row.min(height - 1)][col.min(width - 1)] = '·';
        }

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}
