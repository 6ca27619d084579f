use std::mem;

use config::LifeConfig;
use error::GridError;
use grid::{Dimensions, Grid};
use tracing::trace;

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pos;
pub mod rule;

/// A running simulation: the visible generation plus the scratch buffer the next one is written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Life {
    current: Grid,
    next: Grid,
    generation: u64,
    changed: bool,
}

impl Life {
    pub fn new(dimensions: Dimensions) -> Self {
        Self::from_grid(Grid::with_dimensions(dimensions))
    }

    pub fn from_grid(grid: Grid) -> Self {
        let next = Grid::with_dimensions(grid.dimensions());

        Self {
            current: grid,
            next,
            generation: 0,
            changed: true,
        }
    }

    /// Builds a session sized by `config` and seeds it with a random population.
    pub fn seeded(config: &LifeConfig) -> Result<Self, GridError> {
        let mut life = Self::new(config.dimensions()?);
        life.current.randomize(config.alive_threshold);
        Ok(life)
    }

    pub fn tick(&mut self) {
        engine::step(&self.current, &mut self.next);
        mem::swap(&mut self.current, &mut self.next);

        self.changed = self.current != self.next;
        self.generation += 1;

        trace!(
            generation = self.generation,
            alive = self.current.live_count(),
            "Ticked"
        );
    }

    pub fn advance(&mut self, generations: usize) {
        for _ in 0..generations {
            self.tick();
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Direct access for seeding or editing. Counts as a change for [`Life::is_still`].
    pub fn current_mut(&mut self) -> &mut Grid {
        self.changed = true;
        &mut self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_extinct(&self) -> bool {
        self.current.live_count() == 0
    }

    /// True when the last tick left the grid unchanged.
    pub fn is_still(&self) -> bool {
        !self.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_swaps_buffers_and_counts_generations() {
        let grid = Grid::with_alive(3, 3, [(1, 0), (1, 1), (1, 2)]).unwrap();
        let mut life = Life::from_grid(grid.clone());

        life.tick();
        assert_eq!(life.generation(), 1);
        assert_ne!(life.current(), &grid);
        assert!(!life.is_still());

        life.tick();
        assert_eq!(life.generation(), 2);
        assert_eq!(life.current(), &grid);
    }

    #[test]
    fn still_life_is_detected() {
        let block = Grid::with_alive(4, 4, [(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
        let mut life = Life::from_grid(block);

        assert!(!life.is_still());
        life.tick();
        assert!(life.is_still());

        life.current_mut().clear();
        assert!(!life.is_still());
        assert!(life.is_extinct());
    }

    #[test]
    fn seeded_uses_config_dimensions() {
        let life = Life::seeded(&LifeConfig::default()).unwrap();

        assert_eq!(life.current().rows(), 9);
        assert_eq!(life.current().cols(), 29);
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn seeded_rejects_empty_config() {
        let config = LifeConfig {
            rows: 0,
            ..LifeConfig::default()
        };

        assert!(matches!(
            Life::seeded(&config),
            Err(GridError::InvalidDimension { rows: 0, .. })
        ));
    }
}
