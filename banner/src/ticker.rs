use std::{io::Write, time::Duration};

use liblife::Life;
use tracing::{debug, info, warn};

use crate::{
    config::BannerConfig,
    renderer::{Renderer, sleeper::Sleeper},
};

/// Draws, waits and ticks until the configured number of generations has been shown.
pub fn run_animation<W>(
    life: &mut Life,
    config: &BannerConfig,
    renderer: &mut Renderer<W>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut sleeper = Sleeper::new(Duration::from_millis(config.frame_interval_millis));

    info!(
        rows = life.current().rows(),
        cols = life.current().cols(),
        interval_millis = config.frame_interval_millis,
        generations = ?config.generations,
        "Starting banner"
    );

    loop {
        renderer.draw(life.current())?;

        if config
            .generations
            .is_some_and(|generations| life.generation() >= generations)
        {
            break;
        }

        if !sleeper.in_time() {
            debug!(generation = life.generation(), "Frame ran over its interval");
        }
        sleeper.sleep();

        life.tick();

        if config.reseed_when_stale && (life.is_extinct() || life.is_still()) {
            warn!(
                generation = life.generation(),
                extinct = life.is_extinct(),
                "Banner went stale, reseeding"
            );
            life.current_mut().randomize(config.life.alive_threshold);
        }
    }

    info!(
        generation = life.generation(),
        frames = renderer.drawn_frames(),
        "Banner finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use liblife::grid::Grid;

    use super::*;

    fn test_config(generations: u64, reseed_when_stale: bool) -> BannerConfig {
        BannerConfig {
            frame_interval_millis: 0,
            generations: Some(generations),
            reseed_when_stale,
            ..BannerConfig::default()
        }
    }

    fn plain_renderer() -> Renderer<Vec<u8>> {
        let mut renderer = Renderer::new(Vec::new(), Default::default()).scrolling();
        renderer.frame_mut().colorize = false;
        renderer
    }

    #[test]
    fn draws_the_seed_and_every_generation() {
        let blinker = Grid::with_alive(3, 3, [(1, 0), (1, 1), (1, 2)]).unwrap();
        let mut life = Life::from_grid(blinker);
        let mut renderer = plain_renderer();

        run_animation(&mut life, &test_config(2, false), &mut renderer).unwrap();

        assert_eq!(life.generation(), 2);
        assert_eq!(renderer.drawn_frames(), 3);

        let written = String::from_utf8(renderer.into_inner()).unwrap();
        let horizontal = "......\n######\n......\n";
        let vertical = "..##..\n..##..\n..##..\n";
        assert_eq!(written, format!("{horizontal}{vertical}{horizontal}"));
    }

    #[test]
    fn extinct_banner_is_reseeded() {
        let lonely = Grid::with_alive(9, 29, [(4, 4)]).unwrap();
        let mut life = Life::from_grid(lonely);
        let mut config = test_config(1, true);
        config.life.alive_threshold = -1.0;

        run_animation(&mut life, &config, &mut plain_renderer()).unwrap();

        assert_eq!(life.current().live_count(), 9 * 29);
    }

    #[test]
    fn stale_banner_is_left_alone_without_reseeding() {
        let lonely = Grid::with_alive(9, 29, [(4, 4)]).unwrap();
        let mut life = Life::from_grid(lonely);

        run_animation(&mut life, &test_config(3, false), &mut plain_renderer()).unwrap();

        assert!(life.is_extinct());
    }
}
