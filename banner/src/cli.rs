use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use liblife::{Life, pos::Position};
use tracing::debug;

use crate::{config::BannerConfig, renderer::Renderer};

/// What the console loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Console<W>
where
    W: Write,
{
    pub life: Life,
    pub config: BannerConfig,
    pub renderer: Renderer<W>,
}

impl<W> Console<W>
where
    W: Write,
{
    pub fn new(life: Life, config: BannerConfig, renderer: Renderer<W>) -> Self {
        Self {
            life,
            config,
            renderer: renderer.scrolling(),
        }
    }

    /// Reads commands line by line until `exit` or end of input.
    pub fn run<R, E>(&mut self, input: R, mut replies: E) -> anyhow::Result<()>
    where
        R: BufRead,
        E: Write,
    {
        for line_res in input.lines() {
            let line = line_res.context("Couldn't read console input")?;

            if line.trim().is_empty() {
                continue;
            }

            match self.handle_cmd(line.split_whitespace()) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => writeln!(replies, "OK")?,
                Err(e) => writeln!(replies, "! {e:#}")?,
            }
        }

        Ok(())
    }

    pub fn handle_cmd<'a, I>(&mut self, mut args: I) -> anyhow::Result<Flow>
    where
        I: Iterator<Item = &'a str>,
    {
        let cmd = args.next().context("No command")?;
        debug!(cmd, "Console command");

        match cmd {
            "step" => {
                let times = args.next().unwrap_or("1").parse::<usize>()?;
                self.life.advance(times);
            }

            "run" => {
                let times = args.next().unwrap_or("1").parse::<usize>()?;

                for _ in 0..times {
                    self.life.tick();
                    self.renderer.draw(self.life.current())?;
                }
            }

            "show" => {
                self.renderer.draw(self.life.current())?;
            }

            "clear" => {
                self.life.current_mut().clear();
            }

            "random" => {
                let threshold = match args.next() {
                    Some(threshold) => threshold.parse::<f64>()?,
                    None => self.config.life.alive_threshold,
                };

                self.life.current_mut().randomize(threshold);
            }

            "toggle" => {
                let row = args.next().context("missing row")?.parse::<usize>()?;
                let col = args.next().context("missing col")?.parse::<usize>()?;

                self.life.current_mut().toggle(Position::new(row, col))?;
            }

            "exit" => return Ok(Flow::Exit),

            _ => bail!("Unknown command"),
        }

        Ok(Flow::Continue)
    }

    #[cfg(test)]
    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }
}
