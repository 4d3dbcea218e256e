//! Fixed-tick game loop
//!
//! Owns the round and scoreboard and talks to the outside world only through
//! the `platform` traits, so the loop runs the same against macroquad or a
//! test double.

use crate::audio::SoundEffect;
use crate::config::GameConfig;
use crate::platform::{AudioPlayer, Clock, InputSource, RenderSurface};
use crate::renderer::{draw_round, draw_winner};
use crate::scoreboard::Scoreboard;
use crate::sim::{
    EventOutcome, GameEvent, Round, advance, apply_event, resolve_round, take_pending_hits,
};

/// Whether the loop should keep going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The collaborators one game session runs against
pub struct Io<'a, R, A, I, C> {
    pub surface: &'a mut R,
    pub audio: &'a A,
    pub input: &'a mut I,
    pub clock: &'a mut C,
}

pub struct Driver<'a> {
    config: &'a GameConfig,
    round: Round,
    scoreboard: Scoreboard,
}

impl<'a> Driver<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            round: Round::new(config),
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Run ticks at the configured rate until a quit event arrives
    pub async fn run<R, A, I, C>(&mut self, io: &mut Io<'_, R, A, I, C>) -> anyhow::Result<()>
    where
        R: RenderSurface,
        A: AudioPlayer,
        I: InputSource,
        C: Clock,
    {
        log::info!("Round 1 started");
        loop {
            io.clock.tick(self.config.fps);
            if self.tick(io).await? == Flow::Quit {
                log::info!(
                    "Quit after {} rounds ({})",
                    self.scoreboard.rounds_played(),
                    self.scoreboard.summary()
                );
                return Ok(());
            }
        }
    }

    /// One iteration of the loop body (without the rate limiter)
    pub async fn tick<R, A, I, C>(&mut self, io: &mut Io<'_, R, A, I, C>) -> anyhow::Result<Flow>
    where
        R: RenderSurface,
        A: AudioPlayer,
        I: InputSource,
        C: Clock,
    {
        for event in io.input.poll_discrete_events() {
            if self.dispatch(event, io.audio) == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        for hit in take_pending_hits(&mut self.round) {
            self.dispatch(hit, io.audio);
        }

        if let Some(winner) = resolve_round(&mut self.round) {
            self.scoreboard.record(winner);
            log::info!(
                "{} after {} ticks ({})",
                winner.win_message(),
                self.round.time_ticks,
                self.scoreboard.summary()
            );
            if let Some(leader) = self.scoreboard.leader() {
                log::debug!("{} leads the session", leader.as_str());
            }

            draw_round(&mut *io.surface, &self.round, self.config);
            draw_winner(
                &mut *io.surface,
                winner.win_message(),
                &self.scoreboard.summary(),
                self.config,
            );
            io.surface.present().await?;
            io.clock.delay(self.config.win_delay_ms);

            self.round = Round::new(self.config);
            log::info!("Round {} started", self.scoreboard.rounds_played() + 1);
            return Ok(Flow::Continue);
        }

        draw_round(&mut *io.surface, &self.round, self.config);
        io.surface.present().await?;

        let held = io.input.sample_held_keys();
        advance(&mut self.round, &held, self.config);

        Ok(Flow::Continue)
    }

    fn dispatch<A: AudioPlayer>(&mut self, event: GameEvent, audio: &A) -> Flow {
        match apply_event(&mut self.round, event, self.config) {
            EventOutcome::Quit => return Flow::Quit,
            EventOutcome::Fired(_) => audio.play(SoundEffect::Fire),
            EventOutcome::Damaged(_) => audio.play(SoundEffect::Hit),
            EventOutcome::Ignored => {}
        }
        Flow::Continue
    }
}
