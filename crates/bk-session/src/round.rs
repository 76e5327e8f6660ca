//! Round controller: phase transitions, countdown, reveals, and voting.
//!
//! The controller holds no session state of its own. Every operation takes
//! the session it acts on and the [`Feedback`] log it reports into, so the
//! caller decides which session is current.

use bk_core::{Attribute, CoreError, Persona, PlayerId, Session, TickOutcome, VoteTally};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::feedback::{Cue, Feedback};

/// Drives the round state machine of a session.
///
/// ```text
/// waiting --start_round--> active --start_voting--> voting
///                            ^                        |
///                            +------start_round-------+
/// ```
///
/// Timer expiry only notifies; the administrator still opens voting.
#[derive(Debug, Clone, Default)]
pub struct RoundController {
    config: GameConfig,
}

impl RoundController {
    /// Create a controller with the given configuration.
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// The controller's configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new round: phase becomes active and the timer re-arms.
    pub fn start_round(
        &self,
        session: &mut Session,
        actor: PlayerId,
        feedback: &mut Feedback,
    ) -> GameResult<()> {
        self.authorize(session, actor, "start a round", feedback)?;
        session.begin_round();
        tracing::info!(
            session = %session.id(),
            seconds = session.timer().remaining(),
            "round started"
        );
        feedback.play(Cue::Confirmation);
        feedback.success(&self.config.messages.round_started);
        Ok(())
    }

    /// Stop the countdown without changing phase.
    pub fn pause(
        &self,
        session: &mut Session,
        actor: PlayerId,
        feedback: &mut Feedback,
    ) -> GameResult<()> {
        self.authorize(session, actor, "pause the round", feedback)?;
        session.timer_mut().pause();
        tracing::info!(
            session = %session.id(),
            remaining = session.timer().remaining(),
            "round paused"
        );
        Ok(())
    }

    /// Stop the countdown and open voting.
    pub fn start_voting(
        &self,
        session: &mut Session,
        actor: PlayerId,
        feedback: &mut Feedback,
    ) -> GameResult<()> {
        self.authorize(session, actor, "start voting", feedback)?;
        if let Err(err) = session.open_voting() {
            tracing::warn!(session = %session.id(), error = %err, "voting rejected");
            feedback.error(&self.config.messages.round_not_started);
            return Err(err.into());
        }
        tracing::info!(session = %session.id(), "voting started");
        feedback.play(Cue::Vote);
        feedback.info(&self.config.messages.voting_started);
        Ok(())
    }

    /// Count down one second. Called by the scheduler once per second.
    ///
    /// Does nothing while the timer is stopped or at zero. Reaching zero
    /// stops the timer and raises the alarm but leaves the phase alone.
    pub fn tick(&self, session: &mut Session, feedback: &mut Feedback) -> TickOutcome {
        let outcome = session.timer_mut().tick(self.config.low_time_threshold);
        match outcome {
            TickOutcome::Expired => {
                tracing::warn!(session = %session.id(), "round timer expired");
                feedback.play(Cue::Alarm);
                feedback.warning(&self.config.messages.time_up);
            }
            TickOutcome::LowTime { remaining } => {
                tracing::debug!(session = %session.id(), remaining, "low time");
                feedback.play(Cue::Tick);
            }
            TickOutcome::Running { .. } | TickOutcome::Idle => {}
        }
        outcome
    }

    /// Flip a player's elimination vote. Returns the new flag.
    pub fn toggle_vote(
        &self,
        session: &mut Session,
        player: PlayerId,
        feedback: &mut Feedback,
    ) -> GameResult<bool> {
        let session_id = session.id();
        let persona = self.persona_mut(session, player, feedback)?;
        persona.voted = !persona.voted;
        let voted = persona.voted;
        tracing::debug!(session = %session_id, %player, voted, "vote toggled");
        feedback.play(Cue::Vote);
        feedback.success(&self.config.messages.vote_recorded);
        Ok(voted)
    }

    /// Flip one attribute's visibility on a player's card. Returns the new flag.
    pub fn toggle_reveal(
        &self,
        session: &mut Session,
        player: PlayerId,
        attribute: Attribute,
        feedback: &mut Feedback,
    ) -> GameResult<bool> {
        let session_id = session.id();
        let persona = self.persona_mut(session, player, feedback)?;
        let revealed = persona.revealed.toggle(attribute);
        tracing::debug!(session = %session_id, %player, %attribute, revealed, "reveal toggled");
        feedback.play(Cue::Confirmation);
        Ok(revealed)
    }

    /// [`Self::toggle_reveal`] for an attribute given by name, e.g. `"phobia"`.
    pub fn toggle_reveal_named(
        &self,
        session: &mut Session,
        player: PlayerId,
        attribute: &str,
        feedback: &mut Feedback,
    ) -> GameResult<bool> {
        let attribute = match attribute.parse::<Attribute>() {
            Ok(attribute) => attribute,
            Err(err) => {
                tracing::warn!(session = %session.id(), %player, error = %err, "reveal rejected");
                feedback.error(&self.config.messages.unknown_attribute);
                return Err(err.into());
            }
        };
        self.toggle_reveal(session, player, attribute, feedback)
    }

    /// Replace a stored persona wholesale, matched by ID. Administrator only.
    pub fn update_persona(
        &self,
        session: &mut Session,
        actor: PlayerId,
        mut persona: Persona,
        feedback: &mut Feedback,
    ) -> GameResult<()> {
        self.authorize(session, actor, "edit personas", feedback)?;
        let name = persona.name.trim();
        if name.is_empty() {
            feedback.error(&self.config.messages.blank_player_name);
            return Err(GameError::Validation("player name is blank".to_string()));
        }
        persona.name = name.to_string();

        let session_id = session.id();
        let slot = self.persona_mut(session, persona.id, feedback)?;
        tracing::info!(session = %session_id, player = %persona.id, "persona updated");
        *slot = persona;
        feedback.success(&self.config.messages.persona_updated);
        Ok(())
    }

    /// Players currently marked for elimination.
    pub fn tally(&self, session: &Session) -> VoteTally {
        session.tally()
    }

    fn persona_mut<'s>(
        &self,
        session: &'s mut Session,
        player: PlayerId,
        feedback: &mut Feedback,
    ) -> GameResult<&'s mut Persona> {
        let session_id = session.id();
        match session.player_mut(player) {
            Some(p) => Ok(&mut p.persona),
            None => {
                tracing::warn!(session = %session_id, %player, "unknown player");
                feedback.error(&self.config.messages.player_not_found);
                Err(CoreError::PlayerNotFound(player).into())
            }
        }
    }

    fn authorize(
        &self,
        session: &Session,
        actor: PlayerId,
        action: &'static str,
        feedback: &mut Feedback,
    ) -> GameResult<()> {
        if !self.config.enforce_admin || session.is_admin(actor) {
            return Ok(());
        }
        tracing::warn!(session = %session.id(), player = %actor, action, "not the administrator");
        feedback.error(&self.config.messages.admin_only);
        Err(GameError::Unauthorized {
            player: actor,
            action,
        })
    }
}
