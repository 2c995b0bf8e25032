//! One simulation step
//!
//! Core game loop that advances the session by a single tick.

use super::adversary::Contact;
use super::autopilot;
use super::marker::Side;
use super::state::{GameEvent, GameSession, Snapshot};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Demo mode - the autopilot steers the robot and the flags above are ignored
    pub autopilot: bool,
}

impl TickInput {
    pub fn left() -> Self {
        Self {
            move_left: true,
            ..Default::default()
        }
    }

    pub fn right() -> Self {
        Self {
            move_right: true,
            ..Default::default()
        }
    }
}

/// Advance the session by one tick and return what the renderer needs
pub fn tick(session: &mut GameSession, input: &TickInput) -> Snapshot {
    session.events.clear();
    session.time_ticks += 1;

    let input = if input.autopilot {
        autopilot::steer(session)
    } else {
        *input
    };
    session.player.moving_left = input.move_left;
    session.player.moving_right = input.move_right;

    let region = session.region;

    session.adversary.advance(&region);
    session.player.advance_horizontal(&region);

    if session.player.try_collect(&mut session.rewards) {
        session.score += 1;
        session.events.push(GameEvent::RewardCollected);
    }

    let escalations = session.adversary.escalations();

    if session
        .adversary
        .collide(&session.player.aabb(), Contact::Player)
    {
        session.score -= 1;
        session.events.push(GameEvent::PlayerHit);
    }

    for marker in [&session.left_marker, &session.right_marker] {
        if session.adversary.collide(&marker.aabb(), Contact::Booster) {
            session.visual_state = session.visual_state.toggled();
            session.events.push(GameEvent::MarkerTouched(marker.side));
        }
    }

    if session.adversary.escalations() != escalations {
        session.events.push(GameEvent::AdversaryEscalated);
    }

    session.rewards.advance_all();
    if session.rewards.cycle_if_exhausted(&region, &mut session.rng) {
        session.events.push(GameEvent::RewardsRespawned);
    }

    debug_assert!(region.contains(&session.adversary.aabb()));
    debug_assert!((1..=session.rewards.capacity()).contains(&session.rewards.len()));

    session.snapshot()
}

/// Which door the monster currently overlaps, if any
pub fn touching_marker(session: &GameSession) -> Option<Side> {
    let monster = session.adversary.aabb();
    session
        .markers()
        .into_iter()
        .find(|m| m.aabb().intersects(&monster))
        .map(|m| m.side)
}
