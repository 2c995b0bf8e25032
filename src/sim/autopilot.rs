//! Demo-mode steering: the robot chases coins and sidesteps the monster

use super::state::GameSession;
use super::tick::TickInput;

/// How close (px, vertically) a descending monster gets before the robot dodges
const DODGE_DISTANCE: i32 = 120;

/// Compute intent flags from the current session
pub fn steer(session: &GameSession) -> TickInput {
    let player = session.player().aabb();
    let monster = session.adversary().aabb();
    let player_center = player.center().x;

    // Monster on its way down and about to land on us: move away from it
    let descending = session.adversary().velocity().y > 0;
    let overhead = monster.right() > player.min.x - player.size.x
        && monster.min.x < player.right() + player.size.x;
    if descending && overhead && player.min.y - monster.bottom() < DODGE_DISTANCE {
        let monster_center = monster.center().x;
        let flee_left = monster_center >= player_center;
        // Pinned against a wall: run the other way under it
        let at_left = player.min.x <= 0;
        let at_right = player.right() >= session.region().width;
        let flee_left = if flee_left { !at_left } else { at_right };
        return TickInput {
            move_left: flee_left,
            move_right: !flee_left,
            autopilot: true,
        };
    }

    // Lowest coin that has not yet fallen past the robot
    let target = session
        .rewards()
        .iter()
        .map(|r| r.aabb())
        .filter(|r| r.min.y < player.bottom())
        .max_by_key(|r| r.min.y)
        .map(|r| r.center().x)
        .unwrap_or(session.region().width / 2);

    let deadband = session.player().speed();
    TickInput {
        move_left: target < player_center - deadband,
        move_right: target > player_center + deadband,
        autopilot: true,
    }
}
