//! Per-frame simulation tick
//!
//! Order within a tick: player, obstacle advance, head expiry, spawn,
//! collision, then score. Movement must happen before the bottom-edge check,
//! and a spawned obstacle is fully placed before it can be collided with.

use super::state::{GameEvent, GamePhase, GameState, HorizontalIntent};
use crate::settings::Settings;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal steering from the host's input polling
    pub intent: HorizontalIntent,
    /// Idle/demo mode - autopilot steers instead
    pub idle_mode: bool,
}

/// Advance the session by `dt` seconds
///
/// `settings` supplies the difficulty for each spawn and receives the high
/// score on game over.
pub fn tick(state: &mut GameState, input: &TickInput, settings: &mut Settings, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.elapsed += dt;

    let intent = if input.idle_mode {
        autopilot(state)
    } else {
        input.intent
    };
    state.player.steer(intent, dt, &state.config);

    state.obstacles.advance(dt);
    if let Some(id) = state.obstacles.expire_head() {
        log::debug!("Obstacle {:?} expired", id);
        state.events.push(GameEvent::ObstacleExpired { id });
    }

    let speed = settings.difficulty.obstacle_speed();
    if let Some(id) = state
        .obstacles
        .update_spawn(dt, speed, &state.config, &mut state.rng)
    {
        let x = state.obstacles.get(id).pos.x;
        log::debug!("Obstacle {:?} spawned at x={:.2}", id, x);
        state.events.push(GameEvent::ObstacleSpawned { id, x });
    }

    let player_circle = state.player.circle();
    if state.obstacles.first_collision(&player_circle).is_some() {
        handle_hit(state, settings);
        if state.phase == GamePhase::GameOver {
            return;
        }
    } else {
        state.score.accrue(dt, &state.config, &mut state.rng);
    }

    state
        .score
        .ease_display(dt, state.config.display_score_rate);
}

/// Lose a life, then either end the run or restart in place
fn handle_hit(state: &mut GameState, settings: &mut Settings) {
    state.player.hit = true;
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::PlayerHit {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        let score = state.score();
        let new_high_score = settings.record_score(score);
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            score,
            new_high_score,
        });
        log::info!(
            "Game over after {:.1}s: score {} (high score {}{})",
            state.elapsed,
            score,
            settings.high_score,
            if new_high_score { ", new record" } else { "" }
        );
    } else {
        state.phase = GamePhase::Restarting;
        restart(state);
    }
}

/// Drain every active obstacle back to the pool and reset the player
fn restart(state: &mut GameState) {
    let cleared = state.obstacles.clear();
    state.player.reset(&state.config);
    state.phase = GamePhase::Playing;
    state.events.push(GameEvent::Restarted { cleared });
    log::info!("Player hit, {} lives left", state.lives);
}

/// Pick a direction that dodges the most urgent obstacle
pub fn autopilot(state: &GameState) -> HorizontalIntent {
    let player = state.player.circle();
    let max_x = state.config.player_max_x();
    // Horizontal clearance wanted around each obstacle
    let margin = state.player.size * 0.5;

    let threat = state
        .obstacles
        .iter()
        .map(|(_, o)| o)
        .filter(|o| !o.hit_already)
        .filter(|o| {
            let c = o.circle();
            c.center.y + c.radius >= player.center.y - player.radius
                && (c.center.x - player.center.x).abs() < c.radius + player.radius + margin
        })
        .min_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(threat) = threat else {
        // Drift back toward the middle when nothing is coming
        let center_x = max_x / 2.0;
        let offset = state.player.pos.x - center_x;
        return if offset > margin {
            HorizontalIntent::Left
        } else if offset < -margin {
            HorizontalIntent::Right
        } else {
            HorizontalIntent::None
        };
    };

    let threat_x = threat.circle().center.x;
    let blocked_left = state.player.pos.x <= 0.0;
    let blocked_right = state.player.pos.x >= max_x;
    if (threat_x >= player.center.x && !blocked_left) || blocked_right {
        HorizontalIntent::Left
    } else {
        HorizontalIntent::Right
    }
}
