//! Picks the next opponent from history or generates one.

use super::generation::generate_opponent;
use crate::character::fighter::Fighter;
use crate::core::config::EngineConfig;
use crate::core::constants::RIVAL_NAME_SUFFIX;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

/// Clones an archived fighter as a rematch opponent at full health.
pub fn make_rival(archived: &Fighter) -> Fighter {
    let mut rival = archived.clone();
    rival.reset_hp();
    if !rival.name.ends_with(RIVAL_NAME_SUFFIX) {
        rival.name.push_str(RIVAL_NAME_SUFFIX);
    }
    rival
}

/// Looks through a shuffled history for a fighter on the same win streak.
pub fn find_rival<'a>(
    win_streak: u32,
    history: &'a [Fighter],
    rng: &mut impl Rng,
) -> Option<&'a Fighter> {
    let mut candidates: Vec<&Fighter> = history.iter().collect();
    candidates.shuffle(rng);
    candidates.into_iter().find(|f| f.win_streak == win_streak)
}

/// Chooses the opponent for `player`'s next encounter.
pub fn select_opponent(
    player: &Fighter,
    history: &[Fighter],
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Fighter {
    if let Some(archived) = find_rival(player.win_streak, history, rng) {
        let rival = make_rival(archived);
        info!(rival = %rival.name, win_streak = player.win_streak, "rival rematch");
        return rival;
    }
    generate_opponent(player.win_streak, config, rng)
}
