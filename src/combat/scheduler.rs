//! Cooldown-driven turn scheduling for a single encounter.
//!
//! An [`Encounter`] owns both fighters for the length of one fight. Every
//! call to [`Encounter::advance`] is one scheduler tick: both cooldowns grow
//! in proportion to relative agility, and any fighter whose cooldown reaches
//! the encounter's `max_cooldown` acts (player first).
//!
//! In interactive mode a ready fighter does not act on its own. The tick
//! stops with an [`ActionRequest`] and nothing moves until the caller answers
//! through [`Encounter::submit_choice`].

use super::math::{
    apply_guard, combined_damage, damage_of_type, preferred_damage_type, try_evade,
};
use super::types::{BattleFighter, BattleLogEntry, DamageType, Outcome, Side};
use crate::character::fighter::Fighter;
use crate::core::config::EncounterConfig;
use crate::core::constants::{
    COOLDOWN_INCREMENT_SCALE, MAX_COOLDOWN_INCREMENT, MIN_COOLDOWN_INCREMENT,
};
use crate::core::error::BattleError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Where the encounter is in its attack cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ticking cooldowns.
    Idle,
    /// The player is ready and must pick an attack type.
    AwaitingAttackerAction,
    /// The enemy is attacking with `incoming`; the player must pick a defense type.
    AwaitingDefenderAction { incoming: DamageType },
    Resolved(Outcome),
}

/// What the caller has to decide before an interactive encounter resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRequest {
    ChooseAttack,
    ChooseDefense { incoming: DamageType },
}

#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    /// A fighter acted (hit or evaded).
    Attack(BattleLogEntry),
    /// The encounter suspended for a caller decision.
    ActionRequested(ActionRequest),
    /// Emitted once, when the encounter resolves.
    Finished { outcome: Outcome, winner: Side },
}

/// Per-call overrides for automatic attacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnOptions {
    /// Forces the player's damage type instead of automatic selection.
    pub player_attack: Option<DamageType>,
    /// Forces the enemy's damage type instead of automatic selection.
    pub enemy_attack: Option<DamageType>,
}

impl TurnOptions {
    fn attack_for(&self, side: Side) -> Option<DamageType> {
        match side {
            Side::Player => self.player_attack,
            Side::Enemy => self.enemy_attack,
        }
    }
}

/// Everything one scheduler step produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub events: Vec<BattleEvent>,
    pub outcome: Outcome,
}

impl TurnReport {
    fn new(outcome: Outcome) -> Self {
        Self {
            events: Vec::new(),
            outcome,
        }
    }

    /// Log entries produced during this step, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &BattleLogEntry> {
        self.events.iter().filter_map(|event| match event {
            BattleEvent::Attack(entry) => Some(entry),
            _ => None,
        })
    }

    pub fn action_request(&self) -> Option<ActionRequest> {
        self.events.iter().find_map(|event| match event {
            BattleEvent::ActionRequested(request) => Some(*request),
            _ => None,
        })
    }
}

/// Cooldown gained per tick: `round(20 * agility share)`, within `[1, 20]`.
///
/// Two fighters with zero agility split evenly.
pub fn cooldown_increment(agility: u32, opponent_agility: u32) -> u32 {
    let total = agility as f64 + opponent_agility as f64;
    let ratio = if total > 0.0 {
        agility as f64 / total
    } else {
        0.5
    };
    ((ratio * COOLDOWN_INCREMENT_SCALE).round() as u32)
        .clamp(MIN_COOLDOWN_INCREMENT, MAX_COOLDOWN_INCREMENT)
}

/// One fight between the player and an opponent.
#[derive(Debug, Clone)]
pub struct Encounter {
    config: EncounterConfig,
    player: BattleFighter,
    enemy: BattleFighter,
    phase: Phase,
    log: VecDeque<BattleLogEntry>,
    ticks: u64,
}

impl Encounter {
    pub fn new(player: Fighter, enemy: Fighter, config: EncounterConfig) -> Self {
        Self::from_battle_fighters(player.into(), enemy.into(), config)
    }

    /// Resumes from fighters that may already carry cooldown.
    pub fn from_battle_fighters(
        player: BattleFighter,
        enemy: BattleFighter,
        config: EncounterConfig,
    ) -> Self {
        let mut player = player;
        let mut enemy = enemy;
        player.cooldown = player.cooldown.min(config.max_cooldown);
        enemy.cooldown = enemy.cooldown.min(config.max_cooldown);
        Self {
            config,
            player,
            enemy,
            phase: Phase::Idle,
            log: VecDeque::with_capacity(config.log_capacity),
            ticks: 0,
        }
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    pub fn player(&self) -> &BattleFighter {
        &self.player
    }

    pub fn enemy(&self) -> &BattleFighter {
        &self.enemy
    }

    pub fn fighter(&self, side: Side) -> &BattleFighter {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    fn fighter_mut(&mut self, side: Side) -> &mut BattleFighter {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Resolved(outcome) => outcome,
            _ => Outcome::Continuing,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Resolved(_))
    }

    /// Battle log, most recent first.
    pub fn log(&self) -> &VecDeque<BattleLogEntry> {
        &self.log
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn into_fighters(self) -> (Fighter, Fighter) {
        (self.player.into_fighter(), self.enemy.into_fighter())
    }

    pub fn into_battle_fighters(self) -> (BattleFighter, BattleFighter) {
        (self.player, self.enemy)
    }

    /// Runs one scheduler tick.
    ///
    /// Does nothing once resolved or while waiting for a choice.
    pub fn advance(&mut self, options: &TurnOptions, rng: &mut impl Rng) -> TurnReport {
        match self.phase {
            Phase::Resolved(outcome) => return TurnReport::new(outcome),
            Phase::AwaitingAttackerAction | Phase::AwaitingDefenderAction { .. } => {
                return TurnReport::new(Outcome::Continuing)
            }
            Phase::Idle => {}
        }

        let mut report = TurnReport::new(Outcome::Continuing);
        if self.finish_if_over(&mut report) {
            return report;
        }

        self.ticks += 1;
        self.accrue_cooldowns();

        for side in [Side::Player, Side::Enemy] {
            if !self.fighter(side).is_ready(self.config.max_cooldown) {
                continue;
            }
            debug!(?side, tick = self.ticks, "fighter ready");

            if self.config.interactive {
                let request = self.suspend(side, options);
                report.events.push(BattleEvent::ActionRequested(request));
                return report;
            }

            let entry = self.strike(side, options.attack_for(side), None, rng);
            report.events.push(BattleEvent::Attack(entry));
            if self.finish_if_over(&mut report) {
                break;
            }
        }
        report
    }

    /// Answers a pending [`ActionRequest`] and resolves that attack.
    ///
    /// The computer picks its own defense type at random when the player attacks.
    pub fn submit_choice(
        &mut self,
        choice: DamageType,
        rng: &mut impl Rng,
    ) -> Result<TurnReport, BattleError> {
        let entry = match self.phase {
            Phase::AwaitingAttackerAction => {
                let defense = DamageType::random(rng);
                self.strike(Side::Player, Some(choice), Some(defense), rng)
            }
            Phase::AwaitingDefenderAction { incoming } => {
                self.strike(Side::Enemy, Some(incoming), Some(choice), rng)
            }
            Phase::Idle | Phase::Resolved(_) => return Err(BattleError::NoPendingAction),
        };

        self.phase = Phase::Idle;
        let mut report = TurnReport::new(Outcome::Continuing);
        report.events.push(BattleEvent::Attack(entry));
        self.finish_if_over(&mut report);
        Ok(report)
    }

    /// Ticks in automatic mode until the fight resolves or `max_ticks` runs out.
    pub fn run_to_completion(
        &mut self,
        options: &TurnOptions,
        rng: &mut impl Rng,
        max_ticks: u64,
    ) -> Outcome {
        for _ in 0..max_ticks {
            let report = self.advance(options, rng);
            if report.outcome.is_finished() || report.action_request().is_some() {
                break;
            }
        }
        self.outcome()
    }

    fn accrue_cooldowns(&mut self) {
        let player_agi = self.player.fighter.stats.agility();
        let enemy_agi = self.enemy.fighter.stats.agility();
        let max = self.config.max_cooldown;

        self.player.cooldown =
            (self.player.cooldown + cooldown_increment(player_agi, enemy_agi)).min(max);
        self.enemy.cooldown =
            (self.enemy.cooldown + cooldown_increment(enemy_agi, player_agi)).min(max);
    }

    fn suspend(&mut self, side: Side, options: &TurnOptions) -> ActionRequest {
        match side {
            Side::Player => {
                self.phase = Phase::AwaitingAttackerAction;
                ActionRequest::ChooseAttack
            }
            Side::Enemy => {
                let incoming = options.attack_for(Side::Enemy).unwrap_or_else(|| {
                    preferred_damage_type(&self.enemy.fighter.stats, &self.player.fighter.stats)
                });
                self.phase = Phase::AwaitingDefenderAction { incoming };
                ActionRequest::ChooseDefense { incoming }
            }
        }
    }

    /// One attack from `side`. The attacker's cooldown resets whether or not it lands.
    fn strike(
        &mut self,
        side: Side,
        attack: Option<DamageType>,
        defense: Option<DamageType>,
        rng: &mut impl Rng,
    ) -> BattleLogEntry {
        let attacker_stats = self.fighter(side).fighter.stats;
        let defender_stats = self.fighter(side.opponent()).fighter.stats;
        let attacker_name = self.fighter(side).fighter.name.clone();

        let evaded = try_evade(&defender_stats, &attacker_stats, rng);
        let (attack_type, damage, critical) = if evaded {
            let declared =
                attack.unwrap_or_else(|| preferred_damage_type(&attacker_stats, &defender_stats));
            (declared, 0, false)
        } else {
            let roll = match attack {
                Some(kind) => damage_of_type(kind, &attacker_stats, &defender_stats, rng),
                None => combined_damage(&attacker_stats, &defender_stats, rng),
            };
            let damage = match defense {
                Some(guard) => apply_guard(roll.value, roll.kind, guard),
                None => roll.value,
            };
            (roll.kind, damage, roll.is_critical)
        };

        let defender = &mut self.fighter_mut(side.opponent()).fighter;
        defender.take_damage(damage);
        let entry = BattleLogEntry {
            attacker: side,
            attacker_name,
            defender_name: defender.name.clone(),
            evaded,
            damage,
            critical,
            attack_type,
            defense_type: defense,
            defender_hp: defender.hp,
        };
        self.fighter_mut(side).cooldown = 0;

        debug!(
            ?side,
            evaded,
            damage,
            critical,
            kind = %attack_type,
            defender_hp = entry.defender_hp,
            "attack resolved"
        );

        if self.config.log_capacity > 0 {
            if self.log.len() >= self.config.log_capacity {
                self.log.pop_back();
            }
            self.log.push_front(entry.clone());
        }
        entry
    }

    /// Resolves the encounter if either side is at zero HP.
    ///
    /// The player never loses when both sides are at zero.
    fn finish_if_over(&mut self, report: &mut TurnReport) -> bool {
        if self.player.fighter.is_alive() && self.enemy.fighter.is_alive() {
            return false;
        }
        let (outcome, winner) = if !self.enemy.fighter.is_alive() {
            (Outcome::PlayerWon, Side::Player)
        } else {
            (Outcome::PlayerLost, Side::Enemy)
        };
        self.phase = Phase::Resolved(outcome);
        report.outcome = outcome;
        report.events.push(BattleEvent::Finished { outcome, winner });
        info!(
            player = %self.player.fighter.name,
            enemy = %self.enemy.fighter.name,
            ?outcome,
            ticks = self.ticks,
            "encounter resolved"
        );
        true
    }
}
