//! Run state a collaborator persists between scenes.

use crate::character::attributes::{AttributeType, StatVector};
use crate::character::fighter::{allocate_status_point, AllocationDirection, Fighter};
use crate::combat::scheduler::Encounter;
use crate::combat::types::Outcome;
use crate::core::config::EngineConfig;
use crate::core::constants::MIN_ALLOCATED_STATUS;
use crate::core::error::GameError;
use crate::economy;
use crate::encounter::select_opponent;
use crate::growth::{apply_skill, generate_skill_choices, Skill};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// What a finished battle paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleSettlement {
    pub won: bool,
    pub reward: u64,
    pub status_points: u32,
}

/// Money, the active character, defeated characters and pending skill choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub money: u64,
    pub character: Option<Fighter>,
    /// Archived characters, oldest first, capped at `history_limit`.
    #[serde(default)]
    pub history: Vec<Fighter>,
    /// Growth choices offered after the last win.
    #[serde(default)]
    pub skill_choices: Vec<Skill>,
    #[serde(skip)]
    config: EngineConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl GameState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            money: config.starting_money,
            character: None,
            history: Vec::new(),
            skill_choices: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the balance settings, e.g. after loading a snapshot.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
        self.trim_history();
    }

    pub fn character(&self) -> Result<&Fighter, GameError> {
        self.character.as_ref().ok_or(GameError::NoCharacter)
    }

    fn character_mut(&mut self) -> Result<&mut Fighter, GameError> {
        self.character.as_mut().ok_or(GameError::NoCharacter)
    }

    /// Starts a new character with `stats`, clamped into `[1, max_status]`.
    pub fn create_character(
        &mut self,
        name: impl Into<String>,
        stats: StatVector,
        rng: &mut impl Rng,
    ) -> &Fighter {
        let stats = stats.clamped(MIN_ALLOCATED_STATUS, self.config.max_status);
        let fighter = Fighter::new(name.into(), stats, &self.config, rng);
        info!(name = %fighter.name, max_hp = fighter.max_hp, "character created");
        self.skill_choices.clear();
        self.character.insert(fighter)
    }

    /// Archives the current character and leaves the slot empty.
    pub fn start_new_run(&mut self) {
        if let Some(fighter) = self.character.take() {
            info!(name = %fighter.name, win_streak = fighter.win_streak, "character archived");
            self.history.push(fighter);
            self.trim_history();
        }
        self.skill_choices.clear();
    }

    fn trim_history(&mut self) {
        let limit = self.config.history_limit;
        if self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
    }

    /// Picks an opponent and sets up an automatic encounter.
    pub fn start_encounter(&self, rng: &mut impl Rng) -> Result<Encounter, GameError> {
        let player = self.character()?;
        if !player.is_alive() {
            return Err(GameError::CharacterDefeated);
        }
        let enemy = select_opponent(player, &self.history, &self.config, rng);
        Ok(Encounter::new(player.clone(), enemy, self.config.encounter()))
    }

    /// Same as [`start_encounter`](Self::start_encounter), with the player choosing
    /// attack and defense types.
    pub fn start_interactive_encounter(&self, rng: &mut impl Rng) -> Result<Encounter, GameError> {
        let encounter = self.start_encounter(rng)?;
        let config = encounter.config().interactive();
        let (player, enemy) = encounter.into_fighters();
        Ok(Encounter::new(player, enemy, config))
    }

    /// Books the result of a fight.
    ///
    /// The player's HP is copied back. A win extends the streak (jumping past
    /// a longer enemy streak), pays the reward and status points, and offers
    /// new skill choices. A `Continuing` outcome is refused.
    pub fn finish_battle(
        &mut self,
        player_after: &Fighter,
        enemy: &Fighter,
        outcome: Outcome,
        rng: &mut impl Rng,
    ) -> Result<BattleSettlement, GameError> {
        if !outcome.is_finished() {
            return Err(GameError::EncounterNotFinished);
        }
        let points_per_win = self.config.status_points_per_win;
        let character = self.character_mut()?;
        character.hp = player_after.hp.min(character.max_hp);

        if outcome == Outcome::PlayerLost {
            info!(name = %character.name, enemy = %enemy.name, "battle lost");
            return Ok(BattleSettlement {
                won: false,
                reward: 0,
                status_points: 0,
            });
        }

        character.win_streak += 1;
        if enemy.win_streak > character.win_streak {
            character.win_streak = enemy.win_streak + 1;
        }
        let reward = economy::reward_for(character);
        character.last_reward = reward;
        character.status_points += points_per_win;
        let luck = character.stats.luck();
        info!(
            name = %character.name,
            win_streak = character.win_streak,
            reward,
            "battle won"
        );

        self.money += reward;
        self.skill_choices = generate_skill_choices(luck, &self.config, rng);
        Ok(BattleSettlement {
            won: true,
            reward,
            status_points: points_per_win,
        })
    }

    /// Books a resolved encounter through [`finish_battle`](Self::finish_battle).
    pub fn settle_encounter(
        &mut self,
        encounter: &Encounter,
        rng: &mut impl Rng,
    ) -> Result<BattleSettlement, GameError> {
        if !encounter.is_finished() {
            return Err(GameError::EncounterNotFinished);
        }
        self.finish_battle(
            &encounter.player().fighter,
            &encounter.enemy().fighter,
            encounter.outcome(),
            rng,
        )
    }

    /// Applies the pending choice at `index` and discards the rest.
    pub fn choose_skill(&mut self, index: usize) -> Result<Skill, GameError> {
        let available = self.skill_choices.len();
        let skill = *self
            .skill_choices
            .get(index)
            .ok_or(GameError::InvalidSkillChoice { index, available })?;
        let config = self.config.clone();
        let character = self.character_mut()?;
        apply_skill(character, skill, &config);
        info!(name = %character.name, skill = %skill, "skill chosen");
        self.skill_choices.clear();
        Ok(skill)
    }

    pub fn heal_cost(&self, percent: u32) -> Result<u64, GameError> {
        let character = self.character()?;
        Ok(economy::heal_cost(
            percent,
            character.stats.luck(),
            self.config.max_status,
        ))
    }

    /// Buys a heal of `percent` of max HP and returns what it cost.
    pub fn buy_heal(&mut self, percent: u32) -> Result<u64, GameError> {
        let cost = self.heal_cost(percent)?;
        if !self.character()?.is_alive() {
            return Err(GameError::CharacterDefeated);
        }
        if self.money < cost {
            return Err(GameError::InsufficientFunds {
                needed: cost,
                available: self.money,
            });
        }
        self.money -= cost;
        let character = self.character_mut()?;
        character.heal(economy::heal_amount(character.max_hp, percent));
        Ok(cost)
    }

    pub fn allocate(
        &mut self,
        attribute: AttributeType,
        direction: AllocationDirection,
    ) -> Result<(), GameError> {
        let config = self.config.clone();
        let character = self.character_mut()?;
        allocate_status_point(character, attribute, direction, &config)?;
        Ok(())
    }
}
