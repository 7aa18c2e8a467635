//! Battle driver: turn order, rolls, rewards.

use crate::actor::{Monster, MonsterAction, Player};
use crate::combat::{self, AttackResult, AttackRolls};
use crate::env::{ConfigError, PcgRng, RngOracle, TemplateOracle, compute_seed, roll_context};
use crate::progression::ExperienceGain;

use super::errors::BattleError;
use super::event::BattleEvent;
use super::phase::{BattleOutcome, BattlePhase};

const PLAYER_ACTOR: u32 = 0;
const MONSTER_ACTOR: u32 = 1;

/// What was done on a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Attack(AttackResult),
    Flee { success: bool, chance: i64 },
}

/// Result of one call that advances the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub action: TurnAction,

    /// Experience granted when this turn won the battle.
    pub experience: Option<ExperienceGain>,

    /// Phase after the turn.
    pub phase: BattlePhase,
}

impl TurnReport {
    pub fn attack(&self) -> Option<&AttackResult> {
        match &self.action {
            TurnAction::Attack(result) => Some(result),
            TurnAction::Flee { .. } => None,
        }
    }
}

/// One encounter between a player and a monster.
pub struct Battle<'p, R: RngOracle = PcgRng> {
    player: &'p mut Player,
    monster: Monster,
    phase: BattlePhase,
    seed: u64,
    nonce: u64,
    rng: R,
    log: Vec<BattleEvent>,
}

impl<'p> Battle<'p, PcgRng> {
    /// Spawn `monster_id` and start a battle against it.
    ///
    /// Fails without starting anything if the monster template is unknown.
    pub fn start(
        player: &'p mut Player,
        monster_id: &str,
        templates: &(impl TemplateOracle + ?Sized),
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let monster = Monster::spawn(monster_id, templates)?;
        Ok(Self::new(player, monster, seed))
    }

    pub fn new(player: &'p mut Player, monster: Monster, seed: u64) -> Self {
        Self::with_rng(player, monster, seed, PcgRng)
    }
}

impl<'p, R: RngOracle> Battle<'p, R> {
    pub fn with_rng(player: &'p mut Player, monster: Monster, seed: u64, rng: R) -> Self {
        tracing::debug!(
            "Battle started: {} (Lv.{}) vs {} (Lv.{}), seed={}",
            player.name(),
            player.stats().level(),
            monster.name(),
            monster.stats().level(),
            seed
        );

        let log = vec![BattleEvent::Appeared {
            monster: monster.name().to_string(),
        }];

        Self {
            player,
            monster,
            phase: BattlePhase::PlayerTurn,
            seed,
            nonce: 0,
            rng,
            log,
        }
    }

    pub fn player(&self) -> &Player {
        &*self.player
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_player_turn(&self) -> bool {
        self.phase.is_player_turn()
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.phase.outcome()
    }

    /// Number of actions resolved so far.
    pub fn turns(&self) -> u64 {
        self.nonce
    }

    /// Every event since the battle started, oldest first.
    pub fn log(&self) -> &[BattleEvent] {
        &self.log
    }

    /// End the battle, releasing the player, and return the full log.
    pub fn into_log(self) -> Vec<BattleEvent> {
        self.log
    }

    /// Player attacks the monster.
    ///
    /// Killing the monster ends the battle in victory and grants its
    /// experience reward; otherwise the turn passes to the monster.
    pub fn player_attack(&mut self) -> Result<TurnReport, BattleError> {
        self.ensure_phase(true)?;

        let rolls = self.attack_rolls(PLAYER_ACTOR);
        let result = combat::resolve_attack(&*self.player, &mut self.monster, rolls);
        self.nonce += 1;
        self.trace_attack(&result);
        self.log.push(BattleEvent::Attack(result.clone()));

        let experience = if result.is_dead {
            Some(self.finish_victory())
        } else {
            self.phase = BattlePhase::MonsterTurn;
            None
        };

        Ok(TurnReport {
            action: TurnAction::Attack(result),
            experience,
            phase: self.phase,
        })
    }

    /// Player tries to run away.
    ///
    /// Success ends the battle; failure passes the turn to the monster.
    pub fn player_flee(&mut self) -> Result<TurnReport, BattleError> {
        self.ensure_phase(true)?;

        let chance = combat::flee_chance(&*self.player, &self.monster);
        let roll = self.roll(PLAYER_ACTOR, roll_context::FLEE);
        let success = combat::attempt_flee(&*self.player, &self.monster, roll);
        self.nonce += 1;

        tracing::debug!(
            "Flee attempt: chance={} roll={:.2} success={}",
            chance,
            roll,
            success
        );

        if success {
            self.log.push(BattleEvent::FleeSucceeded);
            self.end(BattleOutcome::Fled);
        } else {
            self.log.push(BattleEvent::FleeFailed);
            self.phase = BattlePhase::MonsterTurn;
        }

        Ok(TurnReport {
            action: TurnAction::Flee { success, chance },
            experience: None,
            phase: self.phase,
        })
    }

    /// The monster acts according to its AI pattern.
    ///
    /// Killing the player ends the battle in defeat; the player is revived
    /// at full HP. Otherwise the turn returns to the player.
    pub fn monster_turn(&mut self) -> Result<TurnReport, BattleError> {
        self.ensure_phase(false)?;

        let result = match self.monster.decide_action() {
            MonsterAction::Attack => {
                let rolls = self.attack_rolls(MONSTER_ACTOR);
                combat::resolve_attack(&self.monster, &mut *self.player, rolls)
            }
        };
        self.nonce += 1;
        self.trace_attack(&result);
        self.log.push(BattleEvent::Attack(result.clone()));

        if result.is_dead {
            self.finish_defeat();
        } else {
            self.phase = BattlePhase::PlayerTurn;
        }

        Ok(TurnReport {
            action: TurnAction::Attack(result),
            experience: None,
            phase: self.phase,
        })
    }

    fn ensure_phase(&self, player_expected: bool) -> Result<(), BattleError> {
        let expected = if player_expected {
            BattlePhase::PlayerTurn
        } else {
            BattlePhase::MonsterTurn
        };
        if self.phase == expected {
            Ok(())
        } else {
            Err(BattleError::out_of_turn(self.phase, player_expected))
        }
    }

    fn roll(&self, actor: u32, context: u32) -> f64 {
        self.rng
            .roll_percent(compute_seed(self.seed, self.nonce, actor, context))
    }

    fn attack_rolls(&self, actor: u32) -> AttackRolls {
        AttackRolls::new(
            self.roll(actor, roll_context::HIT),
            self.roll(actor, roll_context::CRITICAL),
        )
    }

    fn trace_attack(&self, result: &AttackResult) {
        tracing::debug!(
            "Turn {}: {} -> {}: {} damage={:?} dead={}",
            self.nonce,
            result.attacker,
            result.defender,
            result.outcome,
            result.damage,
            result.is_dead
        );
    }

    fn finish_victory(&mut self) -> ExperienceGain {
        self.log.push(BattleEvent::Victory {
            monster: self.monster.name().to_string(),
        });

        let gain = self
            .player
            .stats_mut()
            .gain_experience(self.monster.exp_reward());
        self.log.push(BattleEvent::ExperienceGained(gain.exp_gained));
        for &level in &gain.leveled_up_to {
            tracing::info!("{} reached level {}", self.player.name(), level);
            self.log.push(BattleEvent::LevelUp(level));
        }

        self.end(BattleOutcome::Victory);
        gain
    }

    fn finish_defeat(&mut self) {
        self.log.push(BattleEvent::Defeat);

        let stats = self.player.stats_mut();
        let max_hp = stats.max_hp();
        stats.heal(max_hp);

        self.end(BattleOutcome::Defeat);
    }

    fn end(&mut self, outcome: BattleOutcome) {
        self.phase = BattlePhase::Ended(outcome);
        tracing::info!(
            "Battle ended: {} vs {} -> {} after {} turns",
            self.player.name(),
            self.monster.name(),
            outcome,
            self.nonce
        );
    }
}
