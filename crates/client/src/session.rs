//! Scripted battles.
//!
//! Stands in for the presentation layer: picks the player's action each
//! turn, lets the monster reply, and collects the battle log.

use anyhow::{Context, Result};
use game_core::{
    AttributeKind, Battle, BattleEvent, BattleOutcome, ExperienceGain, GameError,
    PersistedCharacter, Player, TemplateOracle,
};

use crate::config::ClientConfig;

/// Player action picked by the [`AutoPilot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Attack,
    Flee,
}

/// Turn policy for the scripted player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoPilot {
    /// Flee once HP falls below this percentage of max HP.
    pub flee_below_hp_percent: Option<u32>,
}

impl AutoPilot {
    pub fn choose(&self, player: &Player) -> Choice {
        let stats = player.stats();
        match self.flee_below_hp_percent {
            Some(percent)
                if u64::from(stats.current_hp()) * 100
                    < u64::from(percent) * u64::from(stats.max_hp()) =>
            {
                Choice::Flee
            }
            _ => Choice::Attack,
        }
    }
}

/// Everything that happened in one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterReport {
    pub monster_id: String,
    /// `None` when the round cap stopped the battle first.
    pub outcome: Option<BattleOutcome>,
    pub rounds: u32,
    pub events: Vec<BattleEvent>,
    pub experience: Option<ExperienceGain>,
}

/// Fight `monster_id` until the battle ends or `max_rounds` rounds pass.
pub fn run_encounter(
    player: &mut Player,
    monster_id: &str,
    templates: &(impl TemplateOracle + ?Sized),
    seed: u64,
    pilot: &AutoPilot,
    max_rounds: u32,
) -> Result<EncounterReport> {
    let mut battle = Battle::start(player, monster_id, templates, seed)
        .inspect_err(log_game_error)
        .with_context(|| {
            format!(
                "Failed to start battle against '{}' (known monsters: {})",
                monster_id,
                templates.monster_ids().join(", ")
            )
        })?;

    let mut rounds = 0;
    let mut experience = None;
    while battle.outcome().is_none() && rounds < max_rounds {
        rounds += 1;

        let report = match pilot.choose(battle.player()) {
            Choice::Attack => battle.player_attack(),
            Choice::Flee => battle.player_flee(),
        }
        .inspect_err(log_game_error)?;
        if report.experience.is_some() {
            experience = report.experience;
        }

        if !report.phase.is_ended() {
            battle.monster_turn().inspect_err(log_game_error)?;
        }
    }

    let outcome = battle.outcome();
    if outcome.is_none() {
        tracing::warn!(
            "Battle against '{}' stopped after {} rounds",
            monster_id,
            rounds
        );
    }

    Ok(EncounterReport {
        monster_id: monster_id.to_string(),
        outcome,
        rounds,
        events: battle.into_log(),
        experience,
    })
}

/// Result of a whole session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    pub encounters: Vec<EncounterReport>,
    pub player: Player,
}

impl SessionReport {
    /// The character as it would be saved.
    pub fn final_character(&self) -> PersistedCharacter {
        self.player.to_persisted()
    }

    pub fn count(&self, outcome: BattleOutcome) -> usize {
        self.encounters
            .iter()
            .filter(|e| e.outcome == Some(outcome))
            .count()
    }
}

/// Build the configured player and fight every configured monster in order.
///
/// Encounter `i` uses seed `config.seed + i`.
pub fn run_session(
    config: &ClientConfig,
    templates: &(impl TemplateOracle + ?Sized),
) -> Result<SessionReport> {
    let mut player = Player::new(
        config.player_name.clone(),
        &config.player_class,
        config.player_level,
        templates,
    )
    .inspect_err(log_game_error)
    .with_context(|| {
        format!(
            "Failed to create player of class '{}' (known classes: {})",
            config.player_class,
            templates.class_ids().join(", ")
        )
    })?;

    if let Some(attribute) = config.auto_allocate {
        spend_points(&mut player, attribute);
    }

    let pilot = AutoPilot {
        flee_below_hp_percent: config.flee_below_hp_percent,
    };

    let mut encounters = Vec::with_capacity(config.monsters.len());
    for (index, monster_id) in config.monsters.iter().enumerate() {
        let seed = config.seed.wrapping_add(index as u64);
        let report = run_encounter(
            &mut player,
            monster_id,
            templates,
            seed,
            &pilot,
            config.max_rounds,
        )?;

        tracing::info!(
            "Encounter {} ({}): {:?} in {} rounds",
            index + 1,
            monster_id,
            report.outcome,
            report.rounds
        );

        let leveled_up = report.experience.as_ref().is_some_and(|e| e.leveled_up());
        if let Some(attribute) = config.auto_allocate.filter(|_| leveled_up) {
            spend_points(&mut player, attribute);
        }

        if config.rest_between_battles {
            player.stats_mut().rest();
        }

        encounters.push(report);
    }

    Ok(SessionReport { encounters, player })
}

fn log_game_error<E: GameError>(err: &E) {
    if err.severity().is_fatal() {
        tracing::error!("[{}] {}", err.error_code(), err);
    } else {
        tracing::warn!("[{}] {} ({})", err.error_code(), err, err.severity().as_str());
    }
}

fn spend_points(player: &mut Player, attribute: AttributeKind) {
    let stats = player.stats_mut();
    let points = stats.available_points();
    if points > 0 && stats.allocate_point(attribute, points) {
        tracing::debug!("Allocated {} points to {}", points, attribute.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::builtin_snapshot;

    #[test]
    fn pilot_flees_below_threshold() {
        let mut player = Player::new("Hero", "beginner", 1, &builtin_snapshot()).unwrap();
        let pilot = AutoPilot {
            flee_below_hp_percent: Some(50),
        };
        assert_eq!(pilot.choose(&player), Choice::Attack);

        // 185 max: 93 is above half, 92 below
        player.stats_mut().take_damage(92);
        assert_eq!(pilot.choose(&player), Choice::Attack);
        player.stats_mut().take_damage(1);
        assert_eq!(pilot.choose(&player), Choice::Flee);

        assert_eq!(AutoPilot::default().choose(&player), Choice::Attack);
    }

    #[test]
    fn spend_points_uses_whole_pool() {
        let mut player = Player::new("Hero", "beginner", 4, &builtin_snapshot()).unwrap();
        spend_points(&mut player, AttributeKind::Str);

        assert_eq!(player.stats().available_points(), 0);
        assert_eq!(player.stats().bonus_attributes().str, 15);
    }
}
