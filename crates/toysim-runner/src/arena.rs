//! Duel simulation between two combat units.

use crate::config::ArenaConfig;
use crate::error::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use toysim_domain::{DomainError, Unit, UnitAction};
use tracing::{info, warn};

/// A single attack and its counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub attacker: String,
    pub target: String,
    pub dealt: f64,
    /// `None` when the blow killed the target.
    pub countered: Option<f64>,
    pub attacker_hp: f64,
    pub target_hp: f64,
}

/// Summary of a duel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelReport {
    pub challenger: String,
    pub defender: String,
    pub rounds: Vec<RoundReport>,
    /// `None` when the round limit ran out with both units standing.
    pub winner: Option<String>,
}

/// Two units taking turns attacking each other.
pub struct Arena {
    challenger: Unit,
    defender: Unit,
    max_rounds: u32,
}

impl Arena {
    pub fn new(challenger: Unit, defender: Unit, max_rounds: u32) -> Self {
        Self {
            challenger,
            defender,
            max_rounds,
        }
    }

    /// Roll two units with random health and damage from the configured ranges.
    pub fn random(
        rng: &mut impl Rng,
        config: &ArenaConfig,
        challenger: &str,
        defender: &str,
    ) -> Result<Self> {
        config.validate()?;
        let mut roll = |name: &str| {
            let hp = rng.gen_range(config.min_hp..=config.max_hp).round();
            let damage = rng.gen_range(config.min_damage..=config.max_damage).round();
            Unit::new(name, hp, damage)
        };

        let challenger = roll(challenger)?;
        let defender = roll(defender)?;
        Ok(Self::new(challenger, defender, config.max_rounds))
    }

    pub fn challenger(&self) -> &Unit {
        &self.challenger
    }

    pub fn defender(&self) -> &Unit {
        &self.defender
    }

    /// Alternate attacks, challenger first, until a unit falls or the round
    /// limit is reached.
    pub fn run(mut self) -> Result<DuelReport> {
        let mut rounds = Vec::new();

        for round in 1..=self.max_rounds {
            let (attacker, target) = if round % 2 == 1 {
                (&mut self.challenger, &mut self.defender)
            } else {
                (&mut self.defender, &mut self.challenger)
            };

            let countered = match attacker.attack(target) {
                Ok(exchange) => Some(exchange.countered),
                // the blow landed and the target could not counter
                Err(DomainError::UnitIsDead {
                    action: UnitAction::CounterAttack,
                    ..
                }) => None,
                Err(err @ DomainError::UnitIsDead { .. }) => {
                    warn!("Round {round}: {err}");
                    break;
                }
                Err(err) => return Err(err.into()),
            };
            let dealt = attacker.damage();

            info!(
                "Round {} | {} hits {} for {} | counter {:?} | {} vs {}",
                round,
                attacker.name(),
                target.name(),
                dealt,
                countered,
                attacker,
                target
            );

            rounds.push(RoundReport {
                round,
                attacker: attacker.name().to_string(),
                target: target.name().to_string(),
                dealt,
                countered,
                attacker_hp: attacker.hp(),
                target_hp: target.hp(),
            });

            if !attacker.is_alive() || !target.is_alive() {
                break;
            }
        }

        let winner = match (self.challenger.is_alive(), self.defender.is_alive()) {
            (true, false) => Some(self.challenger.name().to_string()),
            (false, true) => Some(self.defender.name().to_string()),
            _ => None,
        };

        Ok(DuelReport {
            challenger: self.challenger.to_string(),
            defender: self.defender.to_string(),
            rounds,
            winner,
        })
    }
}
