//! Combat unit with health, damage and counter-attacks.

use crate::error::{DomainError, Result, UnitAction, non_negative};
use crate::round2;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Damage exchanged during a single [`Unit::attack`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// Damage the attacker dealt.
    pub dealt: f64,
    /// Counter-attack damage taken by the attacker.
    pub countered: f64,
}

/// Combat unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    name: String,
    health_points: f64,
    hp_limit: f64,
    damage: f64,
}

impl Unit {
    pub const DEFAULT_HP: f64 = 100.0;
    pub const DEFAULT_DAMAGE: f64 = 20.5;

    /// Create a unit at full health; `hp` also becomes the health limit.
    pub fn new(name: impl Into<String>, hp: f64, damage: f64) -> Result<Self> {
        let hp = non_negative("health points", hp)?;
        Ok(Self {
            name: name.into(),
            health_points: hp,
            hp_limit: hp,
            damage: non_negative("damage", damage)?,
        })
    }

    /// Create a unit with default health and damage.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health_points: Self::DEFAULT_HP,
            hp_limit: Self::DEFAULT_HP,
            damage: Self::DEFAULT_DAMAGE,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health_points > 0.0
    }

    fn ensure_is_alive(&self, action: UnitAction) -> Result<()> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(DomainError::UnitIsDead {
                name: self.name.clone(),
                action,
            })
        }
    }

    /// Heal the unit, never past its health limit.
    pub fn add_health_points(&mut self, hp: f64) -> Result<()> {
        self.ensure_is_alive(UnitAction::RestoreHealth)?;
        let hp = non_negative("health points", hp)?;

        self.health_points = (self.health_points + hp).min(self.hp_limit);
        Ok(())
    }

    /// Apply damage, never below zero. Dead units can still be hit.
    pub fn take_damage(&mut self, damage: f64) -> Result<()> {
        let damage = non_negative("damage", damage)?;

        self.health_points = (self.health_points - damage).max(0.0);
        debug!(unit = %self.name, damage, hp = self.health_points, "unit took damage");
        Ok(())
    }

    /// Hit `enemy` with full damage, then let it counter-attack.
    ///
    /// The damage lands before the counter. If it leaves the enemy dead,
    /// the counter fails and the enemy's [`DomainError::UnitIsDead`]
    /// surfaces here, with the damage already applied.
    pub fn attack(&mut self, enemy: &mut Unit) -> Result<Exchange> {
        self.ensure_is_alive(UnitAction::Attack)?;

        enemy.take_damage(self.damage)?;
        let countered = enemy.counter_attack(self)?;

        Ok(Exchange {
            dealt: self.damage,
            countered,
        })
    }

    /// Hit `enemy` with half damage. Returns the damage dealt.
    pub fn counter_attack(&mut self, enemy: &mut Unit) -> Result<f64> {
        self.ensure_is_alive(UnitAction::CounterAttack)?;

        let damage = self.damage / 2.0;
        enemy.take_damage(damage)?;
        Ok(damage)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> f64 {
        self.health_points
    }

    pub fn hp_limit(&self) -> f64 {
        self.hp_limit
    }

    pub fn damage(&self) -> f64 {
        self.damage
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [hp:{}/{}, damage:{}]",
            self.name,
            round2(self.health_points),
            self.hp_limit,
            self.damage
        )
    }
}
