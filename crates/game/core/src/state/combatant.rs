//! Party and enemy combatants.
//!
//! Templates are plain data loaded from content; [`Party`] and [`Enemy`] are
//! the live combatants built from them. Templates are validated once at
//! creation, after which every hp change clamps to `[0, max_hp]` instead of
//! failing.

use arrayvec::ArrayVec;

use crate::board::Element;
use crate::combat::{apply_damage, apply_heal};
use crate::config::GameConfig;

/// Malformed combatant data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("{name}: max hp must be positive")]
    ZeroMaxHp { name: String },

    #[error("{name}: {stat} must not be negative (got {value})")]
    NegativeStat {
        name: String,
        stat: &'static str,
        value: i32,
    },

    #[error("party roster is empty")]
    EmptyRoster,

    #[error("party roster has {count} allies (maximum {max})")]
    RosterTooLarge { count: usize, max: usize },

    #[error("encounter sequence is empty")]
    EmptyEncounters,
}

fn check_stat(name: &str, stat: &'static str, value: i32) -> Result<(), TemplateError> {
    if value < 0 {
        return Err(TemplateError::NegativeStat {
            name: name.to_owned(),
            stat,
            value,
        });
    }
    Ok(())
}

/// Party member answering runs of its element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ally {
    pub name: String,
    pub element: Element,
    pub attack: i32,
    pub defense: i32,
}

impl Ally {
    pub fn new(name: impl Into<String>, element: Element, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            element,
            attack,
            defense,
        }
    }
}

/// Party definition as authored in content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyTemplate {
    pub name: String,
    pub max_hp: u32,
    pub allies: Vec<Ally>,
}

impl PartyTemplate {
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.max_hp == 0 {
            return Err(TemplateError::ZeroMaxHp {
                name: self.name.clone(),
            });
        }
        if self.allies.is_empty() {
            return Err(TemplateError::EmptyRoster);
        }
        if self.allies.len() > GameConfig::MAX_ALLIES {
            return Err(TemplateError::RosterTooLarge {
                count: self.allies.len(),
                max: GameConfig::MAX_ALLIES,
            });
        }
        for ally in &self.allies {
            check_stat(&ally.name, "attack", ally.attack)?;
            check_stat(&ally.name, "defense", ally.defense)?;
        }
        Ok(())
    }
}

/// The player's party: one shared hp pool and a roster of allies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    name: String,
    hp: u32,
    max_hp: u32,
    /// Mean of the allies' defense, fixed at creation.
    defense: f64,
    allies: ArrayVec<Ally, { GameConfig::MAX_ALLIES }>,
}

impl Party {
    /// Builds a full-hp party from a validated template.
    pub fn from_template(template: &PartyTemplate) -> Result<Self, TemplateError> {
        template.validate()?;

        let allies: ArrayVec<Ally, { GameConfig::MAX_ALLIES }> =
            template.allies.iter().cloned().collect();
        let total: f64 = allies.iter().map(|ally| f64::from(ally.defense)).sum();
        let defense = total / allies.len() as f64;

        Ok(Self {
            name: template.name.clone(),
            hp: template.max_hp,
            max_hp: template.max_hp,
            defense,
            allies,
        })
    }

    /// Same party with hp set to `hp`, clamped to `[0, max_hp]`.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn hp(&self) -> u32 {
        self.hp
    }

    pub const fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub const fn defense(&self) -> f64 {
        self.defense
    }

    pub fn allies(&self) -> &[Ally] {
        &self.allies
    }

    /// First ally whose element answers a run of `element`.
    pub fn ally_for(&self, element: Element) -> Option<&Ally> {
        self.allies.iter().find(|ally| ally.element == element)
    }

    /// Applies damage, returning the new hp.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.hp = apply_damage(self.hp, damage);
        self.hp
    }

    /// Applies healing, returning the new hp.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp = apply_heal(self.hp, amount, self.max_hp);
        self.hp
    }

    /// Back to full hp.
    pub fn restore(&mut self) {
        self.hp = self.max_hp;
    }

    pub const fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

/// Enemy definition as authored in content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub element: Element,
    pub max_hp: u32,
    pub attack: i32,
    pub defense: i32,
}

impl EnemyTemplate {
    pub fn new(
        name: impl Into<String>,
        element: Element,
        max_hp: u32,
        attack: i32,
        defense: i32,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            max_hp,
            attack,
            defense,
        }
    }

    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.max_hp == 0 {
            return Err(TemplateError::ZeroMaxHp {
                name: self.name.clone(),
            });
        }
        check_stat(&self.name, "attack", self.attack)?;
        check_stat(&self.name, "defense", self.defense)
    }
}

/// Active opponent of the current encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    name: String,
    element: Element,
    hp: u32,
    max_hp: u32,
    attack: i32,
    defense: i32,
}

impl Enemy {
    pub fn from_template(template: &EnemyTemplate) -> Result<Self, TemplateError> {
        template.validate()?;
        Ok(Self::spawn(template))
    }

    /// Full-hp enemy from a template that was already validated.
    pub(crate) fn spawn(template: &EnemyTemplate) -> Self {
        Self {
            name: template.name.clone(),
            element: template.element,
            hp: template.max_hp,
            max_hp: template.max_hp,
            attack: template.attack,
            defense: template.defense,
        }
    }

    /// Same enemy with hp set to `hp`, clamped to `[0, max_hp]`.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn element(&self) -> Element {
        self.element
    }

    pub const fn hp(&self) -> u32 {
        self.hp
    }

    pub const fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub const fn attack(&self) -> i32 {
        self.attack
    }

    pub const fn defense(&self) -> i32 {
        self.defense
    }

    /// Applies damage, returning the new hp.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.hp = apply_damage(self.hp, damage);
        self.hp
    }

    pub const fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

/// Ordered, non-empty list of enemies faced one after another.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSequence {
    templates: Vec<EnemyTemplate>,
}

impl EncounterSequence {
    pub fn new(templates: Vec<EnemyTemplate>) -> Result<Self, TemplateError> {
        if templates.is_empty() {
            return Err(TemplateError::EmptyEncounters);
        }
        for template in &templates {
            template.validate()?;
        }
        Ok(Self { templates })
    }

    pub fn get(&self, index: usize) -> Option<&EnemyTemplate> {
        self.templates.get(index)
    }

    pub fn first(&self) -> &EnemyTemplate {
        // Non-empty by construction.
        &self.templates[0]
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyTemplate> {
        self.templates.iter()
    }
}
