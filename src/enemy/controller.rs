//! Enemy domain: per-frame behavior of a single enemy.

use bevy::prelude::*;

use crate::combat::{AttackVariant, CombatState, Health, apply_damage, place_hitbox};
use crate::core::ConfigError;
use crate::enemy::{AiState, EnemyId, EnemyTuning, decide_state};
use crate::level::BoundaryContact;
use crate::physics::{Facing, KinematicBody, PhysicsTuning};

#[derive(Debug, Clone)]
pub struct EnemyEntity {
    pub id: EnemyId,
    /// Archetype id from the content registry
    pub archetype: String,
    pub body: KinematicBody,
    pub combat: CombatState,
    pub health: Health,
    pub facing: Facing,
    pub state: AiState,
    /// Centre of the patrol span
    pub start_x: f32,
    pub tuning: EnemyTuning,
}

impl EnemyEntity {
    pub fn new(
        id: EnemyId,
        archetype: impl Into<String>,
        spawn: Vec2,
        tuning: EnemyTuning,
    ) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let mut body = KinematicBody::new(spawn, tuning.width, tuning.height)?;
        // Enemies enter walking left
        body.velocity.x = -tuning.speed;

        Ok(Self {
            id,
            archetype: archetype.into(),
            body,
            combat: CombatState::default(),
            health: Health::new(tuning.max_health),
            facing: Facing::Left,
            state: AiState::Patrol,
            start_x: spawn.x,
            tuning,
        })
    }

    /// Run the AI for one frame and integrate. Returns true when an attack starts.
    ///
    /// `player` is the player's feet position after this frame's resolution.
    pub fn update(&mut self, player: Vec2, dt: f32, physics: &PhysicsTuning) -> bool {
        self.combat.tick(dt);

        let dx = player.x - self.body.position.x;
        let dy = player.y - self.body.position.y;
        self.state = decide_state(dx, dy, &self.tuning);

        let mut attacked = false;
        // Knockback carries the body while stunned
        if !self.combat.is_stunned() {
            match self.state {
                AiState::Patrol => self.patrol(),
                AiState::Chase => self.chase(dx),
                AiState::Attack => attacked = self.attack(dx),
            }
        }

        self.body.integrate(dt, physics);
        attacked
    }

    fn patrol(&mut self) {
        let x = self.body.position.x;
        if x <= self.start_x - self.tuning.patrol_range {
            self.facing = Facing::Right;
        } else if x >= self.start_x + self.tuning.patrol_range {
            self.facing = Facing::Left;
        }
        self.body.velocity.x = self.facing.sign() * self.tuning.speed;
    }

    /// A wall cuts the patrol span short; head back into the level.
    pub fn turn_at_wall(&mut self, contact: BoundaryContact) {
        if self.state != AiState::Patrol {
            return;
        }
        match contact {
            BoundaryContact::LeftWall => self.facing = Facing::Right,
            BoundaryContact::RightWall => self.facing = Facing::Left,
            BoundaryContact::DeathZone => {}
        }
    }

    fn chase(&mut self, dx: f32) {
        match Facing::from_delta(dx) {
            Some(facing) => {
                self.facing = facing;
                self.body.velocity.x = facing.sign() * self.tuning.speed;
            }
            None => self.body.velocity.x = 0.0,
        }
    }

    fn attack(&mut self, dx: f32) -> bool {
        self.body.velocity.x = 0.0;
        if let Some(facing) = Facing::from_delta(dx) {
            self.facing = facing;
        }
        if !self.combat.cooldown_ready() {
            return false;
        }

        self.combat.begin_attack(
            &self.tuning.combat,
            AttackVariant::Normal,
            self.tuning.attack_damage,
        );
        debug!("Enemy {:?} attacks", self.id);
        true
    }

    pub fn take_damage(&mut self, amount: f32) -> Option<f32> {
        apply_damage(
            &mut self.health,
            &mut self.combat,
            &mut self.body,
            self.facing,
            &self.tuning.combat,
            amount,
        )
    }

    pub fn attack_hitbox(&self) -> Option<Rect> {
        self.combat
            .is_attacking()
            .then(|| place_hitbox(self.body.bounds(), self.facing, &self.tuning.attack_hitbox))
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}
