//! Player domain: movement, jump and attack logic for the player avatar.

use bevy::prelude::*;
use serde::{Serialize, Serializer};

use crate::combat::{
    AttackVariant, CombatState, Health, apply_damage, combo_damage, place_hitbox,
};
use crate::core::ConfigError;
use crate::level::Landing;
use crate::physics::{Facing, KinematicBody, PhysicsTuning};
use crate::player::{PlayerInput, PlayerTuning};

/// Axis values inside this band count as no input
pub const INPUT_DEADZONE: f32 = 0.1;

/// Animation label for renderers, derived from the simulation each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
    Attack,
}

impl AnimationState {
    pub fn label(self) -> &'static str {
        match self {
            AnimationState::Idle => "IDLE",
            AnimationState::Walk => "WALK",
            AnimationState::Jump => "JUMP",
            AnimationState::Attack => "ATTACK",
        }
    }

    /// Attack beats airborne, airborne beats movement.
    pub fn derive(attacking: bool, on_ground: bool, velocity_x: f32) -> Self {
        if attacking {
            AnimationState::Attack
        } else if !on_ground {
            AnimationState::Jump
        } else if velocity_x != 0.0 {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        }
    }
}

/// Serialized as the renderer label
impl Serialize for AnimationState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Move `current` toward the input target for one frame.
///
/// With input held the velocity eases toward `axis * speed` and never
/// overshoots it. Without input it decays toward zero and never crosses it.
pub fn approach_velocity(current: f32, axis: f32, tuning: &PlayerTuning, dt: f32) -> f32 {
    if axis.abs() > INPUT_DEADZONE {
        let target = axis.clamp(-1.0, 1.0) * tuning.speed;
        let accel = tuning.acceleration * dt;
        if current < target {
            (current + accel).min(target)
        } else {
            (current - accel).max(target)
        }
    } else {
        let decel = tuning.friction * dt;
        if current > 0.0 {
            (current - decel).max(0.0)
        } else {
            (current + decel).min(0.0)
        }
    }
}

/// An attack that began during a player update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackStart {
    pub variant: AttackVariant,
    /// Combo position, 0 for the special attack
    pub combo: u32,
    pub damage: f32,
}

/// What the player did during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerActions {
    pub jumped: bool,
    pub attack: Option<AttackStart>,
}

/// The player avatar: body, combat timers and jump latches.
#[derive(Debug, Clone)]
pub struct PlayerEntity {
    pub body: KinematicBody,
    pub combat: CombatState,
    pub health: Health,
    pub facing: Facing,
    pub tuning: PlayerTuning,
    pub jump_buffer_timer: f32,
    pub coyote_timer: f32,
    /// Grounded state right before integration; detects walking off ledges
    grounded_before_move: bool,
    airborne_at_start: bool,
}

impl PlayerEntity {
    pub fn new(spawn: Vec2, tuning: PlayerTuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let body = KinematicBody::new(spawn, tuning.width, tuning.height)?;

        Ok(Self {
            body,
            combat: CombatState::default(),
            health: Health::new(tuning.max_health),
            facing: Facing::Right,
            tuning,
            jump_buffer_timer: 0.0,
            coyote_timer: 0.0,
            grounded_before_move: false,
            airborne_at_start: true,
        })
    }

    /// Return to a fresh spawn without reallocating.
    pub fn reset(&mut self, spawn: Vec2) {
        self.respawn(spawn);
        self.health.restore();
        self.facing = Facing::Right;
    }

    /// Move to `spawn` with timers and jump latches cleared. Health carries over.
    pub fn respawn(&mut self, spawn: Vec2) {
        self.body.teleport(spawn);
        self.combat.reset();
        self.jump_buffer_timer = 0.0;
        self.coyote_timer = 0.0;
        self.grounded_before_move = false;
        self.airborne_at_start = true;
    }

    /// Decide velocities, jumps and attacks for this frame, then integrate.
    ///
    /// Must be followed by level resolution and `finish_step`.
    pub fn update(
        &mut self,
        input: &PlayerInput,
        dt: f32,
        physics: &PhysicsTuning,
    ) -> PlayerActions {
        let mut actions = PlayerActions::default();

        self.tick_timers(dt);
        self.airborne_at_start = !self.body.on_ground;

        if input.jump_just_pressed {
            self.jump_buffer_timer = self.tuning.jump_buffer_time;
        }

        // Hit-stun drops horizontal input; gravity and attacks still run
        let axis = if self.combat.is_stunned() {
            0.0
        } else {
            input.axis
        };
        self.body.velocity.x = approach_velocity(self.body.velocity.x, axis, &self.tuning, dt);
        if axis.abs() > INPUT_DEADZONE {
            if let Some(facing) = Facing::from_delta(axis) {
                self.facing = facing;
            }
        }

        actions.jumped = self.try_jump();

        if input.attack_just_pressed {
            actions.attack = self.try_attack();
        }
        if input.special_just_pressed && actions.attack.is_none() {
            actions.attack = self.try_special();
        }

        self.grounded_before_move = self.body.on_ground;
        self.body.integrate(dt, physics);

        actions
    }

    /// Update ledge and landing bookkeeping after level resolution.
    ///
    /// Returns true on the frame the player touches down.
    pub fn finish_step(&mut self, landing: Option<Landing>) -> bool {
        if self.body.on_ground {
            self.coyote_timer = 0.0;
        } else if self.grounded_before_move {
            // Walked off an edge without jumping
            self.coyote_timer = self.tuning.coyote_time;
        }
        self.grounded_before_move = false;

        landing.is_some() && self.airborne_at_start
    }

    fn tick_timers(&mut self, dt: f32) {
        self.combat.tick(dt);
        self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
        self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        if self.body.on_ground {
            self.coyote_timer = 0.0;
        }
    }

    fn try_jump(&mut self) -> bool {
        let wants_jump = self.jump_buffer_timer > 0.0;
        let can_jump = self.body.on_ground || self.coyote_timer > 0.0;
        if !(wants_jump && can_jump) {
            return false;
        }

        self.body.velocity.y = -self.tuning.jump_force;
        self.body.on_ground = false;
        self.coyote_timer = 0.0;
        self.jump_buffer_timer = 0.0;
        debug!(
            "Player jump at ({:.1}, {:.1})",
            self.body.position.x, self.body.position.y
        );
        true
    }

    fn try_attack(&mut self) -> Option<AttackStart> {
        if !self.combat.cooldown_ready() || self.combat.is_attacking() {
            return None;
        }

        let timing = self.tuning.combat;
        let combo = self.combat.advance_combo(&timing);
        let damage = combo_damage(self.tuning.attack_damage, combo);
        self.combat
            .begin_attack(&timing, AttackVariant::Normal, damage);

        debug!("Player attack: combo={}, damage={:.1}", combo, damage);
        Some(AttackStart {
            variant: AttackVariant::Normal,
            combo,
            damage,
        })
    }

    fn try_special(&mut self) -> Option<AttackStart> {
        if !self.body.on_ground || self.combat.is_attacking() {
            return None;
        }

        self.body.position.x += self.facing.sign() * self.tuning.special_dash_distance;
        let damage = self.tuning.attack_damage * self.tuning.special_damage_multiplier;
        self.combat
            .begin_attack(&self.tuning.combat, AttackVariant::Special, damage);

        debug!("Player special attack: damage={:.1}", damage);
        Some(AttackStart {
            variant: AttackVariant::Special,
            combo: 0,
            damage,
        })
    }

    /// Apply an incoming hit. `None` when the hit was absorbed by i-frames.
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

    /// Active hitbox, widened for the special attack.
    pub fn attack_hitbox(&self) -> Option<Rect> {
        if !self.combat.is_attacking() {
            return None;
        }
        let shape = match self.combat.variant {
            AttackVariant::Normal => &self.tuning.attack_hitbox,
            AttackVariant::Special => &self.tuning.special_hitbox,
        };
        Some(place_hitbox(self.body.bounds(), self.facing, shape))
    }

    pub fn animation_state(&self) -> AnimationState {
        AnimationState::derive(
            self.combat.is_attacking(),
            self.body.on_ground,
            self.body.velocity.x,
        )
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_dead()
    }
}
