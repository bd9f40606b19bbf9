//! Simulation domain: the per-frame step tying player, enemies and level together.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::{AttackVariant, TargetId};
use crate::content::LevelDef;
use crate::core::{ConfigError, ScoreSink};
use crate::enemy::{AiState, EnemyEntity, EnemyId, EnemyTuning};
use crate::level::{BoundaryContact, EnemySpawner, LevelGeometry, SpawnRequest, overlaps};
use crate::physics::{Facing, KinematicBody, PhysicsTuning};
use crate::player::{AnimationState, PlayerEntity, PlayerInput, PlayerTuning};

/// Something observable that happened during a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SimEvent {
    PlayerJumped,
    PlayerLanded,
    EnemySpawned {
        id: EnemyId,
        archetype: String,
    },
    AttackStarted {
        attacker: TargetId,
        variant: AttackVariant,
        /// 0 for attacks that do not chain
        combo: u32,
    },
    Hit {
        attacker: TargetId,
        target: TargetId,
        damage: f32,
    },
    EnemyDefeated {
        id: EnemyId,
        points: u32,
    },
    /// Fell out of the level; no points
    EnemyLost {
        id: EnemyId,
    },
    PlayerDefeated,
    LevelCleared,
}

/// Read-only view of one body for renderers and telemetry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySnapshot {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub size: [f32; 2],
    pub facing: Facing,
    pub on_ground: bool,
    pub animation: AnimationState,
    pub health: f32,
    pub max_health: f32,
    pub attacking: bool,
    /// `[min_x, min_y, max_x, max_y]` while the attack is active
    pub hitbox: Option<[f32; 4]>,
}

impl EntitySnapshot {
    fn capture(
        body: &KinematicBody,
        facing: Facing,
        animation: AnimationState,
        health: (f32, f32),
        hitbox: Option<Rect>,
    ) -> Self {
        Self {
            position: body.position.to_array(),
            velocity: body.velocity.to_array(),
            size: body.size.to_array(),
            facing,
            on_ground: body.on_ground,
            animation,
            health: health.0,
            max_health: health.1,
            attacking: hitbox.is_some(),
            hitbox: hitbox.map(|r| [r.min.x, r.min.y, r.max.x, r.max.y]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemySnapshot {
    pub id: EnemyId,
    pub archetype: String,
    pub state: AiState,
    #[serde(flatten)]
    pub entity: EntitySnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub frame: u64,
    pub level: String,
    pub player: EntitySnapshot,
    pub enemies: Vec<EnemySnapshot>,
    /// Points awarded in this session
    pub score: u32,
    pub kills: u32,
}

/// One level's worth of simulation state. All mutation happens in `step`.
#[derive(Resource, Debug, Clone)]
pub struct Session {
    physics: PhysicsTuning,
    level_id: String,
    geometry: LevelGeometry,
    spawner: EnemySpawner,
    archetypes: HashMap<String, EnemyTuning>,
    player: PlayerEntity,
    player_spawn: Vec2,
    enemies: Vec<EnemyEntity>,
    next_enemy_id: u32,
    seed: u64,
    frame: u64,
    kills: u32,
    kills_to_clear: u32,
    points: u32,
    cleared: bool,
}

impl Session {
    /// Build a session for `level`. Every tuning is validated up front.
    pub fn new(
        level: &LevelDef,
        player_tuning: PlayerTuning,
        archetypes: HashMap<String, EnemyTuning>,
        physics: PhysicsTuning,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        for tuning in archetypes.values() {
            tuning.validate()?;
        }
        let player = PlayerEntity::new(level.player_spawn(), player_tuning)?;
        let geometry = LevelGeometry::from_def(level)?;

        Ok(Self {
            physics,
            level_id: level.id.clone(),
            spawner: Self::spawner_for(level, seed),
            geometry,
            archetypes,
            player,
            player_spawn: level.player_spawn(),
            enemies: Vec::new(),
            next_enemy_id: 0,
            seed,
            frame: 0,
            kills: 0,
            kills_to_clear: level.kills_to_clear,
            points: 0,
            cleared: false,
        })
    }

    fn spawner_for(level: &LevelDef, seed: u64) -> EnemySpawner {
        EnemySpawner::new(
            level.enemy_config.clone(),
            level.spawn_points.clone(),
            level.width,
            seed,
        )
    }

    pub fn player(&self) -> &PlayerEntity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerEntity {
        &mut self.player
    }

    pub fn enemies(&self) -> &[EnemyEntity] {
        &self.enemies
    }

    pub fn geometry(&self) -> &LevelGeometry {
        &self.geometry
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// Add an enemy outside the spawner, e.g. for scripted encounters.
    pub fn spawn_enemy(&mut self, archetype: &str, position: Vec2) -> Result<EnemyId, ConfigError> {
        let tuning = self
            .archetypes
            .get(archetype)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownArchetype(archetype.to_string()))?;
        let id = EnemyId(self.next_enemy_id);
        let enemy = EnemyEntity::new(id, archetype, position, tuning)?;
        self.next_enemy_id += 1;
        self.enemies.push(enemy);
        Ok(id)
    }

    /// Advance the whole simulation by `dt`.
    ///
    /// Does nothing once the player is defeated, until `restart`.
    pub fn step(
        &mut self,
        input: &PlayerInput,
        dt: f32,
        scores: &mut impl ScoreSink,
    ) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if self.player.is_defeated() {
            return events;
        }

        self.step_player(input, dt, &mut events);
        if let Some(request) = self.spawner.tick(dt, self.enemies.len()) {
            self.spawn_requested(request, &mut events);
        }
        let lost = self.step_enemies(dt, &mut events);
        self.detect_hits(&mut events);
        self.remove_enemies(&lost, scores, &mut events);

        if !self.cleared && self.kills_to_clear > 0 && self.kills >= self.kills_to_clear {
            self.cleared = true;
            info!("Level {} cleared after {} kills", self.level_id, self.kills);
            events.push(SimEvent::LevelCleared);
        }
        if self.player.is_defeated() {
            info!("Player defeated at frame {}", self.frame);
            events.push(SimEvent::PlayerDefeated);
        }

        self.frame += 1;
        events
    }

    fn step_player(&mut self, input: &PlayerInput, dt: f32, events: &mut Vec<SimEvent>) {
        let actions = self.player.update(input, dt, &self.physics);
        if actions.jumped {
            events.push(SimEvent::PlayerJumped);
        }
        if let Some(attack) = actions.attack {
            events.push(SimEvent::AttackStarted {
                attacker: TargetId::Player,
                variant: attack.variant,
                combo: attack.combo,
            });
        }

        let landing = self.geometry.resolve(&mut self.player.body);
        let contact = self.geometry.constrain(&mut self.player.body);
        if self.player.finish_step(landing) {
            debug!("Player landed at y={:.1}", self.player.body.position.y);
            events.push(SimEvent::PlayerLanded);
        }

        if contact == Some(BoundaryContact::DeathZone) {
            let remaining = self.player.health.current;
            self.player.health.take_damage(remaining);
        }
    }

    fn spawn_requested(&mut self, request: SpawnRequest, events: &mut Vec<SimEvent>) {
        if !self.archetypes.contains_key(&request.archetype) {
            warn!("Unknown enemy archetype '{}', skipping spawn", request.archetype);
            return;
        }

        match self.spawn_enemy(&request.archetype, request.position) {
            Ok(id) => {
                debug!(
                    "Spawned {} {:?} at ({:.0}, {:.0})",
                    request.archetype, id, request.position.x, request.position.y
                );
                events.push(SimEvent::EnemySpawned {
                    id,
                    archetype: request.archetype,
                });
            }
            Err(e) => error!("Failed to spawn {}: {}", request.archetype, e),
        }
    }

    /// Returns enemies that fell into the death zone.
    fn step_enemies(&mut self, dt: f32, events: &mut Vec<SimEvent>) -> Vec<EnemyId> {
        let player_position = self.player.body.position;
        let mut lost = Vec::new();

        for enemy in &mut self.enemies {
            if enemy.update(player_position, dt, &self.physics) {
                events.push(SimEvent::AttackStarted {
                    attacker: TargetId::Enemy(enemy.id),
                    variant: AttackVariant::Normal,
                    combo: 0,
                });
            }

            self.geometry.resolve(&mut enemy.body);
            match self.geometry.constrain(&mut enemy.body) {
                Some(BoundaryContact::DeathZone) => lost.push(enemy.id),
                Some(wall) => enemy.turn_at_wall(wall),
                None => {}
            }
        }

        lost
    }

    /// Each attack damages a given target at most once.
    fn detect_hits(&mut self, events: &mut Vec<SimEvent>) {
        if let Some(hitbox) = self.player.attack_hitbox() {
            let damage = self.player.combat.attack_damage;
            for enemy in &mut self.enemies {
                let target = TargetId::Enemy(enemy.id);
                if self.player.combat.has_hit(target) || !overlaps(hitbox, enemy.body.bounds()) {
                    continue;
                }
                if let Some(dealt) = enemy.take_damage(damage) {
                    self.player.combat.register_hit(target);
                    events.push(SimEvent::Hit {
                        attacker: TargetId::Player,
                        target,
                        damage: dealt,
                    });
                }
            }
        }

        for enemy in &mut self.enemies {
            // Defeated this frame; its swing never lands
            if enemy.is_dead() {
                continue;
            }
            let Some(hitbox) = enemy.attack_hitbox() else {
                continue;
            };
            if enemy.combat.has_hit(TargetId::Player)
                || !overlaps(hitbox, self.player.body.bounds())
            {
                continue;
            }
            if let Some(dealt) = self.player.take_damage(enemy.combat.attack_damage) {
                enemy.combat.register_hit(TargetId::Player);
                events.push(SimEvent::Hit {
                    attacker: TargetId::Enemy(enemy.id),
                    target: TargetId::Player,
                    damage: dealt,
                });
            }
        }
    }

    fn remove_enemies(
        &mut self,
        lost: &[EnemyId],
        scores: &mut impl ScoreSink,
        events: &mut Vec<SimEvent>,
    ) {
        let (gone, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.enemies)
            .into_iter()
            .partition(|enemy| enemy.is_dead() || lost.contains(&enemy.id));
        self.enemies = live;

        for enemy in gone {
            if enemy.is_dead() {
                let points = enemy.tuning.points;
                scores.award(points);
                self.points = self.points.saturating_add(points);
                self.kills += 1;
                info!("Enemy {:?} defeated (+{} points)", enemy.id, points);
                events.push(SimEvent::EnemyDefeated {
                    id: enemy.id,
                    points,
                });
            } else {
                debug!("Enemy {:?} fell out of the level", enemy.id);
                events.push(SimEvent::EnemyLost { id: enemy.id });
            }
        }
    }

    /// Replay the current level from scratch with the same seed.
    pub fn restart(&mut self) {
        self.player.reset(self.player_spawn);
        self.enemies.clear();
        self.next_enemy_id = 0;
        self.spawner.reset(self.seed);
        self.frame = 0;
        self.kills = 0;
        self.points = 0;
        self.cleared = false;
    }

    /// Swap in the next level. Player health and the session score carry over.
    pub fn load_level(&mut self, level: &LevelDef) -> Result<(), ConfigError> {
        self.geometry = LevelGeometry::from_def(level)?;
        self.spawner = Self::spawner_for(level, self.seed);
        self.level_id = level.id.clone();
        self.player_spawn = level.player_spawn();
        self.kills_to_clear = level.kills_to_clear;

        self.player.respawn(self.player_spawn);
        self.enemies.clear();
        self.kills = 0;
        self.cleared = false;

        info!("Loaded level {} ({})", level.id, level.name);
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let player = EntitySnapshot::capture(
            &self.player.body,
            self.player.facing,
            self.player.animation_state(),
            (self.player.health.current, self.player.health.max),
            self.player.attack_hitbox(),
        );

        let enemies = self
            .enemies
            .iter()
            .map(|enemy| EnemySnapshot {
                id: enemy.id,
                archetype: enemy.archetype.clone(),
                state: enemy.state,
                entity: EntitySnapshot::capture(
                    &enemy.body,
                    enemy.facing,
                    AnimationState::derive(
                        enemy.combat.is_attacking(),
                        enemy.body.on_ground,
                        enemy.body.velocity.x,
                    ),
                    (enemy.health.current, enemy.health.max),
                    enemy.attack_hitbox(),
                ),
            })
            .collect();

        SessionSnapshot {
            frame: self.frame,
            level: self.level_id.clone(),
            player,
            enemies,
            score: self.points,
            kills: self.kills,
        }
    }
}
