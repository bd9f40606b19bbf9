//! Core domain: events for run flow.

use bevy::ecs::message::Message;

/// Event fired when the player's health reaches zero or they fall out of the level
#[derive(Debug)]
pub struct PlayerDefeatedEvent {
    pub level_index: usize,
}

impl Message for PlayerDefeatedEvent {}

/// Event fired when enough enemies are defeated to finish a level
#[derive(Debug)]
pub struct LevelClearedEvent {
    pub level_index: usize,
}

impl Message for LevelClearedEvent {}

/// Requests a fresh session from the first level
#[derive(Debug)]
pub struct RestartRunEvent;

impl Message for RestartRunEvent {}

/// Requests loading the level at `RunConfig::level_index`
#[derive(Debug)]
pub struct AdvanceLevelEvent {
    pub level_index: usize,
}

impl Message for AdvanceLevelEvent {}
