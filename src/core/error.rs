//! Core domain: configuration errors raised when building simulation entities.

/// Tuning that would produce degenerate behavior at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `max_combo` must allow at least one hit per sequence
    MaxCombo(u32),
    AttackDuration(f32),
    JumpForce(f32),
    /// Body dimensions must be positive
    BodySize { width: f32, height: f32 },
    /// Level bounds must be positive
    LevelSize { width: f32, height: f32 },
    /// Enemy archetype missing from the session's table
    UnknownArchetype(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MaxCombo(value) => {
                write!(f, "max_combo must be at least 1, got {}", value)
            }
            ConfigError::AttackDuration(value) => {
                write!(f, "attack_duration must be positive, got {}", value)
            }
            ConfigError::JumpForce(value) => {
                write!(f, "jump_force must be positive, got {}", value)
            }
            ConfigError::BodySize { width, height } => {
                write!(f, "body size must be positive, got {}x{}", width, height)
            }
            ConfigError::LevelSize { width, height } => {
                write!(f, "level size must be positive, got {}x{}", width, height)
            }
            ConfigError::UnknownArchetype(id) => {
                write!(f, "unknown enemy archetype '{}'", id)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Reject zero, negative and NaN values.
pub(crate) fn positive(value: f32) -> bool {
    value > 0.0
}
