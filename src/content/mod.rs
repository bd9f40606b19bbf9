//! Content domain: RON-backed characters, enemies, levels and gameplay tuning.

mod builtin;
mod data;
mod loader;
mod registry;
mod validation;


pub use builtin::{builtin_characters, builtin_enemies, builtin_levels};
pub use data::*;
pub use loader::{ContentLoadError, load_all_content, parse_ron};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the RON data files, relative to the working directory
pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load content from disk, falling back to the built-in set on any failure.
fn load_content(mut commands: Commands) {
    let (registry, defaults) = match load_all_content(Path::new(CONTENT_DIR)) {
        Ok(loaded) => loaded,
        Err(errors) => {
            for e in &errors {
                warn!("{}", e);
            }
            warn!("Using built-in content ({} load errors)", errors.len());
            (ContentRegistry::builtin(), GameplayDefaults::default())
        }
    };

    let problems = validate_content(&registry, &defaults);
    for problem in &problems {
        warn!("Content validation: {}", problem);
    }

    info!("{}", registry.summary());
    commands.insert_resource(registry);
    commands.insert_resource(defaults);
}
