//! Viewer binary for the diorama character viewer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use diorama::animation::MotionTable;
use diorama::camera::PresetTable;
use diorama::options::{LayoutOptions, Options};
use diorama::render::{
    BackgroundMode, Geometry, GeometryHandle, TextureHandle, TextureSet,
    TextureSlot,
};
use diorama::scene::{CharacterRig, RigConfig, Scene, SceneObject};
use diorama::{DioramaError, SceneComposer, Viewer};

/// Placeholder part lists standing in for the exported model files.
const KNIGHT_PARTS: &[(&str, u32)] = &[
    ("helmet", 2_304),
    ("eye_left", 96),
    ("eye_right", 96),
    ("breastplate", 4_608),
    ("gauntlets", 1_536),
    ("cloak", 3_072),
    ("rose_left", 768),
    ("rose_right", 768),
    ("sword", 1_152),
];

const DEMON_PARTS: &[(&str, u32)] = &[
    ("horns", 1_920),
    ("eye_left", 96),
    ("eye_right", 96),
    ("torso", 5_376),
    ("cloak", 3_072),
    ("scythe", 1_344),
];

/// Procedurally animated knight and demon viewer.
#[derive(Parser)]
#[command(name = "diorama", version, about, long_about = None)]
struct Cli {
    /// Directory holding animation_data.json, camera_presets.json and
    /// options.toml
    #[arg(default_value = "assets")]
    assets: PathBuf,

    /// Options file to load instead of <ASSETS>/options.toml
    #[arg(long, value_name = "PATH")]
    options: Option<PathBuf>,

    /// Named options preset from <ASSETS>/presets
    #[arg(long, conflicts_with = "options")]
    preset: Option<String>,

    /// Show the knight and the demon side by side
    #[arg(long)]
    versus: bool,

    /// List the options presets in <ASSETS>/presets and exit
    #[arg(long)]
    list_presets: bool,

    /// Write the effective options to PATH and exit
    #[arg(long, value_name = "PATH")]
    save_options: Option<PathBuf>,
}

impl Cli {
    fn presets_dir(&self) -> PathBuf {
        self.assets.join("presets")
    }

    fn options_path(&self) -> PathBuf {
        if let Some(name) = &self.preset {
            return self.presets_dir().join(format!("{name}.toml"));
        }
        self.options
            .clone()
            .unwrap_or_else(|| self.assets.join("options.toml"))
    }
}

fn load_options(cli: &Cli) -> Options {
    let path = cli.options_path();
    let mut options = if path.exists() {
        Options::load(&path).unwrap_or_else(|e| {
            log::warn!("{}: {e}; using default options", path.display());
            Options::default()
        })
    } else {
        if cli.options.is_some() || cli.preset.is_some() {
            log::warn!("{} not found; using default options", path.display());
        }
        Options::default()
    };
    if cli.versus {
        options.layout = LayoutOptions::versus();
    }
    options
}

#[allow(clippy::print_stdout)]
fn list_presets(dir: &Path) {
    let names = Options::list_presets(dir);
    if names.is_empty() {
        println!("no presets in {}", dir.display());
    }
    for name in names {
        println!("{name}");
    }
}

/// Build one rig from its placeholder part list, handing out consecutive
/// geometry and texture handles.
fn demo_rig(config: &RigConfig, next_handle: &mut u32) -> CharacterRig {
    let parts = if config.name.eq_ignore_ascii_case("demon") {
        DEMON_PARTS
    } else {
        KNIGHT_PARTS
    };
    let base = *next_handle;
    let textures = Arc::new(
        TextureSet::new()
            .with(TextureSlot::BaseColor, TextureHandle(base))
            .with(TextureSlot::Normal, TextureHandle(base + 1))
            .with(TextureSlot::Roughness, TextureHandle(base + 2))
            .with(TextureSlot::Emissive, TextureHandle(base + 3)),
    );
    *next_handle += 4;

    let objects = parts
        .iter()
        .map(|&(name, index_count)| {
            let handle = GeometryHandle(*next_handle);
            *next_handle += 1;
            SceneObject::new(
                name,
                Geometry::new(handle, index_count),
                Arc::clone(&textures),
            )
        })
        .collect();
    CharacterRig::new(config.clone(), objects)
}

fn build_composer(cli: &Cli, options: Options) -> SceneComposer {
    let motion =
        MotionTable::load_or_empty(&cli.assets.join("animation_data.json"));
    let presets =
        PresetTable::load_or_default(&cli.assets.join("camera_presets.json"));

    let mut scene = Scene::new();
    let mut next_handle = 1;
    for config in &options.layout.rigs {
        scene.add_rig(demo_rig(config, &mut next_handle));
    }
    let _ = scene.bind_behaviors(&motion, &options.animation, &options.glow);

    let background = options
        .display
        .background_image
        .as_ref()
        .map(|image| cli.assets.join(image));
    let mut composer = SceneComposer::new(options, scene, presets);
    if let Some(image) = background {
        // The image is uploaded by the backend under the next free handle.
        log::info!("background image {}", image.display());
        composer.set_background(BackgroundMode::Texture(TextureHandle(next_handle)));
    }
    composer
}

fn run(assets: &Path, composer: SceneComposer) -> Result<(), DioramaError> {
    log::info!(
        "viewing {} parts from {}",
        composer.scene().object_count(),
        assets.display()
    );
    Viewer::builder(composer).build().run()
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if cli.list_presets {
        list_presets(&cli.presets_dir());
        return;
    }

    let options = load_options(&cli);
    if let Some(path) = &cli.save_options {
        if let Err(e) = options.save(path) {
            log::error!("{}: {e}", path.display());
            std::process::exit(1);
        }
        log::info!("options written to {}", path.display());
        return;
    }

    let composer = build_composer(&cli, options);
    if let Err(e) = run(&cli.assets, composer) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["diorama", "--verbose"]).is_err());
    }

    #[test]
    fn preset_resolves_inside_assets() {
        let cli = Cli::try_parse_from(["diorama", "data", "--preset", "still"])
            .unwrap();
        assert_eq!(cli.options_path(), Path::new("data/presets/still.toml"));
        assert!(
            Cli::try_parse_from(["diorama", "--preset", "a", "--options", "b"])
                .is_err()
        );
    }

    #[test]
    fn defaults_read_bundled_assets() {
        let cli = Cli::try_parse_from(["diorama", "--versus"]).unwrap();
        assert_eq!(cli.options_path(), Path::new("assets/options.toml"));
        assert!(cli.versus);
        assert!(!cli.list_presets);
    }
}
