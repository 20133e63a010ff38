use clap::Parser;
use wasm_bindgen::prelude::*;

mod canvas;
mod dialogs;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Parses `#-v&--seed=42&--rows=9` style location hashes.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailmark_core::{GameConfig, Input};

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.game.seed, None);
        assert_eq!(args.game.config(), GameConfig::default());
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn hash_overrides_config_and_keys() {
        let args = Args::from_location_hash("#-vv&--seed=42&--rows=9&--difficulty=2&--key-reset=n")
            .unwrap();

        assert_eq!(args.game.seed, Some(42));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
        let config = args.game.config();
        assert_eq!(config.size, (9, 7));
        assert_eq!(config.difficulty, 2);
        let keys = args.game.key_bindings();
        assert_eq!(keys.resolve("n"), Some(Input::Reset));
        assert_eq!(keys.resolve("r"), None);
    }

    #[test]
    fn unreachable_config_falls_back_to_default() {
        let args = Args::from_location_hash("#--difficulty=5").unwrap();

        assert_eq!(args.game.config(), GameConfig::default());
    }
}
