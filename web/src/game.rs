use crate::canvas::CanvasRenderer;
use crate::dialogs::BrowserDialogs;
use crate::utils::*;
use clap::Args;
use gloo::events::{EventListener, EventListenerOptions};
use trailmark_core as game;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of grid rows
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_SIZE.0)]
    pub rows: game::Coord,

    /// Number of grid columns
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_SIZE.1)]
    pub cols: game::Coord,

    /// Divisor shrinking the longest allowed path
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_DIFFICULTY)]
    pub difficulty: u8,

    /// Cell edge length in pixels
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    #[arg(long, default_value = "ArrowUp")]
    pub key_up: String,

    #[arg(long, default_value = "ArrowDown")]
    pub key_down: String,

    #[arg(long, default_value = "ArrowLeft")]
    pub key_left: String,

    #[arg(long, default_value = "ArrowRight")]
    pub key_right: String,

    /// Key that jumps back to the start square to peek at the route
    #[arg(long, default_value = "s")]
    pub key_start: String,

    /// Key that starts over with a new route
    #[arg(long, default_value = "r")]
    pub key_reset: String,
}

impl GameProps {
    pub(crate) fn config(&self) -> game::GameConfig {
        game::GameConfig::new((self.rows, self.cols), self.difficulty, self.cell_size)
            .unwrap_or_else(|err| {
                log::error!("invalid game config, using defaults: {}", err);
                game::GameConfig::default()
            })
    }

    pub(crate) fn key_bindings(&self) -> game::KeyBindings {
        game::KeyBindings {
            up: self.key_up.clone(),
            down: self.key_down.clone(),
            left: self.key_left.clone(),
            right: self.key_right.clone(),
            return_to_start: self.key_start.clone(),
            reset: self.key_reset.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Input(game::Input),
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    canvas: NodeRef,
    _keydown_listener: EventListener,
}

impl GameView {
    fn create_keydown_listener(ctx: &Context<Self>, keys: game::KeyBindings) -> EventListener {
        let link = ctx.link().clone();
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&gloo::utils::document(), "keydown", options, move |e| {
            let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = e.key();
            match keys.resolve(&key) {
                Some(input) => {
                    e.prevent_default();
                    link.send_message(Msg::Input(input));
                }
                None => log::trace!("unbound key: {:?}", key),
            }
        })
    }

    fn draw(&self) {
        let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() else {
            log::error!("canvas is not mounted");
            return;
        };

        match CanvasRenderer::new(&canvas) {
            Some(mut renderer) => self.session.render(&mut renderer),
            None => log::error!("could not get a 2d context from the canvas"),
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let session = game::GameSession::new(props.config(), game::RandomWalkGenerator::new(seed));
        log::debug!("route: {:?}", session.path().cells());

        Self {
            session,
            canvas: NodeRef::default(),
            _keydown_listener: GameView::create_keydown_listener(ctx, props.key_bindings()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(input) => {
                let outcome = self.session.handle_input(input, &mut BrowserDialogs);
                if outcome.is_finish() {
                    log::debug!("new route: {:?}", self.session.path().cells());
                }
            }
        }

        // every input ends with a full redraw
        self.draw();
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let (width, height) = self.session.config().canvas_size();

        html! {
            <div class="trailmark">
                <canvas ref={self.canvas.clone()} width={width.to_string()} height={height.to_string()}/>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(rows: game::Coord, cols: game::Coord, difficulty: u8) -> GameProps {
        GameProps {
            seed: None,
            rows,
            cols,
            difficulty,
            cell_size: 40,
            key_up: "w".to_string(),
            key_down: "s".to_string(),
            key_left: "a".to_string(),
            key_right: "d".to_string(),
            key_start: "h".to_string(),
            key_reset: "r".to_string(),
        }
    }

    #[test]
    fn props_build_key_bindings() {
        let keys = props(7, 7, 1).key_bindings();

        assert_eq!(keys.resolve("w"), Some(game::Input::Move(game::Direction::Up)));
        assert_eq!(keys.resolve("s"), Some(game::Input::Move(game::Direction::Down)));
        assert_eq!(keys.resolve("h"), Some(game::Input::ReturnToStart));
    }

    #[test]
    fn props_build_config() {
        let config = props(5, 6, 1).config();

        assert_eq!(config.size, (5, 6));
        assert_eq!(config.canvas_size(), (240, 200));
    }

    #[test]
    fn zero_difficulty_falls_back_to_default() {
        assert_eq!(props(7, 7, 0).config(), game::GameConfig::default());
    }

    #[test]
    fn oversized_cells_fall_back_to_default() {
        let props = GameProps {
            cell_size: u32::MAX,
            ..props(7, 7, 1)
        };
        assert_eq!(props.config(), game::GameConfig::default());
    }
}
