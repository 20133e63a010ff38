use trailmark_core as game;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const GRID_LINE: &str = "black";
const HIDDEN_FILL: &str = "white";
const REVEALED_FILL: &str = "yellow";
const PLAYER_FILL: &str = "blue";

/// Draws the grid and player as filled squares on a `<canvas>`, one pixel inside each cell border.
pub(crate) struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub(crate) fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            context,
            width: canvas.width().into(),
            height: canvas.height().into(),
        })
    }

    fn fill_inset(&self, (x, y): game::Pixel2, cell_size: u32, style: &str) {
        let size = f64::from(cell_size);
        self.context.set_fill_style_str(style);
        self.context
            .fill_rect(f64::from(x) + 1., f64::from(y) + 1., size - 2., size - 2.);
    }
}

impl game::Renderer for CanvasRenderer {
    fn draw_grid(&mut self, cells: &[game::Cell], cell_size: u32) {
        let size = f64::from(cell_size);
        self.context.clear_rect(0., 0., self.width, self.height);
        self.context.set_stroke_style_str(GRID_LINE);

        for cell in cells {
            let (x, y) = cell.origin(cell_size);
            self.context
                .stroke_rect(f64::from(x), f64::from(y), size, size);

            let fill = match cell.state {
                game::CellState::Hidden => HIDDEN_FILL,
                game::CellState::Revealed => REVEALED_FILL,
            };
            self.fill_inset((x, y), cell_size, fill);
        }
    }

    fn draw_player(&mut self, position: game::Pixel2, cell_size: u32) {
        self.fill_inset(position, cell_size, PLAYER_FILL);
    }
}
