use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub mod animation;
pub mod config;
pub mod error;
pub mod growth;
pub mod logging;
pub mod math;
pub mod render;
pub mod session;

pub use animation::RevealAnimation;
pub use config::{ParamSampler, Range, ScreensaverConfig};
pub use error::TreeError;
pub use growth::{Branch, Children, FractalTree, GrowthParams, TreeGrowth};
pub use render::{LineCanvas, LineSegment, RecordingCanvas};
pub use session::GrowthSession;

use render::Canvas2dBackend;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init_logging(log::LevelFilter::Info) {
        web_sys::console::warn_1(&JsValue::from(e));
    }
}

/// Screensaver state exposed to JavaScript.
///
/// The page owns the frame loop: call `frame()` every
/// `frame_interval_ms()`, and once it returns `true` wait
/// `pause_between_runs_ms()` before calling `begin_run()`.
#[wasm_bindgen]
pub struct FractalTreeScreensaver {
    session: GrowthSession<Canvas2dBackend>,
}

#[wasm_bindgen]
impl FractalTreeScreensaver {
    /// Create a screensaver drawing into `canvas` with the default config
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FractalTreeScreensaver, JsValue> {
        let backend = Canvas2dBackend::new(&canvas)?;
        let (width, height) = (backend.width(), backend.height());
        let seed = js_sys::Date::now() as u64;

        Ok(Self {
            session: GrowthSession::new(backend, width, height, ScreensaverConfig::default(), seed),
        })
    }

    /// Replace the config from a YAML document; applies from the next run
    #[wasm_bindgen]
    pub fn load_config(&mut self, yaml: &str) -> Result<(), JsValue> {
        let config = ScreensaverConfig::from_yaml(yaml)?;
        log::set_max_level(config.level_filter()?);
        self.session.set_config(config);
        Ok(())
    }

    /// Discard the current tree and grow a new one
    #[wasm_bindgen]
    pub fn begin_run(&mut self) -> Result<(), JsValue> {
        self.session.begin_run()?;
        Ok(())
    }

    /// Draw one animation frame; returns whether the tree is fully revealed
    #[wasm_bindgen]
    pub fn frame(&mut self) -> Result<bool, JsValue> {
        self.session.frame().map_err(|e| {
            log::error!("{}", e);
            JsValue::from(e)
        })
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.canvas_mut().set_size(width, height);
        self.session.set_surface_size(width, height);
    }

    #[wasm_bindgen]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[wasm_bindgen]
    pub fn reveal_level(&self) -> u32 {
        self.session.reveal_level()
    }

    #[wasm_bindgen]
    pub fn frame_interval_ms(&self) -> u32 {
        self.session.config().frame_interval_ms
    }

    #[wasm_bindgen]
    pub fn pause_between_runs_ms(&self) -> u32 {
        self.session.config().pause_between_runs_ms
    }
}
