use std::time::Duration;

use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use cubelab_sequencer_core::{
    plan_visible_nodes, ControlSurface, NodeLayout, SequencerCommand, SequencerConfig,
    StepSequencer,
};

/// Step sequencer for a JS host. The host drives autoplay by calling
/// `tick(dtMs)` from its own frame loop.
#[wasm_bindgen]
pub struct CubelabSequencer {
    /// `None` once disposed.
    core: Option<StepSequencer>,
    layout: NodeLayout,
    on_change: Option<Function>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js<T: Serialize>(what: &str, value: &T) -> Result<JsValue, JsError> {
    swb::to_value(value).map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

impl CubelabSequencer {
    /// Run a mutation and notify the change callback if it changed anything.
    fn mutate(&mut self, f: impl FnOnce(&mut StepSequencer) -> bool) -> bool {
        let Some(core) = self.core.as_mut() else {
            return false;
        };
        let changed = f(core);
        if changed {
            self.notify();
        }
        changed
    }

    fn notify(&self) {
        let (Some(cb), Some(core)) = (self.on_change.as_ref(), self.core.as_ref()) else {
            return;
        };
        let state = swb::to_value(&core.state()).unwrap_or(JsValue::NULL);
        // A throwing callback must not poison the sequencer.
        let _ = cb.call1(&JsValue::UNDEFINED, &state);
    }
}

#[wasm_bindgen]
impl CubelabSequencer {
    /// Create a sequencer. Pass a config object or undefined/null for defaults.
    /// Example:
    ///   new CubelabSequencer({ autoplay_interval_ms: 250 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CubelabSequencer, JsError> {
        console_error_panic_hook::set_once();

        let cfg: SequencerConfig = if jsvalue_is_undefined_or_null(&config) {
            SequencerConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let core = StepSequencer::new(&cfg).map_err(|e| JsError::new(&format!("config error: {e}")))?;

        Ok(CubelabSequencer {
            core: Some(core),
            layout: cfg.layout(),
            on_change: None,
        })
    }

    pub fn advance(&mut self) -> bool {
        self.mutate(StepSequencer::advance)
    }

    pub fn retreat(&mut self) -> bool {
        self.mutate(StepSequencer::retreat)
    }

    pub fn reset(&mut self) -> bool {
        self.mutate(StepSequencer::reset)
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) -> bool {
        self.mutate(StepSequencer::toggle_play)
    }

    /// Apply a named command: "previous", "next", "toggle", "play", "pause" or "reset".
    pub fn apply(&mut self, command: &str) -> Result<bool, JsError> {
        let cmd: SequencerCommand = command
            .parse()
            .map_err(|e| JsError::new(&format!("apply error: {e}")))?;
        Ok(self.mutate(|core| core.apply(cmd)))
    }

    /// Feed elapsed milliseconds into autoplay. Returns the number of steps taken.
    /// Zero, negative or non-finite values are ignored. Values too large for
    /// a `Duration` saturate, which runs autoplay to the last step.
    pub fn tick(&mut self, dt_ms: f64) -> u32 {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return 0;
        }
        let dt = Duration::try_from_secs_f64(dt_ms / 1000.0).unwrap_or(Duration::MAX);
        let mut advanced = 0;
        self.mutate(|core| {
            advanced = core.tick(dt);
            advanced > 0
        });
        advanced
    }

    /// `{ current_index, is_playing }`, or undefined after dispose.
    pub fn state(&self) -> Result<JsValue, JsError> {
        match self.core.as_ref() {
            Some(core) => to_js("state", &core.state()),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Control panel view-model: step text, button enablement, play label and coordinate.
    pub fn controls(&self) -> Result<JsValue, JsError> {
        match self.core.as_ref() {
            Some(core) => to_js("controls", &ControlSurface::from_sequencer(core)),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// The cubes and labels that should be visible for the current step.
    #[wasm_bindgen(js_name = visibleNodes)]
    pub fn visible_nodes(&self) -> Result<JsValue, JsError> {
        match self.core.as_ref() {
            Some(core) => to_js(
                "visibleNodes",
                &plan_visible_nodes(core.coordinates(), core.current_index(), &self.layout),
            ),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// All 27 coordinates in step order.
    pub fn coordinates(&self) -> Result<JsValue, JsError> {
        match self.core.as_ref() {
            Some(core) => to_js("coordinates", &core.coordinates()),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Events emitted since the last call, oldest first.
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsError> {
        match self.core.as_mut() {
            Some(core) => to_js("events", &core.drain_events()),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Register `fn(state)` called after every change. Pass null/undefined to clear.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: JsValue) -> Result<(), JsError> {
        if jsvalue_is_undefined_or_null(&callback) {
            self.on_change = None;
            return Ok(());
        }
        let f: Function = callback
            .dyn_into()
            .map_err(|_| JsError::new("setOnChange: expected a function"))?;
        if self.core.is_some() {
            self.on_change = Some(f);
        }
        Ok(())
    }

    /// Stop playback and release the sequencer and callback. Later calls are no-ops.
    pub fn dispose(&mut self) {
        if let Some(core) = self.core.as_mut() {
            core.set_playing(false);
        }
        self.core = None;
        self.on_change = None;
    }

    #[wasm_bindgen(getter, js_name = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.core.is_none()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
