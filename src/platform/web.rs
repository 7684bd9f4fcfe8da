//! Browser host bridge
//!
//! Exposes the game loop to JavaScript. The page's render loop calls
//! `frame()` from `requestAnimationFrame`, reads `snapshot_json()` to draw,
//! and drains collision events to trigger its feedback pulse.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, PointerEvent, TouchEvent};

use super::FrameClock;
use crate::format_score;
use crate::settings::Settings;
use crate::sim::{GameLoop, GamePhase};

#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Chaos Catcher core loaded");
}

struct Host {
    game: GameLoop,
    clock: FrameClock,
}

/// JavaScript handle to one game session
#[wasm_bindgen]
pub struct WebGame {
    host: Rc<RefCell<Host>>,
}

#[wasm_bindgen]
impl WebGame {
    /// New session with default tuning for a field of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        Self::from_settings(Settings::with_field(width, height))
    }

    /// New session from a JSON settings blob
    pub fn with_settings(json: &str) -> Result<WebGame, JsValue> {
        let settings = Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_settings(settings))
    }

    pub fn start(&self) {
        self.host.borrow_mut().game.start();
    }

    pub fn pause(&self) {
        self.host.borrow_mut().game.pause();
    }

    pub fn resume(&self) {
        self.host.borrow_mut().game.resume();
    }

    pub fn toggle(&self) {
        self.host.borrow_mut().game.toggle();
    }

    /// Reset to idle and reseed from the wall clock
    pub fn reset(&self) {
        let mut host = self.host.borrow_mut();
        host.game.reset();
        host.game.reseed(js_sys::Date::now() as u64);
        host.clock.reset();
    }

    /// Pointer sample in field coordinates
    pub fn pointer_move(&self, x: f32, y: f32) {
        self.host.borrow_mut().game.pointer_move(x, y);
    }

    /// One frame callback; returns whether a tick ran
    pub fn frame(&self, time_ms: f64) -> bool {
        let mut host = self.host.borrow_mut();
        host.clock.record(time_ms);
        host.game.tick().ran
    }

    pub fn score(&self) -> f64 {
        self.host.borrow().game.score() as f64
    }

    pub fn score_text(&self) -> String {
        format_score(self.host.borrow().game.score())
    }

    pub fn phase(&self) -> String {
        match self.host.borrow().game.phase() {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
        }
        .to_string()
    }

    pub fn fps(&self) -> u32 {
        self.host.borrow().clock.fps()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.host.borrow().game.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn drain_events_json(&self) -> Result<String, JsValue> {
        let events = self.host.borrow_mut().game.drain_events();
        serde_json::to_string(&events).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Attach pointer and touch listeners to a canvas
    pub fn bind_pointer(&self, canvas_id: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", canvas_id)))?
            .dyn_into()?;

        let (width, height) = {
            let field = self.host.borrow().game.field();
            (field.width, field.height)
        };

        // Pointer (mouse + pen + touch on supporting browsers)
        {
            let host = self.host.clone();
            let target = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let (x, y) = to_field(&target, event.client_x(), event.client_y(), width, height);
                host.borrow_mut().game.pointer_move(x, y);
            });
            canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch drag
        {
            let host = self.host.clone();
            let target = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let (x, y) = to_field(&target, touch.client_x(), touch.client_y(), width, height);
                    host.borrow_mut().game.pointer_move(x, y);
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        log::info!("Pointer bound to #{}", canvas_id);
        Ok(())
    }
}

impl WebGame {
    fn from_settings(settings: Settings) -> WebGame {
        let seed = js_sys::Date::now() as u64;
        log::info!(
            "Session created: field {}x{}, seed {}",
            settings.field_width,
            settings.field_height,
            seed
        );
        WebGame {
            host: Rc::new(RefCell::new(Host {
                game: GameLoop::new(settings, seed),
                clock: FrameClock::new(),
            })),
        }
    }
}

/// Map client coordinates onto the field, scaling for CSS size
fn to_field(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32, width: f32, height: f32) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    // Zero-sized rects yield non-finite values, which the tracker clamps
    let x = (client_x as f64 - rect.left()) / rect.width() * width as f64;
    let y = (client_y as f64 - rect.top()) / rect.height() * height as f64;
    (x as f32, y as f32)
}
