// Canvas backend and frame loop for the decorative forest scene.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use aq_predict::forest::{ForestScene, Painter};
use aq_predict::{AqError, Settings};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::dom;

struct CanvasPainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Painter for CanvasPainter {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.fill_rect(x, y, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.begin_path();
        if self.context.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.context.fill();
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<(), AqError> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map(|_| ())
        .map_err(dom::js_error)
}

pub fn init(document: &Document, settings: &Settings) -> Result<(), AqError> {
    let Some(canvas) = dom::optional_by_id::<HtmlCanvasElement>(document, &settings.elements.forest)?
    else {
        debug!(id = %settings.elements.forest, "no forest canvas on this page");
        return Ok(());
    };
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(dom::js_error)?
        .ok_or_else(|| AqError::Js("canvas has no 2d context".into()))?
        .dyn_into()
        .map_err(|_| AqError::Js("2d context has an unexpected type".into()))?;

    let mut rng = rand::thread_rng();
    let mut scene = ForestScene::new(&mut rng, settings.particle_spawn_probability);
    let mut painter = CanvasPainter { canvas, context };
    let window = dom::window()?;

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&frame);
    let loop_window = window.clone();
    *frame.borrow_mut() = Some(Closure::new(move || {
        scene.render_frame(&mut painter, &mut rng);
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_frame(&loop_window, callback) {
                warn!(error = %err, "forest animation stopped");
            }
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_frame(&window, callback)?;
    }
    debug!("forest animation started");
    Ok(())
}
