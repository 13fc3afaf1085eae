// JS-facing hero visual. Mounts a ParticleField on a <canvas>, drives it
// with requestAnimationFrame and follows the canvas container's size with a
// ResizeObserver. Both are released on stop().

use crate::config::FieldConfig;
use crate::error::HeroError;
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::renderer::CanvasRenderer;
use crate::surface::Surface;
use crate::utils::{self, Timer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, ResizeObserver, ResizeObserverEntry, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Scene {
    field: ParticleField,
    renderer: CanvasRenderer,
    frame_loop: FrameLoop<i32>,
    profiling: bool,
}

impl Scene {
    fn resize(&mut self, surface: Surface, device_pixel_ratio: f64) -> Result<(), HeroError> {
        self.field.resize(surface.width, surface.height);
        self.renderer.fit(surface, device_pixel_ratio)
    }

    fn frame(&mut self) {
        let _timer = if self.profiling {
            Some(Timer::new("ParticleHero::frame"))
        } else {
            None
        };
        let Scene { field, renderer, .. } = self;
        if let Err(e) = field.frame(renderer) {
            utils::log_error("particle hero: draw failed", &e);
        }
    }
}

#[wasm_bindgen]
pub struct ParticleHero {
    window: Window,
    container: Element,
    scene: Rc<RefCell<Scene>>,
    on_frame: FrameCallback,
    resize_observer: Option<(ResizeObserver, Closure<dyn FnMut(js_sys::Array)>)>,
}

#[wasm_bindgen]
impl ParticleHero {
    /// Mounts on the canvas with id `canvas_id`, sized to its parent element.
    /// Fails when the page has no such canvas or it has no 2d context.
    pub fn mount(canvas_id: &str, count: Option<u32>) -> Result<ParticleHero, JsValue> {
        utils::set_panic_hook();

        let window = web_sys::window().ok_or(HeroError::NoWindow)?;
        let document = window.document().ok_or(HeroError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| HeroError::CanvasNotFound(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| HeroError::NotACanvas(canvas_id.to_owned()))?;
        let container = match canvas.parent_element() {
            Some(parent) => parent,
            None => canvas.clone().into(),
        };

        let surface = layout_surface(&container);
        let count = count.map_or(FieldConfig::DEFAULT_COUNT, |n| n as usize);
        let config = FieldConfig::default().with_count(count);
        let field = ParticleField::with_rng(surface, config, &mut rand::thread_rng());

        let mut renderer = CanvasRenderer::new(canvas)?;
        renderer.fit(surface, window.device_pixel_ratio())?;

        log!(
            "particle hero: {} particles on {}x{} (dpr {})",
            field.len(),
            surface.width,
            surface.height,
            renderer.device_pixel_ratio()
        );

        Ok(ParticleHero {
            window,
            container,
            scene: Rc::new(RefCell::new(Scene {
                field,
                renderer,
                frame_loop: FrameLoop::new(),
                profiling: false,
            })),
            on_frame: Rc::new(RefCell::new(None)),
            resize_observer: None,
        })
    }

    /// Starts the frame loop and the resize subscription. On failure the
    /// hero is left idle with nothing registered, so `start` may be retried.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if !self.scene.borrow_mut().frame_loop.start() {
            return Ok(());
        }
        if let Err(e) = self.launch() {
            let pending = self.scene.borrow_mut().frame_loop.abort_start();
            if let Some(handle) = pending {
                let _ = self.window.cancel_animation_frame(handle);
            }
            self.release_callbacks();
            return Err(e);
        }
        Ok(())
    }

    /// Cancels the pending frame and drops the resize subscription. Safe to
    /// call more than once; a stopped hero cannot be restarted.
    pub fn stop(&mut self) {
        let (pending, frames, was_running) = {
            let mut scene = self.scene.borrow_mut();
            let was_running = scene.frame_loop.is_running();
            let pending = scene.frame_loop.stop();
            (pending, scene.frame_loop.frames(), was_running)
        };
        if let Some(handle) = pending {
            if let Err(e) = self.window.cancel_animation_frame(handle) {
                utils::log_error("particle hero: could not cancel frame", &e);
            }
        }
        self.release_callbacks();

        if was_running {
            log!("particle hero: stopped after {} frames", frames);
        }
    }

    pub fn resize(&mut self, css_width: f64, css_height: f64) -> Result<(), JsValue> {
        let surface = Surface::from_css(css_width, css_height);
        self.scene
            .borrow_mut()
            .resize(surface, self.window.device_pixel_ratio())?;
        Ok(())
    }

    pub fn particle_count(&self) -> u32 {
        self.scene.borrow().field.len() as u32
    }

    pub fn frame_count(&self) -> f64 {
        self.scene.borrow().frame_loop.frames() as f64
    }

    pub fn is_running(&self) -> bool {
        self.scene.borrow().frame_loop.is_running()
    }

    /// Wraps every frame in console.time / console.timeEnd.
    pub fn set_profiling(&mut self, enabled: bool) {
        self.scene.borrow_mut().profiling = enabled;
    }
}

impl ParticleHero {
    fn launch(&mut self) -> Result<(), JsValue> {
        self.observe_resizes()?;

        let scene = self.scene.clone();
        let window = self.window.clone();
        let on_frame = self.on_frame.clone();
        *self.on_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut scene = scene.borrow_mut();
            if !scene.frame_loop.begin_frame() {
                return;
            }
            scene.frame();
            match request_frame(&window, &on_frame) {
                Ok(handle) => {
                    if let Some(stale) = scene.frame_loop.scheduled(handle) {
                        let _ = window.cancel_animation_frame(stale);
                    }
                }
                Err(e) => utils::log_error("particle hero: could not request frame", &e),
            }
        }) as Box<dyn FnMut()>));

        let handle = request_frame(&self.window, &self.on_frame)?;
        if let Some(stale) = self.scene.borrow_mut().frame_loop.scheduled(handle) {
            self.window.cancel_animation_frame(stale)?;
        }
        Ok(())
    }

    fn release_callbacks(&mut self) {
        if let Some((observer, _callback)) = self.resize_observer.take() {
            observer.disconnect();
        }
        // breaks the closure <-> cell cycle
        self.on_frame.borrow_mut().take();
    }

    fn observe_resizes(&mut self) -> Result<(), JsValue> {
        let scene = self.scene.clone();
        let window = self.window.clone();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            // only the latest size matters
            let entry = match entries.iter().last() {
                Some(entry) => entry,
                None => return,
            };
            let entry = match entry.dyn_into::<ResizeObserverEntry>() {
                Ok(entry) => entry,
                Err(_) => return,
            };
            let rect = entry.content_rect();
            let surface = Surface::from_css(rect.width(), rect.height());
            let result = scene
                .borrow_mut()
                .resize(surface, window.device_pixel_ratio());
            if let Err(e) = result {
                utils::log_error("particle hero: resize failed", &JsValue::from(e));
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(&self.container);
        self.resize_observer = Some((observer, callback));
        Ok(())
    }
}

impl Drop for ParticleHero {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &Window, on_frame: &FrameCallback) -> Result<i32, JsValue> {
    match on_frame.borrow().as_ref() {
        Some(callback) => window.request_animation_frame(callback.as_ref().unchecked_ref()),
        None => Err(JsValue::from_str("frame callback already released")),
    }
}

fn layout_surface(container: &Element) -> Surface {
    Surface::from_css(container.client_width() as f64, container.client_height() as f64)
}
