//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use hero_particle_field::ParticleHero;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    container.style().set_property("width", "320px").unwrap();
    container.style().set_property("height", "180px").unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    container.append_child(&canvas).unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    canvas
}

// Resolves after `ms` milliseconds, long enough for layout, resize
// observers and a few animation frames to run.
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn container_of(canvas: &HtmlCanvasElement) -> HtmlElement {
    canvas
        .parent_element()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn mount_sizes_backing_buffer() {
    let canvas = add_canvas("hero-mount");
    let hero = ParticleHero::mount("hero-mount", None).unwrap();
    assert_eq!(hero.particle_count(), 50);
    assert!(!hero.is_running());

    let ratio = web_sys::window().unwrap().device_pixel_ratio();
    assert_eq!(canvas.width(), (320.0 * ratio).round() as u32);
}

#[wasm_bindgen_test]
fn mount_honours_count() {
    add_canvas("hero-count");
    let hero = ParticleHero::mount("hero-count", Some(7)).unwrap();
    assert_eq!(hero.particle_count(), 7);
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    let err = ParticleHero::mount("no-such-canvas", None).err().unwrap();
    assert_eq!(err.as_string().unwrap(), "canvas 'no-such-canvas' not found");
}

#[wasm_bindgen_test]
fn stop_is_idempotent_and_final() {
    add_canvas("hero-stop");
    let mut hero = ParticleHero::mount("hero-stop", None).unwrap();
    hero.start().unwrap();
    assert!(hero.is_running());
    hero.stop();
    hero.stop();
    assert!(!hero.is_running());
    hero.start().unwrap();
    assert!(!hero.is_running());
    assert_eq!(hero.frame_count(), 0.0);
}

#[wasm_bindgen_test]
fn manual_resize_refits_canvas() {
    let canvas = add_canvas("hero-resize");
    let mut hero = ParticleHero::mount("hero-resize", None).unwrap();
    hero.resize(100.0, 40.0).unwrap();
    let ratio = web_sys::window().unwrap().device_pixel_ratio();
    assert_eq!(canvas.height(), (40.0 * ratio).round() as u32);
}

#[wasm_bindgen_test]
async fn container_resize_follows_until_stopped() {
    let canvas = add_canvas("hero-observe");
    let container = container_of(&canvas);
    let ratio = web_sys::window().unwrap().device_pixel_ratio();
    let mut hero = ParticleHero::mount("hero-observe", None).unwrap();
    hero.start().unwrap();

    container.style().set_property("width", "200px").unwrap();
    sleep(100).await;
    assert_eq!(canvas.width(), (200.0 * ratio).round() as u32);

    hero.stop();
    let frames = hero.frame_count();
    container.style().set_property("width", "120px").unwrap();
    sleep(100).await;
    assert_eq!(canvas.width(), (200.0 * ratio).round() as u32);
    assert_eq!(hero.frame_count(), frames);
}
