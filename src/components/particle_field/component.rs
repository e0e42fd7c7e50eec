//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a fullscreen canvas sized in device pixels with a
//! CSS-pixel transform, tracks the pointer through window-level mouse/touch
//! listeners, and runs the simulation via a self-rescheduling
//! `requestAnimationFrame` loop. Window resizes re-derive the canvas size
//! immediately; the particle count is retargeted only after a 150ms quiet
//! period so a drag-resize does not churn the collection.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::field::{self, ParticleField};
use super::render;
use super::rng::FieldRng;
use super::theme::FieldTheme;
use super::types::FieldConfig;

/// Quiet period after the last resize event before the count is retargeted.
const RESIZE_DEBOUNCE_MS: i32 = 150;

/// Bundles the simulation with its visual configuration.
struct FieldContext {
	field: ParticleField,
	theme: FieldTheme,
}

/// Size the canvas backing store to the viewport in device pixels, keep its
/// CSS size in logical pixels, and scale the context so drawing commands use
/// logical coordinates. Returns the logical dimensions.
fn size_canvas(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	window: &Window,
) -> (f64, f64) {
	let dpr = window.device_pixel_ratio().max(1.0);
	let (w, h) = (
		window.inner_width().unwrap().as_f64().unwrap(),
		window.inner_height().unwrap().as_f64().unwrap(),
	);

	canvas.set_width((w * dpr).floor() as u32);
	canvas.set_height((h * dpr).floor() as u32);
	let style = web_sys::HtmlElement::style(&canvas);
	let _ = style.set_property("width", &format!("{w}px"));
	let _ = style.set_property("height", &format!("{h}px"));
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

	(w, h)
}

/// Renders the animated particle background on a fixed fullscreen canvas.
///
/// The canvas ignores pointer events itself; the pointer is tracked at the
/// window level so content layered above it keeps working.
#[component]
pub fn ParticleFieldCanvas(#[prop(into)] config: Signal<FieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let mouse_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let touch_cb: Rc<RefCell<Option<Closure<dyn FnMut(TouchEvent)>>>> =
		Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let retarget_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let debounce_timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (context_init, animate_init) = (context.clone(), animate.clone());
	let (mouse_cb_init, touch_cb_init) = (mouse_cb.clone(), touch_cb.clone());
	let (resize_cb_init, retarget_cb_init) = (resize_cb.clone(), retarget_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let (w, h) = size_canvas(&canvas, &ctx, &window);

		let cfg = config.get();
		let theme = cfg
			.palette
			.as_deref()
			.map(FieldTheme::with_palette)
			.unwrap_or_default();
		let seed = cfg.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
		let count = cfg
			.particle_count
			.map(|c| c.clamp(field::MIN_COUNT, field::RESIZE_MAX_COUNT))
			.unwrap_or_else(|| field::initial_count(w));

		*context_init.borrow_mut() = Some(FieldContext {
			field: ParticleField::new(&theme, w, h, count, FieldRng::new(seed)),
			theme,
		});

		let context_mm = context_init.clone();
		*mouse_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_mm.borrow_mut() {
				c.field.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *mouse_cb_init.borrow() {
			let _ = window
				.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let context_tm = context_init.clone();
		*touch_cb_init.borrow_mut() = Some(Closure::new(move |ev: TouchEvent| {
			let Some(touch) = ev.touches().get(0) else {
				return;
			};
			if let Some(ref mut c) = *context_tm.borrow_mut() {
				c.field
					.set_pointer(touch.client_x() as f64, touch.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *touch_cb_init.borrow() {
			let _ = window
				.add_event_listener_with_callback("touchmove", cb.as_ref().unchecked_ref());
		}

		let (context_rt, canvas_rt, ctx_rt) =
			(context_init.clone(), canvas.clone(), ctx.clone());
		*retarget_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = size_canvas(&canvas_rt, &ctx_rt, &win);
			if let Some(ref mut c) = *context_rt.borrow_mut() {
				c.field.retarget(field::resize_count(nw));
				c.field.resize(nw, nh);
			}
		}));

		let (context_rs, canvas_rs, ctx_rs) =
			(context_init.clone(), canvas.clone(), ctx.clone());
		let (timer_rs, retarget_rs) = (debounce_timer.clone(), retarget_cb_init.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = size_canvas(&canvas_rs, &ctx_rs, &win);
			if let Some(ref mut c) = *context_rs.borrow_mut() {
				c.field.resize(nw, nh);
			}

			if let Some(handle) = timer_rs.take() {
				win.clear_timeout_with_handle(handle);
			}
			if let Some(ref cb) = *retarget_rs.borrow() {
				if let Ok(handle) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					RESIZE_DEBOUNCE_MS,
				) {
					timer_rs.set(Some(handle));
				}
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				if c.field.running {
					c.field.step();
				}
				render::render(&c.field, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none;"
		/>
	}
}
