//! Small page-interaction helpers around the particle background.
//!
//! Scroll-triggered section reveal, the theme toggle, the play-button pulse,
//! and the footer year. Each helper silently does nothing when its target
//! element is missing from the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Portion of a section that must be visible before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.12;
/// Duration of the play-button pulse animation.
const PULSE_DURATION_MS: f64 = 700.0;
/// Scale keyframes for the play-button pulse.
const PULSE_KEYFRAMES: &str =
	r#"[{"transform":"scale(1)"},{"transform":"scale(1.08)"},{"transform":"scale(1)"}]"#;

fn query(selector: &str) -> Option<Element> {
	web_sys::window()?.document()?.query_selector(selector).ok()?
}

/// Observe every `.section` element and add the `visible` class once it
/// scrolls into view. The observer lives for the rest of the page.
pub fn observe_sections() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let Ok(sections) = document.query_selector_all(".section") else {
		return;
	};
	if sections.length() == 0 {
		return;
	}

	let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
		for entry in entries.iter() {
			let entry: IntersectionObserverEntry = entry.unchecked_into();
			if entry.is_intersecting() {
				let _ = entry.target().class_list().add_1("visible");
			}
		}
	});

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
	let Ok(observer) =
		IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
	else {
		return;
	};
	for i in 0..sections.length() {
		if let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			observer.observe(&section);
		}
	}

	// The callback must outlive this function for the observer to keep firing.
	on_intersect.forget();
}

/// Toggle the `dark` class on `<body>`.
pub fn toggle_theme() {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	let _ = body.class_list().toggle("dark");
}

/// Play a one-shot scale pulse on the first `.glow` element.
pub fn pulse_glow() {
	let Some(el) = query(".glow") else {
		return;
	};
	let Ok(frames) = js_sys::JSON::parse(PULSE_KEYFRAMES) else {
		return;
	};
	let _ = el.animate_with_f64(Some(frames.unchecked_ref()), PULSE_DURATION_MS);
}

/// Current year for the footer stamp.
pub fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}
