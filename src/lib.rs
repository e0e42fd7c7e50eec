//! glowfield: pointer-reactive particle background for a landing page.
//!
//! This crate provides a WASM canvas component that renders a field of
//! glowing particles drifting toward the pointer, plus the page's small
//! interaction helpers: scroll-triggered section reveal, a theme toggle, a
//! play-button pulse, and the footer year stamp.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldConfig, ParticleFieldCanvas, hex_to_rgba};

use components::page;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("glowfield: logging initialized");
}

/// Load field overrides from a script element with id="field-config".
/// Expected format: JSON with optional { particle_count, palette, seed }
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!("glowfield: loaded field config: {:?}", config);
			Some(config)
		}
		Err(e) => {
			warn!("glowfield: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the particle background behind the page content and wires up the
/// interaction helpers.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Overrides are optional; an absent or malformed element means defaults.
	let config = load_field_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	// Sections exist only after the view is mounted.
	Effect::new(move |_| {
		page::observe_sections();
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Glowfield" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas config=config_signal />
		<main class="page">
			<section class="section hero">
				<h1 class="glow">"Glowfield"</h1>
				<p class="subtitle">"A field of particles that follows your pointer."</p>
				<button id="play-btn" on:click=|_| page::pulse_glow()>
					"Play"
				</button>
				<button id="theme-toggle" on:click=|_| page::toggle_theme()>
					"Toggle theme"
				</button>
			</section>
			<section class="section">
				<h2>"About"</h2>
				<p>
					"Move the pointer across the page and the particles drift toward it, "
					"leaving fading trails behind."
				</p>
			</section>
			<footer class="section">
				<small>"© " <span id="year">{page::current_year()}</span></small>
			</footer>
		</main>
	}
}
