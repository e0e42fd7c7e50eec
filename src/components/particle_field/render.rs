//! Canvas rendering for the particle field.
//!
//! Each frame clears the surface, lays a translucent wash over it, then draws
//! every particle as a radial-gradient glow disc. The wash instead of a hard
//! clear is what leaves the fading motion trails: a full clear would lose
//! them, and skipping the clear would accumulate an opaque surface.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::FieldTheme;

/// Gradient falloff radius, as a multiple of particle size.
const GLOW_RADIUS: f64 = 6.0;
/// Filled disc radius, as a multiple of particle size.
const DISC_RADIUS: f64 = 3.0;

/// Draws the whole field for one frame. Particle order only affects the
/// z-order of overlapping glows.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);
	ctx.set_fill_style_str(&theme.trail.to_rgba_string());
	ctx.fill_rect(0.0, 0.0, field.width, field.height);

	for p in &field.particles {
		let gradient = ctx
			.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, p.size * GLOW_RADIUS)
			.unwrap();
		gradient
			.add_color_stop(0.0, &p.color.with_alpha(p.alpha).to_rgba_string())
			.unwrap();
		gradient
			.add_color_stop(1.0, &p.color.with_alpha(0.0).to_rgba_string())
			.unwrap();

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size * DISC_RADIUS, 0.0, PI * 2.0);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	}
}
