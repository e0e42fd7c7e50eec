//! Pointer-reactive particle simulation.
//!
//! Owns the particle collection and advances it one step per animation frame:
//! each particle accelerates toward the pointer inside a fixed attraction
//! radius, picks up a little jitter, decays its velocity, and wraps around
//! the viewport edges. Particles never interact with each other, only with
//! the shared pointer target, so update order has no effect on motion.

use super::rng::FieldRng;
use super::theme::{Color, FieldTheme};

/// Lower bound on the particle count at any viewport size.
pub const MIN_COUNT: usize = 24;
/// Upper bound applied when the field is first created.
pub const INITIAL_MAX_COUNT: usize = 80;
/// Upper bound applied when retargeting after a resize.
pub const RESIZE_MAX_COUNT: usize = 120;

/// One particle per this many logical pixels of viewport width.
const COUNT_DIVISOR: f64 = 12.0;
/// Distance beyond which the pointer exerts no pull.
const ATTRACT_RADIUS: f64 = 180.0;
/// Acceleration toward the pointer at full attraction.
const ATTRACT_STRENGTH: f64 = 0.06;
/// Per-axis random acceleration added every step.
const JITTER: f64 = 0.01;
/// Multiplicative velocity decay, applied every step.
const DAMPING: f64 = 0.96;
/// Particles wrap once they stray this far past an edge.
const WRAP_MARGIN: f64 = 40.0;

/// A single glowing particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub color: Color,
	pub alpha: f64,
}

/// Particle count for the given viewport width at first load.
pub fn initial_count(width: f64) -> usize {
	target_count(width, INITIAL_MAX_COUNT)
}

/// Particle count for the given viewport width after a resize.
pub fn resize_count(width: f64) -> usize {
	target_count(width, RESIZE_MAX_COUNT)
}

fn target_count(width: f64, max: usize) -> usize {
	((width / COUNT_DIVISOR).floor() as usize).clamp(MIN_COUNT, max)
}

/// Pointer pull strength in `[0, 1]`, fading linearly from full strength at
/// zero distance to nothing at the attraction radius.
pub fn attraction(dist: f64) -> f64 {
	(ATTRACT_RADIUS - dist).max(0.0) / ATTRACT_RADIUS
}

/// The particle collection plus the shared state it reacts to: viewport
/// bounds and the last-known pointer position.
///
/// Created once when the canvas component mounts, then mutated each frame by
/// the animation loop. `step` only moves particles; drawing lives in the
/// render module.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	pub running: bool,
	pointer_x: f64,
	pointer_y: f64,
	palette: Vec<Color>,
	rng: FieldRng,
}

impl ParticleField {
	/// Spawn `count` randomized particles over a `width` x `height` viewport.
	/// The pointer starts at the viewport center until an event moves it.
	pub fn new(theme: &FieldTheme, width: f64, height: f64, count: usize, rng: FieldRng) -> Self {
		let mut field = Self {
			particles: Vec::with_capacity(count),
			width,
			height,
			running: true,
			pointer_x: width / 2.0,
			pointer_y: height / 2.0,
			palette: theme.palette.clone(),
			rng,
		};
		field.retarget(count);
		field
	}

	/// Record the latest pointer position in logical pixels.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer_x = x;
		self.pointer_y = y;
	}

	/// Update the viewport bounds particles wrap against.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Grow or shrink the collection to exactly `count` particles. New
	/// particles are appended randomized; excess ones are dropped from the
	/// tail, leaving the rest untouched.
	pub fn retarget(&mut self, count: usize) {
		while self.particles.len() < count {
			let particle = self.spawn();
			self.particles.push(particle);
		}
		self.particles.truncate(count);
	}

	fn spawn(&mut self) -> Particle {
		let rng = &mut self.rng;
		Particle {
			x: rng.next_f64() * self.width,
			y: rng.next_f64() * self.height,
			vx: rng.range(-0.3, 0.3),
			vy: rng.range(-0.3, 0.3),
			size: rng.range(2.0, 8.0),
			color: self.palette[rng.index(self.palette.len())],
			alpha: rng.range(0.3, 0.9),
		}
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self) {
		let (px, py) = (self.pointer_x, self.pointer_y);
		let (width, height) = (self.width, self.height);
		let rng = &mut self.rng;

		for p in &mut self.particles {
			let dx = px - p.x;
			let dy = py - p.y;
			// Floor the distance at 1 so the direction division is safe.
			let dist = (dx * dx + dy * dy).sqrt().max(1.0);
			let force = attraction(dist);

			p.vx += (dx / dist) * ATTRACT_STRENGTH * force + rng.range(-JITTER, JITTER);
			p.vy += (dy / dist) * ATTRACT_STRENGTH * force + rng.range(-JITTER, JITTER);

			p.vx *= DAMPING;
			p.vy *= DAMPING;

			p.x += p.vx;
			p.y += p.vy;

			if p.x < -WRAP_MARGIN {
				p.x = width + WRAP_MARGIN;
			}
			if p.x > width + WRAP_MARGIN {
				p.x = -WRAP_MARGIN;
			}
			if p.y < -WRAP_MARGIN {
				p.y = height + WRAP_MARGIN;
			}
			if p.y > height + WRAP_MARGIN {
				p.y = -WRAP_MARGIN;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_field(width: f64, height: f64, count: usize) -> ParticleField {
		ParticleField::new(&FieldTheme::default(), width, height, count, FieldRng::new(7))
	}

	#[test]
	fn count_targets_clamp_to_bounds() {
		assert_eq!(initial_count(0.0), 24);
		assert_eq!(initial_count(600.0), 50);
		assert_eq!(initial_count(5000.0), 80);
		assert_eq!(resize_count(100.0), 24);
		assert_eq!(resize_count(1200.0), 100);
		assert_eq!(resize_count(5000.0), 120);
	}

	#[test]
	fn attraction_fades_linearly_to_zero() {
		assert_eq!(attraction(0.0), 1.0);
		assert!((attraction(90.0) - 0.5).abs() < 1e-12);
		assert_eq!(attraction(180.0), 0.0);
		assert_eq!(attraction(300.0), 0.0);
	}

	#[test]
	fn spawned_particles_have_fields_in_range() {
		let palette = FieldTheme::default().palette;
		let field = test_field(640.0, 480.0, 80);
		assert_eq!(field.particles.len(), 80);
		for p in &field.particles {
			assert!((0.0..640.0).contains(&p.x));
			assert!((0.0..480.0).contains(&p.y));
			assert!((-0.3..0.3).contains(&p.vx));
			assert!((-0.3..0.3).contains(&p.vy));
			assert!((2.0..8.0).contains(&p.size));
			assert!((0.3..0.9).contains(&p.alpha));
			assert!(palette.contains(&p.color));
		}
	}

	#[test]
	fn positions_stay_within_wrap_margin() {
		let mut field = test_field(640.0, 480.0, 40);
		field.set_pointer(1000.0, -1000.0);
		for _ in 0..2000 {
			field.step();
		}
		for p in &field.particles {
			assert!((-40.0..=680.0).contains(&p.x), "x out of bounds: {}", p.x);
			assert!((-40.0..=520.0).contains(&p.y), "y out of bounds: {}", p.y);
		}
	}

	#[test]
	fn velocity_stays_bounded_under_fixed_pointer() {
		let mut field = test_field(800.0, 600.0, 32);
		field.set_pointer(400.0, 300.0);
		for _ in 0..10_000 {
			field.step();
		}
		// Damping caps the steady state well below this.
		for p in &field.particles {
			assert!(p.vx.abs() < 5.0, "vx diverged: {}", p.vx);
			assert!(p.vy.abs() < 5.0, "vy diverged: {}", p.vy);
		}
	}

	#[test]
	fn retarget_appends_and_truncates_from_tail() {
		let mut field = test_field(480.0, 360.0, 40);
		let before = field.particles.clone();

		field.retarget(80);
		assert_eq!(field.particles.len(), 80);
		assert_eq!(field.particles[..40], before[..]);
		for p in &field.particles[40..] {
			assert!((2.0..8.0).contains(&p.size));
			assert!((0.3..0.9).contains(&p.alpha));
		}

		field.retarget(40);
		assert_eq!(field.particles[..], before[..]);
	}

	#[test]
	fn zero_sized_field_steps_without_panic() {
		let mut field = test_field(0.0, 0.0, 24);
		assert_eq!(field.particles.len(), 24);
		field.set_pointer(0.0, 0.0);
		for _ in 0..10 {
			field.step();
		}
	}
}
