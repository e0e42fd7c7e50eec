//! Page-supplied configuration for the particle field.

use serde::Deserialize;

/// Optional overrides read from a `<script id="field-config">` JSON element.
/// Every field is optional; an absent element means all defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FieldConfig {
	/// Fixed particle count, clamped to the field's count bounds.
	pub particle_count: Option<usize>,
	/// Spawn palette as six-digit hex strings (e.g. `"#06b6d4"`).
	pub palette: Option<Vec<String>>,
	/// Seed for the particle random source. Defaults to the current time,
	/// so set this to make the field layout reproducible.
	pub seed: Option<u64>,
}
