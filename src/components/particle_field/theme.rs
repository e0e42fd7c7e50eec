//! Colors and visual configuration for the particle field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parse a six-digit hex string, with or without a leading `#`.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let hex = hex.strip_prefix('#').unwrap_or(hex);
		if hex.len() != 6 || !hex.is_ascii() {
			return None;
		}
		let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
		let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
		let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
		Some(Self::rgb(r, g, b))
	}

	/// CSS `rgba(r,g,b,a)` notation.
	pub fn to_rgba_string(self) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}

/// Convert a six-digit hex color plus a runtime alpha to CSS `rgba()`
/// notation. Unparseable input falls back to mid gray.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
	Color::from_hex(hex)
		.unwrap_or(Color::rgb(128, 128, 128))
		.with_alpha(alpha)
		.to_rgba_string()
}

/// Visual configuration for the field: the spawn palette and the translucent
/// trail wash painted over the canvas each frame.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Colors particles are spawned with, picked uniformly.
	pub palette: Vec<Color>,
	/// Overlay color for the fading-trail effect.
	pub trail: Color,
}

impl FieldTheme {
	/// Cyan, violet and amber glows over a near-black navy wash.
	pub fn default_theme() -> Self {
		Self {
			palette: vec![
				Color::rgb(0x06, 0xb6, 0xd4), // cyan
				Color::rgb(0x8b, 0x5c, 0xf6), // violet
				Color::rgb(0xfa, 0xcc, 0x15), // amber
			],
			trail: Color::rgba(6, 10, 20, 0.12),
		}
	}

	/// Theme with the palette replaced by parsed hex entries. Entries that
	/// fail to parse are skipped; if none survive, the default palette stays.
	pub fn with_palette(hex: &[String]) -> Self {
		let palette: Vec<Color> = hex.iter().filter_map(|h| Color::from_hex(h)).collect();
		let mut theme = Self::default_theme();
		if !palette.is_empty() {
			theme.palette = palette;
		}
		theme
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_to_rgba_formats_compactly() {
		assert_eq!(hex_to_rgba("#06b6d4", 0.5), "rgba(6,182,212,0.5)");
	}

	#[test]
	fn hex_to_rgba_accepts_bare_digits() {
		assert_eq!(hex_to_rgba("facc15", 1.0), "rgba(250,204,21,1)");
	}

	#[test]
	fn hex_to_rgba_zero_alpha() {
		assert_eq!(hex_to_rgba("#06b6d4", 0.0), "rgba(6,182,212,0)");
	}

	#[test]
	fn bad_hex_falls_back_to_gray() {
		assert_eq!(hex_to_rgba("#nothex", 0.2), "rgba(128,128,128,0.2)");
		assert_eq!(hex_to_rgba("#fff", 0.2), "rgba(128,128,128,0.2)");
	}

	#[test]
	fn from_hex_rejects_invalid_input() {
		assert_eq!(Color::from_hex("#06b6d4"), Some(Color::rgb(6, 182, 212)));
		assert_eq!(Color::from_hex("06b6d4"), Some(Color::rgb(6, 182, 212)));
		assert_eq!(Color::from_hex("#06b6d"), None);
		assert_eq!(Color::from_hex("#06b6d4ff"), None);
		assert_eq!(Color::from_hex("#06b6dé"), None);
	}

	#[test]
	fn custom_palette_skips_unparseable_entries() {
		let theme =
			FieldTheme::with_palette(&["#ff0000".to_string(), "oops".to_string()]);
		assert_eq!(theme.palette, vec![Color::rgb(255, 0, 0)]);

		let fallback = FieldTheme::with_palette(&["oops".to_string()]);
		assert_eq!(fallback.palette, FieldTheme::default_theme().palette);
	}
}
