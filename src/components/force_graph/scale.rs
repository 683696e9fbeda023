//! Screen/world transform for zoom and pan. Never touches simulation coordinates.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// Allowed zoom factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomExtent {
	pub min: f64,
	pub max: f64,
}

impl ViewTransform {
	/// World origin at the viewport center, unscaled.
	pub fn centered(width: f64, height: f64) -> Self {
		Self {
			x: width / 2.0,
			y: height / 2.0,
			k: 1.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(gx * self.k + self.x, gy * self.k + self.y)
	}

	/// Scale by `factor` keeping the world point under `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64, extent: ZoomExtent) {
		let new_k = (self.k * factor).clamp(extent.min, extent.max);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}

	/// Offset `origin` by a screen-space drag.
	pub fn panned(origin: ViewTransform, dx: f64, dy: f64) -> Self {
		Self {
			x: origin.x + dx,
			y: origin.y + dy,
			k: origin.k,
		}
	}
}

/// Zoom step for one wheel notch.
pub fn wheel_factor(delta_y: f64) -> f64 {
	if delta_y > 0.0 { 0.9 } else { 1.1 }
}

#[cfg(test)]
mod tests {
	use super::*;

	const EXTENT: ZoomExtent = ZoomExtent { min: 0.2, max: 3.0 };

	#[test]
	fn zoom_keeps_pointer_anchor() {
		let mut t = ViewTransform::centered(800.0, 600.0);
		let before = t.screen_to_graph(120.0, 80.0);
		t.zoom_at(120.0, 80.0, wheel_factor(-1.0), EXTENT);
		let after = t.screen_to_graph(120.0, 80.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
		assert!((t.k - 1.1).abs() < 1e-12);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut t = ViewTransform::centered(800.0, 600.0);
		for _ in 0..100 {
			t.zoom_at(0.0, 0.0, wheel_factor(1.0), EXTENT);
		}
		assert_eq!(t.k, 0.2);
		for _ in 0..100 {
			t.zoom_at(0.0, 0.0, wheel_factor(-1.0), EXTENT);
		}
		assert_eq!(t.k, 3.0);
	}

	#[test]
	fn screen_and_graph_round_trip() {
		let t = ViewTransform {
			x: 30.0,
			y: -12.0,
			k: 2.5,
		};
		let (gx, gy) = t.screen_to_graph(410.0, 95.0);
		let (sx, sy) = t.graph_to_screen(gx, gy);
		assert!((sx - 410.0).abs() < 1e-9 && (sy - 95.0).abs() < 1e-9);
		assert_eq!(ViewTransform::panned(t, 5.0, 5.0).k, 2.5);
	}
}
