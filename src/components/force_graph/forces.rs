//! Position corrections applied after each `force_graph` step: edge rest
//! length, collision and centering. Fixed bodies are never moved.

/// Snapshot of one node's position for a correction pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub fixed: bool,
}

const EPSILON: f64 = 1e-6;

/// Pull or push linked bodies toward `distance` apart.
pub fn link(bodies: &mut [Body], links: &[(usize, usize)], distance: f64, strength: f64, alpha: f64) {
	for &(a, b) in links {
		if a == b || a >= bodies.len() || b >= bodies.len() {
			continue;
		}
		let (ba, bb) = (bodies[a], bodies[b]);
		let (share_a, share_b) = match (ba.fixed, bb.fixed) {
			(true, true) => continue,
			(true, false) => (0.0, 1.0),
			(false, true) => (1.0, 0.0),
			(false, false) => (0.5, 0.5),
		};
		let (dx, dy) = (bb.x - ba.x, bb.y - ba.y);
		let len = (dx * dx + dy * dy).sqrt().max(EPSILON);
		let l = (len - distance) / len * alpha * strength;
		let (mx, my) = (dx * l, dy * l);
		bodies[a].x += mx * share_a;
		bodies[a].y += my * share_a;
		bodies[b].x -= mx * share_b;
		bodies[b].y -= my * share_b;
	}
}

/// Separate overlapping bodies.
pub fn collide(bodies: &mut [Body], strength: f64) {
	for i in 0..bodies.len() {
		for j in (i + 1)..bodies.len() {
			let (bi, bj) = (bodies[i], bodies[j]);
			if bi.fixed && bj.fixed {
				continue;
			}
			let min = bi.radius + bj.radius;
			let (mut dx, mut dy) = (bj.x - bi.x, bj.y - bi.y);
			let mut dist = (dx * dx + dy * dy).sqrt();
			if dist >= min {
				continue;
			}
			if dist < EPSILON {
				// Coincident: separate along a direction derived from the pair.
				let angle = (i * 31 + j * 17) as f64;
				(dx, dy, dist) = (angle.cos(), angle.sin(), 1.0);
			}
			let push = (min - dist) / dist * strength;
			let (px, py) = (dx * push, dy * push);
			let (share_i, share_j) = match (bi.fixed, bj.fixed) {
				(true, _) => (0.0, 1.0),
				(_, true) => (1.0, 0.0),
				_ => (0.5, 0.5),
			};
			bodies[i].x -= px * share_i;
			bodies[i].y -= py * share_i;
			bodies[j].x += px * share_j;
			bodies[j].y += py * share_j;
		}
	}
}

/// Translate free bodies so their mean moves toward the origin.
pub fn center(bodies: &mut [Body], strength: f64) {
	let free = bodies.iter().filter(|b| !b.fixed).count();
	if free == 0 {
		return;
	}
	let (sx, sy) = bodies
		.iter()
		.filter(|b| !b.fixed)
		.fold((0.0, 0.0), |(sx, sy), b| (sx + b.x, sy + b.y));
	let (mx, my) = (sx / free as f64 * strength, sy / free as f64 * strength);
	for b in bodies.iter_mut().filter(|b| !b.fixed) {
		b.x -= mx;
		b.y -= my;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn body(x: f64, y: f64) -> Body {
		Body {
			x,
			y,
			radius: 10.0,
			fixed: false,
		}
	}

	fn distance(a: Body, b: Body) -> f64 {
		((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
	}

	#[test]
	fn link_moves_toward_rest_length() {
		let mut far = [body(0.0, 0.0), body(300.0, 0.0)];
		link(&mut far, &[(0, 1)], 100.0, 0.5, 1.0);
		assert!(distance(far[0], far[1]) < 300.0);
		assert!(distance(far[0], far[1]) > 100.0);

		let mut near = [body(0.0, 0.0), body(10.0, 0.0)];
		link(&mut near, &[(0, 1)], 100.0, 0.5, 1.0);
		assert!(distance(near[0], near[1]) > 10.0);
	}

	#[test]
	fn link_leaves_fixed_end_in_place() {
		let mut bodies = [
			Body {
				fixed: true,
				..body(0.0, 0.0)
			},
			body(300.0, 0.0),
		];
		link(&mut bodies, &[(0, 1)], 100.0, 1.0, 1.0);
		assert_eq!((bodies[0].x, bodies[0].y), (0.0, 0.0));
		assert!((bodies[1].x - 100.0).abs() < 1e-9);
	}

	#[test]
	fn collide_separates_overlaps() {
		let mut bodies = [body(0.0, 0.0), body(5.0, 0.0), body(5.0, 0.0)];
		for _ in 0..50 {
			collide(&mut bodies, 1.0);
		}
		for i in 0..bodies.len() {
			for j in (i + 1)..bodies.len() {
				assert!(distance(bodies[i], bodies[j]) >= 20.0 - 1e-6, "{i} {j}");
			}
		}
	}

	#[test]
	fn center_moves_mean_to_origin_and_skips_fixed() {
		let pinned = Body {
			fixed: true,
			..body(500.0, 500.0)
		};
		let mut bodies = [body(100.0, 40.0), body(140.0, 60.0), pinned];
		center(&mut bodies, 1.0);
		assert!((bodies[0].x + bodies[1].x).abs() < 1e-9);
		assert!((bodies[0].y + bodies[1].y).abs() < 1e-9);
		assert_eq!(bodies[2], pinned);
	}
}
