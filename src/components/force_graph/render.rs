use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::LayoutState;
use crate::network::{NodeKind, RelationKind};

const BACKGROUND: &str = "#fafbfc";
const LABEL_COLOR: &str = "#333";

pub fn kind_color(kind: NodeKind) -> &'static str {
	match kind {
		NodeKind::Alumni => "#1f77b4",
		NodeKind::Department => "#2ca02c",
		NodeKind::Company => "#ff7f0e",
		NodeKind::Skill => "#9467bd",
		NodeKind::Event => "#e377c2",
	}
}

/// Edge stroke as an `r, g, b` triple, tinted toward the target's kind colour.
fn relation_rgb(kind: RelationKind) -> &'static str {
	match kind {
		RelationKind::StudiedIn => "120, 170, 120",
		RelationKind::WorksAt => "210, 160, 110",
		RelationKind::HasSkill => "160, 140, 190",
		RelationKind::Attended => "210, 150, 190",
	}
}

pub fn render(state: &LayoutState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	let positions = state.positions();

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx, &positions);
	draw_nodes(state, ctx);
	ctx.restore();

	draw_tooltip(state, ctx, &positions);
}

pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_edges(
	state: &LayoutState,
	ctx: &CanvasRenderingContext2d,
	positions: &HashMap<DefaultNodeIdx, (f64, f64)>,
) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k.max(0.5), 6.0);
	let mut radius_of = HashMap::new();
	state.graph.visit_nodes(|node| {
		radius_of.insert(node.index(), node.data.user_data.radius);
	});

	for edge in state.edges() {
		let (Some(&(x1, y1)), Some(&(x2, y2))) = (positions.get(&edge.source), positions.get(&edge.target))
		else {
			continue;
		};
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		let target_r = radius_of.get(&edge.target).copied().unwrap_or(0.0);
		let color = format!("rgba({}, {})", relation_rgb(edge.kind), state.edge_opacity(edge));

		ctx.set_stroke_style_str(&color);
		ctx.set_line_width(line_width);
		let (tip_x, tip_y) = (x2 - ux * target_r, y2 - uy * target_r);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(back_x, back_y);
		ctx.stroke();

		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.set_fill_style_str(&color);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		if state.touches_hover(edge) {
			ctx.set_fill_style_str(LABEL_COLOR);
			ctx.set_font(&format!("{}px sans-serif", 8.0 / k.max(0.5)));
			let _ = ctx.fill_text(&edge.label, (x1 + x2) / 2.0, (y1 + y2) / 2.0);
		}
	}
}

fn draw_nodes(state: &LayoutState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let focus = state.focus();

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y, r) = (node.x() as f64, node.y() as f64, info.radius);

		ctx.set_global_alpha(state.node_opacity(idx));
		ctx.begin_path();
		let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(kind_color(info.kind));
		ctx.fill();

		let emphasised = state.is_hovered(idx) || focus == Some(idx);
		ctx.set_stroke_style_str(if emphasised { "#222" } else { "#fff" });
		ctx.set_line_width(if emphasised { 2.5 / k } else { 1.5 / k });
		if info.pinned.is_some() {
			let dash = 3.0 / k;
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(dash),
			));
		}
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		ctx.set_fill_style_str(LABEL_COLOR);
		ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
		let _ = ctx.fill_text(&info.label, x + r + 3.0, y + 3.0);
		ctx.set_global_alpha(1.0);
	});
}

/// "label (kind)" box next to the hovered node, drawn in screen space.
fn draw_tooltip(
	state: &LayoutState,
	ctx: &CanvasRenderingContext2d,
	positions: &HashMap<DefaultNodeIdx, (f64, f64)>,
) {
	let Some(idx) = state.hover.node else {
		return;
	};
	let Some(&(gx, gy)) = positions.get(&idx) else {
		return;
	};
	let mut text = None;
	state.graph.visit_nodes(|node| {
		if node.index() == idx {
			let info = &node.data.user_data;
			text = Some(format!("{} ({})", info.label, info.kind));
		}
	});
	let Some(text) = text else {
		return;
	};

	let (sx, sy) = state.transform.graph_to_screen(gx, gy);
	let (bx, by) = (sx + 12.0, sy - 28.0);
	let width = text.chars().count() as f64 * 6.5 + 12.0;
	ctx.set_fill_style_str("rgba(0, 0, 0, 0.75)");
	ctx.fill_rect(bx, by, width, 20.0);
	ctx.set_fill_style_str("#fff");
	ctx.set_font("12px sans-serif");
	let _ = ctx.fill_text(&text, bx + 6.0, by + 14.0);
}
