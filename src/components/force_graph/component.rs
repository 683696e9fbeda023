use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::frame_loop::FrameLoop;
use super::render;
use super::state::LayoutState;
use crate::config::AppConfig;
use crate::network::Graph;

const FRAME_DT: f32 = 0.016;
const FALLBACK_WIDTH: f64 = 800.0;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Interactive force layout of `graph`.
///
/// A new `graph` value rebuilds the layout from scratch; a new `focused` value
/// only restyles the running one. Clicks report a node id, or `None` for the
/// background.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] graph: Signal<Graph>,
	#[prop(into)] focused: Signal<Option<String>>,
	#[prop(into)] on_node_click: Callback<Option<String>>,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let layout = use_context::<AppConfig>().unwrap_or_default().layout;
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = StoredValue::new_local(None::<LayoutState>);
	let frames = StoredValue::new_local(None::<FrameLoop>);
	let notice = RwSignal::new(None::<String>);

	let resume = move || {
		frames.try_with_value(|f| {
			if let Some(f) = f {
				f.resume();
			}
		});
	};

	Effect::new(move |_| {
		let data = graph.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		// The previous run must be gone before the new one starts.
		frames.update_value(|f| {
			if let Some(old) = f.take() {
				old.stop();
			}
		});
		state.set_value(None);

		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.unwrap_or(FALLBACK_WIDTH);
		canvas.set_width(width.max(0.0) as u32);
		canvas.set_height(height as u32);
		let Some(ctx) = context_2d(&canvas) else {
			error!("canvas has no 2d context");
			return;
		};

		let mut next = match LayoutState::new(&data, width, height, layout.clone()) {
			Ok(next) => next,
			Err(err) => {
				info!("{err}");
				render::clear(&ctx, width, height);
				notice.set(Some(err.to_string()));
				return;
			}
		};
		next.set_focus(focused.get_untracked().as_deref());
		notice.set(None);
		state.set_value(Some(next));
		debug!("graph canvas rebuilt at {width}x{height}");

		let frame = FrameLoop::start(move || {
			state
				.try_update_value(|s| {
					let Some(s) = s.as_mut() else {
						return false;
					};
					let moving = s.tick(FRAME_DT);
					render::render(s, &ctx);
					moving || s.drag.is_some()
				})
				.unwrap_or(false)
		});
		frames.set_value(Some(frame));
	});

	Effect::new(move |_| {
		let focus = focused.get();
		state.update_value(|s| {
			if let Some(s) = s {
				s.set_focus(focus.as_deref());
			}
		});
		resume();
	});

	on_cleanup(move || {
		frames.try_update_value(|f| {
			if let Some(f) = f.take() {
				f.stop();
			}
		});
	});

	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		state.update_value(|s| {
			if let Some(s) = s {
				s.pointer_down(x, y);
			}
		});
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		state.update_value(|s| {
			if let Some(s) = s {
				s.pointer_move(x, y);
			}
		});
		resume();
	};

	let on_mouseup = move |_: MouseEvent| {
		let click = state
			.try_update_value(|s| s.as_mut().and_then(LayoutState::pointer_up))
			.flatten();
		resume();
		if let Some(target) = click {
			on_node_click.run(target.into_event());
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		state.update_value(|s| {
			if let Some(s) = s {
				s.pointer_leave();
			}
		});
		resume();
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		state.update_value(|s| {
			if let Some(s) = s {
				s.zoom(x, y, ev.delta_y());
			}
		});
		resume();
	};

	view! {
		<div class="graph-container" style=format!("position: relative; height: {height}px;")>
			<canvas
				node_ref=canvas_ref
				class="force-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<Show when=move || notice.with(Option::is_some)>
				<div class="graph-empty">{move || notice.get().unwrap_or_default()}</div>
			</Show>
		</div>
	}
}
