use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::prelude::*;

/// `requestAnimationFrame` driver.
///
/// The step closure returns whether another frame is wanted. An idle loop is
/// woken with [`FrameLoop::resume`]. Stopping or dropping the loop cancels the
/// pending frame and releases the closure, so nothing fires afterwards.
pub struct FrameLoop {
	inner: Rc<Inner>,
}

struct Inner {
	handle: Cell<Option<i32>>,
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
	pub fn start(mut step: impl FnMut() -> bool + 'static) -> Self {
		let inner = Rc::new(Inner {
			handle: Cell::new(None),
			callback: RefCell::new(None),
		});
		let weak: Weak<Inner> = Rc::downgrade(&inner);
		*inner.callback.borrow_mut() = Some(Closure::new(move || {
			let Some(inner) = weak.upgrade() else {
				return;
			};
			inner.handle.set(None);
			if step() {
				inner.schedule();
			}
		}));
		inner.schedule();
		Self { inner }
	}

	pub fn is_running(&self) -> bool {
		self.inner.handle.get().is_some()
	}

	pub fn resume(&self) {
		if !self.is_running() {
			self.inner.schedule();
		}
	}

	pub fn stop(&self) {
		if let Some(handle) = self.inner.handle.take()
			&& let Some(window) = web_sys::window()
		{
			let _ = window.cancel_animation_frame(handle);
		}
		if self.inner.callback.borrow_mut().take().is_some() {
			debug!("frame loop stopped");
		}
	}
}

impl Inner {
	fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let callback = self.callback.borrow();
		let Some(cb) = callback.as_ref() else {
			return;
		};
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(handle) => self.handle.set(Some(handle)),
			Err(err) => warn!("requestAnimationFrame failed: {err:?}"),
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
