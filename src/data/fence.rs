use std::cell::Cell;

/// Orders overlapping loads so only the latest one is applied.
#[derive(Debug, Default)]
pub struct RequestFence {
	latest: Cell<u64>,
}

/// Handed out by [`RequestFence::issue`]; compare it back when the load completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestFence {
	pub fn issue(&self) -> Ticket {
		let next = self.latest.get() + 1;
		self.latest.set(next);
		Ticket(next)
	}

	/// False once a newer ticket has been issued.
	pub fn is_current(&self, ticket: Ticket) -> bool {
		self.latest.get() == ticket.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_latest_ticket_is_current() {
		let fence = RequestFence::default();
		let first = fence.issue();
		assert!(fence.is_current(first));

		let second = fence.issue();
		assert!(!fence.is_current(first));
		assert!(fence.is_current(second));
		assert_ne!(first, second);
	}
}
