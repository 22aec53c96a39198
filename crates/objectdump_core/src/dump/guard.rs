use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::dump::InspectError;

/// Run impl-provided code, turning a panic into [`InspectError::Panicked`].
///
/// The inspected value is only reachable through `&self` here and is not
/// touched again after a panic, so asserting unwind safety is sound.
pub(crate) fn contain<T>(f: impl FnOnce() -> Result<T, InspectError>) -> Result<T, InspectError> {
	match panic::catch_unwind(AssertUnwindSafe(f)) {
		Ok(result) => result,
		Err(payload) => Err(InspectError::Panicked {
			message: panic_message(payload.as_ref()),
		}),
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(text) = payload.downcast_ref::<&'static str>() {
		return (*text).to_owned();
	}
	if let Some(text) = payload.downcast_ref::<String>() {
		return text.clone();
	}
	"<non-string panic payload>".to_owned()
}
