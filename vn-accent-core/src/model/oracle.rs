use crate::codec::alphabet_codec::EncodedWindow;
use crate::error::OracleError;

/// External character-sequence predictor.
///
/// Given one encoded window of `maxlen` rows, returns its single best guess
/// as a decoded string of `maxlen` characters over the same alphabet.
/// Implementations must be deterministic for restoration to be.
pub trait Oracle: Send + Sync {
	/// Predicts one window.
	///
	/// # Errors
	/// Any failure is fatal to the current restoration call.
	fn predict(&self, window: &EncodedWindow) -> Result<String, OracleError>;

	/// Predicts several windows at once.
	///
	/// Backends that batch natively may override this; the result for each
	/// window must equal what [`predict`](Self::predict) returns for it.
	fn predict_batch(&self, windows: &[EncodedWindow]) -> Result<Vec<String>, OracleError> {
		windows.iter().map(|window| self.predict(window)).collect()
	}
}

impl<O: Oracle + ?Sized> Oracle for &O {
	fn predict(&self, window: &EncodedWindow) -> Result<String, OracleError> {
		(**self).predict(window)
	}

	fn predict_batch(&self, windows: &[EncodedWindow]) -> Result<Vec<String>, OracleError> {
		(**self).predict_batch(windows)
	}
}

impl<O: Oracle + ?Sized> Oracle for Box<O> {
	fn predict(&self, window: &EncodedWindow) -> Result<String, OracleError> {
		(**self).predict(window)
	}

	fn predict_batch(&self, windows: &[EncodedWindow]) -> Result<Vec<String>, OracleError> {
		(**self).predict_batch(windows)
	}
}
