use alloc::{
	boxed::Box,
	format,
	string::{String, ToString}
};
use core::{error::Error as CoreError, fmt};

/// Type alias for the `Result` type returned by `onnx-inspect` functions.
pub type Result<T, E = Error> = core::result::Result<T, E>;

struct ErrorInternal {
	code: ErrorCode,
	message: String,
	cause: Option<Box<dyn CoreError + Send + Sync + 'static>>
}

/// An error returned by any `onnx-inspect` API.
pub struct Error {
	inner: Box<ErrorInternal>
}

impl fmt::Debug for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut s = f.debug_struct("Error");
		s.field("code", &self.inner.code).field("message", &self.message());
		if let Some(cause) = self.inner.cause.as_ref() {
			s.field("cause", cause);
		}
		s.finish()
	}
}

impl Error {
	/// Wrap a foreign error in an [`Error`](Error) with [`ErrorCode::GenericFailure`].
	pub fn wrap<T: CoreError + Send + Sync + 'static>(err: T) -> Self {
		Self::new_internal(ErrorCode::GenericFailure, err.to_string(), Some(Box::new(err)))
	}

	/// Creates a custom [`Error`] with the given message.
	pub fn new(msg: impl Into<String>) -> Self {
		Self::new_internal(ErrorCode::GenericFailure, msg, None)
	}

	/// Creates a custom [`Error`] with the given [`ErrorCode`] and message.
	pub fn new_with_code(code: ErrorCode, msg: impl Into<String>) -> Self {
		Self::new_internal(code, msg, None)
	}

	pub(crate) fn with_cause<T: CoreError + Send + Sync + 'static>(code: ErrorCode, msg: impl Into<String>, cause: T) -> Self {
		Self::new_internal(code, msg, Some(Box::new(cause)))
	}

	fn new_internal(code: ErrorCode, message: impl Into<String>, cause: Option<Box<dyn CoreError + Send + Sync + 'static>>) -> Self {
		Self {
			inner: Box::new(ErrorInternal { code, message: message.into(), cause })
		}
	}

	pub fn code(&self) -> ErrorCode {
		self.inner.code
	}

	pub fn message(&self) -> &str {
		self.inner.message.as_str()
	}

	/// Returns `true` if this error was raised while loading a model, as opposed to while writing a report.
	pub fn is_load_error(&self) -> bool {
		matches!(self.inner.code, ErrorCode::NoSuchFile | ErrorCode::Io | ErrorCode::InvalidProtobuf)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.inner.message)
	}
}

impl CoreError for Error {
	fn source(&self) -> Option<&(dyn CoreError + 'static)> {
		self.inner.cause.as_ref().map(|x| &**x as &dyn CoreError)
	}
}

impl From<prost::DecodeError> for Error {
	fn from(e: prost::DecodeError) -> Self {
		Error::with_cause(ErrorCode::InvalidProtobuf, format!("Failed to decode model: {e}"), e)
	}
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
	GenericFailure,
	/// The model path does not exist.
	NoSuchFile,
	/// The model file exists but could not be read.
	Io,
	/// The file contents are not a valid ONNX protobuf.
	InvalidProtobuf
}
