//! Loading ONNX models & walking their declared inputs and outputs.

use std::{fs, path::Path};

use prost::Message;

mod graph;
mod metadata;

pub use self::{
	graph::{Field, Graph, Outlet},
	metadata::{ModelMetadata, Opset}
};
use crate::{
	error::{Error, ErrorCode, Result},
	proto::ModelProto
};

/// An ONNX model decoded from its serialized protobuf form.
///
/// Only the model's metadata and graph signature are retained; node bodies & initializer payloads are skipped during
/// decoding.
///
/// ```no_run
/// # use onnx_inspect::Model;
/// # fn main() -> onnx_inspect::Result<()> {
/// let model = Model::load("model.onnx")?;
/// for input in model.graph().inputs() {
/// 	println!("{}: {}", input.name(), input.dtype());
/// }
/// # 	Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
	metadata: ModelMetadata,
	graph: Graph
}

impl Model {
	/// Reads & decodes the model file at `path`.
	///
	/// Fails with [`ErrorCode::NoSuchFile`] if the path does not exist, [`ErrorCode::Io`] if it cannot be read, or
	/// [`ErrorCode::InvalidProtobuf`] if its contents are not a valid ONNX protobuf.
	pub fn load<P>(path: P) -> Result<Model>
	where
		P: AsRef<Path>
	{
		let path = path.as_ref();
		if !path.exists() {
			return Err(Error::new_with_code(ErrorCode::NoSuchFile, format!("File at `{}` does not exist", path.display())));
		}

		let bytes = fs::read(path).map_err(|e| Error::with_cause(ErrorCode::Io, format!("Failed to read `{}`: {e}", path.display()), e))?;
		crate::debug!(path = %path.display(), len = bytes.len(), "Read model file");
		Model::from_bytes(&bytes)
	}

	/// Decodes a model from its serialized bytes.
	pub fn from_bytes(bytes: &[u8]) -> Result<Model> {
		let proto = ModelProto::decode(bytes)?;
		Ok(Model::from_proto(&proto))
	}

	pub(crate) fn from_proto(proto: &ModelProto) -> Model {
		let metadata = ModelMetadata::from_proto(proto);
		let graph = match proto.graph.as_ref() {
			Some(graph) => Graph::from_proto(graph),
			None => {
				crate::warn!("Model does not contain a graph");
				Graph::default()
			}
		};
		crate::info!(
			ir_version = metadata.ir_version(),
			inputs = graph.inputs().len(),
			outputs = graph.outputs().len(),
			initializers = graph.initializers().len(),
			"Decoded model"
		);
		#[cfg(feature = "tracing")]
		for outlet in graph.inputs().iter().chain(graph.outputs()) {
			crate::trace!(name = outlet.name(), dtype = %outlet.dtype(), "Declared graph value");
		}
		Model { metadata, graph }
	}

	pub fn metadata(&self) -> &ModelMetadata {
		&self.metadata
	}

	pub fn graph(&self) -> &Graph {
		&self.graph
	}
}

impl From<ModelProto> for Model {
	fn from(proto: ModelProto) -> Self {
		Model::from_proto(&proto)
	}
}
