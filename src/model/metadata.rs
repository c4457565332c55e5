use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::proto::ModelProto;

/// An operator set the model was exported against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opset {
	domain: String,
	version: i64
}

impl Opset {
	pub fn new(domain: impl Into<String>, version: i64) -> Self {
		Self { domain: domain.into(), version }
	}

	/// The operator set domain. The default ONNX domain is the empty string.
	pub fn domain(&self) -> &str {
		&self.domain
	}

	pub fn version(&self) -> i64 {
		self.version
	}
}

impl fmt::Display for Opset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let domain = if self.domain.is_empty() { "ai.onnx" } else { self.domain.as_str() };
		write!(f, "{domain} v{}", self.version)
	}
}

/// Container for model metadata, including producer information & custom key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelMetadata {
	ir_version: i64,
	producer_name: String,
	producer_version: String,
	domain: String,
	model_version: i64,
	description: String,
	opsets: Vec<Opset>,
	custom: Vec<(String, String)>
}

impl ModelMetadata {
	pub(crate) fn from_proto(model: &ModelProto) -> Self {
		Self {
			ir_version: model.ir_version,
			producer_name: model.producer_name.clone(),
			producer_version: model.producer_version.clone(),
			domain: model.domain.clone(),
			model_version: model.model_version,
			description: model.doc_string.clone(),
			opsets: model.opset_import.iter().map(|o| Opset::new(o.domain.clone(), o.version)).collect(),
			custom: model.metadata_props.iter().map(|p| (p.key.clone(), p.value.clone())).collect()
		}
	}

	/// The ONNX IR version the model was serialized with.
	pub fn ir_version(&self) -> i64 {
		self.ir_version
	}

	/// Gets the model producer name, if present.
	pub fn producer(&self) -> Option<&str> {
		non_empty(&self.producer_name)
	}

	pub fn producer_version(&self) -> Option<&str> {
		non_empty(&self.producer_version)
	}

	pub fn domain(&self) -> Option<&str> {
		non_empty(&self.domain)
	}

	pub fn model_version(&self) -> i64 {
		self.model_version
	}

	/// Gets the model description (`doc_string`), if present.
	pub fn description(&self) -> Option<&str> {
		non_empty(&self.description)
	}

	pub fn opsets(&self) -> &[Opset] {
		&self.opsets
	}

	/// Iterates custom metadata keys in file order.
	pub fn custom_keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.custom.iter().map(|(k, _)| k.as_str())
	}

	/// Iterates custom metadata key/value pairs in file order, including repeated keys.
	pub fn custom_entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.custom.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Gets the value of a custom metadata key. If a key is repeated, the first occurrence wins.
	pub fn custom(&self, key: &str) -> Option<&str> {
		self.custom.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}
}

fn non_empty(s: &str) -> Option<&str> {
	if s.is_empty() { None } else { Some(s) }
}
