use alloc::{string::String, vec::Vec};
use std::collections::HashSet;

use crate::{
	proto::{GraphProto, ValueInfoProto},
	tensor::Shape,
	value::ValueType
};

/// Selects one of the two declared value lists of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Inputs,
	Outputs
}

/// A named input or output of a graph, as declared in the model file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outlet {
	name: String,
	dtype: ValueType,
	doc_string: String,
	is_initializer: bool
}

impl Outlet {
	pub fn new(name: impl Into<String>, dtype: ValueType) -> Self {
		Self {
			name: name.into(),
			dtype,
			doc_string: String::new(),
			is_initializer: false
		}
	}

	fn from_value_info(info: &ValueInfoProto, is_initializer: bool) -> Self {
		Self {
			name: info.name.clone(),
			dtype: ValueType::from_type_proto(info.r#type.as_ref()),
			doc_string: info.doc_string.clone(),
			is_initializer
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn dtype(&self) -> &ValueType {
		&self.dtype
	}

	/// The declared dense tensor shape, or `None` if the value declares no tensor shape (unknown rank, or not a dense
	/// tensor).
	pub fn shape(&self) -> Option<&Shape> {
		self.dtype.tensor_shape()
	}

	pub fn doc_string(&self) -> &str {
		&self.doc_string
	}

	/// Returns `true` if this is a graph input that is also backed by an initializer. Models with IR version < 4 list
	/// all weights as graph inputs.
	pub fn is_initializer(&self) -> bool {
		self.is_initializer
	}
}

/// The computational graph of a [`Model`](super::Model): its declared inputs and outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
	name: String,
	doc_string: String,
	inputs: Vec<Outlet>,
	outputs: Vec<Outlet>,
	initializers: Vec<String>
}

impl Graph {
	pub(crate) fn from_proto(graph: &GraphProto) -> Self {
		let initializers: Vec<String> = graph.initializer.iter().map(|t| t.name.clone()).collect();
		let initializer_names: HashSet<&str> = initializers.iter().map(String::as_str).collect();

		let inputs = graph
			.input
			.iter()
			.map(|info| Outlet::from_value_info(info, initializer_names.contains(info.name.as_str())))
			.collect();
		let outputs = graph.output.iter().map(|info| Outlet::from_value_info(info, false)).collect();
		Self {
			name: graph.name.clone(),
			doc_string: graph.doc_string.clone(),
			inputs,
			outputs,
			initializers
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn doc_string(&self) -> &str {
		&self.doc_string
	}

	/// Returns the declared values of the given field, in file order.
	pub fn descriptors(&self, field: Field) -> &[Outlet] {
		match field {
			Field::Inputs => &self.inputs,
			Field::Outputs => &self.outputs
		}
	}

	/// All declared inputs in file order, including those backed by initializers.
	pub fn inputs(&self) -> &[Outlet] {
		self.descriptors(Field::Inputs)
	}

	pub fn outputs(&self) -> &[Outlet] {
		self.descriptors(Field::Outputs)
	}

	/// Inputs that must be fed by the caller, i.e. those not backed by an initializer.
	pub fn runtime_inputs(&self) -> impl Iterator<Item = &Outlet> + '_ {
		self.inputs.iter().filter(|input| !input.is_initializer())
	}

	/// Names of the graph's initializers, in file order.
	pub fn initializers(&self) -> &[String] {
		&self.initializers
	}
}
