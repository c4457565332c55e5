//! Protobuf messages for the subset of `onnx.proto3` read by this crate.
//!
//! Only the fields needed to describe a model's signature are declared; everything else (node bodies, initializer
//! payloads, training info) is skipped by `prost` during decoding without being copied. Field tags match the upstream
//! schema, so these messages can also be used to *encode* small models, which the test suite does.
//!
//! Tags were checked against `onnx/onnx.proto3` as of ONNX 1.18 (IR version 11).

use alloc::{string::String, vec::Vec};

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModelProto {
	#[prost(int64, tag = "1")]
	pub ir_version: i64,
	#[prost(message, repeated, tag = "8")]
	pub opset_import: Vec<OperatorSetIdProto>,
	#[prost(string, tag = "2")]
	pub producer_name: String,
	#[prost(string, tag = "3")]
	pub producer_version: String,
	#[prost(string, tag = "4")]
	pub domain: String,
	#[prost(int64, tag = "5")]
	pub model_version: i64,
	#[prost(string, tag = "6")]
	pub doc_string: String,
	#[prost(message, optional, tag = "7")]
	pub graph: Option<GraphProto>,
	#[prost(message, repeated, tag = "14")]
	pub metadata_props: Vec<StringStringEntryProto>
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OperatorSetIdProto {
	#[prost(string, tag = "1")]
	pub domain: String,
	#[prost(int64, tag = "2")]
	pub version: i64
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StringStringEntryProto {
	#[prost(string, tag = "1")]
	pub key: String,
	#[prost(string, tag = "2")]
	pub value: String
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GraphProto {
	#[prost(string, tag = "2")]
	pub name: String,
	#[prost(message, repeated, tag = "5")]
	pub initializer: Vec<TensorProto>,
	#[prost(string, tag = "10")]
	pub doc_string: String,
	#[prost(message, repeated, tag = "11")]
	pub input: Vec<ValueInfoProto>,
	#[prost(message, repeated, tag = "12")]
	pub output: Vec<ValueInfoProto>
}

/// Initializer header only; `raw_data` and the typed data fields are skipped.
#[derive(Clone, PartialEq, prost::Message)]
pub struct TensorProto {
	#[prost(int64, repeated, tag = "1")]
	pub dims: Vec<i64>,
	#[prost(int32, tag = "2")]
	pub data_type: i32,
	#[prost(string, tag = "8")]
	pub name: String
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ValueInfoProto {
	#[prost(string, tag = "1")]
	pub name: String,
	#[prost(message, optional, tag = "2")]
	pub r#type: Option<TypeProto>,
	#[prost(string, tag = "3")]
	pub doc_string: String
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TypeProto {
	#[prost(string, tag = "6")]
	pub denotation: String,
	#[prost(oneof = "type_proto::Value", tags = "1, 4, 5, 8, 9")]
	pub value: Option<type_proto::Value>
}

pub mod type_proto {
	use alloc::boxed::Box;

	#[derive(Clone, PartialEq, prost::Message)]
	pub struct Tensor {
		#[prost(int32, tag = "1")]
		pub elem_type: i32,
		#[prost(message, optional, tag = "2")]
		pub shape: Option<super::TensorShapeProto>
	}

	#[derive(Clone, PartialEq, prost::Message)]
	pub struct Sequence {
		#[prost(message, optional, boxed, tag = "1")]
		pub elem_type: Option<Box<super::TypeProto>>
	}

	#[derive(Clone, PartialEq, prost::Message)]
	pub struct Map {
		#[prost(int32, tag = "1")]
		pub key_type: i32,
		#[prost(message, optional, boxed, tag = "2")]
		pub value_type: Option<Box<super::TypeProto>>
	}

	#[derive(Clone, PartialEq, prost::Message)]
	pub struct Optional {
		#[prost(message, optional, boxed, tag = "1")]
		pub elem_type: Option<Box<super::TypeProto>>
	}

	#[derive(Clone, PartialEq, prost::Message)]
	pub struct SparseTensor {
		#[prost(int32, tag = "1")]
		pub elem_type: i32,
		#[prost(message, optional, tag = "2")]
		pub shape: Option<super::TensorShapeProto>
	}

	#[derive(Clone, PartialEq, prost::Oneof)]
	pub enum Value {
		#[prost(message, tag = "1")]
		TensorType(Tensor),
		#[prost(message, tag = "4")]
		SequenceType(Sequence),
		#[prost(message, tag = "5")]
		MapType(Map),
		#[prost(message, tag = "8")]
		SparseTensorType(SparseTensor),
		#[prost(message, tag = "9")]
		OptionalType(Optional)
	}
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TensorShapeProto {
	#[prost(message, repeated, tag = "1")]
	pub dim: Vec<tensor_shape_proto::Dimension>
}

pub mod tensor_shape_proto {
	use alloc::string::String;

	#[derive(Clone, PartialEq, prost::Message)]
	pub struct Dimension {
		#[prost(string, tag = "3")]
		pub denotation: String,
		#[prost(oneof = "dimension::Value", tags = "1, 2")]
		pub value: Option<dimension::Value>
	}

	pub mod dimension {
		use alloc::string::String;

		#[derive(Clone, PartialEq, prost::Oneof)]
		pub enum Value {
			#[prost(int64, tag = "1")]
			DimValue(i64),
			#[prost(string, tag = "2")]
			DimParam(String)
		}
	}
}
