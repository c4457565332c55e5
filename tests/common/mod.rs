#![allow(dead_code)]

use std::{
	fs,
	path::{Path, PathBuf}
};

use onnx_inspect::proto::{
	GraphProto, ModelProto, OperatorSetIdProto, TensorProto, TensorShapeProto, TypeProto, ValueInfoProto,
	tensor_shape_proto::{self, dimension},
	type_proto
};
use prost::Message;

pub const FLOAT: i32 = 1;
pub const INT64: i32 = 7;

pub enum Dim {
	Value(i64),
	Param(&'static str),
	Unset
}

pub fn tensor(name: &str, elem_type: i32, dims: &[Dim]) -> ValueInfoProto {
	let dim = dims
		.iter()
		.map(|d| tensor_shape_proto::Dimension {
			value: match d {
				Dim::Value(v) => Some(dimension::Value::DimValue(*v)),
				Dim::Param(p) => Some(dimension::Value::DimParam(p.to_string())),
				Dim::Unset => None
			},
			..Default::default()
		})
		.collect();
	ValueInfoProto {
		name: name.to_string(),
		r#type: Some(TypeProto {
			value: Some(type_proto::Value::TensorType(type_proto::Tensor {
				elem_type,
				shape: Some(TensorShapeProto { dim })
			})),
			..Default::default()
		}),
		..Default::default()
	}
}

pub fn fixed(name: &str, dims: &[i64]) -> ValueInfoProto {
	tensor(name, FLOAT, &dims.iter().map(|d| Dim::Value(*d)).collect::<Vec<_>>())
}

pub fn model(inputs: Vec<ValueInfoProto>, outputs: Vec<ValueInfoProto>) -> ModelProto {
	ModelProto {
		ir_version: 8,
		producer_name: "pytorch".to_string(),
		producer_version: "1.13.1".to_string(),
		opset_import: vec![OperatorSetIdProto { domain: String::new(), version: 17 }],
		graph: Some(GraphProto {
			name: "main_graph".to_string(),
			input: inputs,
			output: outputs,
			..Default::default()
		}),
		..Default::default()
	}
}

/// A model with the signature of Pangu-Weather's 1-hour model.
pub fn pangu_weather() -> ModelProto {
	model(
		vec![fixed("input", &[5, 13, 721, 1440]), fixed("input_surface", &[4, 721, 1440])],
		vec![fixed("output", &[5, 13, 721, 1440]), fixed("output_surface", &[4, 721, 1440])]
	)
}

pub const PANGU_WEATHER_REPORT: &str = "\
Inputs:
input [5, 13, 721, 1440]
input_surface [4, 721, 1440]
Outputs:
output [5, 13, 721, 1440]
output_surface [4, 721, 1440]
";

/// A model with a symbolic batch axis, an unnamed dynamic axis & a weight listed as an input.
pub fn dynamic_model() -> ModelProto {
	let mut proto = model(
		vec![
			tensor("input_ids", INT64, &[Dim::Param("batch"), Dim::Param("sequence")]),
			tensor("attention_mask", INT64, &[Dim::Param("batch"), Dim::Unset]),
			fixed("embeddings.weight", &[30522, 768])
		],
		vec![tensor("last_hidden_state", FLOAT, &[Dim::Param("batch"), Dim::Param("sequence"), Dim::Value(768)])]
	);
	if let Some(graph) = proto.graph.as_mut() {
		graph.initializer.push(TensorProto {
			name: "embeddings.weight".to_string(),
			dims: vec![30522, 768],
			data_type: FLOAT
		});
	}
	proto
}

/// Creates an empty directory under the cargo-managed temporary directory for integration tests.
pub fn scratch_dir(name: &str) -> PathBuf {
	let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("onnx-inspect").join(name);
	let _ = fs::remove_dir_all(&dir);
	fs::create_dir_all(&dir).expect("failed to create scratch directory");
	dir
}

pub fn write_model(path: &Path, model: &ModelProto) {
	write_bytes(path, &model.encode_to_vec());
}

pub fn write_bytes(path: &Path, bytes: &[u8]) {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).expect("failed to create model directory");
	}
	fs::write(path, bytes).expect("failed to write model");
}
