use std::io;

use onnx_inspect::{
	Dimension, ErrorCode, Field, Model, Report, Result, Shape, format_outlet,
	proto::{StringStringEntryProto, TypeProto, ValueInfoProto, type_proto}
};

mod common;

#[test]
fn pangu_weather_report() -> Result<()> {
	let path = common::scratch_dir("pangu_weather_report").join("pangu_weather_1.onnx");
	common::write_model(&path, &common::pangu_weather());

	let model = Model::load(&path)?;
	assert_eq!(Report::new().render(&model), common::PANGU_WEATHER_REPORT);

	let mut out = Vec::new();
	Report::new().write(&model, &mut out)?;
	assert_eq!(String::from_utf8_lossy(&out), common::PANGU_WEATHER_REPORT);
	Ok(())
}

#[test]
fn one_line_per_descriptor_in_file_order() -> Result<()> {
	let inputs = ["z", "a", "m"].iter().map(|n| common::fixed(n, &[1])).collect();
	let outputs = ["out1", "out0"].iter().map(|n| common::fixed(n, &[2, 2])).collect();
	let model = Model::from(common::model(inputs, outputs));

	let report = Report::new().render(&model);
	let lines: Vec<&str> = report.lines().collect();
	assert_eq!(lines, ["Inputs:", "z [1]", "a [1]", "m [1]", "Outputs:", "out1 [2, 2]", "out0 [2, 2]"]);
	assert_eq!(lines.iter().filter(|l| **l == "Inputs:").count(), 1);
	assert_eq!(lines.iter().filter(|l| **l == "Outputs:").count(), 1);
	Ok(())
}

#[test]
fn empty_graph_prints_headers_only() -> Result<()> {
	let model = Model::from(common::model(vec![], vec![]));
	assert_eq!(Report::new().render(&model), "Inputs:\nOutputs:\n");
	Ok(())
}

#[test]
fn report_is_idempotent() -> Result<()> {
	let path = common::scratch_dir("report_is_idempotent").join("model.onnx");
	common::write_model(&path, &common::dynamic_model());

	let first = Report::new().render(&Model::load(&path)?);
	let second = Report::new().render(&Model::load(&path)?);
	assert_eq!(first.as_bytes(), second.as_bytes());
	Ok(())
}

#[test]
fn symbolic_dimensions() -> Result<()> {
	let path = common::scratch_dir("symbolic_dimensions").join("model.onnx");
	common::write_model(&path, &common::dynamic_model());
	let model = Model::load(&path)?;

	let inputs = model.graph().descriptors(Field::Inputs);
	assert_eq!(inputs[0].shape(), Some(&Shape::new([Dimension::from("batch"), Dimension::from("sequence")])));
	assert_eq!(format_outlet(&inputs[0]), "input_ids [batch, sequence]");
	assert_eq!(format_outlet(&inputs[1]), "attention_mask [batch, ?]");
	assert_eq!(format_outlet(&model.graph().outputs()[0]), "last_hidden_state [batch, sequence, 768]");
	Ok(())
}

#[test]
fn missing_file_is_a_load_error() {
	let path = common::scratch_dir("missing_file_is_a_load_error").join("public").join("pangu_weather_1.onnx");
	let err = Model::load(&path).expect_err("model should not exist");
	assert_eq!(err.code(), ErrorCode::NoSuchFile);
	assert!(err.is_load_error());
}

#[test]
fn garbage_is_a_load_error() {
	let path = common::scratch_dir("garbage_is_a_load_error").join("model.onnx");
	common::write_bytes(&path, &[0xff; 64]);
	let err = Model::load(&path).expect_err("garbage should not decode");
	assert_eq!(err.code(), ErrorCode::InvalidProtobuf);
}

#[test]
fn unreadable_path_is_an_io_error() {
	let dir = common::scratch_dir("unreadable_path_is_an_io_error");
	let err = Model::load(&dir).expect_err("a directory should not be readable as a model");
	assert_eq!(err.code(), ErrorCode::Io);
	assert!(err.is_load_error());
	assert!(err.message().contains(&dir.display().to_string()));
}

#[test]
fn metadata_and_element_types() -> Result<()> {
	let model = Model::from(common::dynamic_model());
	let report = Report::new().with_metadata(true).with_element_types(true).render(&model);
	assert_eq!(
		report,
		"\
Name: main_graph
Produced by pytorch 1.13.1
IR version: 8
Opsets: ai.onnx v17
Inputs:
input_ids [batch, sequence] i64
attention_mask [batch, ?] i64
embeddings.weight [30522, 768] f32
Outputs:
last_hidden_state [batch, sequence, 768] f32
"
	);
	Ok(())
}

#[test]
fn runtime_inputs_only() -> Result<()> {
	let model = Model::from(common::dynamic_model());
	assert_eq!(model.graph().initializers(), ["embeddings.weight"]);

	let report = Report::new().with_runtime_inputs_only(true).render(&model);
	assert!(!report.contains("embeddings.weight"));
	assert!(report.contains("attention_mask [batch, ?]"));
	Ok(())
}

#[test]
fn repeated_custom_keys_are_all_printed() -> Result<()> {
	let mut proto = common::model(vec![common::fixed("x", &[1])], vec![]);
	proto.metadata_props = vec![
		StringStringEntryProto { key: "k".to_string(), value: "first".to_string() },
		StringStringEntryProto { key: "k".to_string(), value: "second".to_string() }
	];
	let report = Report::new().with_metadata(true).render(&Model::from(proto));
	assert!(report.contains("Custom keys:\n    k: first\n    k: second\n"));
	Ok(())
}

#[test]
fn unknown_element_type_prints_placeholder() -> Result<()> {
	let untyped = common::tensor("x", 0, &[common::Dim::Value(2)]);
	let sequence = ValueInfoProto {
		name: "seq".to_string(),
		r#type: Some(TypeProto {
			value: Some(type_proto::Value::SequenceType(type_proto::Sequence {
				elem_type: common::tensor("", common::FLOAT, &[]).r#type.map(Box::new)
			})),
			..Default::default()
		}),
		..Default::default()
	};
	let model = Model::from(common::model(vec![untyped], vec![sequence]));
	let report = Report::new().with_element_types(true).render(&model);
	assert_eq!(report, "Inputs:\nx [2] ?\nOutputs:\nseq <unranked> Sequence<Tensor<f32>[]>\n");
	Ok(())
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
	fn write(&mut self, _: &[u8]) -> io::Result<usize> {
		Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[test]
fn write_failure_is_not_a_load_error() {
	let model = Model::from(common::pangu_weather());
	let err = Report::new().write(&model, BrokenPipe).expect_err("write should fail");
	assert_eq!(err.code(), ErrorCode::GenericFailure);
	assert!(!err.is_load_error());
}
