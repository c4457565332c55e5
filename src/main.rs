use std::io;

use onnx_inspect::{Model, Report};

/// Location of the model to inspect, relative to the working directory.
const MODEL_PATH: &str = "./public/pangu_weather_1.onnx";

fn main() -> onnx_inspect::Result<()> {
	#[cfg(feature = "tracing")]
	onnx_inspect::logging::init_stderr_subscriber();

	let model = Model::load(MODEL_PATH)?;
	Report::new().write(&model, io::stdout().lock())
}
