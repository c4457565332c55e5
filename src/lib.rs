#![allow(clippy::tabs_in_doc_comments)]
#![warn(clippy::unwrap_used)]

//! `onnx-inspect` reads an [ONNX](https://onnx.ai/) model file and reports the names, types & declared shapes of its
//! graph inputs and outputs.
//!
//! The model is decoded directly from its protobuf encoding; no inference runtime is required, and weights are never
//! loaded into memory.
//!
//! ```no_run
//! # fn main() -> onnx_inspect::Result<()> {
//! use onnx_inspect::{Model, Report};
//!
//! let model = Model::load("public/pangu_weather_1.onnx")?;
//! Report::new().write(&model, std::io::stdout().lock())?;
//! # 	Ok(())
//! # }
//! ```

extern crate alloc;

pub mod error;
pub mod logging;
pub mod model;
pub mod proto;
pub mod report;
pub mod tensor;
pub mod value;

#[allow(unused_imports)]
pub(crate) use self::logging::{debug, info, trace, warning as warn};
pub use self::{
	error::{Error, ErrorCode, Result},
	model::{Field, Graph, Model, ModelMetadata, Opset, Outlet},
	report::{Report, format_outlet},
	tensor::{Dimension, Shape, TensorElementType},
	value::ValueType
};
