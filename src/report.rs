//! Plain-text rendering of a model's declared inputs & outputs.
//!
//! The default [`Report`] prints two sections:
//!
//! ```text
//! Inputs:
//! input [5, 13, 721, 1440]
//! input_surface [4, 721, 1440]
//! Outputs:
//! output [5, 13, 721, 1440]
//! output_surface [4, 721, 1440]
//! ```
//!
//! Shapes render as a bracketed, comma-separated list in declaration order. Fixed dimensions print their size, symbolic
//! dimensions print their symbol, unnamed dynamic dimensions print `?`, and a value that declares no tensor shape at
//! all prints [`UNRANKED`].

use alloc::string::String;
use core::fmt::Write as _;
use std::io::Write;

use crate::{
	error::{Error, Result},
	model::{Field, Model, Outlet},
	tensor::Shape,
	value::ValueType
};

/// Rendering of a value that declares no tensor shape.
pub const UNRANKED: &str = "<unranked>";

/// Renders a declared shape; see the [module-level documentation](self) for the format.
pub fn format_shape(shape: Option<&Shape>) -> String {
	match shape {
		Some(shape) => shape.to_string(),
		None => String::from(UNRANKED)
	}
}

/// Renders a descriptor as `<name> <shape>`.
pub fn format_outlet(outlet: &Outlet) -> String {
	format!("{} {}", outlet.name(), format_shape(outlet.shape()))
}

/// Prints a model's declared inputs & outputs.
///
/// With the default options the output contains exactly an `Inputs:` header, one line per input, an `Outputs:` header
/// and one line per output.
#[derive(Debug, Clone, Default)]
pub struct Report {
	metadata: bool,
	element_types: bool,
	runtime_inputs_only: bool
}

impl Report {
	pub fn new() -> Self {
		Self::default()
	}

	/// Prefix the sections with the model's name, description, producer, IR version, opsets & custom metadata keys.
	/// Absent fields are omitted.
	#[must_use]
	pub fn with_metadata(mut self, enable: bool) -> Self {
		self.metadata = enable;
		self
	}

	/// Append each descriptor's element type to its line, e.g. `input [1, 3] f32`.
	#[must_use]
	pub fn with_element_types(mut self, enable: bool) -> Self {
		self.element_types = enable;
		self
	}

	/// Skip graph inputs that are backed by initializers.
	#[must_use]
	pub fn with_runtime_inputs_only(mut self, enable: bool) -> Self {
		self.runtime_inputs_only = enable;
		self
	}

	/// Renders the report to a string.
	pub fn render(&self, model: &Model) -> String {
		let mut out = String::new();
		if self.metadata {
			self.render_metadata(model, &mut out);
		}
		self.render_section(model, Field::Inputs, &mut out);
		self.render_section(model, Field::Outputs, &mut out);
		out
	}

	/// Writes the report to `writer` and flushes it.
	///
	/// The report is rendered in full before anything is written.
	pub fn write<W: Write>(&self, model: &Model, mut writer: W) -> Result<()> {
		let report = self.render(model);
		writer.write_all(report.as_bytes()).map_err(Error::wrap)?;
		writer.flush().map_err(Error::wrap)?;
		crate::debug!(len = report.len(), "Wrote report");
		Ok(())
	}

	fn render_section(&self, model: &Model, field: Field, out: &mut String) {
		out.push_str(match field {
			Field::Inputs => "Inputs:\n",
			Field::Outputs => "Outputs:\n"
		});
		let skip_initializers = self.runtime_inputs_only && field == Field::Inputs;
		for outlet in model.graph().descriptors(field) {
			if skip_initializers && outlet.is_initializer() {
				continue;
			}
			out.push_str(&format_outlet(outlet));
			if self.element_types {
				let dtype = outlet.dtype();
				match dtype {
					ValueType::Tensor { ty, .. } | ValueType::SparseTensor { ty, .. } => match ty {
						Some(ty) => {
							let _ = write!(out, " {ty}");
						}
						None => out.push_str(" ?")
					},
					_ => {
						let _ = write!(out, " {dtype}");
					}
				}
			}
			out.push('\n');
		}
	}

	fn render_metadata(&self, model: &Model, out: &mut String) {
		let meta = model.metadata();
		if !model.graph().name().is_empty() {
			let _ = writeln!(out, "Name: {}", model.graph().name());
		}
		if let Some(x) = meta.description() {
			let _ = writeln!(out, "Description: {x}");
		}
		match (meta.producer(), meta.producer_version()) {
			(Some(producer), Some(version)) => {
				let _ = writeln!(out, "Produced by {producer} {version}");
			}
			(Some(producer), None) => {
				let _ = writeln!(out, "Produced by {producer}");
			}
			_ => {}
		}
		if let Some(x) = meta.domain() {
			let _ = writeln!(out, "Domain: {x}");
		}
		if meta.model_version() != 0 {
			let _ = writeln!(out, "Model version: {}", meta.model_version());
		}
		let _ = writeln!(out, "IR version: {}", meta.ir_version());
		if !meta.opsets().is_empty() {
			let opsets = meta.opsets().iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
			let _ = writeln!(out, "Opsets: {opsets}");
		}
		let mut custom = meta.custom_entries().peekable();
		if custom.peek().is_some() {
			out.push_str("Custom keys:\n");
			for (key, value) in custom {
				let _ = writeln!(out, "    {key}: {value}");
			}
		}
	}
}
