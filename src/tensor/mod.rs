//! Element types & declared shapes of graph tensors.

use alloc::string::{String, ToString};
use core::{fmt, ops::Deref};

use smallvec::SmallVec;

mod types;

pub use self::types::TensorElementType;
use crate::proto::{
	TensorShapeProto,
	tensor_shape_proto::{self, dimension}
};

/// A single dimension of a declared tensor shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
	/// A dimension with a size fixed at export time. The value is reported exactly as declared.
	Fixed(i64),
	/// A dynamic dimension with a name (`dim_param`), e.g. `batch_size`.
	Symbolic(String),
	/// A dynamic dimension with no name.
	Unknown
}

impl Dimension {
	/// Returns the size of this dimension if it is fixed.
	pub fn size(&self) -> Option<i64> {
		match self {
			Self::Fixed(size) => Some(*size),
			_ => None
		}
	}

	/// Returns the symbol of this dimension if it is symbolic.
	pub fn symbol(&self) -> Option<&str> {
		match self {
			Self::Symbolic(symbol) => Some(symbol.as_str()),
			_ => None
		}
	}

	pub fn is_fixed(&self) -> bool {
		matches!(self, Self::Fixed(_))
	}
}

impl From<&tensor_shape_proto::Dimension> for Dimension {
	fn from(dim: &tensor_shape_proto::Dimension) -> Self {
		match &dim.value {
			Some(dimension::Value::DimValue(size)) => Dimension::Fixed(*size),
			Some(dimension::Value::DimParam(symbol)) if !symbol.is_empty() => Dimension::Symbolic(symbol.clone()),
			_ => Dimension::Unknown
		}
	}
}

impl From<i64> for Dimension {
	fn from(size: i64) -> Self {
		Dimension::Fixed(size)
	}
}

impl From<&str> for Dimension {
	fn from(symbol: &str) -> Self {
		Dimension::Symbolic(symbol.to_string())
	}
}

impl fmt::Display for Dimension {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Dimension::Fixed(size) => write!(f, "{size}"),
			Dimension::Symbolic(symbol) => f.write_str(symbol),
			Dimension::Unknown => f.write_str("?")
		}
	}
}

/// The declared shape of a tensor: its dimensions in declaration order.
///
/// ```
/// # use onnx_inspect::tensor::{Dimension, Shape};
/// let shape = Shape::new([Dimension::Fixed(1), Dimension::from("batch"), Dimension::Unknown]);
/// assert_eq!(shape.rank(), 3);
/// assert_eq!(shape.to_string(), "[1, batch, ?]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
	dims: SmallVec<Dimension, 4>
}

impl Shape {
	pub fn new(dims: impl IntoIterator<Item = Dimension>) -> Self {
		Self { dims: dims.into_iter().collect() }
	}

	/// Creates a fully static shape.
	pub fn fixed(dims: impl IntoIterator<Item = i64>) -> Self {
		Self::new(dims.into_iter().map(Dimension::Fixed))
	}

	/// A rank-0 shape, i.e. a scalar.
	pub fn scalar() -> Self {
		Self { dims: SmallVec::new() }
	}

	pub fn rank(&self) -> usize {
		self.dims.len()
	}

	/// Returns `true` if every dimension is [`Dimension::Fixed`].
	pub fn is_static(&self) -> bool {
		self.dims.iter().all(Dimension::is_fixed)
	}

	/// Returns the sizes of all dimensions if the shape is fully static.
	pub fn to_fixed(&self) -> Option<SmallVec<i64, 4>> {
		self.dims.iter().map(Dimension::size).collect()
	}

	/// Returns the symbols of all symbolic dimensions, in order.
	pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
		self.dims.iter().filter_map(Dimension::symbol)
	}
}

impl Deref for Shape {
	type Target = [Dimension];

	fn deref(&self) -> &Self::Target {
		&self.dims
	}
}

impl From<&TensorShapeProto> for Shape {
	fn from(shape: &TensorShapeProto) -> Self {
		Self::new(shape.dim.iter().map(Dimension::from))
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (i, dim) in self.dims.iter().enumerate() {
			if i != 0 {
				f.write_str(", ")?;
			}
			write!(f, "{dim}")?;
		}
		f.write_str("]")
	}
}
