use alloc::boxed::Box;
use core::fmt;

use crate::{
	proto::{TypeProto, type_proto},
	tensor::{Shape, TensorElementType}
};

/// The declared type of a graph input or output.
///
/// ```
/// # use onnx_inspect::{tensor::{Shape, TensorElementType}, value::ValueType};
/// let ty = ValueType::Tensor {
/// 	ty: Some(TensorElementType::Float32),
/// 	shape: Some(Shape::fixed([1, 3, 224, 224]))
/// };
/// assert_eq!(ty.to_string(), "Tensor<f32>[1, 3, 224, 224]");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValueType {
	/// Value is a dense tensor.
	Tensor {
		/// Element type of the tensor, or `None` if it is undefined or not known to this crate.
		ty: Option<TensorElementType>,
		/// Declared shape. `None` if the model declares no shape at all (unknown rank), which is distinct from a
		/// rank-0 (scalar) shape.
		shape: Option<Shape>
	},
	/// Value is a sparse tensor.
	SparseTensor { ty: Option<TensorElementType>, shape: Option<Shape> },
	/// A sequence of other values.
	Sequence(Box<ValueType>),
	/// A map from one element type to a value type.
	Map { key: Option<TensorElementType>, value: Box<ValueType> },
	/// A value which may or may not be present.
	Optional(Box<ValueType>),
	/// The model does not declare a type for this value.
	Undeclared
}

impl ValueType {
	pub(crate) fn from_type_proto(proto: Option<&TypeProto>) -> Self {
		let Some(value) = proto.and_then(|t| t.value.as_ref()) else {
			return ValueType::Undeclared;
		};
		match value {
			type_proto::Value::TensorType(tensor) => ValueType::Tensor {
				ty: TensorElementType::from_onnx(tensor.elem_type),
				shape: tensor.shape.as_ref().map(Shape::from)
			},
			type_proto::Value::SparseTensorType(tensor) => ValueType::SparseTensor {
				ty: TensorElementType::from_onnx(tensor.elem_type),
				shape: tensor.shape.as_ref().map(Shape::from)
			},
			type_proto::Value::SequenceType(seq) => ValueType::Sequence(Box::new(ValueType::from_type_proto(seq.elem_type.as_deref()))),
			type_proto::Value::MapType(map) => ValueType::Map {
				key: TensorElementType::from_onnx(map.key_type),
				value: Box::new(ValueType::from_type_proto(map.value_type.as_deref()))
			},
			type_proto::Value::OptionalType(opt) => ValueType::Optional(Box::new(ValueType::from_type_proto(opt.elem_type.as_deref())))
		}
	}

	/// Returns the declared shape of this value type if it is a dense tensor with a declared shape.
	///
	/// Sparse tensors, sequences, maps & optionals have no dense tensor shape.
	#[must_use]
	pub fn tensor_shape(&self) -> Option<&Shape> {
		match self {
			ValueType::Tensor { shape, .. } => shape.as_ref(),
			_ => None
		}
	}

	/// Returns the element type of this value type if it is a (dense or sparse) tensor with a known element type.
	#[must_use]
	pub fn tensor_type(&self) -> Option<TensorElementType> {
		match self {
			ValueType::Tensor { ty, .. } | ValueType::SparseTensor { ty, .. } => *ty,
			_ => None
		}
	}

	/// Returns `true` if this value type is a dense tensor.
	#[inline]
	#[must_use]
	pub fn is_tensor(&self) -> bool {
		matches!(self, ValueType::Tensor { .. })
	}

	/// Returns `true` if this value type is a sequence.
	#[inline]
	#[must_use]
	pub fn is_sequence(&self) -> bool {
		matches!(self, ValueType::Sequence(_))
	}

	/// Returns `true` if this value type is a map.
	#[inline]
	#[must_use]
	pub fn is_map(&self) -> bool {
		matches!(self, ValueType::Map { .. })
	}
}

struct ElementType(Option<TensorElementType>);

impl fmt::Display for ElementType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Some(ty) => write!(f, "{ty}"),
			None => f.write_str("?")
		}
	}
}

struct DeclaredShape<'s>(Option<&'s Shape>);

impl fmt::Display for DeclaredShape<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Some(shape) => write!(f, "{shape}"),
			None => f.write_str("[..]")
		}
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValueType::Tensor { ty, shape } => write!(f, "Tensor<{}>{}", ElementType(*ty), DeclaredShape(shape.as_ref())),
			ValueType::SparseTensor { ty, shape } => write!(f, "SparseTensor<{}>{}", ElementType(*ty), DeclaredShape(shape.as_ref())),
			ValueType::Map { key, value } => write!(f, "Map<{}, {value}>", ElementType(*key)),
			ValueType::Sequence(inner) => write!(f, "Sequence<{inner}>"),
			ValueType::Optional(inner) => write!(f, "Option<{inner}>"),
			ValueType::Undeclared => f.write_str("?")
		}
	}
}
