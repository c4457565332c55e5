use core::fmt;

/// Element types a tensor may declare in an ONNX model, mirroring `TensorProto.DataType`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TensorElementType {
	/// 32-bit floating point number, equivalent to Rust's `f32`.
	Float32,
	/// Unsigned 8-bit integer, equivalent to Rust's `u8`.
	Uint8,
	/// Signed 8-bit integer, equivalent to Rust's `i8`.
	Int8,
	/// Unsigned 16-bit integer, equivalent to Rust's `u16`.
	Uint16,
	/// Signed 16-bit integer, equivalent to Rust's `i16`.
	Int16,
	/// Signed 32-bit integer, equivalent to Rust's `i32`.
	Int32,
	/// Signed 64-bit integer, equivalent to Rust's `i64`.
	Int64,
	/// String, equivalent to Rust's `String`.
	String,
	/// Boolean, equivalent to Rust's `bool`.
	Bool,
	/// 16-bit floating point number.
	Float16,
	/// 64-bit floating point number, equivalent to Rust's `f64`. Also known as `double`.
	Float64,
	/// Unsigned 32-bit integer, equivalent to Rust's `u32`.
	Uint32,
	/// Unsigned 64-bit integer, equivalent to Rust's `u64`.
	Uint64,
	/// Complex number made of two `f32`s.
	Complex64,
	/// Complex number made of two `f64`s.
	Complex128,
	/// Brain 16-bit floating point number.
	Bfloat16,
	Float8E4M3FN,
	Float8E4M3FNUZ,
	Float8E5M2,
	Float8E5M2FNUZ,
	/// Unsigned 4-bit integer, packed two per byte.
	Uint4,
	/// Signed 4-bit integer, packed two per byte.
	Int4,
	Float4E2M1
}

impl TensorElementType {
	/// Maps a raw `TensorProto.DataType` value to an element type.
	///
	/// Returns `None` for `UNDEFINED` (0) and for codes newer than this crate knows about.
	pub fn from_onnx(data_type: i32) -> Option<Self> {
		Some(match data_type {
			1 => Self::Float32,
			2 => Self::Uint8,
			3 => Self::Int8,
			4 => Self::Uint16,
			5 => Self::Int16,
			6 => Self::Int32,
			7 => Self::Int64,
			8 => Self::String,
			9 => Self::Bool,
			10 => Self::Float16,
			11 => Self::Float64,
			12 => Self::Uint32,
			13 => Self::Uint64,
			14 => Self::Complex64,
			15 => Self::Complex128,
			16 => Self::Bfloat16,
			17 => Self::Float8E4M3FN,
			18 => Self::Float8E4M3FNUZ,
			19 => Self::Float8E5M2,
			20 => Self::Float8E5M2FNUZ,
			21 => Self::Uint4,
			22 => Self::Int4,
			23 => Self::Float4E2M1,
			_ => return None
		})
	}

	/// The raw `TensorProto.DataType` value for this element type.
	pub fn to_onnx(self) -> i32 {
		match self {
			Self::Float32 => 1,
			Self::Uint8 => 2,
			Self::Int8 => 3,
			Self::Uint16 => 4,
			Self::Int16 => 5,
			Self::Int32 => 6,
			Self::Int64 => 7,
			Self::String => 8,
			Self::Bool => 9,
			Self::Float16 => 10,
			Self::Float64 => 11,
			Self::Uint32 => 12,
			Self::Uint64 => 13,
			Self::Complex64 => 14,
			Self::Complex128 => 15,
			Self::Bfloat16 => 16,
			Self::Float8E4M3FN => 17,
			Self::Float8E4M3FNUZ => 18,
			Self::Float8E5M2 => 19,
			Self::Float8E5M2FNUZ => 20,
			Self::Uint4 => 21,
			Self::Int4 => 22,
			Self::Float4E2M1 => 23
		}
	}
}

impl fmt::Display for TensorElementType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			TensorElementType::Bfloat16 => "bf16",
			TensorElementType::Bool => "bool",
			TensorElementType::Float16 => "f16",
			TensorElementType::Float32 => "f32",
			TensorElementType::Float64 => "f64",
			TensorElementType::Int16 => "i16",
			TensorElementType::Int32 => "i32",
			TensorElementType::Int64 => "i64",
			TensorElementType::Int8 => "i8",
			TensorElementType::String => "String",
			TensorElementType::Uint16 => "u16",
			TensorElementType::Uint32 => "u32",
			TensorElementType::Uint64 => "u64",
			TensorElementType::Uint8 => "u8",
			TensorElementType::Complex64 => "c64",
			TensorElementType::Complex128 => "c128",
			TensorElementType::Float8E4M3FN => "f8e4m3fn",
			TensorElementType::Float8E4M3FNUZ => "f8e4m3fnuz",
			TensorElementType::Float8E5M2 => "f8e5m2",
			TensorElementType::Float8E5M2FNUZ => "f8e5m2fnuz",
			TensorElementType::Uint4 => "u4",
			TensorElementType::Int4 => "i4",
			TensorElementType::Float4E2M1 => "f4e2m1"
		})
	}
}
