//! Primitive types and the resolved `TypeInfo` the analyzer assigns to
//! every declaration and expression (§3.3).

use evmc_par::ast::TypeName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveType {
    U8,
    U16,
    U32,
    U256,
    Bool,
}

impl PrimitiveType {
    pub fn bit_width(self) -> u16 {
        match self {
            PrimitiveType::U8 | PrimitiveType::Bool => 8,
            PrimitiveType::U16 => 16,
            PrimitiveType::U32 => 32,
            PrimitiveType::U256 => 256,
        }
    }

    /// Recovers a primitive from a number literal's (already-rewritten)
    /// bit width, used by `infer` for `NumberLiteral` nodes. `8` maps to
    /// `U8` rather than `Bool`: a number literal is never `Bool`-typed,
    /// only a declaration whose initializer literal is itself a
    /// `BooleanLiteral` is.
    pub fn from_bit_width(width: u16) -> Option<PrimitiveType> {
        match width {
            8 => Some(PrimitiveType::U8),
            16 => Some(PrimitiveType::U16),
            32 => Some(PrimitiveType::U32),
            256 => Some(PrimitiveType::U256),
            _ => None,
        }
    }
}

impl From<TypeName> for PrimitiveType {
    fn from(name: TypeName) -> Self {
        match name {
            TypeName::U8 => PrimitiveType::U8,
            TypeName::U16 => PrimitiveType::U16,
            TypeName::U32 => PrimitiveType::U32,
            TypeName::U256 => PrimitiveType::U256,
            TypeName::Bool => PrimitiveType::Bool,
        }
    }
}

/// The fully resolved type of a declaration or expression (§3.3).
///
/// `Array`'s element is itself a `TypeInfo` rather than a bare primitive:
/// the grammar allows an array literal element to be another array
/// literal (`[[1, 2], [3, 4]]`), and each slot of such an array holds a
/// 32-byte pointer to the nested array's own storage, so the recursive
/// shape costs nothing extra at the lowering stage (§4.4 evaluates each
/// element expression and stores whatever single 32-byte value it
/// produces, pointer or not). `bit_width` advances `next_offset` (§4.3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeInfo {
    Primitive(PrimitiveType),
    Array(Box<TypeInfo>, usize),
}

impl TypeInfo {
    pub fn bit_width(&self) -> u64 {
        match self {
            TypeInfo::Primitive(t) => t.bit_width() as u64,
            TypeInfo::Array(elem, len) => elem.bit_width() * *len as u64,
        }
    }

    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            TypeInfo::Primitive(t) => Some(*t),
            TypeInfo::Array(..) => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeInfo::Array(..))
    }

    /// The element type of an `Array`, used by array-access analysis.
    pub fn element_type(&self) -> Option<&TypeInfo> {
        match self {
            TypeInfo::Array(elem, _) => Some(elem),
            TypeInfo::Primitive(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_bit_widths() {
        assert_eq!(PrimitiveType::U8.bit_width(), 8);
        assert_eq!(PrimitiveType::U16.bit_width(), 16);
        assert_eq!(PrimitiveType::U32.bit_width(), 32);
        assert_eq!(PrimitiveType::U256.bit_width(), 256);
        assert_eq!(PrimitiveType::Bool.bit_width(), 8);
    }

    #[test]
    fn array_bit_width_is_element_times_length() {
        let info = TypeInfo::Array(Box::new(TypeInfo::Primitive(PrimitiveType::U256)), 3);
        assert_eq!(info.bit_width(), 256 * 3);
    }

    #[test]
    fn nested_array_bit_width_multiplies_through() {
        let inner = TypeInfo::Array(Box::new(TypeInfo::Primitive(PrimitiveType::U8)), 2);
        let outer = TypeInfo::Array(Box::new(inner), 3);
        assert_eq!(outer.bit_width(), 8 * 2 * 3);
    }

    #[test]
    fn from_bit_width_round_trips_for_primitives() {
        assert_eq!(PrimitiveType::from_bit_width(8), Some(PrimitiveType::U8));
        assert_eq!(PrimitiveType::from_bit_width(256), Some(PrimitiveType::U256));
        assert_eq!(PrimitiveType::from_bit_width(64), None);
    }
}
