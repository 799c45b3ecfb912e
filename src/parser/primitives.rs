//! Built-in scalar types
//!
//! Every primitive is a `static` descriptor; [`Type`](super::ast::Type)s that
//! name one hold a shared `&'static` reference to it.  Only `size` and
//! `ssize` change with the target, and they do so through [`Width::Machine`]
//! rather than through separate descriptors.

use super::ast::Encoding;
use super::ast::Encoding::{Bool, Float, SignedInt, UnsignedInt};
use crate::env::Bits;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Fixed(usize),
    /// One machine word: 4 bytes on 32-bit targets, 8 on 64-bit.
    Machine,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Primitive {
    pub name: &'static str,
    pub encoding: Encoding,
    pub width: Width,
}

impl Primitive {
    const fn new(name: &'static str, encoding: Encoding, width: Width) -> Self {
        Primitive {
            name,
            encoding,
            width,
        }
    }

    pub fn size(&self, bits: Bits) -> usize {
        match self.width {
            Width::Fixed(bytes) => bytes,
            Width::Machine => bits.pointer_size(),
        }
    }

    /// Find the primitive spelled `name`.
    pub fn lookup(name: &str) -> Option<&'static Primitive> {
        static TABLE: OnceLock<FxHashMap<&'static str, &'static Primitive>> = OnceLock::new();
        TABLE
            .get_or_init(|| PRIMITIVES.iter().map(|p| (p.name, p)).collect())
            .get(name)
            .copied()
    }
}

pub static PRIMITIVES: [Primitive; 18] = [
    Primitive::new("i8", SignedInt, Width::Fixed(1)),
    Primitive::new("i16", SignedInt, Width::Fixed(2)),
    Primitive::new("i32", SignedInt, Width::Fixed(4)),
    Primitive::new("i64", SignedInt, Width::Fixed(8)),
    Primitive::new("u8", UnsignedInt, Width::Fixed(1)),
    Primitive::new("u16", UnsignedInt, Width::Fixed(2)),
    Primitive::new("u32", UnsignedInt, Width::Fixed(4)),
    Primitive::new("u64", UnsignedInt, Width::Fixed(8)),
    Primitive::new("int", SignedInt, Width::Fixed(4)),
    Primitive::new("unsigned", UnsignedInt, Width::Fixed(4)),
    Primitive::new("ssize", SignedInt, Width::Machine),
    Primitive::new("size", UnsignedInt, Width::Machine),
    Primitive::new("f16", Float, Width::Fixed(2)),
    Primitive::new("f32", Float, Width::Fixed(4)),
    Primitive::new("f64", Float, Width::Fixed(8)),
    Primitive::new("float", Float, Width::Fixed(4)),
    Primitive::new("double", Float, Width::Fixed(8)),
    Primitive::new("bool", Bool, Width::Fixed(1)),
];

pub static NULL_TYPE: Primitive = Primitive::new("#null#", Encoding::NullType, Width::Fixed(1));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_shares_the_static() {
        let a = Primitive::lookup("u16").unwrap();
        let b = Primitive::lookup("u16").unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, &PRIMITIVES[5]));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(Primitive::lookup("string").is_none());
        assert!(Primitive::lookup("Int").is_none());
        assert!(Primitive::lookup("#null#").is_none());
    }

    #[test]
    fn test_null_descriptor() {
        assert_eq!(NULL_TYPE.encoding, Encoding::NullType);
        assert_eq!(NULL_TYPE.size(Bits::SixtyFour), 1);
        assert_eq!(NULL_TYPE.name, "#null#");
    }

    #[test]
    fn test_machine_width() {
        let size = Primitive::lookup("size").unwrap();
        assert_eq!(size.size(Bits::ThirtyTwo), 4);
        assert_eq!(size.size(Bits::SixtyFour), 8);
        assert_eq!(size.encoding, Encoding::UnsignedInt);

        let ssize = Primitive::lookup("ssize").unwrap();
        assert_eq!(ssize.encoding, Encoding::SignedInt);
        assert_eq!(ssize.size(Bits::ThirtyTwo), 4);
    }
}
