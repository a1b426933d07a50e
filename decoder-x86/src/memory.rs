use std::fmt;

macro_rules! memory_sizes {
    ($($name:ident => ($size:expr, $elem:expr, $label:expr)),* $(,)?) => {
        /// What a memory operand addresses: how many bytes, and how they're split into elements.
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum MemorySize {
            $($name,)*
        }

        impl MemorySize {
            /// Total number of bytes touched, 0 if unknown.
            pub const fn size(self) -> usize {
                match self {
                    $(MemorySize::$name => $size,)*
                }
            }

            /// Size of a single element, equal to [`MemorySize::size`] for scalars.
            pub const fn element_size(self) -> usize {
                match self {
                    $(MemorySize::$name => $elem,)*
                }
            }

            /// Pointer label used when rendering the instruction.
            pub const fn label(self) -> &'static str {
                match self {
                    $(MemorySize::$name => $label,)*
                }
            }
        }
    };
}

memory_sizes! {
    Unknown => (0, 0, ""),
    UInt8 => (1, 1, "byte"),
    UInt16 => (2, 2, "word"),
    UInt32 => (4, 4, "dword"),
    UInt64 => (8, 8, "qword"),
    UInt128 => (16, 16, "xmmword"),
    UInt256 => (32, 32, "ymmword"),
    Int16 => (2, 2, "word"),
    Int32 => (4, 4, "dword"),
    Int64 => (8, 8, "qword"),
    Float32 => (4, 4, "dword"),
    Float64 => (8, 8, "qword"),
    Float80 => (10, 10, "tbyte"),
    SegPtr16 => (4, 4, "dword"),
    SegPtr32 => (6, 6, "fword"),
    SegPtr64 => (10, 10, "tbyte"),
    Fword6 => (6, 6, "fword"),
    Fword10 => (10, 10, "tbyte"),
    Bound16_WordWord => (4, 2, "dword"),
    Bound32_DwordDword => (8, 4, "qword"),
    FpuEnv14 => (14, 14, ""),
    FpuEnv28 => (28, 28, ""),
    Fxsave_512Byte => (512, 512, ""),
    Packed32_Int16 => (4, 2, "dword"),
    Packed64_UInt8 => (8, 1, "qword"),
    Packed64_Int8 => (8, 1, "qword"),
    Packed64_UInt16 => (8, 2, "qword"),
    Packed64_Int16 => (8, 2, "qword"),
    Packed64_UInt32 => (8, 4, "qword"),
    Packed64_Int32 => (8, 4, "qword"),
    Packed64_Float32 => (8, 4, "qword"),
    Packed128_UInt8 => (16, 1, "xmmword"),
    Packed128_Int8 => (16, 1, "xmmword"),
    Packed128_UInt16 => (16, 2, "xmmword"),
    Packed128_Int16 => (16, 2, "xmmword"),
    Packed128_UInt32 => (16, 4, "xmmword"),
    Packed128_Int32 => (16, 4, "xmmword"),
    Packed128_UInt52 => (16, 8, "xmmword"),
    Packed128_UInt64 => (16, 8, "xmmword"),
    Packed128_Int64 => (16, 8, "xmmword"),
    Packed128_Float32 => (16, 4, "xmmword"),
    Packed128_Float64 => (16, 8, "xmmword"),
    Packed256_UInt8 => (32, 1, "ymmword"),
    Packed256_Int8 => (32, 1, "ymmword"),
    Packed256_UInt16 => (32, 2, "ymmword"),
    Packed256_Int16 => (32, 2, "ymmword"),
    Packed256_UInt32 => (32, 4, "ymmword"),
    Packed256_Int32 => (32, 4, "ymmword"),
    Packed256_UInt52 => (32, 8, "ymmword"),
    Packed256_UInt64 => (32, 8, "ymmword"),
    Packed256_Int64 => (32, 8, "ymmword"),
    Packed256_Int128 => (32, 16, "ymmword"),
    Packed256_Float32 => (32, 4, "ymmword"),
    Packed256_Float64 => (32, 8, "ymmword"),
    Packed512_UInt8 => (64, 1, "zmmword"),
    Packed512_Int8 => (64, 1, "zmmword"),
    Packed512_UInt16 => (64, 2, "zmmword"),
    Packed512_Int16 => (64, 2, "zmmword"),
    Packed512_UInt32 => (64, 4, "zmmword"),
    Packed512_Int32 => (64, 4, "zmmword"),
    Packed512_UInt52 => (64, 8, "zmmword"),
    Packed512_UInt64 => (64, 8, "zmmword"),
    Packed512_Int64 => (64, 8, "zmmword"),
    Packed512_Float32 => (64, 4, "zmmword"),
    Packed512_Float64 => (64, 8, "zmmword"),
    Broadcast128_UInt32 => (4, 4, "dword"),
    Broadcast128_Int32 => (4, 4, "dword"),
    Broadcast128_UInt52 => (8, 8, "qword"),
    Broadcast128_UInt64 => (8, 8, "qword"),
    Broadcast128_Int64 => (8, 8, "qword"),
    Broadcast128_Float32 => (4, 4, "dword"),
    Broadcast128_Float64 => (8, 8, "qword"),
    Broadcast256_UInt32 => (4, 4, "dword"),
    Broadcast256_Int32 => (4, 4, "dword"),
    Broadcast256_UInt52 => (8, 8, "qword"),
    Broadcast256_UInt64 => (8, 8, "qword"),
    Broadcast256_Int64 => (8, 8, "qword"),
    Broadcast256_Float32 => (4, 4, "dword"),
    Broadcast256_Float64 => (8, 8, "qword"),
    Broadcast512_UInt32 => (4, 4, "dword"),
    Broadcast512_Int32 => (4, 4, "dword"),
    Broadcast512_UInt52 => (8, 8, "qword"),
    Broadcast512_UInt64 => (8, 8, "qword"),
    Broadcast512_Int64 => (8, 8, "qword"),
    Broadcast512_Float32 => (4, 4, "dword"),
    Broadcast512_Float64 => (8, 8, "qword"),
}

impl MemorySize {
    pub const fn is_broadcast(self) -> bool {
        matches!(
            self,
            MemorySize::Broadcast128_UInt32
                | MemorySize::Broadcast128_Int32
                | MemorySize::Broadcast128_UInt52
                | MemorySize::Broadcast128_UInt64
                | MemorySize::Broadcast128_Int64
                | MemorySize::Broadcast128_Float32
                | MemorySize::Broadcast128_Float64
                | MemorySize::Broadcast256_UInt32
                | MemorySize::Broadcast256_Int32
                | MemorySize::Broadcast256_UInt52
                | MemorySize::Broadcast256_UInt64
                | MemorySize::Broadcast256_Int64
                | MemorySize::Broadcast256_Float32
                | MemorySize::Broadcast256_Float64
                | MemorySize::Broadcast512_UInt32
                | MemorySize::Broadcast512_Int32
                | MemorySize::Broadcast512_UInt52
                | MemorySize::Broadcast512_UInt64
                | MemorySize::Broadcast512_Int64
                | MemorySize::Broadcast512_Float32
                | MemorySize::Broadcast512_Float64
        )
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Element type of an EVEX form, used to derive its packed and broadcast memory sizes from the
/// vector length.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Element {
    UInt8,
    UInt32,
    Int32,
    UInt52,
    UInt64,
    Int64,
    Float32,
    Float64,
}

impl Element {
    /// Size of one element in bytes.
    pub(crate) const fn size(self) -> u8 {
        match self {
            Element::UInt8 => 1,
            Element::UInt32 | Element::Int32 | Element::Float32 => 4,
            Element::UInt52 | Element::UInt64 | Element::Int64 | Element::Float64 => 8,
        }
    }

    /// Full-vector memory size for a vector of `bytes` bytes.
    pub(crate) const fn packed(self, bytes: u16) -> MemorySize {
        match (bytes, self) {
            (16, Element::UInt8) => MemorySize::Packed128_UInt8,
            (16, Element::UInt32) => MemorySize::Packed128_UInt32,
            (16, Element::Int32) => MemorySize::Packed128_Int32,
            (16, Element::UInt52) => MemorySize::Packed128_UInt52,
            (16, Element::UInt64) => MemorySize::Packed128_UInt64,
            (16, Element::Int64) => MemorySize::Packed128_Int64,
            (16, Element::Float32) => MemorySize::Packed128_Float32,
            (16, Element::Float64) => MemorySize::Packed128_Float64,
            (32, Element::UInt8) => MemorySize::Packed256_UInt8,
            (32, Element::UInt32) => MemorySize::Packed256_UInt32,
            (32, Element::Int32) => MemorySize::Packed256_Int32,
            (32, Element::UInt52) => MemorySize::Packed256_UInt52,
            (32, Element::UInt64) => MemorySize::Packed256_UInt64,
            (32, Element::Int64) => MemorySize::Packed256_Int64,
            (32, Element::Float32) => MemorySize::Packed256_Float32,
            (32, Element::Float64) => MemorySize::Packed256_Float64,
            (64, Element::UInt8) => MemorySize::Packed512_UInt8,
            (64, Element::UInt32) => MemorySize::Packed512_UInt32,
            (64, Element::Int32) => MemorySize::Packed512_Int32,
            (64, Element::UInt52) => MemorySize::Packed512_UInt52,
            (64, Element::UInt64) => MemorySize::Packed512_UInt64,
            (64, Element::Int64) => MemorySize::Packed512_Int64,
            (64, Element::Float32) => MemorySize::Packed512_Float32,
            (64, Element::Float64) => MemorySize::Packed512_Float64,
            _ => MemorySize::Unknown,
        }
    }

    /// Memory size when a single element is broadcast across a vector of `bytes` bytes.
    pub(crate) const fn broadcast(self, bytes: u16) -> MemorySize {
        match (bytes, self) {
            (16, Element::UInt32) => MemorySize::Broadcast128_UInt32,
            (16, Element::Int32) => MemorySize::Broadcast128_Int32,
            (16, Element::UInt52) => MemorySize::Broadcast128_UInt52,
            (16, Element::UInt64) => MemorySize::Broadcast128_UInt64,
            (16, Element::Int64) => MemorySize::Broadcast128_Int64,
            (16, Element::Float32) => MemorySize::Broadcast128_Float32,
            (16, Element::Float64) => MemorySize::Broadcast128_Float64,
            (32, Element::UInt32) => MemorySize::Broadcast256_UInt32,
            (32, Element::Int32) => MemorySize::Broadcast256_Int32,
            (32, Element::UInt52) => MemorySize::Broadcast256_UInt52,
            (32, Element::UInt64) => MemorySize::Broadcast256_UInt64,
            (32, Element::Int64) => MemorySize::Broadcast256_Int64,
            (32, Element::Float32) => MemorySize::Broadcast256_Float32,
            (32, Element::Float64) => MemorySize::Broadcast256_Float64,
            (64, Element::UInt32) => MemorySize::Broadcast512_UInt32,
            (64, Element::Int32) => MemorySize::Broadcast512_Int32,
            (64, Element::UInt52) => MemorySize::Broadcast512_UInt52,
            (64, Element::UInt64) => MemorySize::Broadcast512_UInt64,
            (64, Element::Int64) => MemorySize::Broadcast512_Int64,
            (64, Element::Float32) => MemorySize::Broadcast512_Float32,
            (64, Element::Float64) => MemorySize::Broadcast512_Float64,
            _ => MemorySize::Unknown,
        }
    }

    /// Scalar memory size of one element.
    pub(crate) const fn scalar(self) -> MemorySize {
        match self {
            Element::UInt8 => MemorySize::UInt8,
            Element::UInt32 => MemorySize::UInt32,
            Element::Int32 => MemorySize::Int32,
            Element::UInt52 | Element::UInt64 => MemorySize::UInt64,
            Element::Int64 => MemorySize::Int64,
            Element::Float32 => MemorySize::Float32,
            Element::Float64 => MemorySize::Float64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(MemorySize::Packed128_UInt52.size(), 16);
        assert_eq!(MemorySize::Packed128_UInt52.element_size(), 8);
        assert_eq!(MemorySize::Broadcast256_Float32.size(), 4);
        assert!(MemorySize::Broadcast256_Float32.is_broadcast());
        assert!(!MemorySize::Packed256_Float32.is_broadcast());
        assert_eq!(MemorySize::Unknown.size(), 0);
    }

    #[test]
    fn element_lookup() {
        assert_eq!(Element::UInt52.packed(16), MemorySize::Packed128_UInt52);
        assert_eq!(Element::UInt52.broadcast(16), MemorySize::Broadcast128_UInt52);
        assert_eq!(Element::Int32.broadcast(32), MemorySize::Broadcast256_Int32);
        assert_eq!(Element::Float64.packed(64), MemorySize::Packed512_Float64);
        assert_eq!(Element::UInt8.broadcast(16), MemorySize::Unknown);
    }
}
