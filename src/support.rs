/// Marker trait for types that can be outcomes of a distribution.
///
/// Outcomes are cloned into fresh accumulators by every combinator and
/// ordered so that iteration and rendering are deterministic.
pub trait Support: Clone + Ord + std::fmt::Debug {}

impl Support for bool {}
impl Support for char {}
impl Support for i8 {}
impl Support for i16 {}
impl Support for i32 {}
impl Support for i64 {}
impl Support for u8 {}
impl Support for u16 {}
impl Support for u32 {}
impl Support for u64 {}
impl Support for usize {}
impl Support for String {}
impl Support for &'static str {}
impl<A: Support, B: Support> Support for (A, B) {}
