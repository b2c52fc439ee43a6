#[doc(inline)]
pub use pair_fmt::{self, *};
