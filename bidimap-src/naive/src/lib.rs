#[doc(inline)]
pub use vec_bimap::{self, *};
