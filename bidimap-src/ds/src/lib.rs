#[doc(inline)]
pub use linked_bst::{self, *};
#[doc(inline)]
pub use tree_bimap::{self, *};
