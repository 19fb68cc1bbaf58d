//! Validator constructors and combinators.
//!
//! Leaves check a single kind ([`num`], [`str`], [`bool`]) or a single
//! literal ([`value`], [`undefined`]). Combinators compose them:
//! [`props`] for objects, [`array`] for sequences and [`or`] for unions.
//! Combinator members may be [`Provider`](crate::Provider)s, resolved only
//! when evaluation reaches them, which is what allows a shape to refer to
//! itself.
//!
//! # Example
//!
//! ```rust
//! use runtype::{array, num, optional, props, str, Property};
//! use serde_json::json;
//!
//! let order = props([
//!     Property::field("id", num()),
//!     Property::field("note", optional(str())),
//!     Property::field("lines", array(props([Property::field("sku", str())]))),
//! ]);
//!
//! assert!(order.is_valid(&json!({"id": 7, "lines": [{"sku": "A-1"}]})));
//! ```

mod array;
mod primitive;
mod props;
mod sum;
mod traits;

pub use array::{array, ArrayValidator};
pub use primitive::{bool, num, str, undefined, value, KindValidator, LiteralValidator};
pub use props::{props, Accessor, Property, PropsValidator};
pub use sum::{optional, or, UnionValidator};
pub use traits::{Validator, ValidatorOrProvider, ValueValidator};
