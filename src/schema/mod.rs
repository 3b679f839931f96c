//! Primitive factories.
//!
//! [`Schema`] is the entry point for building validators. Every factory
//! returns a plain [`Validator`](crate::Validator) with no refinements
//! applied; constraints and combinators are chained onto it.
//!
//! # Example
//!
//! ```rust
//! use conform::{Schema, Shape, Value};
//! use serde_json::json;
//!
//! let order = Schema::object(
//!     Shape::new()
//!         .field("id", Schema::string().pattern(r"^ord_\w+$").unwrap())
//!         .field("items", Schema::array(Schema::number().positive()).not_empty())
//!         .field("note", Schema::string().optional()),
//! );
//!
//! assert!(order.check(&Value::from(json!({"id": "ord_1", "items": [2]}))).is_ok());
//!
//! let error = order
//!     .check(&Value::from(json!({"id": "ord_1", "items": [2, -1]})))
//!     .unwrap_err();
//! assert_eq!(error.path.to_string(), "items[1]");
//! ```

mod array;
mod date;
mod lazy;
mod object;
mod primitives;

pub use date::parse_date;
pub use object::Shape;

/// Namespace for validator factories.
///
/// `Schema` has no values; each associated function builds a fresh
/// validator for one kind of input:
///
/// - scalars: [`string`](Schema::string), [`number`](Schema::number),
///   [`boolean`](Schema::boolean), [`big_int`](Schema::big_int),
///   [`symbol`](Schema::symbol)
/// - containers: [`object`](Schema::object),
///   [`object_loose`](Schema::object_loose), [`record`](Schema::record),
///   [`array`](Schema::array), [`set`](Schema::set), [`map`](Schema::map),
///   [`tuple`](Schema::tuple)
/// - opaque kinds: [`date`](Schema::date), [`regexp`](Schema::regexp),
///   [`func`](Schema::func), [`buffer`](Schema::buffer),
///   [`typed_buffer`](Schema::typed_buffer), [`instance`](Schema::instance)
/// - the rest: [`unknown`](Schema::unknown), [`enums`](Schema::enums),
///   [`fail`](Schema::fail), [`union`](Schema::union),
///   [`lazy`](Schema::lazy)
pub struct Schema;
