//! Galois field GF(p^m) arithmetic
//!
//! ## Representation
//!
//! Elements are coefficient vectors `[c0, c1, ..., c(m-1)]` with every
//! `ci` in `[0, p)`, read as the polynomial `c0 + c1·x + ... mod g(x)`.
//! For prime fields (`m = 1`) that is just an integer mod `p`.
//!
//! Each element also has a canonical integer index `Σ ci·p^i`, which orders
//! the field for primitive-element search and keys the discrete-log table.
//!
//! ## Log tables
//!
//! When a primitive element `α` is found at construction time the field
//! stores `antilog[i] = α^i` and its inverse `log`. Multiplication and
//! division of nonzero elements then cost two lookups and an addition mod
//! `q - 1`. Without tables, products are computed by polynomial
//! multiplication followed by reduction mod `g`, and division goes through
//! `b^(q-2)`.
//!
//! ```
//! use gfrs::galois::Field;
//!
//! let f49 = Field::new(7, 2, Some(&[1, 0, 1]), true).unwrap();
//! let a = f49.element([1, 3]).unwrap();
//! let b = f49.element([3, 4]).unwrap();
//! assert_eq!(&a * &b, f49.element([5, 6]).unwrap());
//! ```

mod element;
mod field;
mod tables;

pub use element::{Element, ElementValue};
pub use field::{Field, FieldBuilder};
