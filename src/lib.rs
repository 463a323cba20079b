//! Three-component vectors for 3D scene manipulation.
//!
//! # Algebra and projections
//!
//! [Vector] is a plain xyz value type with the usual operators, plus two
//! in-place projections used all over a scene toolkit: onto an axis through
//! the origin, and onto a plane through the origin. Neither requires its
//! argument to be normalized:
//!
//! ```
//! use trivec::Vector;
//!
//! let mut position = Vector::new(1., 2., 3.);
//! position.project_on_axis(Vector::new(1., 0., 0.));
//! assert_eq!(Vector::new(1., 0., 0.), position);
//!
//! let mut position = Vector::new(1., 1., 1.);
//! position.project_on_plane(Vector::new(0., 0., 1.));
//! assert_eq!(Vector::new(1., 1., 0.), position);
//! ```
//!
//! A near-null axis or normal logs a warning through the [log] facade in
//! debug builds, and the projection still executes. These are hot-path
//! calls, so they never fail; feed them a degenerate argument and you get
//! degenerate components back.
//!
//! # Element serialization
//!
//! Vectors round-trip through [Element], a generic attributed node of a
//! tree-structured markup document, as `<anyTagName x=".." y=".." z=".." />`:
//!
//! ```
//! use trivec::{Element, Vector};
//!
//! let element = Vector::new(1.5, -2.25, 0.).to_element("pos");
//! assert_eq!("<pos x=\"1.5\" y=\"-2.25\" z=\"0\" />", element.to_string());
//! assert_eq!(Vector::new(1.5, -2.25, 0.), Vector::from_element(&element));
//! ```
//!
//! Reading is resilient: an attribute that is missing or not a number falls
//! back to 0.0 for that component alone, and construction never fails.
//!
//! # Stream formatting
//!
//! The text form is tab-separated, and parses back:
//!
//! ```
//! use trivec::Vector;
//! let vector = Vector::new(1., -2., 3.5);
//! assert_eq!("1\t-2\t3.5", vector.to_string());
//! assert_eq!(vector, "1\t-2\t3.5".parse().unwrap());
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]

mod element;
mod error;
mod vector;

pub use crate::element::Element;
pub use crate::error::Error;
pub use crate::vector::Vector;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
