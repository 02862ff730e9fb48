/*!
sat2d
========

**sat2d** is a 2-dimensional narrow-phase collision detection library
written with the rust programming language.

It implements the Separating Axis Theorem for convex polygons and circles:
given two shapes it tells whether they overlap and, if they do, returns the
minimum translation (a unit normal and a penetration depth) that separates
them, together with containment flags.

```
use sat2d::math::Vector;
use sat2d::query::Sat;
use sat2d::shape::Polygon;

let square = Polygon::new_box(40.0, 40.0, Vector::new(0.0, 0.0));
let triangle = Polygon::new(
    vec![Vector::new(0.0, 0.0), Vector::new(30.0, 0.0), Vector::new(0.0, 30.0)],
    Vector::new(30.0, 0.0),
)
.unwrap();

let collision = Sat.intersects(&square, &triangle).unwrap();
assert_eq!(collision.overlap, 10.0);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod shape;
