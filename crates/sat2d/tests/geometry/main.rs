#[macro_use]
extern crate approx;

mod circle_circle;
mod polygon_circle;
mod polygon_polygon;
mod resolution;
