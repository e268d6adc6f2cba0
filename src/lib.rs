#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod anim;
pub mod color;
pub mod curve;
pub mod render;
pub mod session;
pub mod surface;
pub mod svg;
pub mod trace;

pub use crate::anim::{Animation, Phase};
pub use crate::curve::BezierCurve;
pub use crate::session::{InputEvent, Session};
