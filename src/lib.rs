//! # The snquad crate
//!
//! Discrete-ordinates (SN) angular quadrature sets for deterministic
//! radiation transport
//!
//! ## Installation
//!
//! Direct install from github:
//!
//! ```shell
//! cargo install --git https://github.com/repositony/snquad.git
//! ```
//!
//! ## Overview
//!
//! A quadrature set is a fixed list of directions on the unit sphere, each
//! paired with a weight, such that a weighted sum over the directions
//! approximates an integral over solid angle. Transport sweeps iterate over
//! these directions, so the symmetry, normalisation, and ordering of the set
//! all matter.
//!
//! The sets built here are a product rule:
//! - `N` polar levels from a tabulated Gauss-Legendre rule
//! - `2N` equal azimuthal sectors sampled at their midpoints
//!
//! giving `2 * N * N` directions with weights summing to `4pi`. Supported
//! orders are the even numbers from 2 to 30.
//!
//! | Command line | Description                                            |
//! | ------------ | ------------------------------------------------------ |
//! | `snquad`     | Build, summarise, and write quadrature sets to file    |
//!
//! ## Advanced use
//!
//! The command line tool is purely for convenience. Building a set in Rust is
//! a one-liner, and from there every direction and weight is available
//! through bounds-checked accessors or a plain iterator.
//!
//! ```rust
//! use snquad::Quadrature;
//!
//! // S8 quadrature with 128 directions
//! let quadrature = Quadrature::new(8).unwrap();
//!
//! // sweep over every direction in angle index order
//! for direction in quadrature.directions() {
//!     let [xi, eta, mu] = direction.omega();
//!     // ... do something with xi, eta, mu, and direction.w
//! }
//!
//! // or look up a single angle
//! let mu = quadrature.mu(0).unwrap();
//! ```
//!
//! As an overview:
//! - The [quadrature] module builds and stores the quadrature sets.
//! - The [gauss] module holds the tabulated Gauss-Legendre rules.
//! - The [writers] module writes sets to ASCII, JSON, or binary files.
//! - The [error] module has the only two ways anything can fail.
//!
//! Unsupported orders and out of range angle indices are always reported as
//! errors and never silently replaced with something valid.

// Public facing modules
pub mod error;
pub mod gauss;
pub mod quadrature;
pub mod utils;
pub mod writers;

// Re-exports of useful data structures
#[doc(inline)]
pub use crate::error::QuadratureError;

#[doc(inline)]
pub use crate::quadrature::{Direction, Quadrature};

#[doc(inline)]
pub use crate::gauss::SUPPORTED_ORDERS;
