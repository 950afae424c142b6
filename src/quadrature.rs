//! Product Gauss-Legendre/midpoint quadrature on the unit sphere
//!
//! # Construction
//!
//! For an SN order `N` the sphere is split into `N` polar levels, taken
//! directly from the Gauss-Legendre table, and `2N` equal azimuthal sectors
//! sampled at their midpoints. Every (level, sector) pair gives one direction,
//! for a total of `2 * N * N` angles.
//!
//! ```text
//! phi    = (2pi / 2N) * (k + 0.5)
//! radius = sqrt(1 - node[i]^2)
//!
//! xi  = radius * cos(phi)
//! eta = radius * sin(phi)
//! mu  = node[i]
//! w   = weight[i] * (2pi / 2N)
//! ```
//!
//! Angles are stored row-major by polar level, so the angle index of level
//! `i` and sector `k` is always `i * 2N + k`. Downstream code is free to rely
//! on this ordering.
//!
//! # Example
//!
//! ```rust
//! # use snquad::Quadrature;
//! let quadrature = Quadrature::new(2).unwrap();
//! assert_eq!(quadrature.num_angles(), 8);
//!
//! // weights integrate the full sphere
//! let total: f64 = quadrature.directions().map(|d| d.w).sum();
//! assert!((total - 4.0 * std::f64::consts::PI).abs() < 1e-10);
//! ```

// standard library
use std::f64::consts::PI;

// internal modules
use crate::error::{QuadratureError, Result};
use crate::gauss::gauss_legendre;
use crate::utils::*;

// external crates
use itertools::izip;
use log::{debug, trace};
use serde::Serialize;

/// A complete discrete-ordinates angular quadrature set
///
/// Built once for a single SN order and read-only afterwards. The direction
/// cosines and weights are kept as parallel vectors indexed by angle index.
///
/// Every indexed accessor is bounds-checked and returns
/// [QuadratureError::IndexOutOfRange] rather than clamping. For sweeping over
/// every angle, [Quadrature::directions()] avoids the checks entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quadrature {
    /// SN order the set was built from
    order: usize,
    /// Total number of angles, always `2 * order * order`
    num_angles: usize,
    /// First direction cosine
    xi: Vec<f64>,
    /// Second direction cosine
    eta: Vec<f64>,
    /// Third direction cosine, the polar cosine
    mu: Vec<f64>,
    /// Integration weight
    w: Vec<f64>,
}

impl Quadrature {
    /// Build the quadrature set for an SN order
    ///
    /// The order must be one of the tabulated even orders 2 to 30, see
    /// [SUPPORTED_ORDERS](crate::gauss::SUPPORTED_ORDERS). Anything else fails
    /// with [QuadratureError::UnsupportedOrder] and nothing is built.
    ///
    /// ```rust
    /// # use snquad::Quadrature;
    /// # use snquad::error::QuadratureError;
    /// let quadrature = Quadrature::new(8).unwrap();
    /// assert_eq!(quadrature.num_angles(), 128);
    ///
    /// assert_eq!(Quadrature::new(7), Err(QuadratureError::UnsupportedOrder(7)));
    /// ```
    pub fn new(order: usize) -> Result<Self> {
        let rule = gauss_legendre(order)?;
        debug!("Building S{order} quadrature");

        let sectors = 2 * order;
        let num_angles = sectors * order;
        let sector_width = 2.0 * PI / sectors as f64;

        let mut xi = Vec::with_capacity(num_angles);
        let mut eta = Vec::with_capacity(num_angles);
        let mut mu = Vec::with_capacity(num_angles);
        let mut w = Vec::with_capacity(num_angles);

        // push order reproduces index = level * sectors + sector
        for (level, (mu0, weight)) in rule.levels().enumerate() {
            trace!("Level {level}: mu = {mu0}, weight = {weight}");
            let radius = (1.0 - mu0 * mu0).sqrt();

            for sector in 0..sectors {
                let phi = sector_width * (sector as f64 + 0.5);
                xi.push(radius * phi.cos());
                eta.push(radius * phi.sin());
                mu.push(mu0);
                w.push(weight * sector_width);
            }
        }

        debug!("S{order} quadrature complete with {num_angles} angles");
        Ok(Self {
            order,
            num_angles,
            xi,
            eta,
            mu,
            w,
        })
    }

    /// SN order the set was built from
    pub fn order(&self) -> usize {
        self.order
    }

    /// Total number of angles, `2 * order * order`
    pub fn num_angles(&self) -> usize {
        debug_assert!(self.num_angles > 0);
        self.num_angles
    }

    /// First direction cosine of an angle
    pub fn xi(&self, angle: usize) -> Result<f64> {
        self.check_angle(angle)?;
        Ok(self.xi[angle])
    }

    /// Second direction cosine of an angle
    pub fn eta(&self, angle: usize) -> Result<f64> {
        self.check_angle(angle)?;
        Ok(self.eta[angle])
    }

    /// Third direction cosine of an angle
    ///
    /// This is always bit-identical to the Gauss-Legendre node of the polar
    /// level the angle belongs to.
    pub fn mu(&self, angle: usize) -> Result<f64> {
        self.check_angle(angle)?;
        Ok(self.mu[angle])
    }

    /// All three direction cosines of an angle as `[xi, eta, mu]`
    ///
    /// ```rust
    /// # use snquad::Quadrature;
    /// let quadrature = Quadrature::new(2).unwrap();
    /// let [xi, eta, mu] = quadrature.omega(0).unwrap();
    /// assert!((xi * xi + eta * eta + mu * mu - 1.0).abs() < 1e-12);
    ///
    /// assert!(quadrature.omega(8).is_err());
    /// ```
    pub fn omega(&self, angle: usize) -> Result<[f64; 3]> {
        self.check_angle(angle)?;
        Ok([self.xi[angle], self.eta[angle], self.mu[angle]])
    }

    /// Integration weight of an angle
    pub fn weight(&self, angle: usize) -> Result<f64> {
        self.check_angle(angle)?;
        Ok(self.w[angle])
    }

    /// Full [Direction] for an angle
    pub fn direction(&self, angle: usize) -> Result<Direction> {
        self.check_angle(angle)?;
        Ok(Direction {
            index: angle,
            xi: self.xi[angle],
            eta: self.eta[angle],
            mu: self.mu[angle],
            w: self.w[angle],
        })
    }

    /// Iterate over every direction in angle index order
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        izip!(&self.xi, &self.eta, &self.mu, &self.w)
            .enumerate()
            .map(|(index, (xi, eta, mu, w))| Direction {
                index,
                xi: *xi,
                eta: *eta,
                mu: *mu,
                w: *w,
            })
    }

    /// Read-only view of every `xi` in angle index order
    pub fn xi_values(&self) -> &[f64] {
        &self.xi
    }

    /// Read-only view of every `eta` in angle index order
    pub fn eta_values(&self) -> &[f64] {
        &self.eta
    }

    /// Read-only view of every `mu` in angle index order
    pub fn mu_values(&self) -> &[f64] {
        &self.mu
    }

    /// Read-only view of every weight in angle index order
    pub fn weight_values(&self) -> &[f64] {
        &self.w
    }

    /// Sum of all weights, which should be 4pi for the full sphere
    pub fn weight_sum(&self) -> f64 {
        self.w.iter().sum()
    }

    /// Largest deviation of any direction from unit length
    ///
    /// Measured as `|xi^2 + eta^2 + mu^2 - 1|`, so values around 1e-16 are
    /// expected.
    pub fn max_norm_error(&self) -> f64 {
        self.directions()
            .map(|d| (d.norm_squared() - 1.0).abs())
            .fold(0.0, f64::max)
    }

    fn check_angle(&self, angle: usize) -> Result<()> {
        if angle < self.num_angles {
            Ok(())
        } else {
            Err(QuadratureError::IndexOutOfRange {
                index: angle,
                num_angles: self.num_angles,
            })
        }
    }
}

impl std::fmt::Display for Quadrature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Quadrature {\n".to_string();
        s += &f!("    order: S{}\n", self.order);
        s += &f!(
            "    angles: {} ({} levels x {} sectors)\n",
            self.num_angles,
            self.order,
            2 * self.order
        );
        s += &f!(
            "    weight sum: {} (4pi = {})\n}}",
            self.weight_sum().sci(10, 2),
            (4.0 * PI).sci(10, 2)
        );
        write!(f, "{}", s)
    }
}

/// A single direction and its weight
///
/// Convenience bundle of everything stored for one angle index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Direction {
    /// Angle index in the parent [Quadrature]
    pub index: usize,
    /// First direction cosine
    pub xi: f64,
    /// Second direction cosine
    pub eta: f64,
    /// Third direction cosine
    pub mu: f64,
    /// Integration weight
    pub w: f64,
}

impl Direction {
    /// Direction cosines as `[xi, eta, mu]`
    pub fn omega(&self) -> [f64; 3] {
        [self.xi, self.eta, self.mu]
    }

    /// Squared length of the direction vector
    pub fn norm_squared(&self) -> f64 {
        self.xi * self.xi + self.eta * self.eta + self.mu * self.mu
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<7}{:>19}{:>19}{:>19}{:>19}",
            self.index,
            self.xi.sci(10, 2),
            self.eta.sci(10, 2),
            self.mu.sci(10, 2),
            self.w.sci(10, 2)
        )
    }
}
