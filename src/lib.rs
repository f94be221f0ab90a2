// Copyright (c) 2026 The local-tangent-plane Authors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! local-tangent-plane
//!
//! A library for converting GPS positions into metres on a flat plane about a
//! reference position, and back again.
//!
//! A ground robot following a route reasons about nearby GPS fixes in metres
//! rather than degrees. Over short ranges, tens of kilometres, the curved
//! surface of the earth can be approximated by the plane tangent to the
//! ellipsoid at a reference position.
//!
//! ## Design
//!
//! An `Ellipsoid` of revolution is defined by its equatorial and polar radii.
//! At the reference latitude the library derives two scale factors from the
//! ellipsoid's radii of curvature, in metres per radian:
//!
//! - the meridian scale, applied to longitudes;
//! - the parallel scale, applied to latitudes.
//!
//! A `LocalTangentPlane` holds the reference position and its scale factors.
//! It can `project` positions onto the plane, `reproject` them back and
//! calculate the `distance` of a position from the reference position.
//!
//! A `Transformer` is either `Uninitialized` or `Initialized` with a
//! `LocalTangentPlane`, so that a host application can create it before its
//! first GPS fix arrives. Its queries fail with `Error::NotInitialized` until
//! it has a reference position.
//!
//! Scale factors are calculated with `f64`, planar coordinates are `f32`
//! metres.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`
//!   positions in degrees;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.
//!
//! ## Example
//!
//! ```
//! use local_tangent_plane::*;
//!
//! # fn main() -> Result<(), Error> {
//! let shenzhen = LatLong::new(Degrees(22.55329), Degrees(113.88308));
//! let guangzhou = LatLong::new(Degrees(23.15792), Degrees(113.27324));
//!
//! let mut transformer = Transformer::new();
//! transformer.initialize_lat_long(&shenzhen, Metres(10.0))?;
//!
//! let (east, north) = transformer.distance_to(&guangzhou)?;
//! assert!(east < 0.0);
//! assert!(0.0 < north);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ellipsoid;
pub mod error;
pub mod transform;

pub use angle_sc::{Degrees, Radians, Validate};
pub use error::Error;
pub use icao_units::si::Metres;
pub use transform::{LocalTangentPlane, Transformer};
pub use unit_sphere::LatLong;

use lazy_static::lazy_static;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
}

impl Validate for Ellipsoid {
    /// Test whether an `Ellipsoid` is valid.
    /// Whether 0 < `b` <= `a` and both are finite.
    fn is_valid(&self) -> bool {
        self.a.0.is_finite() && 0.0 < self.b.0 && self.b.0 <= self.a.0
    }
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis (equatorial radius) of the `Ellipsoid`.
    /// * `b` - the Semiminor axis (polar radius) of the `Ellipsoid`.
    #[must_use]
    pub fn new(a: Metres, b: Metres) -> Self {
        let f = ellipsoid::calculate_flattening(a, b);
        Self {
            a,
            b,
            f,
            e_2: ellipsoid::calculate_sq_eccentricity(f),
        }
    }

    /// Constructor from the Semimajor axis and flattening.
    /// * `a` - the Semimajor axis (equatorial radius) of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn from_flattening(a: Metres, f: f64) -> Self {
        Self {
            a,
            b: ellipsoid::calculate_minor_axis(a, f),
            f,
            e_2: ellipsoid::calculate_sq_eccentricity(f),
        }
    }

    /// Construct the `Ellipsoid` used by the navigation robot.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(ellipsoid::reference::A, ellipsoid::reference::B)
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::from_flattening(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The radius of curvature in the prime vertical at a latitude.
    /// * `lat` - the geodetic latitude.
    #[must_use]
    pub fn prime_vertical_radius(&self, lat: Radians) -> Metres {
        let sq_denominator = ellipsoid::calculate_sq_denominator(self.e_2, libm::sin(lat.0));
        ellipsoid::calculate_prime_vertical_radius(self.a, sq_denominator)
    }

    /// The radius of curvature in the meridian at a latitude.
    /// * `lat` - the geodetic latitude.
    #[must_use]
    pub fn meridian_radius(&self, lat: Radians) -> Metres {
        let sq_denominator = ellipsoid::calculate_sq_denominator(self.e_2, libm::sin(lat.0));
        let prime_vertical = ellipsoid::calculate_prime_vertical_radius(self.a, sq_denominator);
        ellipsoid::calculate_meridian_radius(prime_vertical, self.e_2, sq_denominator)
    }
}

lazy_static! {
    /// A static instance of the navigation robot's `Ellipsoid`.
    pub static ref REFERENCE_ELLIPSOID: Ellipsoid = Ellipsoid::reference();
}
