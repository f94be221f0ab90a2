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

//! The ellipsoid module contains functions for deriving the shape of an
//! ellipsoid from its Semimajor (equatorial) and Semiminor (polar) axes and
//! for calculating its radii of curvature at a given latitude.

#![allow(clippy::suboptimal_flops)]

pub mod reference;
pub mod wgs84;

use crate::Metres;

/// Calculate the flattening ratio of an ellipsoid from its axes.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
/// # Examples
/// ```
/// use local_tangent_plane::ellipsoid::{calculate_flattening, reference};
///
/// let f = calculate_flattening(reference::A, reference::B);
/// assert!(0.00335 < f && f < 0.00336);
/// ```
#[must_use]
pub fn calculate_flattening(a: Metres, b: Metres) -> f64 {
    (a.0 - b.0) / a.0
}

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use local_tangent_plane::Metres;
/// use local_tangent_plane::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use local_tangent_plane::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the denominator of the prime vertical radius of
/// curvature: `1 - e^2 sin^2(lat)`.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `sin_lat` - the sine of the geodetic latitude.
#[must_use]
pub fn calculate_sq_denominator(e_2: f64, sin_lat: f64) -> f64 {
    1.0 - e_2 * sin_lat * sin_lat
}

/// Calculate the radius of curvature in the prime vertical.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `sq_denominator` - see `calculate_sq_denominator`.
#[must_use]
pub fn calculate_prime_vertical_radius(a: Metres, sq_denominator: f64) -> Metres {
    Metres(a.0 / libm::sqrt(sq_denominator))
}

/// Calculate the radius of curvature in the meridian from the prime vertical
/// radius of curvature.
/// * `prime_vertical` - the radius of curvature in the prime vertical.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `sq_denominator` - see `calculate_sq_denominator`.
#[must_use]
pub fn calculate_meridian_radius(prime_vertical: Metres, e_2: f64, sq_denominator: f64) -> Metres {
    Metres(prime_vertical.0 * (1.0 - e_2) / sq_denominator)
}
