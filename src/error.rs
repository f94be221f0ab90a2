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

//! The error module contains the `Error` returned by the local tangent plane
//! operations.

use thiserror::Error;

/// The reasons a local tangent plane operation can fail.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// The reference latitude is not within [-π/2, π/2].
    #[error("reference latitude {latitude} radians is outside [-pi/2, pi/2]")]
    OutOfRange {
        /// The rejected latitude in radians.
        latitude: f64,
    },

    /// The ellipsoid axes are not finite with 0 < polar <= equatorial radius.
    #[error("invalid ellipsoid, equatorial radius {a} m, polar radius {b} m")]
    InvalidEllipsoid {
        /// The Semimajor axis in metres.
        a: f64,
        /// The Semiminor axis in metres.
        b: f64,
    },

    /// A query was made before a reference point was set.
    #[error("the transformer has no reference point")]
    NotInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::OutOfRange { latitude: 2.0 };
        assert_eq!(
            "reference latitude 2 radians is outside [-pi/2, pi/2]",
            error.to_string()
        );
        assert_eq!(
            "the transformer has no reference point",
            Error::NotInitialized.to_string()
        );
        assert_eq!(
            "invalid ellipsoid, equatorial radius 6378137 m, polar radius 0 m",
            Error::InvalidEllipsoid {
                a: 6_378_137.0,
                b: 0.0
            }
            .to_string()
        );
    }

    #[test]
    fn test_error_traits() {
        let error = Error::NotInitialized;
        let error_clone = error;
        assert!(error_clone == error);
        assert!(Error::OutOfRange { latitude: 2.0 } != Error::NotInitialized);

        println!("Error: {:?}", error);
    }
}
