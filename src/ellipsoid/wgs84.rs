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

//! The WGS 84 ellipsoid used by GPS receivers.
//!
//! The primary parameters are from Tab. 3-1 of the ICAO WGS 84 Implementation
//! Manual, the Semiminor axis is derived from them.

use crate::Metres;

/// The equatorial radius in metres.
pub const A: Metres = Metres(6_378_137.0);

/// The flattening ratio.
pub const F: f64 = 1.0 / 298.257_223_563;

/// The polar radius in metres, `A * (1 - F)`.
pub const B: Metres = Metres(6_356_752.314_245_179);
