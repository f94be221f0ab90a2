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

//! The transform module converts geodetic positions to and from a local
//! tangent plane centred on a reference position.
//!
//! The plane is defined by two scale factors derived from the `Ellipsoid` at
//! the reference latitude:
//!
//! - the meridian scale, `Rv (1 - e^2) / w^2 + h`, applied to longitudes;
//! - the parallel scale, `(Rv + h) cos(lat)`, applied to latitudes.
//!
//! Where `Rv` is the radius of curvature in the prime vertical,
//! `w^2 = 1 - e^2 sin^2(lat)` and `h` is the altitude of the reference position.
//!
//! The linearisation is only accurate over short ranges, tens of kilometres
//! from the reference position.

#![allow(clippy::suboptimal_flops)]

use crate::{ellipsoid, Ellipsoid, Error, LatLong, Metres, REFERENCE_ELLIPSOID};
use angle_sc::{Radians, Validate};
use core::f64::consts::FRAC_PI_2;

/// Convert a `LatLong` in degrees into longitude and latitude in radians.
fn to_lon_lat_radians(position: &LatLong) -> (Radians, Radians) {
    (
        Radians(position.lon().0.to_radians()),
        Radians(position.lat().0.to_radians()),
    )
}

/// Whether a latitude is within [-π/2, π/2], NaN is not.
fn is_valid_latitude(lat: Radians) -> bool {
    (-FRAC_PI_2..=FRAC_PI_2).contains(&lat.0)
}

/// A local tangent plane about a reference position.
///
/// It is the initialised state of a `Transformer` and may be used directly
/// where the reference position is known when the plane is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalTangentPlane {
    /// The reference longitude.
    lon: Radians,
    /// The reference latitude.
    lat: Radians,
    /// Metres per radian of longitude, "mue".
    meridian_scale: f64,
    /// Metres per radian of latitude, "lambada".
    parallel_scale: f64,
}

impl Validate for LocalTangentPlane {
    /// Test whether a `LocalTangentPlane` is valid.
    /// Whether -90° <= `latitude` <= 90° and both scales are finite and
    /// not negative.
    fn is_valid(&self) -> bool {
        is_valid_latitude(self.lat)
            && self.meridian_scale.is_finite()
            && self.parallel_scale.is_finite()
            && 0.0 <= self.meridian_scale
            && 0.0 <= self.parallel_scale
    }
}

impl LocalTangentPlane {
    /// Construct a `LocalTangentPlane` about a reference position.
    /// * `lon`, `lat` - the reference longitude and latitude.
    /// * `altitude` - the reference height above the `ellipsoid`.
    /// * `ellipsoid` - the `Ellipsoid` to derive the scale factors from.
    ///
    /// # Errors
    ///
    /// `Error::InvalidEllipsoid` if `ellipsoid` is not valid,
    /// `Error::OutOfRange` if `lat` is not within [-π/2, π/2].
    ///
    /// # Examples
    /// ```
    /// use local_tangent_plane::*;
    ///
    /// # fn main() -> Result<(), Error> {
    /// let plane = LocalTangentPlane::new(
    ///     Radians(0.0),
    ///     Radians(0.0),
    ///     Metres(0.0),
    ///     &Ellipsoid::reference(),
    /// )?;
    /// assert_eq!(6_378_137.0, plane.parallel_scale());
    ///
    /// let too_far_north = LocalTangentPlane::new(
    ///     Radians(0.0),
    ///     Radians(1.6),
    ///     Metres(0.0),
    ///     &Ellipsoid::reference(),
    /// );
    /// assert_eq!(Err(Error::OutOfRange { latitude: 1.6 }), too_far_north);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        lon: Radians,
        lat: Radians,
        altitude: Metres,
        ellipsoid: &Ellipsoid,
    ) -> Result<Self, Error> {
        if !ellipsoid.is_valid() {
            log::debug!(
                "rejected ellipsoid: a: {} b: {} metres",
                ellipsoid.a().0,
                ellipsoid.b().0
            );
            return Err(Error::InvalidEllipsoid {
                a: ellipsoid.a().0,
                b: ellipsoid.b().0,
            });
        }
        if !is_valid_latitude(lat) {
            log::debug!("rejected reference latitude: {} radians", lat.0);
            return Err(Error::OutOfRange { latitude: lat.0 });
        }

        let sq_denominator = ellipsoid::calculate_sq_denominator(ellipsoid.e_2(), libm::sin(lat.0));
        let prime_vertical = ellipsoid::calculate_prime_vertical_radius(ellipsoid.a(), sq_denominator);

        let parallel_scale = (prime_vertical.0 + altitude.0) * libm::cos(lat.0);
        let meridian_scale =
            ellipsoid::calculate_meridian_radius(prime_vertical, ellipsoid.e_2(), sq_denominator).0
                + altitude.0;

        log::debug!(
            "local tangent plane at lon: {} lat: {} radians, meridian scale: {:.3} parallel scale: {:.3}",
            lon.0,
            lat.0,
            meridian_scale,
            parallel_scale
        );

        Ok(Self {
            lon,
            lat,
            meridian_scale,
            parallel_scale,
        })
    }

    /// Construct a `LocalTangentPlane` about a reference position in degrees.
    /// * `position` - the reference position.
    /// * `altitude` - the reference height above the `ellipsoid`.
    /// * `ellipsoid` - the `Ellipsoid` to derive the scale factors from.
    ///
    /// # Errors
    ///
    /// `Error::InvalidEllipsoid` if `ellipsoid` is not valid,
    /// `Error::OutOfRange` if the latitude of `position` is not within ±90°.
    pub fn from_lat_long(
        position: &LatLong,
        altitude: Metres,
        ellipsoid: &Ellipsoid,
    ) -> Result<Self, Error> {
        let (lon, lat) = to_lon_lat_radians(position);
        Self::new(lon, lat, altitude, ellipsoid)
    }

    /// Accessor for the reference longitude.
    #[must_use]
    pub const fn longitude(&self) -> Radians {
        self.lon
    }

    /// Accessor for the reference latitude.
    #[must_use]
    pub const fn latitude(&self) -> Radians {
        self.lat
    }

    /// Metres per radian of longitude near the reference position.
    #[must_use]
    pub const fn meridian_scale(&self) -> f64 {
        self.meridian_scale
    }

    /// Metres per radian of latitude near the reference position.
    #[must_use]
    pub const fn parallel_scale(&self) -> f64 {
        self.parallel_scale
    }

    /// Scale a longitude and latitude onto the plane.
    ///
    /// Note: the result is not relative to the reference position, subtract
    /// `origin` or use `distance` for that.
    /// * `lon`, `lat` - the longitude and latitude.
    ///
    /// returns the x and y coordinates in metres.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn project(&self, lon: Radians, lat: Radians) -> (f32, f32) {
        (
            (self.meridian_scale * lon.0) as f32,
            (self.parallel_scale * lat.0) as f32,
        )
    }

    /// The inverse of `project`.
    /// * `x`, `y` - the coordinates in metres.
    ///
    /// returns the longitude and latitude.
    #[must_use]
    pub fn reproject(&self, x: f32, y: f32) -> (Radians, Radians) {
        (
            Radians(f64::from(x) / self.meridian_scale),
            Radians(f64::from(y) / self.parallel_scale),
        )
    }

    /// The projection of the reference position.
    #[must_use]
    pub fn origin(&self) -> (f32, f32) {
        self.project(self.lon, self.lat)
    }

    /// Calculate the displacement of a position from the reference position.
    /// * `lon`, `lat` - the longitude and latitude of the position.
    ///
    /// returns the East and North displacements in metres.
    ///
    /// # Examples
    /// ```
    /// use local_tangent_plane::*;
    ///
    /// # fn main() -> Result<(), Error> {
    /// let plane = LocalTangentPlane::new(
    ///     Radians(0.5),
    ///     Radians(0.25),
    ///     Metres(10.0),
    ///     &REFERENCE_ELLIPSOID,
    /// )?;
    /// assert_eq!((0.0, 0.0), plane.distance(Radians(0.5), Radians(0.25)));
    ///
    /// let (dx, dy) = plane.distance(Radians(0.4999), Radians(0.2501));
    /// assert!(dx < 0.0);
    /// assert!(0.0 < dy);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn distance(&self, lon: Radians, lat: Radians) -> (f32, f32) {
        let d_lon = lon.0 - self.lon.0;
        let d_lat = lat.0 - self.lat.0;
        (
            (d_lon * self.meridian_scale) as f32,
            (d_lat * self.parallel_scale) as f32,
        )
    }

    /// Scale a position in degrees onto the plane, see `project`.
    /// * `position` - the position.
    #[must_use]
    pub fn project_lat_long(&self, position: &LatLong) -> (f32, f32) {
        let (lon, lat) = to_lon_lat_radians(position);
        self.project(lon, lat)
    }

    /// Calculate the displacement of a position in degrees from the
    /// reference position, see `distance`.
    /// * `position` - the position.
    #[must_use]
    pub fn distance_to(&self, position: &LatLong) -> (f32, f32) {
        let (lon, lat) = to_lon_lat_radians(position);
        self.distance(lon, lat)
    }
}

/// A converter between geodetic positions and a local tangent plane which
/// may not have a reference position yet.
///
/// A `Transformer` starts `Uninitialized`, every query on it fails with
/// `Error::NotInitialized` until `initialize` succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Transformer {
    /// No reference position has been set.
    #[default]
    Uninitialized,
    /// The plane about the current reference position.
    Initialized(LocalTangentPlane),
}

impl From<LocalTangentPlane> for Transformer {
    fn from(plane: LocalTangentPlane) -> Self {
        Self::Initialized(plane)
    }
}

impl Transformer {
    /// Construct an `Uninitialized` `Transformer`.
    #[must_use]
    pub const fn new() -> Self {
        Self::Uninitialized
    }

    /// Set the reference position on the `REFERENCE_ELLIPSOID`.
    /// * `lon`, `lat` - the reference longitude and latitude.
    /// * `altitude` - the reference height above the ellipsoid.
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` if `lat` is not within [-π/2, π/2], the
    /// `Transformer` is unchanged.
    pub fn initialize(
        &mut self,
        lon: Radians,
        lat: Radians,
        altitude: Metres,
    ) -> Result<&LocalTangentPlane, Error> {
        self.initialize_with_ellipsoid(lon, lat, altitude, &REFERENCE_ELLIPSOID)
    }

    /// Set the reference position on the given `Ellipsoid`.
    /// * `lon`, `lat` - the reference longitude and latitude.
    /// * `altitude` - the reference height above the `ellipsoid`.
    /// * `ellipsoid` - the `Ellipsoid`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidEllipsoid` if `ellipsoid` is not valid or
    /// `Error::OutOfRange` if `lat` is not within [-π/2, π/2], the
    /// `Transformer` is unchanged.
    pub fn initialize_with_ellipsoid(
        &mut self,
        lon: Radians,
        lat: Radians,
        altitude: Metres,
        ellipsoid: &Ellipsoid,
    ) -> Result<&LocalTangentPlane, Error> {
        let plane = LocalTangentPlane::new(lon, lat, altitude, ellipsoid)?;
        *self = Self::Initialized(plane);
        self.checked_plane()
    }

    /// Set the reference position in degrees on the `REFERENCE_ELLIPSOID`.
    /// * `position` - the reference position.
    /// * `altitude` - the reference height above the ellipsoid.
    ///
    /// # Errors
    ///
    /// `Error::OutOfRange` if the latitude of `position` is not within ±90°,
    /// the `Transformer` is unchanged.
    pub fn initialize_lat_long(
        &mut self,
        position: &LatLong,
        altitude: Metres,
    ) -> Result<&LocalTangentPlane, Error> {
        let (lon, lat) = to_lon_lat_radians(position);
        self.initialize(lon, lat, altitude)
    }

    /// Remove the reference position.
    pub fn reset(&mut self) {
        *self = Self::Uninitialized;
    }

    /// Whether a reference position has been set.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized(_))
    }

    /// Accessor for the `LocalTangentPlane`, if any.
    #[must_use]
    pub const fn plane(&self) -> Option<&LocalTangentPlane> {
        match self {
            Self::Initialized(plane) => Some(plane),
            Self::Uninitialized => None,
        }
    }

    fn checked_plane(&self) -> Result<&LocalTangentPlane, Error> {
        self.plane().ok_or_else(|| {
            log::trace!("transformer queried without a reference position");
            Error::NotInitialized
        })
    }

    /// Scale a longitude and latitude onto the plane,
    /// see `LocalTangentPlane::project`.
    ///
    /// # Errors
    ///
    /// `Error::NotInitialized` if there is no reference position.
    pub fn project(&self, lon: Radians, lat: Radians) -> Result<(f32, f32), Error> {
        self.checked_plane().map(|plane| plane.project(lon, lat))
    }

    /// The inverse of `project`, see `LocalTangentPlane::reproject`.
    ///
    /// # Errors
    ///
    /// `Error::NotInitialized` if there is no reference position.
    pub fn reproject(&self, x: f32, y: f32) -> Result<(Radians, Radians), Error> {
        self.checked_plane().map(|plane| plane.reproject(x, y))
    }

    /// Calculate the displacement of a position from the reference position,
    /// see `LocalTangentPlane::distance`.
    ///
    /// # Errors
    ///
    /// `Error::NotInitialized` if there is no reference position.
    pub fn distance(&self, lon: Radians, lat: Radians) -> Result<(f32, f32), Error> {
        self.checked_plane().map(|plane| plane.distance(lon, lat))
    }

    /// Scale a position in degrees onto the plane.
    ///
    /// # Errors
    ///
    /// `Error::NotInitialized` if there is no reference position.
    pub fn project_lat_long(&self, position: &LatLong) -> Result<(f32, f32), Error> {
        self.checked_plane()
            .map(|plane| plane.project_lat_long(position))
    }

    /// Calculate the displacement of a position in degrees from the
    /// reference position.
    ///
    /// # Errors
    ///
    /// `Error::NotInitialized` if there is no reference position.
    pub fn distance_to(&self, position: &LatLong) -> Result<(f32, f32), Error> {
        self.checked_plane().map(|plane| plane.distance_to(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{is_within_tolerance, Degrees};
    use core::f64::consts::PI;

    fn shenzhen() -> (Radians, Radians) {
        (
            Radians(113.88308_f64.to_radians()),
            Radians(22.55329_f64.to_radians()),
        )
    }

    fn guangzhou() -> (Radians, Radians) {
        (
            Radians(113.27324_f64.to_radians()),
            Radians(23.15792_f64.to_radians()),
        )
    }

    #[test]
    fn test_local_tangent_plane_scales() {
        let (lon, lat) = shenzhen();
        let plane = LocalTangentPlane::new(lon, lat, Metres(10.0), &REFERENCE_ELLIPSOID).unwrap();
        assert!(plane.is_valid());
        assert_eq!(lon, plane.longitude());
        assert_eq!(lat, plane.latitude());

        assert!(is_within_tolerance(6_344_823.528_952_883, plane.meridian_scale(), 1e-6));
        assert!(is_within_tolerance(5_893_268.877_203_125, plane.parallel_scale(), 1e-6));
    }

    #[test]
    fn test_local_tangent_plane_latitude_range() {
        let geoid = Ellipsoid::reference();

        // the range is inclusive
        let north = LocalTangentPlane::new(Radians(0.0), Radians(FRAC_PI_2), Metres(0.0), &geoid);
        assert!(north.is_ok_and(|plane| plane.is_valid()));
        let south = LocalTangentPlane::new(Radians(0.0), Radians(-FRAC_PI_2), Metres(0.0), &geoid);
        assert!(south.is_ok_and(|plane| plane.is_valid()));

        let beyond_north = FRAC_PI_2 + 1e-9;
        assert_eq!(
            Err(Error::OutOfRange {
                latitude: beyond_north
            }),
            LocalTangentPlane::new(Radians(0.0), Radians(beyond_north), Metres(0.0), &geoid)
        );
        let beyond_south = -FRAC_PI_2 - 1e-9;
        assert_eq!(
            Err(Error::OutOfRange {
                latitude: beyond_south
            }),
            LocalTangentPlane::new(Radians(0.0), Radians(beyond_south), Metres(0.0), &geoid)
        );
        assert!(matches!(
            LocalTangentPlane::new(Radians(0.0), Radians(PI), Metres(0.0), &geoid),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            LocalTangentPlane::new(Radians(0.0), Radians(f64::NAN), Metres(0.0), &geoid),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_local_tangent_plane_invalid_ellipsoid() {
        let no_polar_radius = Ellipsoid::new(Metres(6_378_137.0), Metres(0.0));
        assert_eq!(
            Err(Error::InvalidEllipsoid {
                a: 6_378_137.0,
                b: 0.0
            }),
            LocalTangentPlane::new(Radians(0.0), Radians(FRAC_PI_2), Metres(0.0), &no_polar_radius)
        );

        let no_radii = Ellipsoid::new(Metres(0.0), Metres(0.0));
        assert!(matches!(
            LocalTangentPlane::new(Radians(0.0), Radians(0.3), Metres(0.0), &no_radii),
            Err(Error::InvalidEllipsoid { .. })
        ));

        let prolate = Ellipsoid::new(Metres(6_356_755.0), Metres(6_378_137.0));
        assert!(matches!(
            LocalTangentPlane::new(Radians(0.0), Radians(0.3), Metres(0.0), &prolate),
            Err(Error::InvalidEllipsoid { .. })
        ));

        // the ellipsoid is checked before the latitude
        assert!(matches!(
            LocalTangentPlane::new(Radians(0.0), Radians(2.0), Metres(0.0), &no_radii),
            Err(Error::InvalidEllipsoid { .. })
        ));

        // a sphere is a valid ellipsoid
        let sphere = Ellipsoid::new(Metres(6_371_000.0), Metres(6_371_000.0));
        let plane = LocalTangentPlane::new(Radians(0.0), Radians(0.0), Metres(0.0), &sphere).unwrap();
        assert!(plane.is_valid());
        assert_eq!(6_371_000.0, plane.meridian_scale());
        assert_eq!(6_371_000.0, plane.parallel_scale());
    }

    #[test]
    fn test_transformer_invalid_ellipsoid() {
        let (lon, lat) = shenzhen();
        let mut transformer = Transformer::new();
        let no_polar_radius = Ellipsoid::new(Metres(6_378_137.0), Metres(0.0));
        assert!(matches!(
            transformer.initialize_with_ellipsoid(lon, lat, Metres(0.0), &no_polar_radius),
            Err(Error::InvalidEllipsoid { .. })
        ));
        assert_eq!(Transformer::Uninitialized, transformer);
        assert_eq!(Err(Error::NotInitialized), transformer.distance(lon, lat));

        let plane = *transformer.initialize(lon, lat, Metres(10.0)).unwrap();
        assert!(transformer
            .initialize_with_ellipsoid(lon, lat, Metres(0.0), &no_polar_radius)
            .is_err());
        assert_eq!(Transformer::Initialized(plane), transformer);
    }

    #[test]
    fn test_local_tangent_plane_equator() {
        let geoid = Ellipsoid::reference();
        let plane = LocalTangentPlane::new(Radians(0.0), Radians(0.0), Metres(0.0), &geoid).unwrap();

        // On the Equator the parallel is the equatorial circle
        assert_eq!(geoid.a().0, plane.parallel_scale());
        assert!(is_within_tolerance(6_335_444.680_793_937, plane.meridian_scale(), 1e-6));
        assert_eq!((0.0, 0.0), plane.origin());
    }

    #[test]
    fn test_local_tangent_plane_altitude() {
        let (lon, lat) = shenzhen();
        let geoid = Ellipsoid::reference();

        let mut previous = LocalTangentPlane::new(lon, lat, Metres(-100.0), &geoid).unwrap();
        for altitude in [0.0, 10.0, 500.0, 8848.0, 35_786_000.0] {
            let plane = LocalTangentPlane::new(lon, lat, Metres(altitude), &geoid).unwrap();
            assert!(previous.meridian_scale() < plane.meridian_scale());
            assert!(previous.parallel_scale() < plane.parallel_scale());
            previous = plane;
        }

        // altitude adds to the meridian scale directly
        let low = LocalTangentPlane::new(lon, lat, Metres(0.0), &geoid).unwrap();
        let high = LocalTangentPlane::new(lon, lat, Metres(1000.0), &geoid).unwrap();
        assert!(is_within_tolerance(
            1000.0,
            high.meridian_scale() - low.meridian_scale(),
            1e-6
        ));
        assert!(is_within_tolerance(
            1000.0 * libm::cos(lat.0),
            high.parallel_scale() - low.parallel_scale(),
            1e-6
        ));
    }

    #[test]
    fn test_local_tangent_plane_project_reproject() {
        let (lon, lat) = shenzhen();
        let plane = LocalTangentPlane::new(lon, lat, Metres(10.0), &REFERENCE_ELLIPSOID).unwrap();

        for i in -18..19 {
            for j in -9..10 {
                let lon = Radians(f64::from(i * 10).to_radians());
                let lat = Radians(f64::from(j * 10).to_radians());
                let (x, y) = plane.project(lon, lat);
                let result = plane.reproject(x, y);

                // f32 keeps about 7 significant digits
                assert!(is_within_tolerance(lon.0, result.0 .0, 1e-6));
                assert!(is_within_tolerance(lat.0, result.1 .0, 1e-6));
            }
        }
    }

    #[test]
    fn test_local_tangent_plane_distance() {
        let (lon, lat) = shenzhen();
        let plane = LocalTangentPlane::new(lon, lat, Metres(10.0), &REFERENCE_ELLIPSOID).unwrap();

        assert_eq!((0.0, 0.0), plane.distance(lon, lat));

        // Guangzhou is North West of Shenzhen
        let (g_lon, g_lat) = guangzhou();
        let (dx, dy) = plane.distance(g_lon, g_lat);
        assert!(is_within_tolerance(-67_532.5, f64::from(dx), 0.1));
        assert!(is_within_tolerance(62_190.4, f64::from(dy), 0.1));

        // the difference of projections agrees with distance
        let (x, y) = plane.project(g_lon, g_lat);
        let (x0, y0) = plane.origin();
        assert!(is_within_tolerance(f64::from(dx), f64::from(x - x0), 2.0));
        assert!(is_within_tolerance(f64::from(dy), f64::from(y - y0), 2.0));
    }

    #[test]
    fn test_local_tangent_plane_lat_long() {
        let reference = LatLong::new(Degrees(22.55329), Degrees(113.88308));
        let plane =
            LocalTangentPlane::from_lat_long(&reference, Metres(10.0), &REFERENCE_ELLIPSOID).unwrap();

        let (lon, lat) = shenzhen();
        assert_eq!(lon, plane.longitude());
        assert_eq!(lat, plane.latitude());
        assert_eq!((0.0, 0.0), plane.distance_to(&reference));
        assert_eq!(plane.origin(), plane.project_lat_long(&reference));

        let (g_lon, g_lat) = guangzhou();
        let guangzhou = LatLong::new(Degrees(23.15792), Degrees(113.27324));
        assert_eq!(plane.distance(g_lon, g_lat), plane.distance_to(&guangzhou));
        assert_eq!(plane.project(g_lon, g_lat), plane.project_lat_long(&guangzhou));
    }

    #[test]
    fn test_transformer_uninitialized() {
        let transformer = Transformer::new();
        assert_eq!(Transformer::default(), transformer);
        assert!(!transformer.is_initialized());
        assert!(transformer.plane().is_none());

        let position = LatLong::new(Degrees(0.0), Degrees(0.0));
        assert_eq!(
            Err(Error::NotInitialized),
            transformer.project(Radians(0.0), Radians(0.0))
        );
        assert_eq!(Err(Error::NotInitialized), transformer.reproject(0.0, 0.0));
        assert_eq!(
            Err(Error::NotInitialized),
            transformer.distance(Radians(0.0), Radians(0.0))
        );
        assert_eq!(
            Err(Error::NotInitialized),
            transformer.project_lat_long(&position)
        );
        assert_eq!(Err(Error::NotInitialized), transformer.distance_to(&position));
    }

    #[test]
    fn test_transformer_initialize() {
        let (lon, lat) = shenzhen();
        let mut transformer = Transformer::new();
        let plane = *transformer.initialize(lon, lat, Metres(10.0)).unwrap();
        assert!(transformer.is_initialized());
        assert_eq!(Some(&plane), transformer.plane());
        assert_eq!(
            LocalTangentPlane::new(lon, lat, Metres(10.0), &REFERENCE_ELLIPSOID),
            Ok(plane)
        );

        let (g_lon, g_lat) = guangzhou();
        assert_eq!(Ok(plane.project(g_lon, g_lat)), transformer.project(g_lon, g_lat));
        assert_eq!(Ok(plane.distance(g_lon, g_lat)), transformer.distance(g_lon, g_lat));
        assert_eq!(Ok((0.0, 0.0)), transformer.distance(lon, lat));
        assert_eq!(Ok(plane.reproject(1.0, 2.0)), transformer.reproject(1.0, 2.0));

        // a failed initialization leaves the transformer unchanged
        assert!(transformer
            .initialize(g_lon, Radians(2.0), Metres(0.0))
            .is_err());
        assert_eq!(Transformer::Initialized(plane), transformer);

        // re-initialization replaces the reference position
        let wgs84 = Ellipsoid::wgs84();
        let replaced = *transformer
            .initialize_with_ellipsoid(g_lon, g_lat, Metres(0.0), &wgs84)
            .unwrap();
        assert_eq!(g_lon, replaced.longitude());
        assert_eq!(Ok((0.0, 0.0)), transformer.distance(g_lon, g_lat));

        transformer.reset();
        assert_eq!(Transformer::Uninitialized, transformer);
    }

    #[test]
    fn test_transformer_initialize_failure_when_uninitialized() {
        let mut transformer = Transformer::default();
        assert_eq!(
            Err(Error::OutOfRange { latitude: -2.0 }),
            transformer.initialize(Radians(0.0), Radians(-2.0), Metres(0.0))
        );
        assert_eq!(Transformer::Uninitialized, transformer);

        let position = LatLong::new(Degrees(22.55329), Degrees(113.88308));
        assert!(transformer
            .initialize_lat_long(&position, Metres(10.0))
            .is_ok());
        assert_eq!(Ok((0.0, 0.0)), transformer.distance_to(&position));
    }

    #[test]
    fn test_transformer_traits() {
        let (lon, lat) = shenzhen();
        let plane = LocalTangentPlane::new(lon, lat, Metres(10.0), &REFERENCE_ELLIPSOID).unwrap();
        let transformer = Transformer::from(plane);
        let transformer_clone = transformer;
        assert!(transformer_clone == transformer);

        println!("Transformer: {:?}", transformer);
    }
}
