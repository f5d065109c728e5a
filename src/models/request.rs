//! Delivery requests, locations, and soft time windows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a delivery request, unique within one run.
pub type RequestId = u64;

/// A geographic point in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Location;
///
/// let kyiv = Location::new(50.4501, 30.5234);
/// assert!(kyiv.is_valid());
/// assert!(!Location::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees, `-90..=90`.
    pub lat: f64,
    /// Longitude in degrees, `-180..=180`.
    pub lon: f64,
}

impl Location {
    /// Creates a location from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns `true` if both coordinates are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// A preferred service interval.
///
/// Either bound may be absent. Arriving early means waiting until
/// `earliest`; arriving after `latest` is allowed but penalized by the
/// cost evaluator.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::TimeWindow;
///
/// let tw = TimeWindow::new(Some(100.0), Some(200.0)).unwrap();
/// assert_eq!(tw.service_start(50.0), 100.0);
/// assert!(tw.is_late(250.0));
/// assert!(!TimeWindow::unbounded().is_late(f64::MAX));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeWindow {
    earliest: Option<f64>,
    latest: Option<f64>,
}

impl TimeWindow {
    /// Creates a time window.
    ///
    /// Returns `None` if a bound is NaN or `earliest > latest`.
    pub fn new(earliest: Option<f64>, latest: Option<f64>) -> Option<Self> {
        if earliest.is_some_and(f64::is_nan) || latest.is_some_and(f64::is_nan) {
            return None;
        }
        if let (Some(e), Some(l)) = (earliest, latest) {
            if e > l {
                return None;
            }
        }
        Some(Self { earliest, latest })
    }

    /// A window with neither bound.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Earliest service start, if bounded below.
    pub fn earliest(&self) -> Option<f64> {
        self.earliest
    }

    /// Latest acceptable time, if bounded above.
    pub fn latest(&self) -> Option<f64> {
        self.latest
    }

    /// Time service can begin when arriving at `arrival`.
    pub fn service_start(&self, arrival: f64) -> f64 {
        match self.earliest {
            Some(earliest) if arrival < earliest => earliest,
            _ => arrival,
        }
    }

    /// Returns `true` if `time` is past the window end.
    pub fn is_late(&self, time: f64) -> bool {
        self.latest.is_some_and(|latest| time > latest)
    }
}

/// A delivery request: volume to drop at a location, ideally inside a window.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Location, Request, TimeWindow};
///
/// let r = Request::new(1, "ORD-1", 4.0, Location::new(50.45, 30.52))
///     .with_time_window(TimeWindow::new(Some(3600.0), None).unwrap());
/// assert_eq!(r.id(), 1);
/// assert_eq!(r.external_ref(), "ORD-1");
/// assert_eq!(r.time_window().earliest(), Some(3600.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    id: RequestId,
    external_ref: String,
    volume: f64,
    #[serde(default)]
    time_window: TimeWindow,
    location: Location,
}

impl Request {
    /// Creates a request with an unbounded time window.
    pub fn new(
        id: RequestId,
        external_ref: impl Into<String>,
        volume: f64,
        location: Location,
    ) -> Self {
        Self {
            id,
            external_ref: external_ref.into(),
            volume,
            time_window: TimeWindow::unbounded(),
            location,
        }
    }

    /// Sets the preferred time window.
    pub fn with_time_window(mut self, tw: TimeWindow) -> Self {
        self.time_window = tw;
        self
    }

    /// Request ID.
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Reference used by the ordering system (order number, barcode, ...).
    pub fn external_ref(&self) -> &str {
        &self.external_ref
    }

    /// Volume to deliver.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Preferred time window.
    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    /// Delivery location.
    pub fn location(&self) -> Location {
        self.location
    }
}
