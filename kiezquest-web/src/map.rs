//! Leaflet map surface.
//!
//! [`MapSurface`] is an explicit owned handle around a single live Leaflet
//! widget. The mounting component holds the handle and must dispose it on
//! unmount; a fresh mount on the same logical surface only happens after
//! that. Target and user markers are independent: a live position never
//! replaces the station marker.

use leaflet::{LatLng, Map, MapOptions, Marker, TileLayer};
use web_sys::HtmlElement;

use crate::geo::GeoPoint;
use kiezquest_core::Station;

/// Fixed zoom for single-station navigation.
pub const TARGET_ZOOM: f64 = 15.0;
/// Default zoom for the route overview.
pub const OVERVIEW_ZOOM: f64 = 12.0;

const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

pub struct MapSurface {
    map: Option<Map>,
    station_markers: Vec<Marker>,
    user_marker: Option<Marker>,
}

impl MapSurface {
    /// Bind one Leaflet widget to the given container and install the tile
    /// layer. The caller owns the returned handle; creating a second surface
    /// on a container that already has one is the caller's re-render bug to
    /// guard (see `MapView`), not something the widget tolerates.
    #[must_use]
    pub fn mount(container: &HtmlElement) -> Self {
        let map = Map::new_with_element(container, &MapOptions::default());
        TileLayer::new(TILE_URL).add_to(&map);
        Self {
            map: Some(map),
            station_markers: Vec::new(),
            user_marker: None,
        }
    }

    /// Overview mode: one marker per station, viewport centered so the whole
    /// route is visible at the given zoom.
    pub fn set_stations(&mut self, stations: &[Station], zoom: f64) {
        let Some(map) = &self.map else { return };
        self.station_markers.drain(..).for_each(|marker| {
            marker.remove();
        });
        for station in stations {
            let marker = Marker::new(&LatLng::new(station.latitude, station.longitude));
            marker.add_to(map);
            self.station_markers.push(marker);
        }
        if let Some(center) = route_center(stations) {
            map.set_view(&LatLng::new(center.latitude, center.longitude), zoom);
        }
    }

    /// Navigation mode: a single marker on the target station, view centered
    /// on it. Replaces any previous station markers, keeps the user marker.
    pub fn set_target(&mut self, station: &Station) {
        let Some(map) = &self.map else { return };
        self.station_markers.drain(..).for_each(|marker| {
            marker.remove();
        });
        let position = LatLng::new(station.latitude, station.longitude);
        let marker = Marker::new(&position);
        marker.add_to(map);
        self.station_markers.push(marker);
        map.set_view(&position, TARGET_ZOOM);
    }

    /// Place or move the live-position marker and re-center on it. Once a
    /// fix is known the player's own position takes visual priority over the
    /// target, which is the point of navigation mode.
    pub fn set_user_position(&mut self, point: GeoPoint) {
        let Some(map) = &self.map else { return };
        if let Some(previous) = self.user_marker.take() {
            previous.remove();
        }
        let position = LatLng::new(point.latitude, point.longitude);
        let marker = Marker::new(&position);
        marker.add_to(map);
        self.user_marker = Some(marker);
        map.set_view(&position, TARGET_ZOOM);
    }

    /// Drop the live-position marker, e.g. when navigation moves on to the
    /// next station and a fresh fix is pending.
    pub fn clear_user_position(&mut self) {
        if let Some(marker) = self.user_marker.take() {
            marker.remove();
        }
    }

    /// Release the underlying widget. Safe to call multiple times; after
    /// disposal every other operation is a no-op.
    pub fn dispose(&mut self) {
        if let Some(map) = self.map.take() {
            self.station_markers.drain(..).for_each(|marker| {
                marker.remove();
            });
            self.user_marker = None;
            map.remove();
        }
    }

    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.map.is_none()
    }
}

impl Drop for MapSurface {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Midpoint of the bounding box spanned by the stations, or `None` for an
/// empty list.
#[must_use]
pub fn route_center(stations: &[Station]) -> Option<GeoPoint> {
    let first = stations.first()?;
    let mut min_lat = first.latitude;
    let mut max_lat = first.latitude;
    let mut min_lon = first.longitude;
    let mut max_lon = first.longitude;
    for station in &stations[1..] {
        min_lat = min_lat.min(station.latitude);
        max_lat = max_lat.max(station.latitude);
        min_lon = min_lon.min(station.longitude);
        max_lon = max_lon.max(station.longitude);
    }
    Some(GeoPoint {
        latitude: (min_lat + max_lat) / 2.0,
        longitude: (min_lon + max_lon) / 2.0,
    })
}
