//! Single-shot geolocation lookup.
//!
//! Geolocation is an enhancement: every failure is reported as a value and
//! the navigation view keeps working from the static target marker alone.

use js_sys::{Function, Promise};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError};

/// A resolved position fix in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why no fix could be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    /// The host environment has no positioning capability.
    #[error("geolocation is not supported by this environment")]
    Unsupported,
    #[error("permission to read the position was denied")]
    PermissionDenied,
    #[error("the position could not be determined")]
    PositionUnavailable,
    #[error("the position request timed out")]
    Timeout,
}

impl GeoError {
    /// Translation key for the non-blocking notice shown to the player.
    #[must_use]
    pub const fn notice_key(self) -> &'static str {
        match self {
            Self::Unsupported => "geo.unsupported",
            Self::PermissionDenied => "geo.denied",
            Self::PositionUnavailable => "geo.unavailable",
            Self::Timeout => "geo.timeout",
        }
    }
}

/// Token tied to one navigation-view mount. A late-arriving fix is only
/// applied while the issuing mount is still live; tearing the view down
/// revokes the token, which stands in for request cancellation.
#[derive(Clone, Debug)]
pub struct MountToken(Rc<Cell<bool>>);

impl MountToken {
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Request one position fix from the browser.
///
/// Never throws synchronously; every outcome arrives through the returned
/// future. The browser applies its own timeout policy, none is added here.
///
/// # Errors
///
/// Returns a [`GeoError`] when the environment lacks geolocation support,
/// the user denies permission, or the environment reports a failure.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn current_position() -> Result<GeoPoint, GeoError> {
    let Some(geolocation) = web_sys::window().and_then(|win| win.navigator().geolocation().ok())
    else {
        return Err(GeoError::Unsupported);
    };

    // The promise's own resolve/reject functions double as the success and
    // error callbacks; the browser hands them the position or error value.
    let mut resolve_slot: Option<Function> = None;
    let mut reject_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, reject| {
        resolve_slot = Some(resolve);
        reject_slot = Some(reject);
    });
    let (Some(resolve), Some(reject)) = (resolve_slot, reject_slot) else {
        return Err(GeoError::Unsupported);
    };
    if geolocation
        .get_current_position_with_error_callback(&resolve, Some(&reject))
        .is_err()
    {
        return Err(GeoError::Unsupported);
    }

    match JsFuture::from(promise).await {
        Ok(value) => value
            .dyn_into::<Position>()
            .map(|position| {
                let coords = position.coords();
                GeoPoint {
                    latitude: coords.latitude(),
                    longitude: coords.longitude(),
                }
            })
            .map_err(|_| GeoError::PositionUnavailable),
        Err(error) => Err(classify_rejection(&error)),
    }
}

fn classify_rejection(error: &JsValue) -> GeoError {
    error
        .dyn_ref::<PositionError>()
        .map_or(GeoError::PositionUnavailable, |err| match err.code() {
            PositionError::PERMISSION_DENIED => GeoError::PermissionDenied,
            PositionError::TIMEOUT => GeoError::Timeout,
            _ => GeoError::PositionUnavailable,
        })
}
