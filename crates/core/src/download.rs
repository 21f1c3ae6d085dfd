//! Download URL resolution for wallpapers.
//!
//! A wallpaper carries up to two direct image URLs (mobile and desktop).
//! Clients ask for a device class and receive the URL that best fits it.

use crate::error::CoreError;

/// Device value that selects the mobile image. Anything else means desktop.
pub const DEVICE_MOBILE: &str = "mobile";

/// Message returned when no URL fits the requested device.
pub const NO_DOWNLOAD_URL: &str = "Download URL not available";

/// Device class a download is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classify a raw `device` value. Only `"mobile"` (exact match) selects
    /// [`DeviceClass::Mobile`]; every other value is treated as desktop.
    pub fn from_device(device: &str) -> Self {
        if device == DEVICE_MOBILE {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Pick the download URL for `device`.
///
/// Mobile requests only ever get the mobile URL. Desktop requests prefer the
/// desktop URL and fall back to mobile. Empty strings count as absent.
pub fn resolve_download_url<'a>(
    device: DeviceClass,
    mobile: Option<&'a str>,
    desktop: Option<&'a str>,
) -> Result<&'a str, CoreError> {
    let mobile = mobile.filter(|u| !u.is_empty());
    let desktop = desktop.filter(|u| !u.is_empty());

    let url = match device {
        DeviceClass::Mobile => mobile,
        DeviceClass::Desktop => desktop.or(mobile),
    };

    url.ok_or_else(|| CoreError::InvalidState(NO_DOWNLOAD_URL.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
