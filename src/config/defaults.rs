// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Zoom**: Viewer scale bounds and step
//! - **Gestures**: Swipe distance threshold
//! - **Forms**: Minimum field lengths and message counter limits
//! - **Notifications**: Toast lifetimes and visible count
//! - **Site**: Endpoints, contact details and asset paths

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default viewer scale when a collection is loaded (1.0 = natural size).
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Minimum viewer scale.
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum viewer scale.
pub const MAX_ZOOM: f32 = 2.0;

/// Scale change applied by one zoom in/out step.
pub const ZOOM_STEP: f32 = 0.1;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal distance a touch must travel to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Smallest accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 1.0;

/// Largest accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 1000.0;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Minimum trimmed length of a contact name.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum trimmed length of a phone number.
pub const MIN_PHONE_CHARS: usize = 10;

/// Minimum trimmed length of a contact subject.
pub const MIN_SUBJECT_CHARS: usize = 5;

/// Minimum trimmed length of a contact message.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Soft limit shown by the message character counter.
pub const MESSAGE_SOFT_LIMIT: usize = 500;

/// Counter switches to its warning style above this many characters.
pub const MESSAGE_WARNING_THRESHOLD: usize = 450;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime of success and info toasts (seconds).
pub const NOTIFICATION_SHORT_SECS: u64 = 3;

/// Lifetime of warning and error toasts (seconds).
pub const NOTIFICATION_LONG_SECS: u64 = 5;

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

// ==========================================================================
// Site Defaults
// ==========================================================================

/// Base URL the PHP endpoints are resolved against.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Contact form endpoint, relative to the base URL.
pub const CONTACT_ENDPOINT: &str = "php/send_email.php";

/// Table booking endpoint, relative to the base URL.
pub const BOOKING_ENDPOINT: &str = "php/process_booking.php";

/// Default timeout for a form submission request (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// WhatsApp number used for every deep link.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "27621369848";

/// Street address opened in the maps link.
pub const DEFAULT_ADDRESS: &str = "Flamingo Avenue, Kagiso 1754";

/// Image shown in place of a menu page that failed to load.
pub const PLACEHOLDER_MENU_IMAGE: &str = "images/placeholder-menu.jpg";

/// File name offered when downloading an image outside the menu.
pub const GALLERY_DOWNLOAD_NAME: &str = "eatery-flamingo-gallery.jpg";

/// Label used for gallery images that carry no alt text.
pub const DEFAULT_IMAGE_LABEL: &str = "Gallery Image";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM > 0.0);
    assert!(MIN_ZOOM < DEFAULT_ZOOM);
    assert!(MAX_ZOOM > DEFAULT_ZOOM);
    assert!(ZOOM_STEP > 0.0);

    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    assert!(MESSAGE_WARNING_THRESHOLD < MESSAGE_SOFT_LIMIT);
    assert!(NOTIFICATION_SHORT_SECS <= NOTIFICATION_LONG_SECS);
    assert!(MAX_VISIBLE_NOTIFICATIONS > 0);
};
