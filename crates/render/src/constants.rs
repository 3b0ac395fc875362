/// MIME type declared for every encoded preview.
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Largest edge the JPEG encoder accepts.
pub const MAX_JPEG_DIMENSION: u32 = 65_535;

/// Silhouette width at 512x512.
pub const SILHOUETTE_WIDTH: f32 = 150.0;

/// Silhouette height at 512x512.
pub const SILHOUETTE_HEIGHT: f32 = 280.0;

/// Silhouette corner radius at 512x512.
pub const SILHOUETTE_CORNER_RADIUS: f32 = 20.0;

/// Drop shadow offset (both axes) at 512x512.
pub const SHADOW_OFFSET: f32 = 5.0;

/// Border stroke width at 512x512.
pub const BORDER_WIDTH: f32 = 2.0;

/// Vertical samples per pixel row when rasterising fills.
pub const FILL_SUBSAMPLES: u32 = 4;

/// Prefix of the download file name offered to the UI.
pub const FILE_NAME_PREFIX: &str = "cmf-design";

/// Material slug used in file names for the neutral fallback.
pub const FALLBACK_SLUG: &str = "default";
