//! Spacing constants for consistent layout throughout the application.
//!
//! All values are in pixels.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - page margins, dialog padding
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, cells
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Large radius - cards, the status picker
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Full/pill radius - status badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// GRID SIZES
// =============================================================================

/// Width of the employee name column.
pub const NAME_WIDTH: f32 = 200.0;

/// Width of the week navigation columns.
pub const NAV_WIDTH: f32 = 40.0;

/// Width of one day column.
pub const CELL_WIDTH: f32 = 112.0;

/// Height of one grid row.
pub const CELL_HEIGHT: f32 = 44.0;

/// Width of the status picker dialog.
pub const PICKER_WIDTH: f32 = 340.0;
