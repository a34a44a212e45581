//! Pad array parameters and the fluent builder that produces them.

use serde::{Deserialize, Serialize};

use super::units;

/// Frozen parameter set for one footprint generation run.
///
/// All lengths are in millimetres; counts are plain integers. A zero in any
/// optional dimension means the corresponding feature is disabled rather
/// than being an error: zero cut dimensions skip cut-line generation, a
/// zero `group_count` lays out a single group, a zero `blank_size` keeps
/// every vertical advance at `pitch_y`. Downstream components rely on this
/// convention and never treat a zero as a fault.
///
/// Values are only constructed through [`PadArrayBuilder`], which performs
/// the inch-to-millimetre conversion as each dimension is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PadArrayParams {
    /// Number of pads stacked vertically in each column.
    pub pads_per_column: u32,
    /// Number of columns across the array.
    pub column_count: u32,
    /// Centre-to-centre pitch between columns (mm).
    pub pitch_x: f64,
    /// Centre-to-centre pitch between pads in a column (mm).
    pub pitch_y: f64,
    /// Pad width (mm).
    pub pad_width: f64,
    /// Pad height (mm).
    pub pad_height: f64,
    /// Cut-line pad width (mm). Zero disables cut lines.
    pub cut_pad_width: f64,
    /// Cut-line pad height (mm). Zero disables cut lines.
    pub cut_pad_height: f64,
    /// Gap separating repeated groups (mm). Zero means a single group.
    pub group_gap: f64,
    /// Number of repeated groups. Zero is treated as one.
    pub group_count: u32,
    /// Vertical offset of the first wrap cut line from the pad edge (mm).
    /// Zero disables the wrap cut-line variant.
    pub cut_line_y_offset: f64,
    /// Spacing on the folded blank region of a wrapped strip (mm).
    /// Zero disables the alternating blank advance.
    pub blank_size: f64,
    /// Stroke width of routed traces (mm). Must be positive when routing.
    pub trace_width: f64,
    /// Horizontal outline clearance beyond the pad extremes (mm).
    pub clearance_x: f64,
    /// Vertical outline clearance beyond the pad extremes (mm).
    pub clearance_y: f64,
}

impl PadArrayParams {
    /// Starts a fluent builder with every field zeroed (all features
    /// disabled).
    #[must_use]
    pub fn builder() -> PadArrayBuilder {
        PadArrayBuilder::default()
    }

    /// Number of groups the layout will produce; zero is treated as one.
    #[must_use]
    pub const fn effective_groups(&self) -> u32 {
        if self.group_count == 0 {
            1
        } else {
            self.group_count
        }
    }

    /// Total number of pads the layout will produce.
    #[must_use]
    pub const fn pad_count(&self) -> u32 {
        self.effective_groups() * self.column_count * self.pads_per_column
    }
}

/// Fluent builder for [`PadArrayParams`].
///
/// Dimension setters take **inches** (the unit on connector drawings) and
/// convert to millimetres at the moment the value is set; this is the single
/// conversion point in the crate. Count setters store their value as-is.
/// Each setter consumes and returns the builder so calls compose left to
/// right; [`build`](Self::build) freezes the accumulated value without any
/// further defaulting.
///
/// # Example
///
/// ```
/// use elastomer_footprints::footprint::PadArrayParams;
///
/// let params = PadArrayParams::builder()
///     .pads_per_column(52)
///     .column_count(6)
///     .pitch_x(0.019685039)
///     .pitch_y(0.17716535)
///     .pad_width(0.0137795)
///     .pad_height(0.094488)
///     .group_gap(0.03937)
///     .group_count(3)
///     .build();
///
/// assert_eq!(params.pad_count(), 936);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PadArrayBuilder {
    params: PadArrayParams,
}

impl PadArrayBuilder {
    /// Sets the number of pads in each column.
    #[must_use]
    pub const fn pads_per_column(mut self, count: u32) -> Self {
        self.params.pads_per_column = count;
        self
    }

    /// Sets the number of columns.
    #[must_use]
    pub const fn column_count(mut self, count: u32) -> Self {
        self.params.column_count = count;
        self
    }

    /// Sets the number of repeated groups. Zero lays out a single group.
    #[must_use]
    pub const fn group_count(mut self, count: u32) -> Self {
        self.params.group_count = count;
        self
    }

    /// Sets the column pitch, in inches.
    #[must_use]
    pub fn pitch_x(mut self, inches: f64) -> Self {
        self.params.pitch_x = units::in_to_mm(inches);
        self
    }

    /// Sets the pad pitch within a column, in inches.
    #[must_use]
    pub fn pitch_y(mut self, inches: f64) -> Self {
        self.params.pitch_y = units::in_to_mm(inches);
        self
    }

    /// Sets the pad width, in inches.
    #[must_use]
    pub fn pad_width(mut self, inches: f64) -> Self {
        self.params.pad_width = units::in_to_mm(inches);
        self
    }

    /// Sets the pad height, in inches.
    #[must_use]
    pub fn pad_height(mut self, inches: f64) -> Self {
        self.params.pad_height = units::in_to_mm(inches);
        self
    }

    /// Sets the cut-line pad width, in inches. Zero disables cut lines.
    #[must_use]
    pub fn cut_pad_width(mut self, inches: f64) -> Self {
        self.params.cut_pad_width = units::in_to_mm(inches);
        self
    }

    /// Sets the cut-line pad height, in inches. Zero disables cut lines.
    #[must_use]
    pub fn cut_pad_height(mut self, inches: f64) -> Self {
        self.params.cut_pad_height = units::in_to_mm(inches);
        self
    }

    /// Sets the gap between repeated groups, in inches.
    #[must_use]
    pub fn group_gap(mut self, inches: f64) -> Self {
        self.params.group_gap = units::in_to_mm(inches);
        self
    }

    /// Sets the vertical offset of the first wrap cut line, in inches.
    /// Zero selects the uniform cut-line variant instead.
    #[must_use]
    pub fn cut_line_y_offset(mut self, inches: f64) -> Self {
        self.params.cut_line_y_offset = units::in_to_mm(inches);
        self
    }

    /// Sets the blank-fold spacing of a wrapped strip, in inches.
    #[must_use]
    pub fn blank_size(mut self, inches: f64) -> Self {
        self.params.blank_size = units::in_to_mm(inches);
        self
    }

    /// Sets the routed trace width, in inches.
    #[must_use]
    pub fn trace_width(mut self, inches: f64) -> Self {
        self.params.trace_width = units::in_to_mm(inches);
        self
    }

    /// Sets the horizontal outline clearance, in inches.
    #[must_use]
    pub fn clearance_x(mut self, inches: f64) -> Self {
        self.params.clearance_x = units::in_to_mm(inches);
        self
    }

    /// Sets the vertical outline clearance, in inches.
    #[must_use]
    pub fn clearance_y(mut self, inches: f64) -> Self {
        self.params.clearance_y = units::in_to_mm(inches);
        self
    }

    /// Freezes the accumulated parameters.
    ///
    /// No defaulting happens here: fields never set stay zero, and zero
    /// means the feature is disabled downstream.
    #[must_use]
    pub fn build(self) -> PadArrayParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_convert_once_at_set_time() {
        let params = PadArrayParams::builder().pitch_x(1.0).pad_width(0.002).build();
        assert!((params.pitch_x - 25.4).abs() < 1e-12);
        assert!((params.pad_width - 0.0508).abs() < 1e-12);
    }

    #[test]
    fn counts_are_stored_verbatim() {
        let params = PadArrayParams::builder()
            .pads_per_column(7)
            .column_count(3)
            .group_count(2)
            .build();
        assert_eq!(params.pads_per_column, 7);
        assert_eq!(params.column_count, 3);
        assert_eq!(params.group_count, 2);
    }

    #[test]
    fn unset_fields_stay_zero() {
        let params = PadArrayParams::builder().pads_per_column(4).build();
        assert!(params.cut_pad_width.abs() < f64::EPSILON);
        assert!(params.blank_size.abs() < f64::EPSILON);
        assert_eq!(params.group_count, 0);
    }

    #[test]
    fn zero_group_count_is_one_group() {
        let params = PadArrayParams::builder()
            .pads_per_column(2)
            .column_count(3)
            .build();
        assert_eq!(params.effective_groups(), 1);
        assert_eq!(params.pad_count(), 6);
    }

    #[test]
    fn pad_count_scales_with_groups() {
        let params = PadArrayParams::builder()
            .pads_per_column(2)
            .column_count(3)
            .group_count(5)
            .build();
        assert_eq!(params.pad_count(), 30);
    }
}
