/// Numeric conversion helpers.
///
/// This module holds the conversion policy used by the integer entry point:
/// truncation toward zero with saturating bounds. The policy lives in one
/// place so the behavior is deliberate rather than an accident of whichever
/// cast happens to be nearest.
pub mod num;
