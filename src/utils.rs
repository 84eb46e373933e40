use crate::constants::initialize_constants;

/// Relative-tolerance equality with an absolute floor of `f64::EPSILON`.
///
/// Returns true iff `|x - y| <= rtol * max(|x|, |y|) + f64::EPSILON`.
///
/// Non-finite inputs: NaN never compares equal (not even to itself), and an
/// infinity is equal only to the infinity of the same sign. A negative `rtol`
/// is clamped to zero.
pub fn is_equal_rel(x: f64, y: f64, rtol: f64) -> bool {
    if x.is_nan() || y.is_nan() {
        return false;
    }

    if x == y {
        return true;
    }

    if x.is_infinite() || y.is_infinite() {
        return false;
    }

    (x - y).abs() <= rtol.max(0.0) * x.abs().max(y.abs()) + f64::EPSILON
}

/// Converts `angle` in degrees to radians using the process-wide pi
pub fn degrees_to_radians(angle: f64) -> f64 {
    initialize_constants().degrees_to_radians(angle)
}

/// Converts `angle` in radians to degrees using the process-wide pi
pub fn radians_to_degrees(angle: f64) -> f64 {
    initialize_constants().radians_to_degrees(angle)
}
