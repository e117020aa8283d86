/// Integer division rounding half up, i.e. `floor(numerator / denominator + 1/2)`.
///
/// The denominator must be positive.
pub fn div_round_half_up(numerator: i64, denominator: i64) -> i64 {
    debug_assert!(denominator > 0);
    (2 * numerator + denominator).div_euclid(2 * denominator)
}
