//! Level curve - cumulative experience thresholds per level.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Cumulative experience required to advance from `level` to `level + 1`.
///
/// The first three levels use fixed thresholds (20, 45, 80); beyond that
/// each level adds `level * 10` to the previous requirement. Computed
/// iteratively so arbitrarily high levels never grow the stack.
///
/// # Errors
///
/// - `InvalidInput` if `level` is 0 (levels start at 1)
pub fn requirement(level: u32) -> Result<i64, DomainError> {
    match level {
        0 => Err(DomainError::new(
            ErrorCode::InvalidInput,
            "Level must be at least 1",
        )),
        1 => Ok(20),
        2 => Ok(45),
        3 => Ok(80),
        _ => {
            let mut req: i64 = 80;
            for l in 4..=i64::from(level) {
                req += l * 10;
            }
            Ok(req)
        }
    }
}
