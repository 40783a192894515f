use crate::elementary::MathError;

/// Widest Pascal row kept on the stack. `C(n, r)` with `min(r, n−r) >= 64`
/// exceeds `i64` for every admissible `n`, so wider rows are never needed.
const MAX_ROW: usize = 64;

fn check_args(n: i32, r: i32) -> Result<(), MathError> {
    if n < 0 || r < 0 || r > n {
        return Err(MathError::DomainError);
    }
    Ok(())
}

/// Number of ordered selections of `r` items from `n`: `n! / (n−r)!`.
///
/// Computed as the falling product `n·(n−1)·…·(n−r+1)`.
///
/// # Errors
///
/// [`MathError::DomainError`] for negative arguments, `r > n`, or a result
/// that overflows `i64`.
///
/// # Example
///
/// ```
/// use elemath::combinatorics::permute;
///
/// assert_eq!(permute(10, 3).unwrap(), 720);
/// assert_eq!(permute(4, 0).unwrap(), 1);
/// ```
pub fn permute(n: i32, r: i32) -> Result<i64, MathError> {
    check_args(n, r)?;
    let n = i64::from(n);
    let r = i64::from(r);
    ((n - r + 1)..=n).try_fold(1i64, |acc, k| acc.checked_mul(k).ok_or(MathError::DomainError))
}

/// Binomial coefficient `C(n, r)`.
///
/// With `k = min(r, n−r)`, row `n−k` of Pascal's triangle is seeded
/// multiplicatively (`C(m, j) = C(m, j−1)·(m−j+1)/j`), then the last `k` rows
/// are built with `C(i, j) = C(i−1, j−1) + C(i−1, j)`, keeping only the first
/// `k + 1` entries of each row. Work is `O(k²)` whatever the size of `n`.
///
/// # Errors
///
/// [`MathError::DomainError`] for negative arguments, `r > n`, or a result
/// that overflows `i64`.
///
/// # Example
///
/// ```
/// use elemath::combinatorics::choose;
///
/// assert_eq!(choose(5, 2).unwrap(), 10);
/// assert_eq!(choose(7, 7).unwrap(), 1);
/// assert_eq!(choose(i32::MAX, 1).unwrap(), i64::from(i32::MAX));
/// assert!(choose(3, 4).is_err());
/// ```
pub fn choose(n: i32, r: i32) -> Result<i64, MathError> {
    check_args(n, r)?;
    let k = r.min(n - r) as usize;
    if k >= MAX_ROW {
        return Err(MathError::DomainError);
    }

    // Every seed entry is at most C(n, k), so an overflow here is final
    let m = i64::from(n) - k as i64;
    let mut row = [0i64; MAX_ROW];
    row[0] = 1;
    for j in 1..=k {
        let jj = j as i64;
        let next = i128::from(row[j - 1]) * i128::from(m - jj + 1) / i128::from(jj);
        row[j] = i64::try_from(next).map_err(|_| MathError::DomainError)?;
    }

    for _ in 0..k {
        for j in (1..=k).rev() {
            row[j] = row[j]
                .checked_add(row[j - 1])
                .ok_or(MathError::DomainError)?;
        }
    }
    Ok(row[k])
}
