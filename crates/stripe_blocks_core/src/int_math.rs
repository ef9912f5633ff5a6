/// The greatest integer `r` such that `r^n <= value`.
///
/// A floating point estimate is corrected with exact integer powers, so perfect powers like `32^4` are never rounded down
/// to 31 by `powf` error.
///
/// # Panics
///
/// If `n` is 0.
#[inline]
pub fn integer_nth_root(value: u64, n: u32) -> u64 {
    assert!(n > 0, "the 0th root is undefined");

    if n == 1 || value < 2 {
        return value;
    }

    let mut root = (value as f64).powf(1.0 / n as f64) as u64;
    while root > 0 && pow_exceeds(root, n, value) {
        root -= 1;
    }
    while !pow_exceeds(root + 1, n, value) {
        root += 1;
    }

    root
}

#[inline]
fn pow_exceeds(base: u64, n: u32, value: u64) -> bool {
    base.checked_pow(n).map_or(true, |p| p > value)
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
