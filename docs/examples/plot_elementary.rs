// Accuracy sweep: elemath vs std for sin, exp, ln and atan.
// Prints JSON with 200 evaluation points per function:
//   {"x":[...], "err_sin":[...], "x_exp":[...], "err_exp":[...],
//    "x_ln":[...], "err_ln":[...], "x_atan":[...], "err_atan":[...]}
// Errors are absolute for sin/ln/atan and relative for exp.

use elemath::elementary::{atan, exp, ln, sin};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.3e}")).collect();
    format!("[{}]", inner.join(","))
}

fn grid(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64).collect()
}

fn main() {
    const N: usize = 200;

    let x_sin = grid(-2.0 * std::f64::consts::PI, 2.0 * std::f64::consts::PI, N);
    let err_sin: Vec<f64> = x_sin.iter().map(|&x| sin(x) - x.sin()).collect();

    let x_exp = grid(-20.0, 20.0, N);
    let err_exp: Vec<f64> = x_exp.iter().map(|&x| (exp(x) - x.exp()) / x.exp()).collect();

    let x_ln = grid(0.05, 50.0, N);
    let err_ln: Vec<f64> = x_ln
        .iter()
        .map(|&x| ln(x).map_or(f64::NAN, |v| v - x.ln()))
        .collect();

    let x_atan = grid(-20.0, 20.0, N);
    let err_atan: Vec<f64> = x_atan
        .iter()
        .map(|&x| atan(x).map_or(f64::NAN, |v| v - x.atan()))
        .collect();

    println!(
        "{{\"x\":{},\"err_sin\":{},\"x_exp\":{},\"err_exp\":{},\"x_ln\":{},\"err_ln\":{},\"x_atan\":{},\"err_atan\":{}}}",
        fmt_arr(&x_sin),
        fmt_arr(&err_sin),
        fmt_arr(&x_exp),
        fmt_arr(&err_exp),
        fmt_arr(&x_ln),
        fmt_arr(&err_ln),
        fmt_arr(&x_atan),
        fmt_arr(&err_atan)
    );
}
