//! CIEDE2000 color difference
//!
//! The CIE 2000 ΔE formula (CIE Technical Report 142-2001) is the ranking
//! metric for all catalog matching. Unlike plain Euclidean distance in Lab,
//! it corrects for the eye's uneven sensitivity across lightness, chroma,
//! and hue, including the rotation term that fixes the blue region.

use crate::color::Lab;

// 25^7, the constant in the G and RC chroma compression terms
const POW25_7: f64 = 6_103_515_625.0;

/// CIEDE2000 difference between two Lab colors.
///
/// Parametric weights are fixed at `kL = kC = kH = 1` (the graphic-arts
/// reference condition). The result is symmetric and non-negative; zero
/// means perceptually identical. As a rule of thumb, values below 1.0 are
/// imperceptible and values below 2.0 only show side by side.
///
/// # Example
///
/// ```
/// use chroma_delta::{delta_e2000, Lab};
///
/// let de = delta_e2000(Lab::new(50.0, 2.5, 0.0), Lab::new(50.0, 0.0, -2.5));
/// assert!((de - 4.3065).abs() < 1e-3);
/// ```
pub fn delta_e2000(lab1: Lab, lab2: Lab) -> f64 {
    let c1_ab = lab1.chroma();
    let c2_ab = lab2.chroma();
    let c_ab_mean = (c1_ab + c2_ab) / 2.0;

    // G compresses the a axis for low-chroma colors
    let c_ab_mean7 = c_ab_mean.powi(7);
    let g = 0.5 * (1.0 - (c_ab_mean7 / (c_ab_mean7 + POW25_7)).sqrt());

    let a1p = lab1.a * (1.0 + g);
    let a2p = lab2.a * (1.0 + g);
    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);

    let h1p = hue_angle(a1p, lab1.b);
    let h2p = hue_angle(a2p, lab2.b);

    let dl_p = lab2.l - lab1.l;
    let dc_p = c2p - c1p;

    // Hue difference is meaningless when either color is neutral
    let dh_p = if c1p * c2p == 0.0 {
        0.0
    } else {
        let dh = h2p - h1p;
        if dh.abs() <= 180.0 {
            dh
        } else if dh > 180.0 {
            dh - 360.0
        } else {
            dh + 360.0
        }
    };
    let dhh_p = 2.0 * (c1p * c2p).sqrt() * (dh_p / 2.0).to_radians().sin();

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let c_mean = (c1p + c2p) / 2.0;

    // Circular mean of the hue angles, degenerating to the plain sum when
    // either chroma is zero (per the published formula)
    let h_mean = if c1p * c2p == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_mean_minus_50_sq = (l_mean - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l_mean_minus_50_sq / (20.0 + l_mean_minus_50_sq).sqrt();
    let sc = 1.0 + 0.045 * c_mean;
    let sh = 1.0 + 0.015 * c_mean * t;

    // Rotation term for the blue region (hue ~275 degrees)
    let d_theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let c_mean7 = c_mean.powi(7);
    let rc = 2.0 * (c_mean7 / (c_mean7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * d_theta).to_radians().sin();

    let term_l = dl_p / sl;
    let term_c = dc_p / sc;
    let term_h = dhh_p / sh;

    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h).sqrt()
}

/// Hue angle of `(a, b)` in degrees, normalized to `[0, 360)`.
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}
