use crate::foundation::core::Rgb8;

/// Nine-step sequential blue scheme, light to dark.
const BLUES: [Rgb8; 9] = [
    Rgb8::new(0xf7, 0xfb, 0xff),
    Rgb8::new(0xde, 0xeb, 0xf7),
    Rgb8::new(0xc6, 0xdb, 0xef),
    Rgb8::new(0x9e, 0xca, 0xe1),
    Rgb8::new(0x6b, 0xae, 0xd6),
    Rgb8::new(0x42, 0x92, 0xc6),
    Rgb8::new(0x21, 0x71, 0xb5),
    Rgb8::new(0x08, 0x51, 0x9c),
    Rgb8::new(0x08, 0x30, 0x6b),
];

/// Continuous blue ramp over `t` in `[0, 1]` (clamped; NaN reads as 0).
///
/// Channels follow a uniform cubic B-spline through [`BLUES`], so the ramp passes exactly through
/// the first and last scheme colors.
pub fn interpolate_blues(t: f64) -> Rgb8 {
    let t = if t.is_nan() { 0.0 } else { t };
    Rgb8 {
        r: channel(t, |c| c.r),
        g: channel(t, |c| c.g),
        b: channel(t, |c| c.b),
    }
}

fn channel(t: f64, pick: impl Fn(&Rgb8) -> u8) -> u8 {
    let values: Vec<f64> = BLUES.iter().map(|c| f64::from(pick(c))).collect();
    basis_spline(&values, t).round().clamp(0.0, 255.0) as u8
}

fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };

    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 {
        values[i + 2]
    } else {
        2.0 * v2 - v1
    };

    let t1 = (t - i as f64 / n as f64) * n as f64;
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}
