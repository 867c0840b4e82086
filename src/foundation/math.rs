pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Convert premultiplied RGBA8 into straight alpha, in place.
pub(crate) fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div255_rounds() {
        assert_eq!(mul_div255_u16(255, 255), 255);
        assert_eq!(mul_div255_u16(128, 255), 128);
        assert_eq!(mul_div255_u16(0, 200), 0);
    }

    #[test]
    fn demultiply_restores_straight_color() {
        let mut px = vec![64u8, 32, 0, 128, 10, 20, 30, 255, 0, 0, 0, 0];
        demultiply_rgba8_in_place(&mut px);
        assert_eq!(&px[0..4], &[128, 64, 0, 128]);
        assert_eq!(&px[4..8], &[10, 20, 30, 255]);
        assert_eq!(&px[8..12], &[0, 0, 0, 0]);
    }
}
