// Turbo colormap, polynomial approximation (Mikhailov, Google AI 2019).
// Error against the reference lookup table stays below what an 8-bit
// framebuffer can resolve.

const TURBO_RED: [f32; 6] = [
    0.135_721_38,
    4.615_392_6,
    -42.660_324,
    132.131_08,
    -152.942_4,
    59.286_38,
];
const TURBO_GREEN: [f32; 6] = [
    0.091_402_61,
    2.194_188_4,
    4.842_966_6,
    -14.185_033,
    4.277_298_6,
    2.829_566,
];
const TURBO_BLUE: [f32; 6] = [
    0.106_673_3,
    12.641_946,
    -60.582_047,
    110.362_77,
    -89.903_11,
    27.348_25,
];

fn polynomial(coefficients: &[f32; 6], t: f32) -> f32 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * t + c)
        .clamp(0.0, 1.0)
}

/// Maps a scalar in [0, 1] to an RGB color from the Turbo colormap.
/// Out-of-range inputs clamp to the end colors.
pub fn turbo(t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        polynomial(&TURBO_RED, t),
        polynomial(&TURBO_GREEN, t),
        polynomial(&TURBO_BLUE, t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turbo_low_end_is_blue_dominant() {
        let rgb = turbo(0.0);
        assert!(rgb[2] > rgb[1]);
        assert!(rgb[0] < 0.3);
    }

    #[test]
    fn test_turbo_high_end_is_red_dominant() {
        let rgb = turbo(1.0);
        assert!(rgb[0] > rgb[1]);
        assert!(rgb[0] > rgb[2]);
    }

    #[test]
    fn test_turbo_midpoint_is_green_dominant() {
        let rgb = turbo(0.5);
        assert!(rgb[1] > rgb[0]);
        assert!(rgb[1] > rgb[2]);
    }

    #[test]
    fn test_turbo_channels_stay_in_range() {
        for i in 0..=100 {
            let rgb = turbo(i as f32 / 100.0);
            for channel in rgb {
                assert!(
                    (0.0..=1.0).contains(&channel),
                    "channel out of range: {}",
                    channel
                );
            }
        }
    }

    #[test]
    fn test_turbo_clamps_out_of_range_input() {
        assert_eq!(turbo(-1.0), turbo(0.0));
        assert_eq!(turbo(2.0), turbo(1.0));
    }
}
