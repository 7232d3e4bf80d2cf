//! Hilbert transform approximation.

/*
The Hilbert transform shifts every frequency component of a signal by -90°:

    cos(ωt)  →  sin(ωt)
    sin(ωt)  → -cos(ωt)

In the frequency domain that is a multiplication by

    -j   for positive frequencies (bins 1 .. N/2)
    +j   for negative frequencies (bins N/2 + 1 .. N)
     0   for DC and the Nyquist bin

so (a + jb)·(-j) = b - ja and (a + jb)·(+j) = -b + ja.

The input is zero-padded up to the transform size, so the result is the
transform of a periodic extension of the padded block. Samples near the ends
of the block carry some error from that wrap-around.
*/

use super::dft::Transform;

/// Approximate the Hilbert transform of `signal` using `transform`.
///
/// Returns `min(signal.len(), transform.size())` samples.
pub fn hilbert<T: Transform + ?Sized>(signal: &[f64], transform: &mut T) -> Vec<f64> {
    let size = transform.size();
    let mut spectrum = transform.forward(signal);
    let half = size / 2;

    for k in 0..size {
        let (re, im) = (spectrum.re[k], spectrum.im[k]);
        let (new_re, new_im) = if k == 0 || (size % 2 == 0 && k == half) {
            (0.0, 0.0)
        } else if k <= half {
            (im, -re)
        } else {
            (-im, re)
        };
        spectrum.re[k] = new_re;
        spectrum.im[k] = new_im;
    }

    let mut output = transform.inverse(&spectrum);
    output.truncate(signal.len().min(size));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::dft::{DirectDft, PlannedFft};
    use std::f64::consts::TAU;

    fn tone(size: usize, bin: usize, phase: f64) -> Vec<f64> {
        (0..size)
            .map(|n| (TAU * bin as f64 * n as f64 / size as f64 + phase).cos())
            .collect()
    }

    #[test]
    fn cosine_becomes_sine() {
        let size = 64;
        let input = tone(size, 5, 0.0);
        let output = hilbert(&input, &mut DirectDft::new(size));

        for (n, y) in output.iter().enumerate() {
            let expected = (TAU * 5.0 * n as f64 / size as f64).sin();
            assert!((y - expected).abs() < 1e-9, "n={n}: expected {expected}, got {y}");
        }
    }

    #[test]
    fn sine_becomes_negative_cosine() {
        let size = 64;
        let input = tone(size, 3, -std::f64::consts::FRAC_PI_2); // sin
        let output = hilbert(&input, &mut PlannedFft::new(size));

        for (n, y) in output.iter().enumerate() {
            let expected = -(TAU * 3.0 * n as f64 / size as f64).cos();
            assert!((y - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn dc_is_removed() {
        let output = hilbert(&[1.0; 16], &mut DirectDft::new(16));
        assert!(output.iter().all(|y| y.abs() < 1e-9));
    }

    #[test]
    fn output_matches_input_length() {
        let output = hilbert(&[0.5; 10], &mut DirectDft::new(16));
        assert_eq!(output.len(), 10);
    }
}
