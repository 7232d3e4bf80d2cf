use std::f64::consts::TAU;
use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

/*
Discrete Fourier Transform
==========================

The DFT turns N time-domain samples into N frequency-domain coefficients.
Coefficient k measures how much of the frequency k · (sample_rate / N) the
signal contains.

Forward:

    X[k] = Σ_n x[n] · (cos θ + j sin θ),   θ = -2π k n / N

Inverse (real part only, since every signal here is real):

    x[n] = (1/N) · Σ_k (Re X[k] · cos φ - Im X[k] · sin φ),   φ = 2π k n / N

Bins above N/2 mirror the ones below as negative frequencies. For real input
X[N - k] is the complex conjugate of X[k].

DirectDft evaluates both sums literally: O(N²) multiply-adds, no windowing.
PlannedFft produces the same coefficients through rustfft in O(N log N).
*/

/// Paired real/imaginary coefficients produced by a forward transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub re: Vec<f64>,
    pub im: Vec<f64>,
}

impl Spectrum {
    pub fn zeros(size: usize) -> Self {
        Self {
            re: vec![0.0; size],
            im: vec![0.0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// |X[k]| for every bin.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.re
            .iter()
            .zip(&self.im)
            .map(|(re, im)| (re * re + im * im).sqrt())
            .collect()
    }
}

/// A forward/inverse transform pair of fixed size.
///
/// `forward` zero-pads input shorter than [`Transform::size`] and ignores
/// samples past it.
pub trait Transform {
    fn size(&self) -> usize;

    fn forward(&mut self, input: &[f64]) -> Spectrum;

    /// Real part of the inverse transform, scaled by `1 / size`.
    fn inverse(&mut self, spectrum: &Spectrum) -> Vec<f64>;
}

/// Copy `input` into a buffer of exactly `size` samples.
fn fit_to_size(input: &[f64], size: usize) -> Vec<f64> {
    let mut padded = vec![0.0; size];
    let n = input.len().min(size);
    padded[..n].copy_from_slice(&input[..n]);
    padded
}

/// Textbook DFT that evaluates every coefficient directly.
#[derive(Debug, Clone)]
pub struct DirectDft {
    size: usize,
}

impl DirectDft {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Transform for DirectDft {
    fn size(&self) -> usize {
        self.size
    }

    fn forward(&mut self, input: &[f64]) -> Spectrum {
        let input = fit_to_size(input, self.size);
        let n_total = self.size as f64;
        let mut spectrum = Spectrum::zeros(self.size);

        for k in 0..self.size {
            let mut re = 0.0;
            let mut im = 0.0;
            for (n, &x) in input.iter().enumerate() {
                let angle = -TAU * k as f64 * n as f64 / n_total;
                re += x * angle.cos();
                im += x * angle.sin();
            }
            spectrum.re[k] = re;
            spectrum.im[k] = im;
        }

        spectrum
    }

    fn inverse(&mut self, spectrum: &Spectrum) -> Vec<f64> {
        let size = spectrum.len().min(self.size);
        let n_total = self.size as f64;
        let mut output = vec![0.0; self.size];

        for (n, out) in output.iter_mut().enumerate() {
            let mut acc = 0.0;
            for k in 0..size {
                let angle = TAU * k as f64 * n as f64 / n_total;
                acc += spectrum.re[k] * angle.cos() - spectrum.im[k] * angle.sin();
            }
            *out = acc / n_total;
        }

        output
    }
}

/// rustfft-backed transform with the same contract as [`DirectDft`].
pub struct PlannedFft {
    size: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    buffer: Vec<Complex<f64>>,
}

impl PlannedFft {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(size);
        let inverse = planner.plan_fft_inverse(size);

        Self {
            size,
            forward,
            inverse,
            buffer: vec![Complex::new(0.0, 0.0); size],
        }
    }
}

impl Transform for PlannedFft {
    fn size(&self) -> usize {
        self.size
    }

    fn forward(&mut self, input: &[f64]) -> Spectrum {
        let input = fit_to_size(input, self.size);
        for (slot, &x) in self.buffer.iter_mut().zip(&input) {
            *slot = Complex::new(x, 0.0);
        }

        self.forward.process(&mut self.buffer);

        Spectrum {
            re: self.buffer.iter().map(|c| c.re).collect(),
            im: self.buffer.iter().map(|c| c.im).collect(),
        }
    }

    fn inverse(&mut self, spectrum: &Spectrum) -> Vec<f64> {
        for (k, slot) in self.buffer.iter_mut().enumerate() {
            *slot = match (spectrum.re.get(k), spectrum.im.get(k)) {
                (Some(&re), Some(&im)) => Complex::new(re, im),
                _ => Complex::new(0.0, 0.0),
            };
        }

        // rustfft leaves the inverse unnormalized
        self.inverse.process(&mut self.buffer);

        let scale = 1.0 / self.size.max(1) as f64;
        self.buffer.iter().map(|c| c.re * scale).collect()
    }
}
