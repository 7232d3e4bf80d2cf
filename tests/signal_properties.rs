use wavelab::{
    dsp::{
        hilbert::hilbert,
        modulate::{ModulationKind, Sideband},
        DirectDft, PlannedFft, Transform, Waveform,
    },
    plot, series, AmParams, AmSignals, FFT_SIZE, SAMPLE_COUNT, SAMPLE_RATE,
};

fn bin_of(freq_hz: f64) -> usize {
    (freq_hz * FFT_SIZE as f64 / SAMPLE_RATE).round() as usize
}

/// Strongest magnitude within ±2 bins of `freq_hz`
fn peak_near(magnitudes: &[f64], freq_hz: f64) -> f64 {
    let center = bin_of(freq_hz);
    magnitudes[center - 2..=center + 2]
        .iter()
        .copied()
        .fold(0.0, f64::max)
}

#[test]
fn dft_round_trip_restores_message() {
    let params = AmParams::default();
    let mut dft = DirectDft::new(FFT_SIZE);
    let signals = AmSignals::generate(&params, &mut dft);

    let spectrum = dft.forward(&signals.message);
    let restored = dft.inverse(&spectrum);

    assert_eq!(restored.len(), FFT_SIZE);
    for (i, (a, b)) in signals.message.iter().zip(&restored).enumerate() {
        assert!((a - b).abs() < 1e-9, "sample {i}: expected {a}, got {b}");
    }
    // Zero padding comes back as zeros
    assert!(restored[SAMPLE_COUNT..].iter().all(|x| x.abs() < 1e-9));
}

#[test]
fn direct_and_planned_transforms_agree_on_modulated_signal() {
    let mut params = AmParams::default();
    params.message.waveform = Waveform::Triangle;
    let signals = AmSignals::generate(&params, &mut DirectDft::new(FFT_SIZE));

    let direct = DirectDft::new(FFT_SIZE).forward(&signals.modulated);
    let planned = PlannedFft::new(FFT_SIZE).forward(&signals.modulated);

    for k in 0..FFT_SIZE {
        assert!((direct.re[k] - planned.re[k]).abs() < 1e-6, "re[{k}]");
        assert!((direct.im[k] - planned.im[k]).abs() < 1e-6, "im[{k}]");
    }
}

#[test]
fn hilbert_of_bin_aligned_cosine_is_sine() {
    let size = 128;
    let cosine: Vec<f64> = (0..size)
        .map(|n| (std::f64::consts::TAU * 7.0 * n as f64 / size as f64).cos())
        .collect();

    for transform in [
        &mut DirectDft::new(size) as &mut dyn Transform,
        &mut PlannedFft::new(size) as &mut dyn Transform,
    ] {
        let shifted = hilbert(&cosine, transform);
        for (n, y) in shifted.iter().enumerate() {
            let expected = (std::f64::consts::TAU * 7.0 * n as f64 / size as f64).sin();
            assert!((y - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn dsb_spectrum_has_carrier_and_both_sidebands() {
    let mut params = AmParams::default();
    params.message.frequency = 10.0;
    params.message.amplitude = 0.5;
    params.carrier.frequency = 100.0;
    params.kind = ModulationKind::Dsb;

    let mut fft = PlannedFft::new(FFT_SIZE);
    let signals = AmSignals::generate(&params, &mut fft);
    let spectrum = fft.forward(&signals.modulated);

    let dominant = plot::dominant_bin(&spectrum).expect("non-empty spectrum");
    assert!(dominant.abs_diff(bin_of(100.0)) <= 1, "dominant bin {dominant}");

    let magnitudes = spectrum.magnitudes();
    let carrier = peak_near(&magnitudes, 100.0);
    let upper = peak_near(&magnitudes, 110.0);
    let lower = peak_near(&magnitudes, 90.0);
    assert!(upper > carrier * 0.1);
    assert!(lower > carrier * 0.1);
    assert!((upper / lower - 1.0).abs() < 0.5, "upper {upper}, lower {lower}");
}

#[test]
fn ssb_keeps_only_the_selected_sideband() {
    let mut params = AmParams::default();
    params.message.frequency = 5.0;
    params.carrier.frequency = 100.0;
    params.kind = ModulationKind::Ssb;

    for (sideband, kept, removed) in [(Sideband::Upper, 105.0, 95.0), (Sideband::Lower, 95.0, 105.0)] {
        params.sideband = sideband;
        let mut dft = DirectDft::new(FFT_SIZE);
        let signals = AmSignals::generate(&params, &mut dft);
        let magnitudes = dft.forward(&signals.modulated).magnitudes();

        let kept_peak = peak_near(&magnitudes, kept);
        let removed_peak = peak_near(&magnitudes, removed);
        assert!(
            kept_peak > 4.0 * removed_peak,
            "{sideband}: kept {kept_peak}, removed {removed_peak}"
        );
    }
}

#[test]
fn partial_sums_converge_to_square_wave() {
    let samples = 1000;
    let ideal: Vec<f64> = (0..=samples)
        .map(|i| series::ideal_square(i as f64 / samples as f64, series::FUNDAMENTAL_HZ))
        .collect();

    let mse = |harmonics: u32| {
        let sum = series::sample_partial_sum(harmonics, samples);
        sum.iter()
            .zip(&ideal)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            / ideal.len() as f64
    };

    let errors: Vec<f64> = [1, 3, 9, 27, 81].into_iter().map(mse).collect();
    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "error did not shrink: {errors:?}");
    }
    assert!(errors[4] < 0.02, "81 harmonics still far off: {}", errors[4]);
}

#[test]
fn generators_repeat_every_period() {
    let freq = 4.0;
    let period = 1.0 / freq;
    for waveform in Waveform::ALL {
        for t in [0.013, 0.097, 0.161, 0.233] {
            let a = waveform.sample(1.5, freq, t);
            let b = waveform.sample(1.5, freq, t + period);
            let c = waveform.sample(1.5, freq, t + 3.0 * period);
            assert!((a - b).abs() < 1e-9, "{waveform} at {t}");
            assert!((a - c).abs() < 1e-9, "{waveform} at {t}");
        }
    }
}

#[test]
fn silent_message_normalizes_without_dividing_by_zero() {
    let mut params = AmParams::default();
    params.message.amplitude = 0.0;
    params.kind = ModulationKind::Ssb;
    let signals = AmSignals::generate(&params, &mut PlannedFft::new(FFT_SIZE));

    let points = plot::trace_points(&signals.message);
    assert!(points.iter().all(|(_, y)| *y == 0.0));

    // SSB of silence is silence
    let spectrum = PlannedFft::new(FFT_SIZE).forward(&signals.modulated);
    let points = plot::spectrum_points(&spectrum, SAMPLE_RATE);
    assert!(points.iter().all(|(_, m)| m.is_finite()));
}
