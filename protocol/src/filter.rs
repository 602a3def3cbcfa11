//! Filter design math
//!
//! Pure functions turning cutoff frequencies into coefficient sections
//! and back. Coefficients are computed in f64 and normalized so the
//! implicit A0 is 1; the feedback terms use the DSP's accumulate
//! convention, i.e. `y[n] = B·x + A1·y[n-1] + A2·y[n-2]`.
//!
//! Nothing here validates frequency ranges. Callers are expected to
//! clamp cutoffs to something sane before designing a filter.

use core::f64::consts::PI;

/// Base of the historical first-order exponential design. Kept at 2.7
/// (not e) to stay register-compatible with existing deployments.
pub const EXP_BASE: f64 = 2.7;

/// Internal sampling rate of the target DSP core.
pub const SAMPLING_RATE_DEFAULT: f64 = 48_000.0;

const BUTTERWORTH_Q: f64 = core::f64::consts::FRAC_1_SQRT_2;

/// One second-order filter section. First-order designs leave `b2` and
/// `a2` at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema)
)]
pub struct FilterSection {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl FilterSection {
    /// Recovers the cutoff frequency this section was designed for by
    /// inverting the first-order form: `f = -fs·ln(a1) / (2π·ln(base))`.
    ///
    /// Exact for [`FilterDesign::FirstOrder`] sections (highpass and
    /// lowpass alike, since `a1` only depends on the cutoff). For
    /// Butterworth sections the same inversion is applied and is only
    /// an approximation. Returns `None` when `a1` is outside the log
    /// domain.
    pub fn cutoff_frequency(&self, sampling_rate: f64) -> Option<f64> {
        if self.a1 <= 0.0 {
            return None;
        }
        Some(-sampling_rate * self.a1.ln() / (2.0 * PI * EXP_BASE.ln()))
    }
}

/// Selects which coefficient formulas a crossover band is built from.
///
/// Both variants produce sections in the same register layout; they
/// differ in slope (6 vs 12 dB/octave) and in how precisely the cutoff
/// can be recovered from a readback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema)
)]
pub enum FilterDesign {
    /// First-order exponential sections. Exactly invertible.
    #[default]
    FirstOrder,
    /// Second-order Butterworth biquads at Q = 1/√2.
    Butterworth,
}

impl FilterDesign {
    /// Lowpass section with unity-normalized passband scaled by `gain`
    /// (linear).
    pub fn lowpass(self, cutoff: f64, gain: f64, sampling_rate: f64) -> FilterSection {
        match self {
            FilterDesign::FirstOrder => {
                let a1 = EXP_BASE.powf(-2.0 * PI * cutoff / sampling_rate);
                FilterSection {
                    b0: gain * (1.0 - a1),
                    b1: 0.0,
                    b2: 0.0,
                    a1,
                    a2: 0.0,
                }
            }
            FilterDesign::Butterworth => {
                let (alpha, cos_omega) = butterworth_terms(cutoff, sampling_rate);
                let a0 = 1.0 + alpha;
                FilterSection {
                    b0: gain * (1.0 - cos_omega) / (2.0 * a0),
                    b1: gain * (1.0 - cos_omega) / a0,
                    b2: gain * (1.0 - cos_omega) / (2.0 * a0),
                    a1: 2.0 * cos_omega / a0,
                    a2: (alpha - 1.0) / a0,
                }
            }
        }
    }

    /// Highpass counterpart of [`lowpass`](Self::lowpass).
    pub fn highpass(self, cutoff: f64, gain: f64, sampling_rate: f64) -> FilterSection {
        match self {
            FilterDesign::FirstOrder => {
                let a1 = EXP_BASE.powf(-2.0 * PI * cutoff / sampling_rate);
                let b1 = (1.0 + a1) * 0.5 * gain;
                FilterSection {
                    b0: -b1,
                    b1,
                    b2: 0.0,
                    a1,
                    a2: 0.0,
                }
            }
            FilterDesign::Butterworth => {
                let (alpha, cos_omega) = butterworth_terms(cutoff, sampling_rate);
                let a0 = 1.0 + alpha;
                // Same denominator as the lowpass at this cutoff, only
                // the numerator changes.
                FilterSection {
                    b0: gain * (1.0 + cos_omega) / (2.0 * a0),
                    b1: -gain * (1.0 + cos_omega) / a0,
                    b2: gain * (1.0 + cos_omega) / (2.0 * a0),
                    a1: 2.0 * cos_omega / a0,
                    a2: (alpha - 1.0) / a0,
                }
            }
        }
    }

    /// Designs the two sections of a bandpass cascade for the cutoff
    /// pair `(low_cut, high_cut)`. The returned tuple is
    /// `(highpass, lowpass)`, in register order.
    ///
    /// Which cutoff parameterizes which section is controlled by
    /// `orientation`; see [`BandOrientation`].
    pub fn bandpass(
        self,
        low_cut: f64,
        high_cut: f64,
        gain: f64,
        sampling_rate: f64,
        orientation: BandOrientation,
    ) -> (FilterSection, FilterSection) {
        let (hp_cut, lp_cut) = orientation.assign(low_cut, high_cut);
        (
            self.highpass(hp_cut, gain, sampling_rate),
            self.lowpass(lp_cut, gain, sampling_rate),
        )
    }
}

/// Maps the `(low_cut, high_cut)` pair of a band onto its highpass and
/// lowpass sections.
///
/// The historical firmware fed the *high* cutoff to the highpass
/// section and the *low* cutoff to the lowpass section, which is the
/// inverse of the usual bandpass convention. Deployed devices depend
/// on that layout, so it stays the default; the conventional
/// assignment is available for hardware verified to expect it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema)
)]
pub enum BandOrientation {
    /// `highpass ← high_cut`, `lowpass ← low_cut` (historical layout).
    #[default]
    HighpassTracksHighCut,
    /// `highpass ← low_cut`, `lowpass ← high_cut`.
    HighpassTracksLowCut,
}

impl BandOrientation {
    /// Returns `(highpass_cutoff, lowpass_cutoff)`.
    pub fn assign(self, low_cut: f64, high_cut: f64) -> (f64, f64) {
        match self {
            BandOrientation::HighpassTracksHighCut => (high_cut, low_cut),
            BandOrientation::HighpassTracksLowCut => (low_cut, high_cut),
        }
    }

    /// Inverse of [`assign`](Self::assign): maps the cutoffs extracted
    /// from the two sections back to `(low_cut, high_cut)`.
    pub fn recover(self, highpass_cutoff: f64, lowpass_cutoff: f64) -> (f64, f64) {
        match self {
            BandOrientation::HighpassTracksHighCut => (lowpass_cutoff, highpass_cutoff),
            BandOrientation::HighpassTracksLowCut => (highpass_cutoff, lowpass_cutoff),
        }
    }
}

fn butterworth_terms(cutoff: f64, sampling_rate: f64) -> (f64, f64) {
    let omega = 2.0 * PI * cutoff / sampling_rate;
    let alpha = omega.sin() / (2.0 * BUTTERWORTH_Q);
    (alpha, omega.cos())
}
