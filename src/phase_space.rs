//! Two-body phase space factors of the mediator decays
//!
//! Each factor turns a squared coupling into a partial width (eq. 3.1 of
//! arXiv:1407.7529). Below the kinematic threshold the square root of a
//! negative number makes the invisible factor NaN. This is left to IEEE-754
//! arithmetic: callers scanning mass grids get NaN holes rather than errors.

use crate::numeric::{reals::consts::PI, Float};

use prefix_num_ops::real::*;

/// Top quark mass (GeV)
pub const MT: Float = 172.;

/// Phase space factor of the invisible decay V → χχ̄
///
/// With r = mDM/mV, this is (mV/12π)·√(1 - 4r²)·(1 + 2r²). It vanishes at
/// threshold and is NaN for mDM > mV/2.
#[doc(alias = "PhiInv")]
pub fn phi_inv(m_dm: Float, m_v: Float) -> Float {
    let r2 = powi(m_dm / m_v, 2);
    (m_v / (12. * PI)) * sqrt(1. - 4. * r2) * (1. + 2. * r2)
}

/// Phase space factor of the visible decay V → tū (flavour changing)
///
/// With r = mt/mV, this is (mV/π)·(1 - r²)·(1 - r²/2 - r⁴/2). The expression
/// vanishes at mV = mt but has no threshold guard: below it the two factors
/// flip sign together, so it stays finite and positive while unphysical.
#[doc(alias = "PhiVis")]
pub fn phi_vis(mt: Float, m_v: Float) -> Float {
    let r2 = powi(mt / m_v, 2);
    (m_v / PI) * (1. - r2) * (1. - 0.5 * r2 - 0.5 * powi(r2, 2))
}
