//! Solve the width relations for a coupling
//!
//! Every function computes a squared coupling, then takes its non-negative
//! square root. Physically inconsistent inputs (say, a total width smaller
//! than the visible width alone) give a negative square and hence NaN.

use crate::{
    numeric::Float,
    phase_space::{phi_inv, phi_vis, MT},
    widths::width_vis,
};

use prefix_num_ops::real::*;

/// gDM reproducing a total width, at fixed gSM
#[doc(alias = "get_gDM_from_width")]
pub fn g_dm_from_width(width: Float, g_sm: Float, m_v: Float, m_dm: Float) -> Float {
    let g_dm2 = (width - width_vis(g_sm, m_v)) / phi_inv(m_dm, m_v);
    sqrt(g_dm2)
}

/// gDM reproducing an invisible branching ratio, at fixed gSM
///
/// Infinite at BR = 1, where the visible width would have to vanish.
#[doc(alias = "get_gDM_from_BR")]
pub fn g_dm_from_br(br: Float, g_sm: Float, m_v: Float, m_dm: Float) -> Float {
    let g_dm2 = powi(g_sm, 2) * (br / (1. - br)) * phi_vis(MT, m_v) / phi_inv(m_dm, m_v);
    sqrt(g_dm2)
}

/// gSM reproducing both a total width and an invisible branching ratio
///
/// `m_dm` does not enter the visible width; it is kept so that both
/// couplings are solved from the same argument list.
#[doc(alias = "get_gSM_from_BRwidth")]
pub fn g_sm_from_br_width(br: Float, width: Float, m_v: Float, _m_dm: Float) -> Float {
    let g_sm2 = width / phi_vis(MT, m_v) * (1. - br);
    sqrt(g_sm2)
}

/// gDM reproducing both a total width and an invisible branching ratio
#[doc(alias = "get_gDM_from_BRwidth")]
pub fn g_dm_from_br_width(br: Float, width: Float, m_v: Float, m_dm: Float) -> Float {
    let g_dm2 = width / phi_inv(m_dm, m_v) * br;
    sqrt(g_dm2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widths::{branching_ratio, total_width, width_inv};

    fn assert_rel_close(got: Float, expected: Float) {
        let tol = (1e-6 as Float).max(100. * Float::EPSILON) * expected.abs();
        assert!(
            (got - expected).abs() <= tol,
            "got {got}, expected {expected}"
        );
    }

    #[test]
    fn width_round_trip() {
        let (g_sm, m_v, m_dm) = (0.7, 1000., 100.);
        let width = 250.;
        let g_dm = g_dm_from_width(width, g_sm, m_v, m_dm);
        assert_rel_close(width_vis(g_sm, m_v) + width_inv(g_dm, m_v, m_dm), width);
    }

    #[test]
    fn width_below_visible_is_nan() {
        let width = 0.5 * width_vis(1., 1000.);
        assert!(g_dm_from_width(width, 1., 1000., 100.).is_nan());
    }

    #[test]
    fn br_round_trip() {
        let (g_sm, m_v, m_dm) = (1.2, 1500., 10.);
        for &br in &[0.05, 0.3, 0.5, 0.9] {
            let g_dm = g_dm_from_br(br, g_sm, m_v, m_dm);
            assert_rel_close(branching_ratio(g_sm, g_dm, m_v, m_dm), br);
        }
    }

    #[test]
    fn br_of_one_is_infinite() {
        assert_eq!(g_dm_from_br(1., 1., 1000., 100.), Float::INFINITY);
    }

    #[test]
    fn br_of_zero_gives_no_dark_coupling() {
        assert_eq!(g_dm_from_br(0., 1., 1000., 100.), 0.);
    }

    #[test]
    fn br_width_pair_reproduces_observables() {
        let (m_v, m_dm) = (2000., 300.);
        let (br, width) = (0.4, 120.);
        let g_sm = g_sm_from_br_width(br, width, m_v, m_dm);
        let g_dm = g_dm_from_br_width(br, width, m_v, m_dm);
        assert_rel_close(total_width(g_sm, g_dm, m_v, m_dm), width);
        assert_rel_close(branching_ratio(g_sm, g_dm, m_v, m_dm), br);
    }

    #[test]
    fn br_above_one_is_nan() {
        assert!(g_sm_from_br_width(1.5, 100., 1000., 100.).is_nan());
        assert!(g_dm_from_br_width(-0.5, 100., 1000., 100.).is_nan());
    }
}
