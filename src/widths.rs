//! Partial widths, total width and invisible branching ratio of the mediator

use crate::{
    numeric::Float,
    phase_space::{phi_inv, phi_vis, MT},
};

use prefix_num_ops::real::*;

/// Partial width of the visible decay, gSM²·Φvis(mt, mV)
#[doc(alias = "get_width_vis")]
pub fn width_vis(g_sm: Float, m_v: Float) -> Float {
    powi(g_sm, 2) * phi_vis(MT, m_v)
}

/// Partial width of the invisible decay, gDM²·Φinv(mDM, mV)
#[doc(alias = "get_width_inv")]
pub fn width_inv(g_dm: Float, m_v: Float, m_dm: Float) -> Float {
    powi(g_dm, 2) * phi_inv(m_dm, m_v)
}

/// Total width of the mediator
#[doc(alias = "get_total_width")]
pub fn total_width(g_sm: Float, g_dm: Float, m_v: Float, m_dm: Float) -> Float {
    width_vis(g_sm, m_v) + width_inv(g_dm, m_v, m_dm)
}

/// Invisible branching ratio Γinv / Γtot
///
/// NaN when both couplings vanish, since the total width is then zero.
#[doc(alias = "get_BR")]
pub fn branching_ratio(g_sm: Float, g_dm: Float, m_v: Float, m_dm: Float) -> Float {
    width_inv(g_dm, m_v, m_dm) / total_width(g_sm, g_dm, m_v, m_dm)
}
