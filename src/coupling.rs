//! A point of the model parameter space and its observables

use crate::{config::Configuration, inverse, numeric::Float, phase_space::MT, widths};

/// Couplings and masses of the mediator model
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPoint {
    /// Coupling to the top sector
    pub g_sm: Float,

    /// Coupling to dark matter
    pub g_dm: Float,

    /// Mediator mass (GeV)
    pub m_v: Float,

    /// Dark matter mass (GeV)
    pub m_dm: Float,
}
//
impl ModelPoint {
    /// Fill in the parameters using data from the configuration
    pub fn new(cfg: &Configuration) -> Self {
        Self {
            g_sm: cfg.g_sm,
            g_dm: cfg.g_dm,
            m_v: cfg.m_v,
            m_dm: cfg.m_dm,
        }
    }

    /// Find the couplings that reproduce a total width and an invisible
    /// branching ratio at given masses
    pub fn from_width_and_br(width: Float, br: Float, m_v: Float, m_dm: Float) -> Self {
        Self {
            g_sm: inverse::g_sm_from_br_width(br, width, m_v, m_dm),
            g_dm: inverse::g_dm_from_br_width(br, width, m_v, m_dm),
            m_v,
            m_dm,
        }
    }

    /// Same point, with gDM adjusted to reproduce a total width
    pub fn with_g_dm_from_width(self, width: Float) -> Self {
        Self {
            g_dm: inverse::g_dm_from_width(width, self.g_sm, self.m_v, self.m_dm),
            ..self
        }
    }

    /// Same point, with gDM adjusted to reproduce an invisible branching ratio
    pub fn with_g_dm_from_br(self, br: Float) -> Self {
        Self {
            g_dm: inverse::g_dm_from_br(br, self.g_sm, self.m_v, self.m_dm),
            ..self
        }
    }

    /// Whether both decay channels are open
    pub fn is_kinematically_open(&self) -> bool {
        self.m_v > 2. * self.m_dm && self.m_v > MT
    }

    /// Visible partial width
    pub fn width_vis(&self) -> Float {
        widths::width_vis(self.g_sm, self.m_v)
    }

    /// Invisible partial width
    pub fn width_inv(&self) -> Float {
        widths::width_inv(self.g_dm, self.m_v, self.m_dm)
    }

    /// Total width
    pub fn total_width(&self) -> Float {
        widths::total_width(self.g_sm, self.g_dm, self.m_v, self.m_dm)
    }

    /// Invisible branching ratio
    pub fn branching_ratio(&self) -> Float {
        widths::branching_ratio(self.g_sm, self.g_dm, self.m_v, self.m_dm)
    }

    /// Total width in units of the mediator mass, which tells how far the
    /// mediator is from the narrow width regime
    pub fn relative_width(&self) -> Float {
        self.total_width() / self.m_v
    }
}
//
impl From<Configuration> for ModelPoint {
    fn from(cfg: Configuration) -> Self {
        Self::new(&cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> ModelPoint {
        ModelPoint {
            g_sm: 1.,
            g_dm: 1.,
            m_v: 1000.,
            m_dm: 100.,
        }
    }

    fn assert_rel_close(got: Float, expected: Float) {
        let tol = (1e-6 as Float).max(100. * Float::EPSILON) * expected.abs();
        assert!(
            (got - expected).abs() <= tol,
            "got {got}, expected {expected}"
        );
    }

    #[test]
    fn observables_delegate_to_relations() {
        let p = point();
        assert_eq!(p.total_width(), p.width_vis() + p.width_inv());
        assert_eq!(p.branching_ratio(), p.width_inv() / p.total_width());
        assert_eq!(p.relative_width(), p.total_width() / 1000.);
    }

    #[test]
    fn benchmark_from_default_configuration() {
        let p = ModelPoint::from(Configuration::default());
        assert_eq!(p.m_v, 1000.);
        assert_eq!(p.m_dm, 1.);
        assert!(p.is_kinematically_open());
    }

    #[test]
    fn kinematic_thresholds() {
        assert!(point().is_kinematically_open());
        let heavy_dm = ModelPoint { m_dm: 600., ..point() };
        assert!(!heavy_dm.is_kinematically_open());
        let light_v = ModelPoint { m_v: 150., m_dm: 10., ..point() };
        assert!(!light_v.is_kinematically_open());
    }

    #[test]
    fn solves_couplings_from_observables() {
        let p = ModelPoint::from_width_and_br(80., 0.25, 1500., 200.);
        assert_rel_close(p.total_width(), 80.);
        assert_rel_close(p.branching_ratio(), 0.25);
    }

    #[test]
    fn adjusts_dark_coupling() {
        let target_width = 2. * point().width_vis();
        let p = point().with_g_dm_from_width(target_width);
        assert_rel_close(p.total_width(), target_width);
        assert_eq!(p.g_sm, 1.);

        let p = point().with_g_dm_from_br(0.6);
        assert_rel_close(p.branching_ratio(), 0.6);
    }
}
