//! Mechanism for loading and checking a model configuration
//!
//! A configuration is plain text with one parameter per line, in a fixed
//! order. The first whitespace-delimited token of every non-blank line is the
//! value; anything after it on the line is free text, which is conventionally
//! used to name the parameter.
//!
//! ```text
//! 1.0     gSM   coupling to the top sector
//! 1.0     gDM   coupling to the dark sector
//! 1000.0  mV    mediator mass (GeV)
//! 1.0     mDM   dark matter mass (GeV)
//! ```

use crate::{numeric::Float, Result};

use eyre::{ensure, eyre, WrapErr};

use std::{fmt, str::FromStr};

/// Parameters of one point of the model
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    /// Coupling of the mediator to the top sector
    pub g_sm: Float,

    /// Coupling of the mediator to dark matter
    pub g_dm: Float,

    /// Mediator mass (GeV)
    pub m_v: Float,

    /// Dark matter mass (GeV)
    pub m_dm: Float,
}
//
impl Default for Configuration {
    /// Benchmark point with unit couplings, a 1 TeV mediator and 1 GeV dark
    /// matter
    fn default() -> Self {
        Self {
            g_sm: 1.,
            g_dm: 1.,
            m_v: 1000.,
            m_dm: 1.,
        }
    }
}
//
impl Configuration {
    /// Parse a configuration from its textual representation and check it
    pub fn parse(config_str: &str) -> Result<Self> {
        // Configuration items are the first non-whitespace chunk of text on
        // each line, blank lines are ignored.
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // Fetch the next item, tagged with the field it is supposed to fill
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| eyre!("Missing configuration of {}", name))
        };

        let config = Configuration {
            g_sm: next_item("g_sm")?.parse::<Float>()?,
            g_dm: next_item("g_dm")?.parse::<Float>()?,
            m_v: next_item("m_v")?.parse::<Float>()?,
            m_dm: next_item("m_dm")?.parse::<Float>()?,
        };
        ensure!(
            config_iter.next().is_none(),
            "Unexpected trailing configuration items"
        );

        config.check()?;
        tracing::debug!(%config, "Loaded model configuration");
        Ok(config)
    }

    /// Check that the parameters describe a point where the relations can be
    /// evaluated at all
    ///
    /// Kinematically closed decay channels are accepted, they just give NaN
    /// widths downstream.
    pub fn check(&self) -> Result<()> {
        ensure!(
            self.g_sm.is_finite() && self.g_dm.is_finite(),
            "Couplings must be finite (got gSM = {}, gDM = {})",
            self.g_sm,
            self.g_dm
        );
        ensure!(
            self.m_v > 0. && self.m_v.is_finite(),
            "Mediator mass must be positive, got {}",
            self.m_v
        );
        ensure!(
            self.m_dm >= 0. && self.m_dm.is_finite(),
            "Dark matter mass must not be negative, got {}",
            self.m_dm
        );
        Ok(())
    }
}
//
impl FromStr for Configuration {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
//
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GSM  : {}", self.g_sm)?;
        writeln!(f, "GDM  : {}", self.g_dm)?;
        writeln!(f, "MV   : {}", self.m_v)?;
        write!(f, "MDM  : {}", self.m_dm)
    }
}

/// A value from the configuration text, tagged with the struct field which it
/// is supposed to map for error reporting purposes.
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .wrap_err_with(|| format!("Could not parse configuration of {}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BENCHMARK: &str = "\
1.0     gSM   coupling to the top sector
1.0     gDM   coupling to the dark sector

1000.0  mV    mediator mass (GeV)
1.0     mDM   dark matter mass (GeV)
";

    #[test]
    fn parses_benchmark() {
        let config = Configuration::parse(BENCHMARK).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn from_str_matches_parse() {
        let config: Configuration = "0.5\n1.5\n2000\n300\n".parse().unwrap();
        assert_eq!(config.g_sm, 0.5);
        assert_eq!(config.g_dm, 1.5);
        assert_eq!(config.m_v, 2000.);
        assert_eq!(config.m_dm, 300.);
    }

    #[test]
    fn reports_missing_field() {
        let err = Configuration::parse("1.0\n1.0\n1000.0\n").unwrap_err();
        assert!(err.to_string().contains("m_dm"), "{err}");
    }

    #[test]
    fn reports_unparseable_field() {
        let err = Configuration::parse("1.0\nabc\n1000.0\n1.0\n").unwrap_err();
        assert!(err.to_string().contains("g_dm"), "{err}");
    }

    #[test]
    fn rejects_trailing_items() {
        assert!(Configuration::parse("1\n1\n1000\n1\n42\n").is_err());
    }

    #[test]
    fn rejects_zero_mediator_mass_and_negative_masses() {
        assert!(Configuration::parse("1\n1\n0\n1\n").is_err());
        assert!(Configuration::parse("1\n1\n1000\n-5\n").is_err());
    }

    #[test]
    fn accepts_massless_dark_matter() {
        let config = Configuration::parse("1\n1\n1000\n0\n").unwrap();
        assert_eq!(config.m_dm, 0.);
    }

    #[test]
    fn rejects_non_finite_couplings() {
        assert!(Configuration::parse("NaN\n1\n1000\n1\n").is_err());
        assert!(Configuration::parse("1\ninf\n1000\n1\n").is_err());
    }

    #[test]
    fn accepts_closed_channels() {
        // mDM above mV/2 is legal, the invisible width is just NaN
        assert!(Configuration::parse("1\n1\n100\n60\n").is_ok());
    }

    #[test]
    fn display_lists_every_field() {
        let shown = Configuration::default().to_string();
        assert_eq!(shown.lines().count(), 4);
        assert!(shown.starts_with("GSM  : 1"));
    }
}
