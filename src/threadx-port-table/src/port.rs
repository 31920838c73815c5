use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::Error;

/// A port module, one per supported core architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum PortModule {
    CortexM0,
    CortexM4,
    CortexM7,
}

impl PortModule {
    pub const ALL: [PortModule; 3] = [Self::CortexM0, Self::CortexM4, Self::CortexM7];

    /// Module name, also used as the `threadx_port` cfg value.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CortexM0 => "cortex_m0",
            Self::CortexM4 => "cortex_m4",
            Self::CortexM7 => "cortex_m7",
        }
    }

    /// Short name as used by the per-architecture port headers (`tx_port_cm0`).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::CortexM0 => "cm0",
            Self::CortexM4 => "cm4",
            Self::CortexM7 => "cm7",
        }
    }
}

impl FromStr for PortModule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|port| port.name() == s || port.short_name() == s)
            .ok_or_else(|| Error::UnknownPort {
                found: s.to_owned(),
            })
    }
}

impl TryFrom<String> for PortModule {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PortModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
