//! Dashboard view identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised at the view selection boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Unknown view: '{0}'")]
    InvalidView(String),
}

/// One tab of the dashboard. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    #[serde(rename = "summary")]
    Summary,
    #[serde(rename = "population")]
    Population,
    #[serde(rename = "qualifications")]
    Qualifications,
    #[serde(rename = "attainment-gap")]
    AttainmentGap,
    #[serde(rename = "vsp-industries")]
    VspIndustries,
    #[serde(rename = "vsp-occupations")]
    VspOccupations,
    #[serde(rename = "rampup")]
    RampUp,
}

impl ViewId {
    /// All views in tab-strip order
    pub const ALL: [ViewId; 7] = [
        ViewId::Summary,
        ViewId::Population,
        ViewId::Qualifications,
        ViewId::AttainmentGap,
        ViewId::VspIndustries,
        ViewId::VspOccupations,
        ViewId::RampUp,
    ];
    
    /// Stable slug used on the command line and in config files
    pub fn slug(&self) -> &'static str {
        match self {
            ViewId::Summary => "summary",
            ViewId::Population => "population",
            ViewId::Qualifications => "qualifications",
            ViewId::AttainmentGap => "attainment-gap",
            ViewId::VspIndustries => "vsp-industries",
            ViewId::VspOccupations => "vsp-occupations",
            ViewId::RampUp => "rampup",
        }
    }
    
    /// Label shown on the tab strip
    pub fn tab_label(&self) -> &'static str {
        match self {
            ViewId::Summary => "Executive Summary",
            ViewId::Population => "Population",
            ViewId::Qualifications => "Qualification Needs",
            ViewId::AttainmentGap => "Closing Attainment Gap",
            ViewId::VspIndustries => "Top Industries (VSP)",
            ViewId::VspOccupations => "Top Occupations (VSP)",
            ViewId::RampUp => "Ramp-Up Plan",
        }
    }
}

impl Default for ViewId {
    fn default() -> Self {
        ViewId::Summary
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ViewId {
    type Err = ViewError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .iter()
            .copied()
            .find(|view| view.slug() == s)
            .ok_or_else(|| ViewError::InvalidView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_slug_parse() {
        for view in ViewId::ALL {
            assert_eq!(view.slug().parse::<ViewId>(), Ok(view));
        }
    }
    
    #[test]
    fn test_unknown_slug_rejected() {
        assert_eq!(
            "workforce".parse::<ViewId>(),
            Err(ViewError::InvalidView("workforce".to_string()))
        );
        // Slugs are case sensitive
        assert!("Summary".parse::<ViewId>().is_err());
        assert!("".parse::<ViewId>().is_err());
    }
    
    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&ViewId::RampUp).unwrap();
        assert_eq!(json, "\"rampup\"");
        
        let view: ViewId = serde_json::from_str("\"attainment-gap\"").unwrap();
        assert_eq!(view, ViewId::AttainmentGap);
    }
}
