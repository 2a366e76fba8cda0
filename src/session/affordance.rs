//! Model of the region switch control.
//!
//! Only the data is built here; turning it into markup is the page's job.

use crate::domain::{RegionCode, SupportedRegions};

/// One entry of the switch control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOption {
    pub region: RegionCode,
    /// The region of the live session. Rendered pressed and disabled.
    pub active: bool,
}

impl RegionOption {
    /// Whether selecting this entry triggers a switch.
    pub fn selectable(&self) -> bool {
        !self.active
    }
}

/// The switch control for the current region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchAffordance {
    pub options: Vec<RegionOption>,
    /// 1-based column of the active entry, if the current region is offered.
    pub active_column: Option<usize>,
}

impl SwitchAffordance {
    pub fn build(regions: &SupportedRegions, current: &RegionCode) -> Self {
        let options = regions
            .iter()
            .map(|region| RegionOption {
                region: region.clone(),
                active: region == current,
            })
            .collect();
        Self {
            options,
            active_column: regions.position(current),
        }
    }

    /// Regions the user can switch to.
    pub fn selectable_regions(&self) -> impl Iterator<Item = &RegionCode> {
        self.options
            .iter()
            .filter(|o| o.selectable())
            .map(|o| &o.region)
    }

    pub fn columns(&self) -> usize {
        self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_marks_current_region() {
        let current = RegionCode::parse("NL").unwrap();
        let affordance = SwitchAffordance::build(&SupportedRegions::default(), &current);

        assert_eq!(affordance.columns(), 4);
        assert_eq!(affordance.active_column, Some(2));
        let active: Vec<_> = affordance.options.iter().filter(|o| o.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].region, current);

        let selectable: Vec<&str> = affordance.selectable_regions().map(|r| r.as_str()).collect();
        assert_eq!(selectable, vec!["US", "GB", "HK"]);
    }

    #[test]
    fn test_build_for_unsupported_current_region() {
        let current = RegionCode::parse("DE").unwrap();
        let affordance = SwitchAffordance::build(&SupportedRegions::default(), &current);
        assert_eq!(affordance.active_column, None);
        assert_eq!(affordance.selectable_regions().count(), 4);
    }
}
