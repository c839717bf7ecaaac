use crate::{
    adapter::{
        basic,
        merge::{merge_ceiling, merge_range, Warnings},
    },
    group::{value, RunwayState, RvrTendency},
    summary::{
        Aerodrome, BrakingAction, ColourCode, ContaminationExtent, Deposits, RunwayData, RvrTrend,
        WarningMessage,
    },
    units::{Cardinal, Ceiling, DistanceRange, Precipitation, Runway},
};

/// Runway surface state, reported atomically
#[derive(Default, Debug, Clone, PartialEq)]
struct SurfaceState {
    deposits: Deposits,
    extent: ContaminationExtent,
    depth: Precipitation,
    friction: Option<f32>,
    braking: BrakingAction,
    unreliable: bool,
    not_operational: bool,
}

impl SurfaceState {
    fn contaminated(
        deposits: Option<u8>,
        extent: Option<u8>,
        depth: Option<u8>,
        friction: Option<u8>,
    ) -> Self {
        let (depth, not_operational) = basic::deposit_depth(depth);
        let (friction, braking, unreliable) = basic::friction(friction);
        Self {
            deposits: basic::deposits(deposits),
            extent: basic::contamination_extent(extent),
            depth,
            friction,
            braking,
            unreliable,
            not_operational,
        }
    }
    /// CLRD: no contamination left, friction kept
    fn cleared(friction: Option<u8>) -> Self {
        let (friction, braking, unreliable) = basic::friction(friction);
        Self {
            deposits: Deposits::ClearAndDry,
            extent: ContaminationExtent::None,
            friction,
            braking,
            unreliable,
            ..Default::default()
        }
    }
    fn read(runway: &RunwayData) -> Self {
        Self {
            deposits: runway.deposits,
            extent: runway.contamination_extent,
            depth: runway.deposit_depth,
            friction: runway.friction_coefficient,
            braking: runway.braking_action,
            unreliable: runway.friction_unreliable,
            not_operational: runway.not_operational,
        }
    }
    fn write(self, runway: &mut RunwayData) {
        runway.deposits = self.deposits;
        runway.contamination_extent = self.extent;
        runway.deposit_depth = self.depth;
        runway.friction_coefficient = self.friction;
        runway.braking_action = self.braking;
        runway.friction_unreliable = self.unreliable;
        runway.not_operational = self.not_operational;
    }
}

/// Writes [Aerodrome]: per runway and per direction data.
pub(crate) struct AerodromeAdapter<'a> {
    aerodrome: &'a mut Aerodrome,
    warnings: Warnings<'a>,
}

impl<'a> AerodromeAdapter<'a> {
    pub fn new(aerodrome: &'a mut Aerodrome, warnings: Warnings<'a>) -> Self {
        Self {
            aerodrome,
            warnings,
        }
    }

    /// Runway visual range. The tendency doubles as "already reported" marker.
    pub fn set_rvr(
        &mut self,
        runway: Runway,
        visual_range: &value::Distance,
        variable_to: Option<&value::Distance>,
        tendency: RvrTendency,
    ) -> bool {
        let range = match variable_to {
            Some(maximum) => {
                DistanceRange::ranged(basic::distance(visual_range), basic::distance(maximum))
            },
            None => DistanceRange::prevailing(basic::distance(visual_range)),
        };
        let trend = basic::rvr_trend(tendency);
        let rw = self.aerodrome.runway_mut(runway);
        if rw.visual_range_trend != RvrTrend::Unset {
            if rw.visual_range == range && rw.visual_range_trend == trend {
                return true;
            }
            rw.visual_range = DistanceRange::default();
            rw.visual_range_trend = RvrTrend::Unset;
            self.warnings.push(WarningMessage::DuplicatedData);
            return false;
        }
        rw.visual_range = range;
        rw.visual_range_trend = trend;
        true
    }

    pub fn set_runway_visibility(&mut self, runway: Runway, range: DistanceRange) -> bool {
        let rw = self.aerodrome.runway_mut(runway);
        merge_range(&mut rw.visibility, range, &mut self.warnings)
    }

    pub fn set_direction_visibility(&mut self, direction: &value::Direction, range: DistanceRange) -> bool {
        let Some(cardinal) = self.cardinal(direction) else {
            return false;
        };
        let dir = self.aerodrome.direction_mut(cardinal);
        merge_range(&mut dir.visibility, range, &mut self.warnings)
    }

    /// CIG: at aerodrome level, or at given runway or direction
    pub fn set_ceiling(
        &mut self,
        ceiling: Ceiling,
        runway: Option<Runway>,
        direction: Option<&value::Direction>,
    ) -> bool {
        if let Some(runway) = runway {
            let rw = self.aerodrome.runway_mut(runway);
            return merge_ceiling(&mut rw.ceiling, ceiling, &mut self.warnings);
        }
        if let Some(direction) = direction {
            let Some(cardinal) = self.cardinal(direction) else {
                return false;
            };
            let dir = self.aerodrome.direction_mut(cardinal);
            return merge_ceiling(&mut dir.ceiling, ceiling, &mut self.warnings);
        }
        merge_ceiling(&mut self.aerodrome.ceiling, ceiling, &mut self.warnings)
    }

    /// Runway state: deposits, extent, depth and friction all at once
    pub fn set_runway_state(&mut self, runway: Runway, state: &RunwayState) -> bool {
        let incoming = match *state {
            RunwayState::Normal {
                deposits,
                extent,
                depth,
                friction,
            } => SurfaceState::contaminated(deposits, extent, depth, friction),
            RunwayState::Cleared { friction } => SurfaceState::cleared(friction),
            RunwayState::Snoclo => {
                if runway.is_all_runways() {
                    self.aerodrome.snoclo = true;
                } else {
                    self.aerodrome.runway_mut(runway).snoclo = true;
                }
                return true;
            },
        };
        let rw = self.aerodrome.runway_mut(runway);
        if rw.has_state() || rw.not_operational {
            if SurfaceState::read(rw) == incoming {
                return true;
            }
            SurfaceState::default().write(rw);
            self.warnings.push(WarningMessage::DuplicatedData);
            return false;
        }
        incoming.write(rw);
        true
    }

    /// SNOCLO keyword: aerodrome closed due to snow
    pub fn set_snoclo(&mut self) {
        self.aerodrome.snoclo = true;
    }

    /// WS RWYxx, or WS ALL RWY when no runway is given
    pub fn set_wind_shear_lower_layers(&mut self, runway: Option<Runway>) {
        match runway {
            Some(runway) if !runway.is_all_runways() => {
                self.aerodrome.runway_mut(runway).wind_shear_lower_layers = true;
            },
            _ => self.aerodrome.wind_shear_all_runways = true,
        }
    }

    pub fn set_colour_code(&mut self, code: ColourCode, black: bool) -> bool {
        let a = &mut *self.aerodrome;
        merge_atomic!(
            self.warnings,
            a.colour_code => code,
            a.colour_code_black => black,
        )
    }

    fn cardinal(&mut self, direction: &value::Direction) -> Option<Cardinal> {
        let cardinal = basic::cardinal(direction);
        if cardinal == Cardinal::NotSpecified {
            self.warnings.push(WarningMessage::InvalidGroup);
            return None;
        }
        Some(cardinal)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::units::{Designator, Distance, Height};
    fn rwy(number: u8) -> Runway {
        Runway::new(number, Designator::None)
    }
    #[test]
    fn rvr() {
        let mut aerodrome = Aerodrome::default();
        let mut list = Vec::new();
        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "R16/0450N"));
        let range = value::Distance::meters(450);
        assert!(adapter.set_rvr(rwy(16), &range, None, RvrTendency::Neutral));
        assert!(adapter.set_rvr(rwy(16), &range, None, RvrTendency::Neutral));
        assert!(adapter.set_rvr(rwy(34), &range, None, RvrTendency::NotReported));
        assert!(!adapter.set_rvr(rwy(16), &range, None, RvrTendency::Upward));
        let r16 = aerodrome.runway(rwy(16)).unwrap();
        assert_eq!(r16.visual_range_trend, RvrTrend::Unset);
        assert!(r16.visual_range.is_empty());
        let r34 = aerodrome.runway(rwy(34)).unwrap();
        assert_eq!(r34.visual_range_trend, RvrTrend::NotReported);
        assert_eq!(r34.visual_range.prevailing, Distance::meters(450.0));
        assert_eq!(list.len(), 1);
    }
    #[test]
    fn variable_rvr() {
        let mut aerodrome = Aerodrome::default();
        let mut list = Vec::new();
        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "R27/0600V1000U"));
        let (minimum, maximum) = (value::Distance::meters(600), value::Distance::meters(1000));
        assert!(adapter.set_rvr(rwy(27), &minimum, Some(&maximum), RvrTendency::Upward));
        let r27 = aerodrome.runway(rwy(27)).unwrap();
        assert_eq!(r27.visual_range.minimum, Distance::meters(600.0));
        assert_eq!(r27.visual_range.maximum, Distance::meters(1000.0));
        assert_eq!(r27.visual_range_trend, RvrTrend::Upward);
    }
    #[test]
    fn runway_state() {
        let mut aerodrome = Aerodrome::default();
        let mut list = Vec::new();
        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "R24/451293"));
        let state = RunwayState::Normal {
            deposits: Some(4),
            extent: Some(5),
            depth: Some(12),
            friction: Some(93),
        };
        assert!(adapter.set_runway_state(rwy(24), &state));
        assert!(adapter.set_runway_state(rwy(24), &state));
        let r24 = aerodrome.runway(rwy(24)).unwrap();
        assert_eq!(r24.deposits, Deposits::DrySnow);
        assert_eq!(r24.contamination_extent, ContaminationExtent::From26To50Percent);
        assert_eq!(r24.deposit_depth, Precipitation::mm(12.0));
        assert_eq!(r24.braking_action, BrakingAction::Medium);
        assert!(list.is_empty());

        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "R24/CLRD70"));
        assert!(!adapter.set_runway_state(rwy(24), &RunwayState::Cleared { friction: Some(70) }));
        let r24 = aerodrome.runway(rwy(24)).unwrap();
        assert!(!r24.has_state());
        assert_eq!(list.len(), 1);
    }
    #[test]
    fn cleared_runway() {
        let mut aerodrome = Aerodrome::default();
        let mut list = Vec::new();
        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "R14/CLRD62"));
        assert!(adapter.set_runway_state(rwy(14), &RunwayState::Cleared { friction: Some(62) }));
        let r14 = aerodrome.runway(rwy(14)).unwrap();
        assert_eq!(r14.deposits, Deposits::ClearAndDry);
        assert_eq!(r14.contamination_extent, ContaminationExtent::None);
        assert_eq!(r14.friction_coefficient, Some(0.62));
    }
    #[test]
    fn not_operational() {
        let mut aerodrome = Aerodrome::default();
        let mut list = Vec::new();
        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "R05/////99"));
        let state = RunwayState::Normal {
            deposits: None,
            extent: None,
            depth: Some(99),
            friction: None,
        };
        assert!(adapter.set_runway_state(rwy(5), &state));
        assert!(aerodrome.runway(rwy(5)).unwrap().not_operational);
    }
    #[test]
    fn snow_closure() {
        let mut aerodrome = Aerodrome::default();
        let mut list = Vec::new();
        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "R88/SNOCLO"));
        assert!(adapter.set_runway_state(rwy(Runway::ALL_RUNWAYS), &RunwayState::Snoclo));
        assert!(adapter.set_runway_state(rwy(9), &RunwayState::Snoclo));
        assert!(aerodrome.snoclo);
        assert!(aerodrome.runway(rwy(9)).unwrap().snoclo);
        assert!(aerodrome.runway(rwy(Runway::ALL_RUNWAYS)).is_none());
    }
    #[test]
    fn ceilings() {
        let mut aerodrome = Aerodrome::default();
        let mut list = Vec::new();
        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "CIG 005"));
        let exact = Ceiling {
            exact: Height::feet(500),
            ..Default::default()
        };
        assert!(adapter.set_ceiling(exact, None, None));
        assert!(adapter.set_ceiling(exact, Some(rwy(11)), None));
        assert!(adapter.set_ceiling(exact, None, Some(&value::Direction::Cardinal(Cardinal::SW))));
        let variable = Ceiling {
            minimum: Height::feet(300),
            maximum: Height::feet(600),
            ..Default::default()
        };
        assert!(adapter.set_ceiling(variable, None, None));
        assert_eq!(aerodrome.ceiling.minimum, Height::feet(300));
        assert_eq!(aerodrome.runway(rwy(11)).unwrap().ceiling, exact);
        assert_eq!(aerodrome.direction(Cardinal::SW).unwrap().ceiling, exact);
        assert!(list.is_empty());
    }
    #[test]
    fn colour_code() {
        let mut aerodrome = Aerodrome::default();
        let mut list = Vec::new();
        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "BLACKRED"));
        assert!(adapter.set_colour_code(ColourCode::Red, true));
        assert!(!adapter.set_colour_code(ColourCode::Amber, true));
        assert_eq!(aerodrome.colour_code, ColourCode::NotSpecified);
        assert!(!aerodrome.colour_code_black);
    }
    #[test]
    fn wind_shear() {
        let mut aerodrome = Aerodrome::default();
        let mut list = Vec::new();
        let mut adapter = AerodromeAdapter::new(&mut aerodrome, Warnings::new(&mut list, "WS R03"));
        adapter.set_wind_shear_lower_layers(Some(rwy(3)));
        adapter.set_wind_shear_lower_layers(None);
        assert!(aerodrome.wind_shear_all_runways);
        assert!(aerodrome.runway(rwy(3)).unwrap().wind_shear_lower_layers);
    }
}
