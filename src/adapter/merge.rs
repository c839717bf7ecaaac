//! Merge policy shared by every section adapter.
//!
//! Given an existing field value and an incoming one:
//! - incoming absent or identical: no-op,
//! - existing absent: incoming is written,
//! - otherwise the field is reset to absent and a
//!   [WarningMessage::DuplicatedData] warning is emitted.
use crate::{
    summary::{
        AutoType, BrakingAction, CloudAmount, ColourCode, ContaminationExtent, Deposits,
        HighCloudLayer, LowCloudLayer, MidCloudLayer, PressureTendency, PressureTrend, RvrTrend,
        SkyCondition, Warning, WarningMessage,
    },
    units::{
        Cardinal, Ceiling, Distance, DistanceRange, Height, Precipitation, Pressure, Speed,
        Temperature, WaveHeight,
    },
};

#[cfg(feature = "log")]
use log::warn;

/// Fields that may be "not set"
pub(crate) trait Absent {
    fn is_absent(&self) -> bool;
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// Flags can only be raised
impl Absent for bool {
    fn is_absent(&self) -> bool {
        !*self
    }
}

macro_rules! absent_value {
    ($($t:ty),+) => {
        $(impl Absent for $t {
            fn is_absent(&self) -> bool {
                self.value.is_none()
            }
        })+
    };
}

absent_value!(Speed, Temperature, Distance, Height, Pressure, Precipitation, WaveHeight);

macro_rules! absent_when {
    ($($t:ty => $neutral:expr),+) => {
        $(impl Absent for $t {
            fn is_absent(&self) -> bool {
                *self == $neutral
            }
        })+
    };
}

absent_when!(
    SkyCondition => SkyCondition::Unknown,
    CloudAmount => CloudAmount::NotReported,
    ColourCode => ColourCode::NotSpecified,
    Cardinal => Cardinal::NotSpecified,
    AutoType => AutoType::None,
    RvrTrend => RvrTrend::Unset,
    Deposits => Deposits::NotReported,
    ContaminationExtent => ContaminationExtent::NotReported,
    BrakingAction => BrakingAction::None,
    PressureTendency => PressureTendency::NotReported,
    PressureTrend => PressureTrend::NotReported,
    LowCloudLayer => LowCloudLayer::Unknown,
    MidCloudLayer => MidCloudLayer::Unknown,
    HighCloudLayer => HighCloudLayer::Unknown
);

impl Absent for DistanceRange {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Absent for Ceiling {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

/// Warning sink, tagging every warning with the group being collated
pub(crate) struct Warnings<'a> {
    list: &'a mut Vec<Warning>,
    id: &'a str,
}

impl<'a> Warnings<'a> {
    pub fn new(list: &'a mut Vec<Warning>, id: &'a str) -> Self {
        Self { list, id }
    }
    /// Raw text of the group being collated
    #[cfg(feature = "log")]
    pub fn id(&self) -> &'a str {
        self.id
    }
    /// Appends a warning tagged with the current group
    pub fn push(&mut self, message: WarningMessage) {
        let id = self.id;
        self.push_with(message, id);
    }
    /// Appends a warning with a descriptive tag
    pub fn push_with(&mut self, message: WarningMessage, id: &str) {
        #[cfg(feature = "log")]
        warn!("{}: {}", id, message);
        self.list.push(Warning::new(message, id));
    }
}

/// Returns true if writing `incoming` over `existing` is a conflict
pub(crate) fn conflicts<T: Absent + PartialEq>(existing: &T, incoming: &T) -> bool {
    !incoming.is_absent() && !existing.is_absent() && existing != incoming
}

/// Merges `incoming` into `field`. Returns false on conflict, in which
/// case `field` was reset and a warning emitted.
pub(crate) fn merge<T: Absent + PartialEq + Default>(
    field: &mut T,
    incoming: T,
    warnings: &mut Warnings,
) -> bool {
    if conflicts(field, &incoming) {
        *field = T::default();
        warnings.push(WarningMessage::DuplicatedData);
        return false;
    }
    if !incoming.is_absent() {
        *field = incoming;
    }
    true
}

/// Merges several fields at once: any conflict resets all of them,
/// and emits a single warning. Values must be bound to local identifiers.
/// ```ignore
/// merge_atomic!(warnings, self.direction => direction, self.speed => speed)
/// ```
macro_rules! merge_atomic {
    ($warnings:expr, $($field:expr => $value:ident),+ $(,)?) => {{
        use $crate::adapter::merge::{conflicts, Absent};
        if false $(|| conflicts(&$field, &$value))+ {
            $($field = Default::default();)+
            $warnings.push($crate::summary::WarningMessage::DuplicatedData);
            false
        } else {
            $(if !$value.is_absent() {
                $field = $value;
            })+
            true
        }
    }};
}

/// Merges a distance range sub-field by sub-field.
/// Any conflict resets the whole range.
pub(crate) fn merge_range(
    field: &mut DistanceRange,
    incoming: DistanceRange,
    warnings: &mut Warnings,
) -> bool {
    let DistanceRange {
        prevailing,
        minimum,
        maximum,
    } = incoming;
    merge_atomic!(
        warnings,
        field.prevailing => prevailing,
        field.minimum => minimum,
        field.maximum => maximum,
    )
}

/// Merges a ceiling sub-field by sub-field.
/// Any conflict resets the whole ceiling.
pub(crate) fn merge_ceiling(field: &mut Ceiling, incoming: Ceiling, warnings: &mut Warnings) -> bool {
    let Ceiling {
        exact,
        minimum,
        maximum,
    } = incoming;
    merge_atomic!(
        warnings,
        field.exact => exact,
        field.minimum => minimum,
        field.maximum => maximum,
    )
}
