use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use super::{
    Footprint, GeometrySummary, ManufacturingLimits, Mode, ParameterSet,
    families::{solid_plate, straight_fins},
};

/// 120 mm long, 80 mm wide base.
pub(super) fn footprint() -> Footprint {
    Footprint::from_millimeters(120.0, 80.0).unwrap()
}

/// 2 mm straight fins with 3 mm gaps on a 5 mm base.
pub(super) fn straight_fins(fin_height_mm: f64) -> ParameterSet {
    ParameterSet::from_millimeters([
        ("fin_thickness", 2.0),
        ("fin_gap", 3.0),
        ("fin_height", fin_height_mm),
        ("base_thickness", 5.0),
    ])
    .unwrap()
}

pub(super) fn straight_fin_summary(fin_height_mm: f64) -> GeometrySummary {
    straight_fins::DESCRIPTOR
        .summarize(
            &straight_fins(fin_height_mm),
            &footprint(),
            &ManufacturingLimits::default(),
        )
        .unwrap()
}

pub(super) fn plate_summary(thickness_mm: f64, side_mm: f64) -> GeometrySummary {
    let params = ParameterSet::from_millimeters([("base_thickness", thickness_mm)]).unwrap();
    solid_plate::DESCRIPTOR
        .summarize(
            &params,
            &Footprint::from_millimeters(side_mm, side_mm).unwrap(),
            &ManufacturingLimits::default(),
        )
        .unwrap()
}

pub(super) fn max_power(target_kelvin: f64) -> Mode {
    Mode::MaxPower {
        target: TemperatureInterval::new::<delta_kelvin>(target_kelvin),
    }
}

pub(super) fn given_load(watts: f64) -> Mode {
    Mode::GivenLoad {
        power: Power::new::<watt>(watts),
    }
}
