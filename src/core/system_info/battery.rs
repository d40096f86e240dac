use crate::core::system_info::types::BatteryStatus;
use crate::error::Result;
use ::battery::units::ratio::percent;
use ::battery::{Manager, State};

/// Status of the first battery, or `None` on hardware without one
pub fn collect() -> Result<Option<BatteryStatus>> {
    let manager = Manager::new()?;
    let mut batteries = manager.batteries()?;

    match batteries.next() {
        Some(battery) => {
            let battery = battery?;
            Ok(Some(BatteryStatus {
                percent: f64::from(battery.state_of_charge().get::<percent>()),
                plugged: is_plugged(battery.state()),
            }))
        }
        None => Ok(None),
    }
}

/// A battery that is charging or already full is on external power
pub fn is_plugged(state: State) -> bool {
    matches!(state, State::Charging | State::Full)
}
