use sysinfo::System;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// 1, 5 and 15 minute load averages. sysinfo reports zeros when the
/// platform value cannot be read.
pub fn read_load_average() -> LoadAverage {
    let load = System::load_average();
    LoadAverage {
        one: load.one,
        five: load.five,
        fifteen: load.fifteen,
    }
}
