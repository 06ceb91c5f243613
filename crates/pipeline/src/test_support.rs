//! Record builders shared by the unit tests.

use trip_loader::TripRecord;

/// A trip with only its station pair set
pub fn trip_between(start: &str, end: &str) -> TripRecord {
    TripRecord {
        start_time_raw: String::new(),
        start_time: None,
        end_time: String::new(),
        trip_duration: None,
        start_station: start.to_string(),
        end_station: end.to_string(),
        user_type: None,
        gender: None,
        birth_year: None,
        month: None,
        day_of_week: None,
        hour: None,
    }
}

/// A trip with only its derived time fields set
pub fn trip_in(month: u32, day_of_week: u32, hour: u32) -> TripRecord {
    TripRecord {
        month: Some(month),
        day_of_week: Some(day_of_week),
        hour: Some(hour),
        ..trip_between("A", "B")
    }
}
