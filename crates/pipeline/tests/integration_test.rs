//! Integration tests for the pipeline.
//!
//! These tests run CSV text through the loader's parser, the filters and
//! every statistic pass, the same way a query cycle does.

use pipeline::stats::{duration_stats, station_stats, time_stats, user_stats};
use pipeline::{FilterPipeline, RawDataPager, StatsError, TripView};
use trip_loader::parser::parse_trips;
use trip_loader::{City, DayOfWeek, FilterSelection, Month, TripTable};

// 2017-03-06 and 2017-03-13 are Mondays, 2017-03-07 a Tuesday,
// 2017-04-03 a Monday, 2017-06-04 a Sunday.
const NEW_YORK_SAMPLE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-03-06 08:10:00,2017-03-06 08:20:00,600,Pier 40,Broadway & W 60 St,Subscriber,Male,1980.0
2,2017-03-06 08:30:00,2017-03-06 08:45:00,900,Pier 40,Broadway & W 60 St,Subscriber,Female,1990.0
3,2017-03-13 17:05:00,2017-03-13 17:15:00,600,Pier 40,Broadway & W 60 St,Customer,,
4,2017-03-13 08:00:00,2017-03-13 08:07:00,420,Pier 40,E 17 St & Broadway,Subscriber,Male,1980.0
5,2017-03-07 09:00:00,2017-03-07 09:30:00,1800,E 17 St & Broadway,Pier 40,Subscriber,Male,1975.0
6,2017-04-03 12:00:00,2017-04-03 12:10:00,600,Broadway & W 60 St,Pier 40,Customer,Female,1999.0
7,2017-06-04 23:00:00,2017-06-05 00:05:00,3900,E 17 St & Broadway,Pier 40,Subscriber,Female,1990.0
8,bad timestamp,2017-06-05 00:05:00,300,E 17 St & Broadway,Pier 40,Subscriber,Male,1988.0
";

const WASHINGTON_SAMPLE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-01-02 07:00:00,2017-01-02 07:10:00,610.5,Lincoln Memorial,Jefferson Dr & 14th St SW,Subscriber
2,2017-01-02 07:20:00,2017-01-02 07:30:00,599.7,Lincoln Memorial,Jefferson Dr & 14th St SW,Customer
3,2017-02-07 18:00:00,2017-02-07 18:25:00,1500.2,Jefferson Dr & 14th St SW,Lincoln Memorial,Subscriber
";

fn load(city: City, csv: &str) -> TripTable {
    let (records, columns) = parse_trips(csv.as_bytes(), city.file_name()).unwrap();
    TripTable::new(city, records, columns)
}

#[test]
fn test_march_mondays_end_to_end() {
    let table = load(City::NewYorkCity, NEW_YORK_SAMPLE);
    let selection = FilterSelection::new(City::NewYorkCity, Some(Month::March), Some(DayOfWeek::Monday));

    let view = FilterPipeline::for_selection(&selection).apply(&table).unwrap();
    let summary = view.summarize();

    assert_eq!(summary.initial_row_count, 8);
    assert_eq!(summary.filtered_row_count, 4);
    assert_eq!(summary.start_stations, 1);
    assert_eq!(summary.end_stations, 2);

    let times = time_stats(&view).unwrap();
    assert_eq!(times.month_label(), "March");
    assert_eq!(times.day_label(), "Monday");
    assert_eq!(times.hour_label(), "8 AM");

    let stations = station_stats(&view).unwrap();
    assert_eq!(stations.start.station, "Pier 40");
    assert_eq!(stations.start.trips, 4);
    assert_eq!(stations.trip.end_station, "Broadway & W 60 St");
    assert_eq!(stations.trip.trips, 3);

    let durations = duration_stats(&view).unwrap();
    assert_eq!(durations.total_seconds, 2520);
    assert_eq!(durations.mean_seconds, 630);
    assert_eq!(durations.total_label(), "42 minutes, 0 seconds");

    let users = user_stats(&view).unwrap();
    assert_eq!(
        users.user_types,
        vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
    );
    assert_eq!(
        users.genders,
        Some(vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
    );
    let years = users.birth_years.unwrap();
    assert_eq!((years.earliest, years.most_recent, years.most_common), (1980, 1990, 1980));
}

#[test]
fn test_unfiltered_view_keeps_unparsed_rows() {
    let table = load(City::NewYorkCity, NEW_YORK_SAMPLE);
    let view = FilterPipeline::new().apply(&table).unwrap();

    assert_eq!(view.len(), 8);
    // the unparsed row still counts towards user and station totals
    let users = user_stats(&view).unwrap();
    let total: usize = users.user_types.iter().map(|(_, n)| n).sum();
    assert_eq!(total, view.len());

    // but a month filter never matches it
    let march = FilterSelection::new(City::NewYorkCity, Some(Month::March), None);
    let view = FilterPipeline::for_selection(&march).apply(&table).unwrap();
    assert_eq!(view.len(), 5);
    assert!(view.rows().iter().all(|t| t.month == Some(3)));
}

#[test]
fn test_no_matching_rides_from_every_pass() {
    let table = load(City::Washington, WASHINGTON_SAMPLE);
    let selection = FilterSelection::new(City::Washington, Some(Month::June), None);

    let view = FilterPipeline::for_selection(&selection).apply(&table).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.summarize().initial_row_count, 3);

    assert_eq!(time_stats(&view).unwrap_err(), StatsError::NoMatchingRides);
    assert_eq!(station_stats(&view).unwrap_err(), StatsError::NoMatchingRides);
    assert_eq!(duration_stats(&view).unwrap_err(), StatsError::NoMatchingRides);
    assert_eq!(user_stats(&view).unwrap_err(), StatsError::NoMatchingRides);
}

#[test]
fn test_city_without_demographics() {
    let table = load(City::Washington, WASHINGTON_SAMPLE);
    let view = TripView::all(&table);

    let users = user_stats(&view).unwrap();
    assert!(users.genders.is_none());
    assert!(users.birth_years.is_none());

    // 610.5 + 599.7 + 1500.2 = 2710.4
    let durations = duration_stats(&view).unwrap();
    assert_eq!(durations.total_seconds, 2710);
    assert_eq!(durations.mean_seconds, 903);
}

#[test]
fn test_pager_over_filtered_view() {
    let table = load(City::NewYorkCity, NEW_YORK_SAMPLE);
    let view = TripView::all(&table);
    let mut pager = RawDataPager::new(view.rows());

    let first = pager.next_window();
    assert_eq!(first.len(), 5);
    assert_eq!(first[0].start_time_raw, "2017-03-06 08:10:00");

    let second = pager.next_window();
    assert_eq!(second.len(), 3);
    assert_eq!(second[2].start_time_raw, "bad timestamp");

    assert!(pager.next_window().is_empty());
}

#[test]
fn test_blank_station_cells_are_missing_values() {
    let csv = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-01-02 07:00:00,2017-01-02 07:10:00,600,,Lincoln Memorial,Subscriber
2,2017-01-02 08:00:00,2017-01-02 08:10:00,600,,Lincoln Memorial,Subscriber
3,2017-01-02 09:00:00,2017-01-02 09:10:00,600,Union Station,Lincoln Memorial,Customer
";
    let table = load(City::Washington, csv);

    let stations = station_stats(&TripView::all(&table)).unwrap();
    assert_eq!(stations.start.station, "Union Station");
    assert_eq!(stations.start.trips, 1);
    assert_eq!(stations.trip.start_station, "Union Station");
    assert_eq!(stations.filtered_rides, 3);
}
