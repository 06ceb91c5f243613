use std::path::Path;
use std::time::Instant;
use trip_loader::{City, TripTable};

fn main() {
    let data_dir = Path::new("data");

    for city in City::ALL {
        println!("Loading {} trips...", city);

        let start = Instant::now();
        let table = TripTable::load(data_dir, city).expect("Failed to load dataset");
        let elapsed = start.elapsed();

        let unparsed = table.records().iter().filter(|t| t.start_time.is_none()).count();

        println!("  Time taken: {:?}", elapsed);
        println!("  Trips: {}", table.initial_row_count());
        println!("  Unparsed start times: {}", unparsed);
        println!("  Gender column: {}, Birth Year column: {}",
                 table.columns().gender, table.columns().birth_year);
        println!("  Performance: {:.0} trips/second\n",
                 table.initial_row_count() as f64 / elapsed.as_secs_f64());
    }
}
