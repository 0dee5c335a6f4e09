use miette::Result;
use weatherlog::{Journal, TemperatureCategory};

fn main() -> Result<()> {
    let file = std::env::args().nth(1).expect("Missing filename");
    println!("opening {file}");

    let journal = Journal::load(file)?;

    let average = journal.average_temperature_for_month("2025-02");
    if average.is_nan() {
        println!("Average Temperature (Feb 2025): no data");
    } else {
        println!("Average Temperature (Feb 2025): {average:.2}");
    }
    println!("Days Above 30C: {:?}", journal.days_above(30.0));
    println!("Rainy Days: {}", journal.rainy_days());
    println!(
        "Temperature Category (25C): {}",
        TemperatureCategory::of(25.0)
    );

    Ok(())
}
