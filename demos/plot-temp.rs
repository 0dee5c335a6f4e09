use plotters::prelude::*;
use weatherlog::Journal;

fn main() {
    let input = std::env::args().nth(1).expect("Missing filename");
    println!("opening {input}");
    let output = format!("{input}.png");

    let journal = Journal::load(&input).unwrap();

    let dates: Vec<chrono::NaiveDate> = journal
        .observations
        .iter()
        .map(|observation| {
            chrono::NaiveDate::parse_from_str(&observation.date, "%Y-%m-%d")
                .expect(&format!("unplottable date {:?}", observation.date))
        })
        .collect();
    let first = *dates.first().unwrap();
    let last = *dates.last().unwrap();

    let root = BitMapBackend::new(&output, (1920, 1080)).into_drawing_area();
    root.fill(&WHITE).unwrap();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Temperature from {first} to {last}"),
            ("sans-serif", 100).into_font(),
        )
        .margin(5)
        .x_label_area_size(80)
        .y_label_area_size(80)
        .build_cartesian_2d(
            first..last + chrono::Days::new(1),
            journal.temperature_range(),
        )
        .unwrap();

    chart.configure_mesh().draw().unwrap();

    chart
        .draw_series(LineSeries::new(
            dates
                .iter()
                .copied()
                .zip(journal.observations.iter().map(|o| o.temperature)),
            RED,
        ))
        .unwrap()
        .label("Temperature")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .unwrap();

    root.present().unwrap();
}
