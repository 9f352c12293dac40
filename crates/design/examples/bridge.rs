//! Sizes a bridge deck from a small material catalog.
//!
//! # Usage
//!
//! ```text
//! cargo run --example bridge
//! cargo run --example bridge -- 50 10 500
//! cargo run --example bridge -- 50 10 500 relaxed
//! ```
//!
//! Arguments are the requested length and width in metres and the load in
//! kN. Passing `relaxed` searches a continuous material index instead of
//! sizing every material.

use std::error::Error;

use girder_design::{
    Catalog, DesignAction, DesignEvent, Optimizer, OptimizerConfig, Strategy, report,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let number = |i: usize, default: f64| -> Result<f64, Box<dyn Error>> {
        args.get(i).map_or(Ok(default), |arg| Ok(arg.parse()?))
    };
    let length = number(0, 50.0)?;
    let width = number(1, 10.0)?;
    let max_load = number(2, 500.0)?;
    let strategy = match args.get(3).map(String::as_str) {
        Some("relaxed") => Strategy::RelaxedIndex,
        _ => Strategy::Enumerate,
    };

    let mut catalog = Catalog::new();
    catalog.add("timber", 60.0, 8.0)?;
    catalog.add("concrete", 150.0, 25.0)?;
    catalog.add("steel", 1200.0, 250.0)?;
    catalog.add("composite", 900.0, 120.0)?;

    let optimizer = Optimizer::new(OptimizerConfig {
        strategy,
        ..OptimizerConfig::default()
    });

    let result = optimizer.optimize_observed(
        &catalog.request(length, width, max_load),
        |event: &DesignEvent<'_>| -> Option<DesignAction> {
            let footprint = event.footprint();
            let status = match event {
                DesignEvent::Sized { .. } => "ok".to_owned(),
                DesignEvent::Rejected { reason, .. } => format!("{reason:?}"),
            };
            println!(
                "{:<10} {:>7.2} m x {:>6.2} m  cost {:>10.2}  ({status})",
                event.material(),
                footprint.length,
                footprint.width,
                event.response().cost,
            );
            None
        },
    )?;

    println!();
    print!("{}", report::render_summary(&result));
    println!();
    print!("{}", report::to_csv(&result));

    Ok(())
}
