//! One-shot BAC estimate from the command line
//! Usage: cargo run --bin bac_estimate -- <male|female> <weight_kg> <elapsed_hours> <Drink=qty>...
//! Example: cargo run --bin bac_estimate -- male 70 1 Beer=2 Soju

use bacguard::models::DrinkSelection;
use bacguard::tools::estimate::{estimate_bac, EstimateRequest};

const USAGE: &str =
    "Usage: bac_estimate <male|female> <weight_kg> <elapsed_hours> <Drink=qty>...";

fn parse_drink(arg: &str) -> Result<DrinkSelection, String> {
    match arg.split_once('=') {
        Some((name, qty)) => {
            let quantity = qty
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("Invalid quantity in '{}'", arg))?;
            Ok(DrinkSelection::new(name.trim(), quantity))
        }
        None => Ok(DrinkSelection::new(arg.trim(), 1)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!("{}", USAGE);
        return Err("missing arguments".into());
    }

    let body_weight: f64 = args[1]
        .parse()
        .map_err(|_| format!("Invalid weight: '{}'\n{}", args[1], USAGE))?;
    let elapsed_hours: f64 = args[2]
        .parse()
        .map_err(|_| format!("Invalid elapsed hours: '{}'\n{}", args[2], USAGE))?;
    let drinks = args[3..]
        .iter()
        .map(|a| parse_drink(a))
        .collect::<Result<Vec<_>, _>>()?;

    let response = estimate_bac(EstimateRequest {
        gender: args[0].clone(),
        body_weight,
        weight_unit: "kg".to_string(),
        drinks,
        elapsed_hours: Some(elapsed_hours),
        drinking_started_at: None,
    })?;

    println!("Estimated BAC: {:.4}%", response.bac_percent);
    println!("Tier: {}", response.tier_display);
    println!("{}", response.advisory);
    println!();
    println!("Alcohol consumed: {:.2} g", response.total_alcohol_grams);
    for c in &response.contributions {
        if c.resolved {
            println!("  {} x{}: {:.2} g", c.drink_id, c.quantity, c.alcohol_grams);
        } else {
            println!("  {} x{}: unknown drink, not counted", c.drink_id, c.quantity);
        }
    }
    println!("Hours until below 0.03%: {:.1}", response.hours_until_safe);
    println!("Hours until 0.00%: {:.1}", response.hours_until_sober);

    Ok(())
}
