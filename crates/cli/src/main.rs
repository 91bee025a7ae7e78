//! One-shot demo binary: seeds a small catalog, prints a demand forecast,
//! a recommended order, and a supplier ranking.

use anyhow::Result;
use clap::Parser;

use stockpilot_core::{ProductId, SupplierId};
use stockpilot_forecast::ForecastEngine;
use stockpilot_products::{Product, ProductStore};
use stockpilot_ranking::{rank_suppliers, score};
use stockpilot_suppliers::{Supplier, SupplierStore};
use stockpilot_weather::{NoWeather, OpenWeatherClient, WeatherSignal};

#[derive(Debug, Parser)]
#[command(
    name = "stockpilot",
    about = "Demand forecasting and supplier ranking over a seeded sample catalog"
)]
struct Cli {
    /// Forecast horizon in days.
    #[arg(long, default_value_t = 7)]
    horizon: u32,

    /// City for weather-adjusted forecasts (needs OPENWEATHER_API_KEY).
    #[arg(long)]
    location: Option<String>,
}

fn seed_products() -> Result<ProductStore> {
    let mut store = ProductStore::new();

    store.insert(Product::new(
        ProductId::new("A1"),
        "Apple",
        7,
        Some("fruit".to_string()),
    ))?;
    store.insert(Product::new(
        ProductId::new("I1"),
        "Ice Cream",
        14,
        Some("frozen".to_string()),
    ))?;

    for (id, quantity) in [("A1", 10), ("A1", 15), ("A1", 12), ("I1", 20), ("I1", 25)] {
        store.require_mut(&ProductId::new(id))?.add_sale(quantity);
    }

    Ok(store)
}

fn seed_suppliers() -> Result<SupplierStore> {
    let mut store = SupplierStore::new();

    let mut acme = Supplier::new(SupplierId::new("S1"), "Acme Produce");
    acme.record_delivery(2.0, 100.0, 5.0);
    acme.record_delivery(3.0, 120.0, 4.0);
    store.insert(acme)?;

    let mut budget = Supplier::new(SupplierId::new("S2"), "Budget Wholesale");
    budget.record_delivery(5.0, 80.0, 3.0);
    store.insert(budget)?;

    Ok(store)
}

fn run(cli: &Cli) -> Result<()> {
    let weather: Box<dyn WeatherSignal> = if cli.location.is_some() {
        match OpenWeatherClient::from_env() {
            Ok(client) => Box::new(client),
            Err(err) => {
                tracing::warn!(error = %err, "weather unavailable; forecasts are unadjusted");
                Box::new(NoWeather)
            }
        }
    } else {
        Box::new(NoWeather)
    };
    let engine = ForecastEngine::new(weather.as_ref());

    let products = seed_products()?;
    let location = cli.location.as_deref();

    println!("Forecasts for the next {} day(s):", cli.horizon);
    for product in products.iter() {
        let forecast = engine.forecast(product, cli.horizon, location);
        let order = engine.recommended_order(product, cli.horizon);
        println!(
            "  {} ({}): forecast {} unit(s), inventory {}, recommended order {}",
            product.name(),
            product.id_typed(),
            forecast,
            product.inventory(),
            order
        );
    }

    let suppliers = seed_suppliers()?;
    let all: Vec<Supplier> = suppliers.iter().cloned().collect();
    println!("Supplier ranking:");
    for (rank, supplier) in rank_suppliers(&all).iter().enumerate() {
        println!(
            "  {}. {} (score {:.2})",
            rank + 1,
            supplier.name(),
            score(supplier)
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    stockpilot_observability::init();
    let cli = Cli::parse();
    run(&cli)
}
