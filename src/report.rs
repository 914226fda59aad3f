use std::error::Error;
use std::io::Write;

use colored::*;
use csv::Writer;
use itertools::Itertools;
use tracing::{debug, info};

use crate::domain::plan::FleetPlan;
use crate::domain::types::{DeliveryCost, DeliveryTime, Parcel};

/// One output line: `id discount total delivery_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub id: String,
    pub discount: f64,
    pub total: f64,
    pub delivery_time: Option<DeliveryTime>,
}

impl ResultRow {
    pub fn new(parcel: &Parcel, cost: &DeliveryCost) -> Self {
        Self {
            id: parcel.id.clone(),
            discount: cost.discount,
            total: cost.total,
            delivery_time: parcel.delivery_time,
        }
    }
}

pub fn build_rows(parcels: &[Parcel]) -> Vec<ResultRow> {
    parcels
        .iter()
        .map(|parcel| ResultRow::new(parcel, &parcel.calculate_delivery_cost()))
        .collect()
}

/// Numbers print in their shortest form (`35`, `43.5`); time is omitted when unassigned.
pub fn format_result_line(row: &ResultRow) -> String {
    let mut fields = vec![row.id.clone(), row.discount.to_string(), row.total.to_string()];
    if let Some(time) = row.delivery_time {
        fields.push(time.to_string());
    }
    fields.iter().join(" ")
}

pub fn print_results<W: Write>(writer: &mut W, rows: &[ResultRow]) -> std::io::Result<()> {
    writeln!(writer, "{}", "Result:".green().bold())?;
    for row in rows {
        writeln!(writer, "{}", format_result_line(row))?;
    }
    writer.flush()
}

pub fn print_plan(plan: &FleetPlan) {
    for trip in &plan.trips {
        debug!(
            "vehicle {} @ {:.2} -> {:.2}: {}",
            trip.vehicle,
            trip.departure,
            trip.returns_at,
            trip.deliveries
                .iter()
                .map(|d| format!("{} ({})", d.parcel_id, d.delivery_time))
                .join(", ")
        );
    }
    if !plan.unassigned.is_empty() {
        info!("Unassigned parcels: {}", plan.unassigned.iter().join(", "));
    }
}

pub fn save_to_csv(rows: &[ResultRow], filename: &str) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;
    write_rows(&mut wtr, rows)?;
    info!("Wrote {} result rows to {}", rows.len(), filename);
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut Writer<W>, rows: &[ResultRow]) -> Result<(), Box<dyn Error>> {
    wtr.write_record(["id", "discount", "total", "delivery_time"])?;

    for row in rows {
        wtr.write_record([
            row.id.clone(),
            row.discount.to_string(),
            row.total.to_string(),
            row.delivery_time.map(|t| t.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
