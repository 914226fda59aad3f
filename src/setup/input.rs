use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::domain::catalog::OfferCatalog;
use crate::domain::types::{FleetSpec, Parcel};
use crate::error::InputError;
use crate::utils::split_fields;

pub const COURIER_PROMPT: &str = "[baseDeliveryCost] [no. of parcel]";
pub const PARCEL_PROMPT: &str = "[pkg_id] [pkg_weight] [pkg_distance] [offer]";
pub const DELIVERY_TIME_PROMPT: &str = "Do you want to calculate each delivery cost? (y/n)";
pub const FLEET_PROMPT: &str = "[no_of_vehicles] [max_speed] [max_carriable_weight]";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourierInput {
    pub base_cost: f64,
    pub parcel_count: usize,
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T, InputError> {
    raw.parse().map_err(|_| InputError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

fn parse_amount(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let value: f64 = parse_field(field, raw)?;
    if !value.is_finite() {
        return Err(InputError::NotANumber {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

pub fn parse_courier_line(line: &str) -> Result<CourierInput, InputError> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(InputError::Courier(line.to_string()));
    }

    Ok(CourierInput {
        base_cost: parse_amount("base delivery cost", fields[0])?,
        parcel_count: parse_field("number of parcels", fields[1])?,
    })
}

/// `id weight distance [offer_code]`. An unknown or missing code means no offer.
pub fn parse_parcel_line(
    line: &str,
    base_cost: f64,
    catalog: &OfferCatalog,
) -> Result<Parcel, InputError> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(InputError::Parcel(line.to_string()));
    }

    let weight = parse_amount("parcel weight", fields[1])?;
    let distance = parse_amount("parcel distance", fields[2])?;
    let offer = fields.get(3).and_then(|code| catalog.find(code)).cloned();

    if let (Some(code), None) = (fields.get(3), &offer) {
        debug!("Offer code {} not in catalog, parcel {} gets no offer", code, fields[0]);
    }

    Ok(Parcel::new(fields[0], weight, distance, base_cost).with_offer(offer))
}

pub fn parse_fleet_line(line: &str) -> Result<FleetSpec, InputError> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(InputError::Fleet(line.to_string()));
    }

    let fleet = FleetSpec::new(
        parse_field("number of vehicles", fields[0])?,
        parse_field("max speed", fields[1])?,
        parse_field("max carriable weight", fields[2])?,
    )?;
    Ok(fleet)
}

/// Only an explicit `n` skips the delivery time estimate.
pub fn wants_delivery_time(answer: &str) -> bool {
    answer.trim() != "n"
}

/// Everything gathered from one interactive run.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub parcels: Vec<Parcel>,
    pub fleet: Option<FleetSpec>,
}

impl Session {
    /// Prompt on `writer` and read one line per answer from `reader`.
    pub fn collect<R: BufRead, W: Write>(
        reader: &mut R,
        writer: &mut W,
        catalog: &OfferCatalog,
    ) -> Result<Self, InputError> {
        let courier = parse_courier_line(&ask(reader, writer, COURIER_PROMPT, "courier input")?)?;
        info!(
            "Collecting {} parcels at base cost {}",
            courier.parcel_count, courier.base_cost
        );

        // the count is user input, so nothing is reserved up front
        let mut parcels = Vec::new();
        for _ in 0..courier.parcel_count {
            let line = ask(reader, writer, PARCEL_PROMPT, "parcel input")?;
            parcels.push(parse_parcel_line(&line, courier.base_cost, catalog)?);
        }

        let answer = ask(reader, writer, DELIVERY_TIME_PROMPT, "delivery time answer")?;
        let fleet = if wants_delivery_time(&answer) {
            Some(parse_fleet_line(&ask(reader, writer, FLEET_PROMPT, "fleet input")?)?)
        } else {
            None
        };

        Ok(Self { parcels, fleet })
    }
}

fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    what: &'static str,
) -> Result<String, InputError> {
    writeln!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof(what));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
