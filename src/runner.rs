use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing::{info, span, Level};

use crate::config::constant::{DEMO_BASE_COST, DEMO_FLEET, DEMO_PARCEL_COUNT, SEED};
use crate::domain::catalog::OfferCatalog;
use crate::domain::types::{FleetSpec, Parcel};
use crate::fixtures::data_generator::generate_demo_parcels;
use crate::report::{build_rows, print_plan, print_results, save_to_csv, ResultRow};
use crate::setup::{init_tracing_and_env, load_offer_catalog, report_csv_path, Session};
use crate::solver::fleet_assignment::{apply_plan, plan_fleet};

/// Price every parcel and, when a fleet is given, estimate delivery times.
pub fn process(
    parcels: Vec<Parcel>,
    fleet: Option<&FleetSpec>,
) -> Result<Vec<ResultRow>, Box<dyn Error>> {
    let parcels = match fleet {
        Some(fleet) => {
            let span = span!(Level::INFO, "fleet_assignment");
            let _guard = span.enter();
            let plan = plan_fleet(&parcels, fleet)?;
            print_plan(&plan);

            let mut planned = apply_plan(&parcels, &plan);
            planned.extend(
                parcels
                    .iter()
                    .filter(|parcel| plan.unassigned.contains(&parcel.id))
                    .cloned(),
            );
            planned.sort_by(|a, b| a.id.cmp(&b.id));
            planned
        }
        None => parcels,
    };

    Ok(build_rows(&parcels))
}

/// Collect a session from `reader`, then write the result block to `writer`.
pub fn run_session<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    catalog: &OfferCatalog,
) -> Result<Vec<ResultRow>, Box<dyn Error>> {
    let session = Session::collect(reader, writer, catalog)?;
    let rows = process(session.parcels, session.fleet.as_ref())?;
    print_results(writer, &rows)?;
    Ok(rows)
}

fn run_demo<W: Write>(
    writer: &mut W,
    catalog: &OfferCatalog,
) -> Result<Vec<ResultRow>, Box<dyn Error>> {
    let (vehicle_count, max_speed, max_load) = DEMO_FLEET;
    let fleet = FleetSpec::new(vehicle_count, max_speed, max_load)?;
    let parcels = generate_demo_parcels(DEMO_PARCEL_COUNT, SEED, DEMO_BASE_COST, catalog);

    let rows = process(parcels, Some(&fleet))?;
    print_results(writer, &rows)?;
    Ok(rows)
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;
    let catalog = load_offer_catalog()?;

    let demo = std::env::args().skip(1).any(|arg| arg == "--demo");
    info!("Starting courier run (demo: {})", demo);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let rows = if demo {
        run_demo(&mut writer, &catalog)?
    } else {
        let stdin = io::stdin();
        run_session(&mut stdin.lock(), &mut writer, &catalog)?
    };

    if let Some(path) = report_csv_path() {
        save_to_csv(&rows, &path)?;
    }

    Ok(())
}
