use serde::Serialize;

use captains_log_core::stardate::{
    format_duration, ship_time, to_earth_date, ShipTimeZone, StardateInfo,
};

use crate::app::AppContext;
use crate::cli::StardateArgs;
use crate::errors::CliError;
use crate::output::print_json;

#[derive(Serialize)]
struct ZoneTime {
    zone: String,
    time: String,
}

#[derive(Serialize)]
struct StardateReport {
    #[serde(flatten)]
    info: StardateInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ship_time: Option<ZoneTime>,
}

pub fn handle_stardate(ctx: &AppContext, args: &StardateArgs) -> anyhow::Result<()> {
    let (info, elapsed) = match &args.to_earth {
        Some(stardate) => {
            let earth = to_earth_date(stardate).map_err(CliError::from)?;
            let current = chrono::Local::now().naive_local();
            let elapsed = (earth <= current).then(|| format_duration(&earth, &current));
            (StardateInfo::at(&earth), elapsed)
        }
        None => (StardateInfo::now(), None),
    };

    let ship_time = match &args.zone {
        Some(name) => {
            let zone: ShipTimeZone = name.parse().map_err(CliError::invalid_input)?;
            Some(ZoneTime {
                zone: zone.name().to_string(),
                time: ship_time(zone).format("%Y-%m-%d %H:%M:%S %:z").to_string(),
            })
        }
        None => None,
    };

    let report = StardateReport {
        info,
        elapsed,
        ship_time,
    };
    if args.json {
        return print_json(&report);
    }

    if ctx.quiet() {
        println!("{}", report.info.stardate);
        return Ok(());
    }
    println!("{}", report.info.formatted_stardate);
    println!("{}", report.info.set_display);
    println!(
        "Earth date: {} ({})",
        report.info.earth_date, report.info.earth_date_long
    );
    println!(
        "SC year {} / Earth year {}, day {}",
        report.info.sc_year, report.info.year, report.info.day_of_year
    );
    if let Some(elapsed) = &report.elapsed {
        println!("Elapsed since: {}", elapsed);
    }
    if let Some(zone) = &report.ship_time {
        println!("{} time: {}", zone.zone, zone.time);
    }
    Ok(())
}
