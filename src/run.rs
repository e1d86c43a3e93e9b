//! Spawns both mutations, joins them, then prints.

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::VehicleConfig;
use crate::options::Options;
use crate::task::{self, Mutation, TaskError, reclaim, spawn_mutation};
use crate::vehicle::Vehicle;

/// Values the two background tasks write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub id: i64,
    pub name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::resolve(&Options::default(), VehicleConfig::default())
    }
}

impl Settings {
    /// Command line flags win over the config file.
    pub fn resolve(options: &Options, config: VehicleConfig) -> Self {
        Settings {
            id: options.id.unwrap_or(config.id),
            name: options.name.clone().unwrap_or(config.name),
        }
    }
}

/// Both vehicles, reclaimed after their tasks were joined.
#[derive(Debug)]
pub struct Outcome {
    pub first: Vehicle,
    pub second: Vehicle,
}

impl Outcome {
    /// Id of the first vehicle, then name of the second.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        self.first.write_id(out).context("writing vehicle id")?;
        self.second.write_name(out).context("writing vehicle name")?;
        Ok(())
    }

    pub fn print(&self) -> Result<()> {
        self.first.print_id().context("printing vehicle id")?;
        self.second.print_name().context("printing vehicle name")?;
        Ok(())
    }
}

pub fn run(settings: &Settings) -> Result<Outcome> {
    log::info!("starting tasks: id={} name={:?}", settings.id, settings.name);

    let first = task::share(Vehicle::new());
    let second = task::share(Vehicle::new());

    let id = settings.id;
    let set_id = spawn_mutation("set-id", &first, move |v| v.set_id(id))?;
    let name = settings.name.clone();
    let set_name = match spawn_mutation("set-name", &second, move |v| v.set_name(name)) {
        Ok(task) => task,
        Err(err) => return Err(abandon(set_id, err)),
    };

    set_id.join()?;
    set_name.join()?;

    let first = reclaim(first).context("reclaiming first vehicle")?;
    let second = reclaim(second).context("reclaiming second vehicle")?;

    log::info!("both tasks joined");
    Ok(Outcome { first, second })
}

/// Joins a task that is already running before reporting `err`.
fn abandon(pending: Mutation, err: TaskError) -> anyhow::Error {
    let label = pending.label().to_string();
    if let Err(join_err) = pending.join() {
        log::error!("task `{}` also failed: {}", label, join_err);
    }
    err.into()
}
