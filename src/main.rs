use std::io::Write;

use anyhow::{Context, Result, anyhow};
use vehicle_join::config::VehicleConfig;
use vehicle_join::options::Options;
use vehicle_join::{Settings, run};

fn main() {
    if std::env::var("VEHICLE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("VEHICLE_LOG")
            .write_style("VEHICLE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let exit_code = match try_main() {
        Ok(()) => 0,
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            1
        }
    };
    std::process::exit(exit_code);
}

fn try_main() -> Result<()> {
    let mut flags = Vec::new();
    for (i, arg) in std::env::args_os().enumerate().skip(1) {
        let arg = arg
            .into_string()
            .map_err(|arg| anyhow!("Argument {i} is not valid Unicode: {arg:?}"))?;
        flags.push(arg);
    }

    let options = match Options::parse_from_args(&flags) {
        Ok(options) => options,
        Err(e) => match e.downcast::<clap::Error>() {
            // Help, version and usage errors get clap's own output and exit code.
            Ok(clap_err) => clap_err.exit(),
            Err(e) => return Err(anyhow!(e)),
        },
    };
    log::debug!("vehicle options: {:?}", options);

    let config = match &options.config {
        Some(path) => VehicleConfig::load_from_file(path)?,
        None => VehicleConfig::default(),
    };
    let settings = Settings::resolve(&options, config);

    run(&settings)?.print()?;
    std::io::stdout().flush().context("flushing stdout")?;
    Ok(())
}
