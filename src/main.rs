#[macro_use]
extern crate clap;

use {
    anyhow::{bail, Context, Result},
    clap::ArgMatches,
    fdtd_constants::{
        constants::initialize_constants,
        parameters::{Parameters, Physical},
        utils::{degrees_to_radians, radians_to_degrees},
    },
    log::{error, info},
    simplelog::{Config as LogConfig, LevelFilter, TermLogger, TerminalMode},
};

#[quit::main]
fn main() {
    let matches = clap_app!(fdtd_constants =>
        (version: crate_version!())
        (@arg PARAMETERS: -p --parameters +takes_value "Path to file containing the defining constants. SI values are used if omitted.")
        (@arg VERBOSE: -v --verbose "Enables debug logging")
        (@subcommand constants =>
            (about: "Prints the derived table of free-space constants.")
        )
        (@subcommand verify =>
            (about: "Checks eps0 * mu0 * c0^2 = 1 and eta0^2 = mu0 / eps0 at the configured relative tolerance.")
        )
        (@subcommand deg2rad =>
            (about: "Converts an angle from degrees to radians.")
            (@arg ANGLE: +required +allow_hyphen_values "Angle in degrees")
        )
        (@subcommand rad2deg =>
            (about: "Converts an angle from radians to degrees.")
            (@arg ANGLE: +required +allow_hyphen_values "Angle in radians")
        )
        (@subcommand courant =>
            (about: "Prints the largest stable time step for a Yee cell of the given spacings in metres.")
            (@arg DX: +required "Cell spacing in x")
            (@arg DY: +required "Cell spacing in y")
            (@arg DZ: +required "Cell spacing in z")
        )
    )
    .get_matches();

    let level = if matches.is_present("VERBOSE") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    TermLogger::init(level, LogConfig::default(), TerminalMode::Mixed)
        .expect("Failed to initialize logger");

    let params = match matches.value_of("PARAMETERS") {
        Some(path) => {
            let params = Parameters::from_path(path).unwrap_or_else(|e| {
                error!("{:#}", e);
                quit::with_code(1);
            });

            info!(
                "Successfully loaded parameters from \"{}\": \n{:#?}",
                path, params
            );

            params
        }
        None => Parameters::default(),
    };

    run_subcommand(&matches, params).unwrap_or_else(|e| {
        error!("Error: \"{:#}\"", e);
        quit::with_code(1);
    });
}

fn parse_value(matches: &ArgMatches, name: &str) -> Result<f64> {
    // Should never fail as clap enforces required arguments
    let value = matches
        .value_of(name)
        .with_context(|| format!("Missing argument {}", name))?;

    value
        .parse::<f64>()
        .with_context(|| format!("Invalid value for {}: \"{}\"", name, value))
}

fn run_subcommand(matches: &ArgMatches, params: Parameters) -> Result<()> {
    let (subcmd, sub_matches) = match matches.subcommand() {
        (s, Some(m)) => (s, m),
        _ => bail!("No subcommand selected"),
    };

    // SI runs share the process-wide table
    let constants = if params.physical == Physical::default() {
        *initialize_constants()
    } else {
        params.constants()
    };

    info!("Starting {}", subcmd);

    match subcmd {
        "constants" => {
            info!("Derived constants: {:?}", constants);
            print!("{}", serde_yaml::to_string(&constants)?);
        }
        "verify" => {
            constants.check_identities(params.numerical.relative_tolerance)?;
            info!(
                "Identities hold to within a relative tolerance of {:e}",
                params.numerical.relative_tolerance
            );
        }
        "deg2rad" => {
            let angle = parse_value(sub_matches, "ANGLE")?;
            println!("{}", degrees_to_radians(angle));
        }
        "rad2deg" => {
            let angle = parse_value(sub_matches, "ANGLE")?;
            println!("{}", radians_to_degrees(angle));
        }
        "courant" => {
            let dx = parse_value(sub_matches, "DX")?;
            let dy = parse_value(sub_matches, "DY")?;
            let dz = parse_value(sub_matches, "DZ")?;
            println!("{:e}", constants.courant_time_step(dx, dy, dz)?);
        }
        _ => {
            // Should be unreachable due to clap catching this error
            bail!("Unrecognized subcommand");
        }
    }

    info!("Finished {}", subcmd);

    Ok(())
}
