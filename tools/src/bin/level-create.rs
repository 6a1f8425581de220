use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use bednbt::level::{self, GameSettings};
use clap::{App, Arg};
use env_logger::Env;
use log::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn load_settings(path: &Path) -> Result<GameSettings> {
    let f = std::fs::File::open(path)?;
    let settings = serde_json::from_reader(std::io::BufReader::new(f))?;
    Ok(settings)
}

fn unix_now() -> Result<i64> {
    let secs = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    Ok(i64::try_from(secs)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("level-create")
        .about("Create a level.dat for a new world from a JSON settings file")
        .arg(Arg::with_name("config").takes_value(true).required(true))
        .arg(
            Arg::with_name("out")
                .long("out")
                .takes_value(true)
                .required(false)
                .default_value("level.dat"),
        )
        .arg(
            Arg::with_name("touch")
                .long("touch")
                .help("set LastPlayed to the current time")
                .takes_value(false)
                .required(false),
        )
        .get_matches();

    let config = Path::new(matches.value_of("config").ok_or("no config given")?);
    let out = Path::new(matches.value_of("out").ok_or("no output given")?);

    let settings = load_settings(config)?;
    info!("building level {:?}", settings.level_name);

    let mut compound = level::build_level_compound(&settings)?;
    if matches.is_present("touch") {
        compound = level::set_last_played(&compound, unix_now()?)?;
    }

    level::save_level_file(out, &compound)?;
    info!("wrote {} entries to {}", compound.len(), out.display());

    Ok(())
}
