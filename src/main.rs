use clap::{App, Arg, ArgMatches};
use log::*;
use soc_config_gen::config::{
    DEFAULT_CONFIG_FILE, RAM_ADDR_WIDTH_KEY, RAM_FILE_KEY, UART_BAUD_RATE_KEY,
};
use soc_config_gen::generator::summary;
use soc_config_gen::{check, generate, logging, Assignments, Configuration, Error, Result};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    logging::init();
    let matches = App::new("SoC configuration generator")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Configuration module (default: <root>/configuration.py)"),
        )
        .arg(
            Arg::with_name("root")
                .short("r")
                .long("root")
                .takes_value(true)
                .default_value(".")
                .help("Project root the generated paths are relative to"),
        )
        .arg(
            Arg::with_name("ram-addr-width")
                .long("ram-addr-width")
                .takes_value(true)
                .help("Override RAM_ADDR_WIDTH"),
        )
        .arg(
            Arg::with_name("ram-file")
                .long("ram-file")
                .takes_value(true)
                .help("Override RAM_FILE"),
        )
        .arg(
            Arg::with_name("uart-baud-rate")
                .long("uart-baud-rate")
                .takes_value(true)
                .help("Override UART_BAUD_RATE"),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .help("Verify the generated files are up to date without writing them"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        debug!("{:?}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let root = PathBuf::from(matches.value_of("root").unwrap_or("."));
    let config = load_configuration(matches, &root)?;
    info!("{:?}", config);

    if matches.is_present("check") {
        let stale = check(&config, &root)?;
        if !stale.is_empty() {
            return Err(Error::Stale(stale));
        }
        println!("up to date: {}", summary());
    } else {
        generate(&config, &root)?;
        println!("generated: {}", summary());
    }
    Ok(())
}

/// 读取配置模块并应用命令行覆盖
///
/// 未指定`--config`且默认文件不存在时, 所有值都必须来自命令行
fn load_configuration(matches: &ArgMatches, root: &Path) -> Result<Configuration> {
    let explicit = matches.value_of("config");
    let path = explicit
        .map(PathBuf::from)
        .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));
    let mut assignments = if explicit.is_none() && !path.exists() {
        warn!("{} not found, using command-line values", path.display());
        Assignments::new()
    } else {
        Assignments::load(&path)?
    };

    if let Some(v) = matches.value_of("ram-addr-width") {
        assignments.override_int(RAM_ADDR_WIDTH_KEY, v)?;
    }
    if let Some(v) = matches.value_of("ram-file") {
        assignments.override_text(RAM_FILE_KEY, v);
    }
    if let Some(v) = matches.value_of("uart-baud-rate") {
        assignments.override_text(UART_BAUD_RATE_KEY, v);
    }
    assignments.into_configuration()
}
