use anyhow::Result;
use bandcamp_labelview::{run, Config};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(
    name = "bandcamp-labelview",
    version,
    about = "Turns a Bandcamp discography page into a page of embedded players."
)]
struct Opt {
    /// The bandcamp URL for processing
    pub url: String,

    /// Output HTML file name, without extension
    #[clap(long)]
    pub outfile: Option<String>,

    /// Output HTML location
    #[clap(long, default_value = ".")]
    pub location: PathBuf,

    /// Verbosity
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    let Opt {
        url,
        outfile,
        location,
        verbose,
    } = opt;

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        })
        .parse_default_env()
        .init();

    let config = Config::new(&url, outfile, location)?;
    let path = run(&config)?;

    println!("{} -> {}", config.url, path.display());

    Ok(())
}
