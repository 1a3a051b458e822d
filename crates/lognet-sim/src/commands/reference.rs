use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::info;
use lognet_graph::{network_to_yaml, reference_network};

#[derive(Args, Debug)]
pub struct ReferenceArgs {
    /// Output file for the YAML description; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &ReferenceArgs) -> Result<(), Box<dyn Error>> {
    let yaml = network_to_yaml(&reference_network()?)?;
    match &args.out {
        Some(path) => {
            fs::write(path, yaml)?;
            info!("reference network written to {}", path.display());
        }
        None => print!("{yaml}"),
    }
    Ok(())
}
