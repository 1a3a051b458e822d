use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use log::info;
use lognet_graph::{
    analysis_to_json, analyze, load_config, load_network, reference_network, write_analysis,
    AnalysisConfig,
};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// YAML or JSON network description; the reference network when omitted.
    #[arg(long)]
    pub network: Option<PathBuf>,
    /// Output file for the JSON analysis; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// YAML or JSON analysis options.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of lowest-capacity routes to report; overrides the config file.
    #[arg(long = "low-capacity")]
    pub low_capacity: Option<usize>,
    /// Skip minimum cut extraction.
    #[arg(long)]
    pub no_min_cut: bool,
}

pub fn run(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let network = match &args.network {
        Some(path) => load_network(path)?,
        None => reference_network()?,
    };
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(count) = args.low_capacity {
        config.low_capacity_routes = count;
    }
    if args.no_min_cut {
        config.min_cut = false;
    }
    let analysis = analyze(&network, &config)?;
    info!(
        "maximum flow {} units over {} nodes",
        analysis.max_flow,
        network.node_count()
    );

    match &args.out {
        Some(path) => {
            write_analysis(&analysis, path)?;
            info!("analysis written to {}", path.display());
        }
        None => {
            let json = analysis_to_json(&analysis)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
