use std::fs;
use std::path::Path;

use lognet_core::errors::FlowError;
use lognet_core::provenance::SchemaVersion;

use crate::analysis::NetworkAnalysis;
use crate::config::AnalysisConfig;
use crate::network::{FlowNetwork, NetworkSpec};

/// Parses a YAML network description and builds the network.
pub fn network_from_yaml(yaml: &str) -> Result<FlowNetwork, FlowError> {
    let spec: NetworkSpec = serde_yaml::from_str(yaml)
        .map_err(|err| FlowError::serde("parse-yaml", err.to_string()))?;
    FlowNetwork::from_spec(&spec)
}

/// Parses a JSON network description and builds the network.
pub fn network_from_json(json: &str) -> Result<FlowNetwork, FlowError> {
    let spec: NetworkSpec = serde_json::from_str(json)
        .map_err(|err| FlowError::serde("parse-json", err.to_string()))?;
    FlowNetwork::from_spec(&spec)
}

/// Serializes a network description to YAML.
pub fn network_to_yaml(network: &FlowNetwork) -> Result<String, FlowError> {
    serde_yaml::to_string(&network.to_spec())
        .map_err(|err| FlowError::serde("serialize-yaml", err.to_string()))
}

/// Loads a network from disk; `.json` files are read as JSON, anything else as YAML.
pub fn load_network(path: &Path) -> Result<FlowNetwork, FlowError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        FlowError::serde("read-network", format!("failed to read network: {err}"))
            .with_context("path", path.display())
    })?;
    let parsed = if is_json(path) {
        network_from_json(&contents)
    } else {
        network_from_yaml(&contents)
    };
    parsed.map_err(|err| err.with_context("path", path.display()))
}

/// Loads analysis options from disk; missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<AnalysisConfig, FlowError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        FlowError::serde("read-config", format!("failed to read config: {err}"))
            .with_context("path", path.display())
    })?;
    if is_json(path) {
        serde_json::from_str(&contents).map_err(|err| {
            FlowError::serde("parse-json", err.to_string()).with_context("path", path.display())
        })
    } else {
        serde_yaml::from_str(&contents).map_err(|err| {
            FlowError::serde("parse-yaml", err.to_string()).with_context("path", path.display())
        })
    }
}

/// Serializes an analysis to pretty-printed JSON.
pub fn analysis_to_json(analysis: &NetworkAnalysis) -> Result<String, FlowError> {
    serde_json::to_string_pretty(analysis)
        .map_err(|err| FlowError::serde("serialize-json", err.to_string()))
}

/// Restores an analysis from JSON, rejecting documents from an incompatible schema.
pub fn analysis_from_json(json: &str) -> Result<NetworkAnalysis, FlowError> {
    let analysis: NetworkAnalysis =
        serde_json::from_str(json).map_err(|err| FlowError::serde("parse-json", err.to_string()))?;
    let version = analysis.provenance.schema_version;
    if !version.is_readable() {
        return Err(
            FlowError::serde("unsupported-schema", "analysis written under another schema")
                .with_context("found", version)
                .with_context("expected", SchemaVersion::CURRENT),
        );
    }
    Ok(analysis)
}

/// Writes an analysis as JSON to `path`.
pub fn write_analysis(analysis: &NetworkAnalysis, path: &Path) -> Result<(), FlowError> {
    let json = analysis_to_json(analysis)?;
    fs::write(path, json).map_err(|err| {
        FlowError::serde("write-analysis", format!("failed to write analysis: {err}"))
            .with_context("path", path.display())
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
