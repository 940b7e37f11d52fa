use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use log::info;

use crate::Error;
use crate::model::{FlightGraph, GraphTables};

/// Serialize the graph to its node-table + edge-table JSON schema.
pub fn save_graph(graph: &FlightGraph, path: &Path) -> Result<(), Error> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), &graph.to_tables())?;
    info!(
        "Flight graph saved to {} ({} nodes, {} edges)",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Load a previously saved graph. A missing cache file is a recoverable
/// outcome (`Ok(None)`): the caller rebuilds the graph. A present but
/// unreadable or inconsistent file is an error.
pub fn load_graph(path: &Path) -> Result<Option<FlightGraph>, Error> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("Graph cache {} not found", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let tables: GraphTables = serde_json::from_reader(BufReader::new(file))?;
    let graph = FlightGraph::from_tables(tables)?;
    info!(
        "Flight graph loaded from {} ({} nodes, {} edges)",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(Some(graph))
}
