use thiserror::Error;

use crate::model::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("{0}")]
    MissingData(String),
    #[error("Node {0} is not present in the graph")]
    UnknownNode(NodeId),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(#[from] geojson::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
