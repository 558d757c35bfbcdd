mod engine;
mod engine_config;
mod engine_snapshot;
mod json_contract;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{
    CHART_GEOMETRY_JSON_SCHEMA_V1, ChartGeometryJsonContractV1, ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
    EngineSnapshotJsonContractV1,
};
