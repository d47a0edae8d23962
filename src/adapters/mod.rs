// Adapters layer: concrete RecordSource implementations.

pub mod directory;
