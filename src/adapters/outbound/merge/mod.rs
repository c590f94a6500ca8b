/// Merge adapters combining per-package VEX documents
mod openvex_merger;

pub use openvex_merger::OpenVexMerger;
