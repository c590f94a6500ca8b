/// Formatter adapters for serializing VEX documents
mod openvex_formatter;

pub use openvex_formatter::OpenVexFormatter;
