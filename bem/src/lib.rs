pub mod block;
pub mod markup;
pub mod parser;

pub use block::{Block, BlockSet, Element};
pub use markup::{ScanDiagnostic, ScanOutput, scan_class_names};
pub use parser::{Parser, Separators, parse};
