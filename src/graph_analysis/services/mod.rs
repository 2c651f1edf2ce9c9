mod graph_analyzer;
mod graph_builder;
mod record_normalizer;
mod tree_traversal;

pub use graph_analyzer::GraphAnalyzer;
pub use graph_builder::GraphBuilder;
pub use record_normalizer::RecordNormalizer;
pub use tree_traversal::TreeTraversal;
