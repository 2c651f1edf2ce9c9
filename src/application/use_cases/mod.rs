/// Use cases module containing application business logic orchestration
mod collect_report;
mod explore_graph;

pub use collect_report::CollectReportUseCase;
pub use explore_graph::ExploreGraphUseCase;
