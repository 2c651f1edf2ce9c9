use crate::adapters::outbound::formatters::{GraphTextFormatter, RenderOptions, TreeRenderer};
use crate::application::dto::{DisplayOptions, GraphRequest, GraphView};
use crate::graph_analysis::domain::{DependencyGraph, Direction};
use crate::graph_analysis::services::{GraphAnalyzer, GraphBuilder, TreeTraversal};
use crate::ports::outbound::{ProgressReporter, SnapshotReader};
use crate::shared::error::BrewDepsError;
use crate::shared::Result;
use std::path::Path;

/// ExploreGraphUseCase - Loads a snapshot and renders one view of its graph
///
/// # Type Parameters
/// * `SR` - SnapshotReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ExploreGraphUseCase<SR, PR> {
    snapshot_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> ExploreGraphUseCase<SR, PR>
where
    SR: SnapshotReader,
    PR: ProgressReporter,
{
    pub fn new(snapshot_reader: SR, progress_reporter: PR) -> Self {
        Self {
            snapshot_reader,
            progress_reporter,
        }
    }

    /// Executes the use case, returning the rendered view
    ///
    /// # Errors
    /// Fails when the snapshot cannot be loaded, holds no formulas, or the
    /// requested tree root is not in the graph.
    pub fn execute(&self, request: &GraphRequest) -> Result<String> {
        let graph = self.load_graph(&request.snapshot_path)?;
        let options = request.options;
        let formatter = GraphTextFormatter::new(options.use_color);

        let output = match &request.view {
            GraphView::Statistics => formatter.statistics(
                &GraphAnalyzer::summary_statistics(&graph),
                &GraphAnalyzer::top_most_depended_on(&graph, options.top_n),
                &GraphAnalyzer::top_most_dependencies(&graph, options.top_n),
                options.top_n,
            ),
            GraphView::List => formatter.list(&graph),
            GraphView::Roots => formatter.roots(&graph, &GraphAnalyzer::root_packages(&graph)),
            GraphView::Leaves => formatter.leaves(&graph, &GraphAnalyzer::leaf_packages(&graph)),
            GraphView::Tree { package, reverse } => {
                let direction = if *reverse {
                    Direction::Reverse
                } else {
                    Direction::Forward
                };
                Self::render_tree(&graph, &formatter, package, direction, options)?
            }
        };

        Ok(output)
    }

    fn load_graph(&self, path: &Path) -> Result<DependencyGraph> {
        self.progress_reporter
            .report(&format!("📖 Loading snapshot from: {}", path.display()));

        let snapshot = self.snapshot_reader.read_snapshot(path)?;
        if snapshot.formulas.is_empty() {
            return Err(BrewDepsError::EmptySnapshot {
                path: path.to_path_buf(),
            }
            .into());
        }

        let graph = GraphBuilder::from_entries(&snapshot.formulas);
        let skipped = snapshot.formulas.len() - graph.package_count();
        if skipped > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped {} snapshot entr{} (missing name or duplicate)",
                skipped,
                if skipped == 1 { "y" } else { "ies" }
            ));
        }
        self.progress_reporter
            .report(&format!("✅ Loaded {} package(s)", graph.package_count()));

        Ok(graph)
    }

    fn render_tree(
        graph: &DependencyGraph,
        formatter: &GraphTextFormatter,
        package: &str,
        direction: Direction,
        options: DisplayOptions,
    ) -> Result<String> {
        let record = graph.get(package).ok_or_else(|| BrewDepsError::PackageNotFound {
            name: package.to_string(),
        })?;

        let renderer = TreeRenderer::new(RenderOptions {
            show_versions: options.show_versions,
            use_color: options.use_color,
        });
        let traversal = TreeTraversal::new(graph, package, direction, options.max_depth);

        let mut output = formatter.package_header(record, direction);
        for line in renderer.lines(traversal) {
            output.push_str(&line);
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::Snapshot;
    use serde_json::json;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct MockSnapshotReader {
        snapshot: Option<Snapshot>,
    }

    impl SnapshotReader for MockSnapshotReader {
        fn read_snapshot(&self, path: &Path) -> Result<Snapshot> {
            self.snapshot.clone().ok_or_else(|| {
                BrewDepsError::SnapshotNotFound {
                    path: path.to_path_buf(),
                }
                .into()
            })
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        messages: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            formulas: vec![
                json!({"name": "wget", "version": "1.24.5", "description": "Internet file retriever",
                       "dependencies": ["libidn2", "openssl@3"], "required_by": []}),
                json!({"name": "libidn2", "dependencies": ["libunistring"], "required_by": ["wget"]}),
                json!({"name": "libunistring", "required_by": ["libidn2"]}),
                json!({"name": "openssl@3", "version": "3.3.0", "dependencies": ["ca-certificates"],
                       "required_by": ["wget"]}),
            ],
        }
    }

    fn use_case(
        snapshot: Option<Snapshot>,
    ) -> ExploreGraphUseCase<MockSnapshotReader, RecordingReporter> {
        ExploreGraphUseCase::new(MockSnapshotReader { snapshot }, RecordingReporter::default())
    }

    fn request(view: GraphView) -> GraphRequest {
        GraphRequest::new(
            PathBuf::from("brew-packages.json"),
            view,
            DisplayOptions::default(),
        )
    }

    #[test]
    fn test_statistics_view() {
        let output = use_case(Some(snapshot()))
            .execute(&request(GraphView::Statistics))
            .unwrap();
        assert!(output.contains("Total Packages: 4"));
        assert!(output.contains("Total Dependencies: 4"));
        assert!(output.contains("Average Dependencies per Package: 1.00"));
    }

    #[test]
    fn test_forward_tree_view() {
        let output = use_case(Some(snapshot()))
            .execute(&request(GraphView::Tree {
                package: "wget".to_string(),
                reverse: false,
            }))
            .unwrap();

        assert!(output.contains("Package: wget"));
        assert!(output.contains("Dependencies for wget:"));
        let tree: Vec<&str> = output
            .lines()
            .skip_while(|l| !l.starts_with("└── wget"))
            .collect();
        assert_eq!(
            tree,
            vec![
                "└── wget [2 deps]",
                "    ├── libidn2 [1 deps]",
                "    │   └── libunistring",
                "    └── openssl@3 [1 deps]",
                "        └── ca-certificates (not found)",
            ]
        );
    }

    #[test]
    fn test_reverse_tree_view_with_depth_and_versions() {
        let mut req = request(GraphView::Tree {
            package: "libunistring".to_string(),
            reverse: true,
        });
        req.options.max_depth = Some(2);
        req.options.show_versions = true;

        let output = use_case(Some(snapshot())).execute(&req).unwrap();
        assert!(output.contains("Reverse Dependencies (what depends on libunistring):"));
        assert!(output.contains("└── libunistring [required by 1]\n"));
        assert!(output.contains("    └── libidn2 [required by 1]\n"));
        assert!(!output.contains("wget (1.24.5)"));
    }

    #[test]
    fn test_unknown_package_is_an_error() {
        let err = use_case(Some(snapshot()))
            .execute(&request(GraphView::Tree {
                package: "nonexistent".to_string(),
                reverse: false,
            }))
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("Package 'nonexistent' not found in graph."));
    }

    #[test]
    fn test_empty_snapshot_is_an_error() {
        let err = use_case(Some(Snapshot::default()))
            .execute(&request(GraphView::Statistics))
            .unwrap_err();
        assert!(err.to_string().contains("No formulas found"));
    }

    #[test]
    fn test_reader_error_propagates() {
        let err = use_case(None)
            .execute(&request(GraphView::List))
            .unwrap_err();
        assert!(err.to_string().contains("Snapshot file not found"));
    }

    #[test]
    fn test_roots_leaves_and_list_views() {
        let uc = use_case(Some(snapshot()));
        assert!(uc
            .execute(&request(GraphView::Roots))
            .unwrap()
            .contains("Root Packages (1):"));
        assert!(uc
            .execute(&request(GraphView::Leaves))
            .unwrap()
            .contains("Leaf Packages (1):"));
        assert!(uc
            .execute(&request(GraphView::List))
            .unwrap()
            .contains("ALL PACKAGES (4 total)"));
    }

    #[test]
    fn test_progress_messages() {
        let uc = use_case(Some(Snapshot {
            formulas: vec![json!({"name": "wget"}), json!({"desc": "nameless"})],
        }));
        uc.execute(&request(GraphView::Statistics)).unwrap();

        let messages = uc.progress_reporter.messages.borrow();
        assert!(messages[0].starts_with("📖 Loading snapshot from: brew-packages.json"));
        assert!(messages.iter().any(|m| m.contains("Skipped 1 snapshot entry")));
        assert!(messages.iter().any(|m| m == "✅ Loaded 1 package(s)"));
    }
}
