use super::paint;
use crate::graph_analysis::domain::{Direction, NodeStatus, TraversalNode};
use owo_colors::Style;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const GUIDE: &str = "│   ";
const BLANK: &str = "    ";

/// Display options for rendered trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub show_versions: bool,
    pub use_color: bool,
}

/// TreeRenderer turns a traversal's node stream into text lines
///
/// Rendering is a pure function of the node sequence: indentation is
/// rebuilt from the `is_last` flags of the ancestors seen so far, which is
/// sound because traversals emit nodes in pre-order.
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders every node, one string per line
    pub fn render<I>(&self, nodes: I) -> Vec<String>
    where
        I: IntoIterator<Item = TraversalNode>,
    {
        let mut ancestors = Vec::new();
        nodes
            .into_iter()
            .map(|node| self.next_line(&mut ancestors, &node))
            .collect()
    }

    /// Lazily renders nodes as they are pulled from the traversal
    pub fn lines<'r, I>(&'r self, nodes: I) -> impl Iterator<Item = String> + 'r
    where
        I: IntoIterator<Item = TraversalNode>,
        I::IntoIter: 'r,
    {
        let mut ancestors = Vec::new();
        nodes
            .into_iter()
            .map(move |node| self.next_line(&mut ancestors, &node))
    }

    /// `ancestors` holds the `is_last` flag of each open level above `node`
    fn next_line(&self, ancestors: &mut Vec<bool>, node: &TraversalNode) -> String {
        ancestors.truncate(node.depth);
        let line = self.render_line(ancestors, node);
        ancestors.push(node.is_last);
        line
    }

    fn render_line(&self, ancestors: &[bool], node: &TraversalNode) -> String {
        let prefix: String = ancestors
            .iter()
            .map(|&is_last| if is_last { BLANK } else { GUIDE })
            .collect();
        let connector = if node.is_last { LAST_BRANCH } else { BRANCH };
        let dim = Style::new().dimmed();

        match node.status {
            NodeStatus::NotFound => format!(
                "{}{}{} {}",
                prefix,
                self.paint(connector, dim),
                self.paint(&node.name, Style::new().red()),
                self.paint("(not found)", dim)
            ),
            NodeStatus::Circular => format!(
                "{}{}{}{} {}",
                prefix,
                connector,
                self.paint(&node.name, Style::new().yellow()),
                self.version_suffix(node),
                self.paint("(circular)", dim)
            ),
            NodeStatus::Found => {
                let name_style = match node.direction {
                    Direction::Forward => Style::new().green(),
                    Direction::Reverse => Style::new().cyan(),
                };
                format!(
                    "{}{}{}{}{}",
                    prefix,
                    connector,
                    self.paint(&node.name, name_style),
                    self.version_suffix(node),
                    self.count_suffix(node)
                )
            }
        }
    }

    fn version_suffix(&self, node: &TraversalNode) -> String {
        if !self.options.show_versions || node.version.is_empty() {
            return String::new();
        }
        format!(
            " {}",
            self.paint(&format!("({})", node.version), Style::new().dimmed())
        )
    }

    fn count_suffix(&self, node: &TraversalNode) -> String {
        if node.child_count == 0 {
            return String::new();
        }
        let label = match node.direction {
            Direction::Forward => format!("[{} deps]", node.child_count),
            Direction::Reverse => format!("[required by {}]", node.child_count),
        };
        format!(" {}", self.paint(&label, Style::new().dimmed()))
    }

    fn paint(&self, text: &str, style: Style) -> String {
        paint(text, style, self.options.use_color)
    }
}
