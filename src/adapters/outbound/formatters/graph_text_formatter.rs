use super::paint;
use crate::graph_analysis::domain::{
    DependencyGraph, Direction, GraphStatistics, PackageRecord, RankedPackage,
};
use owo_colors::Style;

/// Width of the heavy rules framing statistics and package headers
const RULE_WIDTH: usize = 70;

/// Column width for package names in tabular views
const NAME_WIDTH: usize = 30;

/// GraphTextFormatter adapter for the non-tree graph views
///
/// Produces the statistics summary, root/leaf listings, the full package
/// list and the header shown above a package tree. All output ends with a
/// newline.
pub struct GraphTextFormatter {
    use_color: bool,
}

impl GraphTextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        paint(text, style, self.use_color)
    }

    fn rule(&self, style: Style) -> String {
        self.paint(&"=".repeat(RULE_WIDTH), style)
    }

    /// Summary statistics followed by both rankings
    pub fn statistics(
        &self,
        stats: &GraphStatistics,
        most_depended_on: &[RankedPackage],
        most_dependencies: &[RankedPackage],
        top_n: usize,
    ) -> String {
        let cyan = Style::new().cyan();
        let label = Style::new().yellow();
        let mut out = String::new();

        out.push('\n');
        out.push_str(&self.rule(cyan.bold()));
        out.push('\n');
        out.push_str(&self.paint("DEPENDENCY STATISTICS", cyan.bold()));
        out.push('\n');
        out.push_str(&self.rule(cyan));
        out.push_str("\n\n");

        let rows = [
            ("Total Packages:", stats.total_packages.to_string()),
            ("Total Dependencies:", stats.total_dependencies.to_string()),
            (
                "Average Dependencies per Package:",
                format!("{:.2}", stats.average_dependencies),
            ),
            ("Root Packages (not depended on):", stats.root_count.to_string()),
            ("Leaf Packages (no dependencies):", stats.leaf_count.to_string()),
        ];
        for (name, value) in rows {
            out.push_str(&format!("{} {}\n", self.paint(name, label), value));
        }

        let green = Style::new().green();
        out.push('\n');
        out.push_str(&self.paint(
            &format!("Top {} Most Depended On Packages:", top_n),
            green.bold(),
        ));
        out.push('\n');
        self.render_ranking(&mut out, most_depended_on, green, "packages");

        let magenta = Style::new().magenta();
        out.push('\n');
        out.push_str(&self.paint(
            &format!("Top {} Packages with Most Dependencies:", top_n),
            magenta.bold(),
        ));
        out.push('\n');
        self.render_ranking(&mut out, most_dependencies, magenta, "dependencies");

        out.push('\n');
        out.push_str(&self.rule(cyan));
        out.push_str("\n\n");
        out
    }

    fn render_ranking(
        &self,
        out: &mut String,
        ranking: &[RankedPackage],
        style: Style,
        unit: &str,
    ) {
        let dim = Style::new().dimmed();
        for (i, ranked) in ranking.iter().enumerate() {
            out.push_str(&format!(
                "  {} {} {}\n",
                self.paint(&format!("{:2}.", i + 1), dim),
                self.paint(&format!("{:<NAME_WIDTH$}", ranked.name), style),
                self.paint(&format!("({} {})", ranked.count, unit), dim)
            ));
        }
    }

    /// Root packages with their own dependency counts
    pub fn roots(&self, graph: &DependencyGraph, roots: &[String]) -> String {
        let green = Style::new().green();
        let mut out = format!(
            "\n{}\n{}\n\n",
            self.paint(&format!("Root Packages ({}):", roots.len()), green.bold()),
            self.paint(
                "(Packages not depended on by any other package)",
                Style::new().dimmed()
            )
        );
        for name in roots {
            let count = graph.get(name).map_or(0, |r| r.dependencies().len());
            out.push_str(&format!(
                "  {} {}\n",
                self.paint(&format!("{:<NAME_WIDTH$}", name), green),
                self.paint(&format!("({} dependencies)", count), Style::new().dimmed())
            ));
        }
        out
    }

    /// Leaf packages with how many packages require them
    pub fn leaves(&self, graph: &DependencyGraph, leaves: &[String]) -> String {
        let cyan = Style::new().cyan();
        let mut out = format!(
            "\n{}\n{}\n\n",
            self.paint(&format!("Leaf Packages ({}):", leaves.len()), cyan.bold()),
            self.paint("(Packages with no dependencies)", Style::new().dimmed())
        );
        for name in leaves {
            let count = graph.get(name).map_or(0, |r| r.required_by().len());
            out.push_str(&format!(
                "  {} {}\n",
                self.paint(&format!("{:<NAME_WIDTH$}", name), cyan),
                self.paint(&format!("(required by {})", count), Style::new().dimmed())
            ));
        }
        out
    }

    /// Every package sorted by name with version and edge counts
    pub fn list(&self, graph: &DependencyGraph) -> String {
        let mut records: Vec<&PackageRecord> = graph.records().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));

        let mut out = format!(
            "\n{}\n\n",
            self.paint(
                &format!("ALL PACKAGES ({} total)", records.len()),
                Style::new().bold().cyan()
            )
        );
        for record in records {
            let line = format!(
                "{} {} {} {}",
                self.paint(&format!("{:<NAME_WIDTH$}", record.name()), Style::new().green()),
                self.paint(&format!("v{:<15}", record.version()), Style::new().dimmed()),
                self.paint(
                    &format!("deps:{:<3}", record.dependencies().len()),
                    Style::new().yellow()
                ),
                self.paint(
                    &format!("required_by:{:<3}", record.required_by().len()),
                    Style::new().cyan()
                )
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    /// Header block shown above a package tree, followed by the tree heading
    pub fn package_header(&self, record: &PackageRecord, direction: Direction) -> String {
        let blue = Style::new().blue();
        let label = Style::new().yellow();
        let mut out = String::new();

        out.push('\n');
        out.push_str(&self.rule(blue.bold()));
        out.push('\n');
        out.push_str(&format!(
            "{}{}\n",
            self.paint("Package: ", Style::new().bold()),
            self.paint(record.name(), Style::new().green())
        ));
        if !record.version().is_empty() {
            out.push_str(&format!("{} {}\n", self.paint("Version:", label), record.version()));
        }
        if !record.description().is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                self.paint("Description:", label),
                record.description()
            ));
        }
        out.push_str(&self.rule(blue));
        out.push_str("\n\n");

        let heading = match direction {
            Direction::Forward => self.paint(
                &format!("Dependencies for {}:", record.name()),
                Style::new().bold().green(),
            ),
            Direction::Reverse => self.paint(
                &format!("Reverse Dependencies (what depends on {}):", record.name()),
                Style::new().bold().cyan(),
            ),
        };
        out.push_str(&heading);
        out.push_str("\n\n");
        out
    }
}
