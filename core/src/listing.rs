//! Text rendering of the project register.

use gradebook_common::project::Project;

pub const EMPTY_LISTING: &str = "No projects registered.";

/// One `Name: <name>, Grade: <grade>` line per project, in order, without a
/// trailing newline. An empty register renders [`EMPTY_LISTING`].
pub fn render(projects: &[Project]) -> String {
    if projects.is_empty() {
        return EMPTY_LISTING.to_string();
    }

    projects
        .iter()
        .map(Project::to_string)
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn status_summary(count: usize) -> String {
    format!("List updated. Total: {count}")
}
