//! skill-merge: merge two skill-name JSON maps into one

use anyhow::Result;

fn main() -> Result<()> {
    skill_merge::cli::run()
}
