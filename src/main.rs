mod cli;
mod settings;
mod workflow;

use anyhow::{Result, anyhow};
use cli::{parse_cli, print_banner, print_outcome, print_papers, print_subscribe_outcome};
use workflow::Workflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    sitesearch::logging::initialize()?;

    let workflow = Workflow::from_config(resolved)?;

    if let Some(email) = &cli.subscribe {
        let outcome = workflow.subscribe(email)?;
        return print_subscribe_outcome(cli.output, outcome);
    }

    if cli.banner {
        let banner = workflow.fetch_banner()?;
        return print_banner(cli.output, banner.as_ref());
    }

    if cli.once {
        let query = cli
            .query
            .as_deref()
            .ok_or_else(|| anyhow!("--once requires --query"))?;
        let papers = workflow.run_once(query)?;
        return print_papers(cli.output, query, &papers);
    }

    let outcome = workflow.run_interactive()?;
    print_outcome(cli.output, &outcome)
}
