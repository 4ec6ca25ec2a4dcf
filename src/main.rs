use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use govtrack::core::format::format_inr;
use govtrack::core::stats;
use govtrack::core::store::{FixtureStore, ProjectRepository};
use govtrack::Route;

#[derive(Parser)]
#[command(name = "govtrack")]
#[command(about = "Multi-role dashboard for tracking government infrastructure projects")]
struct Cli {
    /// Route path to open at startup, e.g. /admin/dashboard
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Print the sample project table and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose log output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "govtrack=debug"
    } else {
        "govtrack=info"
    };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if args.list {
        return print_project_table();
    }

    let route = Route::parse(&args.route);
    info!("opening GovTrack at {}", route.path());

    #[cfg(feature = "gui")]
    govtrack::gui::run(route).map_err(|e| anyhow::anyhow!("failed to start GUI: {e}"))?;

    #[cfg(not(feature = "gui"))]
    println!("Built without the `gui` feature; use --list to inspect the sample data.");

    Ok(())
}

fn print_project_table() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let store = FixtureStore::new();
    let projects = runtime.block_on(store.get_projects())?;

    println!("{:<8} {:<32} {:<12} {:<10} {:>5}  {}", "ID", "Name", "Category", "Status", "Prog", "Budget");
    for project in &projects {
        println!(
            "{:<8} {:<32} {:<12} {:<10} {:>4}%  {}",
            project.id,
            project.name,
            project.category.label(),
            project.status.label(),
            project.clamped_progress(),
            format_inr(project.budget),
        );
    }

    let counts = stats::status_counts(&projects);
    println!(
        "\n{} projects ({} on track, {} delayed, {} completed), total budget {}, average progress {}%",
        counts.total,
        counts.on_track,
        counts.delayed,
        counts.completed,
        format_inr(stats::total_budget(&projects)),
        stats::average_progress(&projects),
    );

    Ok(())
}
