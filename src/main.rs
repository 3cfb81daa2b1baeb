use clap::Parser;
use log::info;

use employee_pairs::config::{resolve_today, Cli, Command, ReportArgs};
use employee_pairs::display::{print_report, write_report_to_file};
use employee_pairs::export::export_report_to_csv;
use employee_pairs::logging::init_logging;
use employee_pairs::pairing::pair_projects_from_table;
use employee_pairs::parser::read_table_from_path;
use employee_pairs::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _logger = init_logging(&cli.log_level)?;

    match cli.command {
        Command::Serve(args) => {
            println!("Starting web server on port {}...", args.port);
            println!("Access the site at http://localhost:{}", args.port);
            web::start_server(args.bind, args.port, args.today).await?;
        }
        Command::Report(args) => run_report(&args)?,
    }

    Ok(())
}

fn run_report(args: &ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let today = resolve_today(args.today);
    info!("Loading assignments from {} (open-ended until {})", args.csv.display(), today);

    let table = read_table_from_path(&args.csv)?;
    if table.is_empty() {
        println!("No assignment rows in {}", args.csv.display());
    }
    let rows = pair_projects_from_table(&table, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_report(&rows);
    }

    if let Some(path) = &args.output {
        write_report_to_file(&rows, path)?;
        println!("Report saved to {}", path.display());
    }
    if let Some(path) = &args.csv_out {
        export_report_to_csv(&rows, path)?;
        println!("CSV saved to {}", path.display());
    }

    Ok(())
}
