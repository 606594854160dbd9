//! glass-order - CLI tool to print cut-glass orders as A4 text pages.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use glass_order_rs::{render_plan, validate_order, OrderFile, PrintConfig, SessionInfo};

/// Print cut-glass orders as paginated A4 text pages.
#[derive(Parser, Debug)]
#[command(name = "glass-order")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input order file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output text file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Regular line items per page
    #[arg(long, default_value = "20")]
    items_per_page: usize,

    /// Account (cari) name, overrides the order file
    #[arg(long)]
    account: Option<String>,

    /// Customer name, overrides the order file
    #[arg(long)]
    customer: Option<String>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output the page plan as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if args.items_per_page == 0 {
        warn!("Items per page must be at least 1, using 1");
    }

    info!("Processing: {}", args.input.display());

    let file = OrderFile::load_validated(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!("Loaded {} item(s)", file.items.len());

    let mut order = file.into_order(SessionInfo::generate());
    if let Some(account) = &args.account {
        order.customer_mut().set_account_name(account);
    }
    if let Some(customer) = &args.customer {
        order.customer_mut().set_customer_name(customer);
    }

    for warning in validate_order(&order).warnings {
        warn!("{}", warning);
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let config = PrintConfig::new(args.items_per_page);
    let plan = order.print_plan(&config);
    let totals = order.totals();

    info!(
        "Order {}: {} page(s), {} piece(s), {:.2} m²",
        order.session().order_number,
        plan.total_pages(),
        totals.quantity,
        totals.area
    );

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&plan)?;
        println!("{}", json);
        return Ok(());
    }

    let text = render_plan(&plan, &order.header(), &totals);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}
