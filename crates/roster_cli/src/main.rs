//! Command-line probe over a roster dataset.
//!
//! # Responsibility
//! - Load a roster JSON file and print list, detail or featured views.
//! - Keep output plain and deterministic for quick local checks.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use roster_core::{
    current_week, default_log_level, init_logging, BrowseConfig, FilterCriteria, ProfileRecord, Roster,
    RosterService, PAGE_SIZE_DEFAULT,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse leader profiles from a roster dataset", version)]
struct Cli {
    /// Path to the roster JSON array
    roster: PathBuf,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one filtered list page
    List {
        /// Substring matched against name or title
        #[arg(short, long, default_value = "")]
        query: String,

        /// all | 1910-1945 | 1945-1975 | 1975-1986 | 1986-present
        #[arg(short, long, default_value = "all")]
        period: String,

        /// all | chinh_tri | quan_su | ngoai_giao | tu_tuong | kinh_te
        #[arg(short, long, default_value = "all")]
        domain: String,

        /// 1-indexed page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = PAGE_SIZE_DEFAULT)]
        page_size: usize,
    },
    /// Print the detail view of one profile
    Show { id: u32 },
    /// Print the profile featured for a week of the year
    Featured {
        /// Week number (defaults to the current local week)
        #[arg(long)]
        week: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(default_log_level(), log_dir).context("logging init failed")?;
    }

    let roster = Roster::load(&cli.roster)
        .with_context(|| format!("cannot load roster from {}", cli.roster.display()))?;
    info!(
        "event=cli_roster_load module=cli status=ok count={}",
        roster.len()
    );

    match cli.command {
        Commands::List {
            query,
            period,
            domain,
            page,
            page_size,
        } => {
            let config = BrowseConfig {
                page_size,
                ..BrowseConfig::default()
            };
            let service = RosterService::with_config(&roster, config);
            let criteria = FilterCriteria::from_raw(&query, &period, &domain);
            let listed = service.list_page(&criteria, page);
            for record in &listed.items {
                print_card(record);
            }
            if listed.is_empty_result() {
                println!("no matching profiles");
            }
            println!(
                "page {}/{} ({} matched)",
                listed.page_number, listed.total_pages, listed.total_matched
            );
        }
        Commands::Show { id } => {
            let service = RosterService::new(&roster);
            let detail = service.profile_detail(id)?;
            let record = detail.record;
            print_card(record);
            let info = &record.personal_info;
            println!("  born: {}  died: {}  hometown: {}", info.birth, info.death, info.hometown);
            println!("  active: {} ({})", info.active_period, detail.period);
            for entry in &record.timeline {
                println!("  {}: {}", entry.year, entry.event);
            }
            for item in &detail.displayable_resources {
                let body = item.content.as_deref().or(item.url.as_deref()).unwrap_or("");
                println!("  [{}] {}", item.kind.as_str(), body);
            }
            for related in &detail.related {
                println!("  related: #{} {}", related.id, related.name);
            }
        }
        Commands::Featured { week } => {
            let week = week.unwrap_or_else(current_week);
            match RosterService::new(&roster).featured(week) {
                Some(record) => {
                    println!("week {week}");
                    print_card(record);
                    if let Some(quote) = record.highlighted_quote() {
                        println!("  \"{quote}\"");
                    }
                }
                None => println!("roster is empty"),
            }
        }
    }

    Ok(())
}

fn print_card(record: &ProfileRecord) {
    let labels = record
        .domains
        .iter()
        .map(|domain| domain.label())
        .collect::<Vec<_>>()
        .join(", ");
    println!("#{} {} - {} [{}]", record.id, record.name, record.title, labels);
}
