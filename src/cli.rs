//! Command-line interface: one collection, one derived view, printed to stdout.

use crate::config::AppConfig;
use crate::core::export::write_csv;
use crate::core::finance::{loan_totals, subscription_totals};
use crate::core::report::{format_currency, format_row, format_series, format_summary};
use crate::core::{CategoryFilter, SortDirection, TimeBucket, ViewEngine, ViewParams, ViewSession};
use crate::entities::{
    Application, Expense, KnowledgeEntry, Loan, Record, RecordKind, Script, Subscription, Todo,
};
use crate::errors::Result;
use crate::snapshot::{JsonFileSource, Snapshot, load_snapshot};
use chrono::Local;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "folio-buddy")]
#[command(version, about = "Search, filter, sort and summarize personal records")]
pub struct Cli {
    /// Collection to view (applications, expenses, subscriptions, loans, knowledge, scripts, todos)
    pub collection: RecordKind,

    /// Case-insensitive text search over the collection's searchable fields
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Only records in this category or status ("all" for no filter)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Only favorites
    #[arg(long)]
    pub favorites: bool,

    /// Sort key (collection specific, e.g. status, amount, date)
    #[arg(long, short = 's')]
    pub sort: Option<String>,

    /// Sort direction
    #[arg(long, short = 'd', default_value = "desc")]
    pub direction: SortDirection,

    /// Only records dated in this month (YYYY-MM)
    #[arg(long, short = 'm')]
    pub month: Option<TimeBucket>,

    /// Show at most this many records (the summary still covers the whole view)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, short = 'f', default_value = "table")]
    pub format: OutputFormat,

    /// Also print the twelve-month series
    #[arg(long)]
    pub series: bool,

    /// Directory holding the exported collections (overrides config)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: $FOLIO_CONFIG or config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// How the derived view is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per record, then the summary
    Table,
    /// CSV with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl Cli {
    /// View parameters for record type `R` built from the flags.
    pub fn view_params<R: Record>(&self) -> Result<ViewParams<R::SortKey>> {
        let sort_key = self
            .sort
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(ViewParams::default()
            .with_query(self.query.as_str())
            .with_category(CategoryFilter::parse(self.category.as_deref().unwrap_or("")))
            .favorites_only(self.favorites)
            .sorted_by(sort_key, self.direction)
            .in_month(self.month.clone()))
    }
}

/// Loads the requested collection and writes its derived view to `out`.
pub async fn run<W: Write>(cli: &Cli, config: &AppConfig, out: &mut W) -> Result<()> {
    let data_dir = cli.data_dir.as_ref().unwrap_or(&config.data_dir);
    let source = JsonFileSource::for_kind(data_dir, cli.collection);
    info!("Viewing {} from {}", cli.collection, source.path().display());

    match cli.collection {
        RecordKind::Applications => show::<Application, _>(cli, config, &source, out, no_extras).await,
        RecordKind::Expenses => show::<Expense, _>(cli, config, &source, out, no_extras).await,
        RecordKind::Subscriptions => {
            show::<Subscription, _>(cli, config, &source, out, |subs, out| {
                let totals = subscription_totals(subs);
                writeln!(
                    out,
                    "Active: {} | Monthly: {} | Yearly: {}",
                    totals.active_count,
                    format_currency(totals.monthly),
                    format_currency(totals.yearly)
                )?;
                Ok(())
            })
            .await
        }
        RecordKind::Loans => {
            show::<Loan, _>(cli, config, &source, out, |loans, out| {
                let totals = loan_totals(loans);
                writeln!(
                    out,
                    "Borrowed: {} | Paid: {} | Outstanding: {} | Monthly payments: {}",
                    format_currency(totals.principal),
                    format_currency(totals.paid),
                    format_currency(totals.outstanding),
                    format_currency(totals.monthly_payments)
                )?;
                Ok(())
            })
            .await
        }
        RecordKind::Knowledge => show::<KnowledgeEntry, _>(cli, config, &source, out, no_extras).await,
        RecordKind::Scripts => show::<Script, _>(cli, config, &source, out, no_extras).await,
        RecordKind::Todos => show::<Todo, _>(cli, config, &source, out, no_extras).await,
    }
}

#[allow(clippy::unnecessary_wraps)]
fn no_extras<R, W>(_: &[&R], _: &mut W) -> Result<()> {
    Ok(())
}

async fn show<R, W>(
    cli: &Cli,
    config: &AppConfig,
    source: &JsonFileSource,
    out: &mut W,
    extras: impl FnOnce(&[&R], &mut W) -> Result<()>,
) -> Result<()>
where
    R: Record + Send,
    W: Write,
{
    let snapshot: Snapshot<R> = load_snapshot(source).await?;
    let mut session = ViewSession::new(ViewEngine::from_config(config), snapshot);
    session.set_params(cli.view_params::<R>()?);

    let rendered = session.render();
    let view = &rendered.view;
    let shown = cli
        .limit
        .map_or(view.records.as_slice(), |n| &view.records[..n.min(view.len())]);

    match cli.format {
        OutputFormat::Table => {
            for record in shown {
                writeln!(out, "{}", format_row(*record))?;
            }
            if shown.len() < view.len() {
                writeln!(out, "... {} more", view.len() - shown.len())?;
            }
            writeln!(out)?;
            let with_amounts = view.records.iter().any(|r| r.amount().is_some());
            write!(out, "{}", format_summary(&view.summary, with_amounts))?;
            extras(&view.records, out)?;
        }
        OutputFormat::Csv => write_csv(&mut *out, shown)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, shown)?;
            writeln!(out)?;
        }
    }

    if cli.series {
        let series = session.monthly_series(Local::now().date_naive());
        writeln!(out)?;
        write!(out, "{}", format_series(&series))?;
    }

    Ok(())
}
