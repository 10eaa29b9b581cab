mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use serde_json::json;

use cli::Cli;
use salary_tables::table::{
    GroupColumn, SortOrder, YearColumn, render_group_counts, render_year_summaries,
    sort_group_counts, sort_year_summaries,
};
use salary_tables::{SalaryTablesConfig, TableView, load_records};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SalaryTablesConfig::default().with_validation(!cli.no_validate);
    if !cli.years.is_empty() {
        config = config.with_candidate_years(cli.years.clone());
    }
    if let Some(page_size) = cli.page_size {
        config = config.with_page_size(page_size as usize);
    }
    config.validate()?;
    if let Some(sort) = cli.sort.as_deref() {
        if sort.parse::<YearColumn>().is_err() && sort.parse::<GroupColumn>().is_err() {
            bail!("unknown sort column '{sort}'");
        }
    }
    info!("{}", config.to_string().trim_end());

    let records = load_records(&cli.data, config.validate_records)
        .with_context(|| format!("loading {}", cli.data.display()))?;

    if cli.list_titles {
        let titles = salary_tables::unique_categories(&records);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&titles)?);
        } else {
            titles.iter().for_each(|title| println!("{title}"));
        }
        return Ok(());
    }

    let mut view = TableView::new(records, config)?;
    if cli.title.is_some() {
        view.on_category_filter_changed(cli.title.as_deref());
    }
    if let Some(year) = cli.select {
        view.on_year_activated(year);
    }

    let order = if cli.desc {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    let year_rows = match cli.sort.as_deref().map(str::parse::<YearColumn>) {
        Some(Ok(column)) => sort_year_summaries(view.year_rows(), column, order),
        _ => view.year_rows().to_vec(),
    };
    let page_index = cli.page as usize - 1;
    let drill_down = view.selection().year().and_then(|year| {
        let rows = view.drill_down_rows()?;
        let rows = match cli.sort.as_deref().map(str::parse::<GroupColumn>) {
            Some(Ok(column)) => sort_group_counts(rows, column, order),
            _ => rows.to_vec(),
        };
        Some((
            year,
            salary_tables::table::paginate(&rows, view.config().page_size, page_index),
        ))
    });

    if cli.json {
        let mut out = json!({ "years": year_rows });
        if let Some((year, page)) = &drill_down {
            out["selected_year"] = json!(year);
            out["job_titles"] = serde_json::to_value(page)?;
        }
        if let Some(title) = view.category_filter() {
            out["title_filter"] = json!(title);
            out["records"] = serde_json::to_value(view.filtered_records())?;
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_year_summaries(&year_rows));
        if let Some((year, page)) = &drill_down {
            println!();
            print!("{}", render_group_counts(*year, page));
        }
        if let Some(title) = view.category_filter() {
            println!();
            println!(
                "{} records with job title {title}",
                view.filtered_records().len()
            );
        }
    }

    Ok(())
}
