use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DATA_PATH: &str = "data/salaries.json";

#[derive(Parser, Debug)]
#[command(
    name = "salary-tables",
    version,
    about = "Summarise salary survey data by year and job title"
)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_DATA_PATH, help = "Path to the salary dataset (JSON array)")]
    pub data: PathBuf,
    #[arg(long = "year", help = "Candidate year for the summary table (repeatable)")]
    pub years: Vec<i32>,
    #[arg(long, help = "Drill down into the job titles of this year")]
    pub select: Option<i32>,
    #[arg(long, help = "Only list records with this job title")]
    pub title: Option<String>,
    #[arg(long, help = "Column to sort by (year, count, average, title, jobs)")]
    pub sort: Option<String>,
    #[arg(long, help = "Sort descending")]
    pub desc: bool,
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Drill-down page to show, starting at 1"
    )]
    pub page: u32,
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Rows per drill-down page"
    )]
    pub page_size: Option<u32>,
    #[arg(long, help = "Skip record validation")]
    pub no_validate: bool,
    #[arg(long, help = "List the distinct job titles and exit")]
    pub list_titles: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}
