use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

/// CLI arguments for isodb-cli
#[derive(Debug, Parser)]
#[command(
    name = "isodb",
    version,
    about = "CLI for looking up ISO reference data (countries, languages, currencies, ...)"
)]
pub struct CliArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Comma-separated list of fields to display
    #[arg(long, global = true)]
    pub fields: Option<String>,

    /// Limit the number of results
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search countries (ISO 3166-1)
    Countries(CountryQuery),

    /// Search country subdivisions (ISO 3166-2)
    Subdivisions(SubdivisionQuery),

    /// Search former countries (ISO 3166-3)
    FormerCountries(FormerCountryQuery),

    /// Search languages (ISO 639-2)
    Languages(LanguageQuery),

    /// Search currencies (ISO 4217)
    Currencies(CurrencyQuery),

    /// Search script names (ISO 15924)
    Scripts(ScriptQuery),
}

#[derive(Debug, Args)]
#[command(group = ArgGroup::new("query").required(true).multiple(false))]
pub struct CountryQuery {
    /// Country code (alpha-2 or alpha-3)
    #[arg(long, group = "query")]
    pub code: Option<String>,

    /// Country name (substring unless --exact)
    #[arg(long, group = "query")]
    pub name: Option<String>,

    /// Numeric country code
    #[arg(long, group = "query")]
    pub numeric: Option<String>,

    /// Former country name (e.g. Burma)
    #[arg(long = "former-name", group = "query")]
    pub former_name: Option<String>,

    /// List all countries
    #[arg(long, group = "query")]
    pub list_all: bool,

    /// Exact name match only
    #[arg(long)]
    pub exact: bool,
}

#[derive(Debug, Args)]
#[command(group = ArgGroup::new("query").required(true).multiple(false))]
pub struct SubdivisionQuery {
    /// Subdivision code (e.g. US-CA)
    #[arg(long, group = "query")]
    pub code: Option<String>,

    /// Subdivision name (substring unless --exact)
    #[arg(long, group = "query")]
    pub name: Option<String>,

    /// Country code to list subdivisions for
    #[arg(long, group = "query")]
    pub country: Option<String>,

    /// List all subdivisions
    #[arg(long, group = "query")]
    pub list_all: bool,

    /// Exact name match only
    #[arg(long)]
    pub exact: bool,
}

#[derive(Debug, Args)]
#[command(group = ArgGroup::new("query").required(true).multiple(false))]
pub struct FormerCountryQuery {
    /// Former country code (alpha-2, alpha-3 or alpha-4)
    #[arg(long, group = "query")]
    pub code: Option<String>,

    /// Former country name (substring unless --exact)
    #[arg(long, group = "query")]
    pub name: Option<String>,

    /// List all former countries
    #[arg(long, group = "query")]
    pub list_all: bool,

    /// Exact name match only
    #[arg(long)]
    pub exact: bool,
}

#[derive(Debug, Args)]
#[command(group = ArgGroup::new("query").required(true).multiple(false))]
pub struct LanguageQuery {
    /// Language code (alpha-2 or alpha-3)
    #[arg(long, group = "query")]
    pub code: Option<String>,

    /// Language name (substring unless --exact)
    #[arg(long, group = "query")]
    pub name: Option<String>,

    /// List all languages
    #[arg(long, group = "query")]
    pub list_all: bool,

    /// Exact name match only
    #[arg(long)]
    pub exact: bool,
}

#[derive(Debug, Args)]
#[command(group = ArgGroup::new("query").required(true).multiple(false))]
pub struct CurrencyQuery {
    /// Currency code (alpha-3)
    #[arg(long, group = "query")]
    pub code: Option<String>,

    /// Currency name (substring unless --exact)
    #[arg(long, group = "query")]
    pub name: Option<String>,

    /// Numeric currency code
    #[arg(long, group = "query")]
    pub numeric: Option<String>,

    /// List all currencies
    #[arg(long, group = "query")]
    pub list_all: bool,

    /// Exact name match only
    #[arg(long)]
    pub exact: bool,
}

#[derive(Debug, Args)]
#[command(group = ArgGroup::new("query").required(true).multiple(false))]
pub struct ScriptQuery {
    /// Script code (alpha-4, e.g. Latn)
    #[arg(long, group = "query")]
    pub code: Option<String>,

    /// Script name (substring unless --exact)
    #[arg(long, group = "query")]
    pub name: Option<String>,

    /// Numeric script code
    #[arg(long, group = "query")]
    pub numeric: Option<String>,

    /// List all scripts
    #[arg(long, group = "query")]
    pub list_all: bool,

    /// Exact name match only
    #[arg(long)]
    pub exact: bool,
}
