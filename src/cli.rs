use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use smashgg_results::constants::SMASHGG_SOURCE;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches the configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_endpoint.is_some()
        || args.new_api_token.is_some()
        || args.new_site_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// smash.gg tournament results lookup
///
/// Resolves tournament or event URLs (short links included), searches the
/// entrants for each requested player and prints the standings as JSON.
///
/// Ambiguous searches are reported in the event's `errors` list instead of
/// failing the whole lookup.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Tournament or event URLs, or bare tournament slugs with --source
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Where the URLs come from. Anything other than "smashgg" is treated as a bare tournament slug.
    #[arg(long, short = 's', default_value = SMASHGG_SOURCE)]
    pub source: String,

    /// Player search term. Repeat for several players; order is preserved.
    #[arg(long = "player", short = 'p', value_name = "SEARCH")]
    pub players: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long, help_heading = "Output")]
    pub pretty: bool,

    /// Update the GraphQL endpoint in config
    #[arg(long = "set-endpoint", help_heading = "Configuration", value_name = "URL")]
    pub new_api_endpoint: Option<String>,

    /// Update the API token in config
    #[arg(long = "set-token", help_heading = "Configuration", value_name = "TOKEN")]
    pub new_api_token: Option<String>,

    /// Update the site domain used for bare slugs and links
    #[arg(long = "set-site-domain", help_heading = "Configuration", value_name = "URL")]
    pub new_site_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
