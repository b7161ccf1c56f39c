use clap::Parser;

#[derive(Parser)]
#[command(name = "ytts", about = "YouTube transcript extraction service", version)]
pub struct Cli {
    /// Address to bind (overrides config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Preferred caption language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Timeout for outbound YouTube requests, in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
