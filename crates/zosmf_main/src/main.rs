use clap::Parser;
use colored::Colorize;
use zosmf_domain::ResponseBody;
use zosmf_files::Files;
use zosmf_main::{init_tracing, load_profile, run, Cli};

#[tokio::main]
async fn main() {
    if let Err(error) = execute().await {
        eprintln!("{} {}", "ERROR:".red().bold(), error);
        for cause in error.chain().skip(1) {
            eprintln!("  {} {}", "caused by:".yellow(), cause);
        }
        std::process::exit(1);
    }
}

async fn execute() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.clone())?;

    let profile = load_profile(&cli.connection)?;
    let files = Files::new(profile)?;
    let response = run(&files, cli.command).await?;

    eprintln!("{}", format!("{}", response.status).green());
    match response.body {
        ResponseBody::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        ResponseBody::Text(text) => println!("{text}"),
        ResponseBody::Bytes(bytes) => println!("<{} bytes>", bytes.len()),
        ResponseBody::Empty => {}
    }
    Ok(())
}
