use clap::Parser;

use startup_validator::analysis::cli::ExamplesArgs;
use startup_validator::analysis::scripted::{print_menu, read_selection, run_selection, ExampleSelection};
use startup_validator::analysis::{SectionStyle, StepError};
use startup_validator::client::GroqClient;
use startup_validator::config::Config;
use startup_validator_sdk::{log_error, set_events_enabled};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ExamplesArgs::parse();
    set_events_enabled(args.run.events);

    let config = Config::load()?;
    let client = GroqClient::new(&config);
    let run_config = args.run.run_config(&config, SectionStyle::Rule);

    let selection = match args.selection() {
        Some(parsed) => parsed.ok(),
        None => {
            print_menu();
            let stdin = std::io::stdin();
            read_selection(&mut stdin.lock())?.parse::<ExampleSelection>().ok()
        }
    };

    let Some(selection) = selection else {
        println!("Invalid choice. Please run the script again.");
        std::process::exit(1);
    };

    if let Err(e) = run_selection(&client, &run_config, selection).await {
        if e.downcast_ref::<StepError>().is_none() {
            log_error!("{:#}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
