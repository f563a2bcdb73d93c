use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use greenroute::{GreenRouteConfig, TripPlanner};

const RESULT_DELIMITER: &str = "----------------------------------------";

#[tokio::main]
async fn main() -> Result<()> {
    let config = match GreenRouteConfig::load() {
        Ok(config) => config,
        Err(err) => {
            // Errors are reported in the output, not via exit code
            println!("{err:#}");
            return Ok(());
        }
    };
    init_tracing(&config.logging.level);

    // `greenroute serve [port]` starts the web-form variant
    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("serve") {
        let port = args.next().and_then(|port| port.parse().ok()).unwrap_or(8080);
        return greenroute::web::run(config, port).await;
    }

    run_interactive(&config).await
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("greenroute={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run_interactive(config: &GreenRouteConfig) -> Result<()> {
    println!("=== GreenRoute: cool route planner ===");

    // Missing credential halts here, before any network call
    let planner = match TripPlanner::from_config(config) {
        Ok(planner) => planner,
        Err(err) => {
            println!("{}", err.user_message());
            return Ok(());
        }
    };

    let stdin = io::stdin();
    loop {
        let Some(start) = prompt_line(&stdin, "Enter Starting City: ")? else {
            break;
        };
        if start.is_empty() {
            break;
        }
        let Some(destination) = prompt_line(&stdin, "Enter Destination: ")? else {
            break;
        };
        if destination.is_empty() {
            println!("Destination must not be empty.");
            continue;
        }

        println!("Planning a cool route from {start} to {destination}...");
        println!("{RESULT_DELIMITER}");
        match planner.plan(&start, &destination).await {
            Ok(trip_plan) => println!("{}", trip_plan.advisory),
            Err(err) => println!("{}", err.user_message()),
        }
        println!("{RESULT_DELIMITER}");
    }

    Ok(())
}

/// Prompt for one line of input; `None` signals EOF
fn prompt_line(stdin: &io::Stdin, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
