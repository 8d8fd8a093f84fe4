use std::path::PathBuf;

use bscr::{
    bulletin::{self, Config, Context},
    sample::SampleData,
};

#[derive(clap::Parser)]
struct Args {
    /// Run the browser headless.
    #[arg(long)]
    headless: bool,
    /// Seconds to wait for the results pane.
    #[arg(long, default_value_t = 12)]
    timeout: u64,
    /// Tries per course before giving up.
    #[arg(long, default_value_t = 1)]
    attempts: u32,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch the description of a single course.
    Course { prefix: String, suffix: String },
    /// Fetch descriptions for every course in a sample-data dump.
    Sample {
        #[arg(value_name = "courses.json")]
        courses: PathBuf,
        #[arg(value_name = "distances.json")]
        distances: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;

    pretty_env_logger::init_timed();

    let args = Args::parse();

    let driver = bscr::scrape::get_driver(args.headless).await?;
    let ctx = Context::new(
        driver,
        Config {
            timeout: core::time::Duration::from_secs(args.timeout),
            attempts: args.attempts,
        },
    );

    match args.command {
        Commands::Course { prefix, suffix } => {
            let description = bulletin::fetch_description(&prefix, &suffix, &ctx).await;
            println!("{}", description.into_text());
        }
        Commands::Sample { courses, distances } => {
            let data = SampleData::load(&courses, &distances)?;
            tracing::info!(target: "descriptions", "{} courses to look up", data.courses().len());

            let mut found = 0usize;
            for course in data.courses() {
                let description =
                    bulletin::fetch_description(&course.prefix, &course.suffix, &ctx).await;
                found += usize::from(description.is_found());
                tracing::info!(
                    target: "descriptions",
                    "\x1b[36m{}\x1b[0m: {}",
                    course.code(),
                    description.into_text(),
                );
                tokio::time::sleep(const { core::time::Duration::from_millis(2000) }).await;
            }
            tracing::info!(
                target: "descriptions",
                "\x1b[36mdone, {found}/{} descriptions found\x1b[0m",
                data.courses().len(),
            );
        }
    }

    ctx.driver.close().await.map_err(Into::into)
}
