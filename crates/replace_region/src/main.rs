use anyhow::Result;

use region_store::FsTextStore;
use replace_region::logging::init_logging;
use replace_region::{build_cli, run, AppConfig, Outcome};

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches)?;
    init_logging(config.verbose);
    tracing::debug!(?config, "resolved configuration");

    match run(&config, &FsTextStore)? {
        // Region and preview go out verbatim so they can be piped.
        Outcome::Extracted(region) => print!("{}", region),
        Outcome::Previewed(text) => print!("{}", text),
        Outcome::Written { path, bytes } => {
            println!("Replaced region in {} ({} bytes written)", path.display(), bytes);
        }
    }
    Ok(())
}
