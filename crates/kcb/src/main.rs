use std::{path::Path, sync::Arc};

use kcb_core::config::{load_dotenv_if_present, Config};

#[tokio::main]
async fn main() -> Result<(), kcb_core::Error> {
    // Before logging, so `RUST_LOG` from `.env` applies.
    load_dotenv_if_present(Path::new(".env"));
    kcb_core::logging::init("kcb")?;

    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            tracing::error!(error = %e, "refusing to start");
            return Err(e);
        }
    };

    kcb_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| kcb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
