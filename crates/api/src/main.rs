use recgate_api::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            recgate_observability::init();
            tracing::error!(error = %e, "invalid configuration");
            return Err(e.into());
        }
    };

    recgate_observability::init_with(settings.log_format);

    // Resolve before binding so no request ever waits on it.
    let app = recgate_api::app();

    recgate_api::server::serve(&settings, app).await
}
