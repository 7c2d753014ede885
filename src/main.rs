#![recursion_limit = "256"]

mod config;
mod detector;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    let detector = detector::build(&config.detector, config.detector_timeouts)
        .await
        .expect("detector init failed");

    let state = state::AppState::new(detector, &config);

    // Push the default settings so the detector starts in a known mode.
    {
        let settings = state.settings.read().await.clone();
        if let Err(e) = state.detector.configure(&settings).await {
            tracing::warn!(error = %e, "initial detector settings push failed");
        }
    }

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos pages unavailable; serving API routes only");
            routes::api_routes(state)
        }
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "focus-monitor listening");
    axum::serve(listener, app).await.expect("server failed");
}
