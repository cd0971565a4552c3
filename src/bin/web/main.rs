use std::{net::SocketAddr, str::FromStr};

use axum::{
	http::{HeaderValue, Method},
	Router,
};

use post_api::{
	dependencies::{config, connection_pool},
	routes::{create_routes, AppState},
	services::response::ServiceError,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let config = config()?;

	// ! Tracing
	let default_filter = format!("{},tower_http=debug,axum::rejection=trace", config.log_level);
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			default_filter.into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Connections Are Being Pooled...");
	let pool = connection_pool().await?;

	let origins = config
		.allowed_origins()
		.map(|origin| origin.parse::<HeaderValue>().map_err(|err| ServiceError::ConfigError(format!("ALLOW_ORIGINS: {}", err))))
		.collect::<Result<Vec<_>, _>>()?;

	let app: Router = create_routes(AppState::postgres(pool.clone()))
		.layer(CorsLayer::new().allow_origin(origins).allow_methods([Method::POST]))
		.layer(TraceLayer::new_for_http());

	let addr = SocketAddr::from_str(&config.server_ip_port).map_err(|err| ServiceError::ConfigError(format!("SERVER_IP_PORT: {}", err)))?;
	tracing::info!("Start Web Server on {}...", addr);
	axum::Server::bind(&addr).serve(app.into_make_service()).await?;
	Ok(())
}
